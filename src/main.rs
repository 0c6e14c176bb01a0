//! Codebreaker - CLI
//!
//! Play Mastermind-style code breaking in the terminal, or watch the
//! information-gain solver play.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codebreaker::{
    commands::{SolveConfig, analyze_probe, run_benchmark, run_play, solve_code},
    core::{Code, GameConfig},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{DEFAULT_SAMPLE_CAP, SolverConfig},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

#[derive(Parser)]
#[command(
    name = "codebreaker",
    about = "Mastermind-style code breaking with an information-gain solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Palette size (4-10)
    #[arg(short, long, global = true, default_value_t = 5)]
    colors: u8,

    /// Code length (3-8)
    #[arg(short, long, global = true, default_value_t = 5)]
    slots: u8,

    /// Guesses allowed per game (5-15)
    #[arg(short, long, global = true, default_value_t = 8)]
    attempts: u8,

    /// Most codes the solver samples from the code space
    #[arg(long, global = true, default_value_t = DEFAULT_SAMPLE_CAP)]
    sample_cap: usize,

    /// Seed for every random draw, for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (default)
    Play,

    /// Let the solver crack a code
    Solve {
        /// Secret to crack, e.g. "red blue green blue red" (random if omitted)
        secret: Option<String>,

        /// Show candidate counts and information gain per turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze how well a guess splits the code space
    Analyze {
        /// Code to analyze, e.g. "0 0 1 1 2"
        probe: String,
    },

    /// Benchmark the solver over many random games
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let game = GameConfig::new(cli.colors, cli.slots, cli.attempts)
        .context("Invalid game configuration")?;
    let solver = SolverConfig::new(cli.sample_cap).context("Invalid solver configuration")?;
    let mut rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(game, solver, &mut rng),
        Commands::Solve { secret, verbose } => {
            run_solve_command(game, solver, secret.as_deref(), verbose, &mut rng)
        }
        Commands::Analyze { probe } => run_analyze_command(&game, solver, &probe, &mut rng),
        Commands::Benchmark { count } => run_benchmark_command(game, solver, count, &mut rng),
    }
}

fn parse_code(text: &str) -> Result<Code> {
    text.parse()
        .with_context(|| format!("Could not read '{text}' as a code"))
}

fn run_play_command(game: GameConfig, solver: SolverConfig, rng: &mut StdRng) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_play(game, solver, rng, stdin.lock(), &mut stdout).context("Terminal I/O failed")?;
    Ok(())
}

fn run_solve_command(
    game: GameConfig,
    solver: SolverConfig,
    secret: Option<&str>,
    verbose: bool,
    rng: &mut StdRng,
) -> Result<()> {
    let mut config = SolveConfig::new(game);
    config.solver = solver;
    config.secret = secret.map(parse_code).transpose()?;

    let result = solve_code(&config, rng).context("Solver could not play the game")?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(
    game: &GameConfig,
    solver: SolverConfig,
    probe: &str,
    rng: &mut StdRng,
) -> Result<()> {
    let probe = parse_code(probe)?;
    let result = analyze_probe(game, solver, &probe, rng).context("Cannot analyze this code")?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(
    game: GameConfig,
    solver: SolverConfig,
    count: usize,
    rng: &mut StdRng,
) -> Result<()> {
    println!(
        "Running benchmark on {count} games ({} colors, {} slots, {} attempts)...",
        game.num_colors(),
        game.num_slots(),
        game.max_attempts()
    );

    let result = run_benchmark(game, solver, count, rng, true).context("Benchmark failed")?;
    print_benchmark_result(&result);
    Ok(())
}
