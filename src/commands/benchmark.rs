//! Benchmark command
//!
//! Plays many games with the entropy agent and summarizes how it did.

use crate::agent::{AgentStats, EntropyAgent};
use crate::core::{GameConfig, GameError};
use crate::session::Session;
use crate::solver::SolverConfig;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub config: GameConfig,
    pub stats: AgentStats,
    /// Fewest guesses in a won game, 0 if nothing was won
    pub min_attempts: usize,
    /// Most guesses in a won game, 0 if nothing was won
    pub max_attempts: usize,
    /// Won games keyed by the number of guesses they took
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play `count` independent games against random secrets
///
/// With `show_progress` an `indicatif` bar tracks the run on stderr.
///
/// # Errors
///
/// Returns a `GameError` if a game rejects one of the agent's guesses, which
/// would indicate a solver bug.
pub fn run_benchmark(
    config: GameConfig,
    solver: SolverConfig,
    count: usize,
    rng: &mut StdRng,
    show_progress: bool,
) -> Result<BenchmarkResult, GameError> {
    let pb = if show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let agent = EntropyAgent::new(&config, solver, StdRng::from_rng(rng));
    let mut session = Session::new(config, agent, StdRng::from_rng(rng));

    let start = Instant::now();
    let mut min_attempts = usize::MAX;
    let mut max_attempts = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for game in 0..count {
        if game > 0 {
            session.start_game(config);
        }

        let outcome = session.play_out()?;
        if let Some(outcome) = outcome.filter(|o| o.won) {
            min_attempts = min_attempts.min(outcome.attempts);
            max_attempts = max_attempts.max(outcome.attempts);
            *distribution.entry(outcome.attempts).or_insert(0) += 1;
        }

        let stats = session.stats();
        pb.set_message(format!(
            "{:.1}% won, {:.2} avg",
            stats.win_rate(),
            stats.average_attempts()
        ));
        pb.inc(1);
    }

    pb.finish_and_clear();
    let duration = start.elapsed();

    if min_attempts == usize::MAX {
        min_attempts = 0;
    }

    Ok(BenchmarkResult {
        config,
        stats: *session.stats(),
        min_attempts,
        max_attempts,
        distribution,
        duration,
        games_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
