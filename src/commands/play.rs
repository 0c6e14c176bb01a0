//! Interactive play
//!
//! Line-based game for a person at the terminal. Guesses go through a
//! `ManualAgent` and the session; `hint` asks an `EntropyAgent` for advice.

use crate::agent::{Agent, AgentStats, EntropyAgent, ManualAgent};
use crate::core::{Code, GameConfig, InputError};
use crate::output::formatters::{paint_code, paint_color, render_pegs};
use crate::session::{Outcome, Session};
use crate::solver::SolverConfig;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, BufRead, Write};

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    Guess(Code),
    Hint,
    New,
    Help,
    Quit,
}

/// Parse a line of input
///
/// Returns `Ok(None)` for a blank line.
///
/// # Errors
///
/// Returns `InputError` if the line is neither a command nor a code.
pub fn parse_command(line: &str) -> Result<Option<PlayCommand>, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let command = match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => PlayCommand::Quit,
        "new" | "n" => PlayCommand::New,
        "hint" | "h" => PlayCommand::Hint,
        "help" | "?" => PlayCommand::Help,
        _ => PlayCommand::Guess(line.parse()?),
    };
    Ok(Some(command))
}

/// Run the interactive game until `quit` or end of input
///
/// Returns the totals over the games finished in this run.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails. Bad guesses
/// are reported to the player and the game goes on.
pub fn run_play<I: BufRead, O: Write>(
    config: GameConfig,
    solver: SolverConfig,
    rng: &mut StdRng,
    input: I,
    out: &mut O,
) -> io::Result<AgentStats> {
    let mut session = Session::new(config, ManualAgent::new(&config), StdRng::from_rng(rng));
    let mut hinter = EntropyAgent::new(&config, solver, StdRng::from_rng(rng));

    print_intro(out, &config)?;
    let mut lines = input.lines();

    loop {
        let state = session.snapshot();
        if state.is_over() {
            write!(out, "{} ", "(new/quit)>".bright_black())?;
        } else {
            write!(
                out,
                "{} ",
                format!("guess {}/{}>", state.attempts() + 1, state.max_attempts()).bright_black()
            )?;
        }
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{} {e}", "✗".red())?;
                continue;
            }
        };

        match command {
            PlayCommand::Quit => break,
            PlayCommand::Help => print_help(out)?,
            PlayCommand::New => {
                session.start_game(config);
                hinter.reset(&config);
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            PlayCommand::Hint => {
                if state.is_over() {
                    writeln!(out, "The game is over. Type 'new' or 'quit'.")?;
                    continue;
                }
                if let Some(hint) = hinter.propose_next_guess(&state) {
                    writeln!(
                        out,
                        "💡 Try {}  ({:.2} bits, {} candidates left)",
                        paint_code(&hint),
                        hinter.last_gain().unwrap_or(0.0),
                        hinter.remaining_candidates()
                    )?;
                }
            }
            PlayCommand::Guess(code) => {
                if state.is_over() {
                    writeln!(out, "The game is over. Type 'new' or 'quit'.")?;
                    continue;
                }
                if let Err(e) = session.agent_mut().set_guess(&code) {
                    writeln!(out, "{} {e}", "✗".red())?;
                    continue;
                }
                match session.play_turn() {
                    Ok(Some(outcome)) => report_outcome(out, &session, &code, outcome)?,
                    Ok(None) => {}
                    Err(e) => writeln!(out, "{} {e}", "✗".red())?,
                }
            }
        }
    }

    let stats = *session.stats();
    if stats.total_games > 0 {
        writeln!(
            out,
            "Played {}, won {} ({:.1}%), {:.2} guesses on average",
            stats.total_games,
            stats.games_won,
            stats.win_rate(),
            stats.average_attempts()
        )?;
    }
    writeln!(out, "👋 Thanks for playing!")?;
    Ok(stats)
}

fn report_outcome<O: Write, R: Rng>(
    out: &mut O,
    session: &Session<ManualAgent, R>,
    guess: &Code,
    outcome: Outcome,
) -> io::Result<()> {
    let num_slots = session.config().num_slots();
    writeln!(
        out,
        "  {}  {}  {}",
        paint_code(guess),
        render_pegs(outcome.feedback, num_slots),
        outcome.feedback.to_string().bright_black()
    )?;

    if outcome.won {
        writeln!(
            out,
            "\n{}",
            format!("✅ Cracked it in {} guesses!", outcome.attempts)
                .green()
                .bold()
        )?;
    } else if outcome.over {
        writeln!(out, "\n{}", "❌ Out of guesses.".red().bold())?;
    }

    if let Some(secret) = session.secret_for_reveal() {
        writeln!(out, "   The code was {}\n", paint_code(secret))?;
    }
    Ok(())
}

fn print_intro<O: Write>(out: &mut O, config: &GameConfig) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {}", "CODEBREAKER".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        "\nFind the {}-color code in {} guesses. Colors may repeat.",
        config.num_slots(),
        config.max_attempts()
    )?;

    let palette: Vec<String> = config
        .palette()
        .map(|c| format!("{}={}", c.index(), paint_color(c)))
        .collect();
    writeln!(out, "Palette: {}", palette.join("  "))?;
    writeln!(
        out,
        "{}\n",
        "Type a code (names or numbers), or 'help'.".bright_black()
    )
}

fn print_help<O: Write>(out: &mut O) -> io::Result<()> {
    writeln!(out, "  red blue green ...   submit a guess by color names")?;
    writeln!(out, "  0 1 2 ...            submit a guess by palette index")?;
    writeln!(out, "  hint                 ask the solver for a suggestion")?;
    writeln!(out, "  new                  start a new game")?;
    writeln!(out, "  quit                 leave")?;
    writeln!(
        out,
        "  {} exact match   {} right color, wrong slot",
        "●".green(),
        "○".yellow()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameEngine;
    use rstest::rstest;

    fn play(config: GameConfig, script: &str) -> (AgentStats, String) {
        let mut out = Vec::new();
        let stats = run_play(
            config,
            SolverConfig::default(),
            &mut StdRng::seed_from_u64(7),
            script.as_bytes(),
            &mut out,
        )
        .unwrap();
        (stats, String::from_utf8(out).unwrap())
    }

    #[rstest]
    #[case("quit", PlayCommand::Quit)]
    #[case("  Q ", PlayCommand::Quit)]
    #[case("new", PlayCommand::New)]
    #[case("HINT", PlayCommand::Hint)]
    #[case("?", PlayCommand::Help)]
    fn parses_commands(#[case] line: &str, #[case] expected: PlayCommand) {
        assert_eq!(parse_command(line), Ok(Some(expected)));
    }

    #[test]
    fn parses_guesses() {
        let expected: Code = "red blue green".parse().unwrap();
        assert_eq!(
            parse_command("Red, blue green"),
            Ok(Some(PlayCommand::Guess(expected)))
        );
        assert_eq!(
            parse_command("0 1 2"),
            Ok(Some(PlayCommand::Guess(expected)))
        );
    }

    #[test]
    fn blank_and_garbage_lines() {
        assert_eq!(parse_command("   "), Ok(None));
        assert!(matches!(
            parse_command("red banana"),
            Err(InputError::UnknownColor(_))
        ));
    }

    #[test]
    fn quit_immediately() {
        let (stats, output) = play(GameConfig::default(), "quit\n");
        assert_eq!(stats.total_games, 0);
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn end_of_input_ends_the_session() {
        let (stats, _) = play(GameConfig::default(), "");
        assert_eq!(stats.total_games, 0);
    }

    #[test]
    fn bad_guesses_are_reported_and_skipped() {
        let config = GameConfig::new(4, 3, 5).unwrap();
        let (stats, output) = play(config, "red blue\nred blue lime\nbanana\nquit\n");

        assert_eq!(stats.total_games, 0);
        assert!(output.contains("must have exactly 3 colors"));
        assert!(output.contains("palette"));
        assert!(output.contains("unknown color"));
    }

    /// Secret of the first game `play` starts
    fn first_secret(config: GameConfig) -> Code {
        let mut rng = StdRng::seed_from_u64(7);
        let engine = GameEngine::new(config, StdRng::from_rng(&mut rng));
        *engine.state().secret()
    }

    #[test]
    fn winning_guess_reveals_secret() {
        let config = GameConfig::new(4, 3, 5).unwrap();
        let secret = first_secret(config);
        let script = format!("{secret}\n{secret}\nquit\n");
        let (stats, output) = play(config, &script);

        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 1);
        assert!(output.contains("Cracked it in 1 guesses"));
        assert!(output.contains("The code was"));
        assert!(output.contains("The game is over"));
    }

    #[test]
    fn losing_game_reveals_secret_and_refuses_more_guesses() {
        let config = GameConfig::new(4, 3, 5).unwrap();
        let secret = first_secret(config);
        let misses: Vec<String> = (0..64)
            .map(|rank| Code::from_rank(rank, 4, 3))
            .filter(|code| *code != secret)
            .take(6)
            .map(|code| code.to_string())
            .collect();
        let script = format!("{}\nquit\n", misses.join("\n"));
        let (stats, output) = play(config, &script);

        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_lost(), 1);
        assert!(output.contains("Out of guesses"));
        assert!(output.contains("The code was"));
        assert!(output.contains("The game is over"));
    }

    #[test]
    fn hint_suggests_a_code() {
        let config = GameConfig::new(4, 3, 8).unwrap();
        let (_, output) = play(config, "hint\nquit\n");
        assert!(output.contains("Try"));
        assert!(output.contains("64 candidates left"));
    }
}
