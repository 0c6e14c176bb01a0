//! Solve command
//!
//! Lets the entropy agent play one game against a given or random secret and
//! records every turn.

use crate::agent::{Agent, EntropyAgent};
use crate::core::{Code, Feedback, GameConfig, GameError};
use crate::game::GameStatus;
use crate::session::Session;
use crate::solver::SolverConfig;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for solving one code
pub struct SolveConfig {
    pub game: GameConfig,
    pub solver: SolverConfig,
    /// Secret to play against; a random one is drawn if `None`
    pub secret: Option<Code>,
}

impl SolveConfig {
    #[must_use]
    pub fn new(game: GameConfig) -> Self {
        Self {
            game,
            solver: SolverConfig::default(),
            secret: None,
        }
    }
}

/// Result of solving one code
pub struct SolveResult {
    pub success: bool,
    pub secret: Code,
    pub steps: Vec<GuessStep>,
    pub max_attempts: usize,
}

/// A single turn of the solution
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub information_gain: f64,
}

/// Play one game with the entropy agent and trace it
///
/// # Errors
///
/// Returns `GameError::InvalidInput` if the requested secret does not fit the
/// configuration.
pub fn solve_code(config: &SolveConfig, rng: &mut StdRng) -> Result<SolveResult, GameError> {
    let agent = EntropyAgent::new(&config.game, config.solver, StdRng::from_rng(rng));
    let mut session = Session::new(config.game, agent, StdRng::from_rng(rng));

    if let Some(secret) = config.secret {
        session.set_secret(secret)?;
    }

    let mut steps = Vec::with_capacity(config.game.max_attempts());

    while !session.snapshot().is_over() {
        let Some(outcome) = session.play_turn()? else {
            break;
        };

        let snapshot = session.snapshot();
        let Some(record) = snapshot.history().last() else {
            break;
        };

        steps.push(GuessStep {
            guess: *record.guess(),
            feedback: outcome.feedback,
            candidates_before: session.agent().last_pool().unwrap_or_default(),
            candidates_after: session.agent_mut().remaining_candidates(),
            information_gain: session.agent().last_gain().unwrap_or(0.0),
        });
    }

    let snapshot = session.snapshot();
    debug!(
        "{} finished after {} guesses",
        session.agent().name(),
        snapshot.attempts()
    );

    Ok(SolveResult {
        success: snapshot.status() == GameStatus::Won,
        secret: *snapshot.secret(),
        steps,
        max_attempts: snapshot.max_attempts(),
    })
}
