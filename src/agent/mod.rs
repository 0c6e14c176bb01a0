//! Guess-supplying agents
//!
//! A session does not care whether a person or the solver picks the next
//! guess. Both sit behind the [`Agent`] trait.

mod entropy;
mod manual;
mod stats;

pub use entropy::EntropyAgent;
pub use manual::ManualAgent;
pub use stats::AgentStats;

use crate::core::{Code, Feedback, GameConfig};
use crate::game::GameState;

/// Something that can propose guesses and learn from their feedback
pub trait Agent {
    /// Short human-readable name
    fn name(&self) -> &str;

    /// Propose the next guess for the given snapshot
    ///
    /// Returns `None` if the agent has nothing to submit yet (a manual guess
    /// still being composed) or the game is already over.
    fn propose_next_guess(&mut self, state: &GameState) -> Option<Code>;

    /// Observe the feedback a submitted guess received
    fn on_feedback(&mut self, guess: &Code, feedback: Feedback);

    /// Forget the current game and prepare for one of the given shape
    fn reset(&mut self, config: &GameConfig);
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn propose_next_guess(&mut self, state: &GameState) -> Option<Code> {
        (**self).propose_next_guess(state)
    }

    fn on_feedback(&mut self, guess: &Code, feedback: Feedback) {
        (**self).on_feedback(guess, feedback);
    }

    fn reset(&mut self, config: &GameConfig) {
        (**self).reset(config);
    }
}
