//! Game state machine
//!
//! Owns the secret, the guess history, the attempt budget and terminal status.

mod engine;
mod state;

pub use engine::GameEngine;
pub use state::{GameState, GameStatus, GuessRecord};
