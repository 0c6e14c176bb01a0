//! Core domain types for the code-breaking game
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod color;
mod config;
mod error;
mod feedback;

pub use code::{Code, MAX_SLOTS};
pub use color::{COLOR_NAMES, Color, MAX_COLORS};
pub use config::{ATTEMPT_RANGE, COLOR_RANGE, GameConfig, SLOT_RANGE};
pub use error::{GameError, InputError};
pub use feedback::Feedback;
