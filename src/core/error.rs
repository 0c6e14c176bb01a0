//! Error types for the game core

use super::Color;
use thiserror::Error;

/// A code or color that cannot be used under the current configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("code must have exactly {expected} colors, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("code has {0} colors, at most 8 are supported")]
    TooManySlots(usize),

    #[error("code is empty")]
    EmptyCode,

    #[error("unknown color '{0}'")]
    UnknownColor(String),

    #[error("color {color} is not in the {num_colors}-color palette")]
    ColorOutOfPalette { color: Color, num_colors: u8 },
}

/// Errors surfaced by the game state machine and session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("the game is already over")]
    GameOver,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
