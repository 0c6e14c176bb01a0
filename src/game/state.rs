//! Game status, guess records and state snapshots

use crate::core::{Code, Feedback, GameConfig};

/// Lifecycle of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Guesses are still accepted
    InProgress,
    /// The secret was guessed
    Won,
    /// The attempt budget ran out
    Lost,
}

impl GameStatus {
    /// Both `Won` and `Lost` are terminal
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One submitted guess and the feedback it earned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRecord {
    guess: Code,
    feedback: Feedback,
}

impl GuessRecord {
    #[must_use]
    pub const fn new(guess: Code, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Code {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }
}

/// Immutable copy of a game at one point in time
///
/// The secret is carried for reveal and diagnostics only. Solving logic must
/// work from `history()` alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(super) config: GameConfig,
    pub(super) secret: Code,
    pub(super) history: Vec<GuessRecord>,
    pub(super) status: GameStatus,
}

impl GameState {
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Guess records, oldest first
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Number of guesses made so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.config.max_attempts()
    }

    /// Guesses left before the game is lost
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.max_attempts().saturating_sub(self.attempts())
    }

    /// The secret code; only meaningful for reveal once the game is over
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }
}
