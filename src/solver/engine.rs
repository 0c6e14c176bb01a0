//! Main solver interface

use super::candidates::{CodeSpace, filter_consistent};
use super::entropy::select_best_guess;
use crate::core::{Code, Feedback, GameConfig, GameError};
use crate::game::GuessRecord;
use log::{debug, warn};
use rand::Rng;
use rand::rngs::StdRng;

/// Default cap on the universe sample
///
/// Covers the whole space for every configuration up to 5000 codes (e.g.
/// 4 colors × 6 slots or 8 colors × 4 slots) and keeps the quadratic probe
/// evaluation to a few seconds at the largest configurations.
pub const DEFAULT_SAMPLE_CAP: usize = 5000;

/// Tunables for the solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    sample_cap: usize,
}

impl SolverConfig {
    /// # Errors
    /// Returns `GameError::InvalidConfig` if `sample_cap` is 0.
    pub fn new(sample_cap: usize) -> Result<Self, GameError> {
        if sample_cap == 0 {
            return Err(GameError::InvalidConfig(
                "sample cap must be at least 1".to_string(),
            ));
        }
        Ok(Self { sample_cap })
    }

    #[must_use]
    pub const fn sample_cap(&self) -> usize {
        self.sample_cap
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            sample_cap: DEFAULT_SAMPLE_CAP,
        }
    }
}

/// Information-gain solver for one game at a time
///
/// Owns the candidate set for the game. The universe sample is drawn lazily on
/// the first request and every observed record filters it incrementally.
pub struct Solver<R: Rng = StdRng> {
    space: CodeSpace,
    config: SolverConfig,
    history: Vec<GuessRecord>,
    candidates: Option<Vec<Code>>,
    rng: R,
}

impl<R: Rng> Solver<R> {
    /// Create a solver for games of the given shape
    pub fn new(game: &GameConfig, config: SolverConfig, rng: R) -> Self {
        Self {
            space: CodeSpace::new(game),
            config,
            history: Vec::new(),
            candidates: None,
            rng,
        }
    }

    /// Forget the current game and adopt a (possibly new) game shape
    pub fn reset(&mut self, game: &GameConfig) {
        self.space = CodeSpace::new(game);
        self.history.clear();
        self.candidates = None;
    }

    /// Record the feedback a guess received
    pub fn observe(&mut self, guess: &Code, feedback: Feedback) {
        let record = GuessRecord::new(*guess, feedback);
        self.history.push(record);

        if let Some(candidates) = self.candidates.as_mut() {
            candidates.retain(|candidate| Feedback::calculate(guess, candidate) == feedback);
            debug!(
                "{} candidates left after {guess} scored {feedback}",
                candidates.len()
            );
        }
    }

    /// Records observed so far
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn space(&self) -> &CodeSpace {
        &self.space
    }

    /// Candidates consistent with every observed record
    ///
    /// Draws the universe sample on first use.
    pub fn candidates(&mut self) -> &[Code] {
        self.ensure_candidates();
        self.candidates.as_deref().unwrap_or_default()
    }

    /// Best next guess together with its expected information gain
    ///
    /// If the candidate set has run dry, one fresh sample is drawn and filtered
    /// against the full history. If that is empty too, a random code is
    /// returned with a gain of 0 and a warning is logged.
    pub fn next_guess(&mut self) -> (Code, f64) {
        self.ensure_candidates();

        let is_empty = self.candidates.as_ref().is_none_or(Vec::is_empty);
        if is_empty && !self.history.is_empty() {
            self.candidates = Some(self.draw_consistent_sample());
        }

        let candidates = self.candidates.take().unwrap_or_default();
        let choice = self.choose_next(&candidates);
        self.candidates = Some(candidates);
        choice
    }

    /// Pick a guess from an explicit candidate set
    ///
    /// An empty set is not an error: a uniformly random code of the configured
    /// shape is returned instead.
    pub fn choose_next(&mut self, candidates: &[Code]) -> (Code, f64) {
        match select_best_guess(candidates) {
            Some((best, gain)) => {
                debug!(
                    "chose {best} with {gain:.3} bits over {} candidates",
                    candidates.len()
                );
                (*best, gain)
            }
            None => {
                let fallback = self.space.random_code(&mut self.rng);
                warn!(
                    "no candidate is consistent with {} observed guesses, guessing {fallback} at random",
                    self.history.len()
                );
                (fallback, 0.0)
            }
        }
    }

    fn ensure_candidates(&mut self) {
        if self.candidates.is_none() {
            self.candidates = Some(self.draw_consistent_sample());
        }
    }

    fn draw_consistent_sample(&mut self) -> Vec<Code> {
        let sample = self
            .space
            .sample_universe(&mut self.rng, self.config.sample_cap());
        let consistent = filter_consistent(&sample, &self.history);
        debug!(
            "sampled {} of {} codes, {} consistent with {} guesses",
            sample.len(),
            self.space.size(),
            consistent.len(),
            self.history.len()
        );
        consistent
    }
}
