//! Information-gain agent
//!
//! Thin adapter from the [`Agent`] trait to a [`Solver`]. The solver keeps its
//! own copy of the history; before each proposal it is brought up to date with
//! the snapshot so an agent switched in mid-game picks up where the last one
//! left off.

use super::Agent;
use crate::core::{Code, Feedback, GameConfig};
use crate::game::GameState;
use crate::solver::{CodeSpace, Solver, SolverConfig};
use rand::Rng;
use rand::rngs::StdRng;

/// Agent that always guesses the candidate with the highest information gain
pub struct EntropyAgent<R: Rng = StdRng> {
    solver: Solver<R>,
    last_gain: Option<f64>,
    last_pool: Option<usize>,
}

impl<R: Rng> EntropyAgent<R> {
    pub fn new(config: &GameConfig, solver_config: SolverConfig, rng: R) -> Self {
        Self {
            solver: Solver::new(config, solver_config, rng),
            last_gain: None,
            last_pool: None,
        }
    }

    /// Expected information gain of the most recent proposal, in bits
    #[must_use]
    pub const fn last_gain(&self) -> Option<f64> {
        self.last_gain
    }

    /// Size of the candidate set the most recent proposal was chosen from
    ///
    /// Differs from the count before the proposal when the set had run dry and
    /// the solver drew a fresh sample.
    #[must_use]
    pub const fn last_pool(&self) -> Option<usize> {
        self.last_pool
    }

    /// Number of candidates still consistent with the observed history
    pub fn remaining_candidates(&mut self) -> usize {
        self.solver.candidates().len()
    }

    /// Candidates still consistent with the observed history
    pub fn candidates(&mut self) -> &[Code] {
        self.solver.candidates()
    }

    fn sync(&mut self, state: &GameState) {
        let known = self.solver.history().len();
        let history = state.history();

        let diverged = known > history.len()
            || self.solver.history() != &history[..known]
            || *self.solver.space() != CodeSpace::new(state.config());
        if diverged {
            self.solver.reset(state.config());
        }

        let seen = self.solver.history().len();
        for record in &history[seen..] {
            self.solver.observe(record.guess(), record.feedback());
        }
    }
}

impl<R: Rng> Agent for EntropyAgent<R> {
    fn name(&self) -> &str {
        "entropy"
    }

    fn propose_next_guess(&mut self, state: &GameState) -> Option<Code> {
        if state.is_over() {
            return None;
        }
        self.sync(state);

        let (guess, gain) = self.solver.next_guess();
        self.last_gain = Some(gain);
        self.last_pool = Some(self.solver.candidates().len());
        Some(guess)
    }

    fn on_feedback(&mut self, guess: &Code, feedback: Feedback) {
        self.solver.observe(guess, feedback);
    }

    fn reset(&mut self, config: &GameConfig) {
        self.solver.reset(config);
        self.last_gain = None;
        self.last_pool = None;
    }
}
