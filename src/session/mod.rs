//! Session orchestration
//!
//! A session wires one game engine to one agent. Guesses may come from the
//! agent (`play_turn`) or straight from the caller (`submit_guess`); either way
//! scoring and termination stay inside the engine. Sessions share nothing, so
//! several can run side by side.

use crate::agent::{Agent, AgentStats};
use crate::core::{Code, Feedback, GameConfig, GameError};
use crate::game::{GameEngine, GameState, GameStatus};
use log::debug;
use rand::Rng;
use rand::rngs::StdRng;

/// What happened to one submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub feedback: Feedback,
    pub over: bool,
    pub won: bool,
    /// Guesses made so far, including this one
    pub attempts: usize,
}

/// One player's series of games
pub struct Session<A: Agent = Box<dyn Agent>, R: Rng = StdRng> {
    engine: GameEngine<R>,
    agent: A,
    stats: AgentStats,
}

impl<A: Agent, R: Rng> Session<A, R> {
    /// Start a session with its first game already running
    ///
    /// # Examples
    /// ```
    /// use codebreaker::agent::EntropyAgent;
    /// use codebreaker::core::GameConfig;
    /// use codebreaker::session::Session;
    /// use codebreaker::solver::SolverConfig;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let config = GameConfig::new(4, 4, 10).unwrap();
    /// let agent = EntropyAgent::new(&config, SolverConfig::default(), StdRng::seed_from_u64(1));
    /// let mut session = Session::new(config, agent, StdRng::seed_from_u64(2));
    ///
    /// let last = session.play_out().unwrap().unwrap();
    /// assert!(last.over);
    /// assert!(session.secret_for_reveal().is_some());
    /// ```
    pub fn new(config: GameConfig, mut agent: A, rng: R) -> Self {
        agent.reset(&config);
        Self {
            engine: GameEngine::new(config, rng),
            agent,
            stats: AgentStats::new(),
        }
    }

    /// Throw away the current game and start a new one
    ///
    /// `GameConfig` can only be built through its validating constructor, so the
    /// engine never sees an out-of-range shape.
    pub fn start_game(&mut self, config: GameConfig) {
        self.engine.reset(config);
        self.agent.reset(&config);
        debug!(
            "new game: {} colors, {} slots, {} attempts",
            config.num_colors(),
            config.num_slots(),
            config.max_attempts()
        );
    }

    /// Submit a guess on behalf of whoever is playing
    ///
    /// The agent is told about the feedback, and a finished game is added to
    /// the statistics.
    ///
    /// # Errors
    /// Propagates `GameError::GameOver` and `GameError::InvalidInput` from the
    /// engine.
    pub fn submit_guess(&mut self, guess: &Code) -> Result<Outcome, GameError> {
        let feedback = self.engine.submit_guess(guess)?;
        self.agent.on_feedback(guess, feedback);

        let status = self.engine.status();
        let attempts = self.engine.history().len();
        if status.is_over() {
            self.stats.record_game(status == GameStatus::Won, attempts);
        }

        Ok(Outcome {
            feedback,
            over: status.is_over(),
            won: status == GameStatus::Won,
            attempts,
        })
    }

    /// Let the agent make one guess
    ///
    /// Returns `Ok(None)` when the agent has nothing to submit, e.g. a manual
    /// guess that is still incomplete.
    ///
    /// # Errors
    /// Returns `GameError::GameOver` if the game has already ended, or
    /// `GameError::InvalidInput` if the agent proposed an unusable code.
    pub fn play_turn(&mut self) -> Result<Option<Outcome>, GameError> {
        if self.engine.is_over() {
            return Err(GameError::GameOver);
        }

        let state = self.engine.state();
        match self.agent.propose_next_guess(&state) {
            Some(guess) => self.submit_guess(&guess).map(Some),
            None => Ok(None),
        }
    }

    /// Let the agent play until the game ends or it stops proposing
    ///
    /// Returns the last outcome, or `None` if no guess was made.
    ///
    /// # Errors
    /// Same as [`Session::play_turn`].
    pub fn play_out(&mut self) -> Result<Option<Outcome>, GameError> {
        let mut last = None;
        while !self.engine.is_over() {
            match self.play_turn()? {
                Some(outcome) => last = Some(outcome),
                None => break,
            }
        }
        Ok(last)
    }

    /// Snapshot of the current game
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.engine.state()
    }

    /// The secret once the game has ended, otherwise `None`
    #[must_use]
    pub const fn secret_for_reveal(&self) -> Option<&Code> {
        self.engine.revealed_secret()
    }

    /// Fix the secret of a game before its first guess
    ///
    /// # Errors
    /// See [`GameEngine::set_secret`].
    pub fn set_secret(&mut self, secret: Code) -> Result<(), GameError> {
        self.engine.set_secret(secret)
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    /// Hand the game to a different agent
    ///
    /// The new agent is reset to the current configuration and the running
    /// game continues. Statistics start over. Returns the previous agent.
    pub fn set_agent(&mut self, mut agent: A) -> A {
        agent.reset(self.engine.config());
        debug!("agent switched to {}", agent.name());
        self.stats = AgentStats::new();
        std::mem::replace(&mut self.agent, agent)
    }

    #[must_use]
    pub const fn agent(&self) -> &A {
        &self.agent
    }

    pub const fn agent_mut(&mut self) -> &mut A {
        &mut self.agent
    }

    /// Totals over the games finished in this session
    #[must_use]
    pub const fn stats(&self) -> &AgentStats {
        &self.stats
    }
}
