//! Game state machine
//!
//! The engine owns the secret and the guess history and is the only place
//! that mutates them. Randomness is injected so games are reproducible in tests.

use super::state::{GameState, GameStatus, GuessRecord};
use crate::core::{Code, Feedback, GameConfig, GameError};
use rand::Rng;
use rand::rngs::StdRng;

/// A single game of code breaking
///
/// `InProgress --submit_guess--> InProgress | Won | Lost`. The only way out of
/// a terminal state is [`GameEngine::reset`].
pub struct GameEngine<R: Rng = StdRng> {
    config: GameConfig,
    secret: Code,
    history: Vec<GuessRecord>,
    status: GameStatus,
    rng: R,
}

impl<R: Rng> GameEngine<R> {
    /// Start a game with a freshly drawn secret
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::GameConfig;
    /// use codebreaker::game::{GameEngine, GameStatus};
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut engine = GameEngine::new(GameConfig::default(), StdRng::seed_from_u64(1));
    /// let secret = *engine.state().secret();
    ///
    /// let feedback = engine.submit_guess(&secret).unwrap();
    /// assert!(feedback.is_solved(5));
    /// assert_eq!(engine.status(), GameStatus::Won);
    /// ```
    pub fn new(config: GameConfig, mut rng: R) -> Self {
        let secret = config.random_code(&mut rng);
        Self {
            config,
            secret,
            history: Vec::with_capacity(config.max_attempts()),
            status: GameStatus::InProgress,
            rng,
        }
    }

    /// Start over with a new configuration and a freshly drawn secret
    ///
    /// Each slot of the secret is drawn independently and uniformly from the
    /// palette, so colors may repeat.
    pub fn reset(&mut self, config: GameConfig) {
        self.config = config;
        self.secret = config.random_code(&mut self.rng);
        self.history.clear();
        self.status = GameStatus::InProgress;
    }

    /// Score a guess against the secret and record it
    ///
    /// Transitions to `Won` on an exact match, or to `Lost` when the history
    /// reaches the attempt budget without one.
    ///
    /// # Errors
    /// - `GameError::GameOver` if the game has already ended
    /// - `GameError::InvalidInput` if the guess has the wrong length or uses a
    ///   color outside the palette
    pub fn submit_guess(&mut self, guess: &Code) -> Result<Feedback, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        let feedback = self.config.evaluate(&self.secret, guess)?;
        self.history.push(GuessRecord::new(*guess, feedback));

        if feedback.is_solved(self.config.num_slots()) {
            self.status = GameStatus::Won;
        } else if self.history.len() >= self.config.max_attempts() {
            self.status = GameStatus::Lost;
        }

        Ok(feedback)
    }

    /// Snapshot of the current game
    #[must_use]
    pub fn state(&self) -> GameState {
        GameState {
            config: self.config,
            secret: self.secret,
            history: self.history.clone(),
            status: self.status,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// The secret, but only once the game has ended
    #[must_use]
    pub const fn revealed_secret(&self) -> Option<&Code> {
        if self.status.is_over() {
            Some(&self.secret)
        } else {
            None
        }
    }

    /// Replace the secret of a game that has not started yet
    ///
    /// Used to replay a known code.
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if the code does not fit the
    /// configuration, or `GameError::InvalidConfig` if guesses were already made.
    pub fn set_secret(&mut self, secret: Code) -> Result<(), GameError> {
        if !self.history.is_empty() {
            return Err(GameError::InvalidConfig(
                "secret can only be set before the first guess".to_string(),
            ));
        }
        self.config.validate_code(&secret)?;
        self.secret = secret;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InputError;
    use rand::SeedableRng;

    fn engine(config: GameConfig, seed: u64) -> GameEngine {
        GameEngine::new(config, StdRng::seed_from_u64(seed))
    }

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn new_game_is_in_progress_with_valid_secret() {
        let config = GameConfig::new(6, 4, 10).unwrap();
        let engine = engine(config, 3);

        assert_eq!(engine.status(), GameStatus::InProgress);
        assert!(engine.history().is_empty());
        assert!(config.validate_code(engine.state().secret()).is_ok());
    }

    #[test]
    fn exact_guess_wins_immediately() {
        let config = GameConfig::new(4, 4, 5).unwrap();
        let mut engine = engine(config, 11);
        engine.set_secret(code("red blue green yellow")).unwrap();

        engine.submit_guess(&code("red red red red")).unwrap();
        let feedback = engine.submit_guess(&code("red blue green yellow")).unwrap();

        assert_eq!(feedback, Feedback::new(4, 0));
        assert_eq!(engine.status(), GameStatus::Won);
        assert_eq!(engine.history().len(), 2);
    }

    #[test]
    fn exhausting_attempts_loses() {
        let config = GameConfig::new(4, 4, 5).unwrap();
        let mut engine = engine(config, 5);
        engine.set_secret(code("red blue green yellow")).unwrap();

        for attempt in 1..=5 {
            assert_eq!(engine.status(), GameStatus::InProgress);
            engine.submit_guess(&code("yellow yellow yellow yellow")).unwrap();
            assert_eq!(engine.history().len(), attempt);
        }

        assert_eq!(engine.status(), GameStatus::Lost);
        assert_eq!(engine.revealed_secret(), Some(&code("red blue green yellow")));
    }

    #[test]
    fn winning_on_last_attempt_is_a_win() {
        let config = GameConfig::new(4, 3, 5).unwrap();
        let mut engine = engine(config, 9);
        engine.set_secret(code("red red blue")).unwrap();

        for _ in 0..4 {
            engine.submit_guess(&code("green green green")).unwrap();
        }
        engine.submit_guess(&code("red red blue")).unwrap();

        assert_eq!(engine.status(), GameStatus::Won);
    }

    #[test]
    fn guess_after_game_over_is_rejected() {
        let config = GameConfig::new(4, 3, 5).unwrap();
        let mut engine = engine(config, 2);
        let secret = *engine.state().secret();
        engine.submit_guess(&secret).unwrap();

        assert_eq!(engine.submit_guess(&secret), Err(GameError::GameOver));
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn invalid_guess_is_rejected_without_recording() {
        let config = GameConfig::new(4, 4, 5).unwrap();
        let mut engine = engine(config, 2);

        assert!(matches!(
            engine.submit_guess(&code("red blue green")),
            Err(GameError::InvalidInput(InputError::WrongLength { .. }))
        ));
        assert!(matches!(
            engine.submit_guess(&code("red blue green lime")),
            Err(GameError::InvalidInput(InputError::ColorOutOfPalette { .. }))
        ));
        assert!(engine.history().is_empty());
        assert_eq!(engine.status(), GameStatus::InProgress);
    }

    #[test]
    fn secret_hidden_until_game_over() {
        let mut engine = engine(GameConfig::default(), 4);
        assert!(engine.revealed_secret().is_none());

        let secret = *engine.state().secret();
        engine.submit_guess(&secret).unwrap();
        assert_eq!(engine.revealed_secret(), Some(&secret));
    }

    #[test]
    fn reset_clears_history_and_redraws_secret() {
        let config = GameConfig::new(10, 8, 15).unwrap();
        let mut engine = engine(config, 21);
        let first_secret = *engine.state().secret();
        engine.submit_guess(&first_secret).unwrap();

        engine.reset(config);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert!(engine.history().is_empty());
        let second_secret = *engine.state().secret();

        engine.reset(config);
        assert_eq!(engine.status(), GameStatus::InProgress);
        let third_secret = *engine.state().secret();

        // 10^8 codes: a repeat here would mean the rng is not advancing
        assert_ne!(first_secret, second_secret);
        assert_ne!(second_secret, third_secret);
    }

    #[test]
    fn reset_applies_new_config() {
        let mut engine = engine(GameConfig::default(), 8);
        let smaller = GameConfig::new(4, 3, 6).unwrap();
        engine.reset(smaller);

        assert_eq!(engine.config(), &smaller);
        assert_eq!(engine.state().secret().len(), 3);
        assert_eq!(engine.state().remaining(), 6);
    }

    #[test]
    fn set_secret_only_before_first_guess() {
        let config = GameConfig::new(4, 3, 5).unwrap();
        let mut engine = engine(config, 1);

        assert!(engine.set_secret(code("red red lime")).is_err());
        engine.set_secret(code("red red red")).unwrap();
        engine.submit_guess(&code("blue blue blue")).unwrap();
        assert!(matches!(
            engine.set_secret(code("green green green")),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn snapshot_is_independent_of_later_guesses() {
        let config = GameConfig::new(4, 3, 5).unwrap();
        let mut engine = engine(config, 6);
        engine.set_secret(code("red blue green")).unwrap();

        engine.submit_guess(&code("red red red")).unwrap();
        let snapshot = engine.state();
        engine.submit_guess(&code("blue blue blue")).unwrap();

        assert_eq!(snapshot.attempts(), 1);
        assert_eq!(snapshot.history()[0].feedback(), Feedback::new(1, 0));
        assert_eq!(engine.state().attempts(), 2);
    }
}
