//! Running totals over finished games

/// Win/attempt counters for whoever is playing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgentStats {
    pub total_games: usize,
    pub games_won: usize,
    pub total_attempts: usize,
}

impl AgentStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total_games: 0,
            games_won: 0,
            total_attempts: 0,
        }
    }

    /// Count one finished game
    pub const fn record_game(&mut self, won: bool, attempts: usize) {
        self.total_games += 1;
        self.total_attempts += attempts;
        if won {
            self.games_won += 1;
        }
    }

    #[must_use]
    pub const fn games_lost(&self) -> usize {
        self.total_games.saturating_sub(self.games_won)
    }

    /// Percentage of games won, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.games_won as f64 / self.total_games as f64 * 100.0
    }

    /// Mean guesses per game, 0 when nothing was played
    #[must_use]
    pub fn average_attempts(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.total_attempts as f64 / self.total_games as f64
    }
}
