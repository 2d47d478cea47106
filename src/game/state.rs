//! Session state tracking
//!
//! Maintains:
//! - Attempts left in the current round
//! - Running score and session high score
//! - The current round's secret, when one is kept between guesses

use super::config::GameConfig;

/// Mutable game state for one run of the program
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSession {
    /// Attempts left in the current round
    pub remaining_attempts: u32,
    /// Running score, cleared when a round is lost
    pub score: u32,
    /// Best score seen this session (never decreases)
    pub high_score: u32,
    /// Secret of the current round (only kept under the per-round policy)
    pub secret: Option<u32>,
}

impl GameSession {
    /// Create a fresh session with full attempts and zero scores
    pub fn new(config: &GameConfig) -> Self {
        GameSession {
            remaining_attempts: config.default_attempts,
            score: 0,
            high_score: 0,
            secret: None,
        }
    }

    /// Add the win bonus and raise the high score if it was beaten
    pub fn record_win(&mut self, config: &GameConfig) {
        self.score += self.remaining_attempts * config.points_per_attempt;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        self.start_round(config);
    }

    /// Spend one attempt, returning how many are left
    pub fn consume_attempt(&mut self) -> u32 {
        self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
        self.remaining_attempts
    }

    /// Round lost: the score goes back to zero
    pub fn record_exhausted(&mut self, config: &GameConfig) {
        self.score = 0;
        self.start_round(config);
    }

    /// Reset per-round fields for the next round
    fn start_round(&mut self, config: &GameConfig) {
        self.remaining_attempts = config.default_attempts;
        self.secret = None;
    }

    /// Score label text
    pub fn score_label(&self) -> String {
        format!("Score: {}", self.score)
    }

    /// High score label text
    pub fn high_score_label(&self) -> String {
        format!("High Score: {}", self.high_score)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(&GameConfig::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = GameSession::default();
        assert_eq!(session.remaining_attempts, 5);
        assert_eq!(session.score, 0);
        assert_eq!(session.high_score, 0);
        assert_eq!(session.secret, None);
    }

    #[test]
    fn test_win_after_misses_scores_remaining_attempts() {
        let config = GameConfig::DEFAULT;
        let mut session = GameSession::new(&config);
        session.consume_attempt();
        session.consume_attempt();
        session.record_win(&config);
        assert_eq!(session.score, 30);
        assert_eq!(session.high_score, 30);
        assert_eq!(session.remaining_attempts, 5);
    }

    #[test]
    fn test_exhausted_keeps_high_score() {
        let config = GameConfig::DEFAULT;
        let mut session = GameSession::new(&config);
        session.record_win(&config);
        session.record_exhausted(&config);
        assert_eq!(session.score, 0);
        assert_eq!(session.high_score, 50);
        assert_eq!(session.remaining_attempts, 5);
    }

    #[test]
    fn test_labels() {
        let mut session = GameSession::default();
        session.score = 70;
        session.high_score = 120;
        assert_eq!(session.score_label(), "Score: 70");
        assert_eq!(session.high_score_label(), "High Score: 120");
    }
}
