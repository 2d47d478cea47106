//! Session summary counters

use super::errors::GuessError;
use super::outcome::Outcome;

/// Tallies of every submission in a session
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub wins: u32,
    pub misses: u32,
    pub exhausted: u32,
    /// Inputs rejected by validation
    pub rejected: u32,
    /// Wins since the last exhausted round
    pub streak: u32,
    /// Longest run of wins without an exhausted round in between
    pub best_streak: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the result of one submission
    pub fn record(&mut self, result: &Result<Outcome, GuessError>) {
        match result {
            Ok(Outcome::Win { .. }) => {
                self.wins += 1;
                self.streak += 1;
                self.best_streak = self.best_streak.max(self.streak);
            }
            Ok(Outcome::Miss { .. }) => self.misses += 1,
            Ok(Outcome::Exhausted { .. }) => {
                self.exhausted += 1;
                self.streak = 0;
            }
            Err(_) => self.rejected += 1,
        }
    }

    /// Rounds that finished, won or lost
    pub fn rounds_played(&self) -> u32 {
        self.wins + self.exhausted
    }

    /// Accepted guesses
    pub fn guesses(&self) -> u32 {
        self.wins + self.misses + self.exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::outcome::Direction;

    #[test]
    fn test_record() {
        let mut stats = SessionStats::new();
        stats.record(&Ok(Outcome::Miss {
            direction: Direction::Higher,
            remaining_attempts: 4,
        }));
        stats.record(&Ok(Outcome::Win {
            score: 40,
            high_score: 40,
        }));
        stats.record(&Ok(Outcome::Exhausted { revealed_secret: 3 }));
        stats.record(&Err(GuessError::InvalidFormat));

        assert_eq!(stats.wins, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.exhausted, 1);
        assert_eq!(stats.rejected, 1);
        assert_eq!(stats.streak, 0);
        assert_eq!(stats.best_streak, 1);
        assert_eq!(stats.rounds_played(), 2);
        assert_eq!(stats.guesses(), 3);
    }

    #[test]
    fn test_streak_survives_misses_and_rejections() {
        let win = Ok(Outcome::Win {
            score: 50,
            high_score: 50,
        });
        let miss = Ok(Outcome::Miss {
            direction: Direction::Lower,
            remaining_attempts: 4,
        });
        let lost = Ok(Outcome::Exhausted { revealed_secret: 8 });

        let mut stats = SessionStats::new();
        stats.record(&win);
        stats.record(&miss);
        stats.record(&Err(GuessError::OutOfRange { min: 1, max: 100 }));
        stats.record(&win);
        stats.record(&win);
        assert_eq!(stats.streak, 3);

        stats.record(&lost);
        stats.record(&win);
        assert_eq!(stats.streak, 1);
        assert_eq!(stats.best_streak, 3);
    }
}
