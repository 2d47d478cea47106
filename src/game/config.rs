//! Game constants

/// Tunable constants of the game
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Lowest valid guess (inclusive)
    pub min_range: u32,
    /// Highest valid guess (inclusive)
    pub max_range: u32,
    /// Attempts granted at the start of every round
    pub default_attempts: u32,
    /// Points awarded per remaining attempt on a win
    pub points_per_attempt: u32,
}

impl GameConfig {
    /// 1..=100, 5 attempts, 10 points per attempt
    pub const DEFAULT: GameConfig = GameConfig {
        min_range: 1,
        max_range: 100,
        default_attempts: 5,
        points_per_attempt: 10,
    };

    /// Check whether a parsed guess lies inside the closed range
    pub fn contains(&self, guess: u32) -> bool {
        (self.min_range..=self.max_range).contains(&guess)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_bounds_inclusive() {
        let config = GameConfig::DEFAULT;
        assert!(config.contains(1));
        assert!(config.contains(100));
        assert!(!config.contains(0));
        assert!(!config.contains(101));
    }
}
