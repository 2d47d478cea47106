//! Round outcomes and their feedback text

use std::fmt;

/// Hint given after a wrong guess
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// The secret is above the guess
    Higher,
    /// The secret is below the guess
    Lower,
}

impl Direction {
    /// Direction from `guess` towards `secret` (guess must differ from secret)
    pub fn towards(guess: u32, secret: u32) -> Self {
        if guess < secret {
            Direction::Higher
        } else {
            Direction::Lower
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Higher => "higher",
            Direction::Lower => "lower",
        }
    }
}

/// Result of one accepted guess
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Guess matched the secret
    Win { score: u32, high_score: u32 },
    /// Wrong guess, attempts remain
    Miss {
        direction: Direction,
        remaining_attempts: u32,
    },
    /// Wrong guess with no attempts left; the round is over
    Exhausted { revealed_secret: u32 },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win { .. } => write!(f, "Congratulations! You guessed the correct number."),
            Outcome::Miss {
                direction,
                remaining_attempts,
            } => write!(
                f,
                "Incorrect guess! You have {} attempts remaining.\nTry a {} number.",
                remaining_attempts,
                direction.as_str()
            ),
            Outcome::Exhausted { revealed_secret } => write!(
                f,
                "Sorry, you've run out of attempts.\nThe correct number was: {}",
                revealed_secret
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_towards() {
        assert_eq!(Direction::towards(10, 42), Direction::Higher);
        assert_eq!(Direction::towards(90, 42), Direction::Lower);
    }

    #[test]
    fn test_feedback_text() {
        let miss = Outcome::Miss {
            direction: Direction::Lower,
            remaining_attempts: 3,
        };
        assert_eq!(
            miss.to_string(),
            "Incorrect guess! You have 3 attempts remaining.\nTry a lower number."
        );

        let exhausted = Outcome::Exhausted { revealed_secret: 17 };
        assert_eq!(
            exhausted.to_string(),
            "Sorry, you've run out of attempts.\nThe correct number was: 17"
        );

        let win = Outcome::Win {
            score: 50,
            high_score: 50,
        };
        assert_eq!(
            win.to_string(),
            "Congratulations! You guessed the correct number."
        );
    }
}
