//! Guess evaluation: validate raw input, draw the secret, score the round
//!
//! Validation never touches the session. Only an accepted guess draws a
//! secret and moves the session through win, miss or exhaustion.

use super::config::GameConfig;
use super::errors::GuessError;
use super::outcome::{Direction, Outcome};
use super::secret::SecretSource;
use super::state::GameSession;
use log::{debug, info};

/// When a new secret is drawn
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SecretPolicy {
    /// Fresh secret for every accepted guess
    #[default]
    PerGuess,
    /// One secret per round, redrawn after a win or exhaustion
    PerRound,
}

/// Parse raw text into a guess inside the configured range
///
/// Surrounding ASCII whitespace and control characters (anything up to
/// U+0020) are ignored; other Unicode spaces are not. The remainder must be one
/// or more ASCII digits; signs, decimals and interior whitespace are rejected.
pub fn parse_guess(raw_input: &str, config: &GameConfig) -> Result<u32, GuessError> {
    let trimmed = raw_input.trim_matches(|c: char| c <= ' ');
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GuessError::InvalidFormat);
    }

    let out_of_range = GuessError::OutOfRange {
        min: config.min_range,
        max: config.max_range,
    };

    // A digit string that overflows u32 is above any range we accept
    let guess: u32 = trimmed.parse().map_err(|_| out_of_range)?;
    if !config.contains(guess) {
        return Err(out_of_range);
    }

    Ok(guess)
}

/// Evaluates guesses against secrets from a `SecretSource`
pub struct GuessEvaluator<S: SecretSource> {
    config: GameConfig,
    policy: SecretPolicy,
    source: S,
}

impl<S: SecretSource> GuessEvaluator<S> {
    pub fn new(config: GameConfig, source: S) -> Self {
        GuessEvaluator {
            config,
            policy: SecretPolicy::default(),
            source,
        }
    }

    /// Builder-style policy override
    pub fn with_policy(mut self, policy: SecretPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn policy(&self) -> SecretPolicy {
        self.policy
    }

    /// Validate `raw_input`, draw the secret and resolve the guess
    pub fn evaluate(
        &mut self,
        raw_input: &str,
        session: &mut GameSession,
    ) -> Result<Outcome, GuessError> {
        let guess = parse_guess(raw_input, &self.config).map_err(|e| {
            debug!("Rejected input {:?}: {:?}", raw_input, e);
            e
        })?;

        let secret = self.secret_for(session);
        Ok(self.resolve(guess, secret, session))
    }

    /// Secret for this guess according to the policy
    fn secret_for(&mut self, session: &mut GameSession) -> u32 {
        let (min, max) = (self.config.min_range, self.config.max_range);
        match self.policy {
            SecretPolicy::PerGuess => {
                let secret = self.source.draw(min, max);
                debug!("Drew secret {} for this guess", secret);
                secret
            }
            SecretPolicy::PerRound => match session.secret {
                Some(secret) => secret,
                None => {
                    let secret = self.source.draw(min, max);
                    debug!("Drew secret {} for a new round", secret);
                    session.secret = Some(secret);
                    secret
                }
            },
        }
    }

    /// Compare an accepted guess to a known secret and update the session
    pub fn resolve(&self, guess: u32, secret: u32, session: &mut GameSession) -> Outcome {
        if guess == secret {
            session.record_win(&self.config);
            info!(
                "Round won: score {} (high score {})",
                session.score, session.high_score
            );
            return Outcome::Win {
                score: session.score,
                high_score: session.high_score,
            };
        }

        let remaining_attempts = session.consume_attempt();
        if remaining_attempts > 0 {
            Outcome::Miss {
                direction: Direction::towards(guess, secret),
                remaining_attempts,
            }
        } else {
            session.record_exhausted(&self.config);
            info!("Round lost: secret was {}", secret);
            Outcome::Exhausted {
                revealed_secret: secret,
            }
        }
    }
}
