//! Game core: session state, guess validation and round scoring
//!
//! # Components
//! - `config.rs`: GameConfig constants (range, attempts, points)
//! - `state.rs`: GameSession record mutated by each guess
//! - `secret.rs`: SecretSource seam for drawing the secret number
//! - `evaluator.rs`: GuessEvaluator (validate, draw, compare, score)
//! - `outcome.rs`: Outcome and Direction with their feedback text
//! - `errors.rs`: GuessError for rejected input
//! - `stats.rs`: SessionStats for the end-of-session summary

pub mod config;
pub mod errors;
pub mod evaluator;
pub mod outcome;
pub mod secret;
pub mod state;
pub mod stats;

pub use config::GameConfig;
pub use errors::GuessError;
pub use evaluator::{GuessEvaluator, SecretPolicy};
pub use outcome::Outcome;
pub use secret::{RandomSecret, SecretSource};
pub use state::GameSession;
pub use stats::SessionStats;
