//! Rejected guesses
//!
//! The `Display` text of each variant is the message shown to the player.

/// Why a raw guess was rejected before any comparison took place
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    #[error("Error: Please enter a valid number.")]
    InvalidFormat,
    #[error("Error: Please guess a number between {min} and {max}.")]
    OutOfRange { min: u32, max: u32 },
}
