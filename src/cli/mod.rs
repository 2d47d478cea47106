//! CLI Interface: User input and terminal rendering
//!
//! # Components
//! - `input.rs`: Keystroke capture and guess line editing using crossterm
//! - `display.rs`: Terminal rendering of prompt, feedback and scores

pub mod display;
pub mod input;
