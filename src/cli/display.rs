//! Terminal display and UI rendering
//!
//! Features:
//! - Title and guess prompt
//! - Color-coded feedback for each submission
//! - Score and high score labels

use crate::game::{GameSession, GuessError, Outcome};
use crossterm::{
    cursor, execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};

const TITLE: &str = "Welcome to the Number Guessing Game!";
const PROMPT: &str = "Enter Your Guess: ";

const ROW_TITLE: u16 = 0;
const ROW_PROMPT: u16 = 2;
const ROW_FEEDBACK: u16 = 4;
const ROW_SCORES: u16 = 7;
const ROW_HELP: u16 = 9;

/// Color used for the feedback of a submission
pub fn feedback_color(result: &Result<Outcome, GuessError>) -> Color {
    match result {
        Ok(Outcome::Win { .. }) => Color::Green,
        Ok(Outcome::Miss { .. }) => Color::Yellow,
        Ok(Outcome::Exhausted { .. }) | Err(_) => Color::Red,
    }
}

/// Feedback text of a submission
pub fn feedback_text(result: &Result<Outcome, GuessError>) -> String {
    match result {
        Ok(outcome) => outcome.to_string(),
        Err(e) => e.to_string(),
    }
}

/// Terminal display manager
pub struct Display;

impl Display {
    pub fn new() -> Self {
        Display
    }

    /// Clear screen
    pub fn clear(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        Ok(())
    }

    pub fn show_title(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, ROW_TITLE),
            SetForegroundColor(Color::Cyan),
            Print(TITLE),
            ResetColor
        )?;
        Ok(())
    }

    /// Prompt followed by the guess typed so far
    pub fn show_input(&self, user_input: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, ROW_PROMPT),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::Yellow),
            Print(PROMPT),
            ResetColor,
            Print(user_input)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Feedback for the last submission, one terminal row per line
    pub fn show_feedback(
        &self,
        result: &Result<Outcome, GuessError>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        let color = feedback_color(result);

        // Raw mode does not return the carriage on '\n'
        for (row, line) in (ROW_FEEDBACK..).zip(feedback_text(result).lines()) {
            execute!(
                stdout,
                cursor::MoveTo(0, row),
                terminal::Clear(ClearType::CurrentLine),
                SetForegroundColor(color),
                Print(line),
                ResetColor
            )?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// Score and high score labels
    pub fn show_scores(&self, session: &GameSession) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, ROW_SCORES),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::Magenta),
            Print(session.score_label()),
            ResetColor,
            Print("  |  "),
            SetForegroundColor(Color::Green),
            Print(session.high_score_label()),
            ResetColor,
            Print(format!("  |  Attempts left: {}", session.remaining_attempts))
        )?;
        stdout.flush()?;
        Ok(())
    }

    pub fn show_help(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, ROW_HELP),
            SetForegroundColor(Color::DarkGrey),
            Print("Press ENTER to submit your guess  |  Esc or Ctrl+C to exit"),
            ResetColor
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Leave raw mode and park the cursor below the UI
    pub fn shutdown(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(stdout, cursor::MoveTo(0, ROW_HELP + 2), cursor::Show)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        // Best effort cleanup
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::outcome::Direction;

    #[test]
    fn test_feedback_colors() {
        let win = Ok(Outcome::Win {
            score: 50,
            high_score: 50,
        });
        let miss = Ok(Outcome::Miss {
            direction: Direction::Higher,
            remaining_attempts: 2,
        });
        let lost = Ok(Outcome::Exhausted { revealed_secret: 9 });
        let rejected = Err(GuessError::InvalidFormat);

        assert_eq!(feedback_color(&win), Color::Green);
        assert_eq!(feedback_color(&miss), Color::Yellow);
        assert_eq!(feedback_color(&lost), Color::Red);
        assert_eq!(feedback_color(&rejected), Color::Red);
    }

    #[test]
    fn test_feedback_text_spans_two_lines() {
        let miss = Ok(Outcome::Miss {
            direction: Direction::Higher,
            remaining_attempts: 2,
        });
        let text = feedback_text(&miss);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Incorrect guess! You have 2 attempts remaining.",
                "Try a higher number."
            ]
        );
        assert_eq!(
            feedback_text(&Err(GuessError::OutOfRange { min: 1, max: 100 })),
            "Error: Please guess a number between 1 and 100."
        );
    }
}
