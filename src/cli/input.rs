//! Keystroke input for the guess field using crossterm
//!
//! Features:
//! - Non-blocking keystroke capture
//! - Line editing of the guess (type, backspace, enter)
//! - Esc / Ctrl+C exit

use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::Result as IoResult;
use std::time::Duration;

/// What a keystroke means for the game loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    /// Player pressed Enter
    Submit,
    /// Player asked to leave
    Quit,
    /// The guess buffer changed
    Edited,
    /// Nothing to do
    Ignored,
}

/// Handles user input from terminal
pub struct InputHandler {
    /// Timeout for poll operations
    poll_timeout: Duration,
}

impl InputHandler {
    /// Create new input handler (50ms poll keeps the loop responsive)
    pub fn new() -> Self {
        InputHandler {
            poll_timeout: Duration::from_millis(50),
        }
    }

    /// Enable raw mode so keys arrive one at a time
    pub fn enable_raw_mode() -> IoResult<()> {
        crossterm::terminal::enable_raw_mode()
    }

    /// Poll for a key press with timeout
    /// Returns Some(KeyEvent) if a key was pressed, None on timeout or other events
    pub fn read_key(&self) -> Result<Option<KeyEvent>, Box<dyn std::error::Error>> {
        if event::poll(self.poll_timeout)? {
            match event::read()? {
                event::Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                    Ok(Some(key_event))
                }
                _ => Ok(None),
            }
        } else {
            Ok(None)
        }
    }

    /// Check if key event is an exit signal (Ctrl+C or Escape)
    pub fn is_exit(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
            KeyCode::Esc => true,
            _ => false,
        }
    }

    /// Printable character of a key without Ctrl/Alt
    pub fn key_to_char(key: &KeyEvent) -> Option<char> {
        match key.code {
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                Some(c)
            }
            _ => None,
        }
    }

    /// Apply a keystroke to the guess buffer
    pub fn apply(key: &KeyEvent, buffer: &mut String) -> InputAction {
        if Self::is_exit(key) {
            return InputAction::Quit;
        }

        match key.code {
            KeyCode::Enter => InputAction::Submit,
            KeyCode::Backspace => {
                if buffer.pop().is_some() {
                    InputAction::Edited
                } else {
                    InputAction::Ignored
                }
            }
            _ => match Self::key_to_char(key) {
                Some(c) => {
                    buffer.push(c);
                    InputAction::Edited
                }
                None => InputAction::Ignored,
            },
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
