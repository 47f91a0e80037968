//! Keyboard and mouse input handling
//!
//! Maps crossterm events onto the same [`KeypadAction`] vocabulary the page
//! front-end uses, so both share one key table.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::keypad::KeypadAction;

/// What a terminal event asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermAction {
    /// Feed an action to the calculator
    Keypad(KeypadAction),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> TermAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return TermAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => TermAction::Quit,
                _ => TermAction::None,
            };
        }

        let key = match code {
            KeyCode::Char('q' | 'Q') => return TermAction::Quit,
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Escape".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            _ => return TermAction::None,
        };

        KeypadAction::from_key(&key).map_or(TermAction::None, TermAction::Keypad)
    }
}
