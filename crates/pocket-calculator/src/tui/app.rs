//! TUI Application State

use crate::config::DisplayConfig;
use crate::core::{Calculator, Render};
use crate::keypad::{KeypadAction, Keypad};

use super::input::TermAction;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// The engine
    calculator: Calculator,
    /// Button layout
    keypad: Keypad,
    /// Render produced by the last action
    render: Render,
    /// Button flashed for the last action
    last_pressed: Option<KeypadAction>,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DisplayConfig::default())
    }

    /// Creates a calculator app with custom display settings
    #[must_use]
    pub fn with_config(config: DisplayConfig) -> Self {
        let calculator = Calculator::with_config(config);
        let render = calculator.render();
        Self {
            calculator,
            keypad: Keypad::new(),
            render,
            last_pressed: None,
            should_quit: false,
        }
    }

    /// Returns the engine
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the keypad layout
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the latest render
    #[must_use]
    pub fn render(&self) -> &Render {
        &self.render
    }

    /// Returns the action performed last
    #[must_use]
    pub fn last_pressed(&self) -> Option<KeypadAction> {
        self.last_pressed
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Performs one keypad action
    pub fn press(&mut self, action: KeypadAction) -> &Render {
        self.render = action.apply(&mut self.calculator);
        self.last_pressed = Some(action);
        &self.render
    }

    /// Handles a mapped terminal event
    pub fn handle(&mut self, action: TermAction) {
        match action {
            TermAction::Keypad(action) => {
                self.press(action);
            }
            TermAction::Quit => self.quit(),
            TermAction::None => {}
        }
    }
}
