//! Terminal front-end
//!
//! Same engine and keypad as the page front-end, drawn with ratatui and
//! driven by crossterm events.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, TermAction};
pub use keypad::{hit_test, KeypadWidget};
pub use ui::{keypad_area, render, CalculatorUI, HELP_SHORTCUTS, TITLE};
