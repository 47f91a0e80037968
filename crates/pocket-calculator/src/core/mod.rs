//! Core calculator: the sequential state machine and its number text rules
//!
//! Everything in here is pure. Front-ends feed [`engine::Calculator`] one
//! action at a time and read a [`engine::Render`] back.

pub mod display;
pub mod engine;
pub mod number;
mod operations;

pub use display::{format_display, render_display, SizeClass};
pub use engine::{Calculator, CalculatorState, ClearLabel, Digit, Phase, Render};
pub use number::{format_number, parse_number};
pub use operations::{evaluate, evaluate_symbol, Operator};

use thiserror::Error;

/// Result type for the adapter and configuration surface
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised by entry points that accept untyped input.
///
/// Arithmetic never fails: division by zero and unparsable operands travel
/// through IEEE-754 values to the display instead.
#[derive(Debug, Error)]
pub enum CalcError {
    /// Digit outside `0..=9`
    #[error("Invalid digit: {0} (expected 0-9)")]
    InvalidDigit(u8),
    /// No keypad button carries this element id
    #[error("Unknown button: {0}")]
    UnknownButton(String),
    /// Key or script token with no calculator meaning
    #[error("Unknown key: {0}")]
    UnknownKey(String),
    /// Display configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    Config(String),
    /// Reading a configuration file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Configuration JSON could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
