//! Sequential calculator engine
//!
//! A left-to-right state machine: each keypad action mutates
//! [`CalculatorState`] and returns the [`Render`] the front-end should show.
//!
//! ```text
//! Idle ──op──▶ OperatorPending(waiting) ──digit──▶ OperatorPending(typing)
//!   ▲                  │  ▲                               │      │
//!   │                  │  └──────────────op (folds)───────┘      │
//!   └────────────=─────┴─────────────────────────=───────────────┘
//! ```
//!
//! Clear returns to Idle from any phase.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::display::{render_display, SizeClass};
use super::number::{format_number, parse_number};
use super::operations::Operator;
use super::{CalcError, CalcResult};
use crate::config::DisplayConfig;

/// A single decimal digit, `0..=9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit, rejecting values above 9
    pub fn new(value: u8) -> CalcResult<Self> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(CalcError::InvalidDigit(value))
        }
    }

    /// All ten digits in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=9).map(Self)
    }

    /// Numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// ASCII character for this digit
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// Parses an ASCII digit character
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|d| Self(d as u8))
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> CalcResult<Self> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// The calculator's complete state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Operand being typed, `,` as decimal separator; `"0"` when empty
    pub current_input: String,
    /// Operand captured before the pending operator
    pub previous_input: Option<f64>,
    /// Pending operator
    pub operator: Option<Operator>,
    /// Next digit starts a fresh operand
    pub waiting_for_new_input: bool,
    /// Next digit replaces the display (moves with `waiting_for_new_input`)
    pub should_reset_display: bool,
    /// Operator button to highlight
    pub active_operator: Option<Operator>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_input: "0".to_string(),
            previous_input: None,
            operator: None,
            waiting_for_new_input: false,
            should_reset_display: false,
            active_operator: None,
        }
    }
}

impl CalculatorState {
    /// Where the state sits in the entry cycle
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match (self.operator, self.waiting_for_new_input) {
            (None, _) => Phase::Idle,
            (Some(_), true) => Phase::OperatorWaiting,
            (Some(_), false) => Phase::OperatorTyping,
        }
    }

    fn starts_fresh_operand(&self) -> bool {
        self.waiting_for_new_input || self.should_reset_display
    }

    fn begin_operand(&mut self, text: &str) {
        self.current_input = text.to_string();
        self.waiting_for_new_input = false;
        self.should_reset_display = false;
    }
}

/// Entry cycle phase, derived from the pending operator and the wait flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No operator pending
    Idle,
    /// Operator just chosen, second operand not started
    OperatorWaiting,
    /// Second operand being typed
    OperatorTyping,
}

/// Label shown on the clear button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClearLabel {
    /// "AC": nothing to clear beyond the default state
    AllClear,
    /// "C"
    Clear,
}

impl ClearLabel {
    /// Button text
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AllClear => "AC",
            Self::Clear => "C",
        }
    }
}

impl std::fmt::Display for ClearLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the front-end shows after an action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Render {
    /// Formatted display text
    pub display_text: String,
    /// Font size hint for the display
    pub size_class: SizeClass,
    /// Clear button label
    pub clear_label: ClearLabel,
    /// Operator button to highlight
    pub active_operator: Option<Operator>,
}

/// Sequential calculator engine
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
    config: DisplayConfig,
}

impl Calculator {
    /// Creates a calculator in the default state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with custom display settings
    #[must_use]
    pub fn with_config(config: DisplayConfig) -> Self {
        Self {
            state: CalculatorState::default(),
            config,
        }
    }

    /// Resumes from an existing state
    #[must_use]
    pub fn from_state(state: CalculatorState, config: DisplayConfig) -> Self {
        Self { state, config }
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Display settings
    #[must_use]
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Builds the render tuple for the current state
    #[must_use]
    pub fn render(&self) -> Render {
        let display_text = render_display(&self.state.current_input, &self.config);
        let size_class = SizeClass::for_len(display_text.chars().count(), &self.config);
        let clear_label =
            if self.state.current_input == "0" && self.state.previous_input.is_none() {
                ClearLabel::AllClear
            } else {
                ClearLabel::Clear
            };

        Render {
            display_text,
            size_class,
            clear_label,
            active_operator: self.state.active_operator,
        }
    }

    /// Types a digit
    pub fn input_digit(&mut self, digit: Digit) -> Render {
        let ch = digit.as_char();
        if self.state.starts_fresh_operand() {
            self.state.begin_operand(&ch.to_string());
        } else if self.state.current_input == "0" {
            self.state.current_input = ch.to_string();
        } else {
            self.state.current_input.push(ch);
        }
        self.rendered("digit")
    }

    /// Types the decimal comma; a second comma in one operand is ignored
    pub fn input_decimal(&mut self) -> Render {
        if self.state.starts_fresh_operand() {
            self.state.begin_operand("0,");
        } else if !self.state.current_input.contains(',') {
            self.state.current_input.push(',');
        }
        self.rendered("decimal")
    }

    /// Chooses an operator, folding a pending operation if a second operand
    /// has been typed since
    pub fn input_operator(&mut self, op: Operator) -> Render {
        let input_value = parse_number(&self.state.current_input);

        match (self.state.previous_input, self.state.operator) {
            (None, _) => self.state.previous_input = Some(input_value),
            (Some(previous), Some(pending)) if !self.state.waiting_for_new_input => {
                // NaN accumulator restarts from zero
                let accumulated = if previous.is_nan() { 0.0 } else { previous };
                let result = pending.apply(accumulated, input_value);
                debug!(%pending, accumulated, input_value, result, "chained operation");
                self.state.current_input = format_number(result);
                self.state.previous_input = Some(result);
            }
            _ => {}
        }

        self.state.waiting_for_new_input = true;
        self.state.operator = Some(op);
        self.state.active_operator = Some(op);
        self.rendered("operator")
    }

    /// Applies the pending operation; no-op when nothing is pending
    pub fn calculate(&mut self) -> Render {
        if let (Some(previous), Some(op)) = (self.state.previous_input, self.state.operator) {
            let input_value = parse_number(&self.state.current_input);
            let result = op.apply(previous, input_value);
            debug!(%op, previous, input_value, result, "calculate");

            self.state.current_input = format_number(result);
            self.state.previous_input = None;
            self.state.operator = None;
            self.state.waiting_for_new_input = true;
            self.state.should_reset_display = false;
            self.state.active_operator = None;
        }
        self.rendered("equals")
    }

    /// Resets to the default state
    pub fn clear(&mut self) -> Render {
        self.state = CalculatorState::default();
        self.rendered("clear")
    }

    /// Flips the operand's sign; `"0"` stays unsigned
    pub fn toggle_sign(&mut self) -> Render {
        if self.state.current_input != "0" {
            self.state.current_input = match self.state.current_input.strip_prefix('-') {
                Some("") => "0".to_string(),
                Some(unsigned) => unsigned.to_string(),
                None => format!("-{}", self.state.current_input),
            };
        }
        self.rendered("toggle sign")
    }

    /// Divides the operand by 100
    pub fn percentage(&mut self) -> Render {
        let value = parse_number(&self.state.current_input);
        self.state.current_input = format_number(value / 100.0);
        self.rendered("percentage")
    }

    /// Deletes the last typed character
    pub fn backspace(&mut self) -> Render {
        if self.state.waiting_for_new_input || self.state.current_input.chars().count() <= 1 {
            self.state.current_input = "0".to_string();
        } else {
            self.state.current_input.pop();
        }
        self.rendered("backspace")
    }

    fn rendered(&self, action: &'static str) -> Render {
        debug!(
            action,
            input = %self.state.current_input,
            pending = ?self.state.operator,
            waiting = self.state.waiting_for_new_input,
            "state updated"
        );
        self.render()
    }
}
