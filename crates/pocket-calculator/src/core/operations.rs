//! The four arithmetic operators and their evaluation
//!
//! Evaluation follows IEEE-754 throughout: `1 / 0` is infinity and `0 / 0`
//! is NaN. Neither is an error.

use serde::{Deserialize, Serialize};

/// Type-safe operator enum - a pending operation is always one of these
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators in keypad order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Resolves a symbol, accepting the ASCII spellings used by keyboards
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '×' | 'x' | '*' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Element id of the keypad button for this operator
    #[must_use]
    pub const fn element_id(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Applies the operator to `a` and `b`
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Evaluates `a op b`
#[must_use]
pub fn evaluate(op: Operator, a: f64, b: f64) -> f64 {
    op.apply(a, b)
}

/// Evaluates by operator tag; an unrecognized tag yields `b` unchanged.
#[must_use]
pub fn evaluate_symbol(symbol: char, a: f64, b: f64) -> f64 {
    Operator::from_symbol(symbol).map_or(b, |op| op.apply(a, b))
}
