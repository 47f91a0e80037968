//! Pocket Calculator
//!
//! A sequential (no-precedence) calculator with comma-decimal display, the
//! kind found on phones: `2 + 3 × 4 =` shows `20`. One pure engine, two
//! front-ends.
//!
//! - [`core`]: the state machine plus number parsing and display formatting
//! - [`keypad`]: button layout and key mapping shared by every front-end
//! - [`web`]: a mock-DOM page, testable without a browser
//! - `tui` and `cli`: a terminal front-end and its binary (feature `tui`)
//! - [`driver`]: one driver trait so a scenario runs on every front-end
//!
//! # Example
//!
//! ```rust
//! use pocket_calculator::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for action in KeypadAction::parse_script("5÷2=").unwrap() {
//!     action.apply(&mut calc);
//! }
//! assert_eq!(calc.render().display_text, "2,5");
//!
//! // Big results switch notation
//! calc.clear();
//! calc.press_sequence("99999×99999=").unwrap();
//! assert_eq!(calc.render().display_text, "1,00e+10");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod keypad;

#[cfg(feature = "tui")]
pub mod cli;
#[cfg(feature = "tui")]
pub mod tui;

/// Page front-end over a mock DOM
pub mod web;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::DisplayConfig;
    pub use crate::core::{
        format_display, format_number, parse_number, CalcError, CalcResult, Calculator,
        CalculatorState, ClearLabel, Digit, Operator, Phase, Render, SizeClass,
    };
    pub use crate::driver::{run_full_specification, CalculatorDriver};
    pub use crate::keypad::{KeypadAction, KeypadButtonDef, Keypad};
    pub use crate::web::{DomDriver, DomElement, DomEvent, MockDom};
}
