//! Keypad layout and key mapping
//!
//! Translates button presses and keystrokes into [`KeypadAction`]s. Shared
//! by the mock-DOM front-end and the terminal front-end so both drive the
//! engine through the same action vocabulary.

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult, Calculator, Digit, Operator, Render};

/// Semantic input events understood by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeypadAction {
    /// Type a digit
    Digit(Digit),
    /// Type the decimal comma
    Decimal,
    /// Choose an operator
    Operator(Operator),
    /// Apply the pending operation
    Equals,
    /// Reset everything
    Clear,
    /// Flip the operand's sign
    ToggleSign,
    /// Divide the operand by 100
    Percent,
    /// Delete the last typed character
    Backspace,
}

impl KeypadAction {
    /// Digit action from a raw number
    pub fn digit(value: u8) -> CalcResult<Self> {
        Digit::new(value).map(Self::Digit)
    }

    /// Button label (the clear button's live label comes from the render)
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.as_char().to_string(),
            Self::Decimal => ",".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "AC".to_string(),
            Self::ToggleSign => "+/-".to_string(),
            Self::Percent => "%".to_string(),
            Self::Backspace => "⌫".to_string(),
        }
    }

    /// Element id of the button carrying this action
    #[must_use]
    pub const fn element_id(&self) -> &'static str {
        match self {
            Self::Digit(d) => DIGIT_IDS[d.value() as usize],
            Self::Decimal => "decimal",
            Self::Operator(op) => op.element_id(),
            Self::Equals => "equals",
            Self::Clear => "clear",
            Self::ToggleSign => "toggle-sign",
            Self::Percent => "percentage",
            Self::Backspace => "backspace",
        }
    }

    /// Maps a keyboard key name to an action; unrecognized keys map to `None`
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | "=" => Some(Self::Equals),
            "Escape" | "c" | "C" => Some(Self::Clear),
            "Backspace" => Some(Self::Backspace),
            "." | "," => Some(Self::Decimal),
            "%" => Some(Self::Percent),
            "+" => Some(Self::Operator(Operator::Add)),
            "-" => Some(Self::Operator(Operator::Subtract)),
            "*" => Some(Self::Operator(Operator::Multiply)),
            "/" => Some(Self::Operator(Operator::Divide)),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Digit::from_char(ch).map(Self::Digit),
                    _ => None,
                }
            }
        }
    }

    /// Parses a compact key script such as `"12+3="` or `"5÷2="`.
    ///
    /// Each character is a key name, an operator symbol, or `±` for the sign
    /// toggle. Whitespace is skipped.
    pub fn parse_script(script: &str) -> CalcResult<Vec<Self>> {
        script
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .map(|ch| {
                let key = ch.to_string();
                Self::from_key(&key)
                    .or_else(|| Operator::from_symbol(ch).map(Self::Operator))
                    .or_else(|| (ch == '±').then_some(Self::ToggleSign))
                    .ok_or(CalcError::UnknownKey(key))
            })
            .collect()
    }

    /// Feeds this action to the engine
    pub fn apply(self, calculator: &mut Calculator) -> Render {
        match self {
            Self::Digit(d) => calculator.input_digit(d),
            Self::Decimal => calculator.input_decimal(),
            Self::Operator(op) => calculator.input_operator(op),
            Self::Equals => calculator.calculate(),
            Self::Clear => calculator.clear(),
            Self::ToggleSign => calculator.toggle_sign(),
            Self::Percent => calculator.percentage(),
            Self::Backspace => calculator.backspace(),
        }
    }
}

const DIGIT_IDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The action this button performs
    pub action: KeypadAction,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Columns covered by the button
    pub span: usize,
}

impl KeypadButtonDef {
    /// Creates a single-width button
    #[must_use]
    pub const fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        Self {
            action,
            row,
            col,
            span: 1,
        }
    }

    /// Creates a button spanning `span` columns
    #[must_use]
    pub const fn wide(action: KeypadAction, row: usize, col: usize, span: usize) -> Self {
        Self {
            action,
            row,
            col,
            span,
        }
    }

    /// DOM element id
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.action.element_id()
    }

    /// Whether the button covers grid cell `(row, col)`
    #[must_use]
    pub const fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }

    /// Whether this is an operator button (eligible for highlighting)
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self.action, KeypadAction::Operator(_))
    }
}

/// Calculator keypad layout
///
/// ```text
/// [ AC ] [+/-] [ % ] [ ÷ ]
/// [ 7  ] [ 8 ] [ 9 ] [ × ]
/// [ 4  ] [ 5 ] [ 6 ] [ - ]
/// [ 1  ] [ 2 ] [ 3 ] [ + ]
/// [    0     ] [ , ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButtonDef>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard layout
    #[must_use]
    pub fn new() -> Self {
        let digits: Vec<Digit> = Digit::all().collect();
        let digit = |d: usize| KeypadAction::Digit(digits[d]);
        let op = KeypadAction::Operator;

        let buttons = vec![
            // Row 0: AC +/- % ÷
            KeypadButtonDef::new(KeypadAction::Clear, 0, 0),
            KeypadButtonDef::new(KeypadAction::ToggleSign, 0, 1),
            KeypadButtonDef::new(KeypadAction::Percent, 0, 2),
            KeypadButtonDef::new(op(Operator::Divide), 0, 3),
            // Row 1: 7 8 9 ×
            KeypadButtonDef::new(digit(7), 1, 0),
            KeypadButtonDef::new(digit(8), 1, 1),
            KeypadButtonDef::new(digit(9), 1, 2),
            KeypadButtonDef::new(op(Operator::Multiply), 1, 3),
            // Row 2: 4 5 6 -
            KeypadButtonDef::new(digit(4), 2, 0),
            KeypadButtonDef::new(digit(5), 2, 1),
            KeypadButtonDef::new(digit(6), 2, 2),
            KeypadButtonDef::new(op(Operator::Subtract), 2, 3),
            // Row 3: 1 2 3 +
            KeypadButtonDef::new(digit(1), 3, 0),
            KeypadButtonDef::new(digit(2), 3, 1),
            KeypadButtonDef::new(digit(3), 3, 2),
            KeypadButtonDef::new(op(Operator::Add), 3, 3),
            // Row 4: 0 (wide) , =
            KeypadButtonDef::wide(digit(0), 4, 0, 2),
            KeypadButtonDef::new(KeypadAction::Decimal, 4, 2),
            KeypadButtonDef::new(KeypadAction::Equals, 4, 3),
        ];

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All button definitions in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Buttons in one grid row
    pub fn row(&self, row: usize) -> impl Iterator<Item = &KeypadButtonDef> {
        self.buttons.iter().filter(move |b| b.row == row)
    }

    /// Button covering grid cell `(row, col)`
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Button with the given element id
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id() == id)
    }

    /// Button carrying the given action
    #[must_use]
    pub fn find_button_by_action(&self, action: KeypadAction) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Resolves a clicked element id to its action
    pub fn handle_click(&self, element_id: &str) -> CalcResult<KeypadAction> {
        self.find_button_by_id(element_id)
            .map(|b| b.action)
            .ok_or_else(|| CalcError::UnknownButton(element_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(d: u8) -> KeypadAction {
        KeypadAction::digit(d).unwrap()
    }

    // ===== KeypadAction tests =====

    #[test]
    fn test_digit_constructor() {
        assert_eq!(digit(5), KeypadAction::Digit(Digit::new(5).unwrap()));
        assert!(matches!(
            KeypadAction::digit(10),
            Err(CalcError::InvalidDigit(10))
        ));
    }

    #[test]
    fn test_labels() {
        assert_eq!(digit(5).label(), "5");
        assert_eq!(KeypadAction::Decimal.label(), ",");
        assert_eq!(KeypadAction::Operator(Operator::Multiply).label(), "×");
        assert_eq!(KeypadAction::Equals.label(), "=");
        assert_eq!(KeypadAction::Clear.label(), "AC");
        assert_eq!(KeypadAction::ToggleSign.label(), "+/-");
        assert_eq!(KeypadAction::Percent.label(), "%");
    }

    #[test]
    fn test_element_ids() {
        assert_eq!(digit(0).element_id(), "zero");
        assert_eq!(digit(9).element_id(), "nine");
        assert_eq!(KeypadAction::Decimal.element_id(), "decimal");
        assert_eq!(KeypadAction::Operator(Operator::Divide).element_id(), "divide");
        assert_eq!(KeypadAction::Equals.element_id(), "equals");
        assert_eq!(KeypadAction::Clear.element_id(), "clear");
        assert_eq!(KeypadAction::ToggleSign.element_id(), "toggle-sign");
        assert_eq!(KeypadAction::Percent.element_id(), "percentage");
    }

    #[test]
    fn test_from_key_digits() {
        for d in 0..=9u8 {
            assert_eq!(KeypadAction::from_key(&d.to_string()), Some(digit(d)));
        }
    }

    #[test]
    fn test_from_key_decimal() {
        assert_eq!(KeypadAction::from_key("."), Some(KeypadAction::Decimal));
        assert_eq!(KeypadAction::from_key(","), Some(KeypadAction::Decimal));
    }

    #[test]
    fn test_from_key_operators() {
        assert_eq!(
            KeypadAction::from_key("+"),
            Some(KeypadAction::Operator(Operator::Add))
        );
        assert_eq!(
            KeypadAction::from_key("-"),
            Some(KeypadAction::Operator(Operator::Subtract))
        );
        assert_eq!(
            KeypadAction::from_key("*"),
            Some(KeypadAction::Operator(Operator::Multiply))
        );
        assert_eq!(
            KeypadAction::from_key("/"),
            Some(KeypadAction::Operator(Operator::Divide))
        );
    }

    #[test]
    fn test_from_key_functions() {
        assert_eq!(KeypadAction::from_key("Enter"), Some(KeypadAction::Equals));
        assert_eq!(KeypadAction::from_key("="), Some(KeypadAction::Equals));
        assert_eq!(KeypadAction::from_key("Escape"), Some(KeypadAction::Clear));
        assert_eq!(KeypadAction::from_key("c"), Some(KeypadAction::Clear));
        assert_eq!(KeypadAction::from_key("C"), Some(KeypadAction::Clear));
        assert_eq!(KeypadAction::from_key("%"), Some(KeypadAction::Percent));
        assert_eq!(
            KeypadAction::from_key("Backspace"),
            Some(KeypadAction::Backspace)
        );
    }

    #[test]
    fn test_from_key_ignored() {
        for key in ["a", "x", "^", "Tab", "F5", "", "12", "Shift"] {
            assert_eq!(KeypadAction::from_key(key), None, "key {key:?}");
        }
    }

    #[test]
    fn test_parse_script() {
        let actions = KeypadAction::parse_script("12 + 3 =").unwrap();
        assert_eq!(
            actions,
            vec![
                digit(1),
                digit(2),
                KeypadAction::Operator(Operator::Add),
                digit(3),
                KeypadAction::Equals,
            ]
        );
    }

    #[test]
    fn test_parse_script_symbols() {
        let actions = KeypadAction::parse_script("5÷2x3±").unwrap();
        assert_eq!(actions[1], KeypadAction::Operator(Operator::Divide));
        assert_eq!(actions[3], KeypadAction::Operator(Operator::Multiply));
        assert_eq!(actions[5], KeypadAction::ToggleSign);
    }

    #[test]
    fn test_parse_script_unknown() {
        let err = KeypadAction::parse_script("1^2").unwrap_err();
        assert!(matches!(err, CalcError::UnknownKey(ref k) if k == "^"));
    }

    #[test]
    fn test_apply_dispatches() {
        let mut calc = Calculator::new();
        digit(5).apply(&mut calc);
        KeypadAction::Operator(Operator::Divide).apply(&mut calc);
        digit(2).apply(&mut calc);
        let render = KeypadAction::Equals.apply(&mut calc);
        assert_eq!(render.display_text, "2,5");
    }

    // ===== KeypadButtonDef tests =====

    #[test]
    fn test_button_def_new() {
        let btn = KeypadButtonDef::new(digit(5), 2, 1);
        assert_eq!(btn.id(), "five");
        assert_eq!(btn.span, 1);
        assert!(btn.covers(2, 1));
        assert!(!btn.covers(2, 2));
    }

    #[test]
    fn test_button_def_wide() {
        let btn = KeypadButtonDef::wide(digit(0), 4, 0, 2);
        assert!(btn.covers(4, 0));
        assert!(btn.covers(4, 1));
        assert!(!btn.covers(4, 2));
        assert!(!btn.covers(3, 0));
    }

    #[test]
    fn test_button_def_is_operator() {
        assert!(KeypadButtonDef::new(KeypadAction::Operator(Operator::Add), 3, 3).is_operator());
        assert!(!KeypadButtonDef::new(KeypadAction::Equals, 4, 3).is_operator());
    }

    // ===== Keypad tests =====

    #[test]
    fn test_keypad_layout() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 19);
        assert_eq!(keypad.dimensions(), (5, 4));
    }

    #[test]
    fn test_keypad_get_button_at() {
        let keypad = Keypad::default();
        assert_eq!(keypad.get_button_at(0, 0).unwrap().action, KeypadAction::Clear);
        assert_eq!(keypad.get_button_at(1, 0).unwrap().action, digit(7));
        assert_eq!(
            keypad.get_button_at(0, 3).unwrap().action,
            KeypadAction::Operator(Operator::Divide)
        );
        assert_eq!(keypad.get_button_at(4, 1).unwrap().action, digit(0));
        assert_eq!(keypad.get_button_at(4, 3).unwrap().action, KeypadAction::Equals);
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    #[test]
    fn test_keypad_rows() {
        let keypad = Keypad::new();
        assert_eq!(keypad.row(0).count(), 4);
        assert_eq!(keypad.row(4).count(), 3);
    }

    #[test]
    fn test_keypad_find_by_id() {
        let keypad = Keypad::new();
        assert_eq!(
            keypad.find_button_by_id("toggle-sign").unwrap().action,
            KeypadAction::ToggleSign
        );
        assert!(keypad.find_button_by_id("power").is_none());
    }

    #[test]
    fn test_keypad_find_by_action() {
        let keypad = Keypad::new();
        let btn = keypad.find_button_by_action(KeypadAction::Percent).unwrap();
        assert_eq!((btn.row, btn.col), (0, 2));
        assert!(keypad.find_button_by_action(KeypadAction::Backspace).is_none());
    }

    #[test]
    fn test_keypad_handle_click() {
        let keypad = Keypad::new();
        assert_eq!(keypad.handle_click("seven").unwrap(), digit(7));
        assert!(matches!(
            keypad.handle_click("btn-7"),
            Err(CalcError::UnknownButton(_))
        ));
    }

    #[test]
    fn test_keypad_has_every_digit_and_operator() {
        let keypad = Keypad::new();
        for d in Digit::all() {
            assert!(keypad.find_button_by_action(KeypadAction::Digit(d)).is_some());
        }
        for op in Operator::ALL {
            assert!(keypad.find_button_by_action(KeypadAction::Operator(op)).is_some());
        }
    }
}
