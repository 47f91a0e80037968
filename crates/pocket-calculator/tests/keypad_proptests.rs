//! Property-based tests for the keypad and key mapping

#![allow(clippy::unwrap_used)]

use pocket_calculator::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

/// Generate any valid digit (0-9)
fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

/// Generate any operator
fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

/// Generate any keypad action
fn keypad_action_strategy() -> impl Strategy<Value = KeypadAction> {
    prop_oneof![
        digit_strategy().prop_map(|d| KeypadAction::digit(d).unwrap()),
        Just(KeypadAction::Decimal),
        operator_strategy().prop_map(KeypadAction::Operator),
        Just(KeypadAction::Equals),
        Just(KeypadAction::Clear),
        Just(KeypadAction::ToggleSign),
        Just(KeypadAction::Percent),
        Just(KeypadAction::Backspace),
    ]
}

/// Generate valid grid positions
fn grid_position_strategy() -> impl Strategy<Value = (usize, usize)> {
    (0usize..5usize, 0usize..4usize)
}

// ===== KeypadAction =====

proptest! {
    /// Digit actions carry their value
    #[test]
    fn prop_digit_action_value(d in digit_strategy()) {
        let action = KeypadAction::digit(d).unwrap();
        prop_assert_eq!(action, KeypadAction::Digit(Digit::new(d).unwrap()));
        prop_assert_eq!(action.label(), d.to_string());
    }

    /// Out-of-range digits are rejected, never wrapped
    #[test]
    fn prop_digit_out_of_range(d in 10u8..=u8::MAX) {
        prop_assert!(KeypadAction::digit(d).is_err());
    }

    /// Every action has a non-empty label and element id
    #[test]
    fn prop_action_has_label_and_id(action in keypad_action_strategy()) {
        prop_assert!(!action.label().is_empty());
        prop_assert!(!action.element_id().is_empty());
    }

    /// Single-digit key names map to digit actions
    #[test]
    fn prop_digit_keys(d in digit_strategy()) {
        let action = KeypadAction::from_key(&d.to_string());
        prop_assert_eq!(action, Some(KeypadAction::digit(d).unwrap()));
    }

    /// Letters other than c/C are ignored
    #[test]
    fn prop_letters_ignored(ch in "[a-bd-zA-BD-Z]") {
        prop_assert_eq!(KeypadAction::from_key(&ch), None);
    }

    /// A script of digits parses to the same digits
    #[test]
    fn prop_script_of_digits(digits in "[0-9]{1,12}") {
        let actions = KeypadAction::parse_script(&digits).unwrap();
        prop_assert_eq!(actions.len(), digits.len());
        for (action, ch) in actions.iter().zip(digits.chars()) {
            prop_assert_eq!(*action, KeypadAction::Digit(Digit::from_char(ch).unwrap()));
        }
    }
}

// ===== Keypad =====

proptest! {
    /// Every cell of the grid holds a button
    #[test]
    fn prop_grid_fully_covered((row, col) in grid_position_strategy()) {
        let keypad = Keypad::new();
        prop_assert!(keypad.get_button_at(row, col).is_some());
    }

    /// The button at a cell covers that cell
    #[test]
    fn prop_button_at_covers_cell((row, col) in grid_position_strategy()) {
        let keypad = Keypad::new();
        let btn = keypad.get_button_at(row, col).unwrap();
        prop_assert!(btn.covers(row, col));
    }

    /// Positions outside the grid hold nothing
    #[test]
    fn prop_outside_grid_empty(row in 5usize..100, col in 4usize..100) {
        let keypad = Keypad::new();
        prop_assert!(keypad.get_button_at(row, 0).is_none());
        prop_assert!(keypad.get_button_at(0, col).is_none());
    }

    /// Clicking a button's id resolves back to its action
    #[test]
    fn prop_click_id_round_trip((row, col) in grid_position_strategy()) {
        let keypad = Keypad::new();
        let btn = keypad.get_button_at(row, col).unwrap();
        prop_assert_eq!(keypad.handle_click(btn.id()).unwrap(), btn.action);
    }

    /// Unknown ids are errors, not panics
    #[test]
    fn prop_unknown_id_is_error(id in "[a-z]{12,20}") {
        let keypad = Keypad::new();
        prop_assert!(keypad.handle_click(&id).is_err());
    }

    /// Every action keeps the engine's display non-empty
    #[test]
    fn prop_actions_keep_display(actions in prop::collection::vec(keypad_action_strategy(), 0..40)) {
        let mut calc = Calculator::new();
        for action in actions {
            let render = action.apply(&mut calc);
            prop_assert!(!render.display_text.is_empty());
        }
    }
}

#[test]
fn test_button_ids_unique() {
    let keypad = Keypad::new();
    let mut ids: Vec<&str> = keypad.buttons().iter().map(|b| b.id()).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}
