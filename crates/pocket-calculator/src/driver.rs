//! Unified Calculator Driver
//!
//! **Write the scenario once, run it on every front-end.** The engine and
//! the DOM page both implement [`CalculatorDriver`]; the `verify_*`
//! functions below drive any of them through the same key sequences.

use crate::core::{CalcResult, Calculator, ClearLabel, Operator};
use crate::keypad::KeypadAction;

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use pocket_calculator::prelude::*;
///
/// fn verify_addition<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
///     driver.press_sequence("1+2=")?;
///     assert_eq!(driver.display(), "3");
///     Ok(())
/// }
///
/// verify_addition(&mut Calculator::new()).unwrap();
/// verify_addition(&mut DomDriver::new()).unwrap();
/// ```
pub trait CalculatorDriver {
    /// Performs one keypad action
    fn press(&mut self, action: KeypadAction) -> CalcResult<()>;

    /// Performs every action of a key script (see [`KeypadAction::parse_script`])
    fn press_sequence(&mut self, script: &str) -> CalcResult<()> {
        for action in KeypadAction::parse_script(script)? {
            self.press(action)?;
        }
        Ok(())
    }

    /// Gets the display text
    fn display(&self) -> String;

    /// Gets the clear button label
    fn clear_label(&self) -> ClearLabel;

    /// Gets the highlighted operator
    fn active_operator(&self) -> Option<Operator>;

    /// Resets the calculator
    fn clear(&mut self);
}

impl CalculatorDriver for Calculator {
    fn press(&mut self, action: KeypadAction) -> CalcResult<()> {
        action.apply(self);
        Ok(())
    }

    fn display(&self) -> String {
        self.render().display_text
    }

    fn clear_label(&self) -> ClearLabel {
        self.render().clear_label
    }

    fn active_operator(&self) -> Option<Operator> {
        self.state().active_operator
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

// ===== Unified Specifications =====
// These work with ANY CalculatorDriver implementation

fn expect_display<D: CalculatorDriver>(driver: &mut D, script: &str, expected: &str) -> CalcResult<()> {
    driver.clear();
    driver.press_sequence(script)?;
    assert_eq!(driver.display(), expected, "script {script:?}");
    Ok(())
}

/// Verifies the four operations on single-digit operands
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    expect_display(driver, "1+2=", "3")?;
    expect_display(driver, "1-2=", "-1")?;
    expect_display(driver, "1×2=", "2")?;
    expect_display(driver, "5÷2=", "2,5")?;
    driver.clear();
    Ok(())
}

/// Verifies digit and comma entry
pub fn verify_number_entry<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    expect_display(driver, "1,2", "1,2")?;
    expect_display(driver, "007", "7")?;
    expect_display(driver, "1,,2", "1,2")?;
    expect_display(driver, ",5", "0,5")?;
    expect_display(driver, "3,", "3,")?;
    driver.clear();
    Ok(())
}

/// Verifies percentage and sign toggle
pub fn verify_unary_operations<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    expect_display(driver, "1%", "0,01")?;
    expect_display(driver, "1±", "-1")?;
    expect_display(driver, "1±±", "1")?;
    expect_display(driver, "0±", "0")?;
    driver.clear();
    Ok(())
}

/// Verifies left-to-right chaining
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    expect_display(driver, "1+2+", "3")?;
    expect_display(driver, "1+2+3=", "6")?;
    expect_display(driver, "2+3×4=", "20")?;
    // Operator replacement does not fold
    expect_display(driver, "5+-3=", "2")?;
    // Equals without a pending operator changes nothing
    expect_display(driver, "42=", "42")?;
    driver.clear();
    Ok(())
}

/// Verifies the AC/C label
pub fn verify_clear_label<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    assert_eq!(driver.clear_label(), ClearLabel::AllClear);

    driver.press_sequence("5")?;
    assert_eq!(driver.clear_label(), ClearLabel::Clear);

    driver.clear();
    driver.press_sequence("0+")?;
    assert_eq!(driver.clear_label(), ClearLabel::Clear);

    driver.clear();
    assert_eq!(driver.clear_label(), ClearLabel::AllClear);
    Ok(())
}

/// Verifies operator highlighting
pub fn verify_operator_highlight<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    assert_eq!(driver.active_operator(), None);

    driver.press_sequence("5+")?;
    assert_eq!(driver.active_operator(), Some(Operator::Add));

    driver.press_sequence("3")?;
    assert_eq!(driver.active_operator(), Some(Operator::Add));

    driver.press_sequence("÷")?;
    assert_eq!(driver.active_operator(), Some(Operator::Divide));

    driver.press_sequence("2=")?;
    assert_eq!(driver.active_operator(), None);

    driver.press_sequence("×")?;
    driver.clear();
    assert_eq!(driver.active_operator(), None);
    Ok(())
}

/// Verifies IEEE-754 results reach the display
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    expect_display(driver, "1÷0=", "Infinity")?;
    expect_display(driver, "1±÷0=", "-Infinity")?;
    expect_display(driver, "0÷0=", "NaN")?;
    driver.clear();
    Ok(())
}

/// Verifies grouped and exponent notation
pub fn verify_large_numbers<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    expect_display(driver, "1000000", "1.000.000")?;
    expect_display(driver, "99999×99999=", "1,00e+10")?;
    driver.clear();
    Ok(())
}

/// Complete verification suite
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    verify_basic_arithmetic(driver)?;
    verify_number_entry(driver)?;
    verify_unary_operations(driver)?;
    verify_chaining(driver)?;
    verify_clear_label(driver)?;
    verify_operator_highlight(driver)?;
    verify_division_by_zero(driver)?;
    verify_large_numbers(driver)
}
