//! Unified Calculator Driver
//!
//! Write the behavior checks once and run them against every front end: the
//! bare engine and the clickable web session both implement
//! [`CalculatorDriver`], and the `verify_*` functions below drive either one
//! through button events only.

use crate::core::{CalculatorEngine, CalculatorEvent, CalculatorState, Operator};
use crate::web::WebSession;

/// Abstract driver trait for calculator interactions
pub trait CalculatorDriver {
    /// Presses the button for an event
    fn press(&mut self, event: CalculatorEvent);

    /// Gets the text currently displayed
    fn display(&self) -> String;

    /// Gets the engine state
    fn state(&self) -> &CalculatorState;

    /// Presses the all-clear button
    fn clear(&mut self) {
        self.press(CalculatorEvent::Clear);
    }

    /// Types each digit of a string
    fn type_digits(&mut self, digits: &str) {
        for d in digits.chars() {
            self.press(CalculatorEvent::Digit(d));
        }
    }

    /// Presses an operator button
    fn press_operator(&mut self, op: Operator) {
        self.press(CalculatorEvent::Operator(op));
    }
}

impl CalculatorDriver for CalculatorEngine {
    fn press(&mut self, event: CalculatorEvent) {
        self.handle(event);
    }

    fn display(&self) -> String {
        CalculatorEngine::display(self).to_string()
    }

    fn state(&self) -> &CalculatorState {
        CalculatorEngine::state(self)
    }
}

impl CalculatorDriver for WebSession {
    fn press(&mut self, event: CalculatorEvent) {
        WebSession::press(self, event);
    }

    fn display(&self) -> String {
        self.display_text().to_string()
    }

    fn state(&self) -> &CalculatorState {
        WebSession::state(self)
    }
}

// ===== Unified Checks =====
// These work with ANY CalculatorDriver implementation

/// Verifies digits concatenate and leading zeros collapse
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_digits("123");
    assert_eq!(driver.display(), "123");
    driver.clear();

    driver.type_digits("007");
    assert_eq!(driver.display(), "7");
    driver.clear();
}

/// Verifies a second decimal press changes nothing
pub fn verify_decimal_idempotence<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press(CalculatorEvent::Decimal);
    driver.press(CalculatorEvent::Decimal);
    assert_eq!(driver.display(), "0.");
    driver.type_digits("25");
    driver.press(CalculatorEvent::Decimal);
    assert_eq!(driver.display(), "0.25");
    driver.clear();
}

/// Verifies operators chain left to right without precedence
pub fn verify_left_to_right_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_digits("2");
    driver.press_operator(Operator::Add);
    driver.type_digits("3");
    driver.press_operator(Operator::Multiply);
    driver.type_digits("4");
    driver.press(CalculatorEvent::Equals);
    assert_eq!(driver.display(), "20");
    driver.clear();
}

/// Verifies a second operator press replaces the first
pub fn verify_operator_replacement<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_digits("5");
    driver.press_operator(Operator::Add);
    driver.press_operator(Operator::Multiply);
    assert_eq!(driver.state().first_operand, Some(5.0));
    assert_eq!(driver.state().pending_operator, Some(Operator::Multiply));
    driver.type_digits("2");
    driver.press(CalculatorEvent::Equals);
    assert_eq!(driver.display(), "10");
    driver.clear();
}

/// Verifies division by zero displays infinity instead of failing
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_digits("8");
    driver.press_operator(Operator::Divide);
    driver.type_digits("0");
    driver.press(CalculatorEvent::Equals);
    assert_eq!(driver.display(), "Infinity");
    driver.clear();
}

/// Verifies delete drops characters and bottoms out at zero
pub fn verify_delete<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_digits("7");
    driver.press(CalculatorEvent::Delete);
    assert_eq!(driver.display(), "0");

    driver.type_digits("456");
    driver.press(CalculatorEvent::Delete);
    assert_eq!(driver.display(), "45");
    driver.clear();
}

/// Verifies percent divides the entry by one hundred
pub fn verify_percent<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_digits("50");
    driver.press(CalculatorEvent::Percent);
    assert_eq!(driver.display(), "0.5");
    driver.clear();
}

/// Verifies clear restores the initial state from a busy one
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.type_digits("9");
    driver.press_operator(Operator::Subtract);
    driver.type_digits("1");
    driver.press(CalculatorEvent::Decimal);
    driver.clear();
    assert!(driver.state().is_initial());
    assert_eq!(driver.display(), "0");
}

/// Complete verification suite - runs every check
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_decimal_idempotence(driver);
    verify_left_to_right_chaining(driver);
    verify_operator_replacement(driver);
    verify_division_by_zero(driver);
    verify_delete(driver);
    verify_percent(driver);
    verify_clear(driver);
}
