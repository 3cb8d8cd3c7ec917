//! Calculator session state

use serde::{Deserialize, Serialize};

use super::Operator;

/// Entry shown when nothing has been typed
pub(crate) const DEFAULT_ENTRY: &str = "0";

/// Mutable state owned by one calculator engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Numeral currently being typed or just computed; never empty
    pub current_entry: String,
    /// Left-hand operand of the pending or completed operation
    pub first_operand: Option<f64>,
    /// Operator chosen but not yet applied
    pub pending_operator: Option<Operator>,
    /// Whether the next digit starts a fresh entry
    pub awaiting_new_entry: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_entry: DEFAULT_ENTRY.to_string(),
            first_operand: None,
            pending_operator: None,
            awaiting_new_entry: false,
        }
    }
}

impl CalculatorState {
    /// Returns true if every field holds its initial value
    #[must_use]
    pub fn is_initial(&self) -> bool {
        *self == Self::default()
    }

    /// Restores the initial values in place
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
