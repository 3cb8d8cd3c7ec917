//! Calculator engine - the input/accumulator state machine
//!
//! Every operation mutates the owned [`CalculatorState`] in place and leaves
//! a displayable entry behind. Nothing here fails: an entry that cannot be
//! read as a numeral counts as zero, and non-finite results are shown as
//! their textual markers.
//!
//! Chained operators are applied strictly left to right, so `2 + 3 * 4 =`
//! shows `20`.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::number::{format_number, parse_number};
use super::state::DEFAULT_ENTRY;
use super::{CalculatorState, Operator};
use crate::display::DisplaySink;

/// Classified input events accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorEvent {
    /// A digit key (`'0'..='9'`)
    Digit(char),
    /// The decimal point key
    Decimal,
    /// One of the four operator keys
    Operator(Operator),
    /// The equals key
    Equals,
    /// The all-clear key
    Clear,
    /// The delete-last-character key
    Delete,
    /// The percent key
    Percent,
}

impl CalculatorEvent {
    /// Returns the keypad label for this event
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "AC".to_string(),
            Self::Delete => "DEL".to_string(),
            Self::Percent => "%".to_string(),
        }
    }
}

/// Button-driven calculator engine
#[derive(Debug, Clone, Default)]
pub struct CalculatorEngine {
    state: CalculatorState,
}

impl CalculatorEngine {
    /// Creates an engine in its initial state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine resuming from an existing state
    ///
    /// An empty entry is restored to `"0"`.
    #[must_use]
    pub fn with_state(mut state: CalculatorState) -> Self {
        if state.current_entry.is_empty() {
            warn!("restoring empty entry to default");
            state.current_entry = DEFAULT_ENTRY.to_string();
        }
        Self { state }
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Consumes the engine, returning its state
    #[must_use]
    pub fn into_state(self) -> CalculatorState {
        self.state
    }

    /// Returns the display string
    #[must_use]
    pub fn display(&self) -> &str {
        &self.state.current_entry
    }

    /// Runs the operation for an event and returns the new display string
    pub fn handle(&mut self, event: CalculatorEvent) -> &str {
        match event {
            CalculatorEvent::Digit(d) => self.digit(d),
            CalculatorEvent::Decimal => self.decimal_point(),
            CalculatorEvent::Operator(op) => self.operator(op),
            CalculatorEvent::Equals => self.equals(),
            CalculatorEvent::Clear => self.clear(),
            CalculatorEvent::Delete => self.delete_last_character(),
            CalculatorEvent::Percent => self.percent(),
        }
        debug!(
            ?event,
            entry = %self.state.current_entry,
            first_operand = ?self.state.first_operand,
            pending_operator = ?self.state.pending_operator,
            "handled calculator event"
        );
        self.display()
    }

    /// Handles an event and renders the result to a display sink
    pub fn dispatch<S: DisplaySink + ?Sized>(&mut self, event: CalculatorEvent, sink: &mut S) {
        let text = self.handle(event);
        sink.render(text);
    }

    /// Renders the current entry without changing state
    pub fn render<S: DisplaySink + ?Sized>(&self, sink: &mut S) {
        sink.render(self.display());
    }

    /// Types a digit
    pub fn digit(&mut self, d: char) {
        if !d.is_ascii_digit() {
            warn!(digit = ?d, "ignoring non-digit character");
            return;
        }

        let state = &mut self.state;
        if state.awaiting_new_entry {
            state.current_entry = d.to_string();
            state.awaiting_new_entry = false;
        } else if state.current_entry == DEFAULT_ENTRY {
            state.current_entry = d.to_string();
        } else {
            state.current_entry.push(d);
        }
    }

    /// Types the decimal point; a second press has no effect
    pub fn decimal_point(&mut self) {
        if !self.state.current_entry.contains('.') {
            self.state.current_entry.push('.');
        }
    }

    /// Selects an operator, applying the pending one first if needed
    pub fn operator(&mut self, op: Operator) {
        let value = self.entry_value();
        let state = &mut self.state;

        if state.pending_operator.is_some() && state.awaiting_new_entry {
            trace!(from = ?state.pending_operator, to = ?op, "replacing pending operator");
            state.pending_operator = Some(op);
            return;
        }

        match (state.first_operand, state.pending_operator) {
            (Some(first), Some(pending)) => {
                let result = pending.apply(first, value);
                state.current_entry = format_number(result);
                state.first_operand = Some(result);
            }
            _ => state.first_operand = Some(value),
        }

        state.awaiting_new_entry = true;
        state.pending_operator = Some(op);
    }

    /// Re-applies the pending operator against the current entry
    ///
    /// Without a pending operator nothing is computed; in every case the next
    /// digit starts a fresh entry.
    pub fn equals(&mut self) {
        if let Some(op) = self.state.pending_operator {
            self.operator(op);
        }
        self.state.awaiting_new_entry = true;
    }

    /// Resets every field to its initial value
    pub fn clear(&mut self) {
        self.state.reset();
    }

    /// Drops the last character of the entry
    pub fn delete_last_character(&mut self) {
        let entry = &mut self.state.current_entry;
        if entry.chars().count() > 1 {
            entry.pop();
        } else {
            *entry = DEFAULT_ENTRY.to_string();
        }
    }

    /// Divides the entry by one hundred
    pub fn percent(&mut self) {
        let value = self.entry_value();
        self.state.current_entry = format_number(value / 100.0);
    }

    /// Numeric value of the entry, zero if it is not a numeral
    fn entry_value(&self) -> f64 {
        parse_number(&self.state.current_entry).unwrap_or_else(|err| {
            warn!(%err, "treating unreadable entry as zero");
            0.0
        })
    }
}
