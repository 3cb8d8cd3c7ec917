//! Core calculator module
//!
//! The engine, its owned state, the closed operator set and the numeral
//! conversions live here. Nothing in this module knows about buttons,
//! elements or font sizes.

mod engine;
pub mod number;
mod operations;
mod state;

pub use engine::{CalculatorEngine, CalculatorEvent};
pub use number::{format_number, parse_number};
pub use operations::Operator;
pub use state::CalculatorState;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The entry could not be read as a numeral
    #[error("Invalid numeral: {entry:?}")]
    ParseError {
        /// The offending entry text
        entry: String,
    },
}

impl CalcError {
    /// Creates a parse error for the given entry
    #[must_use]
    pub fn parse(entry: &str) -> Self {
        Self::ParseError {
            entry: entry.to_string(),
        }
    }
}
