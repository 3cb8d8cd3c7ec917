//! Binary arithmetic operators
//!
//! Closed set of four operators applied with IEEE-754 semantics. Division by
//! zero is not an error here: it yields a signed infinity or NaN and the
//! caller displays whatever comes out.

use serde::{Deserialize, Serialize};

/// Type-safe operator enum - compile-time guarantee every operator is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// All operators, in keypad column order
    pub const ALL: [Operator; 4] = [
        Operator::Divide,
        Operator::Multiply,
        Operator::Subtract,
        Operator::Add,
    ];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Returns the name used in element ids
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Subtract => "minus",
            Self::Multiply => "times",
            Self::Divide => "divide",
        }
    }

    /// Recognizes an operator from a button symbol
    ///
    /// Accepts the ASCII symbols as well as the typographic glyphs keypads
    /// usually print (`−`, `×`, `÷`).
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.trim() {
            "+" => Some(Self::Add),
            "-" | "−" => Some(Self::Subtract),
            "*" | "×" => Some(Self::Multiply),
            "/" | "÷" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to two operands
    #[must_use]
    pub fn apply(&self, a: f64, b: f64) -> f64 {
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
