//! Button Calculator
//!
//! A basic arithmetic calculator driven by button clicks. The engine is a
//! small state machine that turns digit, decimal, operator, equals, clear,
//! delete and percent events into a running calculation and a display
//! string. Operators chain strictly left to right; there is no precedence.
//!
//! # Layers
//!
//! - [`core`]: engine, owned state, operators, numeral formatting
//! - [`display`]: the [`display::DisplaySink`] seam and font sizing
//! - [`config`]: presentation settings from YAML or JSON
//! - [`web`]: mock page, keypad, click classification and session wiring
//! - [`driver`]: one set of behavior checks for every front end
//!
//! # Example
//!
//! ```rust
//! use button_calculator::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! engine.handle(CalculatorEvent::Digit('2'));
//! engine.handle(CalculatorEvent::Operator(Operator::Add));
//! engine.handle(CalculatorEvent::Digit('3'));
//! engine.handle(CalculatorEvent::Operator(Operator::Multiply));
//! engine.handle(CalculatorEvent::Digit('4'));
//! assert_eq!(engine.handle(CalculatorEvent::Equals), "20");
//!
//! // The same keys, clicked on the mock page
//! let mut session = WebSession::new();
//! for id in ["btn-8", "btn-divide", "btn-0", "btn-equals"] {
//!     session.click(id);
//! }
//! assert_eq!(session.display_text(), "Infinity");
//! ```

// Allow common test patterns in this crate
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
pub mod display;
pub mod driver;
pub mod web;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, ConfigError, ConfigResult, DisplayConfig};
    pub use crate::core::{
        format_number, parse_number, CalcError, CalcResult, CalculatorEngine, CalculatorEvent,
        CalculatorState, Operator,
    };
    pub use crate::display::{DisplaySink, FontSize, RecordingDisplay};
    pub use crate::driver::CalculatorDriver;
    pub use crate::web::{classify_button, DomElement, DomEvent, Keypad, MockDom, WebSession};
}
