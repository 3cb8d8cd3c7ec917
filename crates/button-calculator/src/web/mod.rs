//! Web front end for the calculator
//!
//! A mock page with a display element and a keypad, the input adapter that
//! classifies button clicks, and the session that wires them to the engine.
//! Real browser attachment stays outside this crate; everything here runs in
//! plain unit tests.

mod dom;
mod keypad;
mod session;

pub use dom::{DomDisplay, DomElement, DomEvent, MockDom, DISPLAY_ID, KEYPAD_ID};
pub use keypad::{button_id, classify_button, Keypad, KeypadButtonDef, BUTTON_CLASS};
pub use session::WebSession;
