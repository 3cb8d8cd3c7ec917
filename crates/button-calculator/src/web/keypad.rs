//! Calculator keypad and input adapter
//!
//! The keypad describes the buttons on the page; [`classify_button`] turns a
//! clicked button element back into a [`CalculatorEvent`] by looking only at
//! its classes, `data-action` and text, the same attributes the page markup
//! carries.
//!
//! Layout:
//! ```text
//! [ AC ] [ DEL ] [ % ] [ ÷ ]
//! [ 7  ] [ 8   ] [ 9 ] [ × ]
//! [ 4  ] [ 5   ] [ 6 ] [ − ]
//! [ 1  ] [ 2   ] [ 3 ] [ + ]
//! [ 0  ] [ .   ] [ = ]
//! ```

use super::dom::{DomElement, MockDom, KEYPAD_ID};
use crate::core::{CalculatorEvent, Operator};

/// Class every keypad button carries
pub const BUTTON_CLASS: &str = "btn";

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The event this button produces
    pub event: CalculatorEvent,
    /// The DOM element ID for this button
    pub id: String,
    /// Text printed on the button
    pub label: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(event: CalculatorEvent, row: usize, col: usize) -> Self {
        Self {
            event,
            id: button_id(event),
            label: button_label(event),
            row,
            col,
        }
    }

    /// Builds the DOM element for this button
    #[must_use]
    pub fn to_element(&self) -> DomElement {
        let elem = DomElement::new("button")
            .with_id(&self.id)
            .with_text(&self.label)
            .with_class(BUTTON_CLASS)
            .with_class(&format!("keypad-row-{}", self.row))
            .with_class(&format!("keypad-col-{}", self.col));

        match self.event {
            CalculatorEvent::Digit(_) => elem.with_class("number"),
            CalculatorEvent::Decimal => elem.with_class("decimal"),
            CalculatorEvent::Operator(_) => elem.with_class("operator"),
            CalculatorEvent::Equals => elem.with_class("equals"),
            CalculatorEvent::Clear => elem.with_class("operator").with_class("clear-btn"),
            CalculatorEvent::Delete => elem.with_class("operator").with_attr("data-action", "delete"),
            CalculatorEvent::Percent => {
                elem.with_class("operator").with_attr("data-action", "percent")
            }
        }
    }
}

/// Element id for the button producing an event
#[must_use]
pub fn button_id(event: CalculatorEvent) -> String {
    match event {
        CalculatorEvent::Digit(d) => format!("btn-{d}"),
        CalculatorEvent::Decimal => "btn-decimal".to_string(),
        CalculatorEvent::Operator(op) => format!("btn-{}", op.name()),
        CalculatorEvent::Equals => "btn-equals".to_string(),
        CalculatorEvent::Clear => "btn-clear".to_string(),
        CalculatorEvent::Delete => "btn-delete".to_string(),
        CalculatorEvent::Percent => "btn-percent".to_string(),
    }
}

/// Printed label for the button producing an event
fn button_label(event: CalculatorEvent) -> String {
    match event {
        CalculatorEvent::Operator(Operator::Subtract) => "−".to_string(),
        CalculatorEvent::Operator(Operator::Multiply) => "×".to_string(),
        CalculatorEvent::Operator(Operator::Divide) => "÷".to_string(),
        other => other.label(),
    }
}

/// Classifies a clicked element into a calculator event
///
/// Returns `None` for anything that is not a recognizable calculator button;
/// such clicks are simply not forwarded to the engine.
#[must_use]
pub fn classify_button(element: &DomElement) -> Option<CalculatorEvent> {
    if !element.has_class(BUTTON_CLASS) {
        return None;
    }

    if element.has_class("number") {
        let mut chars = element.text_content.trim().chars();
        return match (chars.next(), chars.next()) {
            (Some(d), None) if d.is_ascii_digit() => Some(CalculatorEvent::Digit(d)),
            _ => None,
        };
    }

    if element.has_class("decimal") {
        return Some(CalculatorEvent::Decimal);
    }

    if element.has_class("operator") {
        return match element.dataset("action") {
            Some("delete") => Some(CalculatorEvent::Delete),
            Some("percent") => Some(CalculatorEvent::Percent),
            _ if element.has_class("clear-btn") => Some(CalculatorEvent::Clear),
            _ => Operator::from_symbol(&element.text_content).map(CalculatorEvent::Operator),
        };
    }

    if element.has_class("equals") {
        return Some(CalculatorEvent::Equals);
    }

    None
}

/// Calculator keypad layout
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Button definitions, row by row
    buttons: Vec<KeypadButtonDef>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        use CalculatorEvent::{Clear, Decimal, Delete, Digit, Equals, Percent};
        let op = CalculatorEvent::Operator;

        let layout: [&[CalculatorEvent]; 5] = [
            &[Clear, Delete, Percent, op(Operator::Divide)],
            &[Digit('7'), Digit('8'), Digit('9'), op(Operator::Multiply)],
            &[Digit('4'), Digit('5'), Digit('6'), op(Operator::Subtract)],
            &[Digit('1'), Digit('2'), Digit('3'), op(Operator::Add)],
            &[Digit('0'), Decimal, Equals],
        ];

        let buttons = layout
            .iter()
            .enumerate()
            .flat_map(|(row, events)| {
                events
                    .iter()
                    .enumerate()
                    .map(move |(col, event)| KeypadButtonDef::new(*event, row, col))
            })
            .collect();

        Self {
            buttons,
            cols: 4,
            rows: layout.len(),
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button producing an event
    #[must_use]
    pub fn find_button_for(&self, event: CalculatorEvent) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.event == event)
    }

    /// Creates a keypad container element with all buttons
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        self.buttons.iter().fold(
            DomElement::new("div").with_id(KEYPAD_ID).with_class("keypad"),
            |keypad, btn| keypad.with_child(btn.to_element()),
        )
    }

    /// Registers the keypad container and every button in a DOM
    pub fn mount(&self, dom: &mut MockDom) {
        dom.register_element(self.create_keypad_element());
        for btn in &self.buttons {
            dom.register_element(btn.to_element());
        }
    }
}
