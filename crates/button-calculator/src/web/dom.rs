//! Mock DOM for the calculator page
//!
//! Enough of a document to host the display element and the keypad buttons,
//! record clicks, and observe what the calculator rendered, all without a
//! browser.

use std::collections::HashMap;

use crate::config::DisplayConfig;
use crate::display::DisplaySink;

/// Id of the display element
pub const DISPLAY_ID: &str = "display";
/// Id of the keypad container element
pub const KEYPAD_ID: &str = "calc-keypad";

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Sets an attribute
    pub fn set_attr(&mut self, key: &str, value: &str) {
        self.attributes.insert(key.to_string(), value.to_string());
    }

    /// Adds a class
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Gets a `data-*` attribute value
    #[must_use]
    pub fn dataset(&self, name: &str) -> Option<&str> {
        self.get_attr(&format!("data-{name}"))
    }
}

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }
}

/// Mock DOM for testing the calculator without a browser
#[derive(Debug, Default)]
pub struct MockDom {
    /// Elements by ID for quick lookup
    elements: HashMap<String, DomElement>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a DOM holding just the calculator display
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();
        let display = DomElement::new("input")
            .with_id(DISPLAY_ID)
            .with_class("display")
            .with_attr("type", "text")
            .with_attr("readonly", "true");
        dom.register_element(display);
        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Number of registered elements
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Dispatches an event, returning the target element if it exists
    pub fn dispatch_event(&mut self, event: DomEvent) -> Option<&DomElement> {
        self.event_history.push(event);
        match self.event_history.last() {
            Some(DomEvent::Click { element_id }) => self.elements.get(element_id),
            None => None,
        }
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Text shown in the display element
    #[must_use]
    pub fn display_text(&self) -> Option<&str> {
        self.get_element_text(DISPLAY_ID)
    }

    /// Font size currently applied to the display element
    #[must_use]
    pub fn display_font_size(&self) -> Option<&str> {
        self.get_element(DISPLAY_ID)
            .and_then(|e| e.get_attr("style-font-size"))
    }
}

/// Display sink writing to the mock DOM's display element
#[derive(Debug)]
pub struct DomDisplay<'a> {
    dom: &'a mut MockDom,
    config: &'a DisplayConfig,
}

impl<'a> DomDisplay<'a> {
    /// Wraps a DOM and the presentation settings to apply
    pub fn new(dom: &'a mut MockDom, config: &'a DisplayConfig) -> Self {
        Self { dom, config }
    }
}

impl DisplaySink for DomDisplay<'_> {
    fn render(&mut self, text: &str) {
        let font_size = self.config.css_font_size(self.config.font_size_for(text));
        if let Some(display) = self.dom.get_element_mut(DISPLAY_ID) {
            display.set_text(text);
            display.set_attr("value", text);
            display.set_attr("style-font-size", font_size);
        }
    }
}
