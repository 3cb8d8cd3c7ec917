//! Web session - click wiring between page, engine and display
//!
//! A session owns one engine, the mock page and the display settings. Each
//! click is recorded on the page, classified by the input adapter, handled by
//! the engine and rendered back into the display element.

use tracing::debug;

use super::dom::{DomDisplay, DomEvent, MockDom};
use super::keypad::{classify_button, Keypad};
use crate::config::{CalculatorConfig, DisplayConfig};
use crate::core::{CalculatorEngine, CalculatorEvent, CalculatorState};

/// Calculator page session wrapping engine and mock DOM
#[derive(Debug)]
pub struct WebSession {
    /// The calculator engine
    engine: CalculatorEngine,
    /// Mock page hosting display and keypad
    dom: MockDom,
    /// Keypad layout mounted on the page
    keypad: Keypad,
    /// Display presentation settings
    display_config: DisplayConfig,
}

impl Default for WebSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WebSession {
    /// Creates a mounted session with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&CalculatorConfig::default())
    }

    /// Creates a mounted session using the given configuration
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        let keypad = Keypad::new();
        let mut dom = MockDom::calculator();
        keypad.mount(&mut dom);

        let mut session = Self {
            engine: CalculatorEngine::new(),
            dom,
            keypad,
            display_config: config.display.clone(),
        };
        session.render();
        session
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns the engine state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        self.engine.state()
    }

    /// Returns the page
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns the page mutably
    pub fn dom_mut(&mut self) -> &mut MockDom {
        &mut self.dom
    }

    /// Drops the recorded click history
    ///
    /// The page records every click it receives, so long-running sessions
    /// should call this periodically. Calculator state is untouched.
    pub fn clear_event_history(&mut self) {
        self.dom.clear_event_history();
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Simulates a click on an element
    ///
    /// Returns the event forwarded to the engine, or `None` when the element
    /// is missing or is not a calculator button.
    pub fn click(&mut self, element_id: &str) -> Option<CalculatorEvent> {
        let event = self
            .dom
            .dispatch_event(DomEvent::click(element_id))
            .and_then(classify_button);

        let Some(event) = event else {
            debug!(element_id, "click not forwarded to calculator");
            return None;
        };

        let mut display = DomDisplay::new(&mut self.dom, &self.display_config);
        self.engine.dispatch(event, &mut display);
        Some(event)
    }

    /// Clicks the keypad button producing an event
    pub fn press(&mut self, event: CalculatorEvent) -> Option<CalculatorEvent> {
        let id = self.keypad.find_button_for(event)?.id.clone();
        self.click(&id)
    }

    /// Clicks a series of keypad buttons
    pub fn press_all(&mut self, events: &[CalculatorEvent]) {
        for event in events {
            self.press(*event);
        }
    }

    /// Text shown in the display element
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.dom.display_text().unwrap_or_default()
    }

    /// Font size applied to the display element
    #[must_use]
    pub fn display_font_size(&self) -> &str {
        self.dom.display_font_size().unwrap_or_default()
    }

    /// Re-renders the engine's entry into the display element
    fn render(&mut self) {
        let mut display = DomDisplay::new(&mut self.dom, &self.display_config);
        self.engine.render(&mut display);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;
    use crate::web::dom::{DomElement, DISPLAY_ID};

    // ===== Construction tests =====

    #[test]
    fn test_session_renders_initial_zero() {
        let session = WebSession::new();
        assert_eq!(session.display_text(), "0");
        assert_eq!(session.display_font_size(), "2.5em");
        assert!(session.state().is_initial());
        assert!(session.dom().event_history().is_empty());
    }

    #[test]
    fn test_session_with_config() {
        let config = CalculatorConfig::builder()
            .compact_threshold(3)
            .compact_font_size("1em")
            .build()
            .unwrap();
        let mut session = WebSession::with_config(&config);
        for id in ["btn-1", "btn-2", "btn-3", "btn-4"] {
            session.click(id);
        }
        assert_eq!(session.display_text(), "1234");
        assert_eq!(session.display_font_size(), "1em");
    }

    // ===== Click tests =====

    #[test]
    fn test_click_digit_updates_display() {
        let mut session = WebSession::new();
        assert_eq!(session.click("btn-7"), Some(CalculatorEvent::Digit('7')));
        assert_eq!(session.display_text(), "7");
        assert_eq!(session.dom().event_history(), [DomEvent::click("btn-7")]);
    }

    #[test]
    fn test_clear_event_history_keeps_calculation() {
        let mut session = WebSession::new();
        for id in ["btn-4", "btn-plus", "btn-5"] {
            session.click(id);
        }
        assert_eq!(session.dom().event_history().len(), 3);
        session.clear_event_history();
        assert!(session.dom().event_history().is_empty());
        session.click("btn-equals");
        assert_eq!(session.display_text(), "9");
        assert_eq!(session.dom().event_history(), [DomEvent::click("btn-equals")]);
    }

    #[test]
    fn test_click_unknown_element_not_forwarded() {
        let mut session = WebSession::new();
        assert_eq!(session.click("btn-power"), None);
        assert_eq!(session.click(DISPLAY_ID), None);
        assert!(session.state().is_initial());
        assert_eq!(session.dom().event_history().len(), 2);
    }

    #[test]
    fn test_click_foreign_button_not_forwarded() {
        let mut session = WebSession::new();
        session
            .dom_mut()
            .register_element(DomElement::new("button").with_id("help").with_text("?"));
        assert_eq!(session.click("help"), None);
        assert_eq!(session.display_text(), "0");
    }

    #[test]
    fn test_calculation_through_clicks() {
        let mut session = WebSession::new();
        for id in ["btn-1", "btn-2", "btn-times", "btn-3", "btn-equals"] {
            session.click(id);
        }
        assert_eq!(session.display_text(), "36");
    }

    // ===== Press tests =====

    #[test]
    fn test_press_routes_through_keypad() {
        let mut session = WebSession::new();
        session.press_all(&[
            CalculatorEvent::Digit('9'),
            CalculatorEvent::Operator(Operator::Subtract),
            CalculatorEvent::Digit('4'),
            CalculatorEvent::Equals,
        ]);
        assert_eq!(session.display_text(), "5");
        assert_eq!(session.dom().event_history().len(), 4);
        assert_eq!(session.dom().event_history()[1], DomEvent::click("btn-minus"));
    }

    #[test]
    fn test_press_digit_without_button() {
        let mut session = WebSession::new();
        assert_eq!(session.press(CalculatorEvent::Digit('x')), None);
        assert!(session.dom().event_history().is_empty());
    }

    #[test]
    fn test_long_result_switches_font() {
        let mut session = WebSession::new();
        session.press_all(&[
            CalculatorEvent::Digit('1'),
            CalculatorEvent::Operator(Operator::Divide),
            CalculatorEvent::Digit('3'),
            CalculatorEvent::Equals,
        ]);
        assert_eq!(session.display_text(), "0.3333333333333333");
        assert_eq!(session.display_font_size(), "1.8em");
        session.press(CalculatorEvent::Clear);
        assert_eq!(session.display_font_size(), "2.5em");
    }
}
