//! End-to-end tests for the clickable calculator page
//!
//! Every interaction goes through an element click: the page records it, the
//! input adapter classifies the button, the engine handles the event and the
//! display element shows the result.

use button_calculator::config::CalculatorConfig;
use button_calculator::core::{CalculatorEvent, Operator};
use button_calculator::driver::{run_full_suite, CalculatorDriver};
use button_calculator::web::{DomElement, DomEvent, WebSession, DISPLAY_ID};

fn click_all(session: &mut WebSession, ids: &[&str]) {
    for id in ids {
        session.click(id);
    }
}

// ===== Behavior through clicks =====

#[test]
fn test_full_suite_over_clicks() {
    let mut session = WebSession::new();
    run_full_suite(&mut session);
}

#[test]
fn test_chained_calculation() {
    let mut session = WebSession::new();
    click_all(
        &mut session,
        &["btn-2", "btn-plus", "btn-3", "btn-times", "btn-4", "btn-equals"],
    );
    assert_eq!(session.display_text(), "20");
}

#[test]
fn test_operator_change_before_digits() {
    let mut session = WebSession::new();
    click_all(&mut session, &["btn-5", "btn-plus", "btn-times"]);
    assert_eq!(session.state().first_operand, Some(5.0));
    assert_eq!(session.state().pending_operator, Some(Operator::Multiply));
    assert_eq!(session.display_text(), "5");
}

#[test]
fn test_division_by_zero_then_recover() {
    let mut session = WebSession::new();
    click_all(&mut session, &["btn-8", "btn-divide", "btn-0", "btn-equals"]);
    assert_eq!(session.display_text(), "Infinity");
    click_all(&mut session, &["btn-clear", "btn-4", "btn-minus", "btn-1", "btn-equals"]);
    assert_eq!(session.display_text(), "3");
}

#[test]
fn test_percent_and_delete() {
    let mut session = WebSession::new();
    click_all(&mut session, &["btn-5", "btn-0", "btn-percent"]);
    assert_eq!(session.display_text(), "0.5");
    click_all(&mut session, &["btn-delete", "btn-delete", "btn-delete"]);
    assert_eq!(session.display_text(), "0");
}

#[test]
fn test_decimal_twice() {
    let mut session = WebSession::new();
    click_all(&mut session, &["btn-decimal", "btn-decimal", "btn-3"]);
    assert_eq!(session.display_text(), "0.3");
}

#[test]
fn test_decimal_on_infinity_keeps_value() {
    let mut session = WebSession::new();
    click_all(
        &mut session,
        &["btn-8", "btn-divide", "btn-0", "btn-equals", "btn-decimal"],
    );
    assert_eq!(session.display_text(), "Infinity.");
    session.click("btn-percent");
    assert_eq!(session.display_text(), "Infinity");
}

// ===== Display presentation =====

#[test]
fn test_display_value_attribute_mirrors_text() {
    let mut session = WebSession::new();
    click_all(&mut session, &["btn-9", "btn-9"]);
    let display = session.dom().get_element(DISPLAY_ID).unwrap();
    assert_eq!(display.get_attr("value"), Some("99"));
}

#[test]
fn test_font_shrinks_past_twelve_characters() {
    let mut session = WebSession::new();
    for _ in 0..12 {
        session.click("btn-7");
    }
    assert_eq!(session.display_font_size(), "2.5em");
    session.click("btn-7");
    assert_eq!(session.display_text().len(), 13);
    assert_eq!(session.display_font_size(), "1.8em");
    session.click("btn-delete");
    assert_eq!(session.display_font_size(), "2.5em");
}

#[test]
fn test_custom_font_sizes() {
    let config = CalculatorConfig::from_json_str(
        r#"{"display": {"compact_threshold": 2, "normal_font_size": "3em", "compact_font_size": "2em"}}"#,
    )
    .unwrap();
    let mut session = WebSession::with_config(&config);
    assert_eq!(session.display_font_size(), "3em");
    click_all(&mut session, &["btn-1", "btn-2", "btn-3"]);
    assert_eq!(session.display_font_size(), "2em");
}

// ===== Input adapter boundaries =====

#[test]
fn test_unrecognized_clicks_are_dropped() {
    let mut session = WebSession::new();
    session.dom_mut().register_element(
        DomElement::new("button")
            .with_id("btn-sqrt")
            .with_class("btn")
            .with_class("operator")
            .with_text("√"),
    );
    click_all(&mut session, &["btn-4", "btn-sqrt", "nowhere", DISPLAY_ID]);
    assert_eq!(session.display_text(), "4");
    assert_eq!(session.state().pending_operator, None);
    assert_eq!(session.dom().event_history().len(), 4);
    assert_eq!(session.dom().event_history()[1], DomEvent::click("btn-sqrt"));
}

#[test]
fn test_driver_press_matches_click() {
    let mut by_press = WebSession::new();
    let mut by_click = WebSession::new();
    CalculatorDriver::press(&mut by_press, CalculatorEvent::Digit('6'));
    CalculatorDriver::press(&mut by_press, CalculatorEvent::Operator(Operator::Divide));
    CalculatorDriver::press(&mut by_press, CalculatorEvent::Digit('4'));
    CalculatorDriver::press(&mut by_press, CalculatorEvent::Equals);
    click_all(&mut by_click, &["btn-6", "btn-divide", "btn-4", "btn-equals"]);
    assert_eq!(by_press.display_text(), "1.5");
    assert_eq!(by_press.display_text(), by_click.display_text());
    assert_eq!(by_press.dom().event_history(), by_click.dom().event_history());
}
