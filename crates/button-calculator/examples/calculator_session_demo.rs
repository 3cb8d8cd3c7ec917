//! Calculator Session Demo
//!
//! Replays a few button sequences on the mock page with logging enabled.
//!
//! Run with: RUST_LOG=button_calculator=debug cargo run --example calculator_session_demo
//! Optionally pass a YAML or JSON config file as the first argument.

use button_calculator::config::CalculatorConfig;
use button_calculator::web::WebSession;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => CalculatorConfig::load(path)?,
        None => CalculatorConfig::default(),
    };

    let scripts: [(&str, &[&str]); 5] = [
        (
            "left-to-right chaining",
            &["btn-2", "btn-plus", "btn-3", "btn-times", "btn-4", "btn-equals"],
        ),
        ("operator change", &["btn-5", "btn-plus", "btn-times", "btn-2", "btn-equals"]),
        ("division by zero", &["btn-8", "btn-divide", "btn-0", "btn-equals"]),
        ("percent", &["btn-5", "btn-0", "btn-percent"]),
        ("long result", &["btn-1", "btn-divide", "btn-3", "btn-equals"]),
    ];

    println!("Button Calculator - mock page session");
    println!("=====================================");

    for (name, clicks) in scripts {
        let mut session = WebSession::with_config(&config);
        for id in clicks {
            session.click(id);
        }
        println!(
            "{name:<24} {:<40} => {:>20} ({})",
            clicks.join(" "),
            session.display_text(),
            session.display_font_size()
        );
    }

    Ok(())
}
