//! Registry Wiring
//!
//! This example builds rules by name from a JSON document, the way an
//! application would load field rules from its configuration.
//!
//! Key concepts:
//! - The registry maps rule names to constructors, populated up front
//! - Qualified names resolve by their last segment
//! - Unknown options are kept as residual options, not rejected
//! - Custom rules register alongside the built-ins
//!
//! Run with: cargo run --example registry_wiring

use vetting::config::{Configuration, FromConfig, Residual};
use vetting::core::{accept, Outcome, Validator, Value};
use vetting::registry::{Registry, RegistryError};

/// Trims surrounding whitespace from text values.
struct Trim {
    residual: Residual,
}

impl FromConfig for Trim {
    fn from_config(config: Configuration) -> Self {
        Self {
            residual: config.into_residual(),
        }
    }
}

impl Validator for Trim {
    fn name(&self) -> &str {
        "Trim"
    }

    fn residual(&self) -> &Residual {
        &self.residual
    }

    fn validate(&self, value: Value, _context: Option<&Value>) -> Outcome {
        match value {
            Value::String(s) => accept(Value::from(s.trim())),
            other => accept(other),
        }
    }
}

const DOCUMENT: &str = r#"[
    {"rule": "Trim"},
    {"rule": "schema::AlwaysRequired"},
    {"rule": "schema::Length", "min": 3, "max": 12, "label": "Username"}
]"#;

fn load(registry: &Registry) -> Result<Vec<Box<dyn Validator>>, RegistryError> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(DOCUMENT).map_err(vetting::config::ConfigError::from)?;

    entries
        .into_iter()
        .map(|entry| {
            let mut config = Configuration::from_json(entry)?;
            let name = config.take("rule").map(|v| v.to_string()).unwrap_or_default();
            registry.build(&name, config)
        })
        .collect()
}

fn main() -> Result<(), RegistryError> {
    println!("=== Registry Wiring Example ===\n");

    let mut registry = Registry::new();
    registry.register::<Trim>("Trim");
    println!("Registered rules: {:?}\n", registry.names());

    let rules = load(&registry)?;
    for rule in &rules {
        if let Some(label) = rule.option("label") {
            println!("Rule {} carries residual option label = {label}", rule.name());
        }
    }
    println!();

    let path = Value::from("user.name");
    for input in ["  alice  ", "  ", "al", "a-very-long-username"] {
        let result = rules.iter().try_fold(Value::from(input), |value, rule| {
            rule.validate(value, Some(&path)).into_result()
        });

        match result {
            Ok(value) => println!("  {input:?} -> accepted as {value:?}"),
            Err(concern) => println!("  {input:?} -> {concern}"),
        }
    }

    match registry.build("Email", Configuration::new()) {
        Ok(_) => println!("\nUnexpectedly found an Email rule"),
        Err(err) => println!("\nLooking up an unregistered rule: {err}"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
