//! Basic Rules
//!
//! This example walks through the built-in rule catalog.
//!
//! Key concepts:
//! - Rules are built once from a configuration and reused
//! - Validation returns the value or a Concern, never panics
//! - Truthiness and emptiness are different questions
//! - Length bounds and steps
//!
//! Run with: cargo run --example basic_rules

use vetting::config::{Configuration, FromConfig};
use vetting::core::{Outcome, OutcomeExt, Validator, Value};
use vetting::rules::{AlwaysRequired, AlwaysTruthy, Contains, In, Length};

fn describe(outcome: &Outcome) -> String {
    match (outcome.passed(), outcome.rendered()) {
        (Some(value), _) => format!("ok: {value:?}"),
        (None, Some(concern)) => format!("concern: {concern}"),
        (None, None) => unreachable!("an outcome is either a value or a concern"),
    }
}

fn show(rule: &dyn Validator, value: Value) {
    let label = format!("{value:?}");
    let outcome = rule.validate(value, None);
    println!("  {:<14} {:<28} -> {}", rule.name(), label, describe(&outcome));
}

fn main() {
    println!("=== Basic Rules Example ===\n");

    // Example 1: Truthiness versus emptiness
    println!("Example 1: Truthy vs Required");
    let truthy = AlwaysTruthy::default();
    let required = AlwaysRequired::default();
    for value in [Value::from(0), Value::from(""), Value::Null] {
        show(&truthy, value.clone());
        show(&required, value);
    }
    println!();

    // Example 2: Membership
    println!("Example 2: Choices with labels");
    let sizes = In::from_config(
        Configuration::new().set(
            "choices",
            Value::sequence([Value::from("s"), Value::from("m"), Value::mapping([("Large", "l")])]),
        ),
    );
    for value in ["m", "l", "Large"] {
        show(&sizes, Value::from(value));
    }
    println!();

    // Example 3: Containment
    println!("Example 3: Contains");
    let contains = Contains::new("foo");
    show(&contains, Value::from("foo bar baz"));
    show(&contains, Value::from("thud qux"));
    show(&contains, Value::sequence(["foo", "bar"]));
    println!();

    // Example 4: Length with bounds and step
    println!("Example 4: Length (2..=10, step 2)");
    let even = Length::builder().min(2).max(10).step(2).build();
    for word in ["a", "ab", "abc", "abcd", "abcdefghijkl"] {
        show(&even, Value::from(word));
    }

    println!("\nKey Takeaways:");
    println!("- Zero is falsy but still counts as provided");
    println!("- Labelled choices match on their values");
    println!("- Length steps count from the minimum");

    println!("\n=== Example Complete ===");
}
