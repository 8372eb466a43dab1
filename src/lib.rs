//! Vetting: small, configurable rules that validate untyped values
//!
//! A rule is built once from a [`Configuration`] and then asked to validate
//! any number of values. Each call returns an [`Outcome`]: either the value
//! (possibly transformed) or a [`Concern`] describing what is wrong with it.
//! Validation failure is data, never a panic or an `Err`.
//!
//! # Core Concepts
//!
//! - **Value**: Tagged representation of untyped input via [`Value`]
//! - **Validator**: A configured, immutable rule via the [`Validator`] trait
//! - **Concern**: Templated failure message with substitution tokens
//! - **Registry**: Explicit name → constructor map for wiring rules from documents
//!
//! # Example
//!
//! ```rust
//! use vetting::config::{Configuration, FromConfig};
//! use vetting::core::{OutcomeExt, Validator, Value};
//! use vetting::rules::{AlwaysRequired, In};
//!
//! let size = In::from_config(
//!     Configuration::from_json_str(r#"{"choices": ["s", "m", {"Large": "l"}]}"#).unwrap(),
//! );
//!
//! assert!(size.validate(Value::from("l"), None).is_success());
//! assert_eq!(
//!     size.validate(Value::from("xl"), None).rendered().as_deref(),
//!     Some("Value is not in allowed list.")
//! );
//!
//! let required = AlwaysRequired::default();
//! assert!(required.validate(Value::from(0), None).is_success());
//! ```

pub mod config;
pub mod core;
pub mod registry;
pub mod rules;

// Re-export commonly used types
pub use config::{Configuration, FromConfig};
pub use crate::core::{Concern, Outcome, OutcomeExt, Validator, Value};
pub use registry::Registry;
