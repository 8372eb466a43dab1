//! Rule configuration.
//!
//! A rule is built once from a [`Configuration`]: a mapping from option name
//! to [`Value`]. Each rule declares the options it understands and takes
//! them out of the configuration while constructing itself. Whatever is left
//! becomes the rule's [`Residual`] bag, still readable by name.
//!
//! Unknown option names are never an error. Configuration stays permissive
//! so that documents written for richer rules still load.
//!
//! # Example
//!
//! ```rust
//! use vetting::config::{Configuration, FromConfig};
//! use vetting::core::{Validator, Value};
//! use vetting::rules::Length;
//!
//! let config = Configuration::from_json_str(r#"{"min": 2, "label": "Nickname"}"#).unwrap();
//! let rule = Length::from_config(config);
//!
//! assert_eq!(rule.min(), Some(2));
//! assert_eq!(rule.option("label"), Some(&Value::from("Nickname")));
//! assert_eq!(rule.option("min"), None);
//! ```

use crate::core::{Key, Value};
use std::collections::BTreeMap;

pub mod error;

pub use error::ConfigError;

/// Named options supplied when constructing a rule.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Configuration {
    entries: BTreeMap<String, Value>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, builder style.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(name.into(), value.into());
        self
    }

    /// Set an option, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Remove a declared option so the rule can own it.
    ///
    /// An option explicitly set to null counts as unset: it is not taken and
    /// stays behind in the residual bag.
    pub fn take(&mut self, name: &str) -> Option<Value> {
        match self.entries.get(name) {
            None | Some(Value::Null) => None,
            Some(_) => self.entries.remove(name),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Everything not taken by the rule.
    pub fn into_residual(self) -> Residual {
        Residual {
            entries: self.entries,
        }
    }

    /// Read a configuration from a mapping value.
    ///
    /// Integer keys are kept under their decimal text.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        match value {
            Value::Mapping(entries) => Ok(entries
                .into_iter()
                .map(|(key, value)| match key {
                    Key::Str(name) => (name, value),
                    Key::Int(i) => (i.to_string(), value),
                })
                .collect()),
            other => Err(ConfigError::NotAnObject {
                found: other.kind(),
            }),
        }
    }

    pub fn from_json(json: serde_json::Value) -> Result<Self, ConfigError> {
        Self::from_value(Value::from(json))
    }

    /// Parse a JSON object document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        Self::from_json(json)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Configuration {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Options a rule did not declare, kept for lookup by name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Residual {
    entries: BTreeMap<String, Value>,
}

impl Residual {
    /// Look up a leftover option. Unknown names yield `None`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Construction of a rule from named options.
///
/// Implementors take their declared fields out of the configuration with
/// [`Configuration::take`] and keep the rest via
/// [`Configuration::into_residual`].
pub trait FromConfig: Sized {
    fn from_config(config: Configuration) -> Self;
}
