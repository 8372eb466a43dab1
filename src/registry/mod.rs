//! Rule registry - explicit mapping from rule names to constructors.
//!
//! Rules are looked up by name only when wiring an application together,
//! typically from a configuration document. The registry is populated
//! up front; nothing is discovered at runtime.
//!
//! # Example
//!
//! ```rust
//! use vetting::config::Configuration;
//! use vetting::core::{OutcomeExt, Validator, Value};
//! use vetting::registry::Registry;
//!
//! let registry = Registry::new();
//! let rule = registry
//!     .build("schema::Contains", Configuration::new().set("contains", "foo"))
//!     .unwrap();
//!
//! assert_eq!(rule.name(), "Contains");
//! assert_eq!(
//!     rule.validate(Value::from("thud qux"), None).rendered().as_deref(),
//!     Some("Value does not contain foo.")
//! );
//! ```

use crate::config::{Configuration, FromConfig};
use crate::core::{Identity, Validator};
use crate::rules::{
    Always, AlwaysFalsy, AlwaysMissing, AlwaysRequired, AlwaysTruthy, Contains, In, Length, Never,
};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

pub mod error;

pub use error::RegistryError;

/// Constructor for a rule, taking its configuration.
pub type Factory = Box<dyn Fn(Configuration) -> Box<dyn Validator> + Send + Sync>;

/// Registry of rule constructors by name
pub struct Registry {
    factories: HashMap<String, Factory>,
}

impl Registry {
    /// Create a registry holding the built-in catalog
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_builtin_rules();
        registry
    }

    /// Create a registry with no rules at all
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    fn register_builtin_rules(&mut self) {
        self.register::<Identity>("Validator")
            .register::<Always>("Always")
            .register::<Never>("Never")
            .register::<AlwaysTruthy>("AlwaysTruthy")
            .register::<AlwaysFalsy>("AlwaysFalsy")
            .register::<AlwaysRequired>("AlwaysRequired")
            .register::<AlwaysMissing>("AlwaysMissing")
            .register::<In>("In")
            .register::<Contains>("Contains")
            .register::<Length>("Length");

        debug!("Registered {} built-in rules", self.factories.len());
    }

    /// Register a rule type under `name`, replacing any previous entry
    pub fn register<R>(&mut self, name: &str) -> &mut Self
    where
        R: Validator + FromConfig + 'static,
    {
        self.register_factory(name, |config| {
            Box::new(R::from_config(config)) as Box<dyn Validator>
        })
    }

    /// Register a custom constructor under `name`
    pub fn register_factory<F>(&mut self, name: &str, factory: F) -> &mut Self
    where
        F: Fn(Configuration) -> Box<dyn Validator> + Send + Sync + 'static,
    {
        debug!(rule = name, "Registering rule");
        self.factories.insert(name.to_string(), Box::new(factory));
        self
    }

    /// Find the constructor for `name`.
    ///
    /// Qualified names such as `schema::Length`, `Schema\Length` or
    /// `schema.Length` fall back to their last segment when the full name is
    /// not registered.
    pub fn resolve(&self, name: &str) -> Result<&Factory, RegistryError> {
        self.factories
            .get(name)
            .or_else(|| self.factories.get(last_segment(name)))
            .ok_or_else(|| RegistryError::UnknownRule {
                name: name.to_string(),
            })
    }

    /// Build the rule registered under `name` from `config`
    pub fn build(
        &self,
        name: &str,
        config: Configuration,
    ) -> Result<Box<dyn Validator>, RegistryError> {
        let factory = self.resolve(name)?;
        Ok(factory(config))
    }

    /// Build the rule registered under `name` from a JSON object document
    pub fn build_json(
        &self,
        name: &str,
        config: &str,
    ) -> Result<Box<dyn Validator>, RegistryError> {
        let factory = self.resolve(name)?;
        let config = Configuration::from_json_str(config)?;
        Ok(factory(config))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn last_segment(name: &str) -> &str {
    name.rsplit(|c: char| matches!(c, '\\' | '.' | ':'))
        .next()
        .unwrap_or(name)
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("rules", &self.names())
            .finish()
    }
}
