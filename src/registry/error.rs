//! Registry error types.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a rule by name
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Neither the name nor its last path segment is registered
    #[error("No rule registered under '{name}'")]
    UnknownRule { name: String },

    /// The rule exists but its configuration document could not be read
    #[error(transparent)]
    Config(#[from] ConfigError),
}
