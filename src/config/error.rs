//! Configuration error types.

use thiserror::Error;

/// Errors that can occur when reading a configuration document
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document parsed, but its top level is not an object
    #[error("Configuration must be an object of named options, found {found}")]
    NotAnObject { found: &'static str },

    /// The document is not valid JSON
    #[error("Configuration is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
