//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while building a [`MigrationConfig`](super::MigrationConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing required environment variable: {name}")]
    MissingVariable { name: String },

    /// A configuration value failed validation.
    #[error("Invalid value for '{key}': {message}")]
    ValidationError { key: String, message: String },
}
