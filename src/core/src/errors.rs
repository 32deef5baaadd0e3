//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur while loading or saving front-end state.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Error when the configuration is missing a required value or is malformed.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error when a file operation fails.
    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),

    /// Error when serialization or deserialization fails.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
