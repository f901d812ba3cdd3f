//! Error types for weft-core

use thiserror::Error;

/// Result type alias for weft-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in weft-core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file could not be found
    #[error("configuration file not found: {path}")]
    ConfigNotFound {
        /// Path that was searched
        path: String,
    },

    /// Failed to parse YAML configuration
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Invalid configuration value
    #[error("invalid configuration: {message}")]
    Validation {
        /// Description of what's invalid
        message: String,
    },

    /// Safelist pattern entry does not compile as a regex
    #[error("invalid safelist pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as written in the config
        pattern: String,
        /// Underlying regex compile error
        source: regex::Error,
    },

    /// Plugin name not known to the registry
    #[error("unknown plugin '{name}'")]
    UnknownPlugin {
        /// Name as written in the config
        name: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
