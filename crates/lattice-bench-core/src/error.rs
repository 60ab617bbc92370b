//! Error types for lattice-bench.
//!
//! Only the ambient layers fail recoverably: loading a panel configuration and
//! installing the log subscriber. Model operations treat bad indices as
//! contract violations and panic.

use std::path::PathBuf;

/// Result type alias for lattice-bench operations.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while setting up a panel.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// The configuration text is not valid TOML or does not match the schema.
    #[error("Invalid panel configuration: {message}")]
    Config { message: String },

    /// A configuration value is out of its allowed range.
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// File I/O error.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The log filter directive could not be parsed or a subscriber is already installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl BenchError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a value error.
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
