//! # Error Types
//!
//! Centralized error type for the library. Validation failures are not
//! errors in this sense: an empty field is handled locally by the tip
//! presentation strategy and never propagates. What can fail is the
//! plumbing around the widgets, mostly configuration loading.

use thiserror::Error;

/// Library-wide error type.
#[derive(Debug, Error)]
pub enum InputError {
    /// Configuration file could not be read.
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Invalid configuration value.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, InputError>;

impl From<String> for InputError {
    fn from(msg: String) -> Self {
        InputError::Config(msg)
    }
}

impl From<&str> for InputError {
    fn from(msg: &str) -> Self {
        InputError::Config(msg.to_string())
    }
}
