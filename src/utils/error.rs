//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// The history buffer is neither a JSON array of objects nor
/// newline-delimited JSON objects, or a record carries a field of the wrong type.
///
/// This is the only error the parser produces. Empty input is not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Malformed listening history: {reason}")]
pub struct MalformedInputError {
    /// Human-readable description of what failed
    pub reason: String,
}

impl MalformedInputError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Errors that can occur during report output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
