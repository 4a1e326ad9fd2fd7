//! Structured errors for terminal commands
//!
//! A command failure never takes the terminal down. Errors are values that
//! the dispatcher logs and turns into a single escaped output line.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const USAGE: &str = "USAGE";
    pub const STORAGE: &str = "STORAGE";
    pub const INIT_FAILED: &str = "INIT_FAILED";
    pub const PANICKED: &str = "PANICKED";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Low-level failures from a plugin's backing store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("State lock poisoned")]
    Poisoned,

    #[error("{0} was not loaded; refusing to overwrite it")]
    Unloaded(String),
}

/// Structured error returned by plugin capabilities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl TermError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    // ========== Common Error Constructors ==========

    pub fn usage(command: &str, usage: &str) -> Self {
        Self::new(codes::USAGE, format!("Invalid arguments for '{}'", command))
            .with_suggestion(format!("Usage: {}", usage))
    }

    pub fn storage(details: impl Into<String>) -> Self {
        Self::new(codes::STORAGE, format!("Storage error: {}", details.into()))
    }

    pub fn init_failed(plugin: &str, details: impl Into<String>) -> Self {
        Self::new(
            codes::INIT_FAILED,
            format!("Initialization of '{}' failed: {}", plugin, details.into()),
        )
    }

    pub fn panicked(details: impl Into<String>) -> Self {
        Self::new(codes::PANICKED, format!("Command panicked: {}", details.into()))
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
    }
}

impl std::fmt::Display for TermError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for TermError {}

impl From<StorageError> for TermError {
    fn from(err: StorageError) -> Self {
        Self::storage(err.to_string())
    }
}
