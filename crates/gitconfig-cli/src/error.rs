//! Error types for gitconfig-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from gitconfig-core
    #[error(transparent)]
    Core(#[from] gitconfig_core::Error),

    /// Failure reading a configuration dump
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failure encoding JSON output
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The requested property is not set; reported through the exit status only
    #[error("Property '{name}' is not set")]
    NotFound { name: String },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Whether the error should be reported without a message
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
