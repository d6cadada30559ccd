//! Error type for rule store operations.

use std::path::PathBuf;

/// Errors that can occur while reading or writing rule files.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Name failed validation; nothing was touched on disk.
    #[error("invalid rule name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// No backing file exists for the rule.
    #[error("rule '{0}' not found")]
    NotFound(String),

    /// The rules directory could not be listed.
    #[error("failed to read rules directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rule file exists but could not be read.
    #[error("failed to read rule file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rule file could not be written.
    #[error("failed to write rule file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for rule store operations.
pub type Result<T> = std::result::Result<T, RuleError>;
