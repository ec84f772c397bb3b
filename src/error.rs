//! Error types for workspace-chores.
//!
//! All operations return `Result<T>` which aliases `Result<T, ChoreError>`.

use thiserror::Error;

/// Errors from maintenance operations.
#[derive(Debug, Error)]
pub enum ChoreError {
    /// Version literal unusable as a manifest value.
    #[error("Invalid version literal '{0}': {1}")]
    InvalidVersion(String, String),

    /// Requested line range extends past the end of the file.
    #[error("Line range {start}..{end} is out of bounds for a {len}-line file")]
    LineRangeOutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },

    /// Start of a line range comes after its end.
    #[error("Invalid line range: start {start} is greater than end {end}")]
    InvalidLineRange { start: usize, end: usize },

    /// Commit failed and the attempt to restore originals also failed.
    #[error("Rollback failed: {0}")]
    RollbackFailed(String),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML parse error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml_edit::TomlError),

    /// Regex compilation failed (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Directory traversal failed.
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for workspace-chores operations.
pub type Result<T> = std::result::Result<T, ChoreError>;
