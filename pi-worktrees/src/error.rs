//! Error types for the pi-worktrees library.
//!
//! This module provides the error hierarchy for loading, validating and
//! persisting worktree settings, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pi-worktrees error.
///
/// # Examples
///
/// ```
/// use pi_worktrees::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/tmp/wt".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pi-worktrees library.
#[derive(Debug, Error)]
pub enum Error {
    /// A settings value or shape failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The dotted path of the field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A settings file could not be read.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason the path could not be used.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The home directory could not be determined.
    #[error("cannot determine home directory")]
    HomeDirectoryNotFound,
}

impl Error {
    /// Shorthand for building a [`Error::Validation`].
    pub(crate) fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if error is a validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use pi_worktrees::Error;
    ///
    /// let err = Error::Validation {
    ///     field: "worktree.parentDir".to_string(),
    ///     message: "expected a string".to_string(),
    /// };
    /// assert!(err.is_validation());
    /// ```
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
