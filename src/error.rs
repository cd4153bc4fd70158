//! Unified error types for chatclean.
//!
//! This module provides a single [`CleanError`] enum that covers every
//! failure the library can report. Per-message problems are never errors:
//! a message with missing or oddly-typed fields is cleaned best-effort.
//! Only the document as a whole can be rejected.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatclean operations.
///
/// # Example
///
/// ```rust
/// use chatclean::error::Result;
/// use chatclean::CleanedDataset;
///
/// fn my_function() -> Result<CleanedDataset> {
///     Ok(CleanedDataset::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, CleanError>;

/// The error type for all chatclean operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CleanError {
    /// An I/O error occurred while reading the export or writing the output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input file does not exist.
    #[error("Input file not found: {}", path.display())]
    InputNotFound {
        /// The path that was looked up
        path: PathBuf,
    },

    /// The export could not be read as a chat document.
    ///
    /// Raised when the bytes are not valid JSON or when the root value is
    /// not a JSON object. No partial recovery is attempted.
    #[error("Malformed chat export{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    MalformedDocument {
        /// What was wrong with the document
        #[source]
        source: MalformedKind,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// Serializing the cleaned dataset failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Kinds of document-level problems.
#[derive(Debug, Error)]
pub enum MalformedKind {
    /// The input is not syntactically valid JSON
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    /// The root value is valid JSON but not an object
    #[error("expected a JSON object at the root, found {found}")]
    NotAnObject {
        /// JSON type name of the root value
        found: &'static str,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl CleanError {
    /// Creates a malformed-document error from a JSON syntax error.
    pub fn invalid_json(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        CleanError::MalformedDocument {
            source: MalformedKind::Json(source),
            path,
        }
    }

    /// Creates a malformed-document error for a non-object root.
    pub fn not_an_object(found: &'static str, path: Option<PathBuf>) -> Self {
        CleanError::MalformedDocument {
            source: MalformedKind::NotAnObject { found },
            path,
        }
    }

    /// Creates an input-not-found error.
    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        CleanError::InputNotFound { path: path.into() }
    }

    /// Attaches a file path to a malformed-document error.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn with_path(self, file: impl Into<PathBuf>) -> Self {
        match self {
            CleanError::MalformedDocument { source, path: None } => {
                CleanError::MalformedDocument {
                    source,
                    path: Some(file.into()),
                }
            }
            other => other,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, CleanError::Io(_))
    }

    /// Returns `true` if the document itself was rejected.
    pub fn is_malformed(&self) -> bool {
        matches!(self, CleanError::MalformedDocument { .. })
    }

    /// Returns `true` if the input file was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CleanError::InputNotFound { .. })
    }
}

/// Returns the JSON type name used in error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
