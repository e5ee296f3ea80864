//! Error types for the morph library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all morph operations.
///
/// Helpers that validate a genuine runtime condition fail fast with one of
/// these variants. Recoverable date/time failures never surface here; they
/// travel through [`crate::datetime::FormatResult`] instead.
#[derive(Error, Debug)]
pub enum MorphError {
    /// Invalid input validation errors
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Character index outside the bounds of a string
    #[error("Index {index} out of range for string of length {length}")]
    IndexOutOfRange { index: usize, length: usize },
    /// Checked integer arithmetic left the representable range
    #[error("Numeric overflow while computing {operation}")]
    Overflow { operation: &'static str },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> MorphError {
        MorphError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl MorphError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a file system error with the path that produced it.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MorphError::FileSystem {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for morph operations
pub type Result<T> = std::result::Result<T, MorphError>;
