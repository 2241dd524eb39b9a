//! Error types for row materialization.

use thiserror::Error;

/// Result type alias for materialization operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The data source failed: metadata, row advancement, or a column read.
    SourceAccess,
    /// A caller-supplied format pattern could not be compiled.
    FormatConfiguration,
}

/// Error type for row materialization.
#[derive(Error, Debug)]
pub enum Error {
    /// Generic failure reported by the data source.
    #[error("Source access error: {message}")]
    SourceAccess { message: String },

    /// Column metadata could not be read.
    #[error("Cannot read column metadata: {message}")]
    Metadata { message: String },

    /// Column index out of bounds (indexes are 1-based).
    #[error("Column index {index} out of bounds (columns: {count})")]
    ColumnIndexOutOfBounds { index: usize, count: usize },

    /// Accessor called before the first row or after the last one.
    #[error("No current row")]
    NoCurrentRow,

    /// The cursor has been released.
    #[error("Cursor closed")]
    CursorClosed,

    /// A large-object handle was read after it was freed.
    #[error("Large object already freed")]
    LobFreed,

    /// Stored value cannot be read through the requested accessor.
    #[error("Type conversion error: {message}")]
    TypeConversion { message: String },

    /// Invalid date/time format pattern.
    #[error("Invalid format pattern '{pattern}': {message}")]
    InvalidFormatPattern { pattern: String, message: String },
}

impl Error {
    /// Create a source access error.
    pub fn source_access(message: impl Into<String>) -> Self {
        Self::SourceAccess {
            message: message.into(),
        }
    }

    /// Create a metadata error.
    pub fn metadata(message: impl Into<String>) -> Self {
        Self::Metadata {
            message: message.into(),
        }
    }

    /// Create a type conversion error.
    pub fn type_conversion(message: impl Into<String>) -> Self {
        Self::TypeConversion {
            message: message.into(),
        }
    }

    /// Create an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidFormatPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Which of the two error families this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidFormatPattern { .. } => ErrorKind::FormatConfiguration,
            _ => ErrorKind::SourceAccess,
        }
    }
}
