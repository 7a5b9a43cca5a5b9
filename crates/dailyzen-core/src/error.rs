//! Core error types for dailyzen-core.
//!
//! Every failure in the library is recoverable: the in-memory habit
//! collection stays the source of truth for the session and callers decide
//! how to report the problem.

use thiserror::Error;

/// Core error type for dailyzen-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Persistence-related errors
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A mutation referenced a habit id that is not in the collection
    #[error("no habit with id '{0}'")]
    NotFound(String),

    /// Malformed habit data, either imported or read back from storage
    #[error("malformed habit data: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid field value
    #[error("invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the key-value storage collaborator.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading a key failed
    #[error("failed to read '{key}': {message}")]
    ReadFailed { key: String, message: String },

    /// Writing a key failed
    #[error("failed to write '{key}': {message}")]
    WriteFailed { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
