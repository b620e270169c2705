//! Error types and result types for document store operations.
//!
//! The core store operations (`save`, `find_by_id`, `search`) never fail. Errors
//! only surface from the surrounding plumbing: JSON conversions and backend builders.
//! Use [`DocumentStoreResult<T>`] as the return type for those fallible operations.

use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Represents the errors that can occur around a document store.
#[derive(Error, Debug)]
pub enum DocumentStoreError {
    /// Serialization/deserialization error when converting documents to or from JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Error during backend construction.
    #[error("Initialization error: {0}")]
    Initialization(String),
}

/// A specialized `Result` type for document store operations.
pub type DocumentStoreResult<T> = Result<T, DocumentStoreError>;

impl From<SerdeJsonError> for DocumentStoreError {
    fn from(err: SerdeJsonError) -> Self {
        DocumentStoreError::Serialization(err.to_string())
    }
}
