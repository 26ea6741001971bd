//! Error types for the storage layer

use thiserror::Error;

/// Result type alias for storage operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Storage errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A record was rejected before being written
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// A record addressed by id does not exist
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of record
        entity: &'static str,
        /// Requested id
        id: String,
    },

    /// The operation is not allowed in the record's current state
    #[error("invalid state: {0}")]
    InvalidState(String),
}
