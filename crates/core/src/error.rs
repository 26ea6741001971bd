//! Error types for the core crate

use thiserror::Error;

/// Result type alias for core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Errors raised while interpreting core vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Database type name is not one of the supported dialects
    #[error("unknown database type: {0}")]
    UnknownDatabaseType(String),

    /// Table name does not belong to the history schema
    #[error("unknown history table: {0}")]
    UnknownTable(String),
}
