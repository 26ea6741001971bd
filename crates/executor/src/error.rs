//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! The facade never translates these: whatever a command or query raises
//! reaches the caller unchanged.

use serde::{Deserialize, Serialize};

/// Command execution errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Validation | `InvalidArgument` | Bad input, rejected before any change |
/// | Not Found | `NotFound` | Addressed record does not exist |
/// | State | `InvalidState` | Record exists but the operation is not allowed now |
/// | Query | `MalformedQuery`, `NonUniqueResult` | Native query text or result shape |
/// | System | `Config`, `Internal` | Configuration and invariant violations |
///
/// # Example
///
/// ```ignore
/// use chronicle_executor::{Error, HistoryService};
///
/// match history.delete_historic_process_instance("p1") {
///     Ok(()) => {}
///     Err(Error::NotFound { entity, id }) => println!("no {entity} {id}"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Validation ====================
    /// Invalid argument
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    // ==================== Not Found ====================
    /// Addressed record does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    // ==================== State ====================
    /// Operation not allowed in the record's current state
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },

    // ==================== Query ====================
    /// Native query text or parameters could not be evaluated
    #[error("malformed query: {reason}")]
    MalformedQuery { reason: String },

    /// `single_result` matched more than one row
    #[error("query returned {count} results instead of at most 1")]
    NonUniqueResult { count: usize },

    // ==================== System ====================
    /// Configuration could not be read or is invalid
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// Internal error (bug or invariant violation)
    #[error("internal error: {reason}")]
    Internal { reason: String },
}

impl Error {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedQuery {
            reason: reason.into(),
        }
    }

    pub(crate) fn unexpected_output(command: &str) -> Self {
        Error::Internal {
            reason: format!("Unexpected output for {}", command),
        }
    }
}
