//! Error conversion from lower-layer error types.
//!
//! Storage and core errors map onto the executor's [`Error`] without losing
//! the detail message.

use chronicle_core::CoreError;
use chronicle_storage::StoreError;

use crate::Error;

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidRecord(reason) => Error::InvalidArgument { reason },
            StoreError::NotFound { entity, id } => Error::NotFound {
                entity: entity.to_string(),
                id,
            },
            StoreError::InvalidState(reason) => Error::InvalidState { reason },
        }
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownDatabaseType(_) => Error::Config {
                reason: err.to_string(),
            },
            CoreError::UnknownTable(_) => Error::MalformedQuery {
                reason: err.to_string(),
            },
        }
    }
}
