//! High-level typed wrapper for the command executor.
//!
//! [`HistoryService`] turns each history operation into one [`Command`],
//! submits it, and unwraps the matching [`Output`](crate::Output). Query
//! and entry builders are created here and carry the same executor handle.
//!
//! # Example
//!
//! ```text
//! use chronicle_executor::{HistoryConfig, HistoryService};
//!
//! let (history, store) = HistoryService::in_memory(HistoryConfig::default())?;
//!
//! // The engine side records history through the store...
//! store.record_task_instance(task)?;
//!
//! // ...and callers read it back through the service.
//! let links = history.get_historic_identity_links_for_task("t1")?;
//! let open = history
//!     .create_historic_task_instance_query()
//!     .unfinished()
//!     .count()?;
//! ```

mod delete;
mod links;
mod queries;
mod task_log;

use std::fmt;
use std::sync::Arc;

use chronicle_core::DatabaseType;
use chronicle_storage::HistoryStore;

use crate::{CommandExecutor, Executor, HistoryConfig, Result};

/// Facade over the history commands.
///
/// `HistoryService` holds nothing but an executor handle and the database
/// type task queries are created for. It is cheap to clone and safe to share
/// across threads.
#[derive(Clone)]
pub struct HistoryService {
    executor: Arc<dyn CommandExecutor>,
    database_type: DatabaseType,
}

impl fmt::Debug for HistoryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryService")
            .field("database_type", &self.database_type)
            .finish_non_exhaustive()
    }
}

impl HistoryService {
    /// Create a service over any executor.
    pub fn new(executor: Arc<dyn CommandExecutor>, database_type: DatabaseType) -> Self {
        Self {
            executor,
            database_type,
        }
    }

    /// Create a service backed by a fresh in-memory store.
    ///
    /// Returns the store as well; it is the write path the engine records
    /// history through.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if `config` names an unknown database type.
    pub fn in_memory(config: HistoryConfig) -> Result<(Self, Arc<HistoryStore>)> {
        let database_type = config.database_type()?;
        let store = Arc::new(HistoryStore::new());
        let executor = Executor::new(Arc::clone(&store), config);
        tracing::debug!(
            target: "chronicle::api",
            %database_type,
            "Opened in-memory history service"
        );
        Ok((Self::new(Arc::new(executor), database_type), store))
    }

    /// Database type task queries are created for.
    pub fn database_type(&self) -> DatabaseType {
        self.database_type
    }

    /// The executor commands are submitted to.
    pub fn executor(&self) -> &Arc<dyn CommandExecutor> {
        &self.executor
    }
}
