//! The Executor - single entry point to recorded history.
//!
//! [`CommandExecutor`] is the seam the facade and every builder talk to.
//! [`Executor`] is the reference implementation: a stateless dispatcher that
//! routes commands to handler functions over an in-memory [`HistoryStore`].

use std::sync::Arc;

use chronicle_storage::HistoryStore;

use crate::config::HistoryConfig;
use crate::handlers;
use crate::{Command, Output, Result};

/// Runs commands, each in its own unit of work.
///
/// A command that fails leaves no visible side effect.
pub trait CommandExecutor: Send + Sync {
    /// Execute a single command.
    fn execute(&self, cmd: Command) -> Result<Output>;

    /// Execute commands one by one, in order.
    ///
    /// Each command is independent: a failure does not stop the ones after it.
    fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }
}

/// The reference command executor.
///
/// The Executor is **stateless**: it holds a handle to the store and the
/// configuration but keeps no state of its own.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use chronicle_executor::{Command, CommandExecutor, Executor, HistoryConfig};
/// use chronicle_storage::HistoryStore;
///
/// let executor = Executor::new(Arc::new(HistoryStore::new()), HistoryConfig::default());
///
/// let results = executor.execute_many(vec![
///     Command::GetEntityLinkChildrenForTask { task_id: "t1".into() },
///     Command::GetEntityLinkParentForTask { task_id: "t1".into() },
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct Executor {
    store: Arc<HistoryStore>,
    config: HistoryConfig,
}

impl Executor {
    /// Create an executor over `store`.
    pub fn new(store: Arc<HistoryStore>, config: HistoryConfig) -> Self {
        Self { store, config }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<HistoryStore> {
        &self.store
    }

    /// The configuration commands run with.
    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }
}

impl CommandExecutor for Executor {
    fn execute(&self, cmd: Command) -> Result<Output> {
        tracing::debug!(
            target: "chronicle::executor",
            command = cmd.name(),
            write = cmd.is_write(),
            "Executing"
        );
        let store = &self.store;

        let result = match cmd {
            // Delete
            Command::DeleteHistoricTaskInstance { task_id } => {
                handlers::delete::delete_historic_task_instance(store, task_id)
            }
            Command::DeleteHistoricProcessInstance {
                process_instance_id,
            } => handlers::delete::delete_historic_process_instance(store, process_instance_id),
            Command::DeleteTaskLogEntry { log_number } => {
                handlers::delete::delete_task_log_entry(store, log_number)
            }

            // Links
            Command::GetHistoricIdentityLinks { scope } => {
                handlers::links::get_historic_identity_links(store, scope)
            }
            Command::GetEntityLinkChildrenForProcessInstance {
                process_instance_id,
            } => handlers::links::entity_link_children_for_process_instance(
                store,
                process_instance_id,
            ),
            Command::GetEntityLinkChildrenForTask { task_id } => {
                handlers::links::entity_link_children_for_task(store, task_id)
            }
            Command::GetEntityLinkParentForProcessInstance {
                process_instance_id,
            } => handlers::links::entity_link_parent_for_process_instance(
                store,
                process_instance_id,
            ),
            Command::GetEntityLinkParentForTask { task_id } => {
                handlers::links::entity_link_parent_for_task(store, task_id)
            }

            // Query
            Command::Query { query, page } => handlers::query::query(store, query, page),
            Command::Count { query } => handlers::query::count(store, query),
            Command::NativeQuery {
                target,
                sql,
                parameters,
                page,
                database_type,
            } => match database_type {
                Some(database_type) => Ok(database_type),
                None => self.config.database_type(),
            }
            .and_then(|database_type| {
                handlers::native::native_query(store, database_type, target, sql, parameters, page)
            }),
            Command::NativeCount {
                target,
                sql,
                parameters,
            } => handlers::native::native_count(store, target, sql, parameters),

            // Log
            Command::GetProcessInstanceHistoryLog { query } => {
                handlers::history_log::get_process_instance_history_log(store, query)
            }
            Command::AddTaskLogEntry { entry } => {
                handlers::task_log::add_task_log_entry(store, &self.config, entry)
            }
        };

        if let Err(e) = &result {
            tracing::debug!(target: "chronicle::executor", error = %e, "Command failed");
        }
        result
    }
}
