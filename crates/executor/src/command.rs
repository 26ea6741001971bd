//! Command enum defining all history operations.
//!
//! Commands are the "instruction set" of the history service. Every
//! operation the facade or a builder performs is represented as a variant of
//! this enum and handed to a [`CommandExecutor`](crate::CommandExecutor).
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON
//! - **Typed**: No generic fallback, every operation has explicit types
//! - **Pure data**: No closures or executable code

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use chronicle_core::{DatabaseType, HistoryTable, NewTaskLogEntry};

use crate::criteria::EntityQuery;
use crate::types::{HistoryLogCriteria, IdentityLinkScope, Page};

/// A command is a self-contained, serializable operation.
///
/// # Command Categories
///
/// | Category | Count | Description |
/// |----------|-------|-------------|
/// | Delete | 3 | Remove historic tasks, process instances, log entries |
/// | Links | 5 | Identity and entity link lookups |
/// | Query | 4 | Structured and native list/count |
/// | Log | 2 | History log view, task log append |
///
/// # Example
///
/// ```ignore
/// use chronicle_executor::{Command, IdentityLinkScope};
///
/// let cmd = Command::GetHistoricIdentityLinks {
///     scope: IdentityLinkScope::task("t1"),
/// };
/// let output = executor.execute(cmd)?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Delete (3) ====================
    /// Delete a historic task instance and the history recorded under it.
    /// Returns: `Output::Unit`
    DeleteHistoricTaskInstance { task_id: String },

    /// Delete a finished historic process instance and everything under it.
    /// Returns: `Output::Unit`
    DeleteHistoricProcessInstance { process_instance_id: String },

    /// Delete one task log entry.
    /// Returns: `Output::Unit`
    DeleteTaskLogEntry { log_number: u64 },

    // ==================== Links (5) ====================
    /// Identity links of a task or of a process instance.
    /// Returns: `Output::IdentityLinks`
    GetHistoricIdentityLinks { scope: IdentityLinkScope },

    /// Entity links whose owning scope is the process instance.
    /// Returns: `Output::EntityLinks`
    GetEntityLinkChildrenForProcessInstance { process_instance_id: String },

    /// Entity links whose owning scope is the task.
    /// Returns: `Output::EntityLinks`
    GetEntityLinkChildrenForTask { task_id: String },

    /// Entity links that reference the process instance as child.
    /// Returns: `Output::EntityLinks`
    GetEntityLinkParentForProcessInstance { process_instance_id: String },

    /// Entity links that reference the task as child.
    /// Returns: `Output::EntityLinks`
    GetEntityLinkParentForTask { task_id: String },

    // ==================== Query (4) ====================
    /// Run a structured query.
    /// Returns: the list output matching the query's entity
    Query {
        query: EntityQuery,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        page: Option<Page>,
    },

    /// Count the rows a structured query matches.
    /// Returns: `Output::Count`
    Count { query: EntityQuery },

    /// Run a native query against one history table.
    /// Returns: the list output matching `target`
    NativeQuery {
        target: HistoryTable,
        sql: String,
        #[serde(default)]
        parameters: BTreeMap<String, Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        page: Option<Page>,
        /// Dialect deciding where NULL sorts; the executor's own when unset
        #[serde(default, skip_serializing_if = "Option::is_none")]
        database_type: Option<DatabaseType>,
    },

    /// Count the rows a native query matches.
    /// Returns: `Output::Count`
    NativeCount {
        target: HistoryTable,
        sql: String,
        #[serde(default)]
        parameters: BTreeMap<String, Value>,
    },

    // ==================== Log (2) ====================
    /// Build the timeline of one process instance.
    /// Returns: `Output::HistoryLog`
    GetProcessInstanceHistoryLog { query: HistoryLogCriteria },

    /// Append a task log entry.
    /// Returns: `Output::MaybeLogNumber` (`None` when task logging is disabled)
    AddTaskLogEntry { entry: NewTaskLogEntry },
}

impl Command {
    /// Variant name, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::DeleteHistoricTaskInstance { .. } => "DeleteHistoricTaskInstance",
            Command::DeleteHistoricProcessInstance { .. } => "DeleteHistoricProcessInstance",
            Command::DeleteTaskLogEntry { .. } => "DeleteTaskLogEntry",
            Command::GetHistoricIdentityLinks { .. } => "GetHistoricIdentityLinks",
            Command::GetEntityLinkChildrenForProcessInstance { .. } => {
                "GetEntityLinkChildrenForProcessInstance"
            }
            Command::GetEntityLinkChildrenForTask { .. } => "GetEntityLinkChildrenForTask",
            Command::GetEntityLinkParentForProcessInstance { .. } => {
                "GetEntityLinkParentForProcessInstance"
            }
            Command::GetEntityLinkParentForTask { .. } => "GetEntityLinkParentForTask",
            Command::Query { .. } => "Query",
            Command::Count { .. } => "Count",
            Command::NativeQuery { .. } => "NativeQuery",
            Command::NativeCount { .. } => "NativeCount",
            Command::GetProcessInstanceHistoryLog { .. } => "GetProcessInstanceHistoryLog",
            Command::AddTaskLogEntry { .. } => "AddTaskLogEntry",
        }
    }

    /// Whether the command changes recorded history.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Command::DeleteHistoricTaskInstance { .. }
                | Command::DeleteHistoricProcessInstance { .. }
                | Command::DeleteTaskLogEntry { .. }
                | Command::AddTaskLogEntry { .. }
        )
    }
}
