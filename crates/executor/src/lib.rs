//! # Chronicle Executor
//!
//! The public API of Chronicle, a workflow engine's history service.
//!
//! This is the only crate users need to import. It provides:
//! - [`HistoryService`] - The facade over every history operation
//! - Query builders ([`HistoricTaskInstanceQuery`], ...) and native query builders
//! - [`TaskLogEntryBuilder`] - Appends task log entries
//! - [`Command`]/[`Output`] - Low-level command interface
//! - [`CommandExecutor`] - The seam commands are submitted through, with the
//!   in-memory reference [`Executor`]
//!
//! ## Quick Start
//!
//! ```text
//! use chronicle_executor::{HistoryConfig, HistoryService};
//!
//! let (history, store) = HistoryService::in_memory(HistoryConfig::default())?;
//!
//! // Read back what the engine recorded
//! let tasks = history
//!     .create_historic_task_instance_query()
//!     .process_instance_id("p1")
//!     .list()?;
//!
//! // Remove a finished process instance with all of its history
//! history.delete_historic_process_instance("p1")?;
//! ```
//!
//! ## Operations
//!
//! | Group | Facade methods |
//! |-------|----------------|
//! | **Delete** | historic task, historic process instance, task log entry |
//! | **Identity links** | for a task, for a process instance |
//! | **Entity links** | children / parent, for a process instance or a task |
//! | **Queries** | process instances, activities, tasks, details, variables, task log |
//! | **Native queries** | one per history table |
//! | **Task log** | entry builder, unseeded or seeded from a task |
//! | **History log** | time-ordered timeline of one process instance |

#![warn(missing_docs)]

mod api;
mod builder;
mod command;
pub mod config;
mod convert;
pub mod criteria;
mod error;
mod executor;
mod handlers;
pub mod logging;
mod native;
mod output;
pub mod query;
mod types;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use api::HistoryService;
pub use builder::TaskLogEntryBuilder;
pub use command::Command;
pub use config::HistoryConfig;
pub use criteria::{
    ActivityInstanceProperty, Criteria, DetailProperty, EntityQuery, OrderProperty,
    ProcessInstanceProperty, TaskInstanceProperty, TaskLogEntryProperty, VariableInstanceProperty,
};
pub use error::Error;
pub use executor::{CommandExecutor, Executor};
pub use output::{ListItem, Output};
pub use query::{
    HistoricActivityInstanceQuery, HistoricDetailQuery, HistoricProcessInstanceQuery,
    HistoricTaskInstanceQuery, HistoricVariableInstanceQuery, NativeHistoricActivityInstanceQuery,
    NativeHistoricDetailQuery, NativeHistoricProcessInstanceQuery, NativeHistoricTaskInstanceQuery,
    NativeHistoricVariableInstanceQuery, NativeTaskLogEntryQuery, ProcessInstanceHistoryLogQuery,
    TaskLogEntryQuery,
};
pub use types::*;

// Re-export the data model so users don't need chronicle-core directly
pub use chronicle_core::{
    identity_link_types, scope_types, DatabaseType, DetailKind, EntityLinkType, HierarchyType,
    HistoricActivityInstance, HistoricDetail, HistoricEntityLink, HistoricIdentityLink,
    HistoricProcessInstance, HistoricTaskInstance, HistoricVariableInstance, HistoryTable,
    NewTaskLogEntry, TaskInfo, TaskLogEntry,
};

// Re-export the store so embedders can record history without chronicle-storage
pub use chronicle_storage::HistoryStore;

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
