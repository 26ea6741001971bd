//! Chronicle - history service for a workflow engine
//!
//! Chronicle answers questions about what a process engine has recorded:
//! finished and running process instances, activities, user tasks, variable
//! updates, form submissions, identity and entity links, and the task audit
//! log. It also removes history that is no longer needed.
//!
//! # Quick Start
//!
//! ```ignore
//! use chronicle::{HistoryConfig, HistoryService};
//!
//! let (history, store) = HistoryService::in_memory(HistoryConfig::default())?;
//!
//! // Who could work on task t1?
//! let links = history.get_historic_identity_links_for_task("t1")?;
//!
//! // Every open task of a process instance
//! let open = history
//!     .create_historic_task_instance_query()
//!     .process_instance_id("p1")
//!     .unfinished()
//!     .list()?;
//! ```
//!
//! # Architecture
//!
//! All operations go through a [`CommandExecutor`] which accepts one
//! [`Command`] per operation. The [`HistoryService`] struct provides the
//! convenient high-level interface and the query and entry builders.
//!
//! Storage internals are not exposed beyond [`HistoryStore`], the write path
//! the engine records history through.

// Re-export the public API from chronicle-executor
pub use chronicle_executor::*;
