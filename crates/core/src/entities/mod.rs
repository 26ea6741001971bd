//! Historic entities.
//!
//! These are plain records as the engine writes them. Every entity implements
//! [`Row`](crate::Row) so it can be filtered and ordered by column name.

mod activity;
mod detail;
mod entity_link;
mod identity_link;
mod process;
mod task;
mod task_log;
mod variable;

pub use activity::HistoricActivityInstance;
pub use detail::{DetailKind, HistoricDetail};
pub use entity_link::{scope_types, EntityLinkType, HierarchyType, HistoricEntityLink};
pub use identity_link::{identity_link_types, HistoricIdentityLink};
pub use process::HistoricProcessInstance;
pub use task::{HistoricTaskInstance, TaskInfo};
pub use task_log::{NewTaskLogEntry, TaskLogEntry};
pub use variable::HistoricVariableInstance;
