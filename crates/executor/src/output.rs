//! Output enum for command execution results.
//!
//! Every command produces exactly one output type. This mapping is
//! deterministic: the same command always produces the same output variant
//! (though the values may differ based on recorded history).

use serde::{Deserialize, Serialize};

use chronicle_core::{
    HistoricActivityInstance, HistoricDetail, HistoricEntityLink, HistoricIdentityLink,
    HistoricProcessInstance, HistoricTaskInstance, HistoricVariableInstance, Row, TaskLogEntry,
};

use crate::types::ProcessInstanceHistoryLog;

/// Successful command execution results.
///
/// Each [`Command`](crate::Command) variant maps to exactly one `Output` variant.
///
/// # Example
///
/// ```text
/// use chronicle_executor::{Command, Output};
///
/// match executor.execute(Command::GetEntityLinkChildrenForTask { task_id })? {
///     Output::EntityLinks(links) => println!("{} children", links.len()),
///     _ => unreachable!("GetEntityLinkChildrenForTask always returns EntityLinks"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    // ==================== Primitive Results ====================
    /// No return value (deletes)
    Unit,

    /// Row count
    Count(u64),

    /// Log number of an appended task log entry, if one was stored
    MaybeLogNumber(Option<u64>),

    // ==================== Links ====================
    /// Identity links
    IdentityLinks(Vec<HistoricIdentityLink>),

    /// Entity links
    EntityLinks(Vec<HistoricEntityLink>),

    // ==================== Query Results ====================
    /// Historic process instances
    ProcessInstances(Vec<HistoricProcessInstance>),

    /// Historic activity instances
    ActivityInstances(Vec<HistoricActivityInstance>),

    /// Historic task instances
    TaskInstances(Vec<HistoricTaskInstance>),

    /// Historic details
    Details(Vec<HistoricDetail>),

    /// Historic variable instances
    VariableInstances(Vec<HistoricVariableInstance>),

    /// Task log entries
    TaskLogEntries(Vec<TaskLogEntry>),

    // ==================== Log ====================
    /// Process instance timeline; `None` when the instance does not exist
    HistoryLog(Option<Box<ProcessInstanceHistoryLog>>),
}

/// An entity carried by one of the list outputs.
pub trait ListItem: Row + Clone + Sized {
    /// Wrap rows into their output variant.
    fn into_output(rows: Vec<Self>) -> Output;

    /// Take rows out of their output variant; `None` for any other variant.
    fn from_output(output: Output) -> Option<Vec<Self>>;
}

macro_rules! list_item {
    ($ty:ty, $variant:ident) => {
        impl ListItem for $ty {
            fn into_output(rows: Vec<Self>) -> Output {
                Output::$variant(rows)
            }

            fn from_output(output: Output) -> Option<Vec<Self>> {
                match output {
                    Output::$variant(rows) => Some(rows),
                    _ => None,
                }
            }
        }
    };
}

list_item!(HistoricProcessInstance, ProcessInstances);
list_item!(HistoricActivityInstance, ActivityInstances);
list_item!(HistoricTaskInstance, TaskInstances);
list_item!(HistoricDetail, Details);
list_item!(HistoricVariableInstance, VariableInstances);
list_item!(TaskLogEntry, TaskLogEntries);
