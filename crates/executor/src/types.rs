//! Supporting types for commands and outputs.
//!
//! These types are used in command parameters and output values.
//! All types are serializable.

use serde::{Deserialize, Serialize};

use chronicle_core::{
    HistoricActivityInstance, HistoricDetail, HistoricProcessInstance, HistoricTaskInstance,
    HistoricVariableInstance,
};

// =============================================================================
// Scope Selector
// =============================================================================

/// Which scope an identity link lookup is for.
///
/// Exactly one of task and process instance is selected; there is no way to
/// build a selector with both or neither.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityLinkScope {
    /// Links of one task
    Task(String),
    /// Links of one process instance
    ProcessInstance(String),
}

impl IdentityLinkScope {
    /// Select a task.
    pub fn task(task_id: impl Into<String>) -> Self {
        IdentityLinkScope::Task(task_id.into())
    }

    /// Select a process instance.
    pub fn process_instance(process_instance_id: impl Into<String>) -> Self {
        IdentityLinkScope::ProcessInstance(process_instance_id.into())
    }

    /// The task id, when a task is selected.
    pub fn task_id(&self) -> Option<&str> {
        match self {
            IdentityLinkScope::Task(id) => Some(id),
            IdentityLinkScope::ProcessInstance(_) => None,
        }
    }

    /// The process instance id, when a process instance is selected.
    pub fn process_instance_id(&self) -> Option<&str> {
        match self {
            IdentityLinkScope::Task(_) => None,
            IdentityLinkScope::ProcessInstance(id) => Some(id),
        }
    }
}

// =============================================================================
// Paging & Ordering
// =============================================================================

/// A window over a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Index of the first row returned
    pub first_result: usize,
    /// Maximum number of rows returned
    pub max_results: usize,
}

impl Page {
    /// Create a page.
    pub fn new(first_result: usize, max_results: usize) -> Self {
        Self {
            first_result,
            max_results,
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Smallest first
    #[default]
    Asc,
    /// Largest first
    Desc,
}

/// One sort key of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy<P> {
    /// Property to sort on
    pub property: P,
    /// Sort direction
    pub direction: Direction,
}

// =============================================================================
// Process Instance History Log
// =============================================================================

/// What a process instance history log includes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLogCriteria {
    /// Process instance the log is for
    pub process_instance_id: String,
    /// Include task instances
    pub include_tasks: bool,
    /// Include activity instances
    pub include_activities: bool,
    /// Include variable instances
    pub include_variables: bool,
    /// Include variable update details
    pub include_variable_updates: bool,
    /// Include form property details
    pub include_form_properties: bool,
}

/// One timeline element of a history log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum HistoricData {
    /// A task instance, placed at its create time
    Task(HistoricTaskInstance),
    /// An activity instance, placed at its start time
    Activity(HistoricActivityInstance),
    /// A variable instance, placed at its create time
    Variable(HistoricVariableInstance),
    /// A variable update detail, placed at its time
    VariableUpdate(HistoricDetail),
    /// A form property detail, placed at its time
    FormProperty(HistoricDetail),
}

impl HistoricData {
    /// Point in time this element is placed at.
    pub fn time(&self) -> chrono::DateTime<chrono::Utc> {
        match self {
            HistoricData::Task(t) => t.create_time,
            HistoricData::Activity(a) => a.start_time,
            HistoricData::Variable(v) => v.create_time,
            HistoricData::VariableUpdate(d) | HistoricData::FormProperty(d) => d.time,
        }
    }
}

/// A process instance with its time-ordered history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessInstanceHistoryLog {
    /// The process instance
    pub process_instance: HistoricProcessInstance,
    /// Selected history, ascending by time
    pub historic_data: Vec<HistoricData>,
}
