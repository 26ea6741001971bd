use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chronicle_core::TaskLogEntry;

use super::{eq, eq_opt, Criteria, EntityQuery, OrderProperty};
use crate::types::OrderBy;

/// Orderable task log entry properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskLogEntryProperty {
    /// Log number
    LogNumber,
    /// Entry timestamp
    TimeStamp,
}

impl OrderProperty for TaskLogEntryProperty {
    fn column(&self) -> &'static str {
        match self {
            TaskLogEntryProperty::LogNumber => "ID_",
            TaskLogEntryProperty::TimeStamp => "TIME_STAMP_",
        }
    }
}

/// Filters over task log entries.
///
/// Time and log number bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskLogEntryCriteria {
    /// Exact log number
    pub log_number: Option<u64>,
    /// Exact task id
    pub task_id: Option<String>,
    /// Exact entry type
    pub log_type: Option<String>,
    /// User that caused the entry
    pub user_id: Option<String>,
    /// Exact process instance id
    pub process_instance_id: Option<String>,
    /// Exact scope id
    pub scope_id: Option<String>,
    /// Exact scope type
    pub scope_type: Option<String>,
    /// Exact tenant id
    pub tenant_id: Option<String>,
    /// Timestamp at or after this time
    pub from: Option<DateTime<Utc>>,
    /// Timestamp at or before this time
    pub to: Option<DateTime<Utc>>,
    /// Log number at least this value
    pub from_log_number: Option<u64>,
    /// Log number at most this value
    pub to_log_number: Option<u64>,
    /// Requested ordering, applied in sequence
    pub order_by: Vec<OrderBy<TaskLogEntryProperty>>,
}

impl Criteria for TaskLogEntryCriteria {
    type Item = TaskLogEntry;
    type Property = TaskLogEntryProperty;

    fn matches(&self, e: &TaskLogEntry) -> bool {
        self.log_number.map_or(true, |n| e.log_number == n)
            && eq(&self.task_id, &e.task_id)
            && eq(&self.log_type, &e.log_type)
            && eq_opt(&self.user_id, e.user_id.as_deref())
            && eq_opt(&self.process_instance_id, e.process_instance_id.as_deref())
            && eq_opt(&self.scope_id, e.scope_id.as_deref())
            && eq_opt(&self.scope_type, e.scope_type.as_deref())
            && eq_opt(&self.tenant_id, e.tenant_id.as_deref())
            && self.from.map_or(true, |t| e.time_stamp >= t)
            && self.to.map_or(true, |t| e.time_stamp <= t)
            && self.from_log_number.map_or(true, |n| e.log_number >= n)
            && self.to_log_number.map_or(true, |n| e.log_number <= n)
    }

    fn ordering(&self) -> &[OrderBy<TaskLogEntryProperty>] {
        &self.order_by
    }

    fn ordering_mut(&mut self) -> &mut Vec<OrderBy<TaskLogEntryProperty>> {
        &mut self.order_by
    }

    fn into_query(self) -> EntityQuery {
        EntityQuery::TaskLogEntries(self)
    }
}
