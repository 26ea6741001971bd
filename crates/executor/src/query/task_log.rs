use chrono::{DateTime, Utc};

use super::{string_filters, Query};
use crate::criteria::TaskLogEntryCriteria;

/// Query over task log entries.
pub type TaskLogEntryQuery = Query<TaskLogEntryCriteria>;

impl TaskLogEntryQuery {
    string_filters! {
        /// Only entries of this task.
        task_id => task_id;
        /// Only entries of this type, e.g. `USER_TASK_ASSIGNEE_CHANGED`.
        log_type => log_type;
        /// Only entries written by this user.
        user_id => user_id;
        /// Only entries of tasks in this process instance.
        process_instance_id => process_instance_id;
        /// Only entries of tasks in this scope.
        scope_id => scope_id;
        /// Only entries of tasks in scopes of this type.
        scope_type => scope_type;
        /// Only entries of this tenant.
        tenant_id => tenant_id;
    }

    /// Only the entry with this log number.
    pub fn log_number(mut self, log_number: u64) -> Self {
        self.criteria.log_number = Some(log_number);
        self
    }

    /// Only entries stamped at or after `time`.
    pub fn from(mut self, time: DateTime<Utc>) -> Self {
        self.criteria.from = Some(time);
        self
    }

    /// Only entries stamped at or before `time`.
    pub fn to(mut self, time: DateTime<Utc>) -> Self {
        self.criteria.to = Some(time);
        self
    }

    /// Only entries numbered `log_number` or higher.
    pub fn from_log_number(mut self, log_number: u64) -> Self {
        self.criteria.from_log_number = Some(log_number);
        self
    }

    /// Only entries numbered `log_number` or lower.
    pub fn to_log_number(mut self, log_number: u64) -> Self {
        self.criteria.to_log_number = Some(log_number);
        self
    }
}
