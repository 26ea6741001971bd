use chrono::{DateTime, Utc};

use chronicle_core::DatabaseType;

use super::{string_filters, Query};
use crate::criteria::TaskInstanceCriteria;

/// Query over historic task instances.
///
/// Carries the database type it was created for; NULL values (a missing due
/// date, a missing assignee) sort where that database would put them.
pub type HistoricTaskInstanceQuery = Query<TaskInstanceCriteria>;

impl HistoricTaskInstanceQuery {
    string_filters! {
        /// Only the task with this id.
        task_id => task_id;
        /// Only tasks of this process instance.
        process_instance_id => process_instance_id;
        /// Only tasks of this process definition.
        process_definition_id => process_definition_id;
        /// Only tasks created on this execution.
        execution_id => execution_id;
        /// Only tasks with exactly this name.
        task_name => task_name;
        /// Only tasks whose name matches this `LIKE` pattern (`%`, `_`).
        task_name_like => task_name_like;
        /// Only tasks assigned to this user.
        task_assignee => task_assignee;
        /// Only tasks owned by this user.
        task_owner => task_owner;
        /// Only tasks with this task definition key.
        task_definition_key => task_definition_key;
        /// Only tasks in this category.
        task_category => task_category;
        /// Only tasks of this tenant.
        task_tenant_id => tenant_id;
    }

    /// Database type the query orders for.
    pub fn database_type(&self) -> DatabaseType {
        self.criteria.database_type
    }

    /// Only tasks with exactly this priority.
    pub fn task_priority(mut self, priority: i32) -> Self {
        self.criteria.task_priority = Some(priority);
        self
    }

    /// Only tasks with at least this priority.
    pub fn task_min_priority(mut self, priority: i32) -> Self {
        self.criteria.min_priority = Some(priority);
        self
    }

    /// Only tasks with at most this priority.
    pub fn task_max_priority(mut self, priority: i32) -> Self {
        self.criteria.max_priority = Some(priority);
        self
    }

    /// Only completed or deleted tasks.
    pub fn finished(mut self) -> Self {
        self.criteria.finished = Some(true);
        self
    }

    /// Only tasks still open.
    pub fn unfinished(mut self) -> Self {
        self.criteria.finished = Some(false);
        self
    }

    /// Only tasks due strictly before `time`.
    pub fn due_before(mut self, time: DateTime<Utc>) -> Self {
        self.criteria.due_before = Some(time);
        self
    }

    /// Only tasks due strictly after `time`.
    pub fn due_after(mut self, time: DateTime<Utc>) -> Self {
        self.criteria.due_after = Some(time);
        self
    }
}
