use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chronicle_core::{DatabaseType, HistoricTaskInstance, NullOrdering};

use super::{eq, eq_opt, finished_matches, like, Criteria, EntityQuery, OrderProperty};
use crate::types::OrderBy;

/// Orderable task instance properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskInstanceProperty {
    /// Task id
    Id,
    /// Task name
    Name,
    /// Assignee
    Assignee,
    /// Priority
    Priority,
    /// Creation time
    CreateTime,
    /// End time
    EndTime,
    /// Due date
    DueDate,
    /// Duration in milliseconds
    Duration,
}

impl OrderProperty for TaskInstanceProperty {
    fn column(&self) -> &'static str {
        match self {
            TaskInstanceProperty::Id => "ID_",
            TaskInstanceProperty::Name => "NAME_",
            TaskInstanceProperty::Assignee => "ASSIGNEE_",
            TaskInstanceProperty::Priority => "PRIORITY_",
            TaskInstanceProperty::CreateTime => "START_TIME_",
            TaskInstanceProperty::EndTime => "END_TIME_",
            TaskInstanceProperty::DueDate => "DUE_DATE_",
            TaskInstanceProperty::Duration => "DURATION_",
        }
    }
}

/// Filters over historic task instances.
///
/// `database_type` is fixed when the query is created; it decides where
/// NULL sorts (e.g. tasks without a due date).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskInstanceCriteria {
    /// Dialect that decides NULL placement
    pub database_type: DatabaseType,
    /// Exact task id
    pub task_id: Option<String>,
    /// Exact process instance id
    pub process_instance_id: Option<String>,
    /// Exact process definition id
    pub process_definition_id: Option<String>,
    /// Exact execution id
    pub execution_id: Option<String>,
    /// Exact task name
    pub task_name: Option<String>,
    /// Task name `LIKE` pattern
    pub task_name_like: Option<String>,
    /// Exact assignee
    pub task_assignee: Option<String>,
    /// Exact owner
    pub task_owner: Option<String>,
    /// Exact task definition key
    pub task_definition_key: Option<String>,
    /// Exact priority
    pub task_priority: Option<i32>,
    /// Priority at least this value
    pub min_priority: Option<i32>,
    /// Priority at most this value
    pub max_priority: Option<i32>,
    /// `Some(true)` for finished rows only, `Some(false)` for running ones
    pub finished: Option<bool>,
    /// Due strictly before this time
    pub due_before: Option<DateTime<Utc>>,
    /// Due strictly after this time
    pub due_after: Option<DateTime<Utc>>,
    /// Exact category
    pub task_category: Option<String>,
    /// Exact tenant id
    pub tenant_id: Option<String>,
    /// Requested ordering, applied in sequence
    pub order_by: Vec<OrderBy<TaskInstanceProperty>>,
}

impl TaskInstanceCriteria {
    /// Empty criteria for the given dialect.
    pub fn for_database(database_type: DatabaseType) -> Self {
        Self {
            database_type,
            ..Default::default()
        }
    }
}

impl Criteria for TaskInstanceCriteria {
    type Item = HistoricTaskInstance;
    type Property = TaskInstanceProperty;

    fn matches(&self, t: &HistoricTaskInstance) -> bool {
        eq(&self.task_id, &t.id)
            && eq_opt(&self.process_instance_id, t.process_instance_id.as_deref())
            && eq_opt(&self.process_definition_id, t.process_definition_id.as_deref())
            && eq_opt(&self.execution_id, t.execution_id.as_deref())
            && eq_opt(&self.task_name, t.name.as_deref())
            && self
                .task_name_like
                .as_deref()
                .map_or(true, |p| t.name.as_deref().map_or(false, |n| like(p, n)))
            && eq_opt(&self.task_assignee, t.assignee.as_deref())
            && eq_opt(&self.task_owner, t.owner.as_deref())
            && eq_opt(&self.task_definition_key, t.task_definition_key.as_deref())
            && self.task_priority.map_or(true, |p| t.priority == p)
            && self.min_priority.map_or(true, |p| t.priority >= p)
            && self.max_priority.map_or(true, |p| t.priority <= p)
            && finished_matches(self.finished, t.is_finished())
            && self
                .due_before
                .map_or(true, |d| t.due_date.map_or(false, |due| due < d))
            && self
                .due_after
                .map_or(true, |d| t.due_date.map_or(false, |due| due > d))
            && eq_opt(&self.task_category, t.category.as_deref())
            && eq_opt(&self.tenant_id, t.tenant_id.as_deref())
    }

    fn ordering(&self) -> &[OrderBy<TaskInstanceProperty>] {
        &self.order_by
    }

    fn ordering_mut(&mut self) -> &mut Vec<OrderBy<TaskInstanceProperty>> {
        &mut self.order_by
    }

    fn null_ordering(&self) -> NullOrdering {
        self.database_type.null_ordering()
    }

    fn into_query(self) -> EntityQuery {
        EntityQuery::TaskInstances(self)
    }
}
