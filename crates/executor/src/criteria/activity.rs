use serde::{Deserialize, Serialize};

use chronicle_core::HistoricActivityInstance;

use super::{eq, eq_opt, finished_matches, Criteria, EntityQuery, OrderProperty};
use crate::types::OrderBy;

/// Orderable activity instance properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityInstanceProperty {
    /// Activity instance id
    Id,
    /// Start time
    StartTime,
    /// End time
    EndTime,
    /// Duration in milliseconds
    Duration,
    /// Activity id in the model
    ActivityId,
    /// Activity name
    ActivityName,
    /// Activity type
    ActivityType,
    /// Owning process instance
    ProcessInstanceId,
}

impl OrderProperty for ActivityInstanceProperty {
    fn column(&self) -> &'static str {
        match self {
            ActivityInstanceProperty::Id => "ID_",
            ActivityInstanceProperty::StartTime => "START_TIME_",
            ActivityInstanceProperty::EndTime => "END_TIME_",
            ActivityInstanceProperty::Duration => "DURATION_",
            ActivityInstanceProperty::ActivityId => "ACT_ID_",
            ActivityInstanceProperty::ActivityName => "ACT_NAME_",
            ActivityInstanceProperty::ActivityType => "ACT_TYPE_",
            ActivityInstanceProperty::ProcessInstanceId => "PROC_INST_ID_",
        }
    }
}

/// Filters over historic activity instances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityInstanceCriteria {
    /// Exact activity instance id
    pub activity_instance_id: Option<String>,
    /// Exact process instance id
    pub process_instance_id: Option<String>,
    /// Exact process definition id
    pub process_definition_id: Option<String>,
    /// Exact execution id
    pub execution_id: Option<String>,
    /// Exact activity id in the model
    pub activity_id: Option<String>,
    /// Exact activity name
    pub activity_name: Option<String>,
    /// Exact activity type, such as `userTask`
    pub activity_type: Option<String>,
    /// Assignee of the task the activity created
    pub task_assignee: Option<String>,
    /// `Some(true)` for finished rows only, `Some(false)` for running ones
    pub finished: Option<bool>,
    /// Exact tenant id
    pub tenant_id: Option<String>,
    /// Requested ordering, applied in sequence
    pub order_by: Vec<OrderBy<ActivityInstanceProperty>>,
}

impl Criteria for ActivityInstanceCriteria {
    type Item = HistoricActivityInstance;
    type Property = ActivityInstanceProperty;

    fn matches(&self, a: &HistoricActivityInstance) -> bool {
        eq(&self.activity_instance_id, &a.id)
            && eq(&self.process_instance_id, &a.process_instance_id)
            && eq(&self.process_definition_id, &a.process_definition_id)
            && eq(&self.execution_id, &a.execution_id)
            && eq(&self.activity_id, &a.activity_id)
            && eq_opt(&self.activity_name, a.activity_name.as_deref())
            && eq(&self.activity_type, &a.activity_type)
            && eq_opt(&self.task_assignee, a.assignee.as_deref())
            && finished_matches(self.finished, a.is_finished())
            && eq_opt(&self.tenant_id, a.tenant_id.as_deref())
    }

    fn ordering(&self) -> &[OrderBy<ActivityInstanceProperty>] {
        &self.order_by
    }

    fn ordering_mut(&mut self) -> &mut Vec<OrderBy<ActivityInstanceProperty>> {
        &mut self.order_by
    }

    fn into_query(self) -> EntityQuery {
        EntityQuery::ActivityInstances(self)
    }
}
