use super::{string_filters, Query};
use crate::criteria::ActivityInstanceCriteria;

/// Query over historic activity instances.
pub type HistoricActivityInstanceQuery = Query<ActivityInstanceCriteria>;

impl HistoricActivityInstanceQuery {
    string_filters! {
        /// Only the activity instance with this id.
        activity_instance_id => activity_instance_id;
        /// Only activities of this process instance.
        process_instance_id => process_instance_id;
        /// Only activities of this process definition.
        process_definition_id => process_definition_id;
        /// Only activities run on this execution.
        execution_id => execution_id;
        /// Only instances of the activity with this definition id.
        activity_id => activity_id;
        /// Only activities with this name.
        activity_name => activity_name;
        /// Only activities of this type, e.g. `userTask`.
        activity_type => activity_type;
        /// Only user task activities assigned to this user.
        task_assignee => task_assignee;
        /// Only activities of this tenant.
        activity_tenant_id => tenant_id;
    }

    /// Only activities that have ended.
    pub fn finished(mut self) -> Self {
        self.criteria.finished = Some(true);
        self
    }

    /// Only activities still active.
    pub fn unfinished(mut self) -> Self {
        self.criteria.finished = Some(false);
        self
    }
}
