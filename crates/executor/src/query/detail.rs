use super::{string_filters, Query};
use crate::criteria::{DetailCriteria, DetailType};

/// Query over historic details (variable updates and form properties).
pub type HistoricDetailQuery = Query<DetailCriteria>;

impl HistoricDetailQuery {
    string_filters! {
        /// Only the detail with this id.
        id => detail_id;
        /// Only details of this process instance.
        process_instance_id => process_instance_id;
        /// Only details recorded in this activity instance.
        activity_instance_id => activity_instance_id;
        /// Only details recorded on this execution.
        execution_id => execution_id;
        /// Only details recorded on this task.
        task_id => task_id;
    }

    /// Only variable updates.
    pub fn variable_updates(mut self) -> Self {
        self.criteria.detail_type = Some(DetailType::VariableUpdate);
        self
    }

    /// Only submitted form properties.
    pub fn form_properties(mut self) -> Self {
        self.criteria.detail_type = Some(DetailType::FormProperty);
        self
    }

    /// Leave out details recorded on a task.
    pub fn exclude_task_details(mut self) -> Self {
        self.criteria.exclude_task_details = true;
        self
    }
}
