use serde_json::Value;

use super::{string_filters, Query};
use crate::criteria::VariableInstanceCriteria;

/// Query over historic variable instances.
pub type HistoricVariableInstanceQuery = Query<VariableInstanceCriteria>;

impl HistoricVariableInstanceQuery {
    string_filters! {
        /// Only the variable instance with this id.
        id => variable_id;
        /// Only variables of this process instance.
        process_instance_id => process_instance_id;
        /// Only variables local to this task.
        task_id => task_id;
        /// Only variables set on this execution.
        execution_id => execution_id;
        /// Only variables with this name.
        variable_name => variable_name;
        /// Only variables whose name matches this `LIKE` pattern.
        variable_name_like => variable_name_like;
    }

    /// Only the variable `name` holding exactly `value`.
    pub fn variable_value_equals(
        mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.criteria.variable_value_equals = Some((name.into(), value.into()));
        self
    }

    /// Leave out task-local variables.
    pub fn exclude_task_variables(mut self) -> Self {
        self.criteria.exclude_task_variables = true;
        self
    }
}
