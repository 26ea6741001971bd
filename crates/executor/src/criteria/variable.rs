use serde::{Deserialize, Serialize};
use serde_json::Value;

use chronicle_core::HistoricVariableInstance;

use super::{eq, eq_opt, like, Criteria, EntityQuery, OrderProperty};
use crate::types::OrderBy;

/// Orderable variable instance properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableInstanceProperty {
    /// Owning process instance
    ProcessInstanceId,
    /// Variable name
    VariableName,
}

impl OrderProperty for VariableInstanceProperty {
    fn column(&self) -> &'static str {
        match self {
            VariableInstanceProperty::ProcessInstanceId => "PROC_INST_ID_",
            VariableInstanceProperty::VariableName => "NAME_",
        }
    }
}

/// Filters over historic variable instances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableInstanceCriteria {
    /// Exact variable id
    pub variable_id: Option<String>,
    /// Exact process instance id
    pub process_instance_id: Option<String>,
    /// Exact task id
    pub task_id: Option<String>,
    /// Exact execution id
    pub execution_id: Option<String>,
    /// Exact variable name
    pub variable_name: Option<String>,
    /// Variable name `LIKE` pattern
    pub variable_name_like: Option<String>,
    /// Name and value a variable must have
    pub variable_value_equals: Option<(String, Value)>,
    /// Skip task-local variables
    pub exclude_task_variables: bool,
    /// Requested ordering, applied in sequence
    pub order_by: Vec<OrderBy<VariableInstanceProperty>>,
}

impl Criteria for VariableInstanceCriteria {
    type Item = HistoricVariableInstance;
    type Property = VariableInstanceProperty;

    fn matches(&self, v: &HistoricVariableInstance) -> bool {
        eq(&self.variable_id, &v.id)
            && eq_opt(&self.process_instance_id, v.process_instance_id.as_deref())
            && eq_opt(&self.task_id, v.task_id.as_deref())
            && eq_opt(&self.execution_id, v.execution_id.as_deref())
            && eq(&self.variable_name, &v.name)
            && self
                .variable_name_like
                .as_deref()
                .map_or(true, |p| like(p, &v.name))
            && self
                .variable_value_equals
                .as_ref()
                .map_or(true, |(name, value)| &v.name == name && &v.value == value)
            && !(self.exclude_task_variables && v.task_id.is_some())
    }

    fn ordering(&self) -> &[OrderBy<VariableInstanceProperty>] {
        &self.order_by
    }

    fn ordering_mut(&mut self) -> &mut Vec<OrderBy<VariableInstanceProperty>> {
        &mut self.order_by
    }

    fn into_query(self) -> EntityQuery {
        EntityQuery::VariableInstances(self)
    }
}
