use serde::{Deserialize, Serialize};

use chronicle_core::{DetailKind, HistoricDetail};

use super::{eq, eq_opt, Criteria, EntityQuery, OrderProperty};
use crate::types::OrderBy;

/// Orderable detail properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailProperty {
    /// Detail time
    Time,
    /// Variable name of an update
    VariableName,
    /// Variable revision of an update
    VariableRevision,
    /// Owning process instance
    ProcessInstanceId,
}

impl OrderProperty for DetailProperty {
    fn column(&self) -> &'static str {
        match self {
            DetailProperty::Time => "TIME_",
            DetailProperty::VariableName => "NAME_",
            DetailProperty::VariableRevision => "REV_",
            DetailProperty::ProcessInstanceId => "PROC_INST_ID_",
        }
    }
}

/// Kind of detail to restrict a query to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailType {
    /// Variable updates
    VariableUpdate,
    /// Submitted form properties
    FormProperty,
}

/// Filters over historic details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailCriteria {
    /// Exact detail id
    pub detail_id: Option<String>,
    /// Exact process instance id
    pub process_instance_id: Option<String>,
    /// Exact activity instance id
    pub activity_instance_id: Option<String>,
    /// Exact execution id
    pub execution_id: Option<String>,
    /// Exact task id
    pub task_id: Option<String>,
    /// Only details of this kind
    pub detail_type: Option<DetailType>,
    /// Skip details recorded against a task
    pub exclude_task_details: bool,
    /// Requested ordering, applied in sequence
    pub order_by: Vec<OrderBy<DetailProperty>>,
}

impl Criteria for DetailCriteria {
    type Item = HistoricDetail;
    type Property = DetailProperty;

    fn matches(&self, d: &HistoricDetail) -> bool {
        let type_matches = match (self.detail_type, &d.kind) {
            (None, _) => true,
            (Some(DetailType::VariableUpdate), DetailKind::VariableUpdate { .. }) => true,
            (Some(DetailType::FormProperty), DetailKind::FormProperty { .. }) => true,
            _ => false,
        };
        type_matches
            && eq(&self.detail_id, &d.id)
            && eq_opt(&self.process_instance_id, d.process_instance_id.as_deref())
            && eq_opt(&self.activity_instance_id, d.activity_instance_id.as_deref())
            && eq_opt(&self.execution_id, d.execution_id.as_deref())
            && eq_opt(&self.task_id, d.task_id.as_deref())
            && !(self.exclude_task_details && d.task_id.is_some())
    }

    fn ordering(&self) -> &[OrderBy<DetailProperty>] {
        &self.order_by
    }

    fn ordering_mut(&mut self) -> &mut Vec<OrderBy<DetailProperty>> {
        &mut self.order_by
    }

    fn into_query(self) -> EntityQuery {
        EntityQuery::Details(self)
    }
}
