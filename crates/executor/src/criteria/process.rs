use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chronicle_core::HistoricProcessInstance;

use super::{eq, eq_opt, finished_matches, Criteria, EntityQuery, OrderProperty};
use crate::types::OrderBy;

/// Orderable process instance properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessInstanceProperty {
    /// Process instance id
    Id,
    /// Business key
    BusinessKey,
    /// Start time
    StartTime,
    /// End time
    EndTime,
    /// Duration in milliseconds
    Duration,
    /// Process definition id
    ProcessDefinitionId,
}

impl OrderProperty for ProcessInstanceProperty {
    fn column(&self) -> &'static str {
        match self {
            ProcessInstanceProperty::Id => "ID_",
            ProcessInstanceProperty::BusinessKey => "BUSINESS_KEY_",
            ProcessInstanceProperty::StartTime => "START_TIME_",
            ProcessInstanceProperty::EndTime => "END_TIME_",
            ProcessInstanceProperty::Duration => "DURATION_",
            ProcessInstanceProperty::ProcessDefinitionId => "PROC_DEF_ID_",
        }
    }
}

/// Filters over historic process instances.
///
/// Time bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessInstanceCriteria {
    /// Exact process instance id
    pub process_instance_id: Option<String>,
    /// Any of these process instance ids
    pub process_instance_ids: Option<BTreeSet<String>>,
    /// Exact business key
    pub business_key: Option<String>,
    /// Exact process definition id
    pub process_definition_id: Option<String>,
    /// Exact process definition key
    pub process_definition_key: Option<String>,
    /// User that started the instance
    pub started_by: Option<String>,
    /// `Some(true)` for finished rows only, `Some(false)` for running ones
    pub finished: Option<bool>,
    /// Started strictly before this time
    pub started_before: Option<DateTime<Utc>>,
    /// Started strictly after this time
    pub started_after: Option<DateTime<Utc>>,
    /// Finished strictly before this time
    pub finished_before: Option<DateTime<Utc>>,
    /// Finished strictly after this time
    pub finished_after: Option<DateTime<Utc>>,
    /// Parent process instance of a call activity
    pub super_process_instance_id: Option<String>,
    /// Exact tenant id
    pub tenant_id: Option<String>,
    /// Only instances without a tenant
    pub without_tenant_id: bool,
    /// Requested ordering, applied in sequence
    pub order_by: Vec<OrderBy<ProcessInstanceProperty>>,
}

impl Criteria for ProcessInstanceCriteria {
    type Item = HistoricProcessInstance;
    type Property = ProcessInstanceProperty;

    fn matches(&self, pi: &HistoricProcessInstance) -> bool {
        eq(&self.process_instance_id, &pi.id)
            && self
                .process_instance_ids
                .as_ref()
                .map_or(true, |ids| ids.contains(&pi.id))
            && eq_opt(&self.business_key, pi.business_key.as_deref())
            && eq(&self.process_definition_id, &pi.process_definition_id)
            && eq_opt(&self.process_definition_key, pi.process_definition_key.as_deref())
            && eq_opt(&self.started_by, pi.start_user_id.as_deref())
            && finished_matches(self.finished, pi.is_finished())
            && self.started_before.map_or(true, |t| pi.start_time <= t)
            && self.started_after.map_or(true, |t| pi.start_time >= t)
            && self
                .finished_before
                .map_or(true, |t| pi.end_time.map_or(false, |end| end <= t))
            && self
                .finished_after
                .map_or(true, |t| pi.end_time.map_or(false, |end| end >= t))
            && eq_opt(&self.super_process_instance_id, pi.super_process_instance_id.as_deref())
            && eq_opt(&self.tenant_id, pi.tenant_id.as_deref())
            && (!self.without_tenant_id || pi.tenant_id.as_deref().map_or(true, str::is_empty))
    }

    fn ordering(&self) -> &[OrderBy<ProcessInstanceProperty>] {
        &self.order_by
    }

    fn ordering_mut(&mut self) -> &mut Vec<OrderBy<ProcessInstanceProperty>> {
        &mut self.order_by
    }

    fn into_query(self) -> EntityQuery {
        EntityQuery::ProcessInstances(self)
    }
}
