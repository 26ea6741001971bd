use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use super::{string_filters, Query};
use crate::criteria::ProcessInstanceCriteria;

/// Query over historic process instances.
pub type HistoricProcessInstanceQuery = Query<ProcessInstanceCriteria>;

impl HistoricProcessInstanceQuery {
    string_filters! {
        /// Only the process instance with this id.
        process_instance_id => process_instance_id;
        /// Only instances with this business key.
        process_instance_business_key => business_key;
        /// Only instances of this process definition.
        process_definition_id => process_definition_id;
        /// Only instances of definitions with this key.
        process_definition_key => process_definition_key;
        /// Only instances started by this user.
        started_by => started_by;
        /// Only instances called from this process instance.
        super_process_instance_id => super_process_instance_id;
        /// Only instances of this tenant.
        process_instance_tenant_id => tenant_id;
    }

    /// Only instances whose id is in `ids`.
    pub fn process_instance_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: BTreeSet<String> = ids.into_iter().map(Into::into).collect();
        self.criteria.process_instance_ids = Some(ids);
        self
    }

    /// Only instances that have ended.
    pub fn finished(mut self) -> Self {
        self.criteria.finished = Some(true);
        self
    }

    /// Only instances still running.
    pub fn unfinished(mut self) -> Self {
        self.criteria.finished = Some(false);
        self
    }

    /// Only instances started at or before `time`.
    pub fn started_before(mut self, time: DateTime<Utc>) -> Self {
        self.criteria.started_before = Some(time);
        self
    }

    /// Only instances started at or after `time`.
    pub fn started_after(mut self, time: DateTime<Utc>) -> Self {
        self.criteria.started_after = Some(time);
        self
    }

    /// Only instances that ended at or before `time`.
    pub fn finished_before(mut self, time: DateTime<Utc>) -> Self {
        self.criteria.finished_before = Some(time);
        self
    }

    /// Only instances that ended at or after `time`.
    pub fn finished_after(mut self, time: DateTime<Utc>) -> Self {
        self.criteria.finished_after = Some(time);
        self
    }

    /// Only instances without a tenant.
    pub fn process_instance_without_tenant_id(mut self) -> Self {
        self.criteria.without_tenant_id = true;
        self
    }
}
