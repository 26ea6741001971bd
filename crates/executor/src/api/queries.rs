//! Query builder factories.
//!
//! Every call returns a new builder with empty criteria.

use std::sync::Arc;

use super::HistoryService;
use crate::criteria::{
    ActivityInstanceCriteria, DetailCriteria, ProcessInstanceCriteria, TaskInstanceCriteria,
    TaskLogEntryCriteria, VariableInstanceCriteria,
};
use crate::query::{
    HistoricActivityInstanceQuery, HistoricDetailQuery, HistoricProcessInstanceQuery,
    HistoricTaskInstanceQuery, HistoricVariableInstanceQuery, NativeHistoricActivityInstanceQuery,
    NativeHistoricDetailQuery, NativeHistoricProcessInstanceQuery, NativeHistoricTaskInstanceQuery,
    NativeHistoricVariableInstanceQuery, NativeQuery, NativeTaskLogEntryQuery,
    ProcessInstanceHistoryLogQuery, Query, TaskLogEntryQuery,
};

impl HistoryService {
    // =========================================================================
    // Structured Queries (6)
    // =========================================================================

    /// New query over historic process instances.
    pub fn create_historic_process_instance_query(&self) -> HistoricProcessInstanceQuery {
        Query::new(Arc::clone(&self.executor), ProcessInstanceCriteria::default())
    }

    /// New query over historic activity instances.
    pub fn create_historic_activity_instance_query(&self) -> HistoricActivityInstanceQuery {
        Query::new(Arc::clone(&self.executor), ActivityInstanceCriteria::default())
    }

    /// New query over historic task instances, ordering NULL the way the
    /// service's database type does.
    pub fn create_historic_task_instance_query(&self) -> HistoricTaskInstanceQuery {
        Query::new(
            Arc::clone(&self.executor),
            TaskInstanceCriteria::for_database(self.database_type),
        )
    }

    /// New query over historic details.
    pub fn create_historic_detail_query(&self) -> HistoricDetailQuery {
        Query::new(Arc::clone(&self.executor), DetailCriteria::default())
    }

    /// New query over historic variable instances.
    pub fn create_historic_variable_instance_query(&self) -> HistoricVariableInstanceQuery {
        Query::new(Arc::clone(&self.executor), VariableInstanceCriteria::default())
    }

    /// New query over task log entries.
    pub fn create_task_log_entry_query(&self) -> TaskLogEntryQuery {
        Query::new(Arc::clone(&self.executor), TaskLogEntryCriteria::default())
    }

    // =========================================================================
    // Native Queries (6)
    // =========================================================================

    /// New native query over `ACT_HI_PROCINST`.
    pub fn create_native_historic_process_instance_query(
        &self,
    ) -> NativeHistoricProcessInstanceQuery {
        NativeQuery::new(Arc::clone(&self.executor), self.database_type)
    }

    /// New native query over `ACT_HI_ACTINST`.
    pub fn create_native_historic_activity_instance_query(
        &self,
    ) -> NativeHistoricActivityInstanceQuery {
        NativeQuery::new(Arc::clone(&self.executor), self.database_type)
    }

    /// New native query over `ACT_HI_TASKINST`.
    pub fn create_native_historic_task_instance_query(&self) -> NativeHistoricTaskInstanceQuery {
        NativeQuery::new(Arc::clone(&self.executor), self.database_type)
    }

    /// New native query over `ACT_HI_DETAIL`.
    pub fn create_native_historic_detail_query(&self) -> NativeHistoricDetailQuery {
        NativeQuery::new(Arc::clone(&self.executor), self.database_type)
    }

    /// New native query over `ACT_HI_VARINST`.
    pub fn create_native_historic_variable_instance_query(
        &self,
    ) -> NativeHistoricVariableInstanceQuery {
        NativeQuery::new(Arc::clone(&self.executor), self.database_type)
    }

    /// New native query over `ACT_HI_TSK_LOG`.
    pub fn create_native_task_log_entry_query(&self) -> NativeTaskLogEntryQuery {
        NativeQuery::new(Arc::clone(&self.executor), self.database_type)
    }

    // =========================================================================
    // History Log
    // =========================================================================

    /// New history log query for one process instance.
    pub fn create_process_instance_history_log_query(
        &self,
        process_instance_id: impl Into<String>,
    ) -> ProcessInstanceHistoryLogQuery {
        ProcessInstanceHistoryLogQuery::new(Arc::clone(&self.executor), process_instance_id.into())
    }
}
