//! Task log entry builders.

use std::sync::Arc;

use chronicle_core::TaskInfo;

use super::HistoryService;
use crate::builder::TaskLogEntryBuilder;

impl HistoryService {
    /// New, empty task log entry builder.
    pub fn create_task_log_entry_builder(&self) -> TaskLogEntryBuilder {
        TaskLogEntryBuilder::new(Arc::clone(&self.executor))
    }

    /// New task log entry builder pre-filled from `task`.
    pub fn create_task_log_entry_builder_for(&self, task: &dyn TaskInfo) -> TaskLogEntryBuilder {
        TaskLogEntryBuilder::for_task(Arc::clone(&self.executor), task)
    }
}
