//! Delete operations.

use super::HistoryService;
use crate::{Command, Error, Output, Result};

impl HistoryService {
    // =========================================================================
    // Delete Operations (3)
    // =========================================================================

    /// Delete a historic task instance with its identity links, details,
    /// task variables, entity links and log entries.
    ///
    /// Deleting a task that was never recorded does nothing.
    pub fn delete_historic_task_instance(&self, task_id: &str) -> Result<()> {
        match self.executor.execute(Command::DeleteHistoricTaskInstance {
            task_id: task_id.to_string(),
        })? {
            Output::Unit => Ok(()),
            _ => Err(Error::unexpected_output("DeleteHistoricTaskInstance")),
        }
    }

    /// Delete a finished historic process instance and everything recorded
    /// under it.
    ///
    /// # Errors
    ///
    /// `NotFound` when no such instance exists, `InvalidState` when it is
    /// still running.
    pub fn delete_historic_process_instance(&self, process_instance_id: &str) -> Result<()> {
        match self.executor.execute(Command::DeleteHistoricProcessInstance {
            process_instance_id: process_instance_id.to_string(),
        })? {
            Output::Unit => Ok(()),
            _ => Err(Error::unexpected_output("DeleteHistoricProcessInstance")),
        }
    }

    /// Delete one task log entry. Deleting an unknown number does nothing.
    pub fn delete_task_log_entry(&self, log_number: u64) -> Result<()> {
        match self
            .executor
            .execute(Command::DeleteTaskLogEntry { log_number })?
        {
            Output::Unit => Ok(()),
            _ => Err(Error::unexpected_output("DeleteTaskLogEntry")),
        }
    }
}
