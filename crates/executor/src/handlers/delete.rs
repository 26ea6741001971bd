//! Delete command handlers.
//!
//! Deleting a task or a log entry that does not exist is a no-op. Deleting a
//! process instance that does not exist is `NotFound`, and one that is still
//! running is `InvalidState`.

use chronicle_storage::{HistoryStore, StoreError};

use super::require_id;
use crate::{Output, Result};

/// Handle DeleteHistoricTaskInstance command.
pub fn delete_historic_task_instance(store: &HistoryStore, task_id: String) -> Result<Output> {
    require_id("task id", &task_id)?;
    let summary = store.write(|s| Ok(s.remove_task(&task_id)))?;
    if summary.tasks == 0 {
        tracing::debug!(
            target: "chronicle::executor",
            task_id = %task_id,
            "No historic task instance to delete"
        );
    } else {
        tracing::info!(
            target: "chronicle::executor",
            task_id = %task_id,
            removed = summary.total(),
            "Deleted historic task instance"
        );
    }
    Ok(Output::Unit)
}

/// Handle DeleteHistoricProcessInstance command.
pub fn delete_historic_process_instance(
    store: &HistoryStore,
    process_instance_id: String,
) -> Result<Output> {
    require_id("process instance id", &process_instance_id)?;
    let result = store.transact(|s| {
        match s.process_instance(&process_instance_id) {
            None => {
                return Err(StoreError::NotFound {
                    entity: "historic process instance",
                    id: process_instance_id.clone(),
                })
            }
            Some(pi) if !pi.is_finished() => {
                return Err(StoreError::InvalidState(format!(
                    "process instance {} is still running",
                    process_instance_id
                )))
            }
            Some(_) => {}
        }
        s.remove_process_instance(&process_instance_id)
    });

    match result {
        Ok(summary) => {
            tracing::info!(
                target: "chronicle::executor",
                process_instance_id = %process_instance_id,
                removed = summary.total(),
                "Deleted historic process instance"
            );
            Ok(Output::Unit)
        }
        Err(e) => {
            tracing::warn!(
                target: "chronicle::executor",
                process_instance_id = %process_instance_id,
                error = %e,
                "Refused to delete historic process instance"
            );
            Err(e.into())
        }
    }
}

/// Handle DeleteTaskLogEntry command.
pub fn delete_task_log_entry(store: &HistoryStore, log_number: u64) -> Result<Output> {
    let existed = store.write(|s| Ok(s.remove_task_log_entry(log_number)))?;
    tracing::debug!(target: "chronicle::executor", log_number, existed, "Deleted task log entry");
    Ok(Output::Unit)
}
