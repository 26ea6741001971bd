//! Task log handler.

use chrono::Utc;

use chronicle_core::NewTaskLogEntry;
use chronicle_storage::HistoryStore;

use crate::config::HistoryConfig;
use crate::{Error, Output, Result};

fn require(field: &str, value: &Option<String>) -> Result<()> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => {
            tracing::warn!(target: "chronicle::executor", field, "Rejected task log entry");
            Err(Error::invalid_argument(format!("task log entry {} is required", field)))
        }
    }
}

/// Handle AddTaskLogEntry command.
///
/// The entry is validated even when task logging is disabled; a disabled
/// log stores nothing and yields `None`.
pub fn add_task_log_entry(
    store: &HistoryStore,
    config: &HistoryConfig,
    mut entry: NewTaskLogEntry,
) -> Result<Output> {
    require("task id", &entry.task_id)?;
    require("type", &entry.log_type)?;

    if !config.enable_task_logging {
        tracing::debug!(target: "chronicle::executor", "Task logging disabled; entry dropped");
        return Ok(Output::MaybeLogNumber(None));
    }

    entry.time_stamp.get_or_insert_with(Utc::now);
    let log_number = store.write(|s| s.append_task_log_entry(entry))?;
    Ok(Output::MaybeLogNumber(Some(log_number)))
}
