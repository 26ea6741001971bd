use std::sync::Arc;

use crate::types::{HistoryLogCriteria, ProcessInstanceHistoryLog};
use crate::{Command, CommandExecutor, Error, Output, Result};

/// Builds the timeline of one process instance.
///
/// Nothing is included until asked for:
///
/// ```ignore
/// let log = history
///     .create_process_instance_history_log_query("p1")
///     .include_tasks()
///     .include_variable_updates()
///     .single_result()?;
/// ```
#[derive(Clone)]
pub struct ProcessInstanceHistoryLogQuery {
    executor: Arc<dyn CommandExecutor>,
    criteria: HistoryLogCriteria,
}

impl ProcessInstanceHistoryLogQuery {
    pub(crate) fn new(executor: Arc<dyn CommandExecutor>, process_instance_id: String) -> Self {
        Self {
            executor,
            criteria: HistoryLogCriteria {
                process_instance_id,
                ..Default::default()
            },
        }
    }

    /// The criteria accumulated so far.
    pub fn criteria(&self) -> &HistoryLogCriteria {
        &self.criteria
    }

    /// Include task instances.
    pub fn include_tasks(mut self) -> Self {
        self.criteria.include_tasks = true;
        self
    }

    /// Include activity instances.
    pub fn include_activities(mut self) -> Self {
        self.criteria.include_activities = true;
        self
    }

    /// Include variable instances.
    pub fn include_variables(mut self) -> Self {
        self.criteria.include_variables = true;
        self
    }

    /// Include variable update details.
    pub fn include_variable_updates(mut self) -> Self {
        self.criteria.include_variable_updates = true;
        self
    }

    /// Include form property details.
    pub fn include_form_properties(mut self) -> Self {
        self.criteria.include_form_properties = true;
        self
    }

    /// The log, or `None` when the process instance does not exist.
    pub fn single_result(&self) -> Result<Option<ProcessInstanceHistoryLog>> {
        match self.executor.execute(Command::GetProcessInstanceHistoryLog {
            query: self.criteria.clone(),
        })? {
            Output::HistoryLog(log) => Ok(log.map(|l| *l)),
            _ => Err(Error::unexpected_output("GetProcessInstanceHistoryLog")),
        }
    }
}
