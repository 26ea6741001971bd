//! Task log entry builder.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use chronicle_core::{NewTaskLogEntry, TaskInfo};

use crate::{Command, CommandExecutor, Error, Output, Result};

/// Builder for a task log entry.
///
/// Created unseeded, or seeded from a task, in which case the task's
/// identifying fields (id, tenant, process instance, process definition,
/// execution, scope, sub-scope, scope type, scope definition) are copied in.
/// Every field can be overwritten before [`create`](Self::create).
///
/// # Example
///
/// ```ignore
/// let log_number = history
///     .create_task_log_entry_builder_for(&task)
///     .log_type("USER_EVENT")
///     .user_id("kermit")
///     .data(r#"{"comment":"escalated"}"#)
///     .create()?;
/// ```
#[derive(Clone)]
pub struct TaskLogEntryBuilder {
    executor: Arc<dyn CommandExecutor>,
    entry: NewTaskLogEntry,
}

impl fmt::Debug for TaskLogEntryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskLogEntryBuilder")
            .field("entry", &self.entry)
            .finish()
    }
}

impl TaskLogEntryBuilder {
    pub(crate) fn new(executor: Arc<dyn CommandExecutor>) -> Self {
        Self {
            executor,
            entry: NewTaskLogEntry::default(),
        }
    }

    pub(crate) fn for_task(executor: Arc<dyn CommandExecutor>, task: &dyn TaskInfo) -> Self {
        let owned = |v: Option<&str>| v.map(str::to_string);
        Self {
            executor,
            entry: NewTaskLogEntry {
                task_id: Some(task.id().to_string()),
                tenant_id: owned(task.tenant_id()),
                process_instance_id: owned(task.process_instance_id()),
                process_definition_id: owned(task.process_definition_id()),
                execution_id: owned(task.execution_id()),
                scope_id: owned(task.scope_id()),
                sub_scope_id: owned(task.sub_scope_id()),
                scope_type: owned(task.scope_type()),
                scope_definition_id: owned(task.scope_definition_id()),
                ..Default::default()
            },
        }
    }

    /// The entry as it would be submitted.
    pub fn entry(&self) -> &NewTaskLogEntry {
        &self.entry
    }

    /// Entry type, e.g. `USER_TASK_ASSIGNEE_CHANGED`. Required.
    pub fn log_type(mut self, log_type: impl Into<String>) -> Self {
        self.entry.log_type = Some(log_type.into());
        self
    }

    /// Task the entry is about. Required.
    pub fn task_id(mut self, task_id: impl Into<String>) -> Self {
        self.entry.task_id = Some(task_id.into());
        self
    }

    /// Time of the event; defaults to the time the entry is stored.
    pub fn time_stamp(mut self, time_stamp: DateTime<Utc>) -> Self {
        self.entry.time_stamp = Some(time_stamp);
        self
    }

    /// User who caused the event.
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.entry.user_id = Some(user_id.into());
        self
    }

    /// Free-form payload, usually JSON.
    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.entry.data = Some(data.into());
        self
    }

    /// Execution the task runs on.
    pub fn execution_id(mut self, execution_id: impl Into<String>) -> Self {
        self.entry.execution_id = Some(execution_id.into());
        self
    }

    /// Process instance the task belongs to.
    pub fn process_instance_id(mut self, process_instance_id: impl Into<String>) -> Self {
        self.entry.process_instance_id = Some(process_instance_id.into());
        self
    }

    /// Definition of that process.
    pub fn process_definition_id(mut self, process_definition_id: impl Into<String>) -> Self {
        self.entry.process_definition_id = Some(process_definition_id.into());
        self
    }

    /// Non-process scope the task belongs to.
    pub fn scope_id(mut self, scope_id: impl Into<String>) -> Self {
        self.entry.scope_id = Some(scope_id.into());
        self
    }

    /// Sub-scope inside the scope.
    pub fn sub_scope_id(mut self, sub_scope_id: impl Into<String>) -> Self {
        self.entry.sub_scope_id = Some(sub_scope_id.into());
        self
    }

    /// Kind of scope.
    pub fn scope_type(mut self, scope_type: impl Into<String>) -> Self {
        self.entry.scope_type = Some(scope_type.into());
        self
    }

    /// Definition of the scope.
    pub fn scope_definition_id(mut self, scope_definition_id: impl Into<String>) -> Self {
        self.entry.scope_definition_id = Some(scope_definition_id.into());
        self
    }

    /// Tenant of the task.
    pub fn tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
        self.entry.tenant_id = Some(tenant_id.into());
        self
    }

    /// Submit the entry.
    ///
    /// Returns the assigned log number, or `None` when task logging is
    /// switched off and nothing was stored.
    pub fn create(self) -> Result<Option<u64>> {
        match self
            .executor
            .execute(Command::AddTaskLogEntry { entry: self.entry })?
        {
            Output::MaybeLogNumber(n) => Ok(n),
            _ => Err(Error::unexpected_output("AddTaskLogEntry")),
        }
    }
}
