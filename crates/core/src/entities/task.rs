use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::row::{opt_i64, opt_time, string, text, time, HistoryTable, Row};

/// Identifying fields shared by runtime and historic tasks.
///
/// A task log entry builder seeded from a task copies exactly these fields.
pub trait TaskInfo {
    /// Task id.
    fn id(&self) -> &str;
    /// Tenant the task belongs to.
    fn tenant_id(&self) -> Option<&str>;
    /// Owning process instance.
    fn process_instance_id(&self) -> Option<&str>;
    /// Definition of the owning process.
    fn process_definition_id(&self) -> Option<&str>;
    /// Execution the task was created on.
    fn execution_id(&self) -> Option<&str>;
    /// Non-BPMN scope (case instance, ...) the task belongs to.
    fn scope_id(&self) -> Option<&str>;
    /// Sub-scope inside `scope_id`.
    fn sub_scope_id(&self) -> Option<&str>;
    /// Kind of scope, e.g. `cmmn`.
    fn scope_type(&self) -> Option<&str>;
    /// Definition of the scope.
    fn scope_definition_id(&self) -> Option<&str>;
}

/// A user task as recorded in history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HistoricTaskInstance {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub owner: Option<String>,
    pub priority: i32,
    pub process_instance_id: Option<String>,
    pub process_definition_id: Option<String>,
    pub execution_id: Option<String>,
    pub task_definition_key: Option<String>,
    pub scope_id: Option<String>,
    pub sub_scope_id: Option<String>,
    pub scope_type: Option<String>,
    pub scope_definition_id: Option<String>,
    pub category: Option<String>,
    pub create_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration_in_millis: Option<i64>,
    pub due_date: Option<DateTime<Utc>>,
    pub delete_reason: Option<String>,
    pub tenant_id: Option<String>,
}

impl HistoricTaskInstance {
    /// Whether the task has completed or been deleted.
    pub fn is_finished(&self) -> bool {
        self.end_time.is_some()
    }
}

impl TaskInfo for HistoricTaskInstance {
    fn id(&self) -> &str {
        &self.id
    }

    fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref()
    }

    fn process_instance_id(&self) -> Option<&str> {
        self.process_instance_id.as_deref()
    }

    fn process_definition_id(&self) -> Option<&str> {
        self.process_definition_id.as_deref()
    }

    fn execution_id(&self) -> Option<&str> {
        self.execution_id.as_deref()
    }

    fn scope_id(&self) -> Option<&str> {
        self.scope_id.as_deref()
    }

    fn sub_scope_id(&self) -> Option<&str> {
        self.sub_scope_id.as_deref()
    }

    fn scope_type(&self) -> Option<&str> {
        self.scope_type.as_deref()
    }

    fn scope_definition_id(&self) -> Option<&str> {
        self.scope_definition_id.as_deref()
    }
}

impl Row for HistoricTaskInstance {
    const TABLE: HistoryTable = HistoryTable::TaskInstances;

    const COLUMNS: &'static [&'static str] = &[
        "ID_",
        "NAME_",
        "DESCRIPTION_",
        "ASSIGNEE_",
        "OWNER_",
        "PRIORITY_",
        "PROC_INST_ID_",
        "PROC_DEF_ID_",
        "EXECUTION_ID_",
        "TASK_DEF_KEY_",
        "SCOPE_ID_",
        "SUB_SCOPE_ID_",
        "SCOPE_TYPE_",
        "SCOPE_DEFINITION_ID_",
        "CATEGORY_",
        "START_TIME_",
        "END_TIME_",
        "DURATION_",
        "DUE_DATE_",
        "DELETE_REASON_",
        "TENANT_ID_",
    ];

    fn column(&self, name: &str) -> Option<Value> {
        Some(match name.to_ascii_uppercase().as_str() {
            "ID_" => string(&self.id),
            "NAME_" => text(&self.name),
            "DESCRIPTION_" => text(&self.description),
            "ASSIGNEE_" => text(&self.assignee),
            "OWNER_" => text(&self.owner),
            "PRIORITY_" => Value::from(self.priority),
            "PROC_INST_ID_" => text(&self.process_instance_id),
            "PROC_DEF_ID_" => text(&self.process_definition_id),
            "EXECUTION_ID_" => text(&self.execution_id),
            "TASK_DEF_KEY_" => text(&self.task_definition_key),
            "SCOPE_ID_" => text(&self.scope_id),
            "SUB_SCOPE_ID_" => text(&self.sub_scope_id),
            "SCOPE_TYPE_" => text(&self.scope_type),
            "SCOPE_DEFINITION_ID_" => text(&self.scope_definition_id),
            "CATEGORY_" => text(&self.category),
            "START_TIME_" => time(&self.create_time),
            "END_TIME_" => opt_time(&self.end_time),
            "DURATION_" => opt_i64(self.duration_in_millis),
            "DUE_DATE_" => opt_time(&self.due_date),
            "DELETE_REASON_" => text(&self.delete_reason),
            "TENANT_ID_" => text(&self.tenant_id),
            _ => return None,
        })
    }
}
