use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::row::{string, text, time, HistoryTable, Row};

/// An append-only audit record about a task.
///
/// `log_number` is assigned by the store, unique and strictly increasing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskLogEntry {
    pub log_number: u64,
    pub log_type: String,
    pub task_id: String,
    pub time_stamp: DateTime<Utc>,
    pub user_id: Option<String>,
    pub data: Option<String>,
    pub execution_id: Option<String>,
    pub process_instance_id: Option<String>,
    pub process_definition_id: Option<String>,
    pub scope_id: Option<String>,
    pub sub_scope_id: Option<String>,
    pub scope_type: Option<String>,
    pub scope_definition_id: Option<String>,
    pub tenant_id: Option<String>,
}

/// Field values for a task log entry that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewTaskLogEntry {
    pub log_type: Option<String>,
    pub task_id: Option<String>,
    pub time_stamp: Option<DateTime<Utc>>,
    pub user_id: Option<String>,
    pub data: Option<String>,
    pub execution_id: Option<String>,
    pub process_instance_id: Option<String>,
    pub process_definition_id: Option<String>,
    pub scope_id: Option<String>,
    pub sub_scope_id: Option<String>,
    pub scope_type: Option<String>,
    pub scope_definition_id: Option<String>,
    pub tenant_id: Option<String>,
}

impl Row for TaskLogEntry {
    const TABLE: HistoryTable = HistoryTable::TaskLogEntries;

    const COLUMNS: &'static [&'static str] = &[
        "ID_",
        "TYPE_",
        "TASK_ID_",
        "TIME_STAMP_",
        "USER_ID_",
        "DATA_",
        "EXECUTION_ID_",
        "PROC_INST_ID_",
        "PROC_DEF_ID_",
        "SCOPE_ID_",
        "SUB_SCOPE_ID_",
        "SCOPE_TYPE_",
        "SCOPE_DEFINITION_ID_",
        "TENANT_ID_",
    ];

    fn column(&self, name: &str) -> Option<Value> {
        Some(match name.to_ascii_uppercase().as_str() {
            "ID_" => Value::from(self.log_number),
            "TYPE_" => string(&self.log_type),
            "TASK_ID_" => string(&self.task_id),
            "TIME_STAMP_" => time(&self.time_stamp),
            "USER_ID_" => text(&self.user_id),
            "DATA_" => text(&self.data),
            "EXECUTION_ID_" => text(&self.execution_id),
            "PROC_INST_ID_" => text(&self.process_instance_id),
            "PROC_DEF_ID_" => text(&self.process_definition_id),
            "SCOPE_ID_" => text(&self.scope_id),
            "SUB_SCOPE_ID_" => text(&self.sub_scope_id),
            "SCOPE_TYPE_" => text(&self.scope_type),
            "SCOPE_DEFINITION_ID_" => text(&self.scope_definition_id),
            "TENANT_ID_" => text(&self.tenant_id),
            _ => return None,
        })
    }
}
