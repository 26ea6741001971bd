use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::row::{opt_i64, opt_time, string, text, time, HistoryTable, Row};

/// One execution of a flow node inside a process instance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HistoricActivityInstance {
    pub id: String,
    pub activity_id: String,
    pub activity_name: Option<String>,
    pub activity_type: String,
    pub process_definition_id: String,
    pub process_instance_id: String,
    pub execution_id: String,
    pub task_id: Option<String>,
    pub assignee: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration_in_millis: Option<i64>,
    pub tenant_id: Option<String>,
}

impl HistoricActivityInstance {
    /// Whether the activity has completed.
    pub fn is_finished(&self) -> bool {
        self.end_time.is_some()
    }
}

impl Row for HistoricActivityInstance {
    const TABLE: HistoryTable = HistoryTable::ActivityInstances;

    const COLUMNS: &'static [&'static str] = &[
        "ID_",
        "ACT_ID_",
        "ACT_NAME_",
        "ACT_TYPE_",
        "PROC_DEF_ID_",
        "PROC_INST_ID_",
        "EXECUTION_ID_",
        "TASK_ID_",
        "ASSIGNEE_",
        "START_TIME_",
        "END_TIME_",
        "DURATION_",
        "TENANT_ID_",
    ];

    fn column(&self, name: &str) -> Option<Value> {
        Some(match name.to_ascii_uppercase().as_str() {
            "ID_" => string(&self.id),
            "ACT_ID_" => string(&self.activity_id),
            "ACT_NAME_" => text(&self.activity_name),
            "ACT_TYPE_" => string(&self.activity_type),
            "PROC_DEF_ID_" => string(&self.process_definition_id),
            "PROC_INST_ID_" => string(&self.process_instance_id),
            "EXECUTION_ID_" => string(&self.execution_id),
            "TASK_ID_" => text(&self.task_id),
            "ASSIGNEE_" => text(&self.assignee),
            "START_TIME_" => time(&self.start_time),
            "END_TIME_" => opt_time(&self.end_time),
            "DURATION_" => opt_i64(self.duration_in_millis),
            "TENANT_ID_" => text(&self.tenant_id),
            _ => return None,
        })
    }
}
