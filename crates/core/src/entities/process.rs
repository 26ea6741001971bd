use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::row::{opt_i64, opt_time, string, text, time, HistoryTable, Row};

/// A process instance as recorded in history.
///
/// An instance without `end_time` is still running.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HistoricProcessInstance {
    pub id: String,
    pub name: Option<String>,
    pub business_key: Option<String>,
    pub process_definition_id: String,
    pub process_definition_key: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration_in_millis: Option<i64>,
    pub start_user_id: Option<String>,
    pub start_activity_id: Option<String>,
    pub end_activity_id: Option<String>,
    pub super_process_instance_id: Option<String>,
    pub delete_reason: Option<String>,
    pub tenant_id: Option<String>,
}

impl HistoricProcessInstance {
    /// Whether the instance has ended.
    pub fn is_finished(&self) -> bool {
        self.end_time.is_some()
    }

    /// Mark the instance ended at `end_time`, deriving its duration.
    pub fn finish(&mut self, end_time: DateTime<Utc>) {
        self.duration_in_millis = Some((end_time - self.start_time).num_milliseconds());
        self.end_time = Some(end_time);
    }
}

impl Row for HistoricProcessInstance {
    const TABLE: HistoryTable = HistoryTable::ProcessInstances;

    const COLUMNS: &'static [&'static str] = &[
        "ID_",
        "PROC_INST_ID_",
        "NAME_",
        "BUSINESS_KEY_",
        "PROC_DEF_ID_",
        "PROC_DEF_KEY_",
        "START_TIME_",
        "END_TIME_",
        "DURATION_",
        "START_USER_ID_",
        "START_ACT_ID_",
        "END_ACT_ID_",
        "SUPER_PROCESS_INSTANCE_ID_",
        "DELETE_REASON_",
        "TENANT_ID_",
    ];

    fn column(&self, name: &str) -> Option<Value> {
        Some(match name.to_ascii_uppercase().as_str() {
            "ID_" | "PROC_INST_ID_" => string(&self.id),
            "NAME_" => text(&self.name),
            "BUSINESS_KEY_" => text(&self.business_key),
            "PROC_DEF_ID_" => string(&self.process_definition_id),
            "PROC_DEF_KEY_" => text(&self.process_definition_key),
            "START_TIME_" => time(&self.start_time),
            "END_TIME_" => opt_time(&self.end_time),
            "DURATION_" => opt_i64(self.duration_in_millis),
            "START_USER_ID_" => text(&self.start_user_id),
            "START_ACT_ID_" => text(&self.start_activity_id),
            "END_ACT_ID_" => text(&self.end_activity_id),
            "SUPER_PROCESS_INSTANCE_ID_" => text(&self.super_process_instance_id),
            "DELETE_REASON_" => text(&self.delete_reason),
            "TENANT_ID_" => text(&self.tenant_id),
            _ => return None,
        })
    }
}
