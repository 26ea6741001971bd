use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::detail::value_text;
use crate::row::{string, text, time, HistoryTable, Row};

/// Latest value of a process or task variable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HistoricVariableInstance {
    pub id: String,
    pub process_instance_id: Option<String>,
    pub task_id: Option<String>,
    pub execution_id: Option<String>,
    pub name: String,
    pub value: Value,
    pub create_time: DateTime<Utc>,
    pub last_updated_time: DateTime<Utc>,
}

impl HistoricVariableInstance {
    /// Type name of the stored value.
    pub fn type_name(&self) -> &'static str {
        match &self.value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(n) if n.is_i64() || n.is_u64() => "long",
            Value::Number(_) => "double",
            Value::String(_) => "string",
            Value::Array(_) | Value::Object(_) => "json",
        }
    }
}

impl Row for HistoricVariableInstance {
    const TABLE: HistoryTable = HistoryTable::VariableInstances;

    const COLUMNS: &'static [&'static str] = &[
        "ID_",
        "PROC_INST_ID_",
        "TASK_ID_",
        "EXECUTION_ID_",
        "NAME_",
        "VAR_TYPE_",
        "TEXT_",
        "LONG_",
        "DOUBLE_",
        "CREATE_TIME_",
        "LAST_UPDATED_TIME_",
    ];

    fn column(&self, name: &str) -> Option<Value> {
        Some(match name.to_ascii_uppercase().as_str() {
            "ID_" => string(&self.id),
            "PROC_INST_ID_" => text(&self.process_instance_id),
            "TASK_ID_" => text(&self.task_id),
            "EXECUTION_ID_" => text(&self.execution_id),
            "NAME_" => string(&self.name),
            "VAR_TYPE_" => string(self.type_name()),
            "TEXT_" => value_text(&self.value),
            "LONG_" => self.value.as_i64().map_or(Value::Null, Value::from),
            "DOUBLE_" => match &self.value {
                Value::Number(n) if !(n.is_i64() || n.is_u64()) => Value::Number(n.clone()),
                _ => Value::Null,
            },
            "CREATE_TIME_" => time(&self.create_time),
            "LAST_UPDATED_TIME_" => time(&self.last_updated_time),
            _ => return None,
        })
    }
}
