use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::row::{string, text, time, HistoryTable, Row};

/// What a historic detail records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DetailKind {
    /// A variable was written; `revision` counts writes to the same variable.
    VariableUpdate {
        variable_name: String,
        value: Value,
        revision: i32,
    },
    /// A form property was submitted.
    FormProperty {
        property_id: String,
        property_value: Option<String>,
    },
}

impl Default for DetailKind {
    fn default() -> Self {
        DetailKind::VariableUpdate {
            variable_name: String::new(),
            value: Value::Null,
            revision: 0,
        }
    }
}

/// A fine-grained history fact: one variable update or form submission.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HistoricDetail {
    pub id: String,
    pub process_instance_id: Option<String>,
    pub activity_instance_id: Option<String>,
    pub execution_id: Option<String>,
    pub task_id: Option<String>,
    pub time: DateTime<Utc>,
    pub kind: DetailKind,
}

impl HistoricDetail {
    /// Whether this detail is a variable update.
    pub fn is_variable_update(&self) -> bool {
        matches!(self.kind, DetailKind::VariableUpdate { .. })
    }

    /// Variable name or form property id.
    pub fn name(&self) -> &str {
        match &self.kind {
            DetailKind::VariableUpdate { variable_name, .. } => variable_name,
            DetailKind::FormProperty { property_id, .. } => property_id,
        }
    }
}

impl Row for HistoricDetail {
    const TABLE: HistoryTable = HistoryTable::Details;

    const COLUMNS: &'static [&'static str] = &[
        "ID_",
        "TYPE_",
        "PROC_INST_ID_",
        "ACT_INST_ID_",
        "EXECUTION_ID_",
        "TASK_ID_",
        "TIME_",
        "NAME_",
        "REV_",
        "TEXT_",
    ];

    fn column(&self, name: &str) -> Option<Value> {
        Some(match name.to_ascii_uppercase().as_str() {
            "ID_" => string(&self.id),
            "TYPE_" => string(match self.kind {
                DetailKind::VariableUpdate { .. } => "VariableUpdate",
                DetailKind::FormProperty { .. } => "FormProperty",
            }),
            "PROC_INST_ID_" => text(&self.process_instance_id),
            "ACT_INST_ID_" => text(&self.activity_instance_id),
            "EXECUTION_ID_" => text(&self.execution_id),
            "TASK_ID_" => text(&self.task_id),
            "TIME_" => time(&self.time),
            "NAME_" => string(self.name()),
            "REV_" => match &self.kind {
                DetailKind::VariableUpdate { revision, .. } => Value::from(*revision),
                DetailKind::FormProperty { .. } => Value::Null,
            },
            "TEXT_" => match &self.kind {
                DetailKind::VariableUpdate { value, .. } => value_text(value),
                DetailKind::FormProperty { property_value, .. } => text(property_value),
            },
            _ => return None,
        })
    }
}

/// Text column rendering of a variable value: strings verbatim, other
/// scalars and documents as JSON text.
pub(crate) fn value_text(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::String(s) => Value::String(s.clone()),
        other => Value::String(other.to_string()),
    }
}
