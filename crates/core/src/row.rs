//! Column access for historic rows.
//!
//! Every historic entity exposes its fields under the column names of the
//! history schema (`ID_`, `PROC_INST_ID_`, ...). Ordering and native query
//! evaluation both work on these column values, so a query ordered by
//! `START_TIME_` behaves the same whether it was built fluently or written as
//! text.
//!
//! Column values are JSON scalars. Timestamps are epoch milliseconds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Where NULL sorts relative to non-NULL values in an ascending sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullOrdering {
    /// NULL sorts before every value
    Low,
    /// NULL sorts after every value
    #[default]
    High,
}

/// Tables of the history schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryTable {
    /// `ACT_HI_PROCINST`
    ProcessInstances,
    /// `ACT_HI_ACTINST`
    ActivityInstances,
    /// `ACT_HI_TASKINST`
    TaskInstances,
    /// `ACT_HI_DETAIL`
    Details,
    /// `ACT_HI_VARINST`
    VariableInstances,
    /// `ACT_HI_TSK_LOG`
    TaskLogEntries,
}

impl HistoryTable {
    /// All tables.
    pub const ALL: [HistoryTable; 6] = [
        HistoryTable::ProcessInstances,
        HistoryTable::ActivityInstances,
        HistoryTable::TaskInstances,
        HistoryTable::Details,
        HistoryTable::VariableInstances,
        HistoryTable::TaskLogEntries,
    ];

    /// Schema name of the table.
    pub fn table_name(&self) -> &'static str {
        match self {
            HistoryTable::ProcessInstances => "ACT_HI_PROCINST",
            HistoryTable::ActivityInstances => "ACT_HI_ACTINST",
            HistoryTable::TaskInstances => "ACT_HI_TASKINST",
            HistoryTable::Details => "ACT_HI_DETAIL",
            HistoryTable::VariableInstances => "ACT_HI_VARINST",
            HistoryTable::TaskLogEntries => "ACT_HI_TSK_LOG",
        }
    }
}

impl FromStr for HistoryTable {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HistoryTable::ALL
            .iter()
            .copied()
            .find(|t| t.table_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownTable(s.to_string()))
    }
}

impl fmt::Display for HistoryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

/// A historic entity addressable by column name.
pub trait Row {
    /// Table the entity is stored in.
    const TABLE: HistoryTable;

    /// Every column of the table, upper case.
    const COLUMNS: &'static [&'static str];

    /// Value of the named column, or `None` when the table has no such column.
    ///
    /// Names are matched case-insensitively. A column that exists but holds no
    /// value yields `Some(Value::Null)`.
    fn column(&self, name: &str) -> Option<Value>;
}

/// Compare two column values.
///
/// Numbers compare numerically, strings lexicographically, booleans with
/// `false < true`. NULL is placed according to `nulls`. Values of different
/// JSON types compare by type rank so the ordering stays total.
pub fn compare_values(a: &Value, b: &Value, nulls: NullOrdering) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => match nulls {
            NullOrdering::Low => Ordering::Less,
            NullOrdering::High => Ordering::Greater,
        },
        (_, Value::Null) => match nulls {
            NullOrdering::Low => Ordering::Greater,
            NullOrdering::High => Ordering::Less,
        },
        (Value::Number(x), Value::Number(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => {
                let x = x.as_f64().unwrap_or(f64::NAN);
                let y = y.as_f64().unwrap_or(f64::NAN);
                x.partial_cmp(&y).unwrap_or(Ordering::Equal)
            }
        },
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn type_rank(v: &Value) -> u8 {
    match v {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

pub(crate) fn text(v: &Option<String>) -> Value {
    v.as_ref().map_or(Value::Null, |s| Value::String(s.clone()))
}

pub(crate) fn string(v: &str) -> Value {
    Value::String(v.to_string())
}

pub(crate) fn time(t: &DateTime<Utc>) -> Value {
    Value::from(t.timestamp_millis())
}

pub(crate) fn opt_time(t: &Option<DateTime<Utc>>) -> Value {
    t.as_ref().map_or(Value::Null, time)
}

pub(crate) fn opt_i64(v: Option<i64>) -> Value {
    v.map_or(Value::Null, Value::from)
}
