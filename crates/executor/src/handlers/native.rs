//! Native query handlers.
//!
//! Statements are parsed, checked against the target table and evaluated
//! with the requested dialect's NULL ordering.

use std::collections::BTreeMap;

use serde_json::Value;

use chronicle_core::{
    HistoricActivityInstance, HistoricDetail, HistoricProcessInstance, HistoricTaskInstance,
    DatabaseType, HistoricVariableInstance, HistoryTable, NullOrdering, TaskLogEntry,
};
use chronicle_storage::HistoryStore;

use super::{paged, Stored};
use crate::native::{evaluate, parse, CompiledQuery, Projection, Statement};
use crate::types::Page;
use crate::{Error, Output, Result};

fn rows<R: Stored>(
    store: &HistoryStore,
    stmt: Statement,
    parameters: &BTreeMap<String, Value>,
    nulls: NullOrdering,
) -> Result<Vec<R>> {
    let compiled = CompiledQuery::compile::<R>(stmt, parameters)?;
    Ok(store.read(|s| evaluate(R::scan(s), &compiled, nulls)))
}

fn list<R: Stored>(
    store: &HistoryStore,
    stmt: Statement,
    parameters: &BTreeMap<String, Value>,
    nulls: NullOrdering,
    page: Option<Page>,
) -> Result<Output> {
    Ok(R::into_output(paged(rows::<R>(store, stmt, parameters, nulls)?, page)))
}

fn count_rows<R: Stored>(
    store: &HistoryStore,
    stmt: Statement,
    parameters: &BTreeMap<String, Value>,
) -> Result<u64> {
    Ok(rows::<R>(store, stmt, parameters, NullOrdering::default())?.len() as u64)
}

/// Handle NativeQuery command.
///
/// NULL values sort where `database_type` places them.
pub fn native_query(
    store: &HistoryStore,
    database_type: DatabaseType,
    target: HistoryTable,
    sql: String,
    parameters: BTreeMap<String, Value>,
    page: Option<Page>,
) -> Result<Output> {
    let nulls = database_type.null_ordering();
    let stmt = parse(&sql)?;
    if stmt.projection == Projection::Count {
        tracing::warn!(
            target: "chronicle::executor",
            table = %target,
            "COUNT(*) statement used for a listing"
        );
        return Err(Error::malformed("COUNT(*) can only be used with count()"));
    }
    match target {
        HistoryTable::ProcessInstances => {
            list::<HistoricProcessInstance>(store, stmt, &parameters, nulls, page)
        }
        HistoryTable::ActivityInstances => {
            list::<HistoricActivityInstance>(store, stmt, &parameters, nulls, page)
        }
        HistoryTable::TaskInstances => {
            list::<HistoricTaskInstance>(store, stmt, &parameters, nulls, page)
        }
        HistoryTable::Details => list::<HistoricDetail>(store, stmt, &parameters, nulls, page),
        HistoryTable::VariableInstances => {
            list::<HistoricVariableInstance>(store, stmt, &parameters, nulls, page)
        }
        HistoryTable::TaskLogEntries => {
            list::<TaskLogEntry>(store, stmt, &parameters, nulls, page)
        }
    }
}

/// Handle NativeCount command.
///
/// Either projection is accepted; `SELECT *` is counted by its rows.
pub fn native_count(
    store: &HistoryStore,
    target: HistoryTable,
    sql: String,
    parameters: BTreeMap<String, Value>,
) -> Result<Output> {
    let stmt = parse(&sql)?;
    let n = match target {
        HistoryTable::ProcessInstances => {
            count_rows::<HistoricProcessInstance>(store, stmt, &parameters)?
        }
        HistoryTable::ActivityInstances => {
            count_rows::<HistoricActivityInstance>(store, stmt, &parameters)?
        }
        HistoryTable::TaskInstances => {
            count_rows::<HistoricTaskInstance>(store, stmt, &parameters)?
        }
        HistoryTable::Details => count_rows::<HistoricDetail>(store, stmt, &parameters)?,
        HistoryTable::VariableInstances => {
            count_rows::<HistoricVariableInstance>(store, stmt, &parameters)?
        }
        HistoryTable::TaskLogEntries => count_rows::<TaskLogEntry>(store, stmt, &parameters)?,
    };
    Ok(Output::Count(n))
}
