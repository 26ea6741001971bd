//! Command handlers organized by category.
//!
//! | Module | Commands |
//! |--------|----------|
//! | `delete` | DeleteHistoricTaskInstance, DeleteHistoricProcessInstance, DeleteTaskLogEntry |
//! | `links` | GetHistoricIdentityLinks, GetEntityLink{Children,Parent}For{ProcessInstance,Task} |
//! | `query` | Query, Count |
//! | `native` | NativeQuery, NativeCount |
//! | `history_log` | GetProcessInstanceHistoryLog |
//! | `task_log` | AddTaskLogEntry |

pub mod delete;
pub mod history_log;
pub mod links;
pub mod native;
pub mod query;
pub mod task_log;

use std::cmp::Ordering;

use serde_json::Value;

use chronicle_core::{
    compare_values, HistoricActivityInstance, HistoricDetail, HistoricProcessInstance,
    HistoricTaskInstance, HistoricVariableInstance, NullOrdering, Row, TaskLogEntry,
};
use chronicle_storage::HistoryState;

use crate::criteria::{Criteria, OrderProperty};
use crate::output::ListItem;
use crate::types::{Direction, Page};
use crate::{Error, Result};

// =============================================================================
// Table access
// =============================================================================

/// A list entity with a table in the store.
pub(crate) trait Stored: ListItem {
    fn scan(state: &HistoryState) -> Box<dyn Iterator<Item = &Self> + '_>;
}

macro_rules! stored {
    ($ty:ty, $scan:ident) => {
        impl Stored for $ty {
            fn scan(state: &HistoryState) -> Box<dyn Iterator<Item = &Self> + '_> {
                Box::new(state.$scan())
            }
        }
    };
}

stored!(HistoricProcessInstance, process_instances);
stored!(HistoricActivityInstance, activities);
stored!(HistoricTaskInstance, tasks);
stored!(HistoricDetail, details);
stored!(HistoricVariableInstance, variables);
stored!(TaskLogEntry, task_log_entries);

// =============================================================================
// Shared helpers
// =============================================================================

/// Reject an empty identifier.
pub(crate) fn require_id(what: &str, id: &str) -> Result<()> {
    if id.trim().is_empty() {
        tracing::warn!(target: "chronicle::executor", what, "Rejected empty identifier");
        return Err(Error::invalid_argument(format!("{} is required", what)));
    }
    Ok(())
}

/// Compare two rows on `order`, then on `ID_` ascending.
pub(crate) fn compare_rows<R: Row>(
    a: &R,
    b: &R,
    order: &[(&'static str, Direction)],
    nulls: NullOrdering,
) -> Ordering {
    let column = |r: &R, c: &str| r.column(c).unwrap_or(Value::Null);
    order
        .iter()
        .map(|&(c, direction)| {
            let ord = compare_values(&column(a, c), &column(b, c), nulls);
            match direction {
                Direction::Asc => ord,
                Direction::Desc => ord.reverse(),
            }
        })
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or_else(|| compare_values(&column(a, "ID_"), &column(b, "ID_"), nulls))
}

/// Rows matching `criteria`, in the order it asks for.
pub(crate) fn select<'a, C, I>(rows: I, criteria: &C) -> Vec<C::Item>
where
    C: Criteria,
    C::Item: 'a,
    I: IntoIterator<Item = &'a C::Item>,
{
    let mut selected: Vec<C::Item> = rows
        .into_iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect();
    let order: Vec<(&'static str, Direction)> = criteria
        .ordering()
        .iter()
        .map(|o| (o.property.column(), o.direction))
        .collect();
    let nulls = criteria.null_ordering();
    selected.sort_by(|a, b| compare_rows(a, b, &order, nulls));
    selected
}

/// Cut `page` out of `rows`.
pub(crate) fn paged<T>(rows: Vec<T>, page: Option<Page>) -> Vec<T> {
    match page {
        None => rows,
        Some(p) => rows
            .into_iter()
            .skip(p.first_result)
            .take(p.max_results)
            .collect(),
    }
}
