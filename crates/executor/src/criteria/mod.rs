//! Structured query criteria.
//!
//! Each queryable entity has a criteria struct: the filter and ordering state
//! a query builder accumulates and a [`Command::Query`](crate::Command::Query)
//! carries to the executor. Criteria are plain data; evaluating them is the
//! executor's job.

mod activity;
mod detail;
mod process;
mod task;
mod task_log;
mod variable;

pub use activity::{ActivityInstanceCriteria, ActivityInstanceProperty};
pub use detail::{DetailCriteria, DetailProperty, DetailType};
pub use process::{ProcessInstanceCriteria, ProcessInstanceProperty};
pub use task::{TaskInstanceCriteria, TaskInstanceProperty};
pub use task_log::{TaskLogEntryCriteria, TaskLogEntryProperty};
pub use variable::{VariableInstanceCriteria, VariableInstanceProperty};

use serde::{Deserialize, Serialize};

use chronicle_core::NullOrdering;

use crate::output::ListItem;
use crate::types::OrderBy;

/// A structured query over one historic entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "entity", content = "criteria", rename_all = "snake_case")]
pub enum EntityQuery {
    /// Historic process instances
    ProcessInstances(ProcessInstanceCriteria),
    /// Historic activity instances
    ActivityInstances(ActivityInstanceCriteria),
    /// Historic task instances
    TaskInstances(TaskInstanceCriteria),
    /// Historic details
    Details(DetailCriteria),
    /// Historic variable instances
    VariableInstances(VariableInstanceCriteria),
    /// Task log entries
    TaskLogEntries(TaskLogEntryCriteria),
}

/// A property a query can be ordered by.
pub trait OrderProperty: Copy {
    /// Column the property reads.
    fn column(&self) -> &'static str;
}

/// Filter and ordering state for one entity type.
pub trait Criteria: Clone {
    /// Entity the criteria select.
    type Item: ListItem;
    /// Properties the criteria can order by.
    type Property: OrderProperty;

    /// Whether `item` satisfies every filter.
    fn matches(&self, item: &Self::Item) -> bool;

    /// Requested ordering, most significant first.
    fn ordering(&self) -> &[OrderBy<Self::Property>];

    /// Mutable access to the requested ordering.
    fn ordering_mut(&mut self) -> &mut Vec<OrderBy<Self::Property>>;

    /// Where NULL sorts for this query.
    fn null_ordering(&self) -> NullOrdering {
        NullOrdering::High
    }

    /// Wrap into the command-level query.
    fn into_query(self) -> EntityQuery;
}

// =============================================================================
// Matching helpers
// =============================================================================

/// An unset filter matches everything; a set filter must equal the value.
pub(crate) fn eq(filter: &Option<String>, value: &str) -> bool {
    filter.as_deref().map_or(true, |f| f == value)
}

/// Like [`eq`], for nullable values: a set filter never matches NULL.
pub(crate) fn eq_opt(filter: &Option<String>, value: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(f) => value == Some(f.as_str()),
    }
}

/// An unset `Option<bool>` finished filter matches everything.
pub(crate) fn finished_matches(filter: Option<bool>, is_finished: bool) -> bool {
    filter.map_or(true, |f| f == is_finished)
}

/// SQL `LIKE` matching: `%` is any run of characters, `_` one character.
pub(crate) fn like(pattern: &str, value: &str) -> bool {
    let p: Vec<char> = pattern.chars().collect();
    let v: Vec<char> = value.chars().collect();
    // Iterative wildcard match with single-star backtracking.
    let (mut pi, mut vi) = (0usize, 0usize);
    let mut star: Option<(usize, usize)> = None;
    while vi < v.len() {
        if pi < p.len() && p[pi] == '%' {
            // `%` is always a wildcard, even against a literal `%` in the value
            star = Some((pi, vi));
            pi += 1;
        } else if pi < p.len() && (p[pi] == '_' || p[pi] == v[vi]) {
            pi += 1;
            vi += 1;
        } else if let Some((sp, sv)) = star {
            pi = sp + 1;
            vi = sv + 1;
            star = Some((sp, sv + 1));
        } else {
            return false;
        }
    }
    while pi < p.len() && p[pi] == '%' {
        pi += 1;
    }
    pi == p.len()
}
