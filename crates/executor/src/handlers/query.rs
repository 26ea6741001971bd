//! Structured query handlers.

use chronicle_storage::HistoryStore;

use super::{paged, select, Stored};
use crate::criteria::{Criteria, EntityQuery};
use crate::output::ListItem;
use crate::types::Page;
use crate::{Output, Result};

fn list<C>(store: &HistoryStore, criteria: C, page: Option<Page>) -> Output
where
    C: Criteria,
    C::Item: Stored,
{
    let rows = store.read(|s| select(<C::Item as Stored>::scan(s), &criteria));
    <C::Item as ListItem>::into_output(paged(rows, page))
}

fn count_matching<C>(store: &HistoryStore, criteria: C) -> u64
where
    C: Criteria,
    C::Item: Stored,
{
    store.read(|s| <C::Item as Stored>::scan(s).filter(|r| criteria.matches(r)).count() as u64)
}

/// Handle Query command.
pub fn query(store: &HistoryStore, query: EntityQuery, page: Option<Page>) -> Result<Output> {
    Ok(match query {
        EntityQuery::ProcessInstances(c) => list(store, c, page),
        EntityQuery::ActivityInstances(c) => list(store, c, page),
        EntityQuery::TaskInstances(c) => list(store, c, page),
        EntityQuery::Details(c) => list(store, c, page),
        EntityQuery::VariableInstances(c) => list(store, c, page),
        EntityQuery::TaskLogEntries(c) => list(store, c, page),
    })
}

/// Handle Count command.
pub fn count(store: &HistoryStore, query: EntityQuery) -> Result<Output> {
    let n = match query {
        EntityQuery::ProcessInstances(c) => count_matching(store, c),
        EntityQuery::ActivityInstances(c) => count_matching(store, c),
        EntityQuery::TaskInstances(c) => count_matching(store, c),
        EntityQuery::Details(c) => count_matching(store, c),
        EntityQuery::VariableInstances(c) => count_matching(store, c),
        EntityQuery::TaskLogEntries(c) => count_matching(store, c),
    };
    Ok(Output::Count(n))
}
