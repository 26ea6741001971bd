//! Query builders.
//!
//! A builder accumulates criteria and runs nothing until a terminal method
//! (`list`, `list_page`, `count`, `single_result`) is called. Each terminal
//! submits exactly one command. Builders created by separate calls share no
//! state, and terminals borrow the builder so it can be run again.
//!
//! # Example
//!
//! ```ignore
//! use chronicle_executor::{Direction, TaskInstanceProperty};
//!
//! let overdue = history
//!     .create_historic_task_instance_query()
//!     .task_assignee("kermit")
//!     .unfinished()
//!     .due_before(now)
//!     .order_by(TaskInstanceProperty::DueDate, Direction::Asc)
//!     .list_page(0, 10)?;
//! ```

mod activity;
mod detail;
mod history_log;
mod native;
mod process;
mod task;
mod task_log;
mod variable;

pub use activity::HistoricActivityInstanceQuery;
pub use detail::HistoricDetailQuery;
pub use history_log::ProcessInstanceHistoryLogQuery;
pub use native::{
    NativeHistoricActivityInstanceQuery, NativeHistoricDetailQuery,
    NativeHistoricProcessInstanceQuery, NativeHistoricTaskInstanceQuery,
    NativeHistoricVariableInstanceQuery, NativeQuery, NativeTaskLogEntryQuery,
};
pub use process::HistoricProcessInstanceQuery;
pub use task::HistoricTaskInstanceQuery;
pub use task_log::TaskLogEntryQuery;
pub use variable::HistoricVariableInstanceQuery;

use std::fmt;
use std::sync::Arc;

use crate::criteria::Criteria;
use crate::output::ListItem;
use crate::types::{Direction, OrderBy, Page};
use crate::{Command, CommandExecutor, Error, Output, Result};

/// Fluent setters for `Option<String>` criteria fields.
macro_rules! string_filters {
    ($($(#[$doc:meta])* $name:ident => $field:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(mut self, value: impl Into<String>) -> Self {
                self.criteria.$field = Some(value.into());
                self
            }
        )*
    };
}
pub(crate) use string_filters;

/// A structured query over one historic entity.
///
/// The entity-specific setters live on the aliases
/// ([`HistoricTaskInstanceQuery`], ...).
#[derive(Clone)]
pub struct Query<C: Criteria> {
    executor: Arc<dyn CommandExecutor>,
    pub(crate) criteria: C,
}

impl<C: Criteria> fmt::Debug for Query<C>
where
    C: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query").field("criteria", &self.criteria).finish()
    }
}

impl<C: Criteria> Query<C> {
    pub(crate) fn new(executor: Arc<dyn CommandExecutor>, criteria: C) -> Self {
        Self { executor, criteria }
    }

    /// The criteria accumulated so far.
    pub fn criteria(&self) -> &C {
        &self.criteria
    }

    /// Add a sort key. Keys apply in the order they were added.
    pub fn order_by(mut self, property: C::Property, direction: Direction) -> Self {
        self.criteria
            .ordering_mut()
            .push(OrderBy { property, direction });
        self
    }

    /// Every matching row.
    pub fn list(&self) -> Result<Vec<C::Item>> {
        self.fetch(None)
    }

    /// At most `max_results` matching rows, skipping the first `first_result`.
    pub fn list_page(&self, first_result: usize, max_results: usize) -> Result<Vec<C::Item>> {
        self.fetch(Some(Page::new(first_result, max_results)))
    }

    /// Number of matching rows.
    pub fn count(&self) -> Result<u64> {
        match self.executor.execute(Command::Count {
            query: self.criteria.clone().into_query(),
        })? {
            Output::Count(n) => Ok(n),
            _ => Err(Error::unexpected_output("Count")),
        }
    }

    /// The only matching row, if any.
    ///
    /// Fails with `NonUniqueResult` when more than one row matches.
    pub fn single_result(&self) -> Result<Option<C::Item>> {
        single(self.list()?)
    }

    fn fetch(&self, page: Option<Page>) -> Result<Vec<C::Item>> {
        let output = self.executor.execute(Command::Query {
            query: self.criteria.clone().into_query(),
            page,
        })?;
        <C::Item as ListItem>::from_output(output).ok_or_else(|| Error::unexpected_output("Query"))
    }
}

pub(crate) fn single<T>(mut rows: Vec<T>) -> Result<Option<T>> {
    match rows.len() {
        0 => Ok(None),
        1 => Ok(rows.pop()),
        count => Err(Error::NonUniqueResult { count }),
    }
}
