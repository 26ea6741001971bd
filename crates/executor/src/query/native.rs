use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;

use chronicle_core::{
    DatabaseType, HistoricActivityInstance, HistoricDetail, HistoricProcessInstance,
    HistoricTaskInstance, HistoricVariableInstance, TaskLogEntry,
};

use super::single;
use crate::output::ListItem;
use crate::types::Page;
use crate::{Command, CommandExecutor, Error, Output, Result};

/// A native query against the table of `R`.
///
/// The statement text is passed through to the executor; `#{name}`
/// placeholders are bound from [`parameter`](Self::parameter). NULL values
/// sort the way the service's database type places them, as in the
/// structured queries.
///
/// ```ignore
/// let tasks = history
///     .create_native_historic_task_instance_query()
///     .sql("SELECT * FROM ACT_HI_TASKINST T WHERE T.ASSIGNEE_ = #{user} ORDER BY T.PRIORITY_")
///     .parameter("user", "kermit")
///     .list()?;
/// ```
pub struct NativeQuery<R> {
    executor: Arc<dyn CommandExecutor>,
    database_type: DatabaseType,
    sql: Option<String>,
    parameters: BTreeMap<String, Value>,
    _row: PhantomData<fn() -> R>,
}

/// Native query over `ACT_HI_PROCINST`.
pub type NativeHistoricProcessInstanceQuery = NativeQuery<HistoricProcessInstance>;
/// Native query over `ACT_HI_ACTINST`.
pub type NativeHistoricActivityInstanceQuery = NativeQuery<HistoricActivityInstance>;
/// Native query over `ACT_HI_TASKINST`.
pub type NativeHistoricTaskInstanceQuery = NativeQuery<HistoricTaskInstance>;
/// Native query over `ACT_HI_DETAIL`.
pub type NativeHistoricDetailQuery = NativeQuery<HistoricDetail>;
/// Native query over `ACT_HI_VARINST`.
pub type NativeHistoricVariableInstanceQuery = NativeQuery<HistoricVariableInstance>;
/// Native query over `ACT_HI_TSK_LOG`.
pub type NativeTaskLogEntryQuery = NativeQuery<TaskLogEntry>;

impl<R> Clone for NativeQuery<R> {
    fn clone(&self) -> Self {
        Self {
            executor: Arc::clone(&self.executor),
            database_type: self.database_type,
            sql: self.sql.clone(),
            parameters: self.parameters.clone(),
            _row: PhantomData,
        }
    }
}

impl<R: ListItem> fmt::Debug for NativeQuery<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeQuery")
            .field("table", &R::TABLE)
            .field("database_type", &self.database_type)
            .field("sql", &self.sql)
            .field("parameters", &self.parameters)
            .finish()
    }
}

impl<R: ListItem> NativeQuery<R> {
    pub(crate) fn new(executor: Arc<dyn CommandExecutor>, database_type: DatabaseType) -> Self {
        Self {
            executor,
            database_type,
            sql: None,
            parameters: BTreeMap::new(),
            _row: PhantomData,
        }
    }

    /// Statement text. Replaces any earlier text.
    pub fn sql(mut self, sql: impl Into<String>) -> Self {
        self.sql = Some(sql.into());
        self
    }

    /// Bind `#{name}` to `value`. Rebinding a name replaces its value.
    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// The dialect deciding where NULL values sort.
    pub fn database_type(&self) -> DatabaseType {
        self.database_type
    }

    /// The statement text, if set.
    pub fn sql_text(&self) -> Option<&str> {
        self.sql.as_deref()
    }

    /// The bound parameters.
    pub fn parameters(&self) -> &BTreeMap<String, Value> {
        &self.parameters
    }

    /// Every row the statement selects.
    pub fn list(&self) -> Result<Vec<R>> {
        self.fetch(None)
    }

    /// At most `max_results` rows, skipping the first `first_result`.
    pub fn list_page(&self, first_result: usize, max_results: usize) -> Result<Vec<R>> {
        self.fetch(Some(Page::new(first_result, max_results)))
    }

    /// Number of rows the statement selects.
    pub fn count(&self) -> Result<u64> {
        match self.executor.execute(Command::NativeCount {
            target: R::TABLE,
            sql: self.statement()?,
            parameters: self.parameters.clone(),
        })? {
            Output::Count(n) => Ok(n),
            _ => Err(Error::unexpected_output("NativeCount")),
        }
    }

    /// The only selected row, if any.
    ///
    /// Fails with `NonUniqueResult` when more than one row is selected.
    pub fn single_result(&self) -> Result<Option<R>> {
        single(self.list()?)
    }

    fn statement(&self) -> Result<String> {
        match self.sql.as_deref() {
            Some(sql) if !sql.trim().is_empty() => Ok(sql.to_string()),
            _ => Err(Error::invalid_argument("native query has no SQL")),
        }
    }

    fn fetch(&self, page: Option<Page>) -> Result<Vec<R>> {
        let output = self.executor.execute(Command::NativeQuery {
            target: R::TABLE,
            sql: self.statement()?,
            parameters: self.parameters.clone(),
            page,
            database_type: Some(self.database_type),
        })?;
        R::from_output(output).ok_or_else(|| Error::unexpected_output("NativeQuery"))
    }
}
