//! HistoryStore: thread-safe holder of the history tables
//!
//! Reads share a `parking_lot::RwLock` read guard. Single-row writes that
//! validate before touching the state go through [`HistoryStore::write`] and
//! change it in place. Multi-step units of work go through
//! [`HistoryStore::transact`], which applies them to a working copy, so a
//! failed unit of work leaves the published state untouched.

use parking_lot::RwLock;

use chronicle_core::{
    HistoricActivityInstance, HistoricDetail, HistoricEntityLink, HistoricIdentityLink,
    HistoricProcessInstance, HistoricTaskInstance, HistoricVariableInstance, NewTaskLogEntry,
};

use crate::error::StoreResult;
use crate::state::HistoryState;

/// In-memory history store.
///
/// `HistoryStore` is `Send + Sync`; share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct HistoryStore {
    state: RwLock<HistoryState>,
}

impl HistoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against a consistent view of the state.
    pub fn read<R>(&self, f: impl FnOnce(&HistoryState) -> R) -> R {
        let guard = self.state.read();
        f(&guard)
    }

    /// Run `f` in place under the write lock.
    ///
    /// `f` must not change the state before it can fail; nothing is rolled
    /// back on `Err`.
    pub fn write<R>(
        &self,
        f: impl FnOnce(&mut HistoryState) -> StoreResult<R>,
    ) -> StoreResult<R> {
        let mut guard = self.state.write();
        f(&mut guard)
    }

    /// Run `f` as one unit of work.
    ///
    /// `f` mutates a working copy. The copy replaces the published state only
    /// when `f` returns `Ok`; on `Err` every change made by `f` is discarded.
    pub fn transact<R>(
        &self,
        f: impl FnOnce(&mut HistoryState) -> StoreResult<R>,
    ) -> StoreResult<R> {
        let mut guard = self.state.write();
        let mut working = guard.clone();
        match f(&mut working) {
            Ok(result) => {
                *guard = working;
                Ok(result)
            }
            Err(e) => {
                tracing::debug!(
                    target: "chronicle::storage",
                    error = %e,
                    "Unit of work discarded"
                );
                Err(e)
            }
        }
    }

    // =========================================================================
    // Engine-side recording
    // =========================================================================

    /// Record (or update) a process instance.
    pub fn record_process_instance(&self, pi: HistoricProcessInstance) -> StoreResult<()> {
        self.write(|s| s.put_process_instance(pi))
    }

    /// Record (or update) an activity instance.
    pub fn record_activity_instance(
        &self,
        activity: HistoricActivityInstance,
    ) -> StoreResult<()> {
        self.write(|s| s.put_activity(activity))
    }

    /// Record (or update) a task instance.
    pub fn record_task_instance(&self, task: HistoricTaskInstance) -> StoreResult<()> {
        self.write(|s| s.put_task(task))
    }

    /// Record a detail.
    pub fn record_detail(&self, detail: HistoricDetail) -> StoreResult<()> {
        self.write(|s| s.put_detail(detail))
    }

    /// Record (or update) a variable instance.
    pub fn record_variable_instance(
        &self,
        variable: HistoricVariableInstance,
    ) -> StoreResult<()> {
        self.write(|s| s.put_variable(variable))
    }

    /// Record an identity link.
    pub fn record_identity_link(&self, link: HistoricIdentityLink) -> StoreResult<()> {
        self.write(|s| s.put_identity_link(link))
    }

    /// Record an entity link.
    pub fn record_entity_link(&self, link: HistoricEntityLink) -> StoreResult<()> {
        self.write(|s| s.put_entity_link(link))
    }

    /// Record a task log entry, returning its log number.
    pub fn record_task_log_entry(&self, entry: NewTaskLogEntry) -> StoreResult<u64> {
        self.write(|s| s.append_task_log_entry(entry))
    }
}
