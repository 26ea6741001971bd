//! In-memory history tables.
//!
//! `HistoryState` is a plain value: the store clones it to run a unit of work
//! and swaps the clone in only when the work succeeds.

use std::collections::BTreeMap;

use chronicle_core::{
    scope_types, HistoricActivityInstance, HistoricDetail, HistoricEntityLink,
    HistoricIdentityLink, HistoricProcessInstance, HistoricTaskInstance, HistoricVariableInstance,
    NewTaskLogEntry, TaskLogEntry,
};
use chrono::Utc;
use rustc_hash::FxHashMap;

use crate::error::{StoreError, StoreResult};

/// Counts of records removed by a cascading delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemovalSummary {
    /// Process instances removed
    pub process_instances: usize,
    /// Activity instances removed
    pub activities: usize,
    /// Task instances removed
    pub tasks: usize,
    /// Details removed
    pub details: usize,
    /// Variable instances removed
    pub variables: usize,
    /// Identity links removed
    pub identity_links: usize,
    /// Entity links removed
    pub entity_links: usize,
    /// Task log entries removed
    pub task_log_entries: usize,
}

impl RemovalSummary {
    /// Total number of records removed.
    pub fn total(&self) -> usize {
        self.process_instances
            + self.activities
            + self.tasks
            + self.details
            + self.variables
            + self.identity_links
            + self.entity_links
            + self.task_log_entries
    }

    fn absorb(&mut self, other: RemovalSummary) {
        self.process_instances += other.process_instances;
        self.activities += other.activities;
        self.tasks += other.tasks;
        self.details += other.details;
        self.variables += other.variables;
        self.identity_links += other.identity_links;
        self.entity_links += other.entity_links;
        self.task_log_entries += other.task_log_entries;
    }
}

/// All recorded history.
#[derive(Debug, Clone)]
pub struct HistoryState {
    process_instances: FxHashMap<String, HistoricProcessInstance>,
    activities: FxHashMap<String, HistoricActivityInstance>,
    tasks: FxHashMap<String, HistoricTaskInstance>,
    details: FxHashMap<String, HistoricDetail>,
    variables: FxHashMap<String, HistoricVariableInstance>,
    identity_links: Vec<HistoricIdentityLink>,
    entity_links: FxHashMap<String, HistoricEntityLink>,
    task_log: BTreeMap<u64, TaskLogEntry>,
    /// Next log number to hand out; never reused, even after deletion.
    next_log_number: u64,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self {
            process_instances: FxHashMap::default(),
            activities: FxHashMap::default(),
            tasks: FxHashMap::default(),
            details: FxHashMap::default(),
            variables: FxHashMap::default(),
            identity_links: Vec::new(),
            entity_links: FxHashMap::default(),
            task_log: BTreeMap::new(),
            next_log_number: 1,
        }
    }
}

fn require_id(kind: &str, id: &str) -> StoreResult<()> {
    if id.trim().is_empty() {
        return Err(StoreError::InvalidRecord(format!("{kind} id must not be empty")));
    }
    Ok(())
}

impl HistoryState {
    // =========================================================================
    // Reads
    // =========================================================================

    /// Process instance by id.
    pub fn process_instance(&self, id: &str) -> Option<&HistoricProcessInstance> {
        self.process_instances.get(id)
    }

    /// All process instances, in no particular order.
    pub fn process_instances(&self) -> impl Iterator<Item = &HistoricProcessInstance> {
        self.process_instances.values()
    }

    /// All activity instances, in no particular order.
    pub fn activities(&self) -> impl Iterator<Item = &HistoricActivityInstance> {
        self.activities.values()
    }

    /// Task instance by id.
    pub fn task(&self, id: &str) -> Option<&HistoricTaskInstance> {
        self.tasks.get(id)
    }

    /// All task instances, in no particular order.
    pub fn tasks(&self) -> impl Iterator<Item = &HistoricTaskInstance> {
        self.tasks.values()
    }

    /// All details, in no particular order.
    pub fn details(&self) -> impl Iterator<Item = &HistoricDetail> {
        self.details.values()
    }

    /// All variable instances, in no particular order.
    pub fn variables(&self) -> impl Iterator<Item = &HistoricVariableInstance> {
        self.variables.values()
    }

    /// All identity links, in recording order.
    pub fn identity_links(&self) -> impl Iterator<Item = &HistoricIdentityLink> {
        self.identity_links.iter()
    }

    /// All entity links, in no particular order.
    pub fn entity_links(&self) -> impl Iterator<Item = &HistoricEntityLink> {
        self.entity_links.values()
    }

    /// Task log entry by number.
    pub fn task_log_entry(&self, log_number: u64) -> Option<&TaskLogEntry> {
        self.task_log.get(&log_number)
    }

    /// All task log entries, by ascending log number.
    pub fn task_log_entries(&self) -> impl Iterator<Item = &TaskLogEntry> {
        self.task_log.values()
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Insert or replace a process instance.
    pub fn put_process_instance(&mut self, pi: HistoricProcessInstance) -> StoreResult<()> {
        require_id("process instance", &pi.id)?;
        self.process_instances.insert(pi.id.clone(), pi);
        Ok(())
    }

    /// Insert or replace an activity instance.
    pub fn put_activity(&mut self, activity: HistoricActivityInstance) -> StoreResult<()> {
        require_id("activity instance", &activity.id)?;
        self.activities.insert(activity.id.clone(), activity);
        Ok(())
    }

    /// Insert or replace a task instance.
    pub fn put_task(&mut self, task: HistoricTaskInstance) -> StoreResult<()> {
        require_id("task instance", &task.id)?;
        self.tasks.insert(task.id.clone(), task);
        Ok(())
    }

    /// Insert or replace a detail.
    pub fn put_detail(&mut self, detail: HistoricDetail) -> StoreResult<()> {
        require_id("detail", &detail.id)?;
        self.details.insert(detail.id.clone(), detail);
        Ok(())
    }

    /// Insert or replace a variable instance.
    pub fn put_variable(&mut self, variable: HistoricVariableInstance) -> StoreResult<()> {
        require_id("variable instance", &variable.id)?;
        self.variables.insert(variable.id.clone(), variable);
        Ok(())
    }

    /// Append an identity link. Exactly one of task and process instance must be set.
    pub fn put_identity_link(&mut self, link: HistoricIdentityLink) -> StoreResult<()> {
        if link.task_id.is_some() == link.process_instance_id.is_some() {
            return Err(StoreError::InvalidRecord(
                "identity link must reference exactly one of task or process instance".into(),
            ));
        }
        if link.user_id.is_none() && link.group_id.is_none() {
            return Err(StoreError::InvalidRecord(
                "identity link must reference a user or a group".into(),
            ));
        }
        self.identity_links.push(link);
        Ok(())
    }

    /// Insert or replace an entity link.
    pub fn put_entity_link(&mut self, link: HistoricEntityLink) -> StoreResult<()> {
        require_id("entity link", &link.id)?;
        self.entity_links.insert(link.id.clone(), link);
        Ok(())
    }

    /// Store a task log entry under the next log number and return that number.
    ///
    /// Task id and log type are required. A missing timestamp becomes "now".
    pub fn append_task_log_entry(&mut self, entry: NewTaskLogEntry) -> StoreResult<u64> {
        let task_id = entry
            .task_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| StoreError::InvalidRecord("task log entry requires a task id".into()))?;
        let log_type = entry
            .log_type
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| StoreError::InvalidRecord("task log entry requires a type".into()))?;

        let log_number = self.next_log_number;
        self.next_log_number += 1;
        self.task_log.insert(
            log_number,
            TaskLogEntry {
                log_number,
                log_type,
                task_id,
                time_stamp: entry.time_stamp.unwrap_or_else(Utc::now),
                user_id: entry.user_id,
                data: entry.data,
                execution_id: entry.execution_id,
                process_instance_id: entry.process_instance_id,
                process_definition_id: entry.process_definition_id,
                scope_id: entry.scope_id,
                sub_scope_id: entry.sub_scope_id,
                scope_type: entry.scope_type,
                scope_definition_id: entry.scope_definition_id,
                tenant_id: entry.tenant_id,
            },
        );
        Ok(log_number)
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Remove one task log entry. Returns whether it existed.
    pub fn remove_task_log_entry(&mut self, log_number: u64) -> bool {
        self.task_log.remove(&log_number).is_some()
    }

    /// Remove a task together with its identity links, details, task-scoped
    /// variables, owned entity links and log entries.
    ///
    /// Removing a task that does not exist removes nothing.
    pub fn remove_task(&mut self, task_id: &str) -> RemovalSummary {
        let mut summary = RemovalSummary::default();
        if self.tasks.remove(task_id).is_none() {
            return summary;
        }
        summary.tasks = 1;

        let before = self.identity_links.len();
        self.identity_links
            .retain(|l| l.task_id.as_deref() != Some(task_id));
        summary.identity_links = before - self.identity_links.len();

        summary.details =
            retain_count(&mut self.details, |d| d.task_id.as_deref() != Some(task_id));
        summary.variables =
            retain_count(&mut self.variables, |v| v.task_id.as_deref() != Some(task_id));
        summary.entity_links = retain_count(&mut self.entity_links, |l| {
            !l.is_owned_by(task_id, scope_types::TASK)
        });

        let before = self.task_log.len();
        self.task_log.retain(|_, e| e.task_id != task_id);
        summary.task_log_entries = before - self.task_log.len();

        summary
    }

    /// Remove a process instance and everything recorded under it.
    ///
    /// Fails with `NotFound` when the instance does not exist; nothing is
    /// removed in that case.
    pub fn remove_process_instance(
        &mut self,
        process_instance_id: &str,
    ) -> StoreResult<RemovalSummary> {
        if self.process_instances.remove(process_instance_id).is_none() {
            return Err(StoreError::NotFound {
                entity: "historic process instance",
                id: process_instance_id.to_string(),
            });
        }
        let mut summary = RemovalSummary {
            process_instances: 1,
            ..Default::default()
        };
        let owned = Some(process_instance_id);

        let task_ids: Vec<String> = self
            .tasks
            .values()
            .filter(|t| t.process_instance_id.as_deref() == owned)
            .map(|t| t.id.clone())
            .collect();
        for task_id in task_ids {
            summary.absorb(self.remove_task(&task_id));
        }

        summary.activities = retain_count(&mut self.activities, |a| {
            a.process_instance_id != process_instance_id
        });
        summary.details +=
            retain_count(&mut self.details, |d| d.process_instance_id.as_deref() != owned);
        summary.variables +=
            retain_count(&mut self.variables, |v| v.process_instance_id.as_deref() != owned);

        let before = self.identity_links.len();
        self.identity_links
            .retain(|l| l.process_instance_id.as_deref() != owned);
        summary.identity_links += before - self.identity_links.len();

        summary.entity_links += retain_count(&mut self.entity_links, |l| {
            !l.is_owned_by(process_instance_id, scope_types::BPMN)
        });

        let before = self.task_log.len();
        self.task_log
            .retain(|_, e| e.process_instance_id.as_deref() != owned);
        summary.task_log_entries += before - self.task_log.len();

        Ok(summary)
    }
}

fn retain_count<V>(map: &mut FxHashMap<String, V>, keep: impl Fn(&V) -> bool) -> usize {
    let before = map.len();
    map.retain(|_, v| keep(v));
    before - map.len()
}
