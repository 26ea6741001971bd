//! Shared fixtures for the history integration suite.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use chronicle::{
    scope_types, DetailKind, EntityLinkType, HierarchyType, HistoricActivityInstance,
    HistoricDetail, HistoricEntityLink, HistoricIdentityLink, HistoricProcessInstance,
    HistoricTaskInstance, HistoricVariableInstance, HistoryConfig, HistoryService, HistoryStore,
};

// ============================================================================
// TestHistory - service plus the store the engine records through
// ============================================================================

/// A history service over a fresh in-memory store.
pub struct TestHistory {
    pub history: HistoryService,
    pub store: Arc<HistoryStore>,
}

impl TestHistory {
    /// Service with the default configuration (h2, task logging on).
    pub fn new() -> Self {
        Self::with_config(HistoryConfig::default())
    }

    /// Service with `config`.
    pub fn with_config(config: HistoryConfig) -> Self {
        let (history, store) =
            HistoryService::in_memory(config).expect("Failed to create history service");
        TestHistory { history, store }
    }

    /// Service whose dialect is `database_type`.
    pub fn for_database(database_type: &str) -> Self {
        Self::with_config(HistoryConfig {
            database_type: database_type.to_string(),
            ..HistoryConfig::default()
        })
    }

    pub fn process(&self, pi: HistoricProcessInstance) -> &Self {
        self.store.record_process_instance(pi).expect("record process instance");
        self
    }

    pub fn task(&self, task: HistoricTaskInstance) -> &Self {
        self.store.record_task_instance(task).expect("record task");
        self
    }

    pub fn activity(&self, activity: HistoricActivityInstance) -> &Self {
        self.store.record_activity_instance(activity).expect("record activity");
        self
    }

    pub fn detail(&self, detail: HistoricDetail) -> &Self {
        self.store.record_detail(detail).expect("record detail");
        self
    }

    pub fn variable(&self, variable: HistoricVariableInstance) -> &Self {
        self.store.record_variable_instance(variable).expect("record variable");
        self
    }

    pub fn identity_link(&self, link: HistoricIdentityLink) -> &Self {
        self.store.record_identity_link(link).expect("record identity link");
        self
    }

    pub fn entity_link(&self, link: HistoricEntityLink) -> &Self {
        self.store.record_entity_link(link).expect("record entity link");
        self
    }

    /// The invoice scenario: finished `p1` with tasks `t1` (kermit, done) and
    /// `t2` (open, unassigned), one activity per task, a process variable, a
    /// task variable, a variable update and a form submission.
    pub fn invoice(&self) -> &Self {
        let mut t1 = task("t1", "p1", 2_000);
        t1.name = Some("Approve invoice".into());
        t1.assignee = Some("kermit".into());
        t1.priority = 80;
        t1.due_date = Some(at(20_000));
        t1.end_time = Some(at(4_000));
        let mut t2 = task("t2", "p1", 5_000);
        t2.name = Some("Pay invoice".into());
        t2.priority = 50;

        self.process(finished_process("p1", 1_000, 9_000))
            .task(t1)
            .task(t2)
            .activity(activity("a1", "p1", "approve", 2_000, Some("t1")))
            .activity(activity("a2", "p1", "pay", 5_000, Some("t2")))
            .variable(variable("v1", "p1", None, "amount", Value::from(1200), 1_500))
            .variable(variable("v2", "p1", Some("t1"), "comment", Value::from("ok"), 3_000))
            .detail(variable_update("d1", "p1", "amount", Value::from(1200), 1_500))
            .detail(form_property("d2", "p1", Some("t1"), "approved", "true", 3_500))
    }
}

// ============================================================================
// Fixture builders
// ============================================================================

pub fn at(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis).unwrap()
}

pub fn running_process(id: &str, start: i64) -> HistoricProcessInstance {
    HistoricProcessInstance {
        id: id.into(),
        process_definition_id: "invoice:1".into(),
        process_definition_key: Some("invoice".into()),
        start_time: at(start),
        ..Default::default()
    }
}

pub fn finished_process(id: &str, start: i64, end: i64) -> HistoricProcessInstance {
    let mut pi = running_process(id, start);
    pi.finish(at(end));
    pi
}

pub fn task(id: &str, process_instance_id: &str, created: i64) -> HistoricTaskInstance {
    HistoricTaskInstance {
        id: id.into(),
        process_instance_id: Some(process_instance_id.into()),
        process_definition_id: Some("invoice:1".into()),
        execution_id: Some(format!("exec-{id}")),
        create_time: at(created),
        ..Default::default()
    }
}

pub fn activity(
    id: &str,
    pi: &str,
    activity_id: &str,
    start: i64,
    task_id: Option<&str>,
) -> HistoricActivityInstance {
    HistoricActivityInstance {
        id: id.into(),
        activity_id: activity_id.into(),
        activity_type: "userTask".into(),
        process_definition_id: "invoice:1".into(),
        process_instance_id: pi.into(),
        execution_id: format!("exec-{id}"),
        task_id: task_id.map(Into::into),
        start_time: at(start),
        ..Default::default()
    }
}

pub fn variable(
    id: &str,
    pi: &str,
    task_id: Option<&str>,
    name: &str,
    value: Value,
    created: i64,
) -> HistoricVariableInstance {
    HistoricVariableInstance {
        id: id.into(),
        process_instance_id: Some(pi.into()),
        task_id: task_id.map(Into::into),
        name: name.into(),
        value,
        create_time: at(created),
        last_updated_time: at(created),
        ..Default::default()
    }
}

pub fn variable_update(id: &str, pi: &str, name: &str, value: Value, time: i64) -> HistoricDetail {
    HistoricDetail {
        id: id.into(),
        process_instance_id: Some(pi.into()),
        time: at(time),
        kind: DetailKind::VariableUpdate {
            variable_name: name.into(),
            value,
            revision: 1,
        },
        ..Default::default()
    }
}

pub fn form_property(
    id: &str,
    pi: &str,
    task_id: Option<&str>,
    property: &str,
    value: &str,
    time: i64,
) -> HistoricDetail {
    HistoricDetail {
        id: id.into(),
        process_instance_id: Some(pi.into()),
        task_id: task_id.map(Into::into),
        time: at(time),
        kind: DetailKind::FormProperty {
            property_id: property.into(),
            property_value: Some(value.into()),
        },
        ..Default::default()
    }
}

pub fn user_link(
    task_id: Option<&str>,
    pi: Option<&str>,
    link_type: &str,
    user: &str,
) -> HistoricIdentityLink {
    HistoricIdentityLink {
        id: Some(format!("il-{}-{link_type}-{user}", task_id.or(pi).unwrap_or("none"))),
        link_type: link_type.into(),
        user_id: Some(user.into()),
        task_id: task_id.map(Into::into),
        process_instance_id: pi.map(Into::into),
        ..Default::default()
    }
}

pub fn group_link(task_id: &str, link_type: &str, group: &str) -> HistoricIdentityLink {
    HistoricIdentityLink {
        id: Some(format!("il-{task_id}-{link_type}-{group}")),
        link_type: link_type.into(),
        group_id: Some(group.into()),
        task_id: Some(task_id.into()),
        ..Default::default()
    }
}

/// `Child` link from `(scope_id, scope_type)` to `(reference_id, reference_type)`.
pub fn child_link(id: &str, scope: (&str, &str), reference: (&str, &str)) -> HistoricEntityLink {
    HistoricEntityLink {
        id: id.into(),
        link_type: EntityLinkType::Child,
        scope_id: scope.0.into(),
        scope_type: scope.1.into(),
        reference_scope_id: reference.0.into(),
        reference_scope_type: reference.1.into(),
        root_scope_id: Some(scope.0.into()),
        root_scope_type: Some(scope_types::BPMN.into()),
        hierarchy_type: Some(HierarchyType::Root),
        create_time: at(1_000),
        ..Default::default()
    }
}

pub fn ids<T>(rows: &[T], id: impl Fn(&T) -> &str) -> Vec<String> {
    rows.iter().map(|r| id(r).to_string()).collect()
}
