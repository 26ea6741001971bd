//! Deleting historic tasks, process instances and task log entries.

use chronicle::{identity_link_types, scope_types, Error};

use crate::common::*;

#[test]
fn deleting_a_task_leaves_its_siblings() {
    let t = TestHistory::new();
    t.invoice();
    t.identity_link(user_link(Some("t1"), None, identity_link_types::CANDIDATE, "fozzie"));
    t.identity_link(user_link(Some("t2"), None, identity_link_types::CANDIDATE, "fozzie"));

    t.history.delete_historic_task_instance("t1").unwrap();

    let remaining = t.history.create_historic_task_instance_query().list().unwrap();
    assert_eq!(ids(&remaining, |t| t.id.as_str()), vec!["t2"]);
    assert!(t.history.get_historic_identity_links_for_task("t1").is_err());
    assert_eq!(t.history.get_historic_identity_links_for_task("t2").unwrap().len(), 1);

    // The task-local variable and form detail went with it
    let vars = t.history.create_historic_variable_instance_query().list().unwrap();
    assert_eq!(ids(&vars, |v| v.id.as_str()), vec!["v1"]);
    assert_eq!(t.history.create_historic_detail_query().form_properties().count().unwrap(), 0);
}

#[test]
fn deleting_an_unknown_task_is_silent() {
    let t = TestHistory::new();
    t.history.delete_historic_task_instance("never-existed").unwrap();
}

#[test]
fn deleting_a_task_removes_the_links_it_owns() {
    let t = TestHistory::new();
    t.invoice();
    t.entity_link(child_link("el1", ("t2", scope_types::TASK), ("case-1", scope_types::CMMN)));

    t.history.delete_historic_task_instance("t2").unwrap();
    assert!(t.history.get_historic_entity_link_children_for_task("t2").unwrap().is_empty());
}

#[test]
fn deleting_a_finished_process_instance_removes_its_history() {
    let t = TestHistory::new();
    t.invoice();
    t.process(finished_process("p2", 1_000, 2_000));
    t.task(task("t9", "p2", 1_500));

    t.history.delete_historic_process_instance("p1").unwrap();

    let h = &t.history;
    let pis = h.create_historic_process_instance_query().list().unwrap();
    assert_eq!(ids(&pis, |p| p.id.as_str()), vec!["p2"]);
    let in_p1 = h.create_historic_task_instance_query().process_instance_id("p1");
    assert_eq!(in_p1.count().unwrap(), 0);
    assert_eq!(h.create_historic_activity_instance_query().count().unwrap(), 0);
    assert_eq!(h.create_historic_variable_instance_query().count().unwrap(), 0);
    assert_eq!(h.create_historic_detail_query().count().unwrap(), 0);
    // Other instances are untouched
    assert_eq!(h.create_historic_task_instance_query().count().unwrap(), 1);
}

#[test]
fn deleting_a_running_process_instance_fails_without_side_effects() {
    let t = TestHistory::new();
    t.process(running_process("p1", 1_000));
    t.task(task("t1", "p1", 1_500));

    let err = t.history.delete_historic_process_instance("p1").unwrap_err();
    assert!(matches!(err, Error::InvalidState { .. }), "got {err:?}");
    assert_eq!(t.history.create_historic_process_instance_query().count().unwrap(), 1);
    assert_eq!(t.history.create_historic_task_instance_query().count().unwrap(), 1);
}

#[test]
fn deleting_an_unknown_process_instance_is_not_found() {
    let t = TestHistory::new();
    let err = t.history.delete_historic_process_instance("ghost").unwrap_err();
    assert_eq!(
        err,
        Error::NotFound {
            entity: "historic process instance".into(),
            id: "ghost".into()
        }
    );
}

#[test]
fn deleting_a_log_entry_touches_nothing_else() {
    let t = TestHistory::new();
    t.invoice();
    let h = &t.history;
    let first = h
        .create_task_log_entry_builder()
        .task_id("t1")
        .log_type("USER_EVENT")
        .create()
        .unwrap()
        .unwrap();
    let second = h
        .create_task_log_entry_builder()
        .task_id("t1")
        .log_type("USER_EVENT")
        .create()
        .unwrap()
        .unwrap();

    h.delete_task_log_entry(first).unwrap();

    let left = h.create_task_log_entry_query().list().unwrap();
    assert_eq!(left.iter().map(|e| e.log_number).collect::<Vec<_>>(), vec![second]);
    assert_eq!(h.create_historic_task_instance_query().count().unwrap(), 2);

    // Unknown log numbers are ignored
    h.delete_task_log_entry(first).unwrap();
    h.delete_task_log_entry(9_999).unwrap();
}
