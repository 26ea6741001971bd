//! Identity links and entity links.

use chronicle::{
    identity_link_types, scope_types, Command, CommandExecutor, Error, HistoricIdentityLink,
    IdentityLinkScope, Output,
};

use crate::common::*;

/// `type:user:<id>` or `type:group:<id>`, sorted.
fn sorted(links: Vec<HistoricIdentityLink>) -> Vec<String> {
    let mut out: Vec<String> = links
        .into_iter()
        .map(|l| match (l.user_id, l.group_id) {
            (Some(user), _) => format!("{}:user:{}", l.link_type, user),
            (None, Some(group)) => format!("{}:group:{}", l.link_type, group),
            (None, None) => l.link_type,
        })
        .collect();
    out.sort();
    out
}

#[test]
fn task_links_combine_recorded_and_implied_links() {
    let t = TestHistory::new();
    t.invoice();
    let mut t1 = task("t1", "p1", 2_000);
    t1.assignee = Some("kermit".into());
    t1.owner = Some("piggy".into());
    t.task(t1);
    t.identity_link(group_link("t1", identity_link_types::CANDIDATE, "accounting"));

    let links = t.history.get_historic_identity_links_for_task("t1").unwrap();
    assert_eq!(
        sorted(links),
        vec![
            "assignee:user:kermit",
            "candidate:group:accounting",
            "owner:user:piggy",
        ]
    );
}

#[test]
fn facade_matches_the_identity_link_command() {
    let t = TestHistory::new();
    t.invoice();
    t.identity_link(user_link(Some("t1"), None, identity_link_types::CANDIDATE, "fozzie"));

    let via_facade = t.history.get_historic_identity_links_for_task("t1").unwrap();
    let direct = t
        .history
        .executor()
        .execute(Command::GetHistoricIdentityLinks {
            scope: IdentityLinkScope::task("t1"),
        })
        .unwrap();

    assert_eq!(Output::IdentityLinks(via_facade), direct);
}

#[test]
fn process_instance_links_exclude_task_links() {
    let t = TestHistory::new();
    t.invoice();
    t.identity_link(user_link(None, Some("p1"), identity_link_types::STARTER, "kermit"));
    t.identity_link(user_link(None, Some("p1"), identity_link_types::PARTICIPANT, "fozzie"));
    t.identity_link(user_link(Some("t1"), None, identity_link_types::CANDIDATE, "gonzo"));

    let links = t.history.get_historic_identity_links_for_process_instance("p1").unwrap();
    assert_eq!(
        sorted(links),
        vec!["participant:user:fozzie", "starter:user:kermit"]
    );
}

#[test]
fn identity_links_of_unknown_task_are_not_found() {
    let t = TestHistory::new();
    let err = t.history.get_historic_identity_links_for_task("missing").unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

/// p1 --(bpmn)--> t1 --(task)--> sub-process p2
fn linked_history() -> TestHistory {
    let t = TestHistory::new();
    t.invoice();
    t.process(finished_process("p2", 3_000, 3_500));
    t.entity_link(child_link("el-p1-t1", ("p1", scope_types::BPMN), ("t1", scope_types::TASK)));
    t.entity_link(child_link("el-t1-p2", ("t1", scope_types::TASK), ("p2", scope_types::BPMN)));
    t.entity_link(child_link("el-p1-p2", ("p1", scope_types::BPMN), ("p2", scope_types::BPMN)));
    t
}

fn link_ids(links: Vec<chronicle::HistoricEntityLink>) -> Vec<String> {
    let mut ids: Vec<String> = links.into_iter().map(|l| l.id).collect();
    ids.sort();
    ids
}

#[test]
fn children_are_links_the_scope_owns() {
    let t = linked_history();
    let h = &t.history;
    assert_eq!(
        link_ids(h.get_historic_entity_link_children_for_process_instance("p1").unwrap()),
        vec!["el-p1-p2", "el-p1-t1"]
    );
    assert_eq!(
        link_ids(h.get_historic_entity_link_children_for_task("t1").unwrap()),
        vec!["el-t1-p2"]
    );
    assert!(h.get_historic_entity_link_children_for_process_instance("p2").unwrap().is_empty());
}

#[test]
fn parents_are_links_that_reference_the_scope() {
    let t = linked_history();
    let h = &t.history;
    assert_eq!(
        link_ids(h.get_historic_entity_link_parent_for_process_instance("p2").unwrap()),
        vec!["el-p1-p2", "el-t1-p2"]
    );
    assert_eq!(
        link_ids(h.get_historic_entity_link_parent_for_task("t1").unwrap()),
        vec!["el-p1-t1"]
    );
    assert!(h.get_historic_entity_link_parent_for_process_instance("p1").unwrap().is_empty());
}

#[test]
fn children_and_parents_never_coincide_for_a_task() {
    let t = linked_history();
    let children = link_ids(t.history.get_historic_entity_link_children_for_task("t1").unwrap());
    let parents = link_ids(t.history.get_historic_entity_link_parent_for_task("t1").unwrap());
    assert!(children.iter().all(|c| !parents.contains(c)));
}
