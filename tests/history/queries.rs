//! Structured query builders.

use serde_json::json;

use chronicle::{
    ActivityInstanceProperty, DetailProperty, Direction, Error, ProcessInstanceProperty,
    TaskInstanceProperty, TaskLogEntryProperty,
};

use crate::common::*;

// ============================================================================
// Process instances
// ============================================================================

#[test]
fn process_instance_query_filters() {
    let t = TestHistory::new();
    t.invoice();
    t.process(running_process("p2", 2_000));
    let mut p3 = finished_process("p3", 3_000, 4_000);
    p3.business_key = Some("order-7".into());
    p3.tenant_id = Some("acme".into());
    t.process(p3);

    let h = &t.history;
    assert_eq!(h.create_historic_process_instance_query().count().unwrap(), 3);
    assert_eq!(h.create_historic_process_instance_query().finished().count().unwrap(), 2);
    assert_eq!(h.create_historic_process_instance_query().unfinished().count().unwrap(), 1);

    let keyed = h
        .create_historic_process_instance_query()
        .process_instance_business_key("order-7")
        .single_result()
        .unwrap()
        .unwrap();
    assert_eq!(keyed.id, "p3");

    let without_tenant = h
        .create_historic_process_instance_query()
        .process_instance_without_tenant_id()
        .list()
        .unwrap();
    assert_eq!(ids(&without_tenant, |p| p.id.as_str()), vec!["p1", "p2"]);

    let started_late = h
        .create_historic_process_instance_query()
        .started_after(at(2_000))
        .list()
        .unwrap();
    assert_eq!(ids(&started_late, |p| p.id.as_str()), vec!["p2", "p3"]);

    let selected = h
        .create_historic_process_instance_query()
        .process_instance_ids(["p1", "p3", "p9"])
        .list()
        .unwrap();
    assert_eq!(ids(&selected, |p| p.id.as_str()), vec!["p1", "p3"]);
}

#[test]
fn process_instance_query_orders_by_start_time_descending() {
    let t = TestHistory::new();
    t.process(finished_process("a", 3_000, 4_000));
    t.process(finished_process("b", 1_000, 4_000));
    t.process(finished_process("c", 2_000, 4_000));

    let rows = t
        .history
        .create_historic_process_instance_query()
        .order_by(ProcessInstanceProperty::StartTime, Direction::Desc)
        .list()
        .unwrap();
    assert_eq!(ids(&rows, |p| p.id.as_str()), vec!["a", "c", "b"]);
}

// ============================================================================
// Activities
// ============================================================================

#[test]
fn activity_query_filters_and_orders() {
    let t = TestHistory::new();
    t.invoice();
    let h = &t.history;

    let rows = h
        .create_historic_activity_instance_query()
        .process_instance_id("p1")
        .order_by(ActivityInstanceProperty::StartTime, Direction::Desc)
        .list()
        .unwrap();
    assert_eq!(ids(&rows, |a| a.id.as_str()), vec!["a2", "a1"]);

    let approve = h
        .create_historic_activity_instance_query()
        .activity_id("approve")
        .single_result()
        .unwrap()
        .unwrap();
    assert_eq!(approve.task_id.as_deref(), Some("t1"));

    assert_eq!(h.create_historic_activity_instance_query().finished().count().unwrap(), 0);
}

// ============================================================================
// Tasks
// ============================================================================

#[test]
fn task_query_filters() {
    let t = TestHistory::new();
    t.invoice();
    let h = &t.history;

    assert_eq!(h.create_historic_task_instance_query().finished().count().unwrap(), 1);
    assert_eq!(h.create_historic_task_instance_query().unfinished().count().unwrap(), 1);
    assert_eq!(
        h.create_historic_task_instance_query()
            .task_assignee("kermit")
            .list()
            .unwrap()
            .len(),
        1
    );
    let like = h
        .create_historic_task_instance_query()
        .task_name_like("%invoice")
        .list()
        .unwrap();
    assert_eq!(like.len(), 2);
    let high = h
        .create_historic_task_instance_query()
        .task_min_priority(60)
        .list()
        .unwrap();
    assert_eq!(ids(&high, |t| t.id.as_str()), vec!["t1"]);
    let due = h
        .create_historic_task_instance_query()
        .due_before(at(30_000))
        .list()
        .unwrap();
    assert_eq!(ids(&due, |t| t.id.as_str()), vec!["t1"]);
}

#[test]
fn task_name_like_matches_names_starting_with_percent() {
    let t = TestHistory::new();
    t.process(running_process("p1", 1_000));
    let mut discount = task("t1", "p1", 1_100);
    discount.name = Some("%x done".into());
    t.task(discount);
    t.task(task("t2", "p1", 1_200));

    let found = t
        .history
        .create_historic_task_instance_query()
        .task_name_like("%done")
        .list()
        .unwrap();
    assert_eq!(ids(&found, |t| t.id.as_str()), vec!["t1"]);
}

#[test]
fn task_query_places_nulls_the_configured_way() {
    fn due_date_order(database_type: &str, direction: Direction) -> Vec<String> {
        let t = TestHistory::for_database(database_type);
        let mut early = task("early", "p1", 1_000);
        early.due_date = Some(at(10_000));
        let mut late = task("late", "p1", 1_000);
        late.due_date = Some(at(20_000));
        t.task(early).task(late).task(task("none", "p1", 1_000));

        let rows = t
            .history
            .create_historic_task_instance_query()
            .order_by(TaskInstanceProperty::DueDate, direction)
            .list()
            .unwrap();
        ids(&rows, |t| t.id.as_str())
    }

    // NULL lowest
    assert_eq!(due_date_order("h2", Direction::Asc), vec!["none", "early", "late"]);
    assert_eq!(due_date_order("mysql", Direction::Desc), vec!["late", "early", "none"]);
    // NULL highest
    assert_eq!(due_date_order("postgres", Direction::Asc), vec!["early", "late", "none"]);
    assert_eq!(due_date_order("oracle", Direction::Desc), vec!["none", "late", "early"]);
}

#[test]
fn task_query_paging() {
    let t = TestHistory::new();
    for i in 0..10 {
        let mut row = task(&format!("t{i:02}"), "p1", 1_000);
        row.priority = i;
        t.task(row);
    }
    let page = t
        .history
        .create_historic_task_instance_query()
        .order_by(TaskInstanceProperty::Priority, Direction::Desc)
        .list_page(2, 3)
        .unwrap();
    assert_eq!(ids(&page, |t| t.id.as_str()), vec!["t07", "t06", "t05"]);

    let past_end = t
        .history
        .create_historic_task_instance_query()
        .list_page(20, 5)
        .unwrap();
    assert!(past_end.is_empty());
}

#[test]
fn single_result_distinguishes_none_one_and_many() {
    let t = TestHistory::new();
    t.invoice();
    let h = &t.history;

    assert!(h
        .create_historic_task_instance_query()
        .task_id("nope")
        .single_result()
        .unwrap()
        .is_none());
    assert!(h
        .create_historic_task_instance_query()
        .task_id("t1")
        .single_result()
        .unwrap()
        .is_some());
    let err = h
        .create_historic_task_instance_query()
        .process_instance_id("p1")
        .single_result()
        .unwrap_err();
    assert_eq!(err, Error::NonUniqueResult { count: 2 });
}

#[test]
fn a_query_can_be_run_repeatedly() {
    let t = TestHistory::new();
    t.invoice();
    let query = t.history.create_historic_task_instance_query().unfinished();
    assert_eq!(query.count().unwrap(), 1);

    t.task(task("t3", "p1", 6_000));
    assert_eq!(query.count().unwrap(), 2);
}

// ============================================================================
// Details and variables
// ============================================================================

#[test]
fn detail_query_by_type() {
    let t = TestHistory::new();
    t.invoice();
    let h = &t.history;

    assert_eq!(h.create_historic_detail_query().count().unwrap(), 2);
    let updates = h.create_historic_detail_query().variable_updates().list().unwrap();
    assert_eq!(ids(&updates, |d| d.id.as_str()), vec!["d1"]);
    let forms = h.create_historic_detail_query().form_properties().list().unwrap();
    assert_eq!(ids(&forms, |d| d.id.as_str()), vec!["d2"]);
    assert_eq!(h.create_historic_detail_query().exclude_task_details().count().unwrap(), 1);

    let by_time = h
        .create_historic_detail_query()
        .order_by(DetailProperty::Time, Direction::Desc)
        .list()
        .unwrap();
    assert_eq!(ids(&by_time, |d| d.id.as_str()), vec!["d2", "d1"]);
}

#[test]
fn variable_query_by_name_and_value() {
    let t = TestHistory::new();
    t.invoice();
    let h = &t.history;

    let amount = h
        .create_historic_variable_instance_query()
        .variable_value_equals("amount", 1200)
        .single_result()
        .unwrap()
        .unwrap();
    assert_eq!(amount.value, json!(1200));

    assert!(h
        .create_historic_variable_instance_query()
        .variable_value_equals("amount", 1300)
        .single_result()
        .unwrap()
        .is_none());

    assert_eq!(
        h.create_historic_variable_instance_query()
            .variable_name_like("com%")
            .count()
            .unwrap(),
        1
    );
    assert_eq!(
        h.create_historic_variable_instance_query()
            .exclude_task_variables()
            .count()
            .unwrap(),
        1
    );
}

// ============================================================================
// Task log
// ============================================================================

#[test]
fn task_log_query_ranges() {
    let t = TestHistory::new();
    let h = &t.history;
    let mut numbers = Vec::new();
    for (i, task_id) in ["t1", "t1", "t2", "t1"].into_iter().enumerate() {
        let n = h
            .create_task_log_entry_builder()
            .task_id(task_id)
            .log_type("USER_EVENT")
            .time_stamp(at(1_000 * (i as i64 + 1)))
            .create()
            .unwrap()
            .unwrap();
        numbers.push(n);
    }

    assert_eq!(h.create_task_log_entry_query().task_id("t1").count().unwrap(), 3);
    assert_eq!(
        h.create_task_log_entry_query()
            .from(at(2_000))
            .to(at(3_000))
            .count()
            .unwrap(),
        2
    );
    assert_eq!(
        h.create_task_log_entry_query()
            .from_log_number(numbers[1])
            .to_log_number(numbers[2])
            .count()
            .unwrap(),
        2
    );

    let newest_first = h
        .create_task_log_entry_query()
        .order_by(TaskLogEntryProperty::LogNumber, Direction::Desc)
        .list()
        .unwrap();
    let mut expected = numbers.clone();
    expected.reverse();
    assert_eq!(newest_first.iter().map(|e| e.log_number).collect::<Vec<_>>(), expected);
}

// ============================================================================
// Properties
// ============================================================================

proptest::proptest! {
    #![proptest_config(proptest::prelude::ProptestConfig::with_cases(32))]

    #[test]
    fn priority_range_matches_a_manual_filter(
        priorities in proptest::collection::vec(0i32..100, 0..12),
        low in 0i32..100,
        span in 0i32..50,
    ) {
        let t = TestHistory::new();
        t.process(running_process("p1", 1_000));
        for (i, priority) in priorities.iter().enumerate() {
            let mut task = task(&format!("t{i:02}"), "p1", 1_000 + i as i64);
            task.priority = *priority;
            t.task(task);
        }
        let high = low + span;

        let found = t
            .history
            .create_historic_task_instance_query()
            .task_min_priority(low)
            .task_max_priority(high)
            .order_by(TaskInstanceProperty::Priority, Direction::Asc)
            .list()
            .unwrap();
        let expected = priorities.iter().filter(|p| (low..=high).contains(*p)).count();

        proptest::prop_assert_eq!(found.len(), expected);
        proptest::prop_assert!(found.windows(2).all(|w| w[0].priority <= w[1].priority));
    }
}
