//! Process instance history log.

use chronicle::HistoricData;

use crate::common::*;

fn labels(data: &[HistoricData]) -> Vec<String> {
    data.iter()
        .map(|d| match d {
            HistoricData::Task(t) => format!("task:{}", t.id),
            HistoricData::Activity(a) => format!("activity:{}", a.id),
            HistoricData::Variable(v) => format!("variable:{}", v.id),
            HistoricData::VariableUpdate(u) => format!("update:{}", u.id),
            HistoricData::FormProperty(f) => format!("form:{}", f.id),
        })
        .collect()
}

#[test]
fn full_log_is_a_single_timeline() {
    let t = TestHistory::new();
    t.invoice();

    let log = t
        .history
        .create_process_instance_history_log_query("p1")
        .include_tasks()
        .include_activities()
        .include_variables()
        .include_variable_updates()
        .include_form_properties()
        .single_result()
        .unwrap()
        .expect("p1 exists");

    assert_eq!(log.process_instance.id, "p1");
    // v1 and d1 share 1500, a1 and t1 share 2000: ties keep include order
    assert_eq!(
        labels(&log.historic_data),
        vec![
            "variable:v1",
            "update:d1",
            "task:t1",
            "activity:a1",
            "variable:v2",
            "form:d2",
            "task:t2",
            "activity:a2",
        ]
    );
}

#[test]
fn log_contains_only_what_was_included() {
    let t = TestHistory::new();
    t.invoice();
    let h = &t.history;

    let tasks_only = h
        .create_process_instance_history_log_query("p1")
        .include_tasks()
        .single_result()
        .unwrap()
        .unwrap();
    assert_eq!(labels(&tasks_only.historic_data), vec!["task:t1", "task:t2"]);

    let forms_only = h
        .create_process_instance_history_log_query("p1")
        .include_form_properties()
        .single_result()
        .unwrap()
        .unwrap();
    assert_eq!(labels(&forms_only.historic_data), vec!["form:d2"]);

    let nothing = h
        .create_process_instance_history_log_query("p1")
        .single_result()
        .unwrap()
        .unwrap();
    assert!(nothing.historic_data.is_empty());
}

#[test]
fn log_ignores_other_process_instances() {
    let t = TestHistory::new();
    t.invoice();
    t.process(finished_process("p2", 1_000, 2_000));
    t.task(task("t9", "p2", 1_100));

    let log = t
        .history
        .create_process_instance_history_log_query("p2")
        .include_tasks()
        .include_activities()
        .single_result()
        .unwrap()
        .unwrap();
    assert_eq!(labels(&log.historic_data), vec!["task:t9"]);
}

#[test]
fn log_of_unknown_instance_is_none() {
    let t = TestHistory::new();
    let log = t
        .history
        .create_process_instance_history_log_query("ghost")
        .include_tasks()
        .single_result()
        .unwrap();
    assert!(log.is_none());
}
