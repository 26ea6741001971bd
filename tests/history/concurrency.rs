//! Sharing one service across threads.

use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;

use crate::common::*;

#[test]
fn concurrent_log_writers_get_distinct_numbers() {
    let t = TestHistory::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let history = t.history.clone();
            let seen = Arc::clone(&seen);
            thread::spawn(move || {
                for _ in 0..20 {
                    let n = history
                        .create_task_log_entry_builder()
                        .task_id(format!("t{i}"))
                        .log_type("USER_EVENT")
                        .create()
                        .unwrap()
                        .unwrap();
                    seen.lock().push(n);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let mut numbers = seen.lock().clone();
    numbers.sort_unstable();
    numbers.dedup();
    assert_eq!(numbers.len(), 160);
    assert_eq!(t.history.create_task_log_entry_query().count().unwrap(), 160);
}

#[test]
fn readers_see_whole_deletes_only() {
    let t = TestHistory::new();
    for i in 0..50 {
        let pi = format!("p{i}");
        t.process(finished_process(&pi, 1_000, 2_000));
        t.task(task(&format!("{pi}-a"), &pi, 1_100));
        t.task(task(&format!("{pi}-b"), &pi, 1_200));
    }

    let deleter = {
        let history = t.history.clone();
        thread::spawn(move || {
            for i in 0..50 {
                history.delete_historic_process_instance(&format!("p{i}")).unwrap();
            }
        })
    };

    // Every process instance is removed together with both of its tasks
    for _ in 0..50 {
        let tasks = t.history.create_historic_task_instance_query().count().unwrap();
        assert_eq!(tasks % 2, 0, "saw a half-deleted process instance");
    }
    deleter.join().unwrap();

    assert_eq!(t.history.create_historic_task_instance_query().count().unwrap(), 0);
    assert_eq!(t.history.create_historic_process_instance_query().count().unwrap(), 0);
}
