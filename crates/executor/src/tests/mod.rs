//! Executor test suite
//!
//! - `dispatch`: every command against the reference executor
//! - `facade`: facade and builders over a recording executor
//! - `builders`: builder isolation and task log entry seeding
//! - `execute_many`: batch execution
//! - `serialization`: command/output JSON round-trips


use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use chronicle_core::{HistoricProcessInstance, HistoricTaskInstance};
use chronicle_storage::HistoryStore;

use crate::{Executor, HistoryConfig};

/// Executor over a fresh store with the default configuration.
pub(crate) fn create_test_executor() -> Executor {
    Executor::new(Arc::new(HistoryStore::new()), HistoryConfig::default())
}

/// Executor over a fresh store with `config`.
pub(crate) fn create_executor_with(config: HistoryConfig) -> Executor {
    Executor::new(Arc::new(HistoryStore::new()), config)
}

pub(crate) fn at(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis).unwrap()
}

pub(crate) fn process(id: &str, finished: bool) -> HistoricProcessInstance {
    let mut pi = HistoricProcessInstance {
        id: id.into(),
        process_definition_id: "invoice:1".into(),
        start_time: at(1_000),
        ..Default::default()
    };
    if finished {
        pi.finish(at(9_000));
    }
    pi
}

pub(crate) fn task(id: &str, process_instance_id: &str) -> HistoricTaskInstance {
    HistoricTaskInstance {
        id: id.into(),
        name: Some(format!("task {id}")),
        process_instance_id: Some(process_instance_id.into()),
        process_definition_id: Some("invoice:1".into()),
        execution_id: Some(format!("exec-{id}")),
        create_time: at(2_000),
        ..Default::default()
    }
}
