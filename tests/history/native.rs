//! Native query builders.

use std::sync::Arc;

use chronicle::{
    DatabaseType, Direction, Error, Executor, HistoryConfig, HistoryService, HistoryStore,
    TaskInstanceProperty,
};

use crate::common::*;

#[test]
fn native_task_query_with_parameters_and_ordering() {
    let t = TestHistory::new();
    t.invoice();
    let mut t3 = task("t3", "p1", 6_000);
    t3.assignee = Some("kermit".into());
    t3.priority = 90;
    t.task(t3);

    let rows = t
        .history
        .create_native_historic_task_instance_query()
        .sql("SELECT * FROM ACT_HI_TASKINST T WHERE T.ASSIGNEE_ = #{user} ORDER BY T.PRIORITY_ DESC")
        .parameter("user", "kermit")
        .list()
        .unwrap();
    assert_eq!(ids(&rows, |t| t.id.as_str()), vec!["t3", "t1"]);
}

#[test]
fn native_count_and_list_agree() {
    let t = TestHistory::new();
    t.invoice();
    let query = t
        .history
        .create_native_historic_activity_instance_query()
        .sql("SELECT * FROM ACT_HI_ACTINST WHERE PROC_INST_ID_ = #{pi} AND START_TIME_ >= #{from}")
        .parameter("pi", "p1")
        .parameter("from", 3_000);

    assert_eq!(query.list().unwrap().len(), 1);
    assert_eq!(query.count().unwrap(), 1);
}

#[test]
fn native_count_with_count_projection() {
    let t = TestHistory::new();
    t.invoice();
    let n = t
        .history
        .create_native_historic_variable_instance_query()
        .sql("select count(*) from act_hi_varinst where task_id_ is null")
        .count()
        .unwrap();
    assert_eq!(n, 1);
}

#[test]
fn native_list_with_count_projection_is_malformed() {
    let t = TestHistory::new();
    let err = t
        .history
        .create_native_historic_process_instance_query()
        .sql("SELECT COUNT(*) FROM ACT_HI_PROCINST")
        .list()
        .unwrap_err();
    assert!(matches!(err, Error::MalformedQuery { .. }));
}

#[test]
fn native_query_errors() {
    let t = TestHistory::new();
    t.invoice();
    let h = &t.history;

    // No statement at all
    let err = h.create_native_historic_detail_query().count().unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));

    // Blank statement
    let err = h.create_native_historic_detail_query().sql("   ").list().unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));

    // Statement against another table
    let err = h
        .create_native_historic_detail_query()
        .sql("SELECT * FROM ACT_HI_TASKINST")
        .list()
        .unwrap_err();
    assert!(matches!(err, Error::MalformedQuery { .. }));

    // Unknown column
    let err = h
        .create_native_historic_detail_query()
        .sql("SELECT * FROM ACT_HI_DETAIL WHERE NOPE_ = 1")
        .list()
        .unwrap_err();
    assert!(matches!(err, Error::MalformedQuery { .. }));

    // Unbound parameter
    let err = h
        .create_native_historic_detail_query()
        .sql("SELECT * FROM ACT_HI_DETAIL WHERE PROC_INST_ID_ = #{pi}")
        .list()
        .unwrap_err();
    assert!(matches!(err, Error::MalformedQuery { .. }));
}

#[test]
fn native_single_result_and_paging() {
    let t = TestHistory::new();
    t.invoice();
    let h = &t.history;

    let p1 = h
        .create_native_historic_process_instance_query()
        .sql("SELECT * FROM ACT_HI_PROCINST WHERE ID_ = 'p1'")
        .single_result()
        .unwrap()
        .unwrap();
    assert!(p1.is_finished());

    let err = h
        .create_native_historic_task_instance_query()
        .sql("SELECT * FROM ACT_HI_TASKINST")
        .single_result()
        .unwrap_err();
    assert_eq!(err, Error::NonUniqueResult { count: 2 });

    let second = h
        .create_native_historic_task_instance_query()
        .sql("SELECT * FROM ACT_HI_TASKINST")
        .list_page(1, 1)
        .unwrap();
    assert_eq!(ids(&second, |t| t.id.as_str()), vec!["t2"]);
}

#[test]
fn native_task_log_query_with_like() {
    let t = TestHistory::new();
    let h = &t.history;
    for log_type in ["USER_TASK_ASSIGNEE_CHANGED", "USER_TASK_OWNER_CHANGED", "USER_EVENT"] {
        h.create_task_log_entry_builder()
            .task_id("t1")
            .log_type(log_type)
            .create()
            .unwrap();
    }

    let n = h
        .create_native_task_log_entry_query()
        .sql("SELECT * FROM ACT_HI_TSK_LOG WHERE TYPE_ LIKE #{pattern}")
        .parameter("pattern", "%_CHANGED")
        .count()
        .unwrap();
    assert_eq!(n, 2);
}

#[test]
fn native_queries_sort_null_the_configured_way() {
    fn order(database_type: &str) -> Vec<String> {
        let t = TestHistory::for_database(database_type);
        let mut due = task("due", "p1", 1_000);
        due.due_date = Some(at(5_000));
        t.task(due).task(task("open", "p1", 1_000));
        let rows = t
            .history
            .create_native_historic_task_instance_query()
            .sql("SELECT * FROM ACT_HI_TASKINST ORDER BY DUE_DATE_")
            .list()
            .unwrap();
        ids(&rows, |t| t.id.as_str())
    }

    assert_eq!(order("mssql"), vec!["open", "due"]);
    assert_eq!(order("db2"), vec!["due", "open"]);
}

#[test]
fn native_and_structured_task_queries_place_nulls_alike() {
    // The executor is configured for mysql, the service for postgres
    let store = Arc::new(HistoryStore::new());
    let executor = Executor::new(
        Arc::clone(&store),
        HistoryConfig {
            database_type: "mysql".into(),
            ..HistoryConfig::default()
        },
    );
    let history = HistoryService::new(Arc::new(executor), DatabaseType::Postgres);

    let mut due = task("due", "p1", 1_000);
    due.due_date = Some(at(5_000));
    store.record_task_instance(due).unwrap();
    store.record_task_instance(task("open", "p1", 1_000)).unwrap();

    let native = history
        .create_native_historic_task_instance_query()
        .sql("SELECT * FROM ACT_HI_TASKINST ORDER BY DUE_DATE_ ASC")
        .list()
        .unwrap();
    let structured = history
        .create_historic_task_instance_query()
        .order_by(TaskInstanceProperty::DueDate, Direction::Asc)
        .list()
        .unwrap();

    assert_eq!(ids(&native, |t| t.id.as_str()), vec!["due", "open"]);
    assert_eq!(ids(&native, |t| t.id.as_str()), ids(&structured, |t| t.id.as_str()));
}
