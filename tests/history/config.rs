//! Configuration files and logging setup.

use chronicle::config::CONFIG_FILE_NAME;
use chronicle::{logging, DatabaseType, Error, HistoryConfig, HistoryService};

#[test]
fn default_config_file_is_written_once_and_loads() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(CONFIG_FILE_NAME);

    HistoryConfig::write_default_if_missing(&path).unwrap();
    let config = HistoryConfig::from_file(&path).unwrap();
    assert_eq!(config, HistoryConfig::default());

    // An existing file is left alone
    std::fs::write(&path, "database_type = \"postgres\"\n").unwrap();
    HistoryConfig::write_default_if_missing(&path).unwrap();
    let config = HistoryConfig::from_file(&path).unwrap();
    assert_eq!(config.database_type().unwrap(), DatabaseType::Postgres);
    assert!(config.enable_task_logging);
}

#[test]
fn service_from_file_uses_its_database_type() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "database_type = \"oracle\"\nenable_task_logging = false\n").unwrap();

    let config = HistoryConfig::from_file(&path).unwrap();
    let (history, _store) = HistoryService::in_memory(config).unwrap();
    assert_eq!(history.database_type(), DatabaseType::Oracle);
    assert_eq!(
        history.create_historic_task_instance_query().database_type(),
        DatabaseType::Oracle
    );
}

#[test]
fn unknown_database_type_is_a_config_error() {
    let config = HistoryConfig {
        database_type: "sybase".into(),
        ..HistoryConfig::default()
    };
    let err = HistoryService::in_memory(config).unwrap_err();
    assert!(matches!(err, Error::Config { .. }), "got {err:?}");
}

#[test]
fn unreadable_config_reports_the_path() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("missing").join(CONFIG_FILE_NAME);
    let err = HistoryConfig::from_file(&path).unwrap_err();
    match err {
        Error::Config { reason } => assert!(reason.contains("missing"), "{reason}"),
        other => panic!("expected a config error, got {other:?}"),
    }
}

#[test]
fn tracing_can_be_initialized_repeatedly() {
    let first = logging::init_tracing("chronicle=debug");
    // Later calls report the outcome of the first
    assert_eq!(logging::init_tracing("chronicle=trace"), first);

    let (history, _store) = HistoryService::in_memory(HistoryConfig::default()).unwrap();
    history.delete_historic_task_instance("t1").unwrap();
}
