//! Core types for Chronicle
//!
//! This crate defines the historic entities recorded by a workflow engine and
//! the small amount of shared vocabulary the upper layers need:
//! - Historic entities: process instances, activities, tasks, details,
//!   variables, identity links, entity links and task log entries
//! - TaskInfo: the identifying fields a task log entry can be seeded from
//! - DatabaseType: the dialect a task query sorts NULL values for
//! - Row / HistoryTable: column access used by native queries and ordering

#![warn(clippy::all)]

pub mod database_type;
pub mod entities;
pub mod error;
pub mod row;

pub use database_type::DatabaseType;
pub use entities::{
    identity_link_types, scope_types, DetailKind, EntityLinkType, HierarchyType,
    HistoricActivityInstance, HistoricDetail, HistoricEntityLink, HistoricIdentityLink,
    HistoricProcessInstance, HistoricTaskInstance, HistoricVariableInstance, NewTaskLogEntry,
    TaskInfo, TaskLogEntry,
};
pub use error::{CoreError, CoreResult};
pub use row::{compare_values, HistoryTable, NullOrdering, Row};
