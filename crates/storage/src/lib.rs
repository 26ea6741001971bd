//! Storage layer for Chronicle
//!
//! This crate holds recorded history in memory:
//! - HistoryState: one table per historic entity plus the task log
//! - HistoryStore: `parking_lot::RwLock` around the state, with in-place
//!   `write` for single rows and all-or-nothing `transact` for units of work
//! - Cascading removal of tasks and process instances
//!
//! The engine writes history through the `record_*` methods; the executor
//! reads through [`HistoryStore::read`] and mutates through
//! [`HistoryStore::write`] or [`HistoryStore::transact`].

#![warn(clippy::all)]

pub mod error;
pub mod state;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use state::{HistoryState, RemovalSummary};
pub use store::HistoryStore;
