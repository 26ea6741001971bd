//! Database dialects.
//!
//! The history schema is portable, but dialects disagree on where NULL sorts.
//! The task query carries the configured dialect so its ordering matches what
//! the configured database would return.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::row::NullOrdering;

/// Supported database dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    /// H2 (embedded default)
    #[default]
    H2,
    /// HSQLDB
    Hsql,
    /// MySQL / MariaDB
    MySql,
    /// Oracle
    Oracle,
    /// PostgreSQL
    Postgres,
    /// Microsoft SQL Server
    MsSql,
    /// IBM Db2
    Db2,
    /// CockroachDB
    CockroachDb,
}

impl DatabaseType {
    /// All dialects, in declaration order.
    pub const ALL: [DatabaseType; 8] = [
        DatabaseType::H2,
        DatabaseType::Hsql,
        DatabaseType::MySql,
        DatabaseType::Oracle,
        DatabaseType::Postgres,
        DatabaseType::MsSql,
        DatabaseType::Db2,
        DatabaseType::CockroachDb,
    ];

    /// Canonical lowercase name, as used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseType::H2 => "h2",
            DatabaseType::Hsql => "hsql",
            DatabaseType::MySql => "mysql",
            DatabaseType::Oracle => "oracle",
            DatabaseType::Postgres => "postgres",
            DatabaseType::MsSql => "mssql",
            DatabaseType::Db2 => "db2",
            DatabaseType::CockroachDb => "cockroachdb",
        }
    }

    /// Where this dialect places NULL in an ascending sort.
    pub fn null_ordering(&self) -> NullOrdering {
        match self {
            DatabaseType::H2
            | DatabaseType::Hsql
            | DatabaseType::MySql
            | DatabaseType::MsSql
            | DatabaseType::CockroachDb => NullOrdering::Low,
            DatabaseType::Oracle | DatabaseType::Postgres | DatabaseType::Db2 => NullOrdering::High,
        }
    }
}

impl FromStr for DatabaseType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        DatabaseType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| CoreError::UnknownDatabaseType(s.to_string()))
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
