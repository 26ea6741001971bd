//! History service configuration via `chronicle.toml`
//!
//! A missing key falls back to its default, so an empty file is a valid
//! configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use chronicle_core::DatabaseType;

use crate::{Error, Result};

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "chronicle.toml";

/// Configuration loaded from `chronicle.toml`.
///
/// # Example
///
/// ```toml
/// # Database dialect: decides where NULL sorts in task queries
/// database_type = "postgres"
///
/// # Record task log entries (default: true)
/// enable_task_logging = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Database dialect name, e.g. `"h2"` or `"postgres"`.
    #[serde(default = "default_database_type_str")]
    pub database_type: String,
    /// Whether task log entries are stored.
    #[serde(default = "default_enable_task_logging")]
    pub enable_task_logging: bool,
}

fn default_database_type_str() -> String {
    DatabaseType::default().as_str().to_string()
}

fn default_enable_task_logging() -> bool {
    true
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            database_type: default_database_type_str(),
            enable_task_logging: default_enable_task_logging(),
        }
    }
}

impl HistoryConfig {
    /// Parse the dialect name into a `DatabaseType`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the name is not a known dialect.
    pub fn database_type(&self) -> Result<DatabaseType> {
        Ok(self.database_type.parse::<DatabaseType>()?)
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Chronicle history service configuration
#
# Database dialect: h2 (default), hsql, mysql, oracle, postgres, mssql, db2,
# cockroachdb. Decides where NULL values sort in task queries and native
# queries.
database_type = "h2"

# Record task log entries (default: true). When false, creating a task log
# entry stores nothing.
enable_task_logging = true
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the text cannot be parsed or names an
    /// unknown database type.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: HistoryConfig = toml::from_str(content).map_err(|e| Error::Config {
            reason: format!("Failed to parse config: {}", e),
        })?;
        // Validate the dialect eagerly
        config.database_type()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
            reason: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config { reason } => Error::Config {
                reason: format!("{} ({})", reason, path.display()),
            },
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| Error::Config {
                reason: format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ),
            })?;
        }
        Ok(())
    }
}
