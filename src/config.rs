//! Configuration for the data directory and table file names.
//!
//! Configuration comes from an optional JSON file plus a single environment
//! override, and every field has a default, so the tracker runs with no
//! configuration at all. [`TrackerConfig::prepare`] is the only place the
//! crate touches ambient filesystem authority; everything downstream works
//! through the capability handle it returns.

use crate::adapters::csv::codec::TASK_HEADER;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "GANTT_DATA_DIR";

/// Errors raised while loading configuration or preparing the data
/// directory.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for this shape.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// The data directory could not be created, opened, or seeded.
    #[error("failed to prepare data directory {path}: {source}")]
    DataDir {
        /// Path of the data directory.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Tracker configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Directory holding the table files.
    pub data_dir: Utf8PathBuf,
    /// User table file name.
    pub users_file: String,
    /// Task table file name.
    pub tasks_file: String,
    /// Audit trail file name.
    pub logs_file: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: Utf8PathBuf::from("data"),
            users_file: "users.csv".to_owned(),
            tasks_file: "tasks.csv".to_owned(),
            logs_file: "logs.csv".to_owned(),
        }
    }
}

impl TrackerConfig {
    /// Loads configuration from a JSON file.
    ///
    /// Absent fields keep their defaults, so a partial configuration file
    /// is valid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, or
    /// [`ConfigError::Parse`] when its contents are not valid JSON for
    /// this shape.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Builds configuration from defaults plus the environment override.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            config.data_dir = Utf8PathBuf::from(dir);
        }
        config
    }

    /// Overrides the data directory.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<Utf8PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Creates the data directory when absent, seeds the task table and
    /// audit trail, and returns a capability handle to the directory.
    ///
    /// The task table is seeded with its header line only and the audit
    /// trail as an empty file. The user table is never seeded: users are
    /// reference data the tracker cannot invent, so a missing user table
    /// simply reads as empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DataDir`] when the directory cannot be
    /// created or opened, or a seed file cannot be written.
    pub fn prepare(&self) -> Result<Dir, ConfigError> {
        fs::create_dir_all(self.data_dir.as_std_path())
            .map_err(|err| self.data_dir_error(err))?;
        let dir = Dir::open_ambient_dir(&self.data_dir, ambient_authority())
            .map_err(|err| self.data_dir_error(err))?;
        if dir.metadata(&self.tasks_file).is_err() {
            dir.write(&self.tasks_file, format!("{TASK_HEADER}\n"))
                .map_err(|err| self.data_dir_error(err))?;
        }
        if dir.metadata(&self.logs_file).is_err() {
            dir.write(&self.logs_file, "")
                .map_err(|err| self.data_dir_error(err))?;
        }
        Ok(dir)
    }

    fn data_dir_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::DataDir {
            path: self.data_dir.clone(),
            source,
        }
    }
}
