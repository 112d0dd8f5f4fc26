// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Settings resolution.
//!
//! Precedence: command-line flag > environment variable > config file >
//! built-in default.
//!
//! ```toml
//! database = "/data/grid/jobs.db"
//! process_lookup = "/data/grid/dsid_categories.txt"
//! exported_ids = "/data/grid/exported.txt"
//! name_filter = "user.wg"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::env;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Database file name inside the state directory
pub const DB_FILE: &str = "gridbook.db";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot determine state directory (set GB_STATE_DIR or HOME)")]
    NoStateDir,

    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of the config file. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub database: Option<PathBuf>,
    pub process_lookup: Option<PathBuf>,
    pub exported_ids: Option<PathBuf>,
    pub name_filter: Option<String>,
}

impl FileConfig {
    /// Load the file, or defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(&text, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read { path: path.to_path_buf(), source }),
        }
    }

    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }
}

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub database: PathBuf,
    pub process_lookup: Option<PathBuf>,
    pub exported_ids: Option<PathBuf>,
    /// Empty accepts every taskname.
    pub name_filter: String,
}

impl Settings {
    pub fn load(database_flag: Option<PathBuf>) -> Result<Self, ConfigError> {
        let file = match env::config_path() {
            Some(path) => FileConfig::load(&path)?,
            None => FileConfig::default(),
        };
        Self::resolve(database_flag, file)
    }

    fn resolve(database_flag: Option<PathBuf>, file: FileConfig) -> Result<Self, ConfigError> {
        let database = match database_flag.or_else(env::database).or(file.database) {
            Some(path) => path,
            None => env::state_dir()?.join(DB_FILE),
        };
        Ok(Self {
            database,
            process_lookup: env::process_lookup().or(file.process_lookup),
            exported_ids: env::exported_ids().or(file.exported_ids),
            name_filter: env::name_filter().or(file.name_filter).unwrap_or_default(),
        })
    }
}
