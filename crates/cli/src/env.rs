// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;

use crate::config::ConfigError;

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;

pub const LOG_ENV: &str = "GB_LOG";

/// Read a variable, treating an empty value as unset.
fn var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

/// Resolve state directory: GB_STATE_DIR > XDG_STATE_HOME/gridbook > ~/.local/state/gridbook
pub fn state_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = var("GB_STATE_DIR") {
        return Ok(PathBuf::from(dir));
    }
    if let Some(xdg) = var("XDG_STATE_HOME") {
        return Ok(PathBuf::from(xdg).join("gridbook"));
    }
    let home = dirs::home_dir().ok_or(ConfigError::NoStateDir)?;
    Ok(home.join(".local/state/gridbook"))
}

/// Config file: GB_CONFIG > <config dir>/gridbook/config.toml
pub fn config_path() -> Option<PathBuf> {
    var("GB_CONFIG")
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|d| d.join("gridbook").join("config.toml")))
}

/// Database file override
pub fn database() -> Option<PathBuf> {
    var("GB_DB").map(PathBuf::from)
}

/// Dataset-id → process lookup file
pub fn process_lookup() -> Option<PathBuf> {
    var("GB_PROCESS_LOOKUP").map(PathBuf::from)
}

/// File listing ids of done jobs that were already exported
pub fn exported_ids() -> Option<PathBuf> {
    var("GB_EXPORTED_IDS").map(PathBuf::from)
}

/// Substring a taskname must contain for a report line to be applied
pub fn name_filter() -> Option<String> {
    var("GB_NAME_FILTER")
}
