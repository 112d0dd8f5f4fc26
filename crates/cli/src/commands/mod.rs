// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod done;
pub mod dump;
pub mod obsolete;
pub mod process;
pub mod retries;
pub mod schema;
pub mod update;

use anyhow::Result;
use gb_storage::JobStore;

use crate::config::Settings;

/// Open the configured database.
pub(crate) fn open_store(settings: &Settings) -> Result<JobStore> {
    Ok(JobStore::open(&settings.database)?)
}
