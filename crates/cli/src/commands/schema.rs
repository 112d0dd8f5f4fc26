// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gb init` / `gb drop` - Job table setup and teardown

use anyhow::Result;

use super::open_store;
use crate::color;
use crate::config::Settings;

pub fn init(settings: &Settings) -> Result<()> {
    let store = open_store(settings)?;
    store.create_schema()?;
    println!("Created job table in {}", color::muted(&settings.database.display().to_string()));
    Ok(())
}

pub fn drop_table(settings: &Settings) -> Result<()> {
    let store = open_store(settings)?;
    store.drop_schema()?;
    println!("Dropped job table from {}", color::muted(&settings.database.display().to_string()));
    Ok(())
}
