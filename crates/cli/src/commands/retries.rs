// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gb retries` - Jobs that are not done and what to do about them

use anyhow::Result;
use gb_engine::list_retries;

use super::open_store;
use crate::config::Settings;

pub fn handle(settings: &Settings) -> Result<()> {
    let store = open_store(settings)?;
    let report = list_retries(&store)?;
    println!();
    print!("{}", report);
    Ok(())
}
