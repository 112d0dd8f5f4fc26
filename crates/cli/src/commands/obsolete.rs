// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gb obsolete` - Exclude superseded jobs from every listing

use anyhow::Result;
use clap::Args;
use gb_core::ObsoleteTarget;
use gb_engine::mark_target_obsolete;

use super::open_store;
use crate::color;
use crate::config::Settings;
use crate::output::plural;

#[derive(Args)]
pub struct ObsoleteArgs {
    /// Task id, or a list such as "<100, 200, 300>"
    pub target: String,
}

pub fn handle(args: ObsoleteArgs, settings: &Settings) -> Result<()> {
    // Validate every id before touching the table.
    let target = ObsoleteTarget::parse(&args.target)?;

    let store = open_store(settings)?;
    mark_target_obsolete(&store, &target)?;
    println!("Marked {} obsoleted", color::header(&plural(target.ids().len(), "job")));
    Ok(())
}
