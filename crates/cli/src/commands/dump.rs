// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gb all` / `gb active` - Raw row dumps

use anyhow::Result;
use clap::Args;

use super::open_store;
use crate::config::Settings;
use crate::output::{render_jobs, OutputFormat};

#[derive(Args)]
pub struct DumpArgs {
    /// Output format
    #[arg(long = "output", short = 'o', value_enum, default_value_t)]
    pub output: OutputFormat,
}

/// Every row, obsoleted ones included.
pub fn all(args: DumpArgs, settings: &Settings) -> Result<()> {
    let jobs = open_store(settings)?.all()?;
    print!("{}", render_jobs(&jobs, args.output)?);
    Ok(())
}

/// Rows not marked obsoleted.
pub fn active(args: DumpArgs, settings: &Settings) -> Result<()> {
    let jobs = open_store(settings)?.non_obsoleted()?;
    print!("{}", render_jobs(&jobs, args.output)?);
    Ok(())
}
