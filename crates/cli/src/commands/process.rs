// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gb process` - Label jobs with their physics process

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use gb_engine::{annotate_processes, ProcessLookup};

use super::open_store;
use crate::color;
use crate::config::Settings;
use crate::output::plural;

#[derive(Args)]
pub struct ProcessArgs {
    /// Lookup file of "<dataset id> <process>" lines
    #[arg(long, value_name = "FILE")]
    pub lookup: Option<PathBuf>,
}

pub fn handle(args: ProcessArgs, settings: &Settings) -> Result<()> {
    let Some(path) = args.lookup.or_else(|| settings.process_lookup.clone()) else {
        bail!("no process lookup file: pass --lookup or set GB_PROCESS_LOOKUP");
    };
    let lookup = ProcessLookup::load(&path)?;

    let store = open_store(settings)?;
    let summary = annotate_processes(&store, &lookup)?;
    println!(
        "Labelled {} ({} unmatched, {} without a dataset id)",
        color::header(&plural(summary.updated, "job")),
        summary.unmatched,
        summary.no_dataset_id
    );
    Ok(())
}
