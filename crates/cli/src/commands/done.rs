// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gb done` - Write tasknames of completed jobs for download

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use gb_engine::{export_done_jobs, load_exclusions};

use super::open_store;
use crate::color;
use crate::config::Settings;
use crate::output::plural;

#[derive(Args)]
pub struct DoneArgs {
    /// File to write tasknames to (overwritten)
    pub file: PathBuf,
    /// File of task ids that were already exported
    #[arg(long, value_name = "FILE")]
    pub exclude: Option<PathBuf>,
}

pub fn handle(args: DoneArgs, settings: &Settings) -> Result<()> {
    let exclude = match args.exclude.or_else(|| settings.exported_ids.clone()) {
        Some(path) => load_exclusions(&path)?,
        None => HashSet::new(),
    };

    let store = open_store(settings)?;
    let summary = export_done_jobs(&store, &args.file, &exclude)?;
    println!(
        "Wrote {} to {} ({} done, {} already exported)",
        color::header(&plural(summary.written, "taskname")),
        args.file.display(),
        summary.done,
        summary.excluded
    );
    Ok(())
}
