// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gb update` - Ingest a status report or register a retry

use std::path::Path;

use anyhow::Result;
use clap::Args;
use gb_engine::{import_report_file, register_retry, ImportSummary};

use super::open_store;
use crate::color;
use crate::config::Settings;
use crate::exit_error::ExitError;
use crate::output::plural;

#[cfg(test)]
#[path = "update_tests.rs"]
mod tests;

#[derive(Args)]
pub struct UpdateArgs {
    /// Status report file (name containing ".txt") or a retry directive such
    /// as "retry([1, 2],newOpts={'memory':4000})"
    pub input: String,
    /// Only apply report lines whose taskname contains this text
    #[arg(long)]
    pub filter: Option<String>,
}

/// What an `update` argument refers to.
#[derive(Debug, PartialEq, Eq)]
pub enum UpdateInput<'a> {
    Report(&'a Path),
    Retry(&'a str),
}

/// Report files are recognised by `.txt`, directives by `retry`; the file
/// check wins when both appear.
pub fn classify(input: &str) -> Option<UpdateInput<'_>> {
    if input.contains(".txt") {
        Some(UpdateInput::Report(Path::new(input)))
    } else if input.contains("retry") {
        Some(UpdateInput::Retry(input))
    } else {
        None
    }
}

pub fn handle(args: UpdateArgs, settings: &Settings) -> Result<()> {
    let input = classify(&args.input).ok_or_else(|| {
        ExitError::usage(format!(
            "unrecognised update input '{}': expected a report file (*.txt) or a retry directive",
            args.input
        ))
    })?;

    let store = open_store(settings)?;
    match input {
        UpdateInput::Report(path) => {
            let filter = args.filter.as_deref().unwrap_or(&settings.name_filter);
            let summary = import_report_file(&store, path, filter)?;
            println!("{}: {}", path.display(), format_summary(&summary));
        }
        UpdateInput::Retry(directive) => {
            let ids = register_retry(&store, directive)?;
            println!("Registered retry for {}", color::header(&plural(ids.len(), "job")));
        }
    }
    Ok(())
}

pub(crate) fn format_summary(summary: &ImportSummary) -> String {
    format!(
        "{} inserted, {} updated, {} left done, {} filtered, {} malformed",
        summary.inserted, summary.updated, summary.left_done, summary.filtered, summary.malformed
    )
}
