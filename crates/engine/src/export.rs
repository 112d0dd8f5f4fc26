// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Export of done task names for downstream processing.

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use gb_core::{JobStatus, TaskId};
use gb_storage::JobStore;
use tracing::{debug, info};

use crate::EngineError;

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Non-obsoleted done jobs found.
    pub done: usize,
    pub written: usize,
    /// Done jobs skipped because they were exported before.
    pub excluded: usize,
}

/// Write the taskname of every non-obsoleted done job, one per line,
/// skipping ids in `exclude`.
pub fn export_done_jobs(
    store: &JobStore,
    destination: &Path,
    exclude: &HashSet<TaskId>,
) -> Result<ExportSummary, EngineError> {
    let jobs = store.with_status(&JobStatus::Done)?;
    let file = std::fs::File::create(destination).map_err(EngineError::io(destination))?;
    let mut out = std::io::BufWriter::new(file);

    let mut summary = ExportSummary { done: jobs.len(), ..Default::default() };
    for job in jobs {
        if exclude.contains(&job.id) {
            debug!(task_id = %job.id, "already exported");
            summary.excluded += 1;
            continue;
        }
        out.write_all(job.taskname.as_bytes()).map_err(EngineError::io(destination))?;
        if !job.taskname.ends_with('\n') {
            out.write_all(b"\n").map_err(EngineError::io(destination))?;
        }
        summary.written += 1;
    }
    out.flush().map_err(EngineError::io(destination))?;

    info!(
        path = %destination.display(),
        done = summary.done,
        written = summary.written,
        "exported done jobs"
    );
    Ok(summary)
}

/// Read ids of jobs exported on earlier runs.
///
/// Ids are separated by whitespace or commas; lines starting with `#` are
/// comments.
pub fn load_exclusions(path: &Path) -> Result<HashSet<TaskId>, EngineError> {
    let text = std::fs::read_to_string(path).map_err(EngineError::io(path))?;
    parse_exclusions(&text)
}

fn parse_exclusions(text: &str) -> Result<HashSet<TaskId>, EngineError> {
    let mut ids = HashSet::new();
    for line in text.lines() {
        if line.trim_start().starts_with('#') {
            continue;
        }
        for token in line.split(|c: char| c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                continue;
            }
            ids.insert(token.parse::<TaskId>()?);
        }
    }
    Ok(ids)
}
