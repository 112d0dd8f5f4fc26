// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Applying status reports, retry directives, and obsolete marks to the
//! job table.
//!
//! Nothing here is transactional. Each row write commits on its own, so a
//! failure partway through a file or id list leaves earlier rows written.

use std::io::BufRead;
use std::path::Path;

use gb_core::{JobRecord, ObsoleteTarget, ReportLine, RetryDirective, TaskId};
use gb_storage::JobStore;
use tracing::{debug, info, warn};

use crate::EngineError;

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;

/// What a single report line did to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Inserted,
    Updated,
    /// Record is already done; the report was ignored.
    LeftDone,
    /// Taskname does not contain the name filter.
    Filtered,
}

/// Counts from importing a whole report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub inserted: usize,
    pub updated: usize,
    pub left_done: usize,
    pub filtered: usize,
    pub malformed: usize,
}

impl ImportSummary {
    fn record(&mut self, outcome: ApplyOutcome) {
        match outcome {
            ApplyOutcome::Inserted => self.inserted += 1,
            ApplyOutcome::Updated => self.updated += 1,
            ApplyOutcome::LeftDone => self.left_done += 1,
            ApplyOutcome::Filtered => self.filtered += 1,
        }
    }
}

/// Insert the job if unseen, otherwise update it unless it is already done.
///
/// An empty `name_filter` accepts every taskname.
pub fn apply_report(
    store: &JobStore,
    report: &ReportLine,
    name_filter: &str,
) -> Result<ApplyOutcome, EngineError> {
    if !name_filter.is_empty() && !report.taskname.contains(name_filter) {
        debug!(task_id = %report.id, taskname = %report.taskname, "skipping unrelated task");
        return Ok(ApplyOutcome::Filtered);
    }

    match store.get(report.id)? {
        None => {
            let job =
                JobRecord::new(report.id, report.status.clone(), report.progress, &report.taskname);
            store.insert(&job)?;
            info!(
                task_id = %report.id,
                status = %report.status,
                progress = report.progress,
                "inserted job"
            );
            Ok(ApplyOutcome::Inserted)
        }
        Some(existing) if existing.status.is_terminal() => {
            debug!(task_id = %report.id, "job already done, ignoring report");
            Ok(ApplyOutcome::LeftDone)
        }
        Some(_) => {
            store.update_status(report.id, &report.status, report.progress)?;
            info!(
                task_id = %report.id,
                status = %report.status,
                progress = report.progress,
                "updated job"
            );
            Ok(ApplyOutcome::Updated)
        }
    }
}

/// Apply every line of a report in order.
///
/// Lines that do not parse, including ones that are not UTF-8, are logged
/// and counted, then skipped. Read and storage errors stop the import; lines
/// already applied stay applied.
pub fn import_report(
    store: &JobStore,
    reader: impl BufRead,
    name_filter: &str,
    source: &Path,
) -> Result<ImportSummary, EngineError> {
    let mut summary = ImportSummary::default();
    for (index, raw) in reader.split(b'\n').enumerate() {
        let raw = raw.map_err(EngineError::io(source))?;
        let line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                warn!(line = index + 1, error = %e, "skipping report line that is not UTF-8");
                summary.malformed += 1;
                continue;
            }
        };
        let report = match ReportLine::parse(&line) {
            Ok(report) => report,
            Err(e) => {
                warn!(line = index + 1, error = %e, "skipping malformed report line");
                summary.malformed += 1;
                continue;
            }
        };
        summary.record(apply_report(store, &report, name_filter)?);
    }
    Ok(summary)
}

pub fn import_report_file(
    store: &JobStore,
    path: &Path,
    name_filter: &str,
) -> Result<ImportSummary, EngineError> {
    let file = std::fs::File::open(path).map_err(EngineError::io(path))?;
    import_report(store, std::io::BufReader::new(file), name_filter, path)
}

/// Register a retry for every id in the directive.
///
/// Each id gets `retries + 1`, the directive's note, and status `retried`.
/// Stops at the first unknown id with [`EngineError::NotFound`]; ids before
/// it keep their update.
pub fn register_retry(store: &JobStore, directive: &str) -> Result<Vec<TaskId>, EngineError> {
    let directive = RetryDirective::parse(directive)?;
    let note = directive.note();

    for &id in &directive.task_ids {
        let retries = store.retries(id)?.ok_or(EngineError::NotFound { id })?;
        store.record_retry(id, retries + 1, note)?;
        info!(task_id = %id, retries = retries + 1, note, "registered retry");
    }
    Ok(directive.task_ids)
}

/// Flag a job as superseded. Unknown ids are not an error.
pub fn mark_obsolete(store: &JobStore, id: TaskId) -> Result<(), EngineError> {
    if store.set_obsoleted(id)? == 0 {
        debug!(task_id = %id, "no job to mark obsoleted");
    } else {
        info!(task_id = %id, "marked obsoleted");
    }
    Ok(())
}

/// Mark each id of a `<id, id, ...>` list, in order.
pub fn mark_multi_obsolete(store: &JobStore, list: &str) -> Result<Vec<TaskId>, EngineError> {
    let ids = ObsoleteTarget::parse_list(list)?;
    mark_all_obsolete(store, &ids)?;
    Ok(ids)
}

/// Mark the ids of an already-parsed target, in order.
pub fn mark_target_obsolete(
    store: &JobStore,
    target: &ObsoleteTarget,
) -> Result<(), EngineError> {
    mark_all_obsolete(store, target.ids())
}

fn mark_all_obsolete(store: &JobStore, ids: &[TaskId]) -> Result<(), EngineError> {
    for &id in ids {
        mark_obsolete(store, id)?;
    }
    Ok(())
}
