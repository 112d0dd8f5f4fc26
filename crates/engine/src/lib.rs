// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gb-engine: Reconciles status reports into the job table and reports on it

mod error;
pub mod export;
pub mod process;
pub mod query;
pub mod reconcile;

pub use error::EngineError;
pub use export::{export_done_jobs, load_exclusions, ExportSummary};
pub use process::{annotate_processes, AnnotateSummary, ProcessLookup};
pub use query::{
    ids_by_status, jobs_with_status_not, list_retries, Bucket, RetryReport, SuggestedAction,
    Suggestion, PROGRESS_THRESHOLD,
};
pub use reconcile::{
    apply_report, import_report, import_report_file, mark_multi_obsolete, mark_obsolete,
    mark_target_obsolete, register_retry, ApplyOutcome, ImportSummary,
};
