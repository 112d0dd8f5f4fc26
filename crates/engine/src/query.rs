// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status queries and the retry listing.
//!
//! The listing's directive lines are meant to be pasted into the submission
//! tool and later back into `gb update`, so they use [`RetryDirective`]'s
//! rendering verbatim.

use std::fmt;

use gb_core::{JobRecord, JobStatus, ProgressFilter, RetryDirective, TaskId};
use gb_storage::JobStore;

use crate::EngineError;

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;

/// Progress that splits finished jobs into "retry with more resources" and
/// "plain retry".
pub const PROGRESS_THRESHOLD: f64 = 60.0;

/// Ids of non-obsoleted jobs with this status, optionally narrowed by progress.
pub fn ids_by_status(
    store: &JobStore,
    status: &JobStatus,
    filter: Option<ProgressFilter>,
) -> Result<Vec<TaskId>, EngineError> {
    Ok(store.ids_by_status(status, filter)?.into_iter().map(|(id, _)| id).collect())
}

/// Non-obsoleted jobs with any status other than this one.
pub fn jobs_with_status_not(
    store: &JobStore,
    status: &JobStatus,
) -> Result<Vec<JobRecord>, EngineError> {
    Ok(store.with_status_not(status)?)
}

/// Status bucket a suggestion was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    FinishedLow,
    FinishedHigh,
    Failed,
    Exhausted,
    Broken,
}

impl Bucket {
    fn heading(&self, count: usize) -> String {
        match self {
            Bucket::FinishedLow => format!("{} finished with < {}%:", count, PROGRESS_THRESHOLD),
            Bucket::FinishedHigh => format!("{} finished with >= {}%:", count, PROGRESS_THRESHOLD),
            Bucket::Failed => format!("{} failed:", count),
            Bucket::Exhausted => format!("{} exhausted:", count),
            Bucket::Broken => format!("{} broken and need resubmitting:", count),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestedAction {
    Retry(RetryDirective),
    /// Cannot be retried; the tasks must be submitted again by hand.
    Resubmit(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub bucket: Bucket,
    pub action: SuggestedAction,
}

impl Suggestion {
    pub fn count(&self) -> usize {
        match &self.action {
            SuggestedAction::Retry(directive) => directive.task_ids.len(),
            SuggestedAction::Resubmit(names) => names.len(),
        }
    }
}

/// Jobs that are not done, split by whether the grid is still on them, plus
/// what to do about the ones that need action.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryReport {
    pub in_flight: Vec<JobRecord>,
    pub needs_action: Vec<JobRecord>,
    pub suggestions: Vec<Suggestion>,
}

pub fn list_retries(store: &JobStore) -> Result<RetryReport, EngineError> {
    let (in_flight, needs_action): (Vec<_>, Vec<_>) =
        jobs_with_status_not(store, &JobStatus::Done)?
            .into_iter()
            .partition(|job| job.status.is_in_flight());

    let mut suggestions = Vec::new();
    let mut suggest = |bucket: Bucket, ids: Vec<TaskId>, more_resources: bool| {
        if ids.is_empty() {
            return;
        }
        let directive = if more_resources {
            RetryDirective::with_resource_increase(ids)
        } else {
            RetryDirective::new(ids)
        };
        suggestions.push(Suggestion { bucket, action: SuggestedAction::Retry(directive) });
    };

    let finished = JobStatus::Finished;
    suggest(
        Bucket::FinishedLow,
        ids_by_status(store, &finished, Some(ProgressFilter::Below(PROGRESS_THRESHOLD)))?,
        true,
    );
    suggest(
        Bucket::FinishedHigh,
        ids_by_status(store, &finished, Some(ProgressFilter::AtLeast(PROGRESS_THRESHOLD)))?,
        false,
    );
    suggest(Bucket::Failed, ids_by_status(store, &JobStatus::Failed, None)?, true);
    suggest(Bucket::Exhausted, ids_by_status(store, &JobStatus::Exhausted, None)?, true);

    let broken: Vec<String> =
        store.with_status(&JobStatus::Broken)?.into_iter().map(|job| job.taskname).collect();
    if !broken.is_empty() {
        suggestions
            .push(Suggestion { bucket: Bucket::Broken, action: SuggestedAction::Resubmit(broken) });
    }

    Ok(RetryReport { in_flight, needs_action, suggestions })
}

impl fmt::Display for RetryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Status of jobs which are not done:")?;
        writeln!(f, "  - Still running:")?;
        for job in &self.in_flight {
            writeln!(f, "{}", job)?;
        }
        writeln!(f)?;
        writeln!(f, "  - Not running:")?;
        for job in &self.needs_action {
            writeln!(f, "{}", job)?;
        }
        writeln!(f)?;
        writeln!(f, "SUGGESTIONS:")?;

        for suggestion in &self.suggestions {
            writeln!(f)?;
            writeln!(f, "{}", suggestion.bucket.heading(suggestion.count()))?;
            match &suggestion.action {
                SuggestedAction::Retry(directive) => writeln!(f, "{}", directive)?,
                SuggestedAction::Resubmit(names) => {
                    for name in names {
                        writeln!(f, "  {}", name)?;
                    }
                }
            }
        }
        Ok(())
    }
}
