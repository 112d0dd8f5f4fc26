// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task identifier, job status, and the persisted job record.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;

/// Process category given to new records until the annotation pass runs.
pub const PROCESS_PLACEHOLDER: &str = "-";

/// Note given to new records until a retry is registered.
pub const NOTE_PLACEHOLDER: &str = "None";

/// Task identifier assigned by the submission tool.
///
/// Immutable once a record exists for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl TaskId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(TaskId)
            .map_err(|_| ParseError::InvalidTaskId { token: s.to_string() })
    }
}

impl From<i64> for TaskId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Status reported by the submission tool.
///
/// The set is open: anything the tool prints is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    Done,
    Running,
    Pending,
    Scouting,
    Retried,
    Finished,
    Failed,
    Exhausted,
    Broken,
    Other(String),
}

impl JobStatus {
    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::Done => "done",
            JobStatus::Running => "running",
            JobStatus::Pending => "pending",
            JobStatus::Scouting => "scouting",
            JobStatus::Retried => "retried",
            JobStatus::Finished => "finished",
            JobStatus::Failed => "failed",
            JobStatus::Exhausted => "exhausted",
            JobStatus::Broken => "broken",
            JobStatus::Other(s) => s,
        }
    }

    /// Report updates never overwrite a terminal record.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Done)
    }

    /// Still being worked on by the grid; nothing to do yet.
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            JobStatus::Running | JobStatus::Pending | JobStatus::Scouting | JobStatus::Retried
        )
    }
}

impl From<&str> for JobStatus {
    fn from(s: &str) -> Self {
        match s {
            "done" => JobStatus::Done,
            "running" => JobStatus::Running,
            "pending" => JobStatus::Pending,
            "scouting" => JobStatus::Scouting,
            "retried" => JobStatus::Retried,
            "finished" => JobStatus::Finished,
            "failed" => JobStatus::Failed,
            "exhausted" => JobStatus::Exhausted,
            "broken" => JobStatus::Broken,
            other => JobStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for JobStatus {
    fn from(s: String) -> Self {
        JobStatus::from(s.as_str())
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        match status {
            JobStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the job table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: TaskId,
    pub status: JobStatus,
    /// Percent complete, 0–100, as last reported.
    pub progress: f64,
    /// Full dotted task name from the submission tool.
    pub taskname: String,
    /// Superseded by a resubmission.
    pub obsoleted: bool,
    pub retries: u32,
    pub process: String,
    pub note: String,
}

impl JobRecord {
    /// Record for a task seen for the first time.
    pub fn new(
        id: TaskId,
        status: JobStatus,
        progress: f64,
        taskname: impl Into<String>,
    ) -> Self {
        Self {
            id,
            status,
            progress,
            taskname: taskname.into(),
            obsoleted: false,
            retries: 0,
            process: PROCESS_PLACEHOLDER.to_string(),
            note: NOTE_PLACEHOLDER.to_string(),
        }
    }

    /// Dataset id embedded in the task name (third dot-separated segment).
    pub fn dataset_id(&self) -> Option<&str> {
        self.taskname.split('.').nth(2)
    }
}

/// Tuple-like row rendering used by the dump and retry listings:
/// `(id, 'status', progress, 'taskname', obsoleted, retries, 'process', 'note')`
impl fmt::Display for JobRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, '{}', {:?}, '{}', {}, {}, '{}', '{}')",
            self.id,
            self.status,
            self.progress,
            self.taskname,
            u8::from(self.obsoleted),
            self.retries,
            self.process,
            self.note
        )
    }
}

/// Test builder for [`JobRecord`].
#[cfg(any(test, feature = "test-support"))]
pub struct JobRecordBuilder {
    record: JobRecord,
}

#[cfg(any(test, feature = "test-support"))]
impl Default for JobRecordBuilder {
    fn default() -> Self {
        Self {
            record: JobRecord::new(TaskId(1), JobStatus::Running, 0.0, "user.test.mc.000001.task"),
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
impl JobRecordBuilder {
    pub fn id(mut self, id: i64) -> Self {
        self.record.id = TaskId(id);
        self
    }

    pub fn status(mut self, status: impl Into<JobStatus>) -> Self {
        self.record.status = status.into();
        self
    }

    pub fn progress(mut self, progress: f64) -> Self {
        self.record.progress = progress;
        self
    }

    pub fn taskname(mut self, taskname: impl Into<String>) -> Self {
        self.record.taskname = taskname.into();
        self
    }

    pub fn obsoleted(mut self, obsoleted: bool) -> Self {
        self.record.obsoleted = obsoleted;
        self
    }

    pub fn retries(mut self, retries: u32) -> Self {
        self.record.retries = retries;
        self
    }

    pub fn process(mut self, process: impl Into<String>) -> Self {
        self.record.process = process.into();
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.record.note = note.into();
        self
    }

    pub fn build(self) -> JobRecord {
        self.record
    }
}

#[cfg(any(test, feature = "test-support"))]
impl JobRecord {
    pub fn builder() -> JobRecordBuilder {
        JobRecordBuilder::default()
    }
}
