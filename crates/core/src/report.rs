// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status report lines printed by the submission tool.
//!
//! Columns are separated by runs of spaces. Only four are read:
//!
//! | column | field    | example              |
//! |--------|----------|----------------------|
//! | 0      | task id  | `32639261`           |
//! | 2      | status   | `finished`           |
//! | 3      | progress | `62.3%`              |
//! | 4      | taskname | `user.x.mc.100.task` |
//!
//! Status text is not validated. Progress must be a finite number.

use crate::error::ParseError;
use crate::job::{JobStatus, TaskId};
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;

const ID_COLUMN: usize = 0;
const STATUS_COLUMN: usize = 2;
const PROGRESS_COLUMN: usize = 3;
const TASKNAME_COLUMN: usize = 4;

/// One parsed report line.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub id: TaskId,
    pub status: JobStatus,
    pub progress: f64,
    pub taskname: String,
}

impl ReportLine {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let cols: Vec<&str> = line.split(' ').filter(|t| !t.is_empty()).collect();
        if cols.len() <= TASKNAME_COLUMN {
            return Err(ParseError::MissingColumns {
                expected: TASKNAME_COLUMN + 1,
                found: cols.len(),
                line: line.to_string(),
            });
        }

        let id = cols[ID_COLUMN]
            .parse::<i64>()
            .map(TaskId)
            .map_err(|_| ParseError::InvalidTaskId { token: cols[ID_COLUMN].to_string() })?;
        // SQLite stores NaN as NULL, so only finite percentages are accepted.
        let progress = cols[PROGRESS_COLUMN]
            .trim_matches('%')
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| ParseError::InvalidProgress {
                token: cols[PROGRESS_COLUMN].to_string(),
            })?;

        Ok(Self {
            id,
            status: JobStatus::from(cols[STATUS_COLUMN]),
            progress,
            taskname: cols[TASKNAME_COLUMN].to_string(),
        })
    }
}

impl FromStr for ReportLine {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders in the tool's column layout; column 1 is not tracked and prints as `-`.
impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  -  {}  {}%  {}", self.id, self.status, self.progress, self.taskname)
    }
}
