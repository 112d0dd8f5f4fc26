// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Retry directives: `retry([id1, id2, ...],newOpts={...})`.
//!
//! The same text is printed by the retry listing, pasted into the submission
//! tool, and fed back to register the retry, so rendering and parsing must
//! stay in step.
//!
//! Parsing is a bracket scan, not a grammar: ids come from between the first
//! `[` and the first `]`, options from between the first `{` and the first `}`
//! when the text mentions `newOpts`. Nested brackets are not supported.

use crate::error::ParseError;
use crate::job::TaskId;
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
#[path = "directive_tests.rs"]
mod tests;

/// Options suggested for jobs that need more resources on resubmission.
pub const RESOURCE_INCREASE_OPTS: &str = "'nFilesPerJob':2,'memory':4000";

/// Note stored for a retry registered without `newOpts`.
pub const RETRY_NOTE_PLACEHOLDER: &str = "-";

const OPTIONS_MARKER: &str = "newOpts";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryDirective {
    pub task_ids: Vec<TaskId>,
    /// Raw text between the braces of `newOpts={...}`.
    pub new_opts: Option<String>,
}

impl RetryDirective {
    pub fn new(task_ids: Vec<TaskId>) -> Self {
        Self { task_ids, new_opts: None }
    }

    pub fn with_opts(task_ids: Vec<TaskId>, new_opts: impl Into<String>) -> Self {
        Self { task_ids, new_opts: Some(new_opts.into()) }
    }

    /// Directive asking for more resources per job.
    pub fn with_resource_increase(task_ids: Vec<TaskId>) -> Self {
        Self::with_opts(task_ids, RESOURCE_INCREASE_OPTS)
    }

    /// Note recorded against each retried job.
    pub fn note(&self) -> &str {
        self.new_opts.as_deref().unwrap_or(RETRY_NOTE_PLACEHOLDER)
    }

    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let open = input
            .find('[')
            .ok_or_else(|| ParseError::MissingIdList { input: input.to_string() })?;
        let close = input
            .find(']')
            .ok_or_else(|| ParseError::MissingIdList { input: input.to_string() })?;
        if close < open {
            return Err(ParseError::MalformedIdList { input: input.to_string() });
        }

        let task_ids = input[open + 1..close]
            .split(',')
            .map(|token| {
                let token = token.trim();
                token
                    .parse::<i64>()
                    .map(TaskId)
                    .map_err(|_| ParseError::InvalidId { token: token.to_string() })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let new_opts = if input.contains(OPTIONS_MARKER) {
            let malformed = || ParseError::MalformedOptions { input: input.to_string() };
            let open = input.find('{').ok_or_else(malformed)?;
            let close = input.find('}').ok_or_else(malformed)?;
            if close < open {
                return Err(malformed());
            }
            Some(input[open + 1..close].to_string())
        } else {
            None
        };

        Ok(Self { task_ids, new_opts })
    }
}

impl FromStr for RetryDirective {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Formats ids as `[1, 2, 3]`.
pub fn format_id_list(ids: &[TaskId]) -> String {
    let inner = ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
    format!("[{}]", inner)
}

impl fmt::Display for RetryDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids = format_id_list(&self.task_ids);
        match &self.new_opts {
            Some(opts) => write!(f, "retry({},{}={{{}}})", ids, OPTIONS_MARKER, opts),
            None => write!(f, "retry({})", ids),
        }
    }
}
