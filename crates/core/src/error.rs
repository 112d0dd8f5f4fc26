// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors for the text inputs accepted from the submission tool and the CLI.

use thiserror::Error;

/// A malformed report line, retry directive, progress filter, or id list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Report line has fewer columns than the fixed layout needs.
    #[error("expected at least {expected} columns, found {found}: '{line}'")]
    MissingColumns { expected: usize, found: usize, line: String },

    /// Task id column is not an integer.
    #[error("invalid task id '{token}'")]
    InvalidTaskId { token: String },

    /// Progress column is not a percentage.
    #[error("invalid progress '{token}'")]
    InvalidProgress { token: String },

    /// No `[` ... `]` pair in a retry directive.
    #[error("no id list in '{input}'")]
    MissingIdList { input: String },

    /// Closing bracket precedes the opening one.
    #[error("malformed id list in '{input}'")]
    MalformedIdList { input: String },

    /// An entry of an id list is not an integer.
    #[error("invalid id '{token}' in id list")]
    InvalidId { token: String },

    /// `newOpts` present but without a `{` ... `}` pair.
    #[error("malformed newOpts in '{input}'")]
    MalformedOptions { input: String },

    /// Progress filter is not of the form `<T` or `>=T`.
    #[error("invalid progress filter '{input}' (expected '<T' or '>=T')")]
    InvalidProgressFilter { input: String },
}
