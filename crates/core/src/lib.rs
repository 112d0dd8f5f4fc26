// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gb-core: Job records and the text formats exchanged with the submission tool

pub mod directive;
pub mod error;
pub mod filter;
pub mod job;
pub mod obsolete;
pub mod report;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use directive::{RetryDirective, RESOURCE_INCREASE_OPTS, RETRY_NOTE_PLACEHOLDER};
pub use error::ParseError;
pub use filter::ProgressFilter;
#[cfg(any(test, feature = "test-support"))]
pub use job::JobRecordBuilder;
pub use job::{JobRecord, JobStatus, TaskId, NOTE_PLACEHOLDER, PROCESS_PLACEHOLDER};
pub use obsolete::ObsoleteTarget;
pub use report::ReportLine;
