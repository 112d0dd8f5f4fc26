// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{JobRecord, JobStatus, ReportLine, TaskId};

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for report and record types.
pub mod strategies {
    use crate::{JobStatus, ReportLine, TaskId};
    use proptest::prelude::*;

    pub fn arb_status() -> impl Strategy<Value = JobStatus> {
        prop_oneof![
            Just(JobStatus::Done),
            Just(JobStatus::Running),
            Just(JobStatus::Pending),
            Just(JobStatus::Scouting),
            Just(JobStatus::Finished),
            Just(JobStatus::Failed),
            Just(JobStatus::Exhausted),
            Just(JobStatus::Broken),
            "[a-z]{1,10}".prop_map(JobStatus::from),
        ]
    }

    pub fn arb_taskname() -> impl Strategy<Value = String> {
        "[a-z0-9_]{1,8}(\\.[a-zA-Z0-9_]{1,8}){2,5}"
    }

    pub fn arb_report_line() -> impl Strategy<Value = ReportLine> {
        (any::<i64>(), arb_status(), 0.0f64..=100.0, arb_taskname()).prop_map(
            |(id, status, progress, taskname)| ReportLine {
                id: TaskId(id),
                status,
                progress,
                taskname,
            },
        )
    }
}

// ── Factory functions ───────────────────────────────────────────────────

/// Report line for a task in the `user.test.mc.<id>.task` family.
pub fn report_line(id: i64, status: &str, progress: f64) -> ReportLine {
    ReportLine {
        id: TaskId(id),
        status: JobStatus::from(status),
        progress,
        taskname: format!("user.test.mc.{}.task", id),
    }
}

pub fn job(id: i64, status: &str, progress: f64) -> JobRecord {
    JobRecord::builder()
        .id(id)
        .status(status)
        .progress(progress)
        .taskname(format!("user.test.mc.{}.task", id))
        .build()
}
