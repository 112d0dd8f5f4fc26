// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-category annotation from a dataset-id lookup file.
//!
//! Lookup lines hold a dataset id and a process label, separated by a tab
//! when the line has one and by spaces otherwise:
//!
//! ```text
//! 361107	Zmumu
//! 410470 ttbar
//! ```

use std::collections::HashMap;
use std::path::Path;

use gb_storage::JobStore;
use tracing::{debug, info, warn};

use crate::EngineError;

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessLookup {
    labels: HashMap<String, String>,
}

impl ProcessLookup {
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let text = std::fs::read_to_string(path).map_err(EngineError::io(path))?;
        Ok(Self::parse(&text))
    }

    /// Build the table from lookup text. Lines without two columns are
    /// skipped; a repeated dataset id keeps its last label.
    pub fn parse(text: &str) -> Self {
        let mut labels = HashMap::new();
        for (index, line) in text.lines().enumerate() {
            let delimiter = if line.contains('\t') { '\t' } else { ' ' };
            let mut fields = line.split(delimiter).map(str::trim).filter(|f| !f.is_empty());
            match (fields.next(), fields.next()) {
                (Some(dsid), Some(label)) => {
                    labels.insert(dsid.to_string(), label.to_string());
                }
                (None, _) => {}
                (Some(_), None) => {
                    warn!(line = index + 1, "skipping lookup line without a process label");
                }
            }
        }
        Self { labels }
    }

    pub fn get(&self, dataset_id: &str) -> Option<&str> {
        self.labels.get(dataset_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotateSummary {
    pub updated: usize,
    /// Dataset id not in the lookup.
    pub unmatched: usize,
    /// Taskname has no third dot-separated segment.
    pub no_dataset_id: usize,
}

/// Set `process` on every job (obsoleted ones included) whose dataset id is
/// in the lookup. Other jobs keep their current value.
pub fn annotate_processes(
    store: &JobStore,
    lookup: &ProcessLookup,
) -> Result<AnnotateSummary, EngineError> {
    let mut summary = AnnotateSummary::default();
    for job in store.all()? {
        let Some(dataset_id) = job.dataset_id() else {
            debug!(task_id = %job.id, taskname = %job.taskname, "no dataset id in taskname");
            summary.no_dataset_id += 1;
            continue;
        };
        match lookup.get(dataset_id) {
            Some(process) => {
                store.set_process(job.id, process)?;
                info!(task_id = %job.id, process, "set process");
                summary.updated += 1;
            }
            None => {
                debug!(task_id = %job.id, dataset_id, "dataset id not in lookup");
                summary.unmatched += 1;
            }
        }
    }
    Ok(summary)
}
