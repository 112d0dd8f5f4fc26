// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Raw reads and writes against the job table.
//!
//! Every write runs as its own statement outside any transaction, so it is
//! committed as soon as it returns. Status and progress values are always
//! bound as parameters.

use std::path::Path;

use gb_core::{JobRecord, JobStatus, ProgressFilter, TaskId};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

use crate::schema::{self, TABLE_NAME};
use crate::StoreError;

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

const SELECT_ALL: &str = "SELECT id, status, progress, taskname, obsoleted, retries, process, note \
     FROM JOB ORDER BY id";
const SELECT_ONE: &str = "SELECT id, status, progress, taskname, obsoleted, retries, process, note \
     FROM JOB WHERE id = ?1";
const SELECT_ACTIVE: &str = "SELECT id, status, progress, taskname, obsoleted, retries, process, note \
     FROM JOB WHERE obsoleted = 0 ORDER BY id";
const SELECT_ACTIVE_WITH_STATUS: &str =
    "SELECT id, status, progress, taskname, obsoleted, retries, process, note \
     FROM JOB WHERE status = ?1 AND obsoleted = 0 ORDER BY id";
const SELECT_ACTIVE_WITHOUT_STATUS: &str =
    "SELECT id, status, progress, taskname, obsoleted, retries, process, note \
     FROM JOB WHERE status != ?1 AND obsoleted = 0 ORDER BY id";

const IDS_WITH_STATUS: &str =
    "SELECT id, progress FROM JOB WHERE status = ?1 AND obsoleted = 0 ORDER BY id";
const IDS_WITH_STATUS_BELOW: &str =
    "SELECT id, progress FROM JOB WHERE status = ?1 AND obsoleted = 0 AND progress < ?2 ORDER BY id";
const IDS_WITH_STATUS_AT_LEAST: &str =
    "SELECT id, progress FROM JOB WHERE status = ?1 AND obsoleted = 0 AND progress >= ?2 ORDER BY id";

/// Handle to the job table. Pass it to every operation that reads or writes.
#[derive(Debug)]
pub struct JobStore {
    conn: Connection,
}

impl JobStore {
    /// Open (or create) the database file, creating its parent directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        debug!(path = %path.display(), "opening job database");
        Ok(Self { conn: Connection::open(path)? })
    }

    /// Private database that lives as long as the handle.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Ok(Self { conn: Connection::open_in_memory()? })
    }

    pub fn table_exists(&self) -> Result<bool, StoreError> {
        let count: i64 =
            self.conn.query_row(schema::TABLE_EXISTS, params![TABLE_NAME], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// Create the job table. Fails without touching anything if it exists.
    pub fn create_schema(&self) -> Result<(), StoreError> {
        if self.table_exists()? {
            return Err(StoreError::TableExists(TABLE_NAME));
        }
        self.conn.execute_batch(schema::CREATE_TABLE)?;
        debug!(table = TABLE_NAME, "created table");
        Ok(())
    }

    /// Drop the job table and every record in it. No-op if absent.
    pub fn drop_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(schema::DROP_TABLE)?;
        debug!(table = TABLE_NAME, "dropped table");
        Ok(())
    }

    pub fn get(&self, id: TaskId) -> Result<Option<JobRecord>, StoreError> {
        Ok(self.conn.query_row(SELECT_ONE, params![id.get()], job_from_row).optional()?)
    }

    pub fn insert(&self, job: &JobRecord) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO JOB VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                job.id.get(),
                job.status.as_str(),
                job.progress,
                job.taskname,
                job.obsoleted,
                job.retries,
                job.process,
                job.note,
            ],
        )?;
        Ok(())
    }

    /// Overwrite status and progress. Returns the number of rows touched.
    pub fn update_status(
        &self,
        id: TaskId,
        status: &JobStatus,
        progress: f64,
    ) -> Result<usize, StoreError> {
        Ok(self.conn.execute(
            "UPDATE JOB SET status = ?1, progress = ?2 WHERE id = ?3",
            params![status.as_str(), progress, id.get()],
        )?)
    }

    /// Current retry count, `None` when no record has this id.
    pub fn retries(&self, id: TaskId) -> Result<Option<u32>, StoreError> {
        Ok(self
            .conn
            .query_row("SELECT retries FROM JOB WHERE id = ?1", params![id.get()], |row| row.get(0))
            .optional()?)
    }

    /// Store a new retry count and note and flag the job as retried.
    pub fn record_retry(&self, id: TaskId, retries: u32, note: &str) -> Result<usize, StoreError> {
        Ok(self.conn.execute(
            "UPDATE JOB SET retries = ?1, note = ?2, status = ?3 WHERE id = ?4",
            params![retries, note, JobStatus::Retried.as_str(), id.get()],
        )?)
    }

    pub fn set_obsoleted(&self, id: TaskId) -> Result<usize, StoreError> {
        Ok(self
            .conn
            .execute("UPDATE JOB SET obsoleted = 1 WHERE id = ?1", params![id.get()])?)
    }

    pub fn set_process(&self, id: TaskId, process: &str) -> Result<usize, StoreError> {
        Ok(self
            .conn
            .execute("UPDATE JOB SET process = ?1 WHERE id = ?2", params![process, id.get()])?)
    }

    /// Every record, obsoleted ones included.
    pub fn all(&self) -> Result<Vec<JobRecord>, StoreError> {
        self.collect(SELECT_ALL, params![])
    }

    pub fn non_obsoleted(&self) -> Result<Vec<JobRecord>, StoreError> {
        self.collect(SELECT_ACTIVE, params![])
    }

    /// Non-obsoleted records with exactly this status.
    pub fn with_status(&self, status: &JobStatus) -> Result<Vec<JobRecord>, StoreError> {
        self.collect(SELECT_ACTIVE_WITH_STATUS, params![status.as_str()])
    }

    /// Non-obsoleted records with any other status.
    pub fn with_status_not(&self, status: &JobStatus) -> Result<Vec<JobRecord>, StoreError> {
        self.collect(SELECT_ACTIVE_WITHOUT_STATUS, params![status.as_str()])
    }

    /// Ids and progress of non-obsoleted records with this status.
    pub fn ids_by_status(
        &self,
        status: &JobStatus,
        filter: Option<ProgressFilter>,
    ) -> Result<Vec<(TaskId, f64)>, StoreError> {
        let map = |row: &Row<'_>| -> rusqlite::Result<(TaskId, f64)> {
            Ok((TaskId(row.get(0)?), row.get(1)?))
        };
        let rows = match filter {
            None => {
                let mut stmt = self.conn.prepare(IDS_WITH_STATUS)?;
                let rows = stmt.query_map(params![status.as_str()], map)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
            Some(filter) => {
                let sql = match filter {
                    ProgressFilter::Below(_) => IDS_WITH_STATUS_BELOW,
                    ProgressFilter::AtLeast(_) => IDS_WITH_STATUS_AT_LEAST,
                };
                let mut stmt = self.conn.prepare(sql)?;
                let rows = stmt.query_map(params![status.as_str(), filter.threshold()], map)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
        };
        Ok(rows)
    }

    fn collect(
        &self,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<JobRecord>, StoreError> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, job_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

fn job_from_row(row: &Row<'_>) -> rusqlite::Result<JobRecord> {
    let status: String = row.get(1)?;
    Ok(JobRecord {
        id: TaskId(row.get(0)?),
        status: JobStatus::from(status),
        progress: row.get(2)?,
        taskname: row.get(3)?,
        obsoleted: row.get(4)?,
        retries: row.get(5)?,
        process: row.get(6)?,
        note: row.get(7)?,
    })
}
