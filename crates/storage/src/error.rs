// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;
use thiserror::Error;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("table {0} already exists")]
    TableExists(&'static str),

    #[error("table {0} does not exist (run `gb init` first)")]
    MissingTable(&'static str),

    #[error("failed to create database directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("sqlite: {0}")]
    Sql(rusqlite::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        if is_missing_table(&err) {
            StoreError::MissingTable(crate::schema::TABLE_NAME)
        } else {
            StoreError::Sql(err)
        }
    }
}

/// SQLite reports an unknown table as a generic `SQLITE_ERROR` from statement
/// preparation; only the message tells it apart.
fn is_missing_table(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(failure, Some(message)) => {
            failure.extended_code == rusqlite::ffi::SQLITE_ERROR
                && message.starts_with("no such table")
        }
        _ => false,
    }
}
