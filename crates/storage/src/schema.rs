// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job table definition.

pub const TABLE_NAME: &str = "JOB";

/// Column order is relied on by [`crate::store`] row mapping and inserts.
pub(crate) const CREATE_TABLE: &str = "
    CREATE TABLE JOB (
        id INTEGER NOT NULL PRIMARY KEY,
        status TEXT,
        progress REAL,
        taskname TEXT,
        obsoleted INTEGER,
        retries INTEGER,
        process TEXT,
        note TEXT
    )";

pub(crate) const DROP_TABLE: &str = "DROP TABLE IF EXISTS JOB";

pub(crate) const TABLE_EXISTS: &str =
    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1";
