// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gb-storage: SQLite table of job records

mod error;
mod schema;
mod store;

pub use error::StoreError;
pub use schema::TABLE_NAME;
pub use store::JobStore;
