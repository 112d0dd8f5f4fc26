// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Obsolete targets: a single task id or a bracketed `<id, id, ...>` list.

use crate::error::ParseError;
use crate::job::TaskId;
use std::str::FromStr;

#[cfg(test)]
#[path = "obsolete_tests.rs"]
mod tests;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObsoleteTarget {
    Single(TaskId),
    Many(Vec<TaskId>),
}

impl ObsoleteTarget {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.starts_with('<') {
            Self::parse_list(input).map(ObsoleteTarget::Many)
        } else {
            parse_id(input).map(ObsoleteTarget::Single)
        }
    }

    /// Ids of a comma-separated list, dropping one leading `<` and one
    /// trailing `>` when present.
    pub fn parse_list(input: &str) -> Result<Vec<TaskId>, ParseError> {
        let inner = input.strip_prefix('<').unwrap_or(input);
        let inner = inner.strip_suffix('>').unwrap_or(inner);
        inner.split(',').map(parse_id).collect()
    }

    pub fn ids(&self) -> &[TaskId] {
        match self {
            ObsoleteTarget::Single(id) => std::slice::from_ref(id),
            ObsoleteTarget::Many(ids) => ids,
        }
    }
}

impl FromStr for ObsoleteTarget {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_id(token: &str) -> Result<TaskId, ParseError> {
    let token = token.trim();
    token
        .parse::<i64>()
        .map(TaskId)
        .map_err(|_| ParseError::InvalidId { token: token.to_string() })
}
