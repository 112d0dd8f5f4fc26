// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Progress thresholds used to split a status bucket.
//!
//! Textual convention: `<T` is strictly below `T`; `>T` and `>=T` are both at
//! or above `T`. Any text before the operator is ignored, so `progress<60`
//! reads the same as `<60`.

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressFilter {
    Below(f64),
    AtLeast(f64),
}

impl ProgressFilter {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidProgressFilter { input: input.to_string() };
        let (ctor, rest): (fn(f64) -> Self, &str) = if let Some(pos) = input.find('<') {
            (ProgressFilter::Below, &input[pos + 1..])
        } else if let Some(pos) = input.find('>') {
            let rest = &input[pos + 1..];
            (ProgressFilter::AtLeast, rest.strip_prefix('=').unwrap_or(rest))
        } else {
            return Err(invalid());
        };
        let threshold = rest.trim().parse::<f64>().map_err(|_| invalid())?;
        Ok(ctor(threshold))
    }

    pub fn threshold(&self) -> f64 {
        match self {
            ProgressFilter::Below(t) | ProgressFilter::AtLeast(t) => *t,
        }
    }

    pub fn matches(&self, progress: f64) -> bool {
        match self {
            ProgressFilter::Below(t) => progress < *t,
            ProgressFilter::AtLeast(t) => progress >= *t,
        }
    }
}

impl FromStr for ProgressFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ProgressFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressFilter::Below(t) => write!(f, "<{}", t),
            ProgressFilter::AtLeast(t) => write!(f, ">={}", t),
        }
    }
}
