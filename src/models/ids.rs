//! Expense identifiers
//!
//! Ids are integers derived from the creation time in milliseconds. The
//! generator falls back to a counter whenever the clock would hand out an id
//! that is not strictly greater than the previous one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Wrap a raw id
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw integer value
    pub const fn raw(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

/// Hands out strictly increasing ids for one process
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    /// Create a generator that has issued nothing yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator that will never hand out any of `existing`
    pub fn seeded<'a>(existing: impl IntoIterator<Item = &'a ExpenseId>) -> Self {
        Self {
            last: existing.into_iter().map(|id| id.0).max(),
        }
    }

    /// Next id for something created at `now`
    pub fn next_at(&mut self, now: DateTime<Utc>) -> ExpenseId {
        let tick = now.timestamp_millis();
        let id = match self.last {
            Some(last) if tick <= last => last + 1,
            _ => tick,
        };
        self.last = Some(id);
        ExpenseId(id)
    }
}
