// crates/shared-kernel/src/value_objects/database.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Index of a logical database inside one store instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatabaseId(u64);

impl DatabaseId {
    #[inline]
    pub const fn new(index: u64) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> u64 {
        self.0
    }
}

impl From<u64> for DatabaseId {
    fn from(index: u64) -> Self {
        Self::new(index)
    }
}

impl fmt::Display for DatabaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "db{}", self.0)
    }
}

impl FromStr for DatabaseId {
    type Err = String;

    /// Accepts either `3` or `db3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix("db").unwrap_or(trimmed);
        digits
            .parse::<u64>()
            .map(Self::new)
            .map_err(|e| format!("invalid database index '{s}': {e}"))
    }
}

/// Approximate number of keys a database reports holding.
///
/// Only used as a sizing hint for enumeration; the keys actually returned
/// decide how many observations a pass consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCountHint(u64);

impl KeyCountHint {
    #[inline]
    pub const fn new(count: u64) -> Self {
        Self(count)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for KeyCountHint {
    fn from(count: u64) -> Self {
        Self::new(count)
    }
}
