//! Stable arena key for catalog records.
//!
//! A `BookKey` identifies a book record independently of its current
//! position in the catalog list. Positional indices shift when a record is
//! deleted; keys never do. Members' borrowed lists store keys, so the
//! catalog record and every borrowed-list entry resolve to the same
//! `Book` — mutating `available_copies` is visible through both.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a book record in the catalog arena.
///
/// Keys are assigned by the catalog in insertion order and are never
/// reused, including across a save/load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookKey(u64);

impl BookKey {
    /// Creates a key from its raw value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw key value.
    #[must_use]
    pub const fn as_raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BookKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
