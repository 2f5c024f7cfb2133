//! In-memory registries for the Bookstack library system.
//!
//! Two list-backed collections make up the core:
//! - [`BookRegistry`] owns the catalog: an insertion-ordered arena of book
//!   records addressed publicly by positional index and internally by
//!   stable [`BookKey`].
//! - [`MemberRegistry`] owns the people and the borrowing state
//!   transition: a member may hold at most three distinct books, and a
//!   successful borrow/return mutates `available_copies` on the shared
//!   catalog record.
//!
//! Positional indices are the public addressing scheme and are *not*
//! stable: deleting a record shifts every later index down by one. Callers
//! must re-fetch indices after any mutation.
//!
//! Lookup misses and key collisions are answered with `Option`/`bool`/
//! outcome enums; only the persistence calls return a `Result`.
//!
//! [`BookKey`]: bookstack_types::BookKey

mod book;
mod member;

pub use book::{BookRecord, BookRegistry};
pub use member::MemberRegistry;

pub use bookstack_persist::{PersistError, PersistResult};
