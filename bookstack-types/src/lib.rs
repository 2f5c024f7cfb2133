//! Core type definitions for the Bookstack library system.
//!
//! This crate defines the record types shared by the registries and the
//! console frontend:
//! - `Book` and `Person` domain records
//! - `BookKey`, the stable arena key linking a member's borrowed list to
//!   the catalog record it refers to
//! - the borrow/return outcome enums
//!
//! Rendering, lookup, and the borrowing business rule live in
//! `bookstack-registry`; file persistence lives in `bookstack-persist`.

mod book;
mod key;
mod outcome;
mod person;

pub use book::Book;
pub use key::BookKey;
pub use outcome::{BorrowOutcome, ReturnOutcome};
pub use person::{BORROW_LIMIT, Person};
