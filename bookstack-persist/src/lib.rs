//! File persistence gateway for the Bookstack registries.
//!
//! A registry hands its entire collection to a [`Store`] and gets the
//! entire prior collection back: there is no partial update, no query
//! surface, no transaction. Two interchangeable file encodings implement
//! the same contract — JSON and YAML — and the registries never know
//! which one they were given.

mod error;
mod store;

pub use error::{PersistError, PersistResult};
pub use store::{JsonFile, MemoryStore, Store, YamlFile};
