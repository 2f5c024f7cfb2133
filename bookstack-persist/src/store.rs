//! The `Store` contract and its file-backed implementations.

use crate::error::PersistResult;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use tracing::debug;

/// Whole-collection read/write of registry records.
///
/// `write` overwrites the previous snapshot; `read` returns the full prior
/// collection. Implementations differ only in encoding.
pub trait Store<T> {
    /// Serializes the entire collection, replacing any previous snapshot.
    fn write(&self, records: &[T]) -> PersistResult<()>;

    /// Deserializes the full collection from the last snapshot.
    fn read(&self) -> PersistResult<Vec<T>>;
}

/// JSON snapshot file. The tree-structured encoding.
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    /// Creates a store backed by the given file path. The file is not
    /// touched until the first `write` or `read`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl<T: Serialize + DeserializeOwned> Store<T> for JsonFile {
    fn write(&self, records: &[T]) -> PersistResult<()> {
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), records)?;
        debug!(path = %self.path.display(), count = records.len(), "wrote JSON snapshot");
        Ok(())
    }

    fn read(&self) -> PersistResult<Vec<T>> {
        let file = File::open(&self.path)?;
        let records = serde_json::from_reader(BufReader::new(file))?;
        debug!(path = %self.path.display(), "read JSON snapshot");
        Ok(records)
    }
}

/// YAML snapshot file. The block-structured, human-readable encoding.
pub struct YamlFile {
    path: PathBuf,
}

impl YamlFile {
    /// Creates a store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl<T: Serialize + DeserializeOwned> Store<T> for YamlFile {
    fn write(&self, records: &[T]) -> PersistResult<()> {
        let file = File::create(&self.path)?;
        serde_yaml::to_writer(BufWriter::new(file), records)?;
        debug!(path = %self.path.display(), count = records.len(), "wrote YAML snapshot");
        Ok(())
    }

    fn read(&self) -> PersistResult<Vec<T>> {
        let file = File::open(&self.path)?;
        let records = serde_yaml::from_reader(BufReader::new(file))?;
        debug!(path = %self.path.display(), "read YAML snapshot");
        Ok(records)
    }
}

/// In-memory store for tests and throwaway registries.
pub struct MemoryStore<T> {
    records: RefCell<Vec<T>>,
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MemoryStore<T> {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RefCell::new(Vec::new()),
        }
    }
}

impl<T: Clone> Store<T> for MemoryStore<T> {
    fn write(&self, records: &[T]) -> PersistResult<()> {
        *self.records.borrow_mut() = records.to_vec();
        Ok(())
    }

    fn read(&self) -> PersistResult<Vec<T>> {
        Ok(self.records.borrow().clone())
    }
}
