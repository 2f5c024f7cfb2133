//! The book catalog.

use bookstack_persist::{PersistResult, Store};
use bookstack_types::{Book, BookKey};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Persisted form of one catalog slot: the stable key travels with the
/// record so members' borrowed lists stay valid across a save/load cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRecord {
    pub key: BookKey,
    pub book: Book,
}

/// The authoritative, insertion-ordered collection of book records.
///
/// Publicly addressed by positional index; internally an arena keyed by
/// [`BookKey`] so that borrowed-list entries survive reordering. The
/// registry is encoding-agnostic: it talks to whatever [`Store`] it was
/// constructed with.
pub struct BookRegistry {
    slots: Vec<BookRecord>,
    next_key: u64,
    store: Box<dyn Store<BookRecord>>,
}

impl BookRegistry {
    /// Creates an empty catalog persisting through the given store.
    #[must_use]
    pub fn open(store: Box<dyn Store<BookRecord>>) -> Self {
        Self {
            slots: Vec::new(),
            next_key: 0,
            store,
        }
    }

    /// Creates an empty catalog backed by an in-memory store. For tests
    /// and throwaway sessions.
    #[must_use]
    pub fn open_in_memory() -> Self {
        Self::open(Box::new(bookstack_persist::MemoryStore::new()))
    }

    /// Adds a book to the catalog.
    ///
    /// Fails (returns false) if a record with the same ISBN already
    /// exists. No other field is validated; in particular `id` uniqueness
    /// and `available_copies <= total_copies` are the caller's problem.
    pub fn add(&mut self, book: Book) -> bool {
        if self.slots.iter().any(|slot| slot.book.isbn == book.isbn) {
            debug!(isbn = %book.isbn, "rejected duplicate ISBN");
            return false;
        }
        let key = BookKey::from_raw(self.next_key);
        self.next_key += 1;
        self.slots.push(BookRecord { key, book });
        true
    }

    /// Number of books in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the catalog holds no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the book at the given position, if any.
    #[must_use]
    pub fn find_by_index(&self, index: usize) -> Option<&Book> {
        self.slots.get(index).map(|slot| &slot.book)
    }

    /// Mutable access to the book at the given position.
    pub fn find_by_index_mut(&mut self, index: usize) -> Option<&mut Book> {
        self.slots.get_mut(index).map(|slot| &mut slot.book)
    }

    /// Returns the stable key of the book at the given position.
    #[must_use]
    pub fn key_at(&self, index: usize) -> Option<BookKey> {
        self.slots.get(index).map(|slot| slot.key)
    }

    /// Key and mutable record at the given position, for the borrow and
    /// return flows which need both.
    pub fn entry_at_mut(&mut self, index: usize) -> Option<(BookKey, &mut Book)> {
        self.slots.get_mut(index).map(|slot| (slot.key, &mut slot.book))
    }

    /// Resolves a stable key to its record, if the record still exists.
    #[must_use]
    pub fn get(&self, key: BookKey) -> Option<&Book> {
        self.slots.iter().find(|slot| slot.key == key).map(|slot| &slot.book)
    }

    /// Mutable resolution of a stable key.
    pub fn get_mut(&mut self, key: BookKey) -> Option<&mut Book> {
        self.slots
            .iter_mut()
            .find(|slot| slot.key == key)
            .map(|slot| &mut slot.book)
    }

    /// Renders every book with its current positional index, or the
    /// literal `"No books in library"` when the catalog is empty.
    #[must_use]
    pub fn list_all(&self) -> String {
        if self.slots.is_empty() {
            return "No books in library".to_string();
        }
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| format!("{i}:{}", slot.book))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders only books with copies on the shelf, numbered by their
    /// position in the *unfiltered* catalog, not renumbered within the
    /// filtered view.
    #[must_use]
    pub fn available_books(&self) -> String {
        let lines: Vec<String> = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.book.is_available())
            .map(|(i, slot)| format!("{i}:{}", slot.book))
            .collect();
        if lines.is_empty() {
            "No books found".to_string()
        } else {
            lines.join("\n")
        }
    }

    /// Replaces the title of the book at `index`. False if the index is
    /// invalid.
    pub fn update_title(&mut self, index: usize, title: &str) -> bool {
        self.update_with(index, |book| book.title = title.to_string())
    }

    /// Replaces the ISBN of the book at `index`. Uniqueness is *not*
    /// re-checked here; only `add` enforces it.
    pub fn update_isbn(&mut self, index: usize, isbn: &str) -> bool {
        self.update_with(index, |book| book.isbn = isbn.to_string())
    }

    /// Replaces the available-copies count of the book at `index`.
    pub fn update_available_copies(&mut self, index: usize, copies: u32) -> bool {
        self.update_with(index, |book| book.available_copies = copies)
    }

    /// Replaces the total-copies count of the book at `index`.
    pub fn update_total_copies(&mut self, index: usize, copies: u32) -> bool {
        self.update_with(index, |book| book.total_copies = copies)
    }

    fn update_with(&mut self, index: usize, apply: impl FnOnce(&mut Book)) -> bool {
        match self.find_by_index_mut(index) {
            Some(book) => {
                apply(book);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the book at `index`, shifting every later
    /// index down by one. The record's key dies with it: a member still
    /// holding the key will no longer be able to resolve it.
    pub fn delete_by_index(&mut self, index: usize) -> Option<Book> {
        if index < self.slots.len() {
            Some(self.slots.remove(index).book)
        } else {
            None
        }
    }

    /// First book whose title matches exactly (case-sensitive).
    #[must_use]
    pub fn search_by_title(&self, title: &str) -> Option<&Book> {
        self.slots
            .iter()
            .find(|slot| slot.book.title == title)
            .map(|slot| &slot.book)
    }

    /// First book whose author matches exactly (case-sensitive).
    #[must_use]
    pub fn search_by_author(&self, author: &str) -> Option<&Book> {
        self.slots
            .iter()
            .find(|slot| slot.book.author == author)
            .map(|slot| &slot.book)
    }

    /// First book whose ISBN matches exactly.
    #[must_use]
    pub fn search_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.slots
            .iter()
            .find(|slot| slot.book.isbn == isbn)
            .map(|slot| &slot.book)
    }

    /// Writes the whole catalog to the store, overwriting the previous
    /// snapshot.
    pub fn save(&self) -> PersistResult<()> {
        self.store.write(&self.slots)?;
        debug!(count = self.slots.len(), "saved book catalog");
        Ok(())
    }

    /// Replaces the in-memory catalog wholesale with the store's
    /// snapshot. The key counter resumes past the largest loaded key so
    /// new records never collide with persisted borrowed-list entries.
    pub fn load(&mut self) -> PersistResult<()> {
        let slots = self.store.read()?;
        self.next_key = slots
            .iter()
            .map(|slot| slot.key.as_raw() + 1)
            .max()
            .unwrap_or(0);
        debug!(count = slots.len(), "loaded book catalog");
        self.slots = slots;
        Ok(())
    }
}
