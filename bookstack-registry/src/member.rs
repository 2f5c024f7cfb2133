//! The member registry and the borrowing business rule.

use crate::book::BookRegistry;
use bookstack_persist::{PersistResult, Store};
use bookstack_types::{Book, BookKey, BorrowOutcome, Person, ReturnOutcome};
use tracing::{debug, info};

/// The authoritative collection of person records (members and admins).
///
/// Holds no reference to the book catalog: the borrow and return
/// transitions receive the catalog record they mutate, and the listing
/// operations receive the catalog to resolve keys against.
pub struct MemberRegistry {
    persons: Vec<Person>,
    store: Box<dyn Store<Person>>,
}

impl MemberRegistry {
    /// Creates an empty registry persisting through the given store.
    #[must_use]
    pub fn open(store: Box<dyn Store<Person>>) -> Self {
        Self {
            persons: Vec::new(),
            store,
        }
    }

    /// Creates an empty registry backed by an in-memory store.
    #[must_use]
    pub fn open_in_memory() -> Self {
        Self::open(Box::new(bookstack_persist::MemoryStore::new()))
    }

    /// Registers a new person. Fails if any person already has this
    /// email — the canonical uniqueness rule, checked on email alone.
    pub fn register(&mut self, id: u32, name: &str, email: &str, password: &str, role: &str) -> bool {
        if self.persons.iter().any(|p| p.email == email) {
            debug!(email, "rejected duplicate email");
            return false;
        }
        self.persons.push(Person::new(id, name, email, password, role));
        true
    }

    /// Adds an already-built person record. This legacy path only rejects
    /// a record matching an existing one on *both* email and id; prefer
    /// `register`, which rejects on email alone.
    pub fn add(&mut self, person: Person) -> bool {
        if self
            .persons
            .iter()
            .any(|p| p.email == person.email && p.id == person.id)
        {
            return false;
        }
        self.persons.push(person);
        true
    }

    /// Number of registered persons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    /// Returns true if nobody is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Returns the person at the given position, if any.
    #[must_use]
    pub fn find_by_index(&self, index: usize) -> Option<&Person> {
        self.persons.get(index)
    }

    /// First person matching both email and password exactly. Plaintext,
    /// case-sensitive, no lockout — compatibility with the system this
    /// replaces.
    #[must_use]
    pub fn login(&self, email: &str, password: &str) -> Option<&Person> {
        self.persons
            .iter()
            .find(|p| p.email == email && p.password == password)
    }

    /// Overwrites name, email, and password of the person at `index`,
    /// leaving the role untouched. False if the index is invalid.
    pub fn update_member(&mut self, index: usize, name: &str, email: &str, password: &str) -> bool {
        match self.persons.get_mut(index) {
            Some(person) => {
                person.name = name.to_string();
                person.email = email.to_string();
                person.password = password.to_string();
                true
            }
            None => false,
        }
    }

    /// Removes and returns the person at `index`, shifting every later
    /// index down by one.
    pub fn delete_by_index(&mut self, index: usize) -> Option<Person> {
        if index < self.persons.len() {
            Some(self.persons.remove(index))
        } else {
            None
        }
    }

    /// Renders every person with their current positional index, or the
    /// literal `"No members found"` when the registry is empty.
    #[must_use]
    pub fn list_all(&self) -> String {
        if self.persons.is_empty() {
            return "No members found".to_string();
        }
        self.persons
            .iter()
            .enumerate()
            .map(|(i, person)| format!("{i}:{person}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Attempts to borrow `book` (the catalog record for `key`) for the
    /// member at `member_index`.
    ///
    /// Checks run in priority order: member exists, book not already
    /// held, under the three-book cap, copies available. On success the
    /// key joins the member's list and one copy leaves the shelf.
    pub fn borrow(&mut self, member_index: usize, key: BookKey, book: &mut Book) -> BorrowOutcome {
        let Some(member) = self.persons.get_mut(member_index) else {
            return BorrowOutcome::MemberNotFound;
        };
        if member.has_borrowed(key) {
            return BorrowOutcome::AlreadyBorrowed;
        }
        if member.at_borrow_limit() {
            return BorrowOutcome::LimitReached;
        }
        if !book.is_available() {
            return BorrowOutcome::NoCopiesAvailable;
        }
        member.borrowed.push(key);
        book.available_copies -= 1;
        info!(member = member.id, book = book.id, "book borrowed");
        BorrowOutcome::Borrowed
    }

    /// Attempts to return `book` (the catalog record for `key`) from the
    /// member at `member_index`. On success the key leaves the member's
    /// list and one copy comes back to the shelf.
    pub fn return_book(
        &mut self,
        member_index: usize,
        key: BookKey,
        book: &mut Book,
    ) -> ReturnOutcome {
        let Some(member) = self.persons.get_mut(member_index) else {
            return ReturnOutcome::MemberNotFound;
        };
        let Some(position) = member.borrowed.iter().position(|&k| k == key) else {
            return ReturnOutcome::NotBorrowed;
        };
        member.borrowed.remove(position);
        book.available_copies += 1;
        info!(member = member.id, book = book.id, "book returned");
        ReturnOutcome::Returned
    }

    /// Renders the books currently held by the member at `index`,
    /// numbered by position in the borrowed list. Keys whose catalog
    /// record has since been deleted are skipped.
    #[must_use]
    pub fn list_borrowed(&self, index: usize, books: &BookRegistry) -> String {
        let Some(member) = self.persons.get(index) else {
            return "Member not found".to_string();
        };
        if member.borrowed.is_empty() {
            return "No books borrowed".to_string();
        }
        member
            .borrowed
            .iter()
            .enumerate()
            .filter_map(|(i, &key)| books.get(key).map(|book| format!("{i}:{book}")))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders, for every member holding at least one book, an identity
    /// line with the count followed by per-book detail. Blocks are
    /// separated by a blank line; `"No books borrowed"` if nobody holds
    /// anything.
    #[must_use]
    pub fn borrowed_summary(&self, books: &BookRegistry) -> String {
        let blocks: Vec<String> = self
            .persons
            .iter()
            .filter(|person| !person.borrowed.is_empty())
            .map(|person| {
                let titles: Vec<String> = person
                    .borrowed
                    .iter()
                    .filter_map(|&key| books.get(key).map(Book::summary))
                    .collect();
                format!(
                    "Member ID: {}, Name: {}, Total Borrowed Books: {}\nBorrowed Books: {}",
                    person.id,
                    person.name,
                    person.borrowed.len(),
                    titles.join("; \n")
                )
            })
            .collect();
        if blocks.is_empty() {
            "No books borrowed".to_string()
        } else {
            blocks.join("\n\n")
        }
    }

    /// Writes the whole registry to the store, overwriting the previous
    /// snapshot.
    pub fn save(&self) -> PersistResult<()> {
        self.store.write(&self.persons)?;
        debug!(count = self.persons.len(), "saved member registry");
        Ok(())
    }

    /// Replaces the in-memory registry wholesale with the store's
    /// snapshot.
    pub fn load(&mut self) -> PersistResult<()> {
        let persons = self.store.read()?;
        debug!(count = persons.len(), "loaded member registry");
        self.persons = persons;
        Ok(())
    }
}
