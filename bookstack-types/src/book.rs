//! The book record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A book in the library catalog.
///
/// `isbn` is the natural dedup key: the catalog refuses to add a second
/// record with the same ISBN. `id` is caller-assigned and not checked for
/// uniqueness. Nothing ties `available_copies` to `total_copies`; direct
/// updates can push available above total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub isbn: String,
    /// Publication year, kept as free text ("1954", "c. 1850").
    pub publication_year: String,
    /// Copies currently on the shelf. Decremented on borrow, incremented
    /// on return.
    pub available_copies: u32,
    pub total_copies: u32,
}

impl Book {
    /// Returns true if at least one copy is on the shelf.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }

    /// Short one-line form used in borrowed-book listings.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Book ID: {}, Title: {}, Author: {}, Published: {}",
            self.id, self.title, self.author, self.publication_year
        )
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book(id={}, title={}, author={}, genre={}, isbn={}, year={}, available={}, total={})",
            self.id,
            self.title,
            self.author,
            self.genre,
            self.isbn,
            self.publication_year,
            self.available_copies,
            self.total_copies
        )
    }
}
