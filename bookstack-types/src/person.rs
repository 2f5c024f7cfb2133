//! The person record (members and administrators).

use crate::key::BookKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of books a member may hold at once.
pub const BORROW_LIMIT: usize = 3;

/// A registered person: a library member or an administrator.
///
/// `email` is the dedup and login key. `password` is stored and compared
/// as plaintext, case-sensitively — a known insecurity kept for
/// compatibility with the system this replaces, not a recommendation.
/// `role` is free text; only the exact value `"admin"` unlocks the
/// administrator menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    /// Keys of currently borrowed books, in borrow order. Never longer
    /// than [`BORROW_LIMIT`], never contains the same key twice.
    #[serde(default)]
    pub borrowed: Vec<BookKey>,
}

impl Person {
    /// Creates a person with an empty borrowed list.
    #[must_use]
    pub fn new(id: u32, name: &str, email: &str, password: &str, role: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: role.to_string(),
            borrowed: Vec::new(),
        }
    }

    /// Returns true if this person has the administrator role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }

    /// Returns true if this person currently holds the given book.
    #[must_use]
    pub fn has_borrowed(&self, key: BookKey) -> bool {
        self.borrowed.contains(&key)
    }

    /// Returns true if this person is at the borrow cap.
    #[must_use]
    pub fn at_borrow_limit(&self) -> bool {
        self.borrowed.len() >= BORROW_LIMIT
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person(id={}, name={}, email={}, role={}, borrowed={})",
            self.id,
            self.name,
            self.email,
            self.role,
            self.borrowed.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_role_is_exact_match() {
        assert!(Person::new(1, "Billy", "billy@gmail.com", "password1", "admin").is_admin());
        assert!(!Person::new(2, "Jane", "jane@gmail.com", "password1", "Admin").is_admin());
        assert!(!Person::new(3, "John", "john@gmail.com", "password1", "member").is_admin());
    }

    #[test]
    fn borrow_limit_checks() {
        let mut person = Person::new(1, "John Doe", "john@gmail.com", "password", "member");
        assert!(!person.at_borrow_limit());
        person.borrowed = vec![BookKey::from_raw(1), BookKey::from_raw(2), BookKey::from_raw(3)];
        assert!(person.at_borrow_limit());
        assert!(person.has_borrowed(BookKey::from_raw(2)));
        assert!(!person.has_borrowed(BookKey::from_raw(9)));
    }

    #[test]
    fn display_omits_the_password() {
        let person = Person::new(1, "John Doe", "john@gmail.com", "password", "member");
        let rendered = person.to_string();
        assert_eq!(
            rendered,
            "Person(id=1, name=John Doe, email=john@gmail.com, role=member, borrowed=0)"
        );
        assert!(!rendered.contains("password"));
    }
}
