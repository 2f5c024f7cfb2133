#![allow(dead_code)]

use bookstack_registry::{BookRegistry, MemberRegistry};
use bookstack_types::{Book, Person};

pub fn book(id: u32, title: &str, isbn: &str, year: &str, available: u32) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: "J.R.R. Tolkien".to_string(),
        genre: "Fantasy".to_string(),
        isbn: isbn.to_string(),
        publication_year: year.to_string(),
        available_copies: available,
        total_copies: available.max(1),
    }
}

/// Five books with distinct ISBNs, ids 1..=5.
pub fn tolkien_shelf() -> Vec<Book> {
    vec![
        book(1, "The Fellowship of the Ring", "978-0547928210", "1954", 1),
        book(2, "The Two Towers", "978-0547928203", "1954", 1),
        book(3, "The Return of the King", "978-0547928197", "1955", 1),
        book(4, "The Hobbit", "978-0547928227", "1937", 1),
        book(5, "The Silmarillion", "978-0547928234", "1977", 1),
    ]
}

pub fn populated_books() -> BookRegistry {
    let mut registry = BookRegistry::open_in_memory();
    for b in tolkien_shelf() {
        assert!(registry.add(b));
    }
    registry
}

/// Two members and one admin.
pub fn populated_members() -> MemberRegistry {
    let mut registry = MemberRegistry::open_in_memory();
    assert!(registry.add(Person::new(1, "John Doe", "john@gmail.com", "password", "member")));
    assert!(registry.add(Person::new(2, "Jane Doe", "jane@gmail.com", "password", "member")));
    assert!(registry.add(Person::new(3, "Billy", "billy@gmail.com", "password", "admin")));
    registry
}
