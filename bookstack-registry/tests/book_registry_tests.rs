mod common;

use bookstack_registry::BookRegistry;
use common::{book, populated_books, tolkien_shelf};
use pretty_assertions::assert_eq;

// ── Adding ───────────────────────────────────────────────────────

#[test]
fn add_appends_to_an_empty_catalog() {
    let mut registry = BookRegistry::open_in_memory();
    assert_eq!(registry.len(), 0);
    assert!(registry.add(book(1, "The Hobbit", "978-0547928227", "1937", 1)));
    assert_eq!(registry.len(), 1);
}

#[test]
fn add_rejects_a_duplicate_isbn() {
    let mut registry = populated_books();
    let duplicate = book(9, "A Different Title", "978-0547928227", "1999", 2);
    assert!(!registry.add(duplicate));
    assert_eq!(registry.len(), 5);
}

#[test]
fn equal_isbn_means_at_most_one_add_succeeds() {
    let mut registry = BookRegistry::open_in_memory();
    let first = book(1, "First Printing", "978-0547928227", "1937", 1);
    let second = book(2, "Second Printing", "978-0547928227", "1951", 1);
    let outcomes = [registry.add(first), registry.add(second)];
    assert_eq!(outcomes.iter().filter(|&&ok| ok).count(), 1);
}

#[test]
fn duplicate_id_is_not_rejected() {
    // Only ISBN is a dedup key; caller-assigned ids may collide.
    let mut registry = BookRegistry::open_in_memory();
    assert!(registry.add(book(1, "The Hobbit", "978-0547928227", "1937", 1)));
    assert!(registry.add(book(1, "The Silmarillion", "978-0547928234", "1977", 1)));
}

// ── Positional lookup ────────────────────────────────────────────

#[test]
fn find_by_index_returns_the_record_at_that_position() {
    let registry = populated_books();
    assert_eq!(registry.find_by_index(0).unwrap().title, "The Fellowship of the Ring");
    assert_eq!(registry.find_by_index(4).unwrap().title, "The Silmarillion");
}

#[test]
fn find_by_index_out_of_bounds_is_none() {
    let registry = populated_books();
    assert!(registry.find_by_index(5).is_none());
}

#[test]
fn delete_shifts_later_indices_down() {
    let mut registry = populated_books();
    let expected_next = registry.find_by_index(2).unwrap().clone();

    let removed = registry.delete_by_index(1).unwrap();
    assert_eq!(removed.title, "The Two Towers");
    assert_eq!(registry.len(), 4);
    assert_eq!(registry.find_by_index(1).unwrap(), &expected_next);
}

#[test]
fn delete_of_last_index_leaves_it_vacant() {
    let mut registry = populated_books();
    assert!(registry.delete_by_index(4).is_some());
    assert!(registry.find_by_index(4).is_none());
}

#[test]
fn delete_out_of_bounds_is_none() {
    let mut registry = populated_books();
    assert!(registry.delete_by_index(5).is_none());
    assert_eq!(registry.len(), 5);
}

// ── Stable keys ──────────────────────────────────────────────────

#[test]
fn keys_survive_deletion_of_earlier_records() {
    let mut registry = populated_books();
    let key = registry.key_at(3).unwrap();

    registry.delete_by_index(0);
    // Position shifted from 3 to 2; the key still resolves.
    assert_eq!(registry.key_at(2).unwrap(), key);
    assert_eq!(registry.get(key).unwrap().title, "The Hobbit");
}

#[test]
fn deleted_record_key_no_longer_resolves() {
    let mut registry = populated_books();
    let key = registry.key_at(1).unwrap();
    registry.delete_by_index(1);
    assert!(registry.get(key).is_none());
}

// ── Updating ─────────────────────────────────────────────────────

#[test]
fn updates_mutate_in_place() {
    let mut registry = populated_books();
    assert!(registry.update_title(0, "The Fellowship"));
    assert!(registry.update_isbn(0, "978-0000000000"));
    assert!(registry.update_available_copies(0, 7));
    assert!(registry.update_total_copies(0, 9));

    let book = registry.find_by_index(0).unwrap();
    assert_eq!(book.title, "The Fellowship");
    assert_eq!(book.isbn, "978-0000000000");
    assert_eq!(book.available_copies, 7);
    assert_eq!(book.total_copies, 9);
}

#[test]
fn updates_fail_on_invalid_index() {
    let mut registry = populated_books();
    assert!(!registry.update_title(5, "x"));
    assert!(!registry.update_isbn(5, "x"));
    assert!(!registry.update_available_copies(5, 0));
    assert!(!registry.update_total_copies(5, 0));
}

#[test]
fn isbn_update_is_not_checked_for_uniqueness() {
    // Dedup happens at add time only.
    let mut registry = populated_books();
    assert!(registry.update_isbn(1, "978-0547928210"));
    assert_eq!(registry.find_by_index(0).unwrap().isbn, registry.find_by_index(1).unwrap().isbn);
}

// ── Searching ────────────────────────────────────────────────────

#[test]
fn search_is_exact_and_case_sensitive() {
    let registry = populated_books();
    assert!(registry.search_by_title("The Hobbit").is_some());
    assert!(registry.search_by_title("the hobbit").is_none());
    assert!(registry.search_by_author("J.R.R. Tolkien").is_some());
    assert!(registry.search_by_author("Tolkien").is_none());
    assert!(registry.search_by_isbn("978-0547928197").is_some());
    assert!(registry.search_by_isbn("978-0000000000").is_none());
}

#[test]
fn search_by_author_returns_the_first_match() {
    let registry = populated_books();
    let found = registry.search_by_author("J.R.R. Tolkien").unwrap();
    assert_eq!(found.title, "The Fellowship of the Ring");
}

// ── Rendering ────────────────────────────────────────────────────

#[test]
fn list_all_on_empty_catalog() {
    let registry = BookRegistry::open_in_memory();
    assert_eq!(registry.list_all(), "No books in library");
}

#[test]
fn list_all_numbers_by_position() {
    let registry = populated_books();
    let listing = registry.list_all();
    let expected: Vec<String> = tolkien_shelf()
        .iter()
        .enumerate()
        .map(|(i, b)| format!("{i}:{b}"))
        .collect();
    assert_eq!(listing, expected.join("\n"));
}

#[test]
fn available_books_keeps_original_indices() {
    let mut registry = populated_books();
    // Deplete index 3 of 5.
    assert!(registry.update_available_copies(3, 0));

    let listing = registry.available_books();
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("0:"));
    assert!(lines[1].starts_with("1:"));
    assert!(lines[2].starts_with("2:"));
    assert!(lines[3].starts_with("4:"));
}

#[test]
fn available_books_with_nothing_on_the_shelf() {
    let mut registry = populated_books();
    for i in 0..5 {
        registry.update_available_copies(i, 0);
    }
    assert_eq!(registry.available_books(), "No books found");
}
