mod common;

use bookstack_persist::{JsonFile, YamlFile};
use bookstack_registry::{BookRegistry, MemberRegistry};
use common::tolkien_shelf;
use pretty_assertions::assert_eq;

// ── Book catalog round-trips ─────────────────────────────────────

#[test]
fn five_books_survive_a_json_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.json");

    let mut original = BookRegistry::open(Box::new(JsonFile::new(&path)));
    for b in tolkien_shelf() {
        assert!(original.add(b));
    }
    original.save().unwrap();

    let mut reloaded = BookRegistry::open(Box::new(JsonFile::new(&path)));
    reloaded.load().unwrap();

    assert_eq!(original.len(), 5);
    assert_eq!(reloaded.len(), 5);
    for i in 0..5 {
        assert_eq!(reloaded.find_by_index(i), original.find_by_index(i));
    }
}

#[test]
fn five_books_survive_a_yaml_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.yaml");

    let mut original = BookRegistry::open(Box::new(YamlFile::new(&path)));
    for b in tolkien_shelf() {
        assert!(original.add(b));
    }
    original.save().unwrap();

    let mut reloaded = BookRegistry::open(Box::new(YamlFile::new(&path)));
    reloaded.load().unwrap();

    assert_eq!(reloaded.len(), 5);
    for i in 0..5 {
        assert_eq!(reloaded.find_by_index(i), original.find_by_index(i));
    }
}

#[test]
fn load_replaces_the_collection_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.json");

    let mut saved = BookRegistry::open(Box::new(JsonFile::new(&path)));
    assert!(saved.add(common::book(1, "The Hobbit", "978-0547928227", "1937", 1)));
    saved.save().unwrap();

    // A registry with different pre-load content.
    let mut other = BookRegistry::open(Box::new(JsonFile::new(&path)));
    assert!(other.add(common::book(9, "Leftover", "978-0000000001", "2000", 1)));
    other.load().unwrap();

    assert_eq!(other.len(), 1);
    assert_eq!(other.find_by_index(0).unwrap().title, "The Hobbit");
}

#[test]
fn keys_assigned_after_load_do_not_collide() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.json");

    let mut registry = BookRegistry::open(Box::new(JsonFile::new(&path)));
    for b in tolkien_shelf() {
        registry.add(b);
    }
    registry.save().unwrap();

    let mut reloaded = BookRegistry::open(Box::new(JsonFile::new(&path)));
    reloaded.load().unwrap();
    let persisted_keys: Vec<_> = (0..5).map(|i| reloaded.key_at(i).unwrap()).collect();

    reloaded.add(common::book(6, "Unfinished Tales", "978-0345357113", "1980", 1));
    let new_key = reloaded.key_at(5).unwrap();
    assert!(!persisted_keys.contains(&new_key));
}

#[test]
fn load_from_a_missing_file_propagates_the_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = BookRegistry::open(Box::new(JsonFile::new(dir.path().join("absent.json"))));
    assert!(registry.load().is_err());
    // The collection is untouched on failure.
    assert!(registry.is_empty());
}

// ── Member registry round-trips ──────────────────────────────────

#[test]
fn members_and_their_borrowed_keys_survive_a_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let books_path = dir.path().join("books.yaml");
    let members_path = dir.path().join("persons.yaml");

    let mut books = BookRegistry::open(Box::new(YamlFile::new(&books_path)));
    for b in tolkien_shelf() {
        books.add(b);
    }
    let mut members = MemberRegistry::open(Box::new(YamlFile::new(&members_path)));
    assert!(members.register(1, "John Doe", "john@gmail.com", "password", "member"));

    let (key, book) = books.entry_at_mut(3).unwrap();
    assert!(members.borrow(0, key, book).is_success());
    books.save().unwrap();
    members.save().unwrap();

    let mut books2 = BookRegistry::open(Box::new(YamlFile::new(&books_path)));
    let mut members2 = MemberRegistry::open(Box::new(YamlFile::new(&members_path)));
    books2.load().unwrap();
    members2.load().unwrap();

    // The reloaded borrowed key resolves to the same record, and the
    // decremented shelf count came back with it.
    assert_eq!(members2.find_by_index(0).unwrap().borrowed, vec![key]);
    assert_eq!(books2.get(key).unwrap().title, "The Hobbit");
    assert_eq!(books2.get(key).unwrap().available_copies, 0);
    assert!(members2.list_borrowed(0, &books2).contains("The Hobbit"));
}
