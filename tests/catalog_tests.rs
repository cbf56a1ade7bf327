//! Tests for CatalogStore
//!
//! These tests verify:
//! - Title ordering after adds and edits
//! - ISBN uniqueness
//! - Search semantics (substring vs exact)
//! - Delete shifting and order preservation
//! - Capacity doubling transitions
//! - Field validation

use shelfdb::record::{Record, MAX_AUTHOR_LEN, MAX_TITLE_LEN};
use shelfdb::store::{CatalogStore, RecordPatch, SearchField, INITIAL_CAPACITY};
use shelfdb::ShelfError;

// =============================================================================
// Helper Functions
// =============================================================================

fn book(isbn: &str, title: &str, author: &str, year: i32) -> Record {
    Record::new(isbn, title, author, year).unwrap()
}

fn store_with_classics() -> CatalogStore {
    let mut store = CatalogStore::new();
    store.add(book("1", "War and Peace", "Leo Tolstoy", 1869)).unwrap();
    store.add(book("2", "Warcraft Lore", "Various", 2016)).unwrap();
    store.add(book("3", "Brave New World", "Aldous Huxley", 1932)).unwrap();
    store
}

fn titles(store: &CatalogStore) -> Vec<String> {
    store.list().iter().map(|r| r.title.clone()).collect()
}

// =============================================================================
// Ordering Tests
// =============================================================================

#[test]
fn test_list_sorted_by_lowercase_title() {
    let mut store = CatalogStore::new();
    store.add(book("1", "zebra", "A", 2000)).unwrap();
    store.add(book("2", "Apple", "B", 2001)).unwrap();
    store.add(book("3", "mango", "C", 2002)).unwrap();
    store.add(book("4", "BANANA", "D", 2003)).unwrap();

    assert_eq!(titles(&store), vec!["Apple", "BANANA", "mango", "zebra"]);
}

#[test]
fn test_add_returns_sorted_position() {
    let mut store = CatalogStore::new();
    assert_eq!(store.add(book("1", "Middlemarch", "George Eliot", 1871)).unwrap(), 0);
    assert_eq!(store.add(book("2", "Aeneid", "Virgil", -19)).unwrap(), 0);
    assert_eq!(store.add(book("3", "Ulysses", "James Joyce", 1922)).unwrap(), 2);
}

#[test]
fn test_ordering_holds_for_many_adds() {
    let mut store = CatalogStore::new();
    for i in 0..50 {
        // Insertion order deliberately not alphabetical
        let title = format!("Title {:02}", (i * 37) % 100);
        store.add(book(&format!("isbn-{}", i), &title, "A", 2000)).unwrap();
    }

    let listed = titles(&store);
    let mut sorted = listed.clone();
    sorted.sort_by_key(|t| t.to_lowercase());
    assert_eq!(listed, sorted);
}

// =============================================================================
// Uniqueness Tests
// =============================================================================

#[test]
fn test_add_duplicate_isbn_rejected() {
    let mut store = store_with_classics();
    let before = titles(&store);

    let result = store.add(book("2", "Another Title", "Someone", 2020));

    assert!(matches!(result, Err(ShelfError::DuplicateIsbn(isbn)) if isbn == "2"));
    assert_eq!(store.len(), 3);
    assert_eq!(titles(&store), before);
}

// =============================================================================
// Lookup and Search Tests
// =============================================================================

#[test]
fn test_find_by_isbn() {
    let store = store_with_classics();

    let idx = store.find_by_isbn("1").unwrap();
    assert_eq!(store.list()[idx].title, "War and Peace");

    assert_eq!(store.find_by_isbn("missing"), None);
}

#[test]
fn test_search_title_substring_case_insensitive() {
    let store = store_with_classics();

    let matches = store.search("war", SearchField::Title);
    let found: Vec<&str> = matches.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(found, vec!["War and Peace", "Warcraft Lore"]);

    // Query case must not matter
    let matches = store.search("WAR", SearchField::Title);
    let found: Vec<&str> = matches.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(found, vec!["War and Peace", "Warcraft Lore"]);
}

#[test]
fn test_search_author_substring() {
    let store = store_with_classics();

    let matches = store.search("tolstoy", SearchField::Author);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].isbn, "1");
}

#[test]
fn test_search_isbn_is_exact_match() {
    let mut store = CatalogStore::new();
    store.add(book("12345", "First", "A", 2000)).unwrap();
    store.add(book("123", "Second", "B", 2001)).unwrap();

    // "123" must hit only the exact key, not the superstring "12345"
    let matches = store.search("123", SearchField::Isbn);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].title, "Second");

    assert!(store.search("345", SearchField::Isbn).is_empty());
}

#[test]
fn test_search_no_matches_returns_empty() {
    let store = store_with_classics();
    assert!(store.search("dune", SearchField::Title).is_empty());
}

// =============================================================================
// Edit Tests
// =============================================================================

#[test]
fn test_edit_empty_patch_changes_nothing() {
    let mut store = store_with_classics();
    let before: Vec<Record> = store.list().to_vec();

    store.edit("1", RecordPatch::none()).unwrap();

    assert_eq!(store.list(), &before[..]);
}

#[test]
fn test_edit_single_field() {
    let mut store = store_with_classics();

    store.edit("3", RecordPatch::none().year(1931)).unwrap();

    let idx = store.find_by_isbn("3").unwrap();
    let record = &store.list()[idx];
    assert_eq!(record.year, 1931);
    assert_eq!(record.title, "Brave New World");
    assert_eq!(record.author, "Aldous Huxley");
}

#[test]
fn test_edit_title_resorts() {
    let mut store = store_with_classics();

    store.edit("2", RecordPatch::none().title("A Warcraft Reader")).unwrap();

    assert_eq!(
        titles(&store),
        vec!["A Warcraft Reader", "Brave New World", "War and Peace"]
    );
}

#[test]
fn test_edit_author_preserves_order() {
    let mut store = store_with_classics();
    let before = titles(&store);

    store.edit("1", RecordPatch::none().author("L. N. Tolstoy")).unwrap();

    assert_eq!(titles(&store), before);
}

#[test]
fn test_edit_missing_isbn() {
    let mut store = store_with_classics();
    let result = store.edit("missing", RecordPatch::none().year(1999));
    assert!(matches!(result, Err(ShelfError::NotFound(_))));
}

#[test]
fn test_edit_rejects_overlong_field_without_partial_write() {
    let mut store = store_with_classics();

    let patch = RecordPatch::none()
        .author("New Author")
        .title("t".repeat(MAX_TITLE_LEN + 1));
    let result = store.edit("1", patch);

    assert!(matches!(result, Err(ShelfError::FieldTooLong { .. })));
    // Author must not have been applied either
    let idx = store.find_by_isbn("1").unwrap();
    assert_eq!(store.list()[idx].author, "Leo Tolstoy");
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_removes_and_preserves_order() {
    let mut store = store_with_classics();

    store.delete("3").unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.find_by_isbn("3"), None);
    assert_eq!(titles(&store), vec!["War and Peace", "Warcraft Lore"]);
}

#[test]
fn test_delete_missing_isbn_no_side_effect() {
    let mut store = store_with_classics();

    let result = store.delete("missing");

    assert!(matches!(result, Err(ShelfError::NotFound(_))));
    assert_eq!(store.len(), 3);
}

// =============================================================================
// Capacity Tests
// =============================================================================

#[test]
fn test_initial_capacity() {
    let store = CatalogStore::new();
    assert_eq!(store.capacity(), INITIAL_CAPACITY);
    assert_eq!(store.len(), 0);
}

#[test]
fn test_capacity_doubles_at_thresholds() {
    let mut store = CatalogStore::new();

    for i in 0..100 {
        store.add(book(&format!("isbn-{:03}", i), &format!("Title {:03}", i), "A", 2000)).unwrap();
    }
    assert_eq!(store.capacity(), 100);

    store.add(book("isbn-100", "Title 100", "A", 2000)).unwrap();
    assert_eq!(store.capacity(), 200);

    for i in 101..200 {
        store.add(book(&format!("isbn-{:03}", i), &format!("Title {:03}", i), "A", 2000)).unwrap();
    }
    assert_eq!(store.capacity(), 200);

    store.add(book("isbn-200", "Title 200", "A", 2000)).unwrap();
    assert_eq!(store.capacity(), 400);
}

#[test]
fn test_delete_does_not_shrink_capacity() {
    let mut store = store_with_classics();
    let capacity = store.capacity();

    store.delete("1").unwrap();

    assert_eq!(store.capacity(), capacity);
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_record_field_bounds() {
    assert!(Record::new("9780140447934", "t".repeat(MAX_TITLE_LEN), "a".repeat(MAX_AUTHOR_LEN), 1869).is_ok());

    assert!(matches!(
        Record::new("97801404479341", "War and Peace", "Leo Tolstoy", 1869),
        Err(ShelfError::FieldTooLong { field: "isbn", .. })
    ));
    assert!(matches!(
        Record::new("1", "t".repeat(MAX_TITLE_LEN + 1), "A", 2000),
        Err(ShelfError::FieldTooLong { field: "title", .. })
    ));
    assert!(matches!(
        Record::new("1", "Title", "a".repeat(MAX_AUTHOR_LEN + 1), 2000),
        Err(ShelfError::FieldTooLong { field: "author", .. })
    ));
}

#[test]
fn test_record_rejects_embedded_nul() {
    assert!(matches!(
        Record::new("1", "War\0Peace", "A", 2000),
        Err(ShelfError::InvalidField { field: "title", .. })
    ));
}

#[test]
fn test_record_accepts_zero_and_negative_year() {
    assert!(Record::new("1", "Epic of Gilgamesh", "Unknown", -2100).is_ok());
    assert!(Record::new("2", "Undated", "Unknown", 0).is_ok());
}
