//! CatalogStore implementation
//!
//! Owns the ordered collection of records.
//!
//! ## Responsibilities
//! - Enforce ISBN uniqueness on insert
//! - Keep the collection sorted by lowercase title
//! - Grow capacity by doubling (100 → 200 → 400 → ...)
//! - Serve lookups, substring search, edits, and deletes

use crate::error::{Result, ShelfError};
use crate::record::{self, Record, MAX_AUTHOR_LEN, MAX_TITLE_LEN};

/// Initial backing capacity of an empty store
pub const INITIAL_CAPACITY: usize = 100;

/// Which field a substring search runs against
///
/// ISBN search is exact-match, not substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Isbn,
    Title,
    Author,
}

/// Optional per-field updates for [`CatalogStore::edit`]
///
/// `None` leaves the field unchanged. The ISBN itself is immutable,
/// which keeps uniqueness intact across edits.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
}

impl RecordPatch {
    /// Patch that changes nothing
    pub fn none() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
}

/// The in-memory catalog
///
/// Exclusively owned by one caller per process; all operations are
/// synchronous and complete before returning.
#[derive(Debug)]
pub struct CatalogStore {
    /// Records, always sorted by lowercase title
    records: Vec<Record>,
}

impl CatalogStore {
    /// Create an empty store with the default initial capacity
    pub fn new() -> Self {
        Self {
            records: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Adopt a loaded collection
    ///
    /// The persisted file preserves sorted order, but a hand-edited file
    /// might not, so the ordering invariant is re-established here.
    /// Capacity is topped up to at least the default initial value.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut store = Self { records };
        if store.records.capacity() < INITIAL_CAPACITY {
            let additional = INITIAL_CAPACITY - store.records.len();
            store.records.reserve_exact(additional);
        }
        store.sort_by_title();
        store
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Number of records in the catalog
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Current backing capacity (always ≥ `len`, never shrinks)
    pub fn capacity(&self) -> usize {
        self.records.capacity()
    }

    /// All records in current (title-sorted) order
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    /// Find a record's position by exact ISBN match
    ///
    /// Linear scan, first occurrence. Duplicates are prevented by `add`,
    /// so at most one match exists.
    pub fn find_by_isbn(&self, isbn: &str) -> Option<usize> {
        self.records.iter().position(|r| r.isbn == isbn)
    }

    /// Case-insensitive substring search over title or author
    ///
    /// Returns matches in current sort order; empty vec if none match.
    /// `SearchField::Isbn` delegates to the exact-match lookup instead.
    pub fn search(&self, term: &str, field: SearchField) -> Vec<&Record> {
        if field == SearchField::Isbn {
            return self
                .find_by_isbn(term)
                .map(|idx| vec![&self.records[idx]])
                .unwrap_or_default();
        }

        let needle = term.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                let haystack = match field {
                    SearchField::Title => &r.title,
                    SearchField::Author => &r.author,
                    SearchField::Isbn => unreachable!("handled above"),
                };
                haystack.to_lowercase().contains(&needle)
            })
            .collect()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add a record, returning its new sorted position
    ///
    /// Fails with `DuplicateIsbn` if the ISBN is already present; the
    /// collection is left unchanged in that case.
    pub fn add(&mut self, record: Record) -> Result<usize> {
        if self.find_by_isbn(&record.isbn).is_some() {
            return Err(ShelfError::DuplicateIsbn(record.isbn));
        }

        self.ensure_capacity();

        let isbn = record.isbn.clone();
        self.records.push(record);
        self.sort_by_title();

        let idx = self
            .find_by_isbn(&isbn)
            .expect("record present after insert");
        Ok(idx)
    }

    /// Apply a patch to the record with the given ISBN
    ///
    /// Each supplied field is validated before any of them is written,
    /// so a rejected patch leaves the record untouched. The collection
    /// is re-sorted only when the title changed.
    pub fn edit(&mut self, isbn: &str, patch: RecordPatch) -> Result<()> {
        let idx = self
            .find_by_isbn(isbn)
            .ok_or_else(|| ShelfError::NotFound(isbn.to_string()))?;

        if let Some(title) = &patch.title {
            record::validate_field("title", title, MAX_TITLE_LEN)?;
        }
        if let Some(author) = &patch.author {
            record::validate_field("author", author, MAX_AUTHOR_LEN)?;
        }

        let mut title_changed = false;
        let entry = &mut self.records[idx];

        if let Some(title) = patch.title {
            title_changed = title != entry.title;
            entry.title = title;
        }
        if let Some(author) = patch.author {
            entry.author = author;
        }
        if let Some(year) = patch.year {
            entry.year = year;
        }

        if title_changed {
            self.sort_by_title();
        }

        Ok(())
    }

    /// Remove the record with the given ISBN
    ///
    /// Records at higher positions shift down one slot, preserving the
    /// relative order of the remainder. Capacity is unchanged.
    pub fn delete(&mut self, isbn: &str) -> Result<()> {
        let idx = self
            .find_by_isbn(isbn)
            .ok_or_else(|| ShelfError::NotFound(isbn.to_string()))?;

        self.records.remove(idx);
        Ok(())
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Grow the backing allocation if the next insert would exceed it
    ///
    /// Doubles the current capacity (or starts at the default for a
    /// zero-capacity store). Done explicitly rather than letting `Vec`
    /// pick, so the 100/200/400 transitions stay observable.
    fn ensure_capacity(&mut self) {
        let capacity = self.records.capacity();
        if self.records.len() < capacity {
            return;
        }
        let target = if capacity == 0 {
            INITIAL_CAPACITY
        } else {
            capacity * 2
        };
        self.records.reserve_exact(target - self.records.len());
    }

    /// Re-establish the ordering invariant
    ///
    /// Comparison key is the lowercase title. The sort is unstable:
    /// order among equal titles is unspecified.
    fn sort_by_title(&mut self) {
        self.records
            .sort_unstable_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
