//! Catalog store module
//!
//! The in-memory record collection with capacity management,
//! uniqueness enforcement, search, and title ordering.

mod catalog;

pub use catalog::{CatalogStore, RecordPatch, SearchField, INITIAL_CAPACITY};
