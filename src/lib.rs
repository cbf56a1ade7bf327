//! # shelfdb
//!
//! A single-user book catalog store with:
//! - In-memory catalog with capacity doubling and title ordering
//! - ISBN uniqueness enforcement
//! - Case-insensitive substring search over title and author
//! - Fixed-width binary persistence
//! - CSV export and author frequency statistics
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     External Caller                          │
//! │                   (CLI / menu layer)                         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Library                                │
//! │              (load on open, save on close)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼────────────────┐
//!          │            │                │
//!          ▼            ▼                ▼
//!   ┌─────────────┐ ┌─────────────┐ ┌─────────────┐
//!   │ CatalogStore│ │ Persistence │ │ CsvExporter │
//!   │  (ordered,  │ │    Codec    │ │   / stats   │
//!   │   unique)   │ │ (one file)  │ │ (read-only) │
//!   └─────────────┘ └─────────────┘ └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod codec;
pub mod export;
pub mod stats;
pub mod library;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::Config;
pub use error::{Result, ShelfError};
pub use library::Library;
pub use record::Record;
pub use store::{CatalogStore, RecordPatch, SearchField};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of shelfdb
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
