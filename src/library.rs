//! Library Module
//!
//! The facade that coordinates all components.
//!
//! ## Responsibilities
//! - Load the catalog from disk on open (empty catalog on first run)
//! - Delegate catalog operations to the store
//! - Persist on demand and on close
//! - Export to CSV on demand

use std::fs;
use std::path::{Path, PathBuf};

use crate::codec::PersistenceCodec;
use crate::config::Config;
use crate::error::Result;
use crate::export::CsvExporter;
use crate::record::Record;
use crate::stats::{self, AuthorCount};
use crate::store::{CatalogStore, RecordPatch, SearchField};

/// A catalog with its persistence wiring
///
/// Exclusively owned by the caller; one instance per process. All
/// operations are synchronous and blocking.
pub struct Library {
    config: Config,
    store: CatalogStore,
    codec: PersistenceCodec,
}

impl Library {
    /// Open a library rooted at the configured data directory
    ///
    /// On startup:
    /// 1. Create the data directory if it doesn't exist
    /// 2. Load the persisted catalog (empty on first run)
    /// 3. Build the store around the loaded records
    ///
    /// A corrupt catalog file is surfaced as an error rather than
    /// silently producing an empty catalog.
    pub fn open(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)?;

        let codec = PersistenceCodec::new(config.catalog_path());
        let records = codec.load()?;

        tracing::info!(
            count = records.len(),
            path = %codec.path().display(),
            "catalog loaded"
        );

        Ok(Self {
            config,
            store: CatalogStore::from_records(records),
            codec,
        })
    }

    /// Open with a data directory (convenience method)
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().data_dir(path).build();
        Self::open(config)
    }

    // =========================================================================
    // Catalog Operations
    // =========================================================================

    /// Add a record, returning its sorted position
    pub fn add(&mut self, record: Record) -> Result<usize> {
        let idx = self.store.add(record)?;
        tracing::debug!(index = idx, count = self.store.len(), "record added");
        Ok(idx)
    }

    /// Patch the record with the given ISBN
    pub fn edit(&mut self, isbn: &str, patch: RecordPatch) -> Result<()> {
        self.store.edit(isbn, patch)
    }

    /// Remove the record with the given ISBN
    pub fn delete(&mut self, isbn: &str) -> Result<()> {
        self.store.delete(isbn)?;
        tracing::debug!(isbn, count = self.store.len(), "record deleted");
        Ok(())
    }

    /// Look up a record by exact ISBN
    pub fn find_by_isbn(&self, isbn: &str) -> Option<&Record> {
        self.store
            .find_by_isbn(isbn)
            .map(|idx| &self.store.list()[idx])
    }

    /// Case-insensitive substring search (exact match for ISBN)
    pub fn search(&self, term: &str, field: SearchField) -> Vec<&Record> {
        self.store.search(term, field)
    }

    /// All records in title-sorted order
    pub fn list(&self) -> &[Record] {
        self.store.list()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Most frequent authors over the current collection
    pub fn top_authors(&self) -> Vec<AuthorCount> {
        stats::top_authors(self.store.list())
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Persist the current collection
    ///
    /// An I/O failure leaves the in-memory collection untouched; the
    /// caller may retry or export instead.
    pub fn save(&self) -> Result<()> {
        self.codec.save(self.store.list())?;
        tracing::info!(
            count = self.store.len(),
            path = %self.codec.path().display(),
            "catalog saved"
        );
        Ok(())
    }

    /// Export the collection as CSV
    ///
    /// Writes to `destination` when given, otherwise to the configured
    /// default export path. Returns the path written.
    pub fn export_csv(&self, destination: Option<&Path>) -> Result<PathBuf> {
        let path = destination
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.config.export_path());

        CsvExporter::export(self.store.list(), &path)?;
        tracing::info!(
            count = self.store.len(),
            path = %path.display(),
            "catalog exported"
        );
        Ok(path)
    }

    /// Close the library, persisting the collection first
    pub fn close(self) -> Result<()> {
        self.save()
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the underlying store
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }
}
