//! Persistence codec module
//!
//! Whole-file binary persistence for the catalog.
//!
//! ## File Format
//! ```text
//! ┌──────────────┬──────────────────────────────────────┐
//! │ count (8 LE) │        count × 226-byte records      │
//! └──────────────┴──────────────────────────────────────┘
//! ```
//! No version field and no checksum; format changes require a full
//! rewrite. See [`layout`] for the per-record byte layout.

pub mod layout;

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, ShelfError};
use crate::record::Record;

use layout::{COUNT_HEADER_SIZE, RECORD_SIZE};

/// Serializes and deserializes the whole catalog to one file
#[derive(Debug, Clone)]
pub struct PersistenceCodec {
    path: PathBuf,
}

impl PersistenceCodec {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the collection, overwriting any prior file contents
    ///
    /// Records are written in the order given (the store's current sort
    /// order). The overwrite is direct, not write-temp-then-rename; a
    /// crash mid-write can corrupt a previously valid file. Known
    /// durability gap inherited from the reference format.
    pub fn save(&self, records: &[Record]) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);

        writer.write_all(&(records.len() as u64).to_le_bytes())?;
        for record in records {
            writer.write_all(&layout::encode_record(record))?;
        }
        writer.flush()?;

        Ok(())
    }

    /// Read the collection back
    ///
    /// Returns:
    /// - `Ok(vec![])` — no file exists yet (first run)
    /// - `Ok(records)` — exactly `count` records read
    /// - `Err(CorruptCatalog)` — header or body shorter than declared,
    ///   or undecodable field bytes
    ///
    /// "Absent" and "corrupt" are distinct outcomes so a damaged file
    /// never silently masquerades as an empty catalog.
    pub fn load(&self) -> Result<Vec<Record>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let mut reader = BufReader::new(file);

        let mut header = [0u8; COUNT_HEADER_SIZE];
        reader
            .read_exact(&mut header)
            .map_err(|_| ShelfError::CorruptCatalog("truncated count header".to_string()))?;
        let count = u64::from_le_bytes(header) as usize;

        // The header is untrusted until the body checks out, so cap the
        // up-front reservation instead of allocating `count` blindly.
        let mut records = Vec::with_capacity(count.min(4096));
        let mut buf = [0u8; RECORD_SIZE];

        for index in 0..count {
            reader.read_exact(&mut buf).map_err(|_| {
                ShelfError::CorruptCatalog(format!(
                    "file ends after {} of {} records",
                    index, count
                ))
            })?;
            records.push(layout::decode_record(&buf)?);
        }

        Ok(records)
    }
}
