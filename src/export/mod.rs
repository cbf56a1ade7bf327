//! CSV export module
//!
//! Writes the catalog to a textual CSV representation.
//!
//! ## Row Format
//! ```text
//! ISBN,Titulo,Autor,Anio
//! 9780140447934,"War and Peace","Leo Tolstoy",1869
//! ```
//! Title and author are double-quoted with no internal quote escaping;
//! an embedded `"` in either field produces a malformed row. That is
//! the format contract, kept as-is.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::record::Record;

/// Header row of the export file
pub const CSV_HEADER: &str = "ISBN,Titulo,Autor,Anio";

/// Writes the collection as CSV
#[derive(Debug)]
pub struct CsvExporter;

impl CsvExporter {
    /// Export records to a file, overwriting any prior contents
    pub fn export(records: &[Record], destination: &Path) -> Result<()> {
        let file = File::create(destination)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(records, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write the header and one row per record, in the order given
    pub fn write_to<W: Write>(records: &[Record], writer: &mut W) -> Result<()> {
        writeln!(writer, "{}", CSV_HEADER)?;
        for record in records {
            writeln!(
                writer,
                "{},\"{}\",\"{}\",{}",
                record.isbn, record.title, record.author, record.year
            )?;
        }
        Ok(())
    }
}
