//! Fixed-width record layout
//!
//! Encoding and decoding of one record within the catalog file.
//!
//! ## Record Layout (226 bytes)
//! ```text
//! ┌───────────┬────────────┬────────────┬─────────────┐
//! │ isbn (14) │ title (128)│ author (80)│ year (4 LE) │
//! └───────────┴────────────┴────────────┴─────────────┘
//! ```
//! String fields are NUL-padded to their full width; a field's value is
//! the bytes before the first NUL (or the whole field if none). Year is
//! a little-endian signed 32-bit integer.

use crate::error::{Result, ShelfError};
use crate::record::Record;

/// Width of the ISBN field (13 bytes + NUL terminator slot)
pub const ISBN_FIELD: usize = 14;

/// Width of the title field
pub const TITLE_FIELD: usize = 128;

/// Width of the author field
pub const AUTHOR_FIELD: usize = 80;

/// Width of the year field
pub const YEAR_FIELD: usize = 4;

/// Total fixed width of one encoded record
pub const RECORD_SIZE: usize = ISBN_FIELD + TITLE_FIELD + AUTHOR_FIELD + YEAR_FIELD;

/// Size of the count header at the start of the file
pub const COUNT_HEADER_SIZE: usize = 8;

/// Encode one record into its fixed-width form
///
/// Field lengths are enforced at `Record` construction, so every field
/// fits its slot here.
pub fn encode_record(record: &Record) -> [u8; RECORD_SIZE] {
    let mut buf = [0u8; RECORD_SIZE];

    let (isbn_slot, rest) = buf.split_at_mut(ISBN_FIELD);
    let (title_slot, rest) = rest.split_at_mut(TITLE_FIELD);
    let (author_slot, year_slot) = rest.split_at_mut(AUTHOR_FIELD);

    write_padded(isbn_slot, &record.isbn);
    write_padded(title_slot, &record.title);
    write_padded(author_slot, &record.author);
    year_slot.copy_from_slice(&record.year.to_le_bytes());

    buf
}

/// Decode one record from its fixed-width form
pub fn decode_record(buf: &[u8; RECORD_SIZE]) -> Result<Record> {
    let (isbn_slot, rest) = buf.split_at(ISBN_FIELD);
    let (title_slot, rest) = rest.split_at(TITLE_FIELD);
    let (author_slot, year_slot) = rest.split_at(AUTHOR_FIELD);

    let isbn = read_padded(isbn_slot, "isbn")?;
    let title = read_padded(title_slot, "title")?;
    let author = read_padded(author_slot, "author")?;

    let year = i32::from_le_bytes([year_slot[0], year_slot[1], year_slot[2], year_slot[3]]);

    Ok(Record {
        isbn,
        title,
        author,
        year,
    })
}

/// Copy a string into a NUL-padded slot
fn write_padded(slot: &mut [u8], value: &str) {
    let bytes = value.as_bytes();
    slot[..bytes.len()].copy_from_slice(bytes);
    // remaining bytes are already zero
}

/// Read a NUL-padded slot back into a string
fn read_padded(slot: &[u8], field: &'static str) -> Result<String> {
    let end = slot.iter().position(|&b| b == 0).unwrap_or(slot.len());
    let bytes = &slot[..end];

    String::from_utf8(bytes.to_vec())
        .map_err(|_| ShelfError::CorruptCatalog(format!("{} field is not valid UTF-8", field)))
}
