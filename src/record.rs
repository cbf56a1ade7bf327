//! Record definitions
//!
//! Defines the book record value type and its field constraints.

use crate::error::{Result, ShelfError};

/// Maximum ISBN length in bytes (exact-equality key, no checksum validation)
pub const MAX_ISBN_LEN: usize = 13;

/// Maximum title length in bytes
pub const MAX_TITLE_LEN: usize = 127;

/// Maximum author length in bytes
pub const MAX_AUTHOR_LEN: usize = 79;

/// A single book record
///
/// `isbn` is the unique key; `title` is the sort key (case-insensitive);
/// `author` groups records for statistics (case-sensitive). `year` is
/// unconstrained — zero and negative values are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl Record {
    /// Create a record, validating field lengths
    ///
    /// Over-long fields are rejected rather than truncated. Embedded NUL
    /// bytes are rejected because the on-disk layout is NUL-padded and
    /// could not round-trip them.
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
    ) -> Result<Self> {
        let isbn = isbn.into();
        let title = title.into();
        let author = author.into();

        validate_field("isbn", &isbn, MAX_ISBN_LEN)?;
        validate_field("title", &title, MAX_TITLE_LEN)?;
        validate_field("author", &author, MAX_AUTHOR_LEN)?;

        Ok(Self {
            isbn,
            title,
            author,
            year,
        })
    }
}

/// Validate one text field against its byte-length bound
pub(crate) fn validate_field(field: &'static str, value: &str, max: usize) -> Result<()> {
    if value.len() > max {
        return Err(ShelfError::FieldTooLong {
            field,
            max,
            actual: value.len(),
        });
    }
    if value.contains('\0') {
        return Err(ShelfError::InvalidField {
            field,
            reason: "embedded NUL byte".to_string(),
        });
    }
    Ok(())
}
