//! Statistics module
//!
//! Computes the most frequent authors over the current collection.
//!
//! The computation is a fixed-size tracking table, not a true frequency
//! ranking: once all slots are claimed by distinct authors, records by
//! any other author are silently dropped for the remainder of the scan,
//! and an existing slot is never evicted for a higher-frequency
//! newcomer. The result is order-dependent. Swapping in a real
//! frequency map would change observable output for existing catalogs,
//! so the approximation is kept deliberately.

use crate::record::Record;

/// Number of slots in the default tracking table
pub const TOP_AUTHOR_SLOTS: usize = 5;

/// One occupied slot of the tracking table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorCount {
    pub author: String,
    pub count: usize,
}

/// Most frequent authors with the default slot count
pub fn top_authors(records: &[Record]) -> Vec<AuthorCount> {
    top_authors_k(records, TOP_AUTHOR_SLOTS)
}

/// Most frequent authors over a `k`-slot tracking table
///
/// Grouping is by exact (case-sensitive) author string. Returns the
/// occupied slots in their internal positions; empty slots are omitted.
pub fn top_authors_k(records: &[Record], k: usize) -> Vec<AuthorCount> {
    let mut slots: Vec<Option<AuthorCount>> = vec![None; k];

    for record in records {
        // Increment an occupied slot with a matching author
        if let Some(slot) = slots
            .iter_mut()
            .flatten()
            .find(|slot| slot.author == record.author)
        {
            slot.count += 1;
            continue;
        }

        // Claim the first empty slot; if none remain, the record is
        // dropped from consideration (no eviction)
        if let Some(empty) = slots.iter_mut().find(|slot| slot.is_none()) {
            *empty = Some(AuthorCount {
                author: record.author.clone(),
                count: 1,
            });
        }
    }

    slots.into_iter().flatten().collect()
}
