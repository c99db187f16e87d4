//! Feeding raw text into a [`LineStorage`].
//!
//! Each input line is tokenized with [`kwic_core::text::tokenize`]; blank
//! lines are skipped and every other line is appended with
//! [`LineStorage::add_line`], so observers see one notification per line.

use std::io::BufRead;

use kwic_core::text::tokenize;
use tracing::debug;

use crate::errors::Result;
use crate::storage::LineStorage;

/// Read `reader` to EOF, adding each non-blank line to `storage`.
///
/// Returns the number of lines added.
pub fn read_into<R: BufRead>(reader: R, storage: &mut LineStorage) -> Result<usize> {
    let mut added = 0;
    let mut skipped = 0;
    for text in reader.lines() {
        let text = text?;
        match tokenize(&text) {
            Some(line) => {
                storage.add_line(line)?;
                added += 1;
            }
            None => skipped += 1,
        }
    }
    debug!(added, skipped, "input read");
    Ok(added)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
