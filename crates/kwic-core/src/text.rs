//! Tokenizer for raw KWIC input lines.
//!
//! A line of input text is split into words on any run of the delimiter
//! characters in [`DELIMITERS`]. Delimiters never appear inside a word and
//! are not themselves tokens. A line with no words is blank and yields `None`.

use crate::line::{Line, Word};

/// Characters that separate words: space, tab, newline, carriage return, form feed.
pub const DELIMITERS: [char; 5] = [' ', '\t', '\n', '\r', '\x0c'];

/// Whether `c` separates words.
#[inline]
pub fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

/// Split `text` into a [`Line`] of words.
///
/// Returns `None` when the text contains no words (empty or delimiters only).
pub fn tokenize(text: &str) -> Option<Line> {
    let words: Vec<Word> = text
        .split(is_delimiter)
        .filter(|token| !token.is_empty())
        .map(Word::from_token)
        .collect();
    if words.is_empty() {
        None
    } else {
        Some(Line::new(words))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
