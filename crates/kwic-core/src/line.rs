//! Word and line value types.
//!
//! A [`Word`] is an immutable token with no delimiter characters inside it.
//! A [`Line`] is an ordered sequence of words. Two lines are equal when they
//! have the same length and the same words at the same positions, so lines
//! can be compared, hashed and counted purely by value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CoreError, Result};
use crate::text::is_delimiter;

/// A single word of a line.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    /// Create a word, rejecting empty text and text containing delimiters.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(CoreError::EmptyWord);
        }
        if text.chars().any(is_delimiter) {
            return Err(CoreError::InvalidWord(text));
        }
        Ok(Self(text))
    }

    /// Build a word from a token the tokenizer already split on delimiters.
    pub(crate) fn from_token(token: &str) -> Self {
        Self(token.to_owned())
    }

    /// Return the inner string as a slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume self and return the inner `String`.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::ops::Deref for Word {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Word {
    type Error = CoreError;
    fn try_from(s: String) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Word {
    type Error = CoreError;
    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

/// An ordered sequence of words.
///
/// Order is significant: `[a, b]` and `[b, a]` are different lines.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Line(Vec<Word>);

impl Line {
    /// Create a line from already-validated words.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self(words)
    }

    /// Create a line from raw strings, validating each as a [`Word`].
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        words
            .into_iter()
            .map(Word::new)
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// The words of this line, in order.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.0
    }

    /// The word at `index`, if any.
    #[must_use]
    pub fn word(&self, index: usize) -> Option<&Word> {
        self.0.get(index)
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the line has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the words in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.0.iter()
    }

    /// Join the words with `separator`.
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        let mut out = String::new();
        for (i, word) in self.0.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            out.push_str(word);
        }
        out
    }

    /// Consume self and return the words.
    #[must_use]
    pub fn into_words(self) -> Vec<Word> {
        self.0
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(" "))
    }
}

impl FromIterator<Word> for Line {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Line {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<Word>> for Line {
    fn from(words: Vec<Word>) -> Self {
        Self(words)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
