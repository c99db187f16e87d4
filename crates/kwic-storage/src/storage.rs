//! Ordered line storage.
//!
//! [`LineStorage`] keeps lines in insertion order and owns the list of
//! observers subscribed to it. Every `add_line` / `delete_line` applies the
//! mutation first and then notifies each observer in registration order,
//! so observers always see the storage in its post-change state.

use std::fmt;
use std::sync::Arc;

use kwic_core::Line;
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::errors::{Result, StorageError};
use crate::event::ChangeEvent;
use crate::observer::LineObserver;

/// A storage shared between its single writer and any number of readers.
pub type SharedLineStorage = Arc<RwLock<LineStorage>>;

/// Ordered collection of lines that notifies observers on change.
#[derive(Default)]
pub struct LineStorage {
    lines: Vec<Line>,
    observers: Vec<Box<dyn LineObserver>>,
}

impl LineStorage {
    /// Create an empty storage with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap this storage for sharing.
    #[must_use]
    pub fn into_shared(self) -> SharedLineStorage {
        Arc::new(RwLock::new(self))
    }

    /// Register an observer for every later change. There is no unsubscribe.
    pub fn subscribe(&mut self, observer: Box<dyn LineObserver>) {
        debug!(observer = observer.name(), "subscribing observer");
        self.observers.push(observer);
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Append `line` and notify observers with [`ChangeEvent::Added`].
    pub fn add_line(&mut self, line: Line) -> Result<()> {
        debug!(index = self.lines.len(), words = line.len(), "adding line");
        self.lines.push(line);
        self.notify(&ChangeEvent::Added)
    }

    /// Remove the line at `index` and notify observers with
    /// [`ChangeEvent::Removed`] carrying its value.
    ///
    /// Returns the removed line. An out-of-range index changes nothing and
    /// sends no notification.
    pub fn delete_line(&mut self, index: usize) -> Result<Line> {
        if index >= self.lines.len() {
            return Err(StorageError::IndexOutOfRange {
                index,
                len: self.lines.len(),
            });
        }
        let removed = self.lines.remove(index);
        debug!(index, words = removed.len(), "deleted line");
        self.notify(&ChangeEvent::Removed(removed.clone()))?;
        Ok(removed)
    }

    /// The line at `index`, if any.
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// The most recently appended line still present.
    #[must_use]
    pub fn last_line(&self) -> Option<&Line> {
        self.lines.last()
    }

    /// Number of lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the storage holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over the lines in storage order.
    pub fn lines(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Index of the first line equal to `line`.
    #[must_use]
    pub fn position(&self, line: &Line) -> Option<usize> {
        self.lines.iter().position(|l| l == line)
    }

    fn notify(&self, event: &ChangeEvent) -> Result<()> {
        for observer in &self.observers {
            trace!(observer = observer.name(), event = event.name(), "notifying observer");
            observer.on_change(self, event)?;
        }
        Ok(())
    }
}

impl fmt::Debug for LineStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineStorage")
            .field("lines", &self.lines)
            .field(
                "observers",
                &self.observers.iter().map(|o| o.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
