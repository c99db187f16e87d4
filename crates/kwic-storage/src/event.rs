//! Change notifications emitted by [`LineStorage`](crate::LineStorage).

use kwic_core::Line;

/// One change to a storage, delivered to every observer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChangeEvent {
    /// A line was appended. Observers read it back as the storage's last line.
    Added,
    /// A line was removed. Carries the removed value; its former index is gone.
    Removed(Line),
}

impl ChangeEvent {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed(_) => "removed",
        }
    }
}
