//! Observer trait.
//!
//! Observers are registered with [`LineStorage::subscribe`](crate::LineStorage::subscribe)
//! and stay registered for the life of the storage.

use crate::errors::Result;
use crate::event::ChangeEvent;
use crate::storage::LineStorage;

/// Receives every change made to the storage it is subscribed to.
///
/// `on_change` runs synchronously inside the mutating call, after the
/// mutation has been applied. The storage is passed read-only so an observer
/// can inspect it but cannot mutate it re-entrantly. An error stops delivery
/// to later observers and is returned from the mutating call.
pub trait LineObserver: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Handle one change to `source`.
    fn on_change(&self, source: &LineStorage, event: &ChangeEvent) -> Result<()>;
}
