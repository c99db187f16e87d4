//! # kwic-storage
//!
//! Ordered line storage with synchronous change notification.
//!
//! - **Storage**: [`LineStorage`] holds [`Line`](kwic_core::Line)s in insertion order
//! - **Events**: [`ChangeEvent`] describes one add or delete
//! - **Observers**: [`LineObserver`] implementations are notified synchronously,
//!   in registration order, before the mutating call returns
//! - **Input**: [`input::read_into`] tokenizes a reader line by line into a storage
//!
//! ## Crate Position
//!
//! Depends on `kwic-core`. Depended on by `kwic-shift` and the CLI.

#![deny(unsafe_code)]

pub mod errors;
pub mod event;
pub mod input;
pub mod observer;
pub mod storage;

pub use errors::{Result, StorageError};
pub use event::ChangeEvent;
pub use observer::LineObserver;
pub use storage::{LineStorage, SharedLineStorage};
