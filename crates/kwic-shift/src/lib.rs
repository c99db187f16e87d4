//! # kwic-shift
//!
//! Circular shift generation and incremental shift index maintenance.
//!
//! - **Rotations**: [`rotation::rotations`] produces every cyclic word rotation of a line
//! - **Maintainer**: [`CircularShifter`] observes a source [`LineStorage`](kwic_storage::LineStorage)
//!   and keeps a derived storage equal to the multiset of all rotations of all source lines
//! - **Audit**: [`audit::audit`] compares a derived storage against what it should hold
//!
//! ## Crate Position
//!
//! Depends on `kwic-core` and `kwic-storage`. Used by the `kwic` CLI.

#![deny(unsafe_code)]

pub mod audit;
pub mod rotation;
pub mod shifter;

pub use audit::{ShiftAudit, audit, expected_shifts};
pub use rotation::{RotationIter, rotation_at, rotations};
pub use shifter::{CircularShifter, ShiftOutcome};
