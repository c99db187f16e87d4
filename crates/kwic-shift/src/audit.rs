//! Consistency audit between a source storage and its shift index.
//!
//! The shift index is correct when its lines, counted as a multiset, equal
//! the rotations of every source line counted the same way. Entry order is
//! irrelevant. [`audit`] reports the difference in both directions without
//! touching either storage.

use std::collections::HashMap;

use kwic_core::Line;
use kwic_storage::LineStorage;

use crate::rotation::RotationIter;

/// Difference between the expected and the actual shift index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShiftAudit {
    /// Expected shifts absent from the index, with how many copies are missing.
    pub missing: Vec<(Line, usize)>,
    /// Index entries beyond what the source accounts for, with the excess count.
    pub surplus: Vec<(Line, usize)>,
}

impl ShiftAudit {
    /// Whether the index matches the source exactly.
    pub fn is_consistent(&self) -> bool {
        self.missing.is_empty() && self.surplus.is_empty()
    }

    /// Total number of missing entries, counting multiplicity.
    pub fn missing_count(&self) -> usize {
        self.missing.iter().map(|(_, n)| n).sum()
    }

    /// Total number of surplus entries, counting multiplicity.
    pub fn surplus_count(&self) -> usize {
        self.surplus.iter().map(|(_, n)| n).sum()
    }
}

/// Every rotation of every source line, in source order then offset order.
pub fn expected_shifts(source: &LineStorage) -> Vec<Line> {
    source.lines().flat_map(RotationIter::new).collect()
}

/// Compare `shifts` against the rotations of `source`.
///
/// Both lists in the result are sorted by line.
pub fn audit(source: &LineStorage, shifts: &LineStorage) -> ShiftAudit {
    let expected = expected_shifts(source);
    let mut balance: HashMap<&Line, isize> = HashMap::new();
    for line in &expected {
        *balance.entry(line).or_default() += 1;
    }
    for line in shifts.lines() {
        *balance.entry(line).or_default() -= 1;
    }

    let mut report = ShiftAudit::default();
    for (line, count) in balance {
        if count > 0 {
            report.missing.push((line.clone(), count.unsigned_abs()));
        } else if count < 0 {
            report.surplus.push((line.clone(), count.unsigned_abs()));
        }
    }
    report.missing.sort();
    report.surplus.sort();
    report
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
