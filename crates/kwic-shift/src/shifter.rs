//! Incremental maintenance of the circular shift index.
//!
//! [`CircularShifter`] subscribes to a source [`LineStorage`] and mirrors
//! every change into a derived storage:
//!
//! - **Added**: the source's last line is rotated and each rotation is
//!   appended to the derived storage, in offset order.
//! - **Removed**: the removed line's rotations are recomputed. For each one,
//!   the derived storage is scanned from the start and the first equal entry
//!   is deleted. Every scan restarts at index 0, and a deleted entry is gone
//!   before the next scan, so two equal rotations remove two distinct entries.
//!
//! Derived entries carry no link back to their source line, so deletion is
//! resolved purely by value. Entries with equal values are interchangeable.
//! A rotation with no equal entry is skipped: nothing is removed for it and
//! no error is returned. The miss is logged at `warn`.
//!
//! The derived storage must have no other writer, otherwise its contents
//! drift from the source.

use kwic_core::Line;
use kwic_storage::{
    ChangeEvent, LineObserver, LineStorage, Result, SharedLineStorage, StorageError,
};
use tracing::{debug, warn};

use crate::rotation::{RotationIter, rotations};

/// Counts from handling one notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShiftOutcome {
    /// Rotations appended to the derived storage.
    pub inserted: usize,
    /// Derived entries deleted.
    pub removed: usize,
    /// Rotations of a removed line with no matching derived entry.
    pub missed: usize,
}

/// Keeps a derived storage equal to all rotations of all source lines.
pub struct CircularShifter {
    shifts: SharedLineStorage,
}

impl CircularShifter {
    /// Create a shifter that writes into `shifts`.
    pub fn new(shifts: SharedLineStorage) -> Self {
        Self { shifts }
    }

    /// Create a shifter writing into `shifts` and subscribe it to `source`.
    pub fn subscribe_to(source: &mut LineStorage, shifts: SharedLineStorage) {
        source.subscribe(Box::new(Self::new(shifts)));
    }

    /// The derived storage this shifter writes into.
    pub fn shifts(&self) -> &SharedLineStorage {
        &self.shifts
    }

    /// Apply one source change to the derived storage.
    ///
    /// A [`ChangeEvent::Added`] from an empty source has no line to read and
    /// fails with [`StorageError::EmptySource`].
    pub fn apply(&self, source: &LineStorage, event: &ChangeEvent) -> Result<ShiftOutcome> {
        match event {
            ChangeEvent::Added => {
                let line = source.last_line().ok_or(StorageError::EmptySource)?;
                self.insert_shifts(RotationIter::new(line))
            }
            ChangeEvent::Removed(line) => self.delete_shifts(&rotations(line)),
        }
    }

    fn insert_shifts(&self, shifts: RotationIter<'_>) -> Result<ShiftOutcome> {
        let mut outcome = ShiftOutcome::default();
        for shift in shifts {
            self.shifts.write().add_line(shift)?;
            outcome.inserted += 1;
        }
        Ok(outcome)
    }

    fn delete_shifts(&self, shifts: &[Line]) -> Result<ShiftOutcome> {
        let mut outcome = ShiftOutcome::default();
        for shift in shifts {
            let mut derived = self.shifts.write();
            if let Some(index) = derived.position(shift) {
                let _ = derived.delete_line(index)?;
                outcome.removed += 1;
            } else {
                warn!(shift = %shift, "no derived entry matches shift, skipping");
                outcome.missed += 1;
            }
        }
        Ok(outcome)
    }
}

impl LineObserver for CircularShifter {
    fn name(&self) -> &str {
        "circular-shifter"
    }

    fn on_change(&self, source: &LineStorage, event: &ChangeEvent) -> Result<()> {
        let outcome = self.apply(source, event)?;
        debug!(
            event = event.name(),
            inserted = outcome.inserted,
            removed = outcome.removed,
            missed = outcome.missed,
            "shifts updated"
        );
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use kwic_core::logging::capture_logs;
    use tracing::Level;

    use super::*;

    fn line(words: &[&str]) -> Line {
        Line::from_words(words.iter().copied()).unwrap()
    }

    fn derived_lines(shifts: &SharedLineStorage) -> Vec<Line> {
        shifts.read().lines().cloned().collect()
    }

    fn setup() -> (LineStorage, SharedLineStorage) {
        let shifts = LineStorage::new().into_shared();
        let mut source = LineStorage::new();
        CircularShifter::subscribe_to(&mut source, shifts.clone());
        (source, shifts)
    }

    #[test]
    fn add_inserts_rotations_in_generation_order() {
        let (mut source, shifts) = setup();
        source.add_line(line(&["the", "cat", "sat"])).unwrap();

        assert_eq!(
            derived_lines(&shifts),
            vec![
                line(&["the", "cat", "sat"]),
                line(&["cat", "sat", "the"]),
                line(&["sat", "the", "cat"]),
            ]
        );
    }

    #[test]
    fn add_reads_the_last_source_line() {
        let shifts = LineStorage::new().into_shared();
        let shifter = CircularShifter::new(shifts.clone());
        let mut source = LineStorage::new();
        source.add_line(line(&["first"])).unwrap();
        source.add_line(line(&["second", "line"])).unwrap();

        let outcome = shifter.apply(&source, &ChangeEvent::Added).unwrap();

        assert_eq!(outcome.inserted, 2);
        assert_eq!(
            derived_lines(&shifts),
            vec![line(&["second", "line"]), line(&["line", "second"])]
        );
    }

    #[test]
    fn add_from_empty_source_is_an_error() {
        let shifter = CircularShifter::new(LineStorage::new().into_shared());
        assert_matches!(
            shifter.apply(&LineStorage::new(), &ChangeEvent::Added),
            Err(StorageError::EmptySource)
        );
    }

    #[test]
    fn add_empty_line_inserts_nothing() {
        let (mut source, shifts) = setup();
        source.add_line(Line::default()).unwrap();
        assert!(shifts.read().is_empty());
    }

    #[test]
    fn delete_restores_empty_index() {
        let (mut source, shifts) = setup();
        source.add_line(line(&["the", "cat", "sat"])).unwrap();
        let _ = source.delete_line(0).unwrap();

        assert!(shifts.read().is_empty());
    }

    #[test]
    fn delete_removes_first_match_only() {
        let (mut source, shifts) = setup();
        source.add_line(line(&["a", "b"])).unwrap();
        source.add_line(line(&["a", "b"])).unwrap();

        let _ = source.delete_line(1).unwrap();

        assert_eq!(
            derived_lines(&shifts),
            vec![line(&["a", "b"]), line(&["b", "a"])]
        );
    }

    #[test]
    fn periodic_line_removes_distinct_entries() {
        let (mut source, shifts) = setup();
        source.add_line(line(&["A", "B", "A", "B"])).unwrap();
        assert_eq!(shifts.read().line_count(), 4);

        let shifter = CircularShifter::new(shifts.clone());
        let outcome = shifter
            .apply(&source, &ChangeEvent::Removed(line(&["A", "B", "A", "B"])))
            .unwrap();

        assert_eq!(outcome, ShiftOutcome { inserted: 0, removed: 4, missed: 0 });
        assert!(shifts.read().is_empty());
    }

    #[test]
    fn missing_shift_is_skipped_and_logged() {
        let (logs, _guard) = capture_logs();
        let (mut source, shifts) = setup();
        source.add_line(line(&["the", "cat", "sat"])).unwrap();
        let out_of_band = shifts.read().position(&line(&["cat", "sat", "the"])).unwrap();
        let _ = shifts.write().delete_line(out_of_band).unwrap();

        assert!(source.delete_line(0).is_ok());

        assert!(shifts.read().is_empty());
        assert!(logs.has_event(Level::WARN, "no derived entry matches shift"));
        let warning = logs
            .events_for_target("kwic_shift")
            .into_iter()
            .find(|e| e.level == Level::WARN)
            .unwrap();
        assert_eq!(warning.field("shift"), Some("cat sat the"));
    }

    #[test]
    fn outcome_counts_misses() {
        let shifts = LineStorage::new().into_shared();
        let shifter = CircularShifter::new(shifts);
        let outcome = shifter
            .apply(&LineStorage::new(), &ChangeEvent::Removed(line(&["x", "y"])))
            .unwrap();
        assert_eq!(outcome, ShiftOutcome { inserted: 0, removed: 0, missed: 2 });
    }

    #[test]
    fn shifts_handle_is_shared() {
        let shifts = LineStorage::new().into_shared();
        let shifter = CircularShifter::new(shifts.clone());
        assert!(std::sync::Arc::ptr_eq(shifter.shifts(), &shifts));
    }
}
