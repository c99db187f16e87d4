//! Cyclic word rotations.
//!
//! The rotation of a line of `n` words at start offset `i` reads the words
//! `i, i+1, …, i+n-1 (mod n)`. A line has exactly `n` rotations, one per
//! offset, produced in increasing offset order. Rotations that coincide in
//! value (periodic lines such as `a b a b`) are still produced once per
//! offset. An empty line has no rotations.

use kwic_core::Line;

/// All rotations of `line`, ordered by start offset. Element `0` is `line` itself.
pub fn rotations(line: &Line) -> Vec<Line> {
    RotationIter::new(line).collect()
}

/// The rotation of `line` starting at `offset`, or `None` if `offset >= line.len()`.
pub fn rotation_at(line: &Line, offset: usize) -> Option<Line> {
    (offset < line.len()).then(|| rotate(line, offset))
}

fn rotate(line: &Line, offset: usize) -> Line {
    let (head, tail) = line.words().split_at(offset);
    tail.iter().chain(head).cloned().collect()
}

/// Lazy iterator over the rotations of a line.
#[derive(Clone, Debug)]
pub struct RotationIter<'a> {
    line: &'a Line,
    next: usize,
}

impl<'a> RotationIter<'a> {
    /// Start at offset 0.
    pub fn new(line: &'a Line) -> Self {
        Self { line, next: 0 }
    }
}

impl Iterator for RotationIter<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        let rotation = rotation_at(self.line, self.next)?;
        self.next += 1;
        Some(rotation)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.line.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RotationIter<'_> {}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
