//! Compact visited tracking for parity-aware breadth-first traversal

use bitvec::bitvec;
use bitvec::vec::BitVec;

/// Per-cell visited planes, one per step parity
///
/// A breadth-first range walk may legitimately reach the same cell at both
/// an even and an odd step count, and the two visits mark differently under
/// the exact-distance rule. Tracking (cell, parity) pairs instead of bare
/// cells prunes redundant expansion without changing which cells get marked:
/// FIFO order makes the first dequeue of each pair minimal in steps, and any
/// later same-parity visit can only repeat its work.
#[derive(Clone, Debug)]
pub struct ParityVisited {
    even: BitVec,
    odd: BitVec,
    cols: usize,
}

impl ParityVisited {
    /// Create cleared planes for a rows×cols grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            even: bitvec![0; rows * cols],
            odd: bitvec![0; rows * cols],
            cols,
        }
    }

    /// Record a visit, returning true when the (cell, parity) pair is new
    pub fn insert(&mut self, row: usize, col: usize, steps: usize) -> bool {
        let index = row * self.cols + col;
        let plane = if steps % 2 == 0 {
            &mut self.even
        } else {
            &mut self.odd
        };
        match plane.get_mut(index) {
            Some(mut bit) => {
                let fresh = !*bit;
                bit.set(true);
                fresh
            }
            None => false,
        }
    }

    /// Test whether a (cell, parity) pair has been visited
    pub fn contains(&self, row: usize, col: usize, steps: usize) -> bool {
        let index = row * self.cols + col;
        let plane = if steps % 2 == 0 { &self.even } else { &self.odd };
        plane.get(index).as_deref() == Some(&true)
    }

    /// Count visited (cell, parity) pairs across both planes
    pub fn count(&self) -> usize {
        self.even.count_ones() + self.odd.count_ones()
    }
}
