//! Breadth-first range marking with obstacle blocking and a parity rule

use crate::grid::coords::{CARDINALS, step};
use crate::grid::store::LayerGrid;
use crate::io::error::Result;
use crate::simulate::visited::ParityVisited;
use std::collections::VecDeque;

impl<T: Clone + PartialEq> LayerGrid<T> {
    /// Mark every cell reachable from `start` within `range` steps
    ///
    /// The walk expands breadth-first over the four cardinal directions,
    /// filtering on dequeue: out-of-bounds positions and positions past the
    /// step budget are discarded, and a cell holding a non-default value on
    /// any obstacle layer is neither marked nor expanded through. Reachable
    /// cells are marked on `target_layer` with `mark`; with `exact` set,
    /// only cells whose remaining budget `range - steps` is even are marked.
    /// On a bipartite grid walk that restriction is equivalent to "reachable
    /// in exactly `range` steps", since a detour always costs two.
    ///
    /// A (cell, step-parity) visited map prunes redundant expansion; FIFO
    /// order makes the first visit of each pair the cheapest, so the marked
    /// set equals that of the unpruned walk.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::LayerOutOfBounds`] when `target_layer` or
    /// any obstacle index is invalid; indices are validated before any
    /// mutation. A `start` outside the grid is not an error: the walk
    /// discards it and marks nothing, matching the dequeue filter.
    pub fn mark_move_range(
        &mut self,
        start: [usize; 2],
        range: usize,
        mark: T,
        target_layer: usize,
        obstacle_layers: &[usize],
        exact: bool,
    ) -> Result<()> {
        self.validate_layer(target_layer)?;
        for &obstacle in obstacle_layers {
            self.validate_layer(obstacle)?;
        }

        let mut visited = ParityVisited::new(self.rows(), self.cols());
        let mut queue: VecDeque<([i32; 2], usize)> = VecDeque::new();
        queue.push_back(([start[0] as i32, start[1] as i32], 0));

        'walk: while let Some((position, steps)) = queue.pop_front() {
            if steps > range || !self.in_bounds(position[0], position[1]) {
                continue;
            }
            let row = position[0] as usize;
            let col = position[1] as usize;

            for &obstacle in obstacle_layers {
                if !self.is_empty(obstacle, row, col)? {
                    continue 'walk;
                }
            }

            if !visited.insert(row, col, steps) {
                continue;
            }

            if !exact || (range - steps) % 2 == 0 {
                self.set_cell(target_layer, row, col, Some(mark.clone()))?;
            }

            for direction in CARDINALS {
                queue.push_back((step(position, direction), steps + 1));
            }
        }

        Ok(())
    }
}
