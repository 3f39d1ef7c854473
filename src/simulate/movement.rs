//! Synchronized per-layer movement with single-sweep settling
//!
//! One call to [`LayerGrid::settle_step`] performs exactly one sweep over
//! the grid in a direction-specific order. The order guarantees that a
//! token's destination cell is always visited before the token itself, so a
//! token relocated during a sweep is never advanced twice in that sweep.

use crate::grid::coords::Direction;
use crate::grid::store::LayerGrid;
use crate::io::error::Result;

/// Cell visit order for one settling sweep
///
/// The ordering is load-bearing: for every cell the sweep visits, the
/// cell one step in the movement direction has already been visited.
/// - north: columns outer, rows ascending (top row first)
/// - south: columns outer, rows descending (bottom row first)
/// - west: columns ascending outer (leftmost destination first), rows inner
/// - east: mirror of west, columns descending outer
pub fn sweep_coordinates(direction: Direction, rows: usize, cols: usize) -> Vec<[usize; 2]> {
    let mut order = Vec::with_capacity(rows * cols);
    match direction {
        Direction::North => {
            for col in 0..cols {
                for row in 0..rows {
                    order.push([row, col]);
                }
            }
        }
        Direction::South => {
            for col in 0..cols {
                for row in (0..rows).rev() {
                    order.push([row, col]);
                }
            }
        }
        Direction::West => {
            for col in 0..cols {
                for row in 0..rows {
                    order.push([row, col]);
                }
            }
        }
        Direction::East => {
            for col in (0..cols).rev() {
                for row in 0..rows {
                    order.push([row, col]);
                }
            }
        }
    }
    order
}

impl<T: Clone + PartialEq> LayerGrid<T> {
    /// Perform one settling sweep, returning true when nothing moved
    ///
    /// A cell relocates one step in `direction` iff it is non-empty on
    /// `target_layer`, the destination is in bounds, and the destination is
    /// empty on `target_layer` and on every layer in `obstacle_layers`. On
    /// relocation the source cell resets to the target layer's default.
    /// Callers reach the fixed point by calling until the sweep reports
    /// settled, or by using [`LayerGrid::settle`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::LayerOutOfBounds`] when `target_layer` or
    /// any obstacle index is invalid; all indices are validated before any
    /// mutation, so a failed call leaves the grid untouched.
    pub fn settle_step(
        &mut self,
        direction: Direction,
        target_layer: usize,
        obstacle_layers: &[usize],
    ) -> Result<bool> {
        self.validate_layer(target_layer)?;
        for &obstacle in obstacle_layers {
            self.validate_layer(obstacle)?;
        }

        let [row_delta, col_delta] = direction.delta();
        let mut settled = true;

        'cells: for [row, col] in sweep_coordinates(direction, self.rows(), self.cols()) {
            if self.is_empty(target_layer, row, col)? {
                continue;
            }

            let dest_row = row as i32 + row_delta;
            let dest_col = col as i32 + col_delta;
            if !self.in_bounds(dest_row, dest_col) {
                continue;
            }
            let dest_row = dest_row as usize;
            let dest_col = dest_col as usize;

            if !self.is_empty(target_layer, dest_row, dest_col)? {
                continue;
            }
            for &obstacle in obstacle_layers {
                if !self.is_empty(obstacle, dest_row, dest_col)? {
                    continue 'cells;
                }
            }

            let value = self.cell(target_layer, row, col)?.clone();
            let default = self.layer(target_layer)?.default_value().cloned();
            self.set_cell(target_layer, dest_row, dest_col, value)?;
            self.set_cell(target_layer, row, col, default)?;
            settled = false;
        }

        Ok(settled)
    }

    /// Sweep until the grid is settled, returning the number of sweeps
    ///
    /// Each productive sweep moves every unblocked token one step closer to
    /// its wall, so the count is bounded by the grid dimension along
    /// `direction`. The returned count includes the final sweep that
    /// observed no movement; it is therefore always at least 1.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::LayerOutOfBounds`] when `target_layer` or
    /// any obstacle index is invalid.
    pub fn settle(
        &mut self,
        direction: Direction,
        target_layer: usize,
        obstacle_layers: &[usize],
    ) -> Result<usize> {
        let mut sweeps = 0;
        loop {
            sweeps += 1;
            if self.settle_step(direction, target_layer, obstacle_layers)? {
                return Ok(sweeps);
            }
        }
    }
}
