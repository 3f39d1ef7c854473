//! Linear-scan layer utilities: find, count, clear, compare

use crate::grid::store::LayerGrid;
use crate::io::error::Result;

impl<T: Clone + PartialEq> LayerGrid<T> {
    /// Find every cell on a layer holding `item`, in row-major scan order
    ///
    /// Pairs are returned as (col, row): the column comes first, matching
    /// the x/y convention of the original map format rather than the
    /// (row, col) convention used elsewhere in this crate.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::LayerOutOfBounds`] for an invalid index.
    pub fn find_all(&self, layer: usize, item: &T) -> Result<Vec<(usize, usize)>> {
        let plane = self.layer(layer)?;
        let mut matches = Vec::new();
        for ((row, col), cell) in plane.cells().indexed_iter() {
            if cell.as_ref() == Some(item) {
                matches.push((col, row));
            }
        }
        Ok(matches)
    }

    /// Count the cells on a layer holding `item`
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::LayerOutOfBounds`] for an invalid index.
    pub fn count_of(&self, layer: usize, item: &T) -> Result<usize> {
        let plane = self.layer(layer)?;
        Ok(plane
            .cells()
            .iter()
            .filter(|cell| cell.as_ref() == Some(item))
            .count())
    }

    /// Reset every cell on every layer to the owning layer's default
    pub fn clear(&mut self) {
        for layer in self.layers_mut() {
            layer.fill_default();
        }
    }

    /// Reset every cell on one layer to that layer's default
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::LayerOutOfBounds`] for an invalid index.
    pub fn clear_layer(&mut self, layer: usize) -> Result<()> {
        self.layer_mut(layer)?.fill_default();
        Ok(())
    }

    /// Element-wise equality between two layers
    ///
    /// Both indices are validated before any comparison; the scan
    /// short-circuits on the first mismatch. Defaults are not compared, so
    /// two layers with equal cells and different defaults compare equal.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::LayerOutOfBounds`] when either index is
    /// invalid.
    pub fn compare_layers(&self, a: usize, b: usize) -> Result<bool> {
        let first = self.layer(a)?;
        let second = self.layer(b)?;

        for (lhs, rhs) in first.cells().iter().zip(second.cells().iter()) {
            if lhs != rhs {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
