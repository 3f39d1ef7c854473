//! Single grid plane with an optional per-layer default value

use ndarray::Array2;

/// One 2D plane within a layered grid
///
/// Cells hold `Option<T>` so that element types without a natural sentinel
/// still have an explicit "absent" state. Emptiness is equality-based: a
/// cell is empty iff it equals the layer's default, and a layer whose
/// default is absent treats only absent cells as empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer<T: Clone + PartialEq> {
    pub(crate) cells: Array2<Option<T>>,
    pub(crate) default: Option<T>,
}

impl<T: Clone + PartialEq> Layer<T> {
    /// Create a layer with every cell set to `fill`
    pub fn uniform(rows: usize, cols: usize, fill: Option<T>, default: Option<T>) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), fill),
            default,
        }
    }

    /// Wrap prepared cell data with its default value
    pub const fn from_cells(cells: Array2<Option<T>>, default: Option<T>) -> Self {
        Self { cells, default }
    }

    /// Number of rows in the plane
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns in the plane
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// The layer's default ("empty") value, if one was supplied
    pub const fn default_value(&self) -> Option<&T> {
        self.default.as_ref()
    }

    /// Cell contents, or `None` when the coordinate is out of range
    pub fn cell(&self, row: usize, col: usize) -> Option<&Option<T>> {
        self.cells.get((row, col))
    }

    /// Equality-based emptiness test, `None` when out of range
    pub fn is_empty_at(&self, row: usize, col: usize) -> Option<bool> {
        self.cells.get((row, col)).map(|cell| *cell == self.default)
    }

    /// Read-only view of the raw cell plane
    pub const fn cells(&self) -> &Array2<Option<T>> {
        &self.cells
    }

    /// Reset every cell to the layer's default
    pub fn fill_default(&mut self) {
        self.cells.fill(self.default.clone());
    }

    /// Replace a cell, returning false when the coordinate is out of range
    pub(crate) fn put(&mut self, row: usize, col: usize, value: Option<T>) -> bool {
        match self.cells.get_mut((row, col)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }
}
