//! Pure geometric transforms over whole grids
//!
//! Each transform builds a fresh grid layer by layer; the source grid is
//! never touched. Per-layer defaults travel with their layer, so an
//! emptiness test gives the same answer before and after a transform.

use crate::grid::layer::Layer;
use crate::grid::store::LayerGrid;
use ndarray::{Array2, s};

impl<T: Clone + PartialEq> LayerGrid<T> {
    /// New grid with rows and columns swapped: `new[c][r] = old[r][c]`
    ///
    /// Layer order and per-layer defaults are preserved.
    pub fn transpose(&self) -> Self {
        self.rebuild(|cells| cells.t().to_owned())
    }

    /// New grid with each row reversed within every layer
    pub fn flip_horizontal(&self) -> Self {
        self.rebuild(|cells| cells.slice(s![.., ..;-1]).to_owned())
    }

    /// New grid with the row order reversed within every layer
    pub fn flip_vertical(&self) -> Self {
        self.rebuild(|cells| cells.slice(s![..;-1, ..]).to_owned())
    }

    fn rebuild(&self, map: impl Fn(&Array2<Option<T>>) -> Array2<Option<T>>) -> Self {
        let mut out = Self::new();
        for layer in self.layers() {
            let cells = map(layer.cells());
            out.push_layer(Layer::from_cells(cells, layer.default_value().cloned()));
        }
        out
    }
}
