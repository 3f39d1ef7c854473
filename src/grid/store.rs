//! Layered grid storage with bounds-checked access
//!
//! A [`LayerGrid`] owns an ordered sequence of same-shaped [`Layer`]s and
//! enforces the shared rows×cols invariant at every construction and
//! mutation seam. Accessors that expose row or column data return cloned
//! cells rather than aliasing internal storage.

use crate::grid::layer::Layer;
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{
    GridError, Result, cell_out_of_bounds, invalid_parameter, layer_out_of_bounds,
};
use ndarray::Array2;

/// Ordered stack of same-shaped grid layers
///
/// Dimensions are cached alongside the layer sequence so bounds checks never
/// need to consult a layer. A grid built through any factory holds at least
/// one layer; only [`LayerGrid::new`] produces the transient zero-layer
/// state, which accepts a first [`LayerGrid::add_layer`] of any shape.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerGrid<T: Clone + PartialEq> {
    layers: Vec<Layer<T>>,
    rows: usize,
    cols: usize,
}

impl<T: Clone + PartialEq> Default for LayerGrid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + PartialEq> LayerGrid<T> {
    /// Create an empty grid with no layers
    ///
    /// The first added layer fixes the grid's dimensions.
    pub const fn new() -> Self {
        Self {
            layers: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Create a single-layer grid with every cell set to `default`
    ///
    /// Every cell starts empty because it equals the layer default.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidParameter`] when either dimension is zero
    /// or exceeds the safety cap.
    pub fn filled(rows: usize, cols: usize, default: T) -> Result<Self> {
        validate_dimensions(rows, cols)?;
        Ok(Self {
            layers: vec![Layer::uniform(
                rows,
                cols,
                Some(default.clone()),
                Some(default),
            )],
            rows,
            cols,
        })
    }

    /// Create a single-layer grid from explicit 2D data with no default
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidParameter`] for empty or ragged input.
    pub fn from_rows(data: Vec<Vec<T>>) -> Result<Self> {
        let cells = cells_from_rows(data)?;
        let (rows, cols) = cells.dim();
        Ok(Self {
            layers: vec![Layer::from_cells(cells, None)],
            rows,
            cols,
        })
    }

    /// Create one layer per outer index from explicit 3D data, no defaults
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidParameter`] for empty or ragged input and
    /// [`GridError::DimensionMismatch`] when layer shapes disagree.
    pub fn from_layers(data: Vec<Vec<Vec<T>>>) -> Result<Self> {
        if data.is_empty() {
            return Err(invalid_parameter(
                "data",
                &"[]",
                &"at least one layer is required",
            ));
        }

        let mut grid = Self::new();
        for layer_data in data {
            grid.add_layer(layer_data, None)?;
        }
        Ok(grid)
    }

    /// Partition one source plane into N membership layers
    ///
    /// Each mapping produces a layer whose cells hold the source value when
    /// the mapping contains that value, and the layer's default otherwise.
    /// `defaults` supplies one default per mapping; absent entries (or an
    /// absent list) leave the default unset.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidParameter`] for empty or ragged source
    /// data, an empty mapping list, or a `defaults` list whose length does
    /// not match the number of mappings.
    pub fn partitioned(
        source: Vec<Vec<T>>,
        mappings: &[Vec<T>],
        defaults: Option<Vec<Option<T>>>,
    ) -> Result<Self> {
        if mappings.is_empty() {
            return Err(invalid_parameter(
                "mappings",
                &"[]",
                &"at least one membership set is required",
            ));
        }

        let layer_defaults = match defaults {
            Some(list) => {
                if list.len() != mappings.len() {
                    return Err(invalid_parameter(
                        "defaults",
                        &list.len(),
                        &format!("must supply one default per mapping ({})", mappings.len()),
                    ));
                }
                list
            }
            None => vec![None; mappings.len()],
        };

        let source_cells = cells_from_rows(source)?;
        let (rows, cols) = source_cells.dim();

        let mut layers = Vec::with_capacity(mappings.len());
        for (mapping, default) in mappings.iter().zip(layer_defaults) {
            let cells = source_cells.map(|cell| match cell {
                Some(value) if mapping.contains(value) => Some(value.clone()),
                _ => default.clone(),
            });
            layers.push(Layer::from_cells(cells, default));
        }

        Ok(Self { layers, rows, cols })
    }

    /// Number of rows shared by every layer
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns shared by every layer
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of layers in the grid
    pub const fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Borrow a layer by index
    ///
    /// # Errors
    ///
    /// Returns [`GridError::LayerOutOfBounds`] for an invalid index.
    pub fn layer(&self, index: usize) -> Result<&Layer<T>> {
        self.layers
            .get(index)
            .ok_or_else(|| layer_out_of_bounds(index, self.layers.len()))
    }

    /// Mutably borrow a layer by index
    ///
    /// The [`Layer`] API cannot change a layer's shape, so the dimension
    /// invariant survives any mutation through this borrow.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::LayerOutOfBounds`] for an invalid index.
    pub fn layer_mut(&mut self, index: usize) -> Result<&mut Layer<T>> {
        let count = self.layers.len();
        self.layers
            .get_mut(index)
            .ok_or_else(|| layer_out_of_bounds(index, count))
    }

    /// Read-only view of the layer sequence
    pub fn layers(&self) -> &[Layer<T>] {
        &self.layers
    }

    /// Iterate mutably over the layer sequence (crate-internal)
    pub(crate) fn layers_mut(&mut self) -> impl Iterator<Item = &mut Layer<T>> {
        self.layers.iter_mut()
    }

    /// Cloned contents of one row of layer 0 (copy-on-read)
    ///
    /// # Errors
    ///
    /// Returns [`GridError::LayerOutOfBounds`] when the grid has no layers
    /// and [`GridError::CellOutOfBounds`] for an invalid row.
    pub fn row(&self, row: usize) -> Result<Vec<Option<T>>> {
        let base = self.layer(0)?;
        if row >= self.rows {
            return Err(cell_out_of_bounds(row, 0, self.rows, self.cols));
        }
        Ok(base.cells().row(row).to_vec())
    }

    /// Cloned contents of one column of layer 0 (copy-on-read)
    ///
    /// # Errors
    ///
    /// Returns [`GridError::LayerOutOfBounds`] when the grid has no layers
    /// and [`GridError::CellOutOfBounds`] for an invalid column.
    pub fn column(&self, col: usize) -> Result<Vec<Option<T>>> {
        let base = self.layer(0)?;
        if col >= self.cols {
            return Err(cell_out_of_bounds(0, col, self.rows, self.cols));
        }
        Ok(base.cells().column(col).to_vec())
    }

    /// Borrow a single cell
    ///
    /// # Errors
    ///
    /// Returns [`GridError::LayerOutOfBounds`] or
    /// [`GridError::CellOutOfBounds`] for invalid indices.
    pub fn cell(&self, layer: usize, row: usize, col: usize) -> Result<&Option<T>> {
        let (rows, cols) = (self.rows, self.cols);
        self.layer(layer)?
            .cell(row, col)
            .ok_or_else(|| cell_out_of_bounds(row, col, rows, cols))
    }

    /// Replace a single cell
    ///
    /// # Errors
    ///
    /// Returns [`GridError::LayerOutOfBounds`] or
    /// [`GridError::CellOutOfBounds`] for invalid indices.
    pub fn set_cell(&mut self, layer: usize, row: usize, col: usize, value: Option<T>) -> Result<()> {
        let (rows, cols) = (self.rows, self.cols);
        if self.layer_mut(layer)?.put(row, col, value) {
            Ok(())
        } else {
            Err(cell_out_of_bounds(row, col, rows, cols))
        }
    }

    /// Equality-based emptiness test against the layer's default
    ///
    /// # Errors
    ///
    /// Returns [`GridError::LayerOutOfBounds`] or
    /// [`GridError::CellOutOfBounds`] for invalid indices.
    pub fn is_empty(&self, layer: usize, row: usize, col: usize) -> Result<bool> {
        let (rows, cols) = (self.rows, self.cols);
        self.layer(layer)?
            .is_empty_at(row, col)
            .ok_or_else(|| cell_out_of_bounds(row, col, rows, cols))
    }

    /// Pure bounds predicate over signed coordinates
    pub const fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Append a layer built from explicit 2D data
    ///
    /// A grid with no layers accepts any shape and adopts it as the grid's
    /// dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidParameter`] for empty or ragged input and
    /// [`GridError::DimensionMismatch`] when the shape disagrees with the
    /// existing layers.
    pub fn add_layer(&mut self, data: Vec<Vec<T>>, default: Option<T>) -> Result<()> {
        self.add_option_layer(wrap_present(data), default)
    }

    /// Append a layer from optional cell data (crate-internal)
    ///
    /// Same contract as [`LayerGrid::add_layer`], but accepts absent cells.
    pub(crate) fn add_option_layer(
        &mut self,
        data: Vec<Vec<Option<T>>>,
        default: Option<T>,
    ) -> Result<()> {
        let cells = cells_from_option_rows(data)?;
        let (rows, cols) = cells.dim();

        if self.layers.is_empty() {
            self.rows = rows;
            self.cols = cols;
        } else if (rows, cols) != (self.rows, self.cols) {
            return Err(GridError::DimensionMismatch {
                expected: (self.rows, self.cols),
                found: (rows, cols),
            });
        }

        self.layers.push(Layer::from_cells(cells, default));
        Ok(())
    }

    /// Build a single-layer grid from optional cell data (crate-internal)
    pub(crate) fn from_option_rows(data: Vec<Vec<Option<T>>>, default: Option<T>) -> Result<Self> {
        let mut grid = Self::new();
        grid.add_option_layer(data, default)?;
        Ok(grid)
    }

    /// Move every layer of `other` onto the end of this grid
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DimensionMismatch`] when the two grids disagree
    /// in shape; nothing is moved on failure.
    pub fn append_layers(&mut self, other: Self) -> Result<()> {
        if !self.layers.is_empty()
            && !other.layers.is_empty()
            && (other.rows, other.cols) != (self.rows, self.cols)
        {
            return Err(GridError::DimensionMismatch {
                expected: (self.rows, self.cols),
                found: (other.rows, other.cols),
            });
        }

        for layer in other.layers {
            self.push_layer(layer);
        }
        Ok(())
    }

    /// Append a same-shape layer with every cell set to `fill`
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidParameter`] when the grid has no existing
    /// layer to supply the shape.
    pub fn push_uniform_layer(&mut self, fill: Option<T>, default: Option<T>) -> Result<()> {
        if self.layers.is_empty() {
            return Err(invalid_parameter(
                "fill",
                &"<uniform layer>",
                &"a uniform layer needs an existing layer to copy its shape from",
            ));
        }

        self.layers
            .push(Layer::uniform(self.rows, self.cols, fill, default));
        Ok(())
    }

    /// Append a prepared layer, adopting its shape when the grid is empty
    ///
    /// Callers must supply a layer matching the grid shape; transforms do so
    /// by construction.
    pub(crate) fn push_layer(&mut self, layer: Layer<T>) {
        if self.layers.is_empty() {
            self.rows = layer.rows();
            self.cols = layer.cols();
        }
        debug_assert_eq!((layer.rows(), layer.cols()), (self.rows, self.cols));
        self.layers.push(layer);
    }

    /// Validate a layer index, returning it unchanged
    ///
    /// # Errors
    ///
    /// Returns [`GridError::LayerOutOfBounds`] for an invalid index.
    pub(crate) fn validate_layer(&self, index: usize) -> Result<usize> {
        if index < self.layers.len() {
            Ok(index)
        } else {
            Err(layer_out_of_bounds(index, self.layers.len()))
        }
    }
}

/// Wrap plain row data as uniformly present cells
fn wrap_present<T>(data: Vec<Vec<T>>) -> Vec<Vec<Option<T>>> {
    data.into_iter()
        .map(|row| row.into_iter().map(Some).collect())
        .collect()
}

/// Convert row data to an `Array2` of present cells, validating shape
fn cells_from_rows<T: Clone + PartialEq>(data: Vec<Vec<T>>) -> Result<Array2<Option<T>>> {
    cells_from_option_rows(wrap_present(data))
}

/// Convert optional row data to an `Array2`, validating shape
fn cells_from_option_rows<T: Clone + PartialEq>(
    data: Vec<Vec<Option<T>>>,
) -> Result<Array2<Option<T>>> {
    let rows = data.len();
    let cols = data.first().map_or(0, Vec::len);
    if rows == 0 || cols == 0 {
        return Err(invalid_parameter(
            "data",
            &format!("{rows}x{cols}"),
            &"grid data must have at least one row and one column",
        ));
    }
    validate_dimensions(rows, cols)?;

    if let Some(bad) = data.iter().find(|row| row.len() != cols) {
        return Err(invalid_parameter(
            "data",
            &bad.len(),
            &format!("every row must have {cols} elements"),
        ));
    }

    let flat: Vec<Option<T>> = data.into_iter().flatten().collect();

    Array2::from_shape_vec((rows, cols), flat).map_err(|e| {
        invalid_parameter(
            "data",
            &format!("{rows}x{cols}"),
            &format!("shape error: {e}"),
        )
    })
}

/// Reject zero or runaway dimensions before allocating
fn validate_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(invalid_parameter(
            "dimensions",
            &format!("{rows}x{cols}"),
            &"grid dimensions must be non-zero",
        ));
    }
    if rows > MAX_GRID_DIMENSION || cols > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            "dimensions",
            &format!("{rows}x{cols}"),
            &format!("grid dimensions are capped at {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}
