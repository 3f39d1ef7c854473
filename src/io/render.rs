//! Text rendering of layered grids with display-mode selection

use crate::grid::store::LayerGrid;
use crate::io::configuration::EMPTY_TOKEN;
use crate::io::error::Result;
use std::fmt::Display;

/// Which projection of the grid to render
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    /// Every layer in sequence, each under a header line
    AllLayers,
    /// One layer by index
    SingleLayer(usize),
    /// Per cell, the highest-indexed layer whose value differs from that
    /// layer's default, falling back to layer 0 unconditionally
    Overlay,
}

/// Render a grid to aligned delimited text
///
/// Cells that equal their layer's default render as the empty token, so
/// rendered output parses back to an equivalent layer under the same
/// default.
///
/// # Errors
///
/// Returns [`crate::GridError::LayerOutOfBounds`] for an invalid
/// single-layer index, or when overlay rendering is asked of a grid with no
/// layers.
pub fn render<T>(grid: &LayerGrid<T>, mode: DisplayMode) -> Result<String>
where
    T: Display + Clone + PartialEq,
{
    match mode {
        DisplayMode::AllLayers => {
            let mut blocks = Vec::with_capacity(grid.layer_count());
            for index in 0..grid.layer_count() {
                let body = render_tokens(grid, &layer_tokens(grid, index)?);
                blocks.push(format!("Layer {index}:\n{body}"));
            }
            Ok(blocks.join("\n\n"))
        }
        DisplayMode::SingleLayer(index) => Ok(render_tokens(grid, &layer_tokens(grid, index)?)),
        DisplayMode::Overlay => Ok(render_tokens(grid, &overlay_tokens(grid)?)),
    }
}

/// Serialize one layer as unaligned delimited text
///
/// The inverse of the text parser: empty cells become the empty token and
/// every other cell its display form.
///
/// # Errors
///
/// Returns [`crate::GridError::LayerOutOfBounds`] for an invalid index.
pub fn layer_to_delimited<T>(grid: &LayerGrid<T>, layer: usize, delimiter: char) -> Result<String>
where
    T: Display + Clone + PartialEq,
{
    let tokens = layer_tokens(grid, layer)?;
    let separator = format!("{delimiter}");
    let mut lines = Vec::with_capacity(grid.rows());
    for row in tokens.chunks(grid.cols().max(1)) {
        lines.push(row.join(&separator));
    }
    Ok(lines.join("\n"))
}

/// Overlay projection of a single cell
///
/// Scans layers from the highest index down and returns the first cell that
/// differs from its layer's default; when every layer is empty at the
/// coordinate, returns layer 0's cell. `None` only for an out-of-range
/// coordinate or a grid with no layers.
pub fn overlay_cell<T: Clone + PartialEq>(
    grid: &LayerGrid<T>,
    row: usize,
    col: usize,
) -> Option<&Option<T>> {
    for layer in grid.layers().iter().rev() {
        let cell = layer.cell(row, col)?;
        if cell.as_ref() != layer.default_value() {
            return Some(cell);
        }
    }
    grid.layers().first().and_then(|base| base.cell(row, col))
}

fn cell_token<T: Display>(cell: &Option<T>, is_empty: bool) -> String {
    match cell {
        Some(value) if !is_empty => value.to_string(),
        _ => EMPTY_TOKEN.to_string(),
    }
}

fn layer_tokens<T>(grid: &LayerGrid<T>, index: usize) -> Result<Vec<String>>
where
    T: Display + Clone + PartialEq,
{
    let layer = grid.layer(index)?;
    let mut tokens = Vec::with_capacity(grid.rows() * grid.cols());
    for ((_, _), cell) in layer.cells().indexed_iter() {
        let is_empty = cell.as_ref() == layer.default_value();
        tokens.push(cell_token(cell, is_empty));
    }
    Ok(tokens)
}

fn overlay_tokens<T>(grid: &LayerGrid<T>) -> Result<Vec<String>>
where
    T: Display + Clone + PartialEq,
{
    // Ensures the layer-0 fallback exists before scanning
    grid.layer(0)?;

    let mut tokens = Vec::with_capacity(grid.rows() * grid.cols());
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            // The layer-0 fallback cell is empty by definition (it failed
            // the differs-from-default scan), so it renders as the empty
            // token without a special case.
            let mut token = EMPTY_TOKEN.to_string();
            for layer in grid.layers().iter().rev() {
                if let Some(cell) = layer.cell(row, col) {
                    if cell.as_ref() != layer.default_value() {
                        token = cell_token(cell, false);
                        break;
                    }
                }
            }
            tokens.push(token);
        }
    }
    Ok(tokens)
}

fn render_tokens<T: Clone + PartialEq>(grid: &LayerGrid<T>, tokens: &[String]) -> String {
    let width = tokens.iter().map(String::len).max().unwrap_or(1);
    let mut lines = Vec::with_capacity(grid.rows());
    for row in tokens.chunks(grid.cols().max(1)) {
        let cells: Vec<String> = row.iter().map(|token| format!("{token:>width$}")).collect();
        lines.push(cells.join(" "));
    }
    lines.join("\n")
}
