//! PNG export of the overlay projection with a cycled palette

use crate::grid::store::LayerGrid;
use crate::io::configuration::{CELL_PIXEL_SIZE, PALETTE};
use crate::io::error::{GridError, Result};
use image::{ImageBuffer, Rgba};
use std::collections::HashMap;
use std::fmt::Display;
use std::path::Path;

/// Export the overlay projection as a palette-colored PNG
///
/// Distinct cell values are assigned palette colors in row-major first-seen
/// order (the palette cycles when exhausted); empty cells are transparent.
/// Each grid cell becomes a square block of pixels.
///
/// # Errors
///
/// Returns an error if:
/// - The grid has no layers or no cells to render
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_overlay_png<T>(grid: &LayerGrid<T>, output_path: &Path) -> Result<()>
where
    T: Display + Clone + PartialEq,
{
    grid.layer(0)?;
    if grid.rows() == 0 || grid.cols() == 0 {
        return Err(GridError::InvalidParameter {
            parameter: "grid",
            value: "0x0".to_string(),
            reason: "nothing to render".to_string(),
        });
    }

    let width = grid.cols() as u32 * CELL_PIXEL_SIZE;
    let height = grid.rows() as u32 * CELL_PIXEL_SIZE;
    let mut img = ImageBuffer::new(width, height);
    let mut assigned: HashMap<String, usize> = HashMap::new();

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let color = cell_color(grid, row, col, &mut assigned);
            paint_block(&mut img, row, col, color);
        }
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GridError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| GridError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

fn cell_color<T>(
    grid: &LayerGrid<T>,
    row: usize,
    col: usize,
    assigned: &mut HashMap<String, usize>,
) -> Rgba<u8>
where
    T: Display + Clone + PartialEq,
{
    match projected_value(grid, row, col) {
        None => Rgba([0, 0, 0, 0]),
        Some(value) => {
            let next = assigned.len();
            let index = *assigned.entry(value.to_string()).or_insert(next);
            let rgba = PALETTE.get(index % PALETTE.len()).copied().unwrap_or([0, 0, 0, 255]);
            Rgba(rgba)
        }
    }
}

// First layer from the top whose cell differs from its default; a differing
// absent cell projects as empty (transparent).
fn projected_value<T: Clone + PartialEq>(grid: &LayerGrid<T>, row: usize, col: usize) -> Option<&T> {
    for layer in grid.layers().iter().rev() {
        if let Some(cell) = layer.cell(row, col) {
            if cell.as_ref() != layer.default_value() {
                return cell.as_ref();
            }
        }
    }
    None
}

fn paint_block(
    img: &mut ImageBuffer<Rgba<u8>, Vec<u8>>,
    row: usize,
    col: usize,
    color: Rgba<u8>,
) {
    let base_x = col as u32 * CELL_PIXEL_SIZE;
    let base_y = row as u32 * CELL_PIXEL_SIZE;
    for dy in 0..CELL_PIXEL_SIZE {
        for dx in 0..CELL_PIXEL_SIZE {
            img.put_pixel(base_x + dx, base_y + dy, color);
        }
    }
}
