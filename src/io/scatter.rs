//! Seeded random fixture generation for tilt and marking demos

use crate::grid::store::LayerGrid;
use crate::io::configuration::{SCATTER_OBSTACLE_VALUE, SCATTER_VALUE_SPAN};
use crate::io::error::{Result, invalid_parameter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Parameters for one scattered fixture grid
#[derive(Clone, Copy, Debug)]
pub struct ScatterConfig {
    /// Grid rows
    pub rows: usize,
    /// Grid columns
    pub cols: usize,
    /// Number of movable tokens on layer 0
    pub tokens: usize,
    /// Number of fixed obstacles on layer 1
    pub obstacles: usize,
    /// RNG seed; equal seeds produce equal fixtures
    pub seed: u64,
}

/// Build a two-layer fixture grid: movable tokens over fixed obstacles
///
/// Tokens and obstacles occupy distinct random cells. Token values cycle
/// through `1..=SCATTER_VALUE_SPAN`; obstacles all hold the obstacle value.
/// Both layers have an absent default, so every unoccupied cell is empty.
///
/// # Errors
///
/// Returns [`crate::GridError::InvalidParameter`] for zero dimensions or
/// when tokens + obstacles exceed the cell count.
pub fn scatter_grid(config: &ScatterConfig) -> Result<LayerGrid<i64>> {
    let cell_count = config.rows * config.cols;
    if config.rows == 0 || config.cols == 0 {
        return Err(invalid_parameter(
            "dimensions",
            &format!("{}x{}", config.rows, config.cols),
            &"fixture dimensions must be non-zero",
        ));
    }
    if config.tokens + config.obstacles > cell_count {
        return Err(invalid_parameter(
            "tokens",
            &(config.tokens + config.obstacles),
            &format!("a {}x{} grid holds only {cell_count} cells", config.rows, config.cols),
        ));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let picks = rand::seq::index::sample(&mut rng, cell_count, config.tokens + config.obstacles);

    let mut token_cells = vec![vec![None; config.cols]; config.rows];
    let mut obstacle_cells = vec![vec![None; config.cols]; config.rows];

    for (position, index) in picks.iter().enumerate() {
        let row = index / config.cols;
        let col = index % config.cols;
        if position < config.tokens {
            let value = rng.random_range(1..=SCATTER_VALUE_SPAN);
            set_cell(&mut token_cells, row, col, Some(value));
        } else {
            set_cell(&mut obstacle_cells, row, col, Some(SCATTER_OBSTACLE_VALUE));
        }
    }

    let mut grid = LayerGrid::from_option_rows(token_cells, None)?;
    grid.add_option_layer(obstacle_cells, None)?;
    Ok(grid)
}

// Row/col are derived from sampled indices and always in range; the guard
// keeps the scatter path free of panicking indexing.
fn set_cell(cells: &mut [Vec<Option<i64>>], row: usize, col: usize, value: Option<i64>) {
    if let Some(target) = cells.get_mut(row).and_then(|cells_row| cells_row.get_mut(col)) {
        *target = value;
    }
}
