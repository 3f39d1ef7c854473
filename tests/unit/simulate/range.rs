//! Tests for breadth-first range marking

#[cfg(test)]
mod tests {
    use gridstack::GridError;
    use gridstack::grid::LayerGrid;

    fn grid_with_mark_layer(rows: usize, cols: usize) -> LayerGrid<i64> {
        let mut grid = LayerGrid::filled(rows, cols, 0).unwrap();
        grid.push_uniform_layer(None, None).unwrap();
        grid
    }

    // Verifies a zero range marks exactly the start cell
    // Verified by enqueueing neighbors before the range check
    #[test]
    fn test_zero_range() {
        let mut grid = grid_with_mark_layer(3, 3);
        grid.mark_move_range([1, 1], 0, 7, 1, &[], false).unwrap();
        assert_eq!(grid.count_of(1, &7).unwrap(), 1);
    }

    // Tests the Manhattan diamond produced by an unobstructed walk
    // Verified by expanding diagonally as well as cardinally
    #[test]
    fn test_unobstructed_diamond() {
        let mut grid = grid_with_mark_layer(5, 5);
        grid.mark_move_range([2, 2], 1, 7, 1, &[], false).unwrap();
        assert_eq!(grid.count_of(1, &7).unwrap(), 5);
    }

    // Tests exact marking keeps only cells at the range's parity
    // Verified by marking odd-parity cells instead
    #[test]
    fn test_exact_parity() {
        let mut grid = grid_with_mark_layer(5, 5);
        grid.mark_move_range([2, 2], 2, 7, 1, &[], true).unwrap();

        // Distance-1 cells are excluded; center and distance-2 cells remain
        assert_eq!(grid.count_of(1, &7).unwrap(), 9);
        assert_eq!(grid.cell(1, 2, 2).unwrap(), &Some(7));
        assert_eq!(grid.cell(1, 1, 2).unwrap(), &None);
    }

    // Tests that obstacles block expansion, not just marking
    // Verified by expanding through obstacle cells without marking them
    #[test]
    fn test_obstacles_block_expansion() {
        let mut grid = grid_with_mark_layer(1, 4);
        grid.push_uniform_layer(None, None).unwrap();
        grid.set_cell(2, 0, 1, Some(9)).unwrap();

        grid.mark_move_range([0, 0], 3, 7, 1, &[2], false).unwrap();
        assert_eq!(grid.count_of(1, &7).unwrap(), 1);
    }

    // Tests layer validation happens before any cell is written
    // Verified by marking the start cell before validating layers
    #[test]
    fn test_validation_before_mutation() {
        let mut grid = grid_with_mark_layer(3, 3);
        let before = grid.clone();
        assert!(matches!(
            grid.mark_move_range([0, 0], 1, 7, 5, &[], false),
            Err(GridError::LayerOutOfBounds { .. })
        ));
        assert_eq!(grid, before);
    }
}
