//! Tests for layered grid construction factories and bounds-checked access

#[cfg(test)]
mod tests {
    use gridstack::GridError;
    use gridstack::grid::LayerGrid;

    // Verifies the filled factory produces an all-empty single layer
    // Verified by leaving the cells absent instead of default-valued
    #[test]
    fn test_filled_factory() {
        let grid = LayerGrid::filled(2, 3, 0_i64).unwrap();
        assert_eq!((grid.rows(), grid.cols(), grid.layer_count()), (2, 3, 1));
        assert_eq!(grid.cell(0, 1, 2).unwrap(), &Some(0));
        assert!(grid.is_empty(0, 1, 2).unwrap());
    }

    // Tests 2D and 3D factories and the shared-shape invariant
    // Verified by skipping the shape comparison in add_option_layer
    #[test]
    fn test_from_rows_and_layers() {
        let grid = LayerGrid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(grid.cell(0, 1, 0).unwrap(), &Some(3));

        let stacked = LayerGrid::from_layers(vec![
            vec![vec![1, 2], vec![3, 4]],
            vec![vec![5, 6], vec![7, 8]],
        ])
        .unwrap();
        assert_eq!(stacked.layer_count(), 2);

        let mismatched = LayerGrid::from_layers(vec![
            vec![vec![1, 2], vec![3, 4]],
            vec![vec![5], vec![6]],
        ]);
        assert!(matches!(mismatched, Err(GridError::DimensionMismatch { .. })));
    }

    // Tests partitioning one plane into membership layers with defaults
    // Verified by backfilling non-members with the source value
    #[test]
    fn test_partitioned() {
        let grid = LayerGrid::partitioned(
            vec![vec![1, 2, 3]],
            &[vec![1], vec![2, 3]],
            Some(vec![Some(0), Some(0)]),
        )
        .unwrap();

        assert_eq!(grid.layer_count(), 2);
        assert_eq!(grid.cell(0, 0, 0).unwrap(), &Some(1));
        assert_eq!(grid.cell(0, 0, 1).unwrap(), &Some(0));
        assert_eq!(grid.cell(1, 0, 1).unwrap(), &Some(2));
    }

    // Tests copy-on-read row and column accessors
    // Verified by returning the column for a row request
    #[test]
    fn test_row_column_accessors() {
        let grid = LayerGrid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(grid.row(0).unwrap(), vec![Some(1), Some(2)]);
        assert_eq!(grid.column(1).unwrap(), vec![Some(2), Some(4)]);
    }

    // Tests bounds validation on every indexed accessor
    // Verified by dropping the layer index comparison
    #[test]
    fn test_bounds_errors() {
        let mut grid = LayerGrid::filled(2, 2, 0_i64).unwrap();
        assert!(matches!(grid.layer(2), Err(GridError::LayerOutOfBounds { .. })));
        assert!(matches!(grid.cell(0, 2, 0), Err(GridError::CellOutOfBounds { .. })));
        assert!(matches!(
            grid.set_cell(0, 0, 5, Some(1)),
            Err(GridError::CellOutOfBounds { .. })
        ));
        assert!(grid.in_bounds(1, 1));
        assert!(!grid.in_bounds(-1, 0));
    }

    // Tests the dimension safety cap and zero-dimension rejection
    // Verified by raising the cap above the rejected size
    #[test]
    fn test_dimension_validation() {
        assert!(matches!(
            LayerGrid::filled(0, 5, 0_i64),
            Err(GridError::InvalidParameter { .. })
        ));
        assert!(matches!(
            LayerGrid::filled(10_001, 5, 0_i64),
            Err(GridError::InvalidParameter { .. })
        ));
    }

    // Tests appending uniform layers and moving layers between grids
    // Verified by appending layers despite a shape mismatch
    #[test]
    fn test_layer_stacking() {
        let mut grid = LayerGrid::filled(2, 2, 0_i64).unwrap();
        grid.push_uniform_layer(None, None).unwrap();
        assert_eq!(grid.layer_count(), 2);

        let extra = LayerGrid::from_rows(vec![vec![9, 9], vec![9, 9]]).unwrap();
        grid.append_layers(extra).unwrap();
        assert_eq!(grid.layer_count(), 3);

        let wrong = LayerGrid::from_rows(vec![vec![1]]).unwrap();
        assert!(matches!(
            grid.append_layers(wrong),
            Err(GridError::DimensionMismatch { .. })
        ));

        let mut empty: LayerGrid<i64> = LayerGrid::new();
        assert!(matches!(
            empty.push_uniform_layer(Some(1), None),
            Err(GridError::InvalidParameter { .. })
        ));
    }
}
