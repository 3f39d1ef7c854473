//! Tests for seeded random fixture generation

#[cfg(test)]
mod tests {
    use gridstack::GridError;
    use gridstack::io::scatter::{ScatterConfig, scatter_grid};

    const CONFIG: ScatterConfig = ScatterConfig {
        rows: 8,
        cols: 8,
        tokens: 10,
        obstacles: 5,
        seed: 11,
    };

    // Verifies equal seeds produce identical fixtures
    // Verified by reseeding from entropy per call
    #[test]
    fn test_deterministic() {
        assert_eq!(scatter_grid(&CONFIG).unwrap(), scatter_grid(&CONFIG).unwrap());
    }

    // Tests token and obstacle counts land on distinct cells
    // Verified by sampling tokens and obstacles independently
    #[test]
    fn test_counts_and_disjoint_cells() {
        let grid = scatter_grid(&CONFIG).unwrap();
        assert_eq!(grid.layer_count(), 2);

        let mut tokens = 0;
        let mut overlaps = 0;
        for row in 0..8 {
            for col in 0..8 {
                let has_token = !grid.is_empty(0, row, col).unwrap();
                let has_obstacle = !grid.is_empty(1, row, col).unwrap();
                tokens += usize::from(has_token);
                overlaps += usize::from(has_token && has_obstacle);
            }
        }
        assert_eq!(tokens, 10);
        assert_eq!(grid.count_of(1, &9).unwrap(), 5);
        assert_eq!(overlaps, 0);
    }

    // Tests overfull and degenerate configurations are rejected
    // Verified by truncating the sample instead of rejecting
    #[test]
    fn test_rejects_bad_configs() {
        let overfull = ScatterConfig {
            tokens: 60,
            obstacles: 10,
            ..CONFIG
        };
        assert!(matches!(
            scatter_grid(&overfull),
            Err(GridError::InvalidParameter { .. })
        ));

        let degenerate = ScatterConfig { rows: 0, ..CONFIG };
        assert!(matches!(
            scatter_grid(&degenerate),
            Err(GridError::InvalidParameter { .. })
        ));
    }

    // Tests token values stay within the configured span
    // Verified by widening the sampled range
    #[test]
    fn test_token_values_in_span() {
        let grid = scatter_grid(&CONFIG).unwrap();
        for cell in grid.layer(0).unwrap().cells() {
            if let Some(value) = cell {
                assert!((1..=4).contains(value));
            }
        }
    }
}
