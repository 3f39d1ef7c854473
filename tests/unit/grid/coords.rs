//! Tests for cardinal directions and coordinate deltas

#[cfg(test)]
mod tests {
    use gridstack::grid::Direction;
    use gridstack::grid::coords::{CARDINALS, step};

    // Verifies the delta table matches the row-0-at-top convention
    // Verified by negating the north delta
    #[test]
    fn test_deltas() {
        assert_eq!(Direction::North.delta(), [-1, 0]);
        assert_eq!(Direction::South.delta(), [1, 0]);
        assert_eq!(Direction::West.delta(), [0, -1]);
        assert_eq!(Direction::East.delta(), [0, 1]);
    }

    // Tests that component accessors agree with the delta table
    // Verified by swapping row and column components
    #[test]
    fn test_delta_components() {
        for direction in CARDINALS {
            let [row_delta, col_delta] = direction.delta();
            assert_eq!(direction.row_delta(), row_delta);
            assert_eq!(direction.col_delta(), col_delta);
        }
    }

    // Tests that opposite directions cancel out
    // Verified by mapping north to west in opposite()
    #[test]
    fn test_opposite_is_involution() {
        for direction in CARDINALS {
            assert_eq!(direction.opposite().opposite(), direction);
            let [row_delta, col_delta] = direction.delta();
            assert_eq!(direction.opposite().delta(), [-row_delta, -col_delta]);
        }
    }

    // Tests signed position stepping, including into negative coordinates
    // Verified by clamping the stepped position at zero
    #[test]
    fn test_step_applies_delta() {
        assert_eq!(step([0, 0], Direction::North), [-1, 0]);
        assert_eq!(step([2, 3], Direction::East), [2, 4]);
        assert_eq!(step(step([5, 5], Direction::South), Direction::North), [5, 5]);
    }

    // Tests display names used by CLI argument parsing
    // Verified by capitalizing the names
    #[test]
    fn test_names() {
        assert_eq!(Direction::North.to_string(), "north");
        assert_eq!(Direction::East.name(), "east");
    }
}
