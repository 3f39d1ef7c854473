//! Cardinal directions and their coordinate deltas

use std::fmt;

/// Cardinal movement direction on a (row, col) grid
///
/// Row 0 is the top of the grid, so north decreases the row index and
/// south increases it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward row 0
    North,
    /// Toward the last row
    South,
    /// Toward column 0
    West,
    /// Toward the last column
    East,
}

/// All four cardinal directions in north, south, west, east order
pub const CARDINALS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::West,
    Direction::East,
];

impl Direction {
    /// Coordinate delta as (`row_delta`, `col_delta`)
    ///
    /// The mapping is the single source of truth for every traversal in the
    /// crate: North=(-1,0), South=(+1,0), West=(0,-1), East=(0,+1).
    pub const fn delta(self) -> [i32; 2] {
        match self {
            Self::North => [-1, 0],
            Self::South => [1, 0],
            Self::West => [0, -1],
            Self::East => [0, 1],
        }
    }

    /// Row component of the delta
    pub const fn row_delta(self) -> i32 {
        self.delta()[0]
    }

    /// Column component of the delta
    pub const fn col_delta(self) -> i32 {
        self.delta()[1]
    }

    /// The opposite cardinal direction
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    /// Lowercase name used in CLI arguments and messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::West => "west",
            Self::East => "east",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Apply a direction's delta to a signed position
pub const fn step(position: [i32; 2], direction: Direction) -> [i32; 2] {
    let delta = direction.delta();
    [position[0] + delta[0], position[1] + delta[1]]
}
