//! In-place grid simulation: settling sweeps and range marking

/// Direction-ordered settling sweeps
pub mod movement;
/// Breadth-first range marking with the exact-distance parity rule
pub mod range;
/// Compact (cell, parity) visited tracking
pub mod visited;

pub use movement::sweep_coordinates;
pub use visited::ParityVisited;
