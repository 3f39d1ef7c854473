//! Pure geometric transforms producing new grids

/// Transpose and flip transforms
pub mod orientation;
