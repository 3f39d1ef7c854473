//! Layered grid storage and coordinate primitives
//!
//! This module contains the spatial core:
//! - Cardinal directions and their deltas
//! - Single-plane layers with equality-based emptiness
//! - The layered grid store with bounds-checked access
//! - Linear-scan utilities (find, count, clear, compare)

/// Cardinal directions and coordinate deltas
pub mod coords;
/// Single grid plane with an optional default value
pub mod layer;
/// Linear-scan layer utilities
pub mod scan;
/// Layered grid storage with bounds-checked access
pub mod store;

pub use coords::Direction;
pub use layer::Layer;
pub use store::LayerGrid;
