//! Layered grid toolkit for tile simulation: synchronized movement settling,
//! breadth-first range marking, and geometric transforms
//!
//! The core data structure is a stack of same-shaped grid layers, each with
//! its own optional default ("empty") value. Movement sweeps relocate tokens
//! one step per pass with obstacle awareness, and range marking walks
//! breadth-first from a start cell with an exact-distance parity rule.

#![deny(unsafe_code)]

/// Layered grid storage, coordinates, and scan utilities
pub mod grid;
/// Input/output operations and error handling
pub mod io;
/// In-place simulation: settling sweeps and range marking
pub mod simulate;
/// Pure geometric transforms
pub mod transform;

pub use io::error::{GridError, Result};
