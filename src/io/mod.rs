//! Input/output operations and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Crate constants and runtime configuration defaults
pub mod configuration;
/// Error types and the crate-wide `Result` alias
pub mod error;
/// PNG export of the overlay projection
pub mod image;
/// Delimited-text grid parsing
pub mod parse;
/// Batch progress display
pub mod progress;
/// Text rendering with display-mode selection
pub mod render;
/// Seeded random fixture generation
pub mod scatter;
