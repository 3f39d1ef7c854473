//! Error types shared by grid construction, simulation, and file handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all grid operations
#[derive(Debug)]
pub enum GridError {
    /// Layer index outside the grid's layer sequence
    LayerOutOfBounds {
        /// The offending layer index
        index: usize,
        /// Number of layers the grid holds
        layer_count: usize,
    },

    /// Cell coordinate outside the grid's rows×cols area
    CellOutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Grid row count
        rows: usize,
        /// Grid column count
        cols: usize,
    },

    /// New layer shape disagrees with the layers already in the grid
    DimensionMismatch {
        /// Shape shared by the existing layers (rows, cols)
        expected: (usize, usize),
        /// Shape of the rejected layer (rows, cols)
        found: (usize, usize),
    },

    /// Construction or call parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A delimited-text token could not be parsed as the requested element kind
    ParseCell {
        /// 1-based line number in the input
        line: usize,
        /// The token that failed to parse
        token: String,
        /// Element kind the token was parsed as
        kind: &'static str,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save a rendered grid image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LayerOutOfBounds { index, layer_count } => {
                write!(
                    f,
                    "Layer index {index} is out of bounds ({layer_count} layers)"
                )
            }
            Self::CellOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "Cell ({row}, {col}) is out of bounds ({rows}x{cols} grid)"
                )
            }
            Self::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "Layer shape {}x{} disagrees with grid shape {}x{}",
                    found.0, found.1, expected.0, expected.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ParseCell { line, token, kind } => {
                write!(
                    f,
                    "Line {line}: token '{token}' is not a valid {kind} element"
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid operation results
pub type Result<T> = std::result::Result<T, GridError>;

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a layer bounds error
pub const fn layer_out_of_bounds(index: usize, layer_count: usize) -> GridError {
    GridError::LayerOutOfBounds { index, layer_count }
}

/// Create a cell bounds error
pub const fn cell_out_of_bounds(row: usize, col: usize, rows: usize, cols: usize) -> GridError {
    GridError::CellOutOfBounds {
        row,
        col,
        rows,
        cols,
    }
}
