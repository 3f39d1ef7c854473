//! Delimited-text grid construction with element-kind dispatch
//!
//! Grid files are plain text: one grid row per line, cells separated by a
//! delimiter, the empty token standing for the layer default. The element
//! kind selects the cell type; anything other than integer, floating-point,
//! or text is rejected as unsupported.

use crate::grid::store::LayerGrid;
use crate::io::configuration::EMPTY_TOKEN;
use crate::io::error::{GridError, Result, invalid_parameter};
use std::path::Path;
use std::str::FromStr;

/// Element kinds the text parser supports
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    /// Signed 64-bit integer cells
    Integer,
    /// 64-bit floating-point cells
    Float,
    /// Free-text cells
    Text,
}

impl ElementKind {
    /// Resolve an element kind from its name
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidParameter`] for any unsupported kind name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "int" | "integer" => Ok(Self::Integer),
            "float" | "double" => Ok(Self::Float),
            "text" | "string" => Ok(Self::Text),
            _ => Err(invalid_parameter(
                "kind",
                &name,
                &"supported element kinds are int, float, text",
            )),
        }
    }

    /// Canonical lowercase name of the kind
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "int",
            Self::Float => "float",
            Self::Text => "text",
        }
    }
}

/// A single-layer grid parsed from text, dispatched on element kind
#[derive(Clone, Debug, PartialEq)]
pub enum ParsedGrid {
    /// Grid of integer cells
    Integer(LayerGrid<i64>),
    /// Grid of floating-point cells
    Float(LayerGrid<f64>),
    /// Grid of text cells
    Text(LayerGrid<String>),
}

impl ParsedGrid {
    /// Element kind of the parsed cells
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::Integer(_) => ElementKind::Integer,
            Self::Float(_) => ElementKind::Float,
            Self::Text(_) => ElementKind::Text,
        }
    }

    /// Number of rows in the grid
    pub const fn rows(&self) -> usize {
        match self {
            Self::Integer(grid) => grid.rows(),
            Self::Float(grid) => grid.rows(),
            Self::Text(grid) => grid.rows(),
        }
    }

    /// Number of layers in the grid
    pub const fn layer_count(&self) -> usize {
        match self {
            Self::Integer(grid) => grid.layer_count(),
            Self::Float(grid) => grid.layer_count(),
            Self::Text(grid) => grid.layer_count(),
        }
    }

    /// Number of columns in the grid
    pub const fn cols(&self) -> usize {
        match self {
            Self::Integer(grid) => grid.cols(),
            Self::Float(grid) => grid.cols(),
            Self::Text(grid) => grid.cols(),
        }
    }

    /// Move the layers of another parsed grid onto this one
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidParameter`] when the element kinds
    /// disagree and [`GridError::DimensionMismatch`] when the shapes do.
    pub fn append_layers(&mut self, other: Self) -> Result<()> {
        match (self, other) {
            (Self::Integer(grid), Self::Integer(extra)) => grid.append_layers(extra),
            (Self::Float(grid), Self::Float(extra)) => grid.append_layers(extra),
            (Self::Text(grid), Self::Text(extra)) => grid.append_layers(extra),
            (grid, extra) => Err(invalid_parameter(
                "kind",
                &extra.kind().name(),
                &format!("cannot stack onto a {} grid", grid.kind().name()),
            )),
        }
    }
}

/// Parse delimited lines into a single-layer grid of one element kind
///
/// `default` is parsed with the same element kind and becomes the layer's
/// default value; the empty token parses to it (or to an absent cell when no
/// default is given).
///
/// # Errors
///
/// Returns [`GridError::ParseCell`] for an unparseable token,
/// [`GridError::InvalidParameter`] for an unparseable default or malformed
/// grid shape.
pub fn parse_grid(
    content: &str,
    kind: ElementKind,
    delimiter: char,
    default: Option<&str>,
) -> Result<ParsedGrid> {
    match kind {
        ElementKind::Integer => Ok(ParsedGrid::Integer(parse_typed(
            content,
            delimiter,
            parse_default(default, kind)?,
            kind.name(),
        )?)),
        ElementKind::Float => Ok(ParsedGrid::Float(parse_typed(
            content,
            delimiter,
            parse_default(default, kind)?,
            kind.name(),
        )?)),
        ElementKind::Text => Ok(ParsedGrid::Text(parse_typed(
            content,
            delimiter,
            default.map(str::to_string),
            kind.name(),
        )?)),
    }
}

/// Load and parse a grid file
///
/// # Errors
///
/// Returns [`GridError::FileSystem`] when the file cannot be read, plus any
/// error [`parse_grid`] produces.
pub fn load_grid(
    path: &Path,
    kind: ElementKind,
    delimiter: char,
    default: Option<&str>,
) -> Result<ParsedGrid> {
    let content = std::fs::read_to_string(path).map_err(|e| GridError::FileSystem {
        path: path.to_path_buf(),
        operation: "read grid file",
        source: e,
    })?;
    parse_grid(&content, kind, delimiter, default)
}

fn parse_default<T: FromStr>(default: Option<&str>, kind: ElementKind) -> Result<Option<T>> {
    match default {
        None => Ok(None),
        Some(token) => match token.trim().parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(invalid_parameter(
                "default",
                &token,
                &format!("not a valid {} element", kind.name()),
            )),
        },
    }
}

fn parse_typed<T>(
    content: &str,
    delimiter: char,
    default: Option<T>,
    kind: &'static str,
) -> Result<LayerGrid<T>>
where
    T: FromStr + Clone + PartialEq,
{
    let mut rows = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut cells = Vec::new();
        for raw in trimmed.split(delimiter) {
            let token = raw.trim();
            if token == EMPTY_TOKEN {
                cells.push(default.clone());
            } else {
                match token.parse::<T>() {
                    Ok(value) => cells.push(Some(value)),
                    Err(_) => {
                        return Err(GridError::ParseCell {
                            line: index + 1,
                            token: token.to_string(),
                            kind,
                        });
                    }
                }
            }
        }
        rows.push(cells);
    }

    LayerGrid::from_option_rows(rows, default)
}
