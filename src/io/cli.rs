//! Command-line interface for batch settling, range marking, and rendering

use crate::grid::coords::Direction;
use crate::grid::store::LayerGrid;
use crate::io::configuration::{
    DEFAULT_DELIMITER, DEFAULT_SCATTER_OBSTACLES, DEFAULT_SCATTER_TOKENS, DEFAULT_SEED,
    MARKED_SUFFIX, OBSTACLE_SUFFIX, SETTLED_SUFFIX,
};
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::io::image::export_overlay_png;
use crate::io::parse::{ElementKind, ParsedGrid, load_grid};
use crate::io::progress::ProgressManager;
use crate::io::render::{DisplayMode, layer_to_delimited, render};
use crate::io::scatter::{ScatterConfig, scatter_grid};
use clap::{Parser, Subcommand};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Command-line arguments for the grid simulation tool
#[derive(Parser, Clone)]
#[command(name = "gridstack")]
#[command(
    author,
    version,
    about = "Settle, mark, and render layered grid files"
)]
pub struct Cli {
    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,

    /// Token delimiter used in grid files
    #[arg(short, long, default_value_t = DEFAULT_DELIMITER, global = true)]
    pub delimiter: char,

    /// Element kind of grid cells (int, float, text)
    #[arg(short, long, default_value = "int", global = true)]
    pub kind: String,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Subcommands of the grid simulation tool
#[derive(Subcommand, Clone)]
pub enum Command {
    /// Settle a grid through a sequence of tilt directions
    Tilt {
        /// Input grid file or directory of grid files
        target: PathBuf,

        /// Tilt directions applied in order
        #[arg(
            short = 'D',
            long,
            value_delimiter = ',',
            default_value = "north,west,south,east"
        )]
        directions: Vec<String>,

        /// Obstacle-layer file (defaults to <stem>_obstacles.<ext> when present)
        #[arg(short, long)]
        obstacles: Option<PathBuf>,

        /// Default (empty) cell value for the token layer
        #[arg(long)]
        default: Option<String>,

        /// Also export the settled overlay as PNG
        #[arg(short, long)]
        png: bool,

        /// Process files even if output exists
        #[arg(short, long)]
        no_skip: bool,
    },

    /// Mark the reachable range from a start cell onto a fresh layer
    Mark {
        /// Input grid file
        target: PathBuf,

        /// Start coordinate as row col
        #[arg(short, long, num_args = 2, value_names = ["ROW", "COL"])]
        start: Vec<usize>,

        /// Maximum number of steps from the start
        #[arg(short, long)]
        range: usize,

        /// Value written into marked cells
        #[arg(short, long)]
        mark: String,

        /// Only mark cells matching the range's step parity
        #[arg(short, long)]
        exact: bool,

        /// Obstacle-layer file (defaults to <stem>_obstacles.<ext> when present)
        #[arg(short, long)]
        obstacles: Option<PathBuf>,

        /// Default (empty) cell value for the token layer
        #[arg(long)]
        default: Option<String>,

        /// Also export the marked overlay as PNG
        #[arg(short, long)]
        png: bool,
    },

    /// Render a grid file to stdout
    Render {
        /// Input grid file
        target: PathBuf,

        /// Display mode: all, single, overlay
        #[arg(short, long, default_value = "overlay")]
        mode: String,

        /// Target layer for single mode
        #[arg(short, long)]
        layer: Option<usize>,

        /// Obstacle-layer file (defaults to <stem>_obstacles.<ext> when present)
        #[arg(short, long)]
        obstacles: Option<PathBuf>,

        /// Default (empty) cell value for the token layer
        #[arg(long)]
        default: Option<String>,
    },

    /// Generate a random fixture grid and companion obstacle file
    Scatter {
        /// Output grid file
        output: PathBuf,

        /// Fixture rows
        #[arg(long, default_value_t = 10)]
        rows: usize,

        /// Fixture columns
        #[arg(long, default_value_t = 10)]
        cols: usize,

        /// Number of movable tokens
        #[arg(short, long, default_value_t = DEFAULT_SCATTER_TOKENS)]
        tokens: usize,

        /// Number of fixed obstacles
        #[arg(short = 'b', long, default_value_t = DEFAULT_SCATTER_OBSTACLES)]
        obstacles: usize,

        /// Random seed for reproducible fixtures
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },
}

/// Orchestrates command execution with progress tracking
pub struct GridProcessor {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl GridProcessor {
    /// Create a processor from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = (!cli.quiet).then(ProgressManager::new);
        Self { cli, progress }
    }

    /// Execute the selected command
    ///
    /// # Errors
    ///
    /// Returns any validation, parsing, simulation, or file system error the
    /// command runs into.
    pub fn process(&mut self) -> Result<()> {
        let command = self.cli.command.clone();
        match command {
            Command::Tilt {
                target,
                directions,
                obstacles,
                default,
                png,
                no_skip,
            } => self.process_tilt(
                &target,
                &directions,
                obstacles.as_deref(),
                default.as_deref(),
                png,
                no_skip,
            ),
            Command::Mark {
                target,
                start,
                range,
                mark,
                exact,
                obstacles,
                default,
                png,
            } => self.process_mark(
                &target,
                &start,
                range,
                &mark,
                exact,
                obstacles.as_deref(),
                default.as_deref(),
                png,
            ),
            Command::Render {
                target,
                mode,
                layer,
                obstacles,
                default,
            } => self.process_render(&target, &mode, layer, obstacles.as_deref(), default.as_deref()),
            Command::Scatter {
                output,
                rows,
                cols,
                tokens,
                obstacles,
                seed,
            } => self.process_scatter(&output, rows, cols, tokens, obstacles, seed),
        }
    }

    fn element_kind(&self) -> Result<ElementKind> {
        ElementKind::from_name(&self.cli.kind)
    }

    fn load_stacked(
        &self,
        target: &Path,
        obstacles: Option<&Path>,
        default: Option<&str>,
    ) -> Result<ParsedGrid> {
        let kind = self.element_kind()?;
        let mut parsed = load_grid(target, kind, self.cli.delimiter, default)?;

        let companion = derive_path(target, OBSTACLE_SUFFIX);
        let obstacle_path = match obstacles {
            Some(path) => Some(path.to_path_buf()),
            None if companion.exists() => Some(companion),
            None => None,
        };

        if let Some(path) = obstacle_path {
            let obstacle_grid = load_grid(&path, kind, self.cli.delimiter, None)?;
            parsed.append_layers(obstacle_grid)?;
        }
        Ok(parsed)
    }

    fn process_tilt(
        &mut self,
        target: &Path,
        directions: &[String],
        obstacles: Option<&Path>,
        default: Option<&str>,
        png: bool,
        no_skip: bool,
    ) -> Result<()> {
        let directions = parse_directions(directions)?;
        let files = collect_targets(target)?;

        let pending: Vec<PathBuf> = files
            .into_iter()
            .filter(|file| {
                no_skip || self.should_process_file(file)
            })
            .collect();
        if pending.is_empty() {
            return Ok(());
        }

        if let Some(pm) = &mut self.progress {
            pm.initialize(pending.len());
        }

        for (index, file) in pending.iter().enumerate() {
            self.tilt_file(file, index, &directions, obstacles, default, png)?;
        }

        if let Some(pm) = &mut self.progress {
            pm.finish();
        }
        Ok(())
    }

    // Allow print for user feedback on skipped files
    #[allow(clippy::print_stderr)]
    fn should_process_file(&self, input_path: &Path) -> bool {
        let output_path = derive_path(input_path, SETTLED_SUFFIX);
        if output_path.exists() {
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn tilt_file(
        &mut self,
        input_path: &Path,
        index: usize,
        directions: &[Direction],
        obstacles: Option<&Path>,
        default: Option<&str>,
        png: bool,
    ) -> Result<()> {
        if let Some(pm) = &mut self.progress {
            pm.start_file(index, input_path, directions.len());
        }

        let mut parsed = self.load_stacked(input_path, obstacles, default)?;

        let progress = &mut self.progress;
        let mut after_step = |step: usize| {
            if let Some(pm) = progress {
                pm.update_step(index, step);
            }
        };
        match &mut parsed {
            ParsedGrid::Integer(grid) => settle_sequence(grid, directions, &mut after_step)?,
            ParsedGrid::Float(grid) => settle_sequence(grid, directions, &mut after_step)?,
            ParsedGrid::Text(grid) => settle_sequence(grid, directions, &mut after_step)?,
        }

        let output_path = derive_path(input_path, SETTLED_SUFFIX);
        self.write_layer(&parsed, 0, &output_path)?;
        if png {
            export_parsed_png(&parsed, &output_path.with_extension("png"))?;
        }

        if let Some(pm) = &mut self.progress {
            pm.complete_file(index);
        }
        Ok(())
    }

    fn process_mark(
        &mut self,
        target: &Path,
        start: &[usize],
        range: usize,
        mark: &str,
        exact: bool,
        obstacles: Option<&Path>,
        default: Option<&str>,
        png: bool,
    ) -> Result<()> {
        let [row, col] = start else {
            return Err(invalid_parameter(
                "start",
                &format!("{start:?}"),
                &"expected exactly two values: row col",
            ));
        };

        let mut parsed = self.load_stacked(target, obstacles, default)?;
        match &mut parsed {
            ParsedGrid::Integer(grid) => mark_on(grid, [*row, *col], range, mark, exact)?,
            ParsedGrid::Float(grid) => mark_on(grid, [*row, *col], range, mark, exact)?,
            ParsedGrid::Text(grid) => mark_on(grid, [*row, *col], range, mark, exact)?,
        }

        let mark_layer = parsed.layer_count() - 1;
        let output_path = derive_path(target, MARKED_SUFFIX);
        self.write_layer(&parsed, mark_layer, &output_path)?;
        if png {
            export_parsed_png(&parsed, &output_path.with_extension("png"))?;
        }

        self.print_rendered(&parsed, DisplayMode::Overlay)
    }

    fn process_render(
        &mut self,
        target: &Path,
        mode: &str,
        layer: Option<usize>,
        obstacles: Option<&Path>,
        default: Option<&str>,
    ) -> Result<()> {
        let parsed = self.load_stacked(target, obstacles, default)?;
        let mode = parse_mode(mode, layer)?;
        self.print_rendered(&parsed, mode)
    }

    // Allow print: rendered text is the command's product
    #[allow(clippy::print_stdout)]
    fn print_rendered(&self, parsed: &ParsedGrid, mode: DisplayMode) -> Result<()> {
        let text = match parsed {
            ParsedGrid::Integer(grid) => render(grid, mode)?,
            ParsedGrid::Float(grid) => render(grid, mode)?,
            ParsedGrid::Text(grid) => render(grid, mode)?,
        };
        println!("{text}");
        Ok(())
    }

    // Allow print for user feedback on generated paths
    #[allow(clippy::print_stderr)]
    fn process_scatter(
        &mut self,
        output: &Path,
        rows: usize,
        cols: usize,
        tokens: usize,
        obstacles: usize,
        seed: u64,
    ) -> Result<()> {
        let grid = scatter_grid(&ScatterConfig {
            rows,
            cols,
            tokens,
            obstacles,
            seed,
        })?;

        let obstacle_path = derive_path(output, OBSTACLE_SUFFIX);
        write_text(output, &layer_to_delimited(&grid, 0, self.cli.delimiter)?)?;
        write_text(&obstacle_path, &layer_to_delimited(&grid, 1, self.cli.delimiter)?)?;

        if !self.cli.quiet {
            eprintln!(
                "Wrote fixture: {} (+ {})",
                output.display(),
                obstacle_path.display()
            );
        }
        Ok(())
    }

    fn write_layer(&self, parsed: &ParsedGrid, layer: usize, path: &Path) -> Result<()> {
        let text = match parsed {
            ParsedGrid::Integer(grid) => layer_to_delimited(grid, layer, self.cli.delimiter)?,
            ParsedGrid::Float(grid) => layer_to_delimited(grid, layer, self.cli.delimiter)?,
            ParsedGrid::Text(grid) => layer_to_delimited(grid, layer, self.cli.delimiter)?,
        };
        write_text(path, &text)
    }
}

/// Settle a grid through each direction in order, reporting progress
///
/// Layer 0 is the movable token layer; every additional layer blocks as an
/// obstacle.
fn settle_sequence<T: Clone + PartialEq>(
    grid: &mut LayerGrid<T>,
    directions: &[Direction],
    after_step: &mut impl FnMut(usize),
) -> Result<()> {
    let obstacles: Vec<usize> = (1..grid.layer_count()).collect();
    for (step, &direction) in directions.iter().enumerate() {
        grid.settle(direction, 0, &obstacles)?;
        after_step(step + 1);
    }
    Ok(())
}

/// Push a fresh mark layer and run the range walk onto it
fn mark_on<T>(
    grid: &mut LayerGrid<T>,
    start: [usize; 2],
    range: usize,
    mark_token: &str,
    exact: bool,
) -> Result<()>
where
    T: FromStr + Display + Clone + PartialEq,
{
    let mark = match mark_token.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            return Err(invalid_parameter(
                "mark",
                &mark_token,
                &"not a valid element for this grid kind",
            ));
        }
    };

    grid.push_uniform_layer(None, None)?;
    let mark_layer = grid.layer_count() - 1;
    let obstacle_layers: Vec<usize> = (1..mark_layer).collect();
    grid.mark_move_range(start, range, mark, mark_layer, &obstacle_layers, exact)
}

fn parse_directions(names: &[String]) -> Result<Vec<Direction>> {
    names.iter().map(|name| parse_direction(name)).collect()
}

fn parse_direction(name: &str) -> Result<Direction> {
    match name.trim().to_ascii_lowercase().as_str() {
        "north" | "n" => Ok(Direction::North),
        "south" | "s" => Ok(Direction::South),
        "west" | "w" => Ok(Direction::West),
        "east" | "e" => Ok(Direction::East),
        _ => Err(invalid_parameter(
            "direction",
            &name,
            &"expected north, south, west, or east",
        )),
    }
}

fn parse_mode(mode: &str, layer: Option<usize>) -> Result<DisplayMode> {
    match mode.trim().to_ascii_lowercase().as_str() {
        "all" => Ok(DisplayMode::AllLayers),
        "single" => Ok(DisplayMode::SingleLayer(layer.unwrap_or(0))),
        "overlay" => Ok(DisplayMode::Overlay),
        _ => Err(invalid_parameter(
            "mode",
            &mode,
            &"expected all, single, or overlay",
        )),
    }
}

fn collect_targets(target: &Path) -> Result<Vec<PathBuf>> {
    if target.is_file() {
        return Ok(vec![target.to_path_buf()]);
    }
    if target.is_dir() {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(target)? {
            let path = entry?.path();
            if is_grid_input(&path) {
                files.push(path);
            }
        }
        files.sort();
        return Ok(files);
    }
    Err(invalid_parameter(
        "target",
        &target.display(),
        &"must be a grid file or a directory of grid files",
    ))
}

// Derived outputs and obstacle companions are never inputs themselves
fn is_grid_input(path: &Path) -> bool {
    let extension = path.extension().and_then(|ext| ext.to_str());
    if !matches!(extension, Some("txt" | "csv")) {
        return false;
    }
    let stem = path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    !stem.ends_with(SETTLED_SUFFIX) && !stem.ends_with(MARKED_SUFFIX) && !stem.ends_with(OBSTACLE_SUFFIX)
}

fn derive_path(input_path: &Path, suffix: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let extension = input_path.extension().unwrap_or_default();
    let name = format!(
        "{}{}.{}",
        stem.to_string_lossy(),
        suffix,
        extension.to_string_lossy()
    );

    input_path.parent().map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, format!("{text}\n")).map_err(|e| GridError::FileSystem {
        path: path.to_path_buf(),
        operation: "write grid file",
        source: e,
    })
}

fn export_parsed_png(parsed: &ParsedGrid, path: &Path) -> Result<()> {
    match parsed {
        ParsedGrid::Integer(grid) => export_overlay_png(grid, path),
        ParsedGrid::Float(grid) => export_overlay_png(grid, path),
        ParsedGrid::Text(grid) => export_overlay_png(grid, path),
    }
}
