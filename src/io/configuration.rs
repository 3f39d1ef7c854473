//! Crate constants and runtime configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Text format settings
/// Default token delimiter in grid files
pub const DEFAULT_DELIMITER: char = ',';
/// Token written and accepted for an empty (default-valued) cell
pub const EMPTY_TOKEN: &str = ".";

// Output settings
/// Suffix added to settled output filenames
pub const SETTLED_SUFFIX: &str = "_settled";
/// Suffix added to range-marked output filenames
pub const MARKED_SUFFIX: &str = "_marked";
/// Suffix looked up for a companion obstacle-layer file
pub const OBSTACLE_SUFFIX: &str = "_obstacles";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// PNG export settings
/// Square pixel size of one rendered cell
pub const CELL_PIXEL_SIZE: u32 = 8;
/// Fixed palette cycled over distinct cell values in overlay order
pub const PALETTE: [[u8; 4]; 12] = [
    [31, 119, 180, 255],
    [255, 127, 14, 255],
    [44, 160, 44, 255],
    [214, 39, 40, 255],
    [148, 103, 189, 255],
    [140, 86, 75, 255],
    [227, 119, 194, 255],
    [127, 127, 127, 255],
    [188, 189, 34, 255],
    [23, 190, 207, 255],
    [174, 199, 232, 255],
    [255, 187, 120, 255],
];

// Fixture generation defaults
/// Fixed seed for reproducible scatter output
pub const DEFAULT_SEED: u64 = 7;
/// Default number of movable tokens scattered onto a fixture grid
pub const DEFAULT_SCATTER_TOKENS: usize = 24;
/// Default number of fixed obstacles scattered onto a fixture grid
pub const DEFAULT_SCATTER_OBSTACLES: usize = 12;
/// Scattered tokens draw their value from `1..=SCATTER_VALUE_SPAN`
pub const SCATTER_VALUE_SPAN: i64 = 4;
/// Cell value used for scattered obstacles
pub const SCATTER_OBSTACLE_VALUE: i64 = 9;
