//! Format constants and magic strings for the legacy structured-points layout

/// Magic first line identifying a supported file (compared after trimming)
pub const MAGIC_LINE: &str = "# vtk DataFile Version 2.0";

/// Shared prefix of all version magic lines; a line carrying this prefix
/// but a different version is recognized yet unsupported
pub const MAGIC_PREFIX: &str = "# vtk DataFile Version ";

/// Sentinel line switching the scanner into the scalar data section
pub const DATA_MARKER: &str = "LOOKUP_TABLE default";

/// Keyword introducing the grid dimensions line
pub const KEYWORD_DIMENSIONS: &str = "DIMENSIONS";

/// Keyword introducing the grid origin line
pub const KEYWORD_ORIGIN: &str = "ORIGIN";

/// Keyword introducing the grid spacing line
pub const KEYWORD_SPACING: &str = "SPACING";

/// Keyword introducing the declared point count line
pub const KEYWORD_POINT_DATA: &str = "POINT DATA";

/// Keyword introducing the active scalars declaration
pub const KEYWORD_SCALARS: &str = "SCALARS";

/// Identifier given to the assembled voxel grid by default
pub const DEFAULT_GRID_IDENTIFIER: &str = "density_field";

/// Name of the scalar property attached to the grid by default
pub const DEFAULT_PROPERTY_NAME: &str = "Field Value";

/// Default transparency applied to grid visualization settings
pub const DEFAULT_TRANSPARENCY: f64 = 0.6;
