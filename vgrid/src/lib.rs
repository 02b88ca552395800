//! VGRID - Legacy VTK Structured-Points Reader
//!
//! This library reads the legacy VTK "DataFile Version 2.0" structured-points
//! text format and assembles the result into voxel grids with spatial cells
//! and named scalar properties.
//!
//! ## Architecture
//!
//! VGRID follows a clean specification/implementation separation:
//!
//! - **vgrid-core**: Pure format definitions, layout math, traits, and
//!   validation (no I/O)
//! - **vgrid**: Concrete file access, detection, scanning, and grid assembly
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vgrid::{detect, DataCollection, GridImporter};
//!
//! fn example() -> Result<(), vgrid::ReadError> {
//!     if detect("field.vtk") {
//!         let mut collection = DataCollection::new();
//!         let importer = GridImporter::new();
//!         let grid = importer.import_file("field.vtk", &mut collection)?;
//!         let grid = collection.grid(grid).expect("grid was just created");
//!         println!("{} values on {}", grid.property_len(), grid.shape);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Memory-mapped reads**: whole-file parsing without an intermediate copy
//! - **Order-preserving parallel scan**: the data section parses with rayon
//! - **Sink abstraction**: assembled grids go to any [`GridSink`]
//! - **Closed grid-kind choice**: cell data vs point data as a two-variant enum

// Re-export core abstractions and format definitions
pub use vgrid_core::{
    // Error handling
    ErrorCategory, GridError,
    // Format definitions
    GridDims, GridGeometry, GridHeader, GridKind,
    // Field storage
    ScalarField,
    // Traits
    CellMatrix, GridSink, GridVis, ScalarGrid,
    // Layout math
    column_major_index, column_major_strides,
};

// Implementation modules
pub mod collection;
pub mod detect;
pub mod error;
pub mod import;
pub mod scan;
pub mod source;

// Public exports
pub use collection::{CellId, DataCollection, GridId, SimulationCell, VoxelGrid};
pub use detect::detect;
pub use error::{ReadError, ReadResult};
pub use import::{GridImporter, ImportOptions};
pub use scan::{parse_file, parse_str, ParsedGrid, ScalarsDecl};
pub use source::FileSource;
