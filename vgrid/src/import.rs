//! File import: detection, parse, and grid assembly
//!
//! The full load path: detect the format, scan the file, validate the
//! geometry, then hand a cell, a grid, and a scalar property to a sink.

use std::path::Path;

use tracing::{debug, warn};

use vgrid_core::constants::{DEFAULT_GRID_IDENTIFIER, DEFAULT_PROPERTY_NAME};
use vgrid_core::{
    validate_scalar_count, CellMatrix, GridGeometry, GridKind, GridSink, GridVis,
};

use crate::detect::detect;
use crate::error::{ReadError, ReadResult};
use crate::scan::{parse_file, ParsedGrid};

/// User-facing import options
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImportOptions {
    /// Interpret values as per-cell or per-point data
    pub grid_kind: GridKind,
    /// Identifier given to the created grid
    pub identifier: String,
    /// Name of the scalar property attached to the grid
    pub property_name: String,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            grid_kind: GridKind::default(),
            identifier: DEFAULT_GRID_IDENTIFIER.to_string(),
            property_name: DEFAULT_PROPERTY_NAME.to_string(),
        }
    }
}

/// Imports structured-points files into a [`GridSink`]
#[derive(Debug, Clone, Default)]
pub struct GridImporter {
    options: ImportOptions,
}

impl GridImporter {
    /// Create an importer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an importer with explicit options
    pub fn with_options(options: ImportOptions) -> Self {
        Self { options }
    }

    /// Current options
    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Detect, parse, and assemble one file into the sink
    pub fn import_file<P, S>(&self, path: P, sink: &mut S) -> ReadResult<S::GridId>
    where
        P: AsRef<Path>,
        S: GridSink,
    {
        let path = path.as_ref();
        if !detect(path) {
            return Err(ReadError::UnrecognizedFormat);
        }

        let parsed = parse_file(path)?;
        self.assemble(&parsed, sink)
    }

    /// Assemble a parsed grid into the sink
    ///
    /// Requires complete geometry; scalar-count mismatches against the
    /// declared shape are reported at warn level but do not fail the import.
    pub fn assemble<S: GridSink>(&self, parsed: &ParsedGrid, sink: &mut S) -> ReadResult<S::GridId> {
        let geometry = parsed.header.validate()?;

        if validate_scalar_count(parsed.field.len(), geometry.dims).is_err() {
            warn!(
                values = parsed.field.len(),
                expected = geometry.dims.product(),
                "scalar count does not match declared dimensions"
            );
        }

        let cell = sink.create_cell(cell_matrix(&geometry), [true, true, true])?;
        let grid = sink.create_grid(
            &self.options.identifier,
            cell,
            geometry.dims,
            self.options.grid_kind,
            Some(GridVis::default()),
        )?;
        sink.create_property(
            grid,
            &self.options.property_name,
            &parsed.field.flatten_fortran(),
        )?;

        debug!(
            identifier = %self.options.identifier,
            dims = %geometry.dims,
            kind = %self.options.grid_kind,
            "grid assembled"
        );
        Ok(grid)
    }
}

/// Build the 3x4 cell matrix for a grid geometry
///
/// Each row scales the corresponding axis by extent times spacing, with the
/// origin in the fourth column.
fn cell_matrix(geometry: &GridGeometry) -> CellMatrix {
    let (nx, ny, nz) = geometry.dims.as_tuple();
    let [sx, sy, sz] = geometry.spacing;
    let [ox, oy, oz] = geometry.origin;
    [
        [nx as f64 * sx, 0.0, 0.0, ox],
        [0.0, ny as f64 * sy, 0.0, oy],
        [0.0, 0.0, nz as f64 * sz, oz],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::DataCollection;
    use crate::scan::parse_str;
    use vgrid_core::{GridDims, GridError};

    const CUBE: &str = "\
# vtk DataFile Version 2.0
density field
DIMENSIONS 2 2 2
ORIGIN 0.5 1.5 2.5
SPACING 1 2 3
LOOKUP_TABLE default
1 2 3 4 5 6 7 8
";

    #[test]
    fn test_assemble_builds_cell_and_grid() {
        let parsed = parse_str(CUBE).unwrap();
        let mut collection = DataCollection::new();
        let importer = GridImporter::new();
        let grid_id = importer.assemble(&parsed, &mut collection).unwrap();

        let grid = collection.grid(grid_id).unwrap();
        assert_eq!(grid.identifier, "density_field");
        assert_eq!(grid.shape, GridDims::new(2, 2, 2));
        assert_eq!(grid.kind, GridKind::CellData);
        assert_eq!(
            grid.property("Field Value"),
            Some(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0][..])
        );

        let cell = collection.cell(grid.cell).unwrap();
        assert_eq!(cell.pbc, [true, true, true]);
        assert_eq!(cell.origin(), [0.5, 1.5, 2.5]);
        // Extents are dimension times spacing per axis
        assert_eq!(cell.extents(), [2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_assemble_requires_geometry() {
        let parsed = parse_str("LOOKUP_TABLE default\n1 2 3\n").unwrap();
        let mut collection = DataCollection::new();
        let importer = GridImporter::new();
        let err = importer.assemble(&parsed, &mut collection).unwrap_err();
        assert!(matches!(
            err,
            ReadError::Grid(GridError::MissingDimensions)
        ));
    }

    #[test]
    fn test_point_data_option() {
        let parsed = parse_str(CUBE).unwrap();
        let mut collection = DataCollection::new();
        let importer = GridImporter::with_options(ImportOptions {
            grid_kind: GridKind::PointData,
            ..ImportOptions::default()
        });
        let grid_id = importer.assemble(&parsed, &mut collection).unwrap();
        assert_eq!(collection.grid(grid_id).unwrap().kind, GridKind::PointData);
    }

    #[test]
    fn test_count_mismatch_imports_with_warning() {
        let text = "\
# vtk DataFile Version 2.0
DIMENSIONS 2 2 2
ORIGIN 0 0 0
SPACING 1 1 1
LOOKUP_TABLE default
1 2 3
";
        let parsed = parse_str(text).unwrap();
        let mut collection = DataCollection::new();
        let grid_id = GridImporter::new()
            .assemble(&parsed, &mut collection)
            .unwrap();
        // Short data is attached as-is rather than failing the import
        assert_eq!(
            collection.grid(grid_id).unwrap().property("Field Value"),
            Some(&[1.0, 2.0, 3.0][..])
        );
    }

    #[test]
    fn test_cell_matrix_layout() {
        let geometry = GridGeometry {
            dims: GridDims::new(10, 20, 30),
            origin: [1.0, 2.0, 3.0],
            spacing: [0.1, 0.2, 0.3],
        };
        let matrix = cell_matrix(&geometry);
        assert_eq!(matrix[0], [1.0, 0.0, 0.0, 1.0]);
        assert!((matrix[1][1] - 4.0).abs() < 1e-12);
        assert_eq!(matrix[1][3], 2.0);
        assert!((matrix[2][2] - 9.0).abs() < 1e-12);
        assert_eq!(matrix[2][3], 3.0);
    }
}
