//! End-to-end tests: detect, parse, and assemble real files from disk

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use approx::assert_relative_eq;
use vgrid::{
    detect, DataCollection, GridDims, GridError, GridImporter, GridKind, ImportOptions,
    ReadError, ScalarGrid,
};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn write_temp(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "vgrid-import-{}-{}.vtk",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let mut file = File::create(&path).unwrap();
    write!(file, "{contents}").unwrap();
    path
}

const WELL_FORMED_CUBE: &str = "\
# vtk DataFile Version 2.0
density field
ASCII
DATASET STRUCTURED_POINTS
DIMENSIONS 2 2 2
ORIGIN 0 0 0
SPACING 1 1 1
POINT DATA 8
SCALARS density float
LOOKUP_TABLE default
1 2 3
4 5
6 7 8
";

#[test]
fn well_formed_cube_imports_end_to_end() {
    init_tracing();
    let path = write_temp(WELL_FORMED_CUBE);

    assert!(detect(&path));

    let mut collection = DataCollection::new();
    let grid_id = GridImporter::new()
        .import_file(&path, &mut collection)
        .unwrap();

    let grid = collection.grid(grid_id).unwrap();
    assert_eq!(grid.identifier, "density_field");
    assert_eq!(grid.shape, GridDims::new(2, 2, 2));

    // Column-major flattening of the reshaped cube reproduces file order
    assert_eq!(
        grid.property("Field Value"),
        Some(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0][..])
    );

    let cell = collection.cell(grid.cell).unwrap();
    assert_eq!(cell.origin(), [0.0, 0.0, 0.0]);
    assert_eq!(cell.extents(), [2.0, 2.0, 2.0]);
    assert_eq!(cell.pbc, [true, true, true]);

    std::fs::remove_file(&path).ok();
}

#[test]
fn grid_view_exposes_geometry_and_values() {
    let path = write_temp(
        "\
# vtk DataFile Version 2.0
comment
DIMENSIONS 2 3 1
ORIGIN 1 2 3
SPACING 0.5 0.5 0.5
LOOKUP_TABLE default
10 20 30 40 50 60
",
    );

    let mut collection = DataCollection::new();
    let grid_id = GridImporter::new()
        .import_file(&path, &mut collection)
        .unwrap();

    let view = collection.view(grid_id, "Field Value").unwrap();
    assert_eq!(view.dims(), GridDims::new(2, 3, 1));
    assert_eq!(view.origin(), [1.0, 2.0, 3.0]);
    for (got, want) in view.spacing().iter().zip([0.5, 0.5, 0.5]) {
        assert_relative_eq!(*got, want);
    }
    // First index varies fastest
    assert_eq!(view.value(0, 0, 0), Some(10.0));
    assert_eq!(view.value(1, 0, 0), Some(20.0));
    assert_eq!(view.value(0, 1, 0), Some(30.0));
    assert_eq!(view.value(1, 2, 0), Some(60.0));

    std::fs::remove_file(&path).ok();
}

#[test]
fn detection_gates_import() {
    let path = write_temp("# vtk DataFile Version 3.0\nDIMENSIONS 1 1 1\n");

    assert!(!detect(&path));
    let mut collection = DataCollection::new();
    let err = GridImporter::new()
        .import_file(&path, &mut collection)
        .unwrap_err();
    assert!(matches!(err, ReadError::UnrecognizedFormat));

    std::fs::remove_file(&path).ok();
}

#[test]
fn missing_file_fails_detection_not_import() {
    let mut path = std::env::temp_dir();
    path.push("vgrid-import-no-such-file.vtk");

    assert!(!detect(&path));
    let mut collection = DataCollection::new();
    let err = GridImporter::new()
        .import_file(&path, &mut collection)
        .unwrap_err();
    assert!(matches!(err, ReadError::UnrecognizedFormat));
}

#[test]
fn missing_dimensions_parses_flat_but_does_not_assemble() {
    let path = write_temp(
        "\
# vtk DataFile Version 2.0
comment
ORIGIN 0 0 0
SPACING 1 1 1
LOOKUP_TABLE default
1 2 3 4
",
    );

    let parsed = vgrid::parse_file(&path).unwrap();
    assert_eq!(parsed.field.shape(), None);
    assert_eq!(parsed.field.as_slice(), &[1.0, 2.0, 3.0, 4.0]);

    let mut collection = DataCollection::new();
    let err = GridImporter::new()
        .import_file(&path, &mut collection)
        .unwrap_err();
    assert!(matches!(err, ReadError::Grid(GridError::MissingDimensions)));
    assert!(collection.grids().is_empty());

    std::fs::remove_file(&path).ok();
}

#[test]
fn point_data_option_reaches_the_grid() {
    let path = write_temp(WELL_FORMED_CUBE);

    let importer = GridImporter::with_options(ImportOptions {
        grid_kind: GridKind::PointData,
        identifier: "potential".to_string(),
        property_name: "Potential".to_string(),
    });
    let mut collection = DataCollection::new();
    let grid_id = importer.import_file(&path, &mut collection).unwrap();

    let grid = collection.grid(grid_id).unwrap();
    assert_eq!(grid.kind, GridKind::PointData);
    assert_eq!(grid.identifier, "potential");
    assert!(grid.property("Potential").is_some());
    assert!(grid.property("Field Value").is_none());

    std::fs::remove_file(&path).ok();
}

#[test]
fn malformed_spacing_line_reports_its_line_number() {
    let path = write_temp(
        "\
# vtk DataFile Version 2.0
comment
DIMENSIONS 2 2 2
SPACING 1.0e 1 1
",
    );

    let err = vgrid::parse_file(&path).unwrap_err();
    match err {
        ReadError::Format { line, source } => {
            assert_eq!(line, 4);
            assert_eq!(source, GridError::MalformedNumber);
        }
        other => panic!("expected format error, got {other:?}"),
    }

    std::fs::remove_file(&path).ok();
}

#[test]
fn oversized_dimensions_error_instead_of_overflowing() {
    let path = write_temp(
        "\
# vtk DataFile Version 2.0
comment
DIMENSIONS 4294967296 4294967296 4294967296
ORIGIN 0 0 0
SPACING 1 1 1
LOOKUP_TABLE default
1 2 3
",
    );

    // The scan itself accepts the declared extents
    let parsed = vgrid::parse_file(&path).unwrap();
    assert_eq!(parsed.field.as_slice(), &[1.0, 2.0, 3.0]);

    // Assembly rejects a shape whose count is not representable
    let mut collection = DataCollection::new();
    let err = GridImporter::new()
        .import_file(&path, &mut collection)
        .unwrap_err();
    assert!(matches!(err, ReadError::Grid(GridError::InvalidDimensions)));

    std::fs::remove_file(&path).ok();
}

#[test]
fn large_grid_preserves_file_order() {
    // 6 x 5 x 4 grid with values equal to their file position
    let dims = GridDims::new(6, 5, 4);
    let mut body = String::from(
        "# vtk DataFile Version 2.0\ncomment\nDIMENSIONS 6 5 4\nORIGIN 0 0 0\nSPACING 1 1 1\nLOOKUP_TABLE default\n",
    );
    for n in 0..dims.product() {
        body.push_str(&format!("{n}"));
        body.push(if n % 7 == 6 { '\n' } else { ' ' });
    }
    body.push('\n');
    let path = write_temp(&body);

    let mut collection = DataCollection::new();
    let grid_id = GridImporter::new()
        .import_file(&path, &mut collection)
        .unwrap();

    let values = collection
        .grid(grid_id)
        .unwrap()
        .property("Field Value")
        .unwrap();
    assert_eq!(values.len(), dims.product());
    for (n, value) in values.iter().enumerate() {
        assert_eq!(*value, n as f64);
    }

    std::fs::remove_file(&path).ok();
}
