//! Simple example to read a structured-points grid from a .vtk file

use std::time::Instant;

use vgrid::{detect, DataCollection, GridImporter, ScalarGrid};

fn main() -> Result<(), vgrid::ReadError> {
    let filename = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "example_grid.vtk".to_string());

    // Check if file exists
    if !std::path::Path::new(&filename).exists() {
        println!("File '{filename}' not found!");
        println!("   Pass a path to a legacy structured-points .vtk file");
        return Ok(());
    }

    // Time format detection
    println!("Detecting format of '{filename}'...");
    let start = Instant::now();
    let matched = detect(&filename);
    let detect_time = start.elapsed();
    println!(
        "Detection: {} in {:.3}ms",
        if matched { "match" } else { "no match" },
        detect_time.as_secs_f64() * 1000.0
    );
    if !matched {
        return Ok(());
    }

    // Time parsing and assembly
    println!("Parsing and assembling grid...");
    let start = Instant::now();
    let mut collection = DataCollection::new();
    let importer = GridImporter::new();
    let grid_id = importer.import_file(&filename, &mut collection)?;
    let import_time = start.elapsed();
    println!("Imported in {:.3}ms", import_time.as_secs_f64() * 1000.0);

    let grid = collection.grid(grid_id).expect("grid was just created");
    let cell = collection.cell(grid.cell).expect("cell was just created");

    println!("\nGrid Information:");
    println!("   Identifier: {}", grid.identifier);
    println!("   Shape: {}", grid.shape);
    println!("   Kind: {}", grid.kind);
    println!("   Origin: {:?}", cell.origin());
    println!("   Extents: {:?}", cell.extents());
    println!("   Values: {}", grid.property_len());

    // Sample a few values through the scalar-grid view
    if let Some(view) = collection.view(grid_id, "Field Value") {
        println!("\nCorner samples:");
        let (nx, ny, nz) = view.dims().as_tuple();
        for (i, j, k) in [(0, 0, 0), (nx - 1, 0, 0), (0, ny - 1, 0), (0, 0, nz - 1)] {
            match view.value(i, j, k) {
                Some(value) => println!("   grid[{i}, {j}, {k}] = {value}"),
                None => println!("   grid[{i}, {j}, {k}] = <missing>"),
            }
        }
    }

    let total = detect_time + import_time;
    println!("\nTotal operation time: {:.3}ms", total.as_secs_f64() * 1000.0);

    Ok(())
}
