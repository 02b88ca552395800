#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "VGRID CLI - Inspect legacy structured-points grid files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Check whether a file is a supported grid file
    Detect {
        /// Path to the candidate file
        file: String,
    },
    /// Show header and field information
    Info {
        /// Path to the grid file
        file: String,
    },
    /// Dump header and values as JSON
    Dump {
        /// Path to the grid file
        file: String,

        /// Include the scalar values in the output
        #[arg(long)]
        values: bool,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Detect { file } => {
            if vgrid::detect(file) {
                println!("{file}: legacy structured-points file");
            } else {
                println!("{file}: not a legacy structured-points file");
                std::process::exit(1);
            }
        }
        Commands::Info { file } => {
            if !vgrid::detect(file) {
                return Err(Box::new(vgrid::ReadError::UnrecognizedFormat));
            }
            let parsed = vgrid::parse_file(file)?;

            println!("File: {file}");
            match parsed.header.dims {
                Some(dims) => println!("   Dimensions: {dims}"),
                None => println!("   Dimensions: <missing>"),
            }
            println!("   Origin: {:?}", parsed.header.origin);
            println!("   Spacing: {:?}", parsed.header.spacing);
            println!("   Declared points: {:?}", parsed.header.point_count);
            if let Some(scalars) = &parsed.scalars {
                println!("   Scalars: {} ({})", scalars.name, scalars.data_type);
            }
            println!("   Values: {}", parsed.field.len());
            println!(
                "   Shape consistent: {}",
                if parsed.field.is_consistent() { "yes" } else { "no" }
            );
        }
        Commands::Dump { file, values } => {
            let parsed = vgrid::parse_file(file)?;
            let mut doc = serde_json::json!({
                "header": parsed.header,
                "scalars": parsed.scalars,
                "count": parsed.field.len(),
            });
            if *values {
                doc["values"] = serde_json::json!(parsed.field.as_slice());
            }
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    println!("This example requires the 'cli' feature");
    println!("   Run with: cargo run --example grid_cli --features cli");
}
