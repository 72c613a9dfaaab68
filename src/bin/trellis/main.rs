//! Trellis CLI - triangle-soup topology command-line tool.
//!
//! Usage: trellis <COMMAND> <INPUT> [OUTPUT]
//!
//! Run `trellis --help` for available commands.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};

use trellis::io;
use trellis::topology::IndexedMesh;

#[derive(Parser)]
#[command(name = "trellis")]
#[command(author, version, about = "Triangle-soup topology CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display topology information for a mesh
    Info {
        /// Input STL file
        input: PathBuf,
    },

    /// Convert an STL triangle soup to an indexed mesh format
    Convert {
        /// Input STL file
        input: PathBuf,

        /// Output file (.tm or .off; format chosen by extension)
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Info { input } => cmd_info(&input)?,
        Commands::Convert { input, output } => cmd_convert(&input, &output)?,
    }

    Ok(())
}

fn print_edge_summary(mesh: &IndexedMesh) {
    let mut boundary = 0usize;
    let mut manifold = 0usize;
    let mut non_manifold = 0usize;

    for e in mesh.edge_ids() {
        match mesh.edge(e).faces.len() {
            1 => boundary += 1,
            2 => manifold += 1,
            _ => non_manifold += 1,
        }
    }

    if mesh.is_closed() {
        println!("Topology: Closed (every edge borders 2 faces)");
    } else {
        println!(
            "Topology: Open ({} boundary, {} manifold, {} non-manifold edges)",
            boundary, manifold, non_manifold
        );
    }
}

fn cmd_info(input: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = io::load(input)?;

    println!("File: {}", input.display());
    println!("Vertices: {}", mesh.num_vertices());
    println!("Edges: {}", mesh.num_edges());
    println!("Faces: {}", mesh.num_faces());

    if let Some((min, max)) = mesh.bounding_box() {
        println!(
            "Bounding box: ({:.3}, {:.3}, {:.3}) to ({:.3}, {:.3}, {:.3})",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
        let diag = max - min;
        println!("Dimensions: {:.3} x {:.3} x {:.3}", diag.x, diag.y, diag.z);
    }

    print_edge_summary(&mesh);

    Ok(())
}

fn cmd_convert(input: &PathBuf, output: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let mesh = io::load(input)?;

    println!(
        "Loaded: {} vertices, {} edges, {} faces",
        mesh.num_vertices(),
        mesh.num_edges(),
        mesh.num_faces()
    );

    io::save(&mesh, output)?;
    println!("Saved: {} ({:.2?})", output.display(), start.elapsed());

    Ok(())
}
