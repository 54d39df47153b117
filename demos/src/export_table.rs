//! Case Table Export
//!
//! Writes the built-in reference case table in the text table format, then
//! loads it back and checks the round trip.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --bin export_table -- output/reference_table.txt
//! ```

use std::env;
use std::path::Path;

use instant::Instant;

use iso_io::tables::reference;
use iso_io::{load_from_file, save_to_file};

fn main() {
    let args: Vec<String> = env::args().collect();
    let output_path = if args.len() >= 2 {
        args[1].clone()
    } else {
        println!("Usage: {} <output.txt>", args[0]);
        println!();
        println!("Using default: output/reference_table.txt");
        "output/reference_table.txt".to_string()
    };

    if let Some(parent) = Path::new(&output_path).parent() {
        std::fs::create_dir_all(parent).ok();
    }

    let start = Instant::now();
    let table = reference::tetrahedral();
    println!("  Built table:     {} configurations", table.len());
    println!("  Max triangles:   {}", table.max_triangles());
    println!("  Build time:      {:.3}s", start.elapsed().as_secs_f64());

    let start = Instant::now();
    if let Err(e) = save_to_file(&table, &output_path) {
        eprintln!("Error writing '{}': {}", output_path, e);
        std::process::exit(1);
    }
    let size = std::fs::metadata(&output_path).map(|m| m.len()).unwrap_or(0);
    println!("  Wrote:           {} ({} bytes)", output_path, size);
    println!("  Write time:      {:.3}s", start.elapsed().as_secs_f64());

    let start = Instant::now();
    match load_from_file(&output_path) {
        Ok(loaded) if loaded == table => {
            println!("  Round trip:      ok");
        }
        Ok(loaded) => {
            eprintln!(
                "  Round trip:      MISMATCH ({} vs {} configurations)",
                loaded.len(),
                table.len()
            );
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error reading back '{}': {}", output_path, e);
            std::process::exit(1);
        }
    }
    println!("  Read time:       {:.3}s", start.elapsed().as_secs_f64());
}
