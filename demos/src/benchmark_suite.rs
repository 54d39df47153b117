//! Generation Benchmark Suite
//!
//! Measures the main performance characteristics of surface generation:
//!
//! 1. **Classification**: per-cell cube classification, single and band tests
//! 2. **Generation**: sequential and parallel surface extraction
//! 3. **Coloring**: recoloring a generated surface from stored configurations
//! 4. **Case tables**: building, writing and loading the reference table
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --bin benchmark_suite
//! cargo run --release --bin benchmark_suite -- --large  # Run with larger grids
//! ```

use std::env;

use instant::Instant;

use iso_core::{classify, CellCoord, Comparator, ThresholdSpec};
use iso_io::tables::reference;
use iso_io::{load, save, CaseTable, DenseScalarField};
use iso_rs::{FieldBuilder, Plane, SurfaceGenerator, SurfaceStats, VertexColorer, CENTER};

/// Benchmark configuration
struct BenchConfig {
    /// Grid sizes to generate from (samples per axis)
    sizes: Vec<usize>,
    /// Number of iterations for timing
    iterations: usize,
}

impl BenchConfig {
    fn small() -> Self {
        Self {
            sizes: vec![16, 32, 48],
            iterations: 10,
        }
    }

    fn large() -> Self {
        Self {
            sizes: vec![32, 64, 96, 128],
            iterations: 5,
        }
    }
}

/// A gyroid-like periodic field, so every region of the grid has surface.
fn make_field(n: usize) -> DenseScalarField<f32> {
    let f = 2.0 * std::f32::consts::PI / 16.0;
    FieldBuilder::new(Plane::Xz, [n, n, n])
        .centroid(CENTER)
        .fill_fn(move |x, y, z| {
            let (x, y, z) = (x as f32 * f, y as f32 * f, z as f32 * f);
            x.sin() * y.cos() + y.sin() * z.cos() + z.sin() * x.cos()
        })
        .build()
        .unwrap_or_else(|e| {
            eprintln!("Error building field: {}", e);
            std::process::exit(1);
        })
}

fn section(title: &str) {
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ {:<60}│", title);
    println!("└─────────────────────────────────────────────────────────────┘");
}

fn bench_classification(field: &DenseScalarField<f32>, n: usize) {
    section("1. Classification");

    let cells = (n - 1) * (n - 1) * (n - 1);
    for (label, spec) in [
        ("single", ThresholdSpec::single(Comparator::GreaterThan, 0.0)),
        (
            "band",
            ThresholdSpec::band(Comparator::GreaterThan, -0.5, Comparator::LessThan, 0.5),
        ),
    ] {
        let start = Instant::now();
        let mut occupied = 0usize;
        for x in 0..n - 1 {
            for y in 0..n - 1 {
                for z in 0..n - 1 {
                    let cell = CellCoord::new(x as u32, y as u32, z as u32);
                    if !classify(field, cell, &spec).is_empty_or_full() {
                        occupied += 1;
                    }
                }
            }
        }
        let elapsed = start.elapsed().as_secs_f64();
        println!(
            "  {:<8} {:>9} cells  {:>8} active  {:>8.1} ns/cell",
            label,
            cells,
            occupied,
            elapsed * 1e9 / cells as f64
        );
    }
    println!();
}

fn bench_generation(config: &BenchConfig, table: &CaseTable) {
    section("2. Generation");

    for &n in &config.sizes {
        let field = make_field(n);
        let generator = SurfaceGenerator::new(&field, table).with_single(Comparator::GreaterThan, 0.0);

        let start = Instant::now();
        let mut surface = generator.generate();
        for _ in 1..config.iterations {
            surface = generator.generate();
        }
        let seq = start.elapsed().as_secs_f64() / config.iterations as f64;

        let start = Instant::now();
        for _ in 0..config.iterations {
            surface = generator.generate_parallel();
        }
        let par = start.elapsed().as_secs_f64() / config.iterations as f64;

        let stats = SurfaceStats::from_surface(&surface);
        println!(
            "  {:>4}³  {:>9} tris  seq {:>8.2} ms  par {:>8.2} ms  ({:.2}x)",
            n,
            stats.triangle_count,
            seq * 1e3,
            par * 1e3,
            seq / par.max(1e-12)
        );
    }
    println!();
}

fn bench_coloring(config: &BenchConfig, table: &CaseTable) {
    section("3. Coloring");

    let n = config.sizes[config.sizes.len() / 2];
    let field = make_field(n);
    let generator = SurfaceGenerator::new(&field, table).with_single(Comparator::GreaterThan, 0.0);
    let mut surface = generator.generate();
    let colorer = VertexColorer::value_ramp(0.0, 1.5, [0.0, 0.0, 1.0, 1.0], [1.0, 0.0, 0.0, 1.0]);

    let start = Instant::now();
    for _ in 0..config.iterations {
        if let Err(e) = generator.color_surface(&mut surface, &colorer) {
            eprintln!("Error coloring surface: {}", e);
            std::process::exit(1);
        }
    }
    let elapsed = start.elapsed().as_secs_f64() / config.iterations as f64;
    println!(
        "  {:>4}³  {:>9} vertices  {:>8.2} ms  {:>8.1} ns/vertex",
        n,
        surface.vertices().len(),
        elapsed * 1e3,
        elapsed * 1e9 / surface.vertices().len().max(1) as f64
    );
    println!();
}

fn bench_tables() -> CaseTable {
    section("4. Case Tables");

    let start = Instant::now();
    let table = reference::tetrahedral();
    println!(
        "  Build:   {:>8.2} ms  ({} configurations)",
        start.elapsed().as_secs_f64() * 1e3,
        table.len()
    );

    let start = Instant::now();
    let mut buffer = Vec::new();
    if let Err(e) = save(&table, &mut buffer) {
        eprintln!("Error writing table: {}", e);
        std::process::exit(1);
    }
    println!(
        "  Write:   {:>8.2} ms  ({} bytes)",
        start.elapsed().as_secs_f64() * 1e3,
        buffer.len()
    );

    let start = Instant::now();
    match load(buffer.as_slice()) {
        Ok(loaded) => println!(
            "  Load:    {:>8.2} ms  (round trip {})",
            start.elapsed().as_secs_f64() * 1e3,
            if loaded == table { "ok" } else { "MISMATCH" }
        ),
        Err(e) => {
            eprintln!("Error loading table: {}", e);
            std::process::exit(1);
        }
    }
    println!();

    table
}

fn main() {
    println!("═══════════════════════════════════════════════════════════════");
    println!("          Isosurface Generation Benchmark Suite");
    println!("═══════════════════════════════════════════════════════════════");
    println!();

    let config = if env::args().any(|a| a == "--large") {
        BenchConfig::large()
    } else {
        BenchConfig::small()
    };

    let table = bench_tables();

    let n = config.sizes[0];
    bench_classification(&make_field(n), n);
    bench_generation(&config, &table);
    bench_coloring(&config, &table);
}
