//! Random Point Cloud Surface
//!
//! Scatters random points into a cube of samples, marks each one as 1.0 and
//! extracts the surface around them:
//! 1. Scatter points and fill the field plane by plane, centering each plane
//! 2. Load a case table (the built-in reference table, or a file)
//! 3. Generate sequentially and in parallel
//! 4. Color the surface and print statistics
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --bin point_cloud
//! cargo run --release --bin point_cloud -- --points 500 --seed 7 --table tables/custom.txt
//! cargo run --release --bin point_cloud -- --op 4 --level 1.0
//! ```

use std::env;

use instant::Instant;
use rand::prelude::*;

use iso_io::tables::reference;
use iso_io::{load_from_file, CaseTable};
use iso_rs::{FieldBuilder, Plane, SurfaceGenerator, SurfaceStats, VertexColorer, CENTER};

/// Scene parameters
struct SceneConfig {
    /// Samples per axis minus one
    extent: usize,
    /// Number of random points
    points: usize,
    /// RNG seed, or `None` for a random scene
    seed: Option<u64>,
    /// Case table file, or `None` for the reference table
    table: Option<String>,
    /// Raw comparator code
    op: u8,
    /// Threshold value
    level: f64,
}

impl SceneConfig {
    fn from_args() -> Self {
        let mut config = Self {
            extent: 100,
            points: 100,
            seed: None,
            table: None,
            op: 3,
            level: 0.0,
        };

        let args: Vec<String> = env::args().skip(1).collect();
        let mut it = args.iter();
        while let Some(arg) = it.next() {
            match arg.as_str() {
                "--extent" => config.extent = parse_or_exit(it.next(), arg),
                "--points" => config.points = parse_or_exit(it.next(), arg),
                "--seed" => config.seed = Some(parse_or_exit(it.next(), arg)),
                "--table" => config.table = it.next().cloned(),
                "--op" => config.op = parse_or_exit(it.next(), arg),
                "--level" => config.level = parse_or_exit(it.next(), arg),
                other => {
                    eprintln!("Unknown argument '{}'", other);
                    std::process::exit(2);
                }
            }
        }
        config
    }
}

fn parse_or_exit<T: std::str::FromStr>(value: Option<&String>, flag: &str) -> T {
    match value.and_then(|v| v.parse().ok()) {
        Some(v) => v,
        None => {
            eprintln!("Missing or invalid value for {}", flag);
            std::process::exit(2);
        }
    }
}

fn main() {
    println!("═══════════════════════════════════════════════════════════════");
    println!("          Random Point Cloud Isosurface");
    println!("═══════════════════════════════════════════════════════════════");
    println!();

    let config = SceneConfig::from_args();
    let width = config.extent + 1;

    // =========================================================================
    // Step 1: Scatter points
    // =========================================================================
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Step 1: Scatter Points                                      │");
    println!("└─────────────────────────────────────────────────────────────┘");

    let mut rng: Box<dyn RngCore> = match config.seed {
        Some(seed) => Box::new(rand::rngs::StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    // Indexed [z][x][y]: one x-by-y plane per z
    let mut planes = vec![vec![vec![0.0f64; width]; width]; width];
    for _ in 0..config.points {
        let x = (rng.gen::<f64>() * config.extent as f64) as usize;
        let y = (rng.gen::<f64>() * config.extent as f64) as usize;
        let z = (rng.gen::<f64>() * config.extent as f64) as usize;
        planes[z][x][y] = 1.0;
    }

    let start = Instant::now();
    let mut builder = FieldBuilder::new(Plane::Xy, [width, width, width]).centroid(CENTER);
    for (z, plane) in planes.into_iter().enumerate() {
        builder = builder.plane_centered(z, plane, (width / 2) as i32, (width / 2) as i32);
    }
    let field = match builder.build() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error building field: {}", e);
            std::process::exit(1);
        }
    };
    println!("  Grid:            {}³ samples", width);
    println!("  Points:          {}", config.points);
    println!("  Build time:      {:.3}s", start.elapsed().as_secs_f64());
    println!();

    // =========================================================================
    // Step 2: Case table
    // =========================================================================
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Step 2: Load Case Table                                     │");
    println!("└─────────────────────────────────────────────────────────────┘");

    let start = Instant::now();
    let table: CaseTable = match &config.table {
        Some(path) => match load_from_file(path) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Error loading case table '{}': {}", path, e);
                std::process::exit(1);
            }
        },
        None => reference::tetrahedral(),
    };
    println!(
        "  Source:          {}",
        config.table.as_deref().unwrap_or("built-in reference")
    );
    println!("  Configurations:  {}", table.len());
    println!("  Max triangles:   {}", table.max_triangles());
    println!("  Load time:       {:.3}s", start.elapsed().as_secs_f64());
    println!();

    // =========================================================================
    // Step 3: Generate
    // =========================================================================
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Step 3: Generate Surface                                    │");
    println!("└─────────────────────────────────────────────────────────────┘");

    let generator = match SurfaceGenerator::new(&field, &table).with_coded(config.op, config.level) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error setting threshold: {}", e);
            std::process::exit(2);
        }
    };
    println!("  Threshold:       {:?}", generator.threshold());

    let start = Instant::now();
    let surface = generator.generate();
    let seq_time = start.elapsed();
    println!("  [Sequential]");
    println!("    Vertices Used: {}", surface.vertices().len());
    println!("    Time:          {:.3}s", seq_time.as_secs_f64());

    let start = Instant::now();
    let parallel = generator.generate_parallel();
    let par_time = start.elapsed();
    println!("  [Parallel]");
    println!("    Vertices Used: {}", parallel.vertices().len());
    println!("    Time:          {:.3}s", par_time.as_secs_f64());
    println!(
        "    Speedup:       {:.2}x",
        seq_time.as_secs_f64() / par_time.as_secs_f64().max(1e-9)
    );
    println!("    Identical:     {}", surface == parallel);
    println!();

    // =========================================================================
    // Step 4: Color and statistics
    // =========================================================================
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Step 4: Color and Statistics                                │");
    println!("└─────────────────────────────────────────────────────────────┘");

    let mut surface = surface;
    let colorer = VertexColorer::value_ramp(0.0, 1.0, [0.1, 0.2, 0.9, 1.0], [0.9, 0.8, 0.1, 1.0]);
    let start = Instant::now();
    if let Err(e) = generator.color_surface(&mut surface, &colorer) {
        eprintln!("Error coloring surface: {}", e);
        std::process::exit(1);
    }
    println!("  Colorer:         {:?}", surface.colorer_type());
    println!("  Color time:      {:.3}s", start.elapsed().as_secs_f64());

    let stats = SurfaceStats::from_surface(&surface);
    println!("  Triangle count:  {}", stats.triangle_count);
    println!("  Vertex count:    {}", stats.vertex_count);
    println!("  Active cells:    {}", stats.active_cells);
    println!("  Surface area:    {:.4}", stats.surface_area);
    if stats.triangle_count > 0 {
        println!(
            "  Bounding box:    ({:.2}, {:.2}, {:.2}) → ({:.2}, {:.2}, {:.2})",
            stats.bbox_min.x,
            stats.bbox_min.y,
            stats.bbox_min.z,
            stats.bbox_max.x,
            stats.bbox_max.y,
            stats.bbox_max.z
        );
    }
    println!();
}
