//! # iso_rs
//!
//! Skeleton-climbing isosurface generation.
//!
//! This crate is the runtime side of the workspace: it walks a
//! [`ScalarField`] cell by cell, classifies each cube with
//! [`iso_core::classify`], and assembles triangle geometry from a
//! [`CaseTable`]. It is designed for:
//!
//! - **Determinism**: output order is `x`, `y`, `z` traversal order, then
//!   case-table order within a cell; repeated runs are bit-identical
//! - **Crack-free output**: grey-edge parity gives neighbouring cells a
//!   consistent diagonal choice
//! - **Sparse data**: fields sample a default value wherever nothing is stored
//!
//! ## Quick Start
//!
//! ```ignore
//! use iso_rs::prelude::*;
//! use iso_io::tables::reference;
//!
//! let field = FieldBuilder::new(Plane::Xz, [32, 32, 32])
//!     .centroid(CENTER)
//!     .fill_fn(|x, y, z| {
//!         let d = |a: usize| a as f64 - 16.0;
//!         (d(x) * d(x) + d(y) * d(y) + d(z) * d(z)).sqrt()
//!     })
//!     .build()?;
//!
//! let table = reference::tetrahedral();
//! let surface = SurfaceGenerator::new(&field, &table)
//!     .with_single(Comparator::LessThan, 10.0)
//!     .generate();
//!
//! let stats = SurfaceStats::from_surface(&surface);
//! println!("{} triangles, area {}", stats.triangle_count, stats.surface_area);
//! ```
//!
//! ## Coloring
//!
//! Attach a [`VertexColorer`] to receive one color and/or material per
//! vertex. A surface can be recolored later with
//! [`SurfaceGenerator::color_surface`], which reuses the stored cell
//! configurations instead of classifying again.
//!
//! ## Feature Flags
//!
//! - `parallel` (default): [`SurfaceGenerator::generate_parallel`] via rayon

#![warn(missing_docs)]
#![warn(clippy::all)]

mod builder;
mod colorer;
mod error;
mod generator;
mod surface;

pub use builder::FieldBuilder;
pub use colorer::{ColorSample, ColorerType, LitFn, Material, Rgba, UnlitFn, VertexColorer};
pub use error::{IsoError, Result};
pub use generator::SurfaceGenerator;
pub use surface::{CellConfigs, GeneratedSurface, SurfaceStats};

// Re-export types from iso_io
pub use iso_io::{CaseEntry, CaseTable, DenseScalarField, FieldConfig, SparseScalarField};

// Re-export iso_core types for convenience
pub use iso_core::{
    CellCoord, Comparator, CubeConfig, Plane, Point3, ScalarField, Threshold, ThresholdSpec,
    CENTER, CENTER_SANS_ALT, LOWER_LEFT,
};

/// Prelude module for convenient imports.
///
/// ```ignore
/// use iso_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::builder::FieldBuilder;
    pub use crate::colorer::{ColorSample, ColorerType, Material, Rgba, VertexColorer};
    pub use crate::error::{IsoError, Result};
    pub use crate::generator::SurfaceGenerator;
    pub use crate::surface::{GeneratedSurface, SurfaceStats};

    pub use iso_io::{CaseTable, DenseScalarField, FieldConfig, SparseScalarField};

    pub use iso_core::{
        Comparator, Plane, Point3, ScalarField, ThresholdSpec, CENTER, CENTER_SANS_ALT, LOWER_LEFT,
    };
}
