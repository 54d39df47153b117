//! iso_io - scalar field storage and case-table assets.
//!
//! This crate owns everything the surface generator reads: concrete
//! [`ScalarField`] implementations and the configuration-keyed case tables
//! that turn a classified cell into triangles.
//!
//! # Core Types
//!
//! - [`FieldConfig`]: plane, dimensions, scales, centroid and default value
//! - [`FieldLayout`]: shared plane roles and per-plane major/minor offsets
//! - [`DenseScalarField<T>`]: per-plane array-of-arrays storage
//! - [`SparseScalarField`]: hash-backed storage of explicit points
//! - [`CaseTable`]: immutable configuration-to-geometry lookup
//!
//! # Example
//!
//! ```ignore
//! use iso_io::{tables, DenseScalarField, FieldConfig, Plane};
//!
//! let mut field: DenseScalarField = DenseScalarField::new(FieldConfig::new(Plane::Xz, [4, 4, 4]));
//! field.set_plane_data(2, vec![vec![0.0; 4], vec![0.0; 4], vec![0.0, 0.0, 1.0, 0.0], vec![0.0; 4]])?;
//!
//! let table = tables::reference::tetrahedral();
//! println!("{} configurations", table.len());
//! ```

pub mod config;
pub mod error;
pub mod field;
pub mod tables;

// Re-export core types from iso_core
pub use iso_core::{CellCoord, Comparator, CubeConfig, Plane, Point3, ScalarField, ThresholdSpec};

pub use config::FieldConfig;
pub use error::{IsoIoError, Result};
pub use field::{DenseScalarField, FieldLayout, PlaneData, SparseScalarField};
pub use tables::{CaseEntry, CaseTable, CaseTableBuilder, TableVertex};
pub use tables::{load, load_from_file, save, save_to_file};
