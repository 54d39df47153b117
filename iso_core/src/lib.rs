//! # iso_core
//!
//! Pure algorithms for skeleton-climbing isosurface extraction.
//!
//! This crate holds everything the surface generator needs that does not own
//! storage: geometry types, plane and axis roles, threshold comparators, the
//! 32-bit cube configuration layout and the cube classifier, and the
//! [`ScalarField`] contract that concrete fields implement downstream.
//!
//! ## Features
//!
//! - **no_std compatible**: no allocation is needed anywhere in this crate
//! - **Pure functions**: classification depends only on eight corner samples
//!   and the cell position
//!
//! ## Feature Flags
//!
//! - `std` (default): implements `std::error::Error` for [`CoreError`]
//!
//! ## Modules
//!
//! - [`types`]: Core data types (Point3, CellCoord)
//! - [`plane`]: Plane selectors, axis roles and centroid presets
//! - [`compare`]: Comparators and threshold specs
//! - [`traits`]: The ScalarField contract
//! - [`cube`]: Configuration bits and the cube classifier
//! - [`error`]: Error types
//!
//! ## Usage
//!
//! ```ignore
//! use iso_core::prelude::*;
//!
//! let spec = ThresholdSpec::band(Comparator::GreaterThanEq, 5.0, Comparator::LessThanEq, 5.0);
//! let config = classify(&field, CellCoord::new(0, 0, 0), &spec);
//! println!("mask {:08b}, grey {:012b}", config.vertex_mask(), config.grey_edges());
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(feature = "std")]
extern crate std;

pub mod compare;
pub mod cube;
pub mod error;
pub mod plane;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
///
/// Provides the most commonly used types and functions.
pub mod prelude {
    pub use crate::compare::{Comparator, Threshold, ThresholdSpec};
    pub use crate::cube::{
        classify, corner_from_index, grey_edges, index_from_corner, occupied_edges, vertex_mask,
        CubeConfig, CORNER_OFFSETS, EDGE_CORNERS,
    };
    pub use crate::error::CoreError;
    pub use crate::plane::{
        centroid_from_fraction, Axis, AxisRoles, Plane, CENTER, CENTER_SANS_ALT, LOWER_LEFT,
    };
    pub use crate::traits::ScalarField;
    pub use crate::types::{CellCoord, Point3};
}

// Re-export everything at crate root for convenience
pub use compare::{Comparator, Threshold, ThresholdSpec};
pub use cube::{
    classify, corner_from_index, grey_edges, index_from_corner, occupied_edges, vertex_mask,
    CubeConfig, CORNER_OFFSETS, EDGE_CORNERS,
};
pub use error::CoreError;
pub use plane::{centroid_from_fraction, Axis, AxisRoles, Plane, CENTER, CENTER_SANS_ALT, LOWER_LEFT};
pub use traits::ScalarField;
pub use types::{CellCoord, Point3};
