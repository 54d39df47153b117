//! Concrete scalar field storage.
//!
//! - [`DenseScalarField`]: per-plane array-of-arrays with offsets and a default value
//! - [`SparseScalarField`]: hash map of explicitly set points
//!
//! Both implement [`iso_core::ScalarField`] and share [`FieldLayout`].

mod dense;
mod layout;
mod sparse;

pub use dense::{DenseScalarField, PlaneData};
pub use layout::FieldLayout;
pub use sparse::SparseScalarField;
