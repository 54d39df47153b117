//! Cube classification for skeleton climbing.
//!
//! Every grid cell is reduced to a 32-bit [`CubeConfig`]: which of its eight
//! corners are inside, which of its twelve edges are crossed, and which edges
//! are *grey*. Grey edges depend only on the parity of the cell position and
//! let the case table choose the same diagonal on both sides of a shared face,
//! which keeps neighbouring triangulations consistent.
//!
//! # Example
//!
//! ```ignore
//! use iso_core::prelude::*;
//!
//! let spec = ThresholdSpec::single(Comparator::GreaterThan, 0.0);
//! let config = classify(&field, CellCoord::new(1, 1, 1), &spec);
//! if !config.is_empty_or_full() {
//!     // look the configuration up in a case table
//! }
//! ```

mod bits;
mod classify;

pub use bits::*;
pub use classify::{classify, grey_edges, occupied_edges, vertex_mask, CubeConfig};
