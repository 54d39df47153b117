//! Cube classification: corner states, occupied edges and grey edges.

use super::bits::*;
use crate::compare::ThresholdSpec;
use crate::error::CoreError;
use crate::traits::ScalarField;
use crate::types::CellCoord;

/// A full 32-bit cube configuration, the case table lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CubeConfig(pub u32);

impl CubeConfig {
    /// Build the configuration for a vertex mask at cell `(x, y, z)`.
    #[inline]
    pub fn compose(mask: u8, x: i64, y: i64, z: i64) -> Self {
        let occ = occupied_edges(mask) as u32;
        let grey = grey_edges(x, y, z) as u32;
        Self(mask as u32 | (occ << EDGE_OCC_SHIFT) | (grey << EDGE_GREY_SHIFT))
    }

    /// The raw 32-bit value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Corner-inside flags (bits 0-7).
    #[inline]
    pub const fn vertex_mask(self) -> u8 {
        (self.0 & VERT_MASK) as u8
    }

    /// Occupied-edge flags (bits 8-19), shifted down.
    #[inline]
    pub const fn occupied_edges(self) -> u16 {
        ((self.0 & EDGE_OCC_MASK) >> EDGE_OCC_SHIFT) as u16
    }

    /// Grey-edge flags (bits 20-31), shifted down.
    #[inline]
    pub const fn grey_edges(self) -> u16 {
        ((self.0 & EDGE_GREY_MASK) >> EDGE_GREY_SHIFT) as u16
    }

    /// Whether corner `index` is inside.
    pub fn is_corner_inside(self, index: usize) -> Result<bool, CoreError> {
        if index >= 8 {
            return Err(CoreError::InvalidCorner { index });
        }
        Ok(self.0 & (1 << index) != 0)
    }

    /// All corners agree, so no edge is crossed.
    #[inline]
    pub const fn is_empty_or_full(self) -> bool {
        self.occupied_edges() == 0
    }
}

impl From<CubeConfig> for u32 {
    #[inline]
    fn from(config: CubeConfig) -> Self {
        config.0
    }
}

/// Edges whose two endpoints differ in inside/outside state.
///
/// Bit `i` of the result corresponds to edge `i` in [`EDGE_CORNERS`].
#[inline]
pub fn occupied_edges(mask: u8) -> u16 {
    let mut edges = 0u16;
    for (i, &(a, b)) in EDGE_CORNERS.iter().enumerate() {
        let inside_a = (mask >> a) & 1;
        let inside_b = (mask >> b) & 1;
        if inside_a != inside_b {
            edges |= 1 << i;
        }
    }
    edges
}

/// Grey edges selected by the parity of the cell position.
///
/// Exactly one edge along each axis is flagged: the y-parallel edge from the
/// parity of `(x, z)`, the x-parallel edge from `(y, z)` and the z-parallel
/// edge from `(x, y)`. Scalar values play no part.
#[inline]
pub fn grey_edges(x: i64, y: i64, z: i64) -> u16 {
    let xo = x.rem_euclid(2) != 0;
    let yo = y.rem_euclid(2) != 0;
    let zo = z.rem_euclid(2) != 0;

    let vertical = match (xo, zo) {
        (false, false) => 3,
        (true, false) => 1,
        (false, true) => 7,
        (true, true) => 5,
    };
    let horizontal = match (yo, zo) {
        (true, true) => 0,
        (false, true) => 2,
        (true, false) => 4,
        (false, false) => 6,
    };
    let depth = match (xo, yo) {
        (true, false) => 8,
        (false, false) => 9,
        (false, true) => 10,
        (true, true) => 11,
    };

    (1 << vertical) | (1 << horizontal) | (1 << depth)
}

/// Corner-inside mask of `cell` under `spec`.
#[inline]
pub fn vertex_mask<F: ScalarField + ?Sized>(field: &F, cell: CellCoord, spec: &ThresholdSpec) -> u8 {
    let mut mask = 0u8;
    for (i, &offset) in CORNER_OFFSETS.iter().enumerate() {
        let (x, y, z) = cell.corner(offset);
        if field.is_inside(x, y, z, spec) {
            mask |= 1 << i;
        }
    }
    mask
}

/// Classify `cell` into its full 32-bit configuration.
#[inline]
pub fn classify<F: ScalarField + ?Sized>(field: &F, cell: CellCoord, spec: &ThresholdSpec) -> CubeConfig {
    let mask = vertex_mask(field, cell, spec);
    CubeConfig::compose(mask, cell.x as i64, cell.y as i64, cell.z as i64)
}
