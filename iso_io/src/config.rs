//! Field configuration types.

use iso_core::{centroid_from_fraction, Plane, Point3, LOWER_LEFT};

use crate::error::Result;

/// Field configuration parameters (immutable after construction).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    /// Which plane carries the variable-length data.
    pub plane: Plane,
    /// Maximum dimension of each raw axis, `[x, y, z]`.
    pub dims: [usize; 3],
    /// Grid-unit to world-unit factors, `[x, y, z]`.
    pub scale: [f32; 3],
    /// Centroid as a fraction of each axis (see [`iso_core::plane`] presets).
    pub centroid_fraction: Point3,
    /// Value returned for every address outside the stored data.
    pub least_value: f64,
}

impl FieldConfig {
    /// Create a configuration with unit scale, a lower-left centroid and a zero default.
    #[inline]
    pub const fn new(plane: Plane, dims: [usize; 3]) -> Self {
        Self {
            plane,
            dims,
            scale: [1.0; 3],
            centroid_fraction: LOWER_LEFT,
            least_value: 0.0,
        }
    }

    /// Like [`FieldConfig::new`], but the plane comes as a raw selector
    /// (0 = XZ, 1 = XY, 2 = YZ). Unknown selectors are rejected rather than
    /// falling back to XZ.
    pub fn from_plane_code(raw: u8, dims: [usize; 3]) -> Result<Self> {
        let plane = Plane::try_from_raw(raw)?;
        Ok(Self::new(plane, dims))
    }

    /// Length of the independent axis (the number of planes).
    #[inline]
    pub fn independent_len(&self) -> usize {
        self.plane.roles().independent.pick(self.dims)
    }

    /// Length of the major axis.
    #[inline]
    pub fn major_len(&self) -> usize {
        self.plane.roles().major.pick(self.dims)
    }

    /// Length of the minor axis.
    #[inline]
    pub fn minor_len(&self) -> usize {
        self.plane.roles().minor.pick(self.dims)
    }

    /// World-space centroid.
    #[inline]
    pub fn centroid(&self) -> Point3 {
        centroid_from_fraction(self.dims, self.centroid_fraction)
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::new(Plane::Xz, [2, 2, 2])
    }
}
