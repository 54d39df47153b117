//! Shared metadata of every stored field: plane roles, dimensions, scales,
//! centroid and the per-plane major/minor offsets.

use iso_core::{AxisRoles, Plane, Point3};

use crate::config::FieldConfig;
use crate::error::{IsoIoError, Result};

/// Plane layout and per-plane offsets.
///
/// One major and one minor offset is kept per index of the independent axis.
/// Sampling subtracts them from the raw major/minor coordinates, which shifts
/// each plane independently.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldLayout {
    config: FieldConfig,
    roles: AxisRoles,
    centroid: Point3,
    major_axis_offsets: Vec<i32>,
    minor_axis_offsets: Vec<i32>,
}

impl FieldLayout {
    /// Layout with all offsets zero.
    pub fn new(config: FieldConfig) -> Self {
        let len = config.independent_len();
        Self {
            roles: config.plane.roles(),
            centroid: config.centroid(),
            major_axis_offsets: vec![0; len],
            minor_axis_offsets: vec![0; len],
            config,
        }
    }

    /// Layout with explicit offset arrays, one entry per plane.
    pub fn with_offsets(config: FieldConfig, major: Vec<i32>, minor: Vec<i32>) -> Result<Self> {
        let expected = config.independent_len();
        if major.len() != expected {
            return Err(IsoIoError::OffsetLengthMismatch {
                axis: "major",
                expected,
                got: major.len(),
            });
        }
        if minor.len() != expected {
            return Err(IsoIoError::OffsetLengthMismatch {
                axis: "minor",
                expected,
                got: minor.len(),
            });
        }

        let mut layout = Self::new(config);
        layout.major_axis_offsets = major;
        layout.minor_axis_offsets = minor;
        Ok(layout)
    }

    /// The configuration this layout was built from.
    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Plane selector.
    #[inline]
    pub fn plane(&self) -> Plane {
        self.config.plane
    }

    /// Independent/major/minor axes.
    #[inline]
    pub fn roles(&self) -> AxisRoles {
        self.roles
    }

    /// Maximum dimension per raw axis.
    #[inline]
    pub fn dims(&self) -> [usize; 3] {
        self.config.dims
    }

    /// Per-axis scale.
    #[inline]
    pub fn scale(&self) -> [f32; 3] {
        self.config.scale
    }

    /// World-space centroid.
    #[inline]
    pub fn centroid(&self) -> Point3 {
        self.centroid
    }

    /// Default value for unstored addresses.
    #[inline]
    pub fn least_value(&self) -> f64 {
        self.config.least_value
    }

    /// Number of planes along the independent axis.
    #[inline]
    pub fn independent_len(&self) -> usize {
        self.major_axis_offsets.len()
    }

    /// Major-axis offset per plane.
    #[inline]
    pub fn major_axis_offsets(&self) -> &[i32] {
        &self.major_axis_offsets
    }

    /// Minor-axis offset per plane.
    #[inline]
    pub fn minor_axis_offsets(&self) -> &[i32] {
        &self.minor_axis_offsets
    }

    /// Set the major offset of plane `idx`. Out-of-range indices are ignored.
    pub fn set_major_axis_offset(&mut self, idx: usize, offset: i32) {
        if let Some(slot) = self.major_axis_offsets.get_mut(idx) {
            *slot = offset;
        }
    }

    /// Set the minor offset of plane `idx`. Out-of-range indices are ignored.
    pub fn set_minor_axis_offset(&mut self, idx: usize, offset: i32) {
        if let Some(slot) = self.minor_axis_offsets.get_mut(idx) {
            *slot = offset;
        }
    }

    /// Re-center plane `idx` so that `(major_center, minor_center)` lands in
    /// the middle of the major/minor axes: `offset = dim / 2 - center`.
    pub fn center_plane(&mut self, idx: usize, major_center: i32, minor_center: i32) {
        let major_dim = self.config.major_len() as i32;
        let minor_dim = self.config.minor_len() as i32;
        self.set_major_axis_offset(idx, major_dim / 2 - major_center);
        self.set_minor_axis_offset(idx, minor_dim / 2 - minor_center);
    }

    /// Map raw `(x, y, z)` to `(independent, major, minor)` storage indices.
    ///
    /// Returns `None` when the independent index is outside the axis; the
    /// major and minor indices are offset-adjusted but not bounds-checked.
    #[inline]
    pub fn resolve(&self, x: i32, y: i32, z: i32) -> Option<(usize, i64, i64)> {
        let coords = [x, y, z];
        let independent = self.roles.independent.pick(coords);
        if independent < 0 {
            return None;
        }
        let idx = independent as usize;
        let major_offset = *self.major_axis_offsets.get(idx)?;
        let minor_offset = *self.minor_axis_offsets.get(idx)?;

        let major = self.roles.major.pick(coords) as i64 - major_offset as i64;
        let minor = self.roles.minor.pick(coords) as i64 - minor_offset as i64;
        Some((idx, major, minor))
    }
}
