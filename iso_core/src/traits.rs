//! The scalar field contract.
//!
//! Storage lives downstream (`iso_io` provides dense and sparse fields); the
//! classifier and the generator only ever talk to a field through this trait.

use crate::compare::{Comparator, Threshold, ThresholdSpec};
use crate::cube::CORNER_OFFSETS;
use crate::plane::Plane;
use crate::types::{CellCoord, Point3};

/// A 3D scalar sampler with axis scaling and a designated plane layout.
///
/// Implementors must never fail in [`ScalarField::sample`]: any address
/// outside the populated data resolves to the field's default value.
pub trait ScalarField {
    /// Sample the field at raw grid coordinates `(x, y, z)`.
    fn sample(&self, x: i32, y: i32, z: i32) -> f64;

    /// Which plane carries the variable-length data.
    fn plane(&self) -> Plane;

    /// Upper bound of each raw axis, as `[x, y, z]`.
    fn max_dims(&self) -> [usize; 3];

    /// Grid-unit to world-unit factors, as `[x, y, z]`.
    fn scale(&self) -> [f32; 3];

    /// World-space pivot subtracted from every emitted vertex.
    fn centroid(&self) -> Point3;

    /// Single comparison of the sample at `(x, y, z)`.
    #[inline]
    fn is_in_range(&self, x: i32, y: i32, z: i32, op: Comparator, threshold: f64) -> bool {
        op.test(self.sample(x, y, z), threshold)
    }

    /// Both comparisons must pass. The field is sampled once.
    #[inline]
    fn is_in_band(&self, x: i32, y: i32, z: i32, low: Threshold, high: Threshold) -> bool {
        let value = self.sample(x, y, z);
        low.test(value) && high.test(value)
    }

    /// Whether `(x, y, z)` is inside the surface under `spec`.
    #[inline]
    fn is_inside(&self, x: i32, y: i32, z: i32, spec: &ThresholdSpec) -> bool {
        if spec.is_single() {
            self.is_in_range(x, y, z, spec.high.op, spec.high.value)
        } else {
            self.is_in_band(x, y, z, spec.low, spec.high)
        }
    }

    /// The eight corner samples of `cell`, in canonical corner order.
    fn corner_values(&self, cell: CellCoord) -> [f64; 8] {
        let mut values = [0.0; 8];
        for (value, &offset) in values.iter_mut().zip(CORNER_OFFSETS.iter()) {
            let (x, y, z) = cell.corner(offset);
            *value = self.sample(x, y, z);
        }
        values
    }
}

impl<F: ScalarField + ?Sized> ScalarField for &F {
    #[inline]
    fn sample(&self, x: i32, y: i32, z: i32) -> f64 {
        (**self).sample(x, y, z)
    }

    #[inline]
    fn plane(&self) -> Plane {
        (**self).plane()
    }

    #[inline]
    fn max_dims(&self) -> [usize; 3] {
        (**self).max_dims()
    }

    #[inline]
    fn scale(&self) -> [f32; 3] {
        (**self).scale()
    }

    #[inline]
    fn centroid(&self) -> Point3 {
        (**self).centroid()
    }
}
