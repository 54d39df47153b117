//! Array-of-arrays scalar field.
//!
//! Storage is indexed `[independent][major][minor]`. Planes and rows may have
//! any length; whatever is not stored samples as the configured least value.

use iso_core::{Plane, Point3, ScalarField};

use super::layout::FieldLayout;
use crate::config::FieldConfig;
use crate::error::{IsoIoError, Result};

/// One populated plane: rows along the major axis, each a run along the minor axis.
pub type PlaneData<T> = Vec<Vec<T>>;

/// Dense, bounds-checked scalar field with per-plane offsets.
///
/// `T` is the stored element type; every sample is widened to `f64`.
#[derive(Debug, Clone)]
pub struct DenseScalarField<T = f64> {
    layout: FieldLayout,
    planes: Vec<Option<PlaneData<T>>>,
}

impl<T: Copy + Into<f64>> DenseScalarField<T> {
    /// Create an empty field. Every plane starts unpopulated.
    pub fn new(config: FieldConfig) -> Self {
        Self::from_layout(FieldLayout::new(config))
    }

    /// Create an empty field with explicit per-plane offsets.
    pub fn with_offsets(config: FieldConfig, major: Vec<i32>, minor: Vec<i32>) -> Result<Self> {
        Ok(Self::from_layout(FieldLayout::with_offsets(config, major, minor)?))
    }

    fn from_layout(layout: FieldLayout) -> Self {
        let planes = (0..layout.independent_len()).map(|_| None).collect();
        Self { layout, planes }
    }

    /// Layout metadata (plane roles, offsets, centroid).
    #[inline]
    pub fn layout(&self) -> &FieldLayout {
        &self.layout
    }

    /// Mutable layout, for adjusting offsets after construction.
    #[inline]
    pub fn layout_mut(&mut self) -> &mut FieldLayout {
        &mut self.layout
    }

    /// Default value for unstored addresses.
    #[inline]
    pub fn least_value(&self) -> f64 {
        self.layout.least_value()
    }

    /// Install plane `idx`, replacing any previous data.
    pub fn set_plane_data(&mut self, idx: usize, data: PlaneData<T>) -> Result<()> {
        let len = self.planes.len();
        let slot = self
            .planes
            .get_mut(idx)
            .ok_or(IsoIoError::PlaneIndexOutOfRange { index: idx, len })?;
        *slot = Some(data);
        Ok(())
    }

    /// Install plane `idx` and re-center it around `(major_center, minor_center)`.
    pub fn set_plane_data_centered(
        &mut self,
        idx: usize,
        data: PlaneData<T>,
        major_center: i32,
        minor_center: i32,
    ) -> Result<()> {
        self.set_plane_data(idx, data)?;
        self.layout.center_plane(idx, major_center, minor_center);
        Ok(())
    }

    /// The stored data of plane `idx`, if populated.
    #[inline]
    pub fn plane_data(&self, idx: usize) -> Option<&PlaneData<T>> {
        self.planes.get(idx).and_then(Option::as_ref)
    }

    /// Whether plane `idx` has been populated.
    #[inline]
    pub fn is_plane_populated(&self, idx: usize) -> bool {
        self.plane_data(idx).is_some()
    }

    /// Number of populated planes.
    pub fn populated_planes(&self) -> usize {
        self.planes.iter().filter(|p| p.is_some()).count()
    }

    #[inline]
    fn lookup(&self, x: i32, y: i32, z: i32) -> Option<T> {
        let (idx, major, minor) = self.layout.resolve(x, y, z)?;
        let plane = self.planes.get(idx)?.as_ref()?;
        let row = plane.get(usize::try_from(major).ok()?)?;
        row.get(usize::try_from(minor).ok()?).copied()
    }
}

impl<T: Copy + Into<f64>> ScalarField for DenseScalarField<T> {
    #[inline]
    fn sample(&self, x: i32, y: i32, z: i32) -> f64 {
        match self.lookup(x, y, z) {
            Some(v) => v.into(),
            None => self.layout.least_value(),
        }
    }

    #[inline]
    fn plane(&self) -> Plane {
        self.layout.plane()
    }

    #[inline]
    fn max_dims(&self) -> [usize; 3] {
        self.layout.dims()
    }

    #[inline]
    fn scale(&self) -> [f32; 3] {
        self.layout.scale()
    }

    #[inline]
    fn centroid(&self) -> Point3 {
        self.layout.centroid()
    }
}
