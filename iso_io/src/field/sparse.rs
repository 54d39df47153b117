//! Hash-backed scalar field.

use std::collections::HashMap;

use iso_core::{Plane, Point3, ScalarField};

use super::layout::FieldLayout;
use crate::config::FieldConfig;
use crate::error::Result;

/// Storage address: independent index, then major and minor positions.
type Key = (i64, i64, i64);

/// Scalar field storing only explicitly set points.
///
/// Points are stored at their unshifted `(x, y, z)` address. Sampling goes
/// through the layout exactly like [`super::DenseScalarField`]: the plane's
/// major/minor offsets are subtracted first, so moving a plane's offsets
/// moves every point stored in it.
#[derive(Debug, Clone)]
pub struct SparseScalarField {
    layout: FieldLayout,
    points: HashMap<Key, f64>,
}

impl SparseScalarField {
    /// Create an empty field with all offsets zero.
    pub fn new(config: FieldConfig) -> Self {
        Self {
            layout: FieldLayout::new(config),
            points: HashMap::new(),
        }
    }

    /// Create an empty field with explicit per-plane offsets.
    pub fn with_offsets(config: FieldConfig, major: Vec<i32>, minor: Vec<i32>) -> Result<Self> {
        Ok(Self {
            layout: FieldLayout::with_offsets(config, major, minor)?,
            points: HashMap::new(),
        })
    }

    /// Create a field from `(x, y, z, value)` points. Later duplicates win.
    pub fn from_points<I>(config: FieldConfig, points: I) -> Self
    where
        I: IntoIterator<Item = (i32, i32, i32, f64)>,
    {
        let mut field = Self::new(config);
        for (x, y, z, value) in points {
            field.set_point(x, y, z, value);
        }
        field
    }

    fn key(&self, x: i32, y: i32, z: i32) -> Key {
        let roles = self.layout.roles();
        let coords = [x, y, z];
        (
            roles.independent.pick(coords) as i64,
            roles.major.pick(coords) as i64,
            roles.minor.pick(coords) as i64,
        )
    }

    /// Store a value, returning the previous one.
    pub fn set_point(&mut self, x: i32, y: i32, z: i32, value: f64) -> Option<f64> {
        let key = self.key(x, y, z);
        self.points.insert(key, value)
    }

    /// Remove a stored value.
    pub fn remove_point(&mut self, x: i32, y: i32, z: i32) -> Option<f64> {
        let key = self.key(x, y, z);
        self.points.remove(&key)
    }

    /// Number of stored points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no point is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Layout metadata.
    #[inline]
    pub fn layout(&self) -> &FieldLayout {
        &self.layout
    }

    /// Mutable layout, for shifting planes after points are stored.
    #[inline]
    pub fn layout_mut(&mut self) -> &mut FieldLayout {
        &mut self.layout
    }

    #[inline]
    fn lookup(&self, x: i32, y: i32, z: i32) -> Option<f64> {
        let (idx, major, minor) = self.layout.resolve(x, y, z)?;
        self.points.get(&(idx as i64, major, minor)).copied()
    }
}

impl ScalarField for SparseScalarField {
    #[inline]
    fn sample(&self, x: i32, y: i32, z: i32) -> f64 {
        self.lookup(x, y, z)
            .unwrap_or_else(|| self.layout.least_value())
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
