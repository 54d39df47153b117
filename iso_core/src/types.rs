//! Core geometry types shared by the classifier, the case tables and the generator.
//!
//! Vertex arithmetic is done in single precision: table offsets, centroids and
//! scales are all `f32`, and only the sampled scalar values are `f64`.

use core::ops::{Add, Div, Neg, Sub};

/// A 3D point or vector.
///
/// Used for world-space vertices, per-triangle normals and cube-local table
/// offsets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Z coordinate.
    pub z: f32,
}

impl Point3 {
    /// Create a new Point3.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// All three components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Components as `[x, y, z]`, the layout of flat vertex buffers.
    #[inline]
    pub const fn as_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    fn zip_with(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::new(f(self.x, other.x), f(self.y, other.y), f(self.z, other.z))
    }

    /// Point a fraction `t` of the way towards `other`. Table vertices sit at
    /// `t = 0.5` on cube edges.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self.zip_with(other, |a, b| a + (b - a) * t)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product; right-handed.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f32 {
        libm::sqrtf(self.dot(self))
    }

    /// Unit vector in the same direction, or zero for a zero vector.
    #[inline]
    pub fn normalize(self) -> Self {
        match self.length() {
            len if len == 0.0 => Self::default(),
            len => self / len,
        }
    }

    /// Per-axis scaling by a field's `[sx, sy, sz]`.
    #[inline]
    pub fn scaled(self, scale: [f32; 3]) -> Self {
        self.zip_with(Self::new(scale[0], scale[1], scale[2]), |a, s| a * s)
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        self.zip_with(other, f32::min)
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        self.zip_with(other, f32::max)
    }
}

impl Add for Point3 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }
}

impl Sub for Point3 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }
}

impl Div<f32> for Point3 {
    type Output = Self;

    #[inline]
    fn div(self, divisor: f32) -> Self {
        Self::new(self.x / divisor, self.y / divisor, self.z / divisor)
    }
}

impl Neg for Point3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// Grid coordinates of a cell's lower/left/back corner.
///
/// Cell `(x, y, z)` spans the samples `(x, y, z)` through `(x+1, y+1, z+1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellCoord {
    /// X index.
    pub x: u32,
    /// Y index.
    pub y: u32,
    /// Z index.
    pub z: u32,
}

impl CellCoord {
    /// Create a new CellCoord.
    #[inline]
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Sample coordinates of one of this cell's corners, given its offset.
    #[inline]
    pub const fn corner(&self, offset: (u32, u32, u32)) -> (i32, i32, i32) {
        (
            (self.x + offset.0) as i32,
            (self.y + offset.1) as i32,
            (self.z + offset.2) as i32,
        )
    }
}
