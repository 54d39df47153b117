//! Plane selection and axis roles.
//!
//! A scalar field designates one raw axis as *independent*: data is supplied one
//! plane per index along that axis, and each plane may have its own length and
//! its own shift along the two remaining (*major* and *minor*) axes.

use crate::error::CoreError;
use crate::types::Point3;

/// A raw grid axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis.
    X,
    /// The y axis.
    Y,
    /// The z axis.
    Z,
}

impl Axis {
    /// Position of this axis in `[x, y, z]` arrays.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Pick this axis' component out of a coordinate triple.
    #[inline]
    pub fn pick<T: Copy>(self, coords: [T; 3]) -> T {
        coords[self.index()]
    }
}

/// Which plane carries the variable-length data.
///
/// | Plane | independent | major | minor |
/// |-------|-------------|-------|-------|
/// | `Xz`  | y           | x     | z     |
/// | `Xy`  | z           | x     | y     |
/// | `Yz`  | x           | y     | z     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Plane {
    /// The y axis is independent; planes are x-by-z.
    #[default]
    Xz,
    /// The z axis is independent; planes are x-by-y.
    Xy,
    /// The x axis is independent; planes are y-by-z.
    Yz,
}

/// The independent, major and minor axes for a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRoles {
    /// The axis along which planes are stacked.
    pub independent: Axis,
    /// The first dependent axis (outer index within a plane).
    pub major: Axis,
    /// The second dependent axis (inner index within a plane).
    pub minor: Axis,
}

impl Plane {
    /// Raw selector code (0 = XZ, 1 = XY, 2 = YZ).
    #[inline]
    pub const fn as_raw(self) -> u8 {
        match self {
            Plane::Xz => 0,
            Plane::Xy => 1,
            Plane::Yz => 2,
        }
    }

    /// Decode a raw selector, silently falling back to [`Plane::Xz`] for
    /// unknown codes.
    ///
    /// Use [`Plane::try_from_raw`] when unknown codes should be rejected.
    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Plane::Xy,
            2 => Plane::Yz,
            _ => Plane::Xz,
        }
    }

    /// Decode a raw selector, rejecting unknown codes.
    pub const fn try_from_raw(raw: u8) -> Result<Self, CoreError> {
        match raw {
            0 => Ok(Plane::Xz),
            1 => Ok(Plane::Xy),
            2 => Ok(Plane::Yz),
            _ => Err(CoreError::InvalidPlane { raw }),
        }
    }

    /// Axis roles for this plane.
    #[inline]
    pub const fn roles(self) -> AxisRoles {
        match self {
            Plane::Xz => AxisRoles {
                independent: Axis::Y,
                major: Axis::X,
                minor: Axis::Z,
            },
            Plane::Xy => AxisRoles {
                independent: Axis::Z,
                major: Axis::X,
                minor: Axis::Y,
            },
            Plane::Yz => AxisRoles {
                independent: Axis::X,
                major: Axis::Y,
                minor: Axis::Z,
            },
        }
    }
}

/// Centroid at the lower-left corner: geometry lands in the +x, +y, -z octant.
pub const LOWER_LEFT: Point3 = Point3::new(0.0, 0.0, 0.0);

/// Centroid in the middle of the grid on every axis.
pub const CENTER: Point3 = Point3::new(0.5, 0.5, 0.5);

/// Centroid centered in x and z but resting on the lowest y.
pub const CENTER_SANS_ALT: Point3 = Point3::new(0.5, 0.0, 0.5);

/// World-space pivot from per-axis maximum dimensions and centroid fractions.
#[inline]
pub fn centroid_from_fraction(dims: [usize; 3], fraction: Point3) -> Point3 {
    Point3::new(
        dims[0] as f32 * fraction.x,
        dims[1] as f32 * fraction.y,
        dims[2] as f32 * fraction.z,
    )
}
