//! FieldBuilder pattern for constructing DenseScalarField.
//!
//! Provides a fluent API for populating a field plane by plane.

use iso_core::{Plane, Point3};
use iso_io::{DenseScalarField, FieldConfig, PlaneData};

use crate::error::Result;

/// A plane waiting to be installed, with optional re-centering.
#[derive(Debug, Clone)]
struct PendingPlane<T> {
    index: usize,
    data: PlaneData<T>,
    center: Option<(i32, i32)>,
}

/// Builder for constructing `DenseScalarField` instances.
///
/// Plane data is collected as given and installed at [`FieldBuilder::build`],
/// so an out-of-range plane index is reported there.
///
/// # Example
///
/// ```ignore
/// use iso_rs::FieldBuilder;
/// use iso_core::{Plane, CENTER};
///
/// let field = FieldBuilder::new(Plane::Xz, [16, 16, 16])
///     .scale([0.5, 0.5, 0.5])
///     .centroid(CENTER)
///     .fill_fn(|x, y, z| (x + y + z) as f64)
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct FieldBuilder<T = f64> {
    config: FieldConfig,
    offsets: Option<(Vec<i32>, Vec<i32>)>,
    planes: Vec<PendingPlane<T>>,
}

impl<T: Copy + Into<f64>> FieldBuilder<T> {
    /// Start a field with the given plane layout and per-axis maximum dimensions.
    pub fn new(plane: Plane, dims: [usize; 3]) -> Self {
        Self::from_config(FieldConfig::new(plane, dims))
    }

    /// Start from a complete configuration.
    pub fn from_config(config: FieldConfig) -> Self {
        Self {
            config,
            offsets: None,
            planes: Vec::new(),
        }
    }

    /// Set the grid-unit to world-unit factors.
    pub fn scale(mut self, scale: [f32; 3]) -> Self {
        self.config.scale = scale;
        self
    }

    /// Set the centroid as a fraction of each axis.
    pub fn centroid(mut self, fraction: Point3) -> Self {
        self.config.centroid_fraction = fraction;
        self
    }

    /// Set the value sampled outside the stored data.
    pub fn least_value(mut self, value: f64) -> Self {
        self.config.least_value = value;
        self
    }

    /// Start from explicit major/minor offsets, one per plane.
    ///
    /// Lengths are checked at build time.
    pub fn offsets(mut self, major: Vec<i32>, minor: Vec<i32>) -> Self {
        self.offsets = Some((major, minor));
        self
    }

    /// Add plane `index`. A later call with the same index replaces it.
    pub fn plane(mut self, index: usize, data: PlaneData<T>) -> Self {
        self.planes.push(PendingPlane {
            index,
            data,
            center: None,
        });
        self
    }

    /// Add plane `index` re-centered so `(major_center, minor_center)` lands
    /// mid-plane.
    pub fn plane_centered(
        mut self,
        index: usize,
        data: PlaneData<T>,
        major_center: i32,
        minor_center: i32,
    ) -> Self {
        self.planes.push(PendingPlane {
            index,
            data,
            center: Some((major_center, minor_center)),
        });
        self
    }

    /// Populate every plane from a function of raw `(x, y, z)` coordinates.
    pub fn fill_fn<G>(mut self, f: G) -> Self
    where
        G: Fn(usize, usize, usize) -> T,
    {
        let roles = self.config.plane.roles();
        let (major_len, minor_len) = (self.config.major_len(), self.config.minor_len());

        for index in 0..self.config.independent_len() {
            let data = (0..major_len)
                .map(|major| {
                    (0..minor_len)
                        .map(|minor| {
                            let mut coords = [0usize; 3];
                            coords[roles.independent.index()] = index;
                            coords[roles.major.index()] = major;
                            coords[roles.minor.index()] = minor;
                            f(coords[0], coords[1], coords[2])
                        })
                        .collect()
                })
                .collect();
            self.planes.push(PendingPlane {
                index,
                data,
                center: None,
            });
        }
        self
    }

    /// Build the field.
    ///
    /// # Errors
    /// Returns an error if the offset arrays do not match the independent axis
    /// or a plane index is out of range.
    pub fn build(self) -> Result<DenseScalarField<T>> {
        let mut field = match self.offsets {
            Some((major, minor)) => DenseScalarField::with_offsets(self.config, major, minor)?,
            None => DenseScalarField::new(self.config),
        };

        let count = self.planes.len();
        for pending in self.planes {
            match pending.center {
                Some((major, minor)) => {
                    field.set_plane_data_centered(pending.index, pending.data, major, minor)?
                }
                None => field.set_plane_data(pending.index, pending.data)?,
            }
        }

        log::debug!(
            "Built {:?} field {:?} with {} plane(s)",
            self.config.plane,
            self.config.dims,
            count
        );

        Ok(field)
    }
}
