//! The triangulation driver.
//!
//! Generation walks every cell of the field in `x`, `y`, `z` order (x
//! outermost), classifies it, and appends the case-table geometry for its
//! configuration. The grid is processed one x-slab at a time; each slab owns
//! its output buffers, so slabs can be built independently and concatenated
//! in x order without changing the result.
//!
//! # Example
//!
//! ```ignore
//! use iso_rs::prelude::*;
//!
//! let table = iso_io::tables::reference::tetrahedral();
//! let surface = SurfaceGenerator::new(&field, &table)
//!     .with_single(Comparator::GreaterThan, 0.0)
//!     .with_colorer(VertexColorer::value_ramp(0.0, 1.0, [0.0, 0.0, 1.0, 1.0], [1.0, 0.0, 0.0, 1.0]))
//!     .generate();
//!
//! println!("{} triangles", surface.polygon_count());
//! ```

use iso_core::{classify, CellCoord, Comparator, Point3, ScalarField, ThresholdSpec};
use iso_io::{CaseEntry, CaseTable};

use crate::colorer::{ColorSample, ColorerType, Material, Rgba, VertexColorer};
use crate::error::{IsoError, Result};
use crate::surface::{CellConfigs, GeneratedSurface};

/// Extracts a triangulated isosurface from a scalar field.
pub struct SurfaceGenerator<'a, F: ScalarField + ?Sized> {
    field: &'a F,
    table: &'a CaseTable,
    threshold: ThresholdSpec,
    colorer: Option<VertexColorer>,
}

/// Maps cube-local table offsets into world space for one field.
#[derive(Debug, Clone, Copy)]
struct Placement {
    centroid: Point3,
    scale: [f32; 3],
}

impl Placement {
    fn of<F: ScalarField + ?Sized>(field: &F) -> Self {
        Self {
            centroid: field.centroid(),
            scale: field.scale(),
        }
    }

    /// The z contribution is mirrored; tables store local z with the same sign.
    #[inline]
    fn world(&self, cell: CellCoord, offset: Point3) -> Point3 {
        Point3::new(
            offset.x + cell.x as f32 - self.centroid.x,
            offset.y + cell.y as f32 - self.centroid.y,
            offset.z - cell.z as f32 + self.centroid.z,
        )
        .scaled(self.scale)
    }
}

/// Color and material buffers for a run of cells.
#[derive(Debug, Default)]
struct ColorBuffers {
    colors: Option<Vec<Rgba>>,
    materials: Option<Vec<Material>>,
}

impl ColorBuffers {
    fn for_colorer(colorer: &VertexColorer, capacity: usize) -> Self {
        let kind = colorer.colorer_type();
        Self {
            colors: kind
                .produces_unlit()
                .then(|| Vec::with_capacity(capacity)),
            materials: kind
                .produces_lit()
                .then(|| Vec::with_capacity(capacity)),
        }
    }

    fn append(&mut self, mut other: ColorBuffers) {
        if let (Some(dst), Some(src)) = (self.colors.as_mut(), other.colors.as_mut()) {
            dst.append(src);
        }
        if let (Some(dst), Some(src)) = (self.materials.as_mut(), other.materials.as_mut()) {
            dst.append(src);
        }
    }
}

/// Everything one x-slab contributes to the surface.
#[derive(Debug, Default)]
struct Slab {
    configs: Vec<u32>,
    vertices: Vec<Point3>,
    normals: Vec<Point3>,
    triangle_count: usize,
    colors: Option<ColorBuffers>,
}

impl<'a, F: ScalarField + ?Sized> SurfaceGenerator<'a, F> {
    /// Bind a field and a case table. The threshold defaults to `EQUAL 1.0`
    /// and no colorer is attached.
    pub fn new(field: &'a F, table: &'a CaseTable) -> Self {
        Self {
            field,
            table,
            threshold: ThresholdSpec::default(),
            colorer: None,
        }
    }

    /// Use `spec` as the inclusion test.
    pub fn with_threshold(mut self, spec: ThresholdSpec) -> Self {
        self.threshold = spec;
        self
    }

    /// A single comparison for every corner.
    pub fn with_single(self, op: Comparator, value: f64) -> Self {
        self.with_threshold(ThresholdSpec::single(op, value))
    }

    /// A single comparison given by its raw code (0 = equal, 1 = less than,
    /// 2 = less or equal, 3 = greater than, 4 = greater or equal).
    pub fn with_coded(self, op: u8, value: f64) -> Result<Self> {
        let op = Comparator::try_from_raw(op)?;
        Ok(self.with_single(op, value))
    }

    /// Two comparisons that must both pass.
    pub fn with_band(self, low_op: Comparator, low: f64, high_op: Comparator, high: f64) -> Self {
        self.with_threshold(ThresholdSpec::band(low_op, low, high_op, high))
    }

    /// Attach a colorer; colors are then produced alongside geometry.
    pub fn with_colorer(mut self, colorer: VertexColorer) -> Self {
        self.colorer = Some(colorer);
        self
    }

    /// Replace the inclusion test in place.
    pub fn set_threshold(&mut self, spec: ThresholdSpec) {
        self.threshold = spec;
    }

    /// Attach or detach a colorer in place.
    pub fn set_colorer(&mut self, colorer: Option<VertexColorer>) {
        self.colorer = colorer;
    }

    /// The field being sampled.
    #[inline]
    pub fn data_matrix(&self) -> &'a F {
        self.field
    }

    /// The case table in use.
    #[inline]
    pub fn table(&self) -> &'a CaseTable {
        self.table
    }

    /// The active inclusion test.
    #[inline]
    pub fn threshold(&self) -> &ThresholdSpec {
        &self.threshold
    }

    /// The attached colorer, if any.
    #[inline]
    pub fn colorer(&self) -> Option<&VertexColorer> {
        self.colorer.as_ref()
    }

    /// Number of cells per axis.
    pub fn cell_dims(&self) -> [usize; 3] {
        let [x, y, z] = self.field.max_dims();
        [x.saturating_sub(1), y.saturating_sub(1), z.saturating_sub(1)]
    }

    /// Generate the surface on the calling thread.
    pub fn generate(&self) -> GeneratedSurface {
        let cells = self.cell_dims();
        let placement = Placement::of(self.field);
        let slabs = if Self::has_cells(cells) {
            (0..cells[0])
                .map(|x| self.slab(x, cells, placement))
                .collect()
        } else {
            Vec::new()
        };
        self.assemble(cells, slabs)
    }

    /// Generate the surface with one rayon task per x-slab.
    ///
    /// The output is identical to [`SurfaceGenerator::generate`].
    #[cfg(feature = "parallel")]
    pub fn generate_parallel(&self) -> GeneratedSurface
    where
        F: Sync,
    {
        use rayon::prelude::*;

        let cells = self.cell_dims();
        let placement = Placement::of(self.field);
        let slabs = if Self::has_cells(cells) {
            (0..cells[0])
                .into_par_iter()
                .map(|x| self.slab(x, cells, placement))
                .collect()
        } else {
            Vec::new()
        };
        self.assemble(cells, slabs)
    }

    /// Recompute the color and material buffers of `surface` with `colorer`.
    ///
    /// Reuses the stored configuration grid instead of classifying again.
    /// `surface` must have been generated from this generator's field and
    /// table; otherwise [`IsoError::SurfaceMismatch`] is returned and the
    /// surface is left untouched.
    pub fn color_surface(&self, surface: &mut GeneratedSurface, colorer: &VertexColorer) -> Result<()> {
        let cells = self.cell_dims();
        let stored = surface.configs().dims();
        let expected = if Self::has_cells(cells) { cells } else { [0; 3] };
        let found = if Self::has_cells(stored) { stored } else { [0; 3] };
        if expected != found {
            return Err(IsoError::SurfaceMismatch {
                message: format!("surface has {:?} cells, field has {:?}", stored, cells),
            });
        }

        let placement = Placement::of(self.field);
        let mut buffers = ColorBuffers::for_colorer(colorer, surface.vertices.len());
        let emitted = if Self::has_cells(cells) {
            self.color_cells(surface.configs().as_slice(), 0, cells, placement, colorer, &mut buffers)
        } else {
            0
        };

        if emitted != surface.vertices.len() {
            return Err(IsoError::SurfaceMismatch {
                message: format!(
                    "stored configurations emit {} vertices, surface holds {}",
                    emitted,
                    surface.vertices.len()
                ),
            });
        }

        surface.colors = buffers.colors;
        surface.materials = buffers.materials;
        surface.colorer_type = colorer.colorer_type();
        surface.translucent = colorer.is_translucency_enabled();
        Ok(())
    }

    #[inline]
    fn has_cells(cells: [usize; 3]) -> bool {
        cells.iter().all(|&n| n > 0)
    }

    #[inline]
    fn entry(&self, config: u32) -> Option<&'a CaseEntry> {
        self.table.get(config).filter(|entry| !entry.is_empty())
    }

    /// Classify and triangulate every cell with the given x index, then color.
    fn slab(&self, x: usize, cells: [usize; 3], placement: Placement) -> Slab {
        let [_, dy, dz] = cells;
        let mut slab = Slab {
            configs: Vec::with_capacity(dy * dz),
            ..Default::default()
        };

        for y in 0..dy {
            for z in 0..dz {
                let cell = CellCoord::new(x as u32, y as u32, z as u32);
                let config = classify(self.field, cell, &self.threshold);
                slab.configs.push(config.raw());

                let Some(entry) = self.entry(config.raw()) else {
                    continue;
                };
                for (i, tv) in entry.vertices.iter().enumerate() {
                    slab.vertices.push(placement.world(cell, tv.offset));
                    slab.normals
                        .push(entry.normals.get(i / 3).copied().unwrap_or_default());
                }
                slab.triangle_count += entry.triangle_count();
            }
        }

        if let Some(colorer) = &self.colorer {
            let mut buffers = ColorBuffers::for_colorer(colorer, slab.vertices.len());
            self.color_cells(&slab.configs, x, cells, placement, colorer, &mut buffers);
            slab.colors = Some(buffers);
        }

        slab
    }

    /// Color a contiguous run of cells starting at the first cell of slab
    /// `x0`. Returns the number of vertices colored.
    fn color_cells(
        &self,
        configs: &[u32],
        x0: usize,
        cells: [usize; 3],
        placement: Placement,
        colorer: &VertexColorer,
        buffers: &mut ColorBuffers,
    ) -> usize {
        let [_, dy, dz] = cells;
        let slab_len = dy * dz;
        let mut emitted = 0;

        for (k, &config) in configs.iter().enumerate() {
            let Some(entry) = self.entry(config) else {
                continue;
            };
            let cell = CellCoord::new(
                (x0 + k / slab_len) as u32,
                ((k / dz) % dy) as u32,
                (k % dz) as u32,
            );
            let values = self.field.corner_values(cell);

            for tv in &entry.vertices {
                let sample = ColorSample {
                    vertex: placement.world(cell, tv.offset),
                    cell,
                    value: values[usize::from(tv.corner) & 7],
                };
                if let Some(colors) = buffers.colors.as_mut() {
                    colors.extend(colorer.calc_unlit_color(&sample));
                }
                if let Some(materials) = buffers.materials.as_mut() {
                    materials.extend(colorer.calc_lit_color(&sample));
                }
                emitted += 1;
            }
        }

        emitted
    }

    /// Concatenate slabs in x order.
    fn assemble(&self, cells: [usize; 3], slabs: Vec<Slab>) -> GeneratedSurface {
        if slabs.is_empty() {
            log::trace!("Grid {:?} has no cells; surface is empty", cells);
        }

        let vertex_count: usize = slabs.iter().map(|s| s.vertices.len()).sum();
        let mut configs = Vec::with_capacity(cells.iter().product());
        let mut vertices = Vec::with_capacity(vertex_count);
        let mut normals = Vec::with_capacity(vertex_count);
        let mut triangle_count = 0;
        let mut buffers = self
            .colorer
            .as_ref()
            .map(|c| ColorBuffers::for_colorer(c, vertex_count));

        for mut slab in slabs {
            configs.append(&mut slab.configs);
            vertices.append(&mut slab.vertices);
            normals.append(&mut slab.normals);
            triangle_count += slab.triangle_count;
            if let (Some(dst), Some(src)) = (buffers.as_mut(), slab.colors) {
                dst.append(src);
            }
        }

        let dims = if configs.is_empty() { [0; 3] } else { cells };
        log::debug!(
            "Generated {} triangles from {} cells",
            triangle_count,
            configs.len()
        );

        let (colors, materials) = match buffers {
            Some(b) => (b.colors, b.materials),
            None => (None, None),
        };

        GeneratedSurface {
            vertices,
            normals,
            colors,
            materials,
            colorer_type: self
                .colorer
                .as_ref()
                .map_or(ColorerType::None, VertexColorer::colorer_type),
            translucent: self
                .colorer
                .as_ref()
                .map_or(false, VertexColorer::is_translucency_enabled),
            triangle_count,
            configs: CellConfigs::new(dims, configs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iso_core::Plane;
    use iso_io::tables::reference;
    use iso_io::{DenseScalarField, FieldConfig};

    fn hot_point(dims: [usize; 3], at: (usize, usize, usize)) -> DenseScalarField {
        let config = FieldConfig::new(Plane::Xz, dims);
        let mut field = DenseScalarField::new(config);
        for y in 0..dims[1] {
            let mut plane = vec![vec![0.0; dims[2]]; dims[0]];
            if y == at.1 {
                plane[at.0][at.2] = 1.0;
            }
            field.set_plane_data(y, plane).unwrap();
        }
        field
    }

    #[test]
    fn test_defaults() {
        let field = hot_point([3, 3, 3], (1, 1, 1));
        let table = reference::tetrahedral();
        let generator = SurfaceGenerator::new(&field, &table);

        assert_eq!(*generator.threshold(), ThresholdSpec::default());
        assert!(generator.colorer().is_none());
        assert_eq!(generator.cell_dims(), [2, 2, 2]);
        assert_eq!(generator.data_matrix().least_value(), 0.0);
    }

    #[test]
    fn test_coded_comparator() {
        let field = hot_point([3, 3, 3], (1, 1, 1));
        let table = reference::tetrahedral();

        let generator = SurfaceGenerator::new(&field, &table).with_coded(3, 0.5).unwrap();
        assert_eq!(
            *generator.threshold(),
            ThresholdSpec::single(Comparator::GreaterThan, 0.5)
        );

        let err = SurfaceGenerator::new(&field, &table)
            .with_coded(5, 0.5)
            .err()
            .unwrap();
        assert!(matches!(
            err,
            IsoError::Core(iso_core::CoreError::InvalidComparator { raw: 5 })
        ));
    }

    #[test]
    fn test_hot_point_produces_closed_blob() {
        let field = hot_point([3, 3, 3], (1, 1, 1));
        let table = reference::tetrahedral();
        let surface = SurfaceGenerator::new(&field, &table)
            .with_single(Comparator::GreaterThan, 0.0)
            .generate();

        assert!(surface.polygon_count() > 0);
        assert_eq!(surface.vertices().len(), surface.polygon_count() * 3);
        assert_eq!(surface.normals().len(), surface.vertices().len());
        assert_eq!(surface.configs().len(), 8);
        assert_eq!(surface.colorer_type(), ColorerType::None);
        assert!(surface.vertex_colors().is_none());
    }

    #[test]
    fn test_world_vertex_mirrors_z() {
        let placement = Placement {
            centroid: Point3::new(1.0, 2.0, 3.0),
            scale: [2.0, 1.0, 0.5],
        };
        let v = placement.world(CellCoord::new(4, 5, 6), Point3::new(0.5, 0.5, -0.5));
        assert_eq!(v, Point3::new(7.0, 3.5, -1.75));
    }

    #[test]
    fn test_colorer_buffers_match_vertices() {
        let field = hot_point([3, 3, 3], (1, 1, 1));
        let table = reference::tetrahedral();
        let surface = SurfaceGenerator::new(&field, &table)
            .with_single(Comparator::GreaterThan, 0.0)
            .with_colorer(VertexColorer::unlit(|s| [s.value as f32, 0.0, 0.0, 1.0]))
            .generate();

        let colors = surface.vertex_colors().unwrap();
        assert_eq!(colors.len(), surface.vertices().len());
        assert!(surface.vertex_materials().is_none());
        assert_eq!(surface.colorer_type(), ColorerType::Unlit);

        // Every table corner is an inside corner, so every sample is the hot value
        assert!(colors.iter().all(|c| c[0] == 1.0));
    }

    #[test]
    fn test_color_surface_rejects_foreign_surface() {
        let small = hot_point([3, 3, 3], (1, 1, 1));
        let large = hot_point([4, 4, 4], (1, 1, 1));
        let table = reference::tetrahedral();

        let mut surface = SurfaceGenerator::new(&small, &table)
            .with_single(Comparator::GreaterThan, 0.0)
            .generate();
        let other = SurfaceGenerator::new(&large, &table).with_single(Comparator::GreaterThan, 0.0);

        let result = other.color_surface(&mut surface, &VertexColorer::unlit(|_| [1.0; 4]));
        assert!(matches!(result, Err(IsoError::SurfaceMismatch { .. })));
        assert!(surface.vertex_colors().is_none());
    }

    #[test]
    fn test_degenerate_dims_are_empty() {
        let table = reference::tetrahedral();
        for dims in [[1, 4, 4], [4, 0, 4], [4, 4, 1]] {
            let field = DenseScalarField::<f64>::new(FieldConfig::new(Plane::Xz, dims));
            let surface = SurfaceGenerator::new(&field, &table).generate();
            assert!(surface.is_empty());
            assert!(surface.vertices().is_empty());
            assert!(surface.configs().is_empty());
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let field = hot_point([5, 5, 5], (2, 2, 2));
        let table = reference::tetrahedral();
        let generator = SurfaceGenerator::new(&field, &table)
            .with_single(Comparator::GreaterThan, 0.0)
            .with_colorer(VertexColorer::value_ramp(
                0.0,
                1.0,
                [0.0, 0.0, 1.0, 1.0],
                [1.0, 0.0, 0.0, 1.0],
            ));

        assert_eq!(generator.generate(), generator.generate_parallel());
    }
}
