//! Generated surface buffers.

use iso_core::{CubeConfig, Point3};

use crate::colorer::{ColorerType, Material, Rgba};

/// Per-cell configurations of one generation run, stored x-major.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellConfigs {
    dims: [usize; 3],
    configs: Vec<u32>,
}

impl CellConfigs {
    pub(crate) fn new(dims: [usize; 3], configs: Vec<u32>) -> Self {
        debug_assert_eq!(dims[0] * dims[1] * dims[2], configs.len());
        Self { dims, configs }
    }

    /// Number of cells per axis: one less than each field dimension.
    #[inline]
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Configuration of cell `(x, y, z)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<CubeConfig> {
        let [dx, dy, dz] = self.dims;
        if x >= dx || y >= dy || z >= dz {
            return None;
        }
        self.configs
            .get((x * dy + y) * dz + z)
            .copied()
            .map(CubeConfig)
    }

    /// Raw configurations in traversal order (x outer, z inner).
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.configs
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Whether the grid had no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

/// Output of one generation run.
///
/// Vertices are in traversal order, three per triangle. Normals run parallel
/// to vertices; colors and materials, when present, do too.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedSurface {
    pub(crate) vertices: Vec<Point3>,
    pub(crate) normals: Vec<Point3>,
    pub(crate) colors: Option<Vec<Rgba>>,
    pub(crate) materials: Option<Vec<Material>>,
    pub(crate) colorer_type: ColorerType,
    pub(crate) translucent: bool,
    pub(crate) triangle_count: usize,
    pub(crate) configs: CellConfigs,
}

impl GeneratedSurface {
    /// World-space vertices.
    #[inline]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// One normal per vertex, shared by the three vertices of a triangle.
    #[inline]
    pub fn normals(&self) -> &[Point3] {
        &self.normals
    }

    /// Unlit per-vertex colors, when the colorer produced them.
    #[inline]
    pub fn vertex_colors(&self) -> Option<&[Rgba]> {
        self.colors.as_deref()
    }

    /// Lit per-vertex materials, when the colorer produced them.
    #[inline]
    pub fn vertex_materials(&self) -> Option<&[Material]> {
        self.materials.as_deref()
    }

    /// Capabilities of the colorer used, `None` when uncolored.
    #[inline]
    pub fn colorer_type(&self) -> ColorerType {
        self.colorer_type
    }

    /// Whether color alpha components are meaningful.
    #[inline]
    pub fn is_translucency_enabled(&self) -> bool {
        self.translucent
    }

    /// Number of triangles.
    #[inline]
    pub fn polygon_count(&self) -> usize {
        self.triangle_count
    }

    /// Whether no triangle was emitted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangle_count == 0
    }

    /// The classified cell grid.
    #[inline]
    pub fn configs(&self) -> &CellConfigs {
        &self.configs
    }

    /// Vertices grouped by triangle.
    pub fn triangles(&self) -> impl Iterator<Item = [Point3; 3]> + '_ {
        self.vertices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Flat `[x, y, z, x, y, z, ...]` vertex buffer.
    pub fn vertex_buffer(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.as_array()).collect()
    }

    /// Flat `[x, y, z, ...]` normal buffer.
    pub fn normal_buffer(&self) -> Vec<f32> {
        self.normals.iter().flat_map(|n| n.as_array()).collect()
    }

    /// Drop any color and material buffers.
    pub fn clear_colors(&mut self) {
        self.colors = None;
        self.materials = None;
        self.colorer_type = ColorerType::None;
        self.translucent = false;
    }
}

/// Surface statistics after generation.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceStats {
    /// Total number of triangles.
    pub triangle_count: usize,
    /// Number of vertices (triangle_count * 3).
    pub vertex_count: usize,
    /// Number of cells with at least one triangle.
    pub active_cells: usize,
    /// Sum of triangle areas.
    pub surface_area: f32,
    /// Bounding box minimum.
    pub bbox_min: Point3,
    /// Bounding box maximum.
    pub bbox_max: Point3,
}

impl SurfaceStats {
    /// Compute statistics from a generated surface.
    pub fn from_surface(surface: &GeneratedSurface) -> Self {
        let mut surface_area = 0.0;
        let mut bbox_min = Point3::splat(f32::MAX);
        let mut bbox_max = Point3::splat(f32::MIN);

        for tri in surface.triangles() {
            for &v in &tri {
                bbox_min = bbox_min.min(v);
                bbox_max = bbox_max.max(v);
            }

            let e1 = tri[1] - tri[0];
            let e2 = tri[2] - tri[0];
            surface_area += e1.cross(e2).length() * 0.5;
        }

        let active_cells = surface
            .configs
            .as_slice()
            .iter()
            .filter(|&&c| !CubeConfig(c).is_empty_or_full())
            .count();

        Self {
            triangle_count: surface.triangle_count,
            vertex_count: surface.vertices.len(),
            active_cells,
            surface_area,
            bbox_min,
            bbox_max,
        }
    }
}
