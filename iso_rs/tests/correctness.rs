//! Property-based correctness tests for surface generation.

use std::collections::HashMap;

use iso_core::{classify, CellCoord, ScalarField, ThresholdSpec};
use iso_io::tables::reference;
use iso_rs::{
    CaseTable, Comparator, DenseScalarField, FieldBuilder, Plane, SurfaceGenerator, VertexColorer,
};
use proptest::prelude::*;
use std::sync::OnceLock;

fn table() -> &'static CaseTable {
    static TABLE: OnceLock<CaseTable> = OnceLock::new();
    TABLE.get_or_init(reference::tetrahedral)
}

/// A field of dims `[nx, ny, nz]` whose values come from `bits`, cycled.
fn bit_field(plane: Plane, dims: [usize; 3], bits: &[bool], pad: bool) -> DenseScalarField {
    FieldBuilder::new(plane, dims)
        .fill_fn(|x, y, z| {
            let on_border = x == 0
                || y == 0
                || z == 0
                || x + 1 == dims[0]
                || y + 1 == dims[1]
                || z + 1 == dims[2];
            if pad && on_border {
                return 0.0;
            }
            let i = (x * dims[1] + y) * dims[2] + z;
            if bits[i % bits.len()] {
                1.0
            } else {
                0.0
            }
        })
        .build()
        .unwrap()
}

fn plane_strategy() -> impl Strategy<Value = Plane> {
    prop_oneof![Just(Plane::Xz), Just(Plane::Xy), Just(Plane::Yz)]
}

fn dims_strategy() -> impl Strategy<Value = [usize; 3]> {
    (2usize..7, 2usize..7, 2usize..7).prop_map(|(x, y, z)| [x, y, z])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Buffers stay parallel and the triangle count matches the vertices.
    #[test]
    fn buffers_are_parallel(
        plane in plane_strategy(),
        dims in dims_strategy(),
        bits in prop::collection::vec(any::<bool>(), 1..64),
    ) {
        let field = bit_field(plane, dims, &bits, false);
        let surface = SurfaceGenerator::new(&field, table())
            .with_single(Comparator::GreaterThan, 0.5)
            .with_colorer(VertexColorer::value_ramp(0.0, 1.0, [0.0; 4], [1.0; 4]))
            .generate();

        prop_assert_eq!(surface.vertices().len(), surface.polygon_count() * 3);
        prop_assert_eq!(surface.normals().len(), surface.vertices().len());
        prop_assert_eq!(surface.vertex_colors().map(<[_]>::len), Some(surface.vertices().len()));
        prop_assert_eq!(surface.vertex_materials().map(<[_]>::len), Some(surface.vertices().len()));
        prop_assert_eq!(surface.configs().len(), (dims[0] - 1) * (dims[1] - 1) * (dims[2] - 1));
    }

    /// Stored configurations are exactly what the classifier reports, and
    /// the vertex count is the sum of their table entries.
    #[test]
    fn stored_configs_match_classifier(
        dims in dims_strategy(),
        bits in prop::collection::vec(any::<bool>(), 1..64),
    ) {
        let field = bit_field(Plane::Xz, dims, &bits, false);
        let spec = ThresholdSpec::single(Comparator::GreaterThan, 0.5);
        let surface = SurfaceGenerator::new(&field, table()).with_threshold(spec).generate();

        let mut expected_vertices = 0;
        for x in 0..dims[0] - 1 {
            for y in 0..dims[1] - 1 {
                for z in 0..dims[2] - 1 {
                    let cell = CellCoord::new(x as u32, y as u32, z as u32);
                    let config = classify(&field, cell, &spec);
                    prop_assert_eq!(surface.configs().get(x, y, z), Some(config));
                    expected_vertices += table().get(config.raw()).map_or(0, |e| e.vertices.len());
                }
            }
        }
        prop_assert_eq!(surface.vertices().len(), expected_vertices);
    }

    /// A blob that never touches the grid border is closed.
    #[test]
    fn padded_blobs_are_watertight(
        dims in (3usize..8, 3usize..8, 3usize..8).prop_map(|(x, y, z)| [x, y, z]),
        bits in prop::collection::vec(any::<bool>(), 1..64),
    ) {
        let field = bit_field(Plane::Xz, dims, &bits, true);
        let surface = SurfaceGenerator::new(&field, table())
            .with_single(Comparator::GreaterThan, 0.5)
            .generate();

        let key = |v: iso_rs::Point3| {
            ((v.x * 2.0).round() as i32, (v.y * 2.0).round() as i32, (v.z * 2.0).round() as i32)
        };
        let mut counts = HashMap::new();
        for tri in surface.triangles() {
            for (a, b) in [(0, 1), (1, 2), (2, 0)] {
                let (ka, kb) = (key(tri[a]), key(tri[b]));
                let edge = if ka < kb { (ka, kb) } else { (kb, ka) };
                *counts.entry(edge).or_insert(0usize) += 1;
            }
        }
        for (edge, count) in counts {
            prop_assert_eq!(count, 2, "edge {:?}", edge);
        }
    }

    /// Every vertex lies inside the cell that emitted it.
    #[test]
    fn vertices_stay_inside_the_grid(
        dims in dims_strategy(),
        bits in prop::collection::vec(any::<bool>(), 1..64),
    ) {
        let field = bit_field(Plane::Yz, dims, &bits, false);
        let surface = SurfaceGenerator::new(&field, table())
            .with_single(Comparator::GreaterThan, 0.5)
            .generate();

        let max = [dims[0] as f32 - 1.0, dims[1] as f32 - 1.0, dims[2] as f32 - 1.0];
        for v in surface.vertices() {
            prop_assert!(v.x >= 0.0 && v.x <= max[0]);
            prop_assert!(v.y >= 0.0 && v.y <= max[1]);
            prop_assert!(-v.z >= 0.0 && -v.z <= max[2]);
        }
    }

    /// Complementing the inclusion test flips every mask and reuses the same
    /// cut edges.
    #[test]
    fn complement_has_same_cut_points(
        dims in dims_strategy(),
        bits in prop::collection::vec(any::<bool>(), 1..64),
    ) {
        let field = bit_field(Plane::Xz, dims, &bits, false);
        let inside = SurfaceGenerator::new(&field, table())
            .with_single(Comparator::GreaterThan, 0.5)
            .generate();
        let outside = SurfaceGenerator::new(&field, table())
            .with_single(Comparator::LessThanEq, 0.5)
            .generate();

        prop_assert_eq!(inside.polygon_count(), outside.polygon_count());
        for (a, b) in inside.configs().as_slice().iter().zip(outside.configs().as_slice()) {
            prop_assert_eq!(a & 0xFF, !b & 0xFF);
            prop_assert_eq!(a >> 8, b >> 8);
        }
    }

    /// Any field is sampled the same way through a reference.
    #[test]
    fn generation_through_reference(
        dims in dims_strategy(),
        bits in prop::collection::vec(any::<bool>(), 1..64),
    ) {
        let field = bit_field(Plane::Xy, dims, &bits, false);
        let by_ref: &dyn ScalarField = &field;

        let a = SurfaceGenerator::new(&field, table())
            .with_single(Comparator::GreaterThan, 0.5)
            .generate();
        let b = SurfaceGenerator::new(by_ref, table())
            .with_single(Comparator::GreaterThan, 0.5)
            .generate();
        prop_assert_eq!(a, b);
    }
}
