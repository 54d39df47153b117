//! Property-based tests for the cube classifier.

use iso_core::prelude::*;
use proptest::prelude::*;

/// Field whose samples come from a closure over raw coordinates.
struct FnField<G: Fn(i32, i32, i32) -> f64> {
    dims: [usize; 3],
    f: G,
}

impl<G: Fn(i32, i32, i32) -> f64> ScalarField for FnField<G> {
    fn sample(&self, x: i32, y: i32, z: i32) -> f64 {
        (self.f)(x, y, z)
    }

    fn plane(&self) -> Plane {
        Plane::Xz
    }

    fn max_dims(&self) -> [usize; 3] {
        self.dims
    }

    fn scale(&self) -> [f32; 3] {
        [1.0; 3]
    }

    fn centroid(&self) -> Point3 {
        Point3::default()
    }
}

fn hash_noise(x: i32, y: i32, z: i32) -> f64 {
    let h = (x as u32)
        .wrapping_mul(73_856_093)
        ^ (y as u32).wrapping_mul(19_349_663)
        ^ (z as u32).wrapping_mul(83_492_791);
    (h % 1000) as f64 / 100.0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Grey edges only depend on coordinate parity.
    #[test]
    fn grey_edges_depend_only_on_parity(
        x in -10_000i64..10_000,
        y in -10_000i64..10_000,
        z in -10_000i64..10_000,
        dx in -500i64..500,
        dy in -500i64..500,
        dz in -500i64..500,
    ) {
        let a = grey_edges(x, y, z);
        let b = grey_edges(x + 2 * dx, y + 2 * dy, z + 2 * dz);
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.count_ones(), 3);
    }

    /// The occupied edges are exactly the edges whose endpoints disagree.
    #[test]
    fn occupied_edges_match_endpoint_states(mask in any::<u8>()) {
        let edges = occupied_edges(mask);
        for (i, &(a, b)) in EDGE_CORNERS.iter().enumerate() {
            let differs = ((mask >> a) & 1) != ((mask >> b) & 1);
            prop_assert_eq!(edges & (1 << i) != 0, differs);
        }
    }

    /// The classifier's bit fields agree with their standalone builders.
    #[test]
    fn classify_is_consistent(
        cx in 0u32..30,
        cy in 0u32..30,
        cz in 0u32..30,
        threshold in 0.0f64..10.0,
    ) {
        let field = FnField { dims: [32, 32, 32], f: hash_noise };
        let spec = ThresholdSpec::single(Comparator::GreaterThan, threshold);
        let cell = CellCoord::new(cx, cy, cz);

        let config = classify(&field, cell, &spec);
        let values = field.corner_values(cell);

        for (i, &value) in values.iter().enumerate() {
            prop_assert_eq!(config.is_corner_inside(i).unwrap(), value > threshold);
        }
        prop_assert_eq!(config.occupied_edges(), occupied_edges(config.vertex_mask()));
        prop_assert_eq!(config.grey_edges(), grey_edges(cx as i64, cy as i64, cz as i64));
    }

    /// Band and single tests classify identically when they describe the same set.
    #[test]
    fn band_equal_matches_single_equal(
        cx in 0u32..6,
        cy in 0u32..6,
        cz in 0u32..6,
        hot in 0i32..8,
    ) {
        let field = FnField {
            dims: [8, 8, 8],
            f: move |x, y, z| if x == hot && y == hot && z == hot { 5.0 } else { 0.0 },
        };
        let band = ThresholdSpec::band(Comparator::GreaterThanEq, 5.0, Comparator::LessThanEq, 5.0);
        let single = ThresholdSpec::single(Comparator::Equal, 5.0);
        let cell = CellCoord::new(cx, cy, cz);

        prop_assert_eq!(classify(&field, cell, &band), classify(&field, cell, &single));
    }
}

#[test]
fn test_corner_offsets_match_corner_values() {
    let field = FnField {
        dims: [4, 4, 4],
        f: |x, y, z| (x * 100 + y * 10 + z) as f64,
    };
    let values = field.corner_values(CellCoord::new(1, 2, 3));
    for (i, &(dx, dy, dz)) in CORNER_OFFSETS.iter().enumerate() {
        let expected = ((1 + dx) * 100 + (2 + dy) * 10 + (3 + dz)) as f64;
        assert_eq!(values[i], expected);
    }
}

#[test]
fn test_fully_inside_cell_has_no_crossings() {
    let field = FnField { dims: [4, 4, 4], f: |_, _, _| 2.0 };
    let spec = ThresholdSpec::single(Comparator::GreaterThan, 1.0);
    let config = classify(&field, CellCoord::new(1, 1, 1), &spec);
    assert_eq!(config.vertex_mask(), 0xff);
    assert!(config.is_empty_or_full());
}
