//! Built-in reference case table.
//!
//! Each cell is split into the six tetrahedra that share the diagonal from
//! corner 0 to corner 6, and each tetrahedron is polygonized on its own.
//! Neighbouring cells split their shared faces along the same diagonal, so the
//! resulting surface has no cracks whatever the grey edges say. The geometry is
//! therefore registered under every grey-edge pattern.
//!
//! Vertices sit at edge midpoints. Offsets are stored with z mirrored, the way
//! the generator expects, and triangles are wound so their normal points from
//! the inside corners towards the outside ones in that mirrored frame.

use std::collections::HashMap;

use iso_core::{index_from_corner, CubeConfig, Point3, CORNER_OFFSETS};

use super::{CaseEntry, CaseTable, TableVertex};

/// Axis order of the path from corner 0 to corner 6 through each tetrahedron.
const KUHN_PATHS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [0, 2, 1],
    [1, 0, 2],
    [1, 2, 0],
    [2, 0, 1],
    [2, 1, 0],
];

/// Build the reference table: 254 vertex masks times 8 grey patterns.
pub fn tetrahedral() -> CaseTable {
    let tets = tetrahedra();
    let mut entries = HashMap::with_capacity(254 * 8);

    for mask in 1..=254u8 {
        let mut entry = CaseEntry::default();
        for tet in &tets {
            polygonize(tet, mask, &mut entry);
        }

        for parity in 0..8i64 {
            let config = CubeConfig::compose(mask, parity & 1, (parity >> 1) & 1, (parity >> 2) & 1);
            entries.insert(config.raw(), entry.clone());
        }
    }

    CaseTable { entries }
}

/// Corner indices of the six tetrahedra, each starting at corner 0 and ending at 6.
pub fn tetrahedra() -> [[usize; 4]; 6] {
    let mut tets = [[0usize; 4]; 6];
    for (tet, path) in tets.iter_mut().zip(KUHN_PATHS.iter()) {
        let mut corner = [0u32; 3];
        for (step, &axis) in path.iter().enumerate() {
            corner[axis] = 1;
            tet[step + 1] = index_from_corner((corner[0], corner[1], corner[2]));
        }
    }
    tets
}

/// Corner position in the mirrored (output) frame.
#[inline]
fn oriented(corner: usize) -> Point3 {
    let (x, y, z) = CORNER_OFFSETS[corner];
    Point3::new(x as f32, y as f32, -(z as f32))
}

fn centroid_of(corners: &[usize]) -> Point3 {
    let sum = corners
        .iter()
        .fold(Point3::default(), |acc, &c| acc + oriented(c));
    sum / corners.len() as f32
}

fn polygonize(tet: &[usize; 4], mask: u8, entry: &mut CaseEntry) {
    let (inside, outside): (Vec<usize>, Vec<usize>) =
        tet.iter().copied().partition(|&c| mask & (1 << c) != 0);
    if inside.is_empty() || outside.is_empty() {
        return;
    }

    let outward = centroid_of(&outside) - centroid_of(&inside);
    let cut = |a: usize, b: usize| TableVertex::new(oriented(a).lerp(oriented(b), 0.5), a as u8);

    match (inside.as_slice(), outside.as_slice()) {
        (&[a], &[b, c, d]) => emit(entry, outward, [cut(a, b), cut(a, c), cut(a, d)]),
        (&[a, b, c], &[d]) => emit(entry, outward, [cut(a, d), cut(b, d), cut(c, d)]),
        (&[a, b], &[c, d]) => {
            // Midpoints of the four cut edges form a parallelogram ac-ad-bd-bc.
            emit(entry, outward, [cut(a, c), cut(a, d), cut(b, d)]);
            emit(entry, outward, [cut(a, c), cut(b, d), cut(b, c)]);
        }
        _ => {}
    }
}

fn emit(entry: &mut CaseEntry, outward: Point3, mut tri: [TableVertex; 3]) {
    let edge1 = tri[1].offset - tri[0].offset;
    let edge2 = tri[2].offset - tri[0].offset;
    let mut normal = edge1.cross(edge2);
    if normal.dot(outward) < 0.0 {
        tri.swap(1, 2);
        normal = -normal;
    }
    entry.vertices.extend_from_slice(&tri);
    entry.normals.push(normal.normalize());
}

#[cfg(test)]
mod tests {
    use super::*;
    use iso_core::grey_edges;

    #[test]
    fn test_tetrahedra_share_main_diagonal() {
        let tets = tetrahedra();
        for tet in &tets {
            assert_eq!(tet[0], 0);
            assert_eq!(tet[3], 6);
        }
        // Every corner belongs to at least one tetrahedron
        for corner in 0..8 {
            assert!(tets.iter().any(|t| t.contains(&corner)));
        }
    }

    #[test]
    fn test_table_size_and_validity() {
        let table = tetrahedral();
        assert_eq!(table.len(), 254 * 8);
        for config in table.configs() {
            let entry = table.get(config).unwrap();
            entry.validate(0).unwrap();
            assert!(entry.triangle_count() > 0);
        }
    }

    #[test]
    fn test_uniform_masks_have_no_entry() {
        let table = tetrahedral();
        for parity in 0..8i64 {
            let (x, y, z) = (parity & 1, (parity >> 1) & 1, (parity >> 2) & 1);
            assert!(table.get(CubeConfig::compose(0x00, x, y, z).raw()).is_none());
            assert!(table.get(CubeConfig::compose(0xff, x, y, z).raw()).is_none());
        }
    }

    #[test]
    fn test_same_geometry_for_every_grey_pattern() {
        let table = tetrahedral();
        let base = table.get(CubeConfig::compose(0x5a, 0, 0, 0).raw()).unwrap();
        for parity in 1..8i64 {
            let config = CubeConfig::compose(0x5a, parity & 1, (parity >> 1) & 1, (parity >> 2) & 1);
            assert_eq!(config.grey_edges(), grey_edges(parity & 1, (parity >> 1) & 1, (parity >> 2) & 1));
            assert_eq!(table.get(config.raw()), Some(base));
        }
    }

    #[test]
    fn test_vertex_offsets_and_corners() {
        let table = tetrahedral();
        for config in table.configs() {
            let mask = CubeConfig(config).vertex_mask();
            let entry = table.get(config).unwrap();
            for v in &entry.vertices {
                assert!((0.0..=1.0).contains(&v.offset.x));
                assert!((0.0..=1.0).contains(&v.offset.y));
                assert!((-1.0..=0.0).contains(&v.offset.z));
                assert!(mask & (1 << v.corner) != 0, "corner {} not inside", v.corner);
            }
            for n in &entry.normals {
                assert!((n.length() - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_single_corner_normals_point_away() {
        let table = tetrahedral();
        let entry = table.get(CubeConfig::compose(1, 0, 0, 0).raw()).unwrap();
        // Corner 0 lies at the mirrored origin; all vertices are around it
        assert_eq!(entry.triangle_count(), 6);
        for (tri, normal) in entry.vertices.chunks(3).zip(entry.normals.iter()) {
            let center = (tri[0].offset + tri[1].offset + tri[2].offset) / 3.0;
            assert!(normal.dot(center) > 0.0);
        }
    }
}
