//! Bit layout of a 32-bit cube configuration and the canonical cube topology.
//!
//! ```text
//! bits  0..8   vertex flags       VERT0 .. VERT7
//! bits  8..20  occupied edges     EDGE_OCC_0 .. EDGE_OCC_11
//! bits 20..32  grey edges         EDGE_GREY_0 .. EDGE_GREY_11
//! ```
//!
//! Corner and edge numbering must match the case table bit-for-bit.

/// Corner 0 is inside.
pub const VERT0: u32 = 1 << 0;
/// Corner 1 is inside.
pub const VERT1: u32 = 1 << 1;
/// Corner 2 is inside.
pub const VERT2: u32 = 1 << 2;
/// Corner 3 is inside.
pub const VERT3: u32 = 1 << 3;
/// Corner 4 is inside.
pub const VERT4: u32 = 1 << 4;
/// Corner 5 is inside.
pub const VERT5: u32 = 1 << 5;
/// Corner 6 is inside.
pub const VERT6: u32 = 1 << 6;
/// Corner 7 is inside.
pub const VERT7: u32 = 1 << 7;

/// First occupied-edge bit.
pub const EDGE_OCC_SHIFT: u32 = 8;
/// First grey-edge bit.
pub const EDGE_GREY_SHIFT: u32 = 20;

/// Mask of the eight vertex bits.
pub const VERT_MASK: u32 = 0x0000_00ff;
/// Mask of the twelve occupied-edge bits.
pub const EDGE_OCC_MASK: u32 = 0x000f_ff00;
/// Mask of the twelve grey-edge bits.
pub const EDGE_GREY_MASK: u32 = 0xfff0_0000;

/// Edge 0 (corners 0-1) is crossed.
pub const EDGE_OCC_0: u32 = 1 << EDGE_OCC_SHIFT;
/// Edge 1 (corners 1-2) is crossed.
pub const EDGE_OCC_1: u32 = EDGE_OCC_0 << 1;
/// Edge 2 (corners 2-3) is crossed.
pub const EDGE_OCC_2: u32 = EDGE_OCC_0 << 2;
/// Edge 3 (corners 3-0) is crossed.
pub const EDGE_OCC_3: u32 = EDGE_OCC_0 << 3;
/// Edge 4 (corners 4-5) is crossed.
pub const EDGE_OCC_4: u32 = EDGE_OCC_0 << 4;
/// Edge 5 (corners 5-6) is crossed.
pub const EDGE_OCC_5: u32 = EDGE_OCC_0 << 5;
/// Edge 6 (corners 6-7) is crossed.
pub const EDGE_OCC_6: u32 = EDGE_OCC_0 << 6;
/// Edge 7 (corners 7-4) is crossed.
pub const EDGE_OCC_7: u32 = EDGE_OCC_0 << 7;
/// Edge 8 (corners 0-4) is crossed.
pub const EDGE_OCC_8: u32 = EDGE_OCC_0 << 8;
/// Edge 9 (corners 1-5) is crossed.
pub const EDGE_OCC_9: u32 = EDGE_OCC_0 << 9;
/// Edge 10 (corners 2-6) is crossed.
pub const EDGE_OCC_10: u32 = EDGE_OCC_0 << 10;
/// Edge 11 (corners 3-7) is crossed.
pub const EDGE_OCC_11: u32 = EDGE_OCC_0 << 11;

/// Edge 0 is grey.
pub const EDGE_GREY_0: u32 = 1 << EDGE_GREY_SHIFT;
/// Edge 1 is grey.
pub const EDGE_GREY_1: u32 = EDGE_GREY_0 << 1;
/// Edge 2 is grey.
pub const EDGE_GREY_2: u32 = EDGE_GREY_0 << 2;
/// Edge 3 is grey.
pub const EDGE_GREY_3: u32 = EDGE_GREY_0 << 3;
/// Edge 4 is grey.
pub const EDGE_GREY_4: u32 = EDGE_GREY_0 << 4;
/// Edge 5 is grey.
pub const EDGE_GREY_5: u32 = EDGE_GREY_0 << 5;
/// Edge 6 is grey.
pub const EDGE_GREY_6: u32 = EDGE_GREY_0 << 6;
/// Edge 7 is grey.
pub const EDGE_GREY_7: u32 = EDGE_GREY_0 << 7;
/// Edge 8 is grey.
pub const EDGE_GREY_8: u32 = EDGE_GREY_0 << 8;
/// Edge 9 is grey.
pub const EDGE_GREY_9: u32 = EDGE_GREY_0 << 9;
/// Edge 10 is grey.
pub const EDGE_GREY_10: u32 = EDGE_GREY_0 << 10;
/// Edge 11 is grey.
pub const EDGE_GREY_11: u32 = EDGE_GREY_0 << 11;

/// Corner offsets in canonical order.
///
/// ```text
/// Corner:  0      1      2      3      4      5      6      7
/// Offset: (0,0,0)(1,0,0)(1,1,0)(0,1,0)(0,0,1)(1,0,1)(1,1,1)(0,1,1)
/// ```
///
/// Corners 0-3 form the z=0 face, corners 4-7 the z=1 face.
pub const CORNER_OFFSETS: [(u32, u32, u32); 8] = [
    (0, 0, 0),
    (1, 0, 0),
    (1, 1, 0),
    (0, 1, 0),
    (0, 0, 1),
    (1, 0, 1),
    (1, 1, 1),
    (0, 1, 1),
];

/// Endpoint corners of each of the twelve edges.
///
/// Edges 0-3 ring the z=0 face, 4-7 ring the z=1 face, 8-11 join the faces.
pub const EDGE_CORNERS: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Convert a corner index (0-7) to its offset.
#[inline]
pub const fn corner_from_index(idx: usize) -> (u32, u32, u32) {
    CORNER_OFFSETS[idx & 7]
}

/// Convert a corner offset to its index (0-7). Components are masked to one bit.
#[inline]
pub const fn index_from_corner(corner: (u32, u32, u32)) -> usize {
    let (x, y, z) = (corner.0 & 1, corner.1 & 1, corner.2 & 1);
    // Within a face the corners run counter-clockwise, so y flips the x order.
    let ring = match (x, y) {
        (0, 0) => 0,
        (1, 0) => 1,
        (1, _) => 2,
        _ => 3,
    };
    ring + 4 * z as usize
}
