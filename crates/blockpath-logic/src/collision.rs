//! AABB collision testing, rotation-aware.
//!
//! Rotated blocks are never tested polygon-vs-polygon: a rotated
//! block's four top-face corners are spun about its center and the
//! min/max extents of the result form a widened axis-aligned box.
//! Overlap uses strict inequalities, so flush-touching blocks do not
//! collide.

use crate::block::Block;

/// Horizontal AABB of a (possibly rotated) footprint:
/// `(min_x, min_y, max_x, max_y)`.
pub fn footprint_bounds(pos: [f32; 3], size: [f32; 3], rotation_deg: f32) -> (f32, f32, f32, f32) {
    if rotation_deg == 0.0 {
        return (pos[0], pos[1], pos[0] + size[0], pos[1] + size[1]);
    }

    let cx = pos[0] + size[0] / 2.0;
    let cy = pos[1] + size[1] / 2.0;
    let rad = rotation_deg.to_radians();
    let (sin, cos) = rad.sin_cos();

    let corners = [
        (pos[0], pos[1]),
        (pos[0] + size[0], pos[1]),
        (pos[0] + size[0], pos[1] + size[1]),
        (pos[0], pos[1] + size[1]),
    ];

    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;
    for (x, y) in corners {
        let dx = x - cx;
        let dy = y - cy;
        let rx = cx + dx * cos - dy * sin;
        let ry = cy + dx * sin + dy * cos;
        min_x = min_x.min(rx);
        min_y = min_y.min(ry);
        max_x = max_x.max(rx);
        max_y = max_y.max(ry);
    }
    (min_x, min_y, max_x, max_y)
}

/// Does a candidate block at `pos`/`size`/`rotation_deg` overlap `other`?
///
/// X/Y use the rotation-widened bounds of both blocks; Z uses the
/// literal height interval (vertical extent is unaffected by
/// horizontal rotation).
pub fn overlaps(pos: [f32; 3], size: [f32; 3], rotation_deg: f32, other: &Block) -> bool {
    let (min_x1, min_y1, max_x1, max_y1) = footprint_bounds(pos, size, rotation_deg);
    let (min_x2, min_y2, max_x2, max_y2) =
        footprint_bounds(other.pos, other.size, other.rotation_z);

    let collision_x = min_x1 < max_x2 && max_x1 > min_x2;
    let collision_y = min_y1 < max_y2 && max_y1 > min_y2;
    let collision_z =
        pos[2] < (other.pos[2] + other.size[2]) && (pos[2] + size[2]) > other.pos[2];

    collision_x && collision_y && collision_z
}

/// Candidate vs. every already-placed block.
pub fn overlaps_any<'a, I>(pos: [f32; 3], size: [f32; 3], rotation_deg: f32, placed: I) -> bool
where
    I: IntoIterator<Item = &'a Block>,
{
    placed
        .into_iter()
        .any(|b| overlaps(pos, size, rotation_deg, b))
}
