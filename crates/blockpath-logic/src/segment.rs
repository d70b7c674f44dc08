//! Directed corridor segments.
//!
//! A segment is one leg of the path: a corridor of fixed length and
//! width running along a world axis, carrying a quota of blocks. The
//! engine resolves start/end positions in a single pass when chaining
//! segments; after that a segment is read-only.

use serde::{Deserialize, Serialize};

/// Travel direction of a segment, relative to the fixed world frame
/// (not to the previous segment's heading).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// +Y
    Forward,
    /// +X
    Right,
    /// -X
    Left,
    /// -Y
    Back,
}

impl Direction {
    /// World axis the segment travels along (0 = X, 1 = Y).
    pub fn progress_axis(self) -> usize {
        match self {
            Direction::Forward | Direction::Back => 1,
            Direction::Right | Direction::Left => 0,
        }
    }

    /// World axis perpendicular to travel, where blocks spread out.
    pub fn lateral_axis(self) -> usize {
        1 - self.progress_axis()
    }

    /// Sign of travel along the progress axis.
    pub fn step_sign(self) -> f32 {
        match self {
            Direction::Forward | Direction::Right => 1.0,
            Direction::Left | Direction::Back => -1.0,
        }
    }
}

/// One directed corridor with a block quota.
///
/// `start`/`end` are zeroed until the engine resolves them by chaining
/// the segment list from the generation start position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub direction: Direction,
    pub length: f32,
    pub width: f32,
    pub block_quota: u32,
    pub start: [f32; 3],
    pub end: [f32; 3],
}

impl Segment {
    pub fn new(direction: Direction, length: f32, width: f32, block_quota: u32) -> Self {
        Self {
            direction,
            length,
            width,
            block_quota,
            start: [0.0; 3],
            end: [0.0; 3],
        }
    }

    /// Set the start position and derive the end position from it.
    /// End = start ± length along the progress axis.
    pub fn resolve_from(&mut self, start: [f32; 3]) {
        self.start = start;
        let mut end = start;
        end[self.direction.progress_axis()] += self.length * self.direction.step_sign();
        self.end = end;
    }

    /// Exact corridor containment for an unrotated footprint.
    ///
    /// Along the progress axis the block's near and far extents must
    /// lie between start and end (inclusive, ordered by direction);
    /// laterally the block must fit inside the half-width band around
    /// the start's lateral coordinate. Rotation is never considered.
    pub fn contains_block(&self, pos: [f32; 3], size: [f32; 3]) -> bool {
        let axis = self.direction.progress_axis();
        let lat = self.direction.lateral_axis();

        let near = pos[axis];
        let far = pos[axis] + size[axis];
        let in_travel = if self.direction.step_sign() > 0.0 {
            self.start[axis] <= near && far <= self.end[axis]
        } else {
            self.end[axis] <= near && far <= self.start[axis]
        };

        let half_width = self.width / 2.0;
        let center = self.start[lat];
        let in_lateral =
            (center - half_width) <= pos[lat] && (pos[lat] + size[lat]) <= (center + half_width);

        in_travel && in_lateral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_position_forward() {
        let mut seg = Segment::new(Direction::Forward, 800.0, 512.0, 5);
        seg.resolve_from([10.0, 20.0, 30.0]);
        assert_eq!(seg.end, [10.0, 820.0, 30.0]);
    }

    #[test]
    fn test_end_position_back() {
        let mut seg = Segment::new(Direction::Back, 800.0, 512.0, 5);
        seg.resolve_from([0.0, 0.0, 0.0]);
        assert_eq!(seg.end, [0.0, -800.0, 0.0]);
    }

    #[test]
    fn test_end_position_right_and_left() {
        let mut right = Segment::new(Direction::Right, 400.0, 512.0, 5);
        right.resolve_from([0.0, 0.0, 0.0]);
        assert_eq!(right.end, [400.0, 0.0, 0.0]);

        let mut left = Segment::new(Direction::Left, 400.0, 512.0, 5);
        left.resolve_from([0.0, 0.0, 0.0]);
        assert_eq!(left.end, [-400.0, 0.0, 0.0]);
    }

    #[test]
    fn test_contains_block_forward() {
        let mut seg = Segment::new(Direction::Forward, 800.0, 512.0, 5);
        seg.resolve_from([0.0, 0.0, 0.0]);

        // Centered, well inside
        assert!(seg.contains_block([-48.0, 100.0, 0.0], [96.0, 96.0, 32.0]));
        // Pokes past the far end
        assert!(!seg.contains_block([-48.0, 750.0, 0.0], [96.0, 96.0, 32.0]));
        // Before the near end
        assert!(!seg.contains_block([-48.0, -10.0, 0.0], [96.0, 96.0, 32.0]));
        // Outside the lateral band
        assert!(!seg.contains_block([230.0, 100.0, 0.0], [96.0, 96.0, 32.0]));
    }

    #[test]
    fn test_contains_block_inclusive_edges() {
        let mut seg = Segment::new(Direction::Forward, 800.0, 512.0, 5);
        seg.resolve_from([0.0, 0.0, 0.0]);

        // Flush against start, end, and lateral edges all count as inside
        assert!(seg.contains_block([-256.0, 0.0, 0.0], [96.0, 96.0, 32.0]));
        assert!(seg.contains_block([160.0, 704.0, 0.0], [96.0, 96.0, 32.0]));
    }

    #[test]
    fn test_contains_block_left_direction() {
        let mut seg = Segment::new(Direction::Left, 800.0, 512.0, 5);
        seg.resolve_from([0.0, 0.0, 0.0]);

        // Travel is toward -X: valid blocks sit between end.x and start.x
        assert!(seg.contains_block([-400.0, -48.0, 0.0], [96.0, 96.0, 32.0]));
        assert!(!seg.contains_block([50.0, -48.0, 0.0], [96.0, 96.0, 32.0]));
    }

    #[test]
    fn test_wider_than_corridor_never_contained() {
        let mut seg = Segment::new(Direction::Forward, 800.0, 128.0, 5);
        seg.resolve_from([0.0, 0.0, 0.0]);
        // 192-wide footprint cannot fit a 128-wide corridor anywhere
        for x in [-96.0, -64.0, -32.0, 0.0] {
            assert!(!seg.contains_block([x, 100.0, 0.0], [192.0, 128.0, 32.0]));
        }
    }
}
