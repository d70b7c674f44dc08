//! Predefined path patterns.
//!
//! A pattern is a fixed segment topology; `build_pattern` expands it
//! into an ordered segment list with per-segment block quotas. Block
//! shares use truncating integer division with no remainder
//! redistribution, so an N-way split can under-allocate by up to N−1
//! blocks. That matches the original tool and is left as-is.

use serde::{Deserialize, Serialize};

use crate::segment::{Direction, Segment};

/// Named path topologies. `Custom` means the caller supplies the
/// segment chain directly and the builder is not invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathPattern {
    Straight,
    RightTurn,
    LeftTurn,
    SCurve,
    Zigzag,
    Custom,
}

/// Expand a pattern into its segment chain.
///
/// All corridors share `corridor_width`; start/end positions are left
/// unresolved (the engine chains them from the generation start).
/// `Custom` returns an empty list.
pub fn build_pattern(
    pattern: PathPattern,
    total_blocks: u32,
    segment_length: f32,
    corridor_width: f32,
) -> Vec<Segment> {
    let seg = |direction, length, quota| Segment::new(direction, length, corridor_width, quota);

    match pattern {
        PathPattern::Straight => vec![seg(
            Direction::Forward,
            segment_length * 3.0,
            total_blocks,
        )],
        PathPattern::RightTurn => vec![
            seg(Direction::Forward, segment_length, total_blocks / 2),
            seg(Direction::Right, segment_length, total_blocks / 2),
        ],
        PathPattern::LeftTurn => vec![
            seg(Direction::Forward, segment_length, total_blocks / 2),
            seg(Direction::Left, segment_length, total_blocks / 2),
        ],
        PathPattern::SCurve => vec![
            seg(Direction::Forward, segment_length, total_blocks / 3),
            seg(Direction::Right, segment_length, total_blocks / 3),
            seg(Direction::Forward, segment_length, total_blocks / 3),
        ],
        PathPattern::Zigzag => {
            let quota = total_blocks / 4;
            let half = (segment_length / 2.0).floor();
            vec![
                seg(Direction::Forward, segment_length, quota),
                seg(Direction::Right, half, quota),
                seg(Direction::Left, half, quota),
                seg(Direction::Forward, segment_length, quota),
            ]
        }
        PathPattern::Custom => Vec::new(),
    }
}
