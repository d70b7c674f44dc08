//! Placed block records and the named footprint presets.

use serde::{Deserialize, Serialize};

/// A placed block: the engine's output record.
///
/// `pos` is the minimum corner; `size` is (width, length, height)
/// along (X, Y, Z). `rotation_z` is degrees about the vertical axis
/// through the block's own center, 0 for an unrotated block. Created
/// once by the placement engine and immutable afterward — the caller
/// that receives the output list owns it outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: u32,
    pub pos: [f32; 3],
    pub size: [f32; 3],
    pub rotation_z: f32,
}

impl Block {
    /// Maximum corner (ignores rotation).
    pub fn max_corner(&self) -> [f32; 3] {
        [
            self.pos[0] + self.size[0],
            self.pos[1] + self.size[1],
            self.pos[2] + self.size[2],
        ]
    }
}

/// Named footprint presets used when no catalog shape is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Small,
    Medium,
    Large,
    Long,
    Wide,
}

impl BlockKind {
    /// (width, length, height) in planning units.
    pub fn size(self) -> [f32; 3] {
        match self {
            BlockKind::Small => [64.0, 64.0, 32.0],
            BlockKind::Medium => [96.0, 96.0, 32.0],
            BlockKind::Large => [128.0, 128.0, 32.0],
            BlockKind::Long => [128.0, 256.0, 32.0],
            BlockKind::Wide => [192.0, 128.0, 32.0],
        }
    }

    /// Parse a caller-supplied type name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "small" => Some(BlockKind::Small),
            "medium" => Some(BlockKind::Medium),
            "large" => Some(BlockKind::Large),
            "long" => Some(BlockKind::Long),
            "wide" => Some(BlockKind::Wide),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Small => "small",
            BlockKind::Medium => "medium",
            BlockKind::Large => "large",
            BlockKind::Long => "long",
            BlockKind::Wide => "wide",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip_names() {
        for kind in [
            BlockKind::Small,
            BlockKind::Medium,
            BlockKind::Large,
            BlockKind::Long,
            BlockKind::Wide,
        ] {
            assert_eq!(BlockKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_name_rejected() {
        assert_eq!(BlockKind::from_name("huge"), None);
        assert_eq!(BlockKind::from_name(""), None);
    }

    #[test]
    fn test_all_sizes_positive() {
        for kind in [
            BlockKind::Small,
            BlockKind::Medium,
            BlockKind::Large,
            BlockKind::Long,
            BlockKind::Wide,
        ] {
            let s = kind.size();
            assert!(s[0] > 0.0 && s[1] > 0.0 && s[2] > 0.0);
        }
    }

    #[test]
    fn test_max_corner() {
        let b = Block {
            id: 10,
            pos: [0.0, 32.0, 0.0],
            size: [96.0, 96.0, 32.0],
            rotation_z: 0.0,
        };
        assert_eq!(b.max_corner(), [96.0, 128.0, 32.0]);
    }
}
