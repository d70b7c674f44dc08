//! Generation parameters.
//!
//! One immutable configuration struct passed into each generation
//! call. Invalid inputs are clamped to their minimums at this
//! boundary, never surfaced as errors.

use serde::{Deserialize, Serialize};

use crate::block::BlockKind;
use crate::constants::limits;

/// How block rotation angles are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationMode {
    /// Every block at 0°.
    None,
    /// 80% at 0°, otherwise uniform in ±45°.
    PriorityStraight,
    /// Always uniform in ±45°.
    FullRandom,
}

/// Caller-supplied layout configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    /// Generation origin (unrestricted).
    pub start: [f32; 3],
    /// Total blocks (flat mode) or the pattern builder's input.
    pub block_count: u32,
    /// Gap inserted between successive rows.
    pub spacing: f32,
    /// Corridor width (flat mode: the lateral band around start X).
    pub path_width: f32,
    /// Length of each pattern segment.
    pub segment_length: f32,
    /// Upper bound on the random per-row block count.
    pub max_blocks_per_row: u32,
    /// Candidate named sizes when no catalog shape is enabled.
    pub block_kinds: Vec<BlockKind>,
    /// Pick uniformly among `block_kinds` rather than always the first.
    pub randomize_sizes: bool,
    /// Scatter blocks laterally within the corridor.
    pub randomize_positions: bool,
    /// Snap step for all placed coordinates.
    pub grid_size: f32,
    pub rotation_mode: RotationMode,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            start: [0.0, 0.0, 0.0],
            block_count: 10,
            spacing: 150.0,
            path_width: 512.0,
            segment_length: 800.0,
            max_blocks_per_row: 3,
            block_kinds: vec![BlockKind::Medium, BlockKind::Large],
            randomize_sizes: true,
            randomize_positions: true,
            grid_size: 32.0,
            rotation_mode: RotationMode::None,
        }
    }
}

impl LayoutParams {
    /// Clamp every field into its valid range. The engine applies
    /// this at the start of each generation call, so callers may hand
    /// in raw values.
    pub fn clamped(mut self) -> Self {
        self.block_count = self.block_count.max(limits::MIN_BLOCK_COUNT);
        self.spacing = self.spacing.max(limits::MIN_SPACING);
        self.path_width = self.path_width.max(limits::MIN_PATH_WIDTH);
        self.segment_length = self.segment_length.max(limits::MIN_SEGMENT_LENGTH);
        self.max_blocks_per_row = self
            .max_blocks_per_row
            .clamp(limits::MIN_BLOCKS_PER_ROW, limits::MAX_BLOCKS_PER_ROW);
        if !(self.grid_size > 0.0) {
            self.grid_size = Self::default().grid_size;
        }
        if self.block_kinds.is_empty() {
            self.block_kinds = Self::default().block_kinds;
        }
        self
    }

    /// Replace the candidate sizes from caller-supplied names.
    /// Unknown names are dropped silently; if none survive, the
    /// previous set is kept unchanged.
    pub fn set_block_type_names(&mut self, names: &[&str]) {
        let valid: Vec<BlockKind> = names.iter().filter_map(|n| BlockKind::from_name(n)).collect();
        if !valid.is_empty() {
            self.block_kinds = valid;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_already_valid() {
        let params = LayoutParams::default();
        assert_eq!(params.clone().clamped(), params);
    }

    #[test]
    fn test_clamps_minimums() {
        let params = LayoutParams {
            block_count: 0,
            spacing: 10.0,
            path_width: 64.0,
            segment_length: 100.0,
            max_blocks_per_row: 0,
            ..LayoutParams::default()
        }
        .clamped();

        assert_eq!(params.block_count, 1);
        assert_eq!(params.spacing, 50.0);
        assert_eq!(params.path_width, 128.0);
        assert_eq!(params.segment_length, 400.0);
        assert_eq!(params.max_blocks_per_row, 1);
    }

    #[test]
    fn test_clamps_row_maximum() {
        let params = LayoutParams {
            max_blocks_per_row: 25,
            ..LayoutParams::default()
        }
        .clamped();
        assert_eq!(params.max_blocks_per_row, 10);
    }

    #[test]
    fn test_non_positive_grid_reset_to_default() {
        let params = LayoutParams {
            grid_size: 0.0,
            ..LayoutParams::default()
        }
        .clamped();
        assert_eq!(params.grid_size, 32.0);

        let params = LayoutParams {
            grid_size: -8.0,
            ..LayoutParams::default()
        }
        .clamped();
        assert_eq!(params.grid_size, 32.0);
    }

    #[test]
    fn test_type_names_filtered() {
        let mut params = LayoutParams::default();
        params.set_block_type_names(&["small", "bogus", "long"]);
        assert_eq!(params.block_kinds, vec![BlockKind::Small, BlockKind::Long]);
    }

    #[test]
    fn test_all_invalid_names_keep_previous_set() {
        let mut params = LayoutParams::default();
        let before = params.block_kinds.clone();
        params.set_block_type_names(&["bogus", "also_bogus"]);
        assert_eq!(params.block_kinds, before);
    }

    #[test]
    fn test_empty_kind_list_restored() {
        let params = LayoutParams {
            block_kinds: Vec::new(),
            ..LayoutParams::default()
        }
        .clamped();
        assert!(!params.block_kinds.is_empty());
    }
}
