//! Layout constants — footprint bases, id reservations, retry budgets.
//!
//! Plain numeric constants with no dependencies. The placement engine,
//! the shape catalog, and the simtest harness all read these.

/// Planning-unit constants for block footprints.
pub mod layout {
    /// Base footprint edge (planning units) scaled by a shape's multiplier.
    pub const BASE_FOOTPRINT: f32 = 96.0;
    /// Every block has this fixed height regardless of footprint.
    pub const BLOCK_HEIGHT: f32 = 32.0;
    /// Block ids start here; lower ids are reserved for other map elements.
    pub const ID_OFFSET: u32 = 10;
    /// Perpendicular-offset resamples before a row is abandoned.
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100;
    /// Rotated blocks stay within ±45° of the world axes.
    pub const MAX_ROTATION_DEG: f32 = 45.0;
    /// Probability of an unrotated block under `RotationMode::PriorityStraight`.
    pub const STRAIGHT_BIAS: f64 = 0.8;
}

/// Minimum valid values for caller-supplied parameters.
/// Inputs below these are clamped, never rejected.
pub mod limits {
    pub const MIN_BLOCK_COUNT: u32 = 1;
    pub const MIN_SPACING: f32 = 50.0;
    pub const MIN_PATH_WIDTH: f32 = 128.0;
    pub const MIN_SEGMENT_LENGTH: f32 = 400.0;
    pub const MIN_BLOCKS_PER_ROW: u32 = 1;
    pub const MAX_BLOCKS_PER_ROW: u32 = 10;
}
