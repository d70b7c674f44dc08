//! Pure block-path layout engine.
//!
//! This crate lays out non-overlapping rectangular blocks along a
//! directed path through 3D space and returns them as plain records
//! for an external geometry emitter. It is independent of any editor,
//! renderer, or file format: functions take plain data plus an
//! injected random source and return results, making them
//! unit-testable and portable.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`block`] | Placed block records and named footprint presets |
//! | [`catalog`] | Shape registry with enabled flags and size multipliers |
//! | [`collision`] | Rotation-aware AABB bounds and overlap predicate |
//! | [`constants`] | Footprint bases, id offsets, retry budgets, clamp limits |
//! | [`engine`] | Row-packed placement with collision retry and segment chaining |
//! | [`geometry`] | Post-hoc layout validation (overlap, grid, containment) |
//! | [`params`] | Immutable generation parameters with boundary clamping |
//! | [`pattern`] | Named path topologies expanded into segment chains |
//! | [`segment`] | Directed corridors: end derivation and containment |

pub mod block;
pub mod catalog;
pub mod collision;
pub mod constants;
pub mod engine;
pub mod geometry;
pub mod params;
pub mod pattern;
pub mod segment;
