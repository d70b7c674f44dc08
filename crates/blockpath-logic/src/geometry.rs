//! Layout validation for generated block paths.
//!
//! Pure functions that take a placed-block list and return validation
//! errors. These express the engine's guaranteed properties as
//! post-hoc checks, usable by harnesses and callers that want a sanity
//! pass before handing the layout to a geometry emitter.

use crate::block::Block;
use crate::collision::overlaps;
use crate::segment::Segment;

/// A layout validation error.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub category: &'static str,
    pub severity: Severity,
    pub message: String,
}

/// Error severity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Error,
    Warning,
}

/// Check that no block has zero or negative dimensions.
pub fn check_block_dimensions(blocks: &[Block]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for b in blocks {
        if b.size.iter().any(|&s| s <= 0.0) {
            errors.push(ValidationError {
                category: "block_geometry",
                severity: Severity::Error,
                message: format!(
                    "Block #{} has non-positive dimensions: {}×{}×{}",
                    b.id, b.size[0], b.size[1], b.size[2]
                ),
            });
        }
    }
    errors
}

/// Rotation-aware pairwise overlap check over the whole layout.
pub fn check_no_overlaps(blocks: &[Block]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for i in 0..blocks.len() {
        for j in (i + 1)..blocks.len() {
            let a = &blocks[i];
            let b = &blocks[j];
            if overlaps(b.pos, b.size, b.rotation_z, a) {
                errors.push(ValidationError {
                    category: "block_overlap",
                    severity: Severity::Error,
                    message: format!("Blocks #{} and #{} overlap", a.id, b.id),
                });
            }
        }
    }
    errors
}

/// Check that every position component is an exact grid multiple.
pub fn check_grid_alignment(blocks: &[Block], grid: f32) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if grid <= 0.0 {
        return errors;
    }
    for b in blocks {
        for (axis, &c) in b.pos.iter().enumerate() {
            let remainder = (c / grid) - (c / grid).round();
            if remainder.abs() > 1e-4 {
                errors.push(ValidationError {
                    category: "grid_alignment",
                    severity: Severity::Error,
                    message: format!(
                        "Block #{} axis {} at {} is off the {} grid",
                        b.id, axis, c, grid
                    ),
                });
            }
        }
    }
    errors
}

/// Check that every block lies inside at least one resolved corridor.
pub fn check_corridor_containment(blocks: &[Block], segments: &[Segment]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for b in blocks {
        if !segments.iter().any(|s| s.contains_block(b.pos, b.size)) {
            errors.push(ValidationError {
                category: "corridor_containment",
                severity: Severity::Error,
                message: format!("Block #{} at {:?} is outside every corridor", b.id, b.pos),
            });
        }
    }
    errors
}

/// Check the returned count never exceeds the requested total.
pub fn check_quota_bound(blocks: &[Block], quota: u32) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if blocks.len() as u32 > quota {
        errors.push(ValidationError {
            category: "quota",
            severity: Severity::Error,
            message: format!("Placed {} blocks, quota was {}", blocks.len(), quota),
        });
    } else if (blocks.len() as u32) < quota {
        // Under-fill is legal; surface it as a warning for visibility
        errors.push(ValidationError {
            category: "quota",
            severity: Severity::Warning,
            message: format!("Placed {} of {} requested blocks", blocks.len(), quota),
        });
    }
    errors
}

/// Run every check that applies to a segmented layout.
pub fn validate_layout(
    blocks: &[Block],
    segments: &[Segment],
    grid: f32,
    quota: u32,
) -> Vec<ValidationError> {
    let mut all = Vec::new();
    all.extend(check_block_dimensions(blocks));
    all.extend(check_no_overlaps(blocks));
    all.extend(check_grid_alignment(blocks, grid));
    all.extend(check_corridor_containment(blocks, segments));
    all.extend(check_quota_bound(blocks, quota));
    all
}
