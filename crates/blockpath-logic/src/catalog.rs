//! Shape catalog — enabled shapes and their footprint multipliers.
//!
//! The catalog is the engine's size-selection collaborator: it answers
//! "which shapes are enabled" and "pick one uniformly at random".
//! Loading and saving the catalog is external; this module only
//! defines the data model (serde-ready) and the queries the engine
//! consumes. Only the size multiplier affects placement math — custom
//! outline polygons exist solely for presentation layers.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::layout::{BASE_FOOTPRINT, BLOCK_HEIGHT};

/// Built-in shape kinds. Non-rectangular kinds are still placed as
/// rectangular footprints; the kind only matters to the drawing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredefinedShape {
    Square,
    Rectangle,
    Triangle,
    Circle,
    Parallelogram,
    Trapezoid,
    Pentagon,
    Rhombus,
    Hexagon,
    Octagon,
    Oval,
    Ellipse,
}

/// Predefined kind, or a user-drawn polygon with a normalized
/// (0..1) outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeForm {
    Predefined { shape: PredefinedShape },
    Custom { name: String, outline: Vec<[f32; 2]> },
}

/// One catalog row: a shape, whether generation may use it, and the
/// (width, length) multiplier applied to the base footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeEntry {
    pub form: ShapeForm,
    pub enabled: bool,
    pub size_multiplier: [f32; 2],
}

impl ShapeEntry {
    pub fn predefined(shape: PredefinedShape, size_multiplier: [f32; 2], enabled: bool) -> Self {
        Self {
            form: ShapeForm::Predefined { shape },
            enabled,
            size_multiplier,
        }
    }

    /// Footprint in planning units: base edge times multiplier,
    /// truncated toward zero, with the fixed block height.
    pub fn footprint(&self) -> [f32; 3] {
        [
            (BASE_FOOTPRINT * self.size_multiplier[0]).trunc(),
            (BASE_FOOTPRINT * self.size_multiplier[1]).trunc(),
            BLOCK_HEIGHT,
        ]
    }
}

/// The shape registry the engine queries during generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeCatalog {
    pub entries: Vec<ShapeEntry>,
}

impl ShapeCatalog {
    /// Empty catalog: the engine falls back to the named block sizes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The stock catalog: every predefined shape, with square and
    /// rectangle enabled out of the box.
    pub fn builtin() -> Self {
        use PredefinedShape::*;
        let entries = vec![
            ShapeEntry::predefined(Square, [1.0, 1.0], true),
            ShapeEntry::predefined(Rectangle, [1.0, 2.0], true),
            ShapeEntry::predefined(Triangle, [1.0, 1.0], false),
            ShapeEntry::predefined(Circle, [1.0, 1.0], false),
            ShapeEntry::predefined(Parallelogram, [1.0, 1.0], false),
            ShapeEntry::predefined(Trapezoid, [1.0, 1.0], false),
            ShapeEntry::predefined(Pentagon, [1.0, 1.0], false),
            ShapeEntry::predefined(Rhombus, [1.0, 1.0], false),
            ShapeEntry::predefined(Hexagon, [1.0, 1.0], false),
            ShapeEntry::predefined(Octagon, [1.0, 1.0], false),
            ShapeEntry::predefined(Oval, [1.0, 1.5], false),
            ShapeEntry::predefined(Ellipse, [1.5, 1.0], false),
        ];
        Self { entries }
    }

    /// Register a user-drawn shape (disabled until switched on).
    pub fn add_custom(&mut self, name: impl Into<String>, outline: Vec<[f32; 2]>) {
        self.entries.push(ShapeEntry {
            form: ShapeForm::Custom {
                name: name.into(),
                outline,
            },
            enabled: false,
            size_multiplier: [1.0, 1.0],
        });
    }

    /// Currently enabled entries, in catalog order.
    pub fn enabled(&self) -> Vec<&ShapeEntry> {
        self.entries.iter().filter(|e| e.enabled).collect()
    }

    /// Uniform random pick among enabled entries; `None` if nothing
    /// is enabled.
    pub fn pick_random(&self, rng: &mut impl Rng) -> Option<&ShapeEntry> {
        let enabled = self.enabled();
        if enabled.is_empty() {
            return None;
        }
        Some(enabled[rng.gen_range(0..enabled.len())])
    }
}
