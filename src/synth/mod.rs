//! Ramp geometry synthesis.
//!
//! Turns an [`AngleClass`] into its ordered list of parts, each an ordered list
//! of box primitives plus the collision and selection heights of the block.

pub mod layers;
pub mod merge;
pub mod oblique;
pub mod straight;

pub use layers::{LayerTiler, Slope};
pub use straight::{StraightCursor, StraightPart};

use crate::angle::AngleClass;
use crate::error::{RampError, Result};
use crate::types::{BoundingBox, BoxPrimitive};
use tracing::debug;

/// Synthesizer configuration.
#[derive(Debug, Clone, Default)]
pub struct SynthConfig {
    /// Merge oblique cubes into larger boxes.
    pub merge_cubes: bool,
}

impl SynthConfig {
    pub fn with_merge(mut self, merge_cubes: bool) -> Self {
        self.merge_cubes = merge_cubes;
        self
    }
}

/// One placeable block of a ramp.
#[derive(Debug, Clone, PartialEq)]
pub struct RampPart {
    pub class: AngleClass,
    /// 1-based position within the class.
    pub index: u32,
    /// Geometry identifier, without the `geometry.` prefix.
    pub identifier: String,
    pub boxes: Vec<BoxPrimitive>,
    /// Height consumed by this and all previous parts. For oblique parts this
    /// is the top of the geometry.
    pub y_start: f64,
    pub collision_height: f64,
    pub selection_height: f64,
}

impl RampPart {
    /// Build a part, refusing any zero or negative extent.
    fn new(
        class: AngleClass,
        index: u32,
        boxes: Vec<BoxPrimitive>,
        y_start: f64,
        collision_height: f64,
        selection_height: f64,
    ) -> Result<Self> {
        let identifier = class.geometry_id(index);
        if let Some(bad) = boxes.iter().find(|b| b.is_degenerate()) {
            return Err(RampError::DegenerateGeometry {
                part: identifier,
                origin: bad.origin.to_array(),
                size: bad.size.to_array(),
            });
        }
        Ok(Self {
            class,
            index,
            identifier,
            boxes,
            y_start,
            collision_height,
            selection_height,
        })
    }

    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }
}

/// All parts of one angle class, in placement order.
#[derive(Debug, Clone, PartialEq)]
pub struct RampSet {
    pub class: AngleClass,
    pub parts: Vec<RampPart>,
}

impl RampSet {
    pub fn total_boxes(&self) -> usize {
        self.parts.iter().map(|p| p.box_count()).sum()
    }
}

/// Generates ramp parts for angle classes.
#[derive(Debug, Clone, Default)]
pub struct RampSynthesizer {
    config: SynthConfig,
}

impl RampSynthesizer {
    /// Create a synthesizer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a synthesizer with custom configuration.
    pub fn with_config(config: SynthConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// Generate every part of an angle class.
    pub fn synthesize(&self, class: AngleClass) -> Result<RampSet> {
        let parts = match class {
            AngleClass::Straight { parts } => self.straight(class, parts)?,
            _ => self.oblique(class)?,
        };
        Ok(RampSet { class, parts })
    }

    /// Generate several classes in order.
    pub fn synthesize_all(&self, classes: &[AngleClass]) -> Result<Vec<RampSet>> {
        classes.iter().map(|&class| self.synthesize(class)).collect()
    }

    fn straight(&self, class: AngleClass, parts: u32) -> Result<Vec<RampPart>> {
        // Re-validate: the enum can be built directly without `AngleClass::straight`
        AngleClass::straight(parts)?;

        straight::straight_ramp(parts)
            .into_iter()
            .zip(1..)
            .map(|(generated, index)| {
                let height = generated.collision_height();
                debug!(
                    "{} part {}: {} boxes, y_start {}",
                    class,
                    index,
                    generated.boxes.len(),
                    generated.next.y_start
                );
                RampPart::new(
                    class,
                    index,
                    generated.boxes,
                    generated.next.y_start,
                    height,
                    height,
                )
            })
            .collect()
    }

    fn oblique(&self, class: AngleClass) -> Result<Vec<RampPart>> {
        let tiler = LayerTiler::new();

        (1..=class.part_count())
            .map(|index| {
                let mut boxes = oblique::oblique_part(&tiler, class, index);
                let cube_count = boxes.len();
                if self.config.merge_cubes {
                    boxes = merge::merge_cubes(&boxes);
                }
                debug!(
                    "{} part {}: {} cubes, {} boxes emitted",
                    class,
                    index,
                    cube_count,
                    boxes.len()
                );

                let top = BoundingBox::from_boxes(&boxes)
                    .map(|bb| bb.max.y)
                    .unwrap_or(0.0);
                let collision = oblique::collision_height(class, index);
                RampPart::new(
                    class,
                    index,
                    boxes,
                    top,
                    collision,
                    oblique::selection_height(collision),
                )
            })
            .collect()
    }
}
