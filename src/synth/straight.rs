//! Straight ramps: a 45° rise split into equal-height blocks.
//!
//! Each part tiles its slice of the slope with full-width slabs whose depth
//! shrinks by one slab per step, a staircase that reads as a smooth incline.
//! All arithmetic is rounded to three decimals after every step.

use crate::types::{round3, BoxPrimitive, BoxUv, BLOCK_SPAN, FOOTPRINT_MIN, MAX_BOX_HEIGHT};
use glam::DVec3;

/// Height carried from one part to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StraightCursor {
    /// Vertical extent consumed by all previous parts. Becomes the height of the
    /// next part's base box and the origin of its first slab.
    pub y_start: f64,
}

/// Geometry of one straight part plus the cursor for the next one.
#[derive(Debug, Clone)]
pub struct StraightPart {
    pub boxes: Vec<BoxPrimitive>,
    pub next: StraightCursor,
}

impl StraightPart {
    /// Collision and selection height: the part's top, capped at one block.
    pub fn collision_height(&self) -> f64 {
        if self.next.y_start <= MAX_BOX_HEIGHT {
            self.next.y_start
        } else {
            MAX_BOX_HEIGHT
        }
    }
}

/// Thickness of one slab for the given subdivision count.
pub fn slab_height(parts: u32) -> f64 {
    round3(1.0 / parts as f64)
}

/// Generate part `part` (1-based) of a straight ramp with `parts` subdivisions.
///
/// `parts` must be one of the supported subdivision counts; other values may
/// never leave the depth normalization loop.
pub fn straight_part(parts: u32, part: u32, cursor: StraightCursor) -> StraightPart {
    let height = slab_height(parts);
    let parts_f = parts as f64;
    let mut boxes = Vec::new();

    if part > 1 {
        boxes.push(
            BoxPrimitive::new(
                DVec3::new(FOOTPRINT_MIN, 0.0, FOOTPRINT_MIN),
                DVec3::new(BLOCK_SPAN, cursor.y_start, BLOCK_SPAN),
            )
            .with_uv(BoxUv::road_slab()),
        );
    }

    let mut y = cursor.y_start;
    let mut depth = round3(BLOCK_SPAN - y * parts_f);
    while depth < 1.0 {
        depth += BLOCK_SPAN;
    }

    while depth > 0.0 {
        boxes.push(
            BoxPrimitive::new(
                DVec3::new(FOOTPRINT_MIN, y, FOOTPRINT_MIN),
                DVec3::new(BLOCK_SPAN, height, depth),
            )
            .with_uv(BoxUv::road_slab()),
        );
        y = round3(y + height);
        depth = round3(depth - parts_f * height);
    }

    StraightPart {
        boxes,
        next: StraightCursor { y_start: round3(y) },
    }
}

/// Generate every part of a straight ramp, threading the cursor through.
pub fn straight_ramp(parts: u32) -> Vec<StraightPart> {
    let mut cursor = StraightCursor::default();
    (1..=parts)
        .map(|part| {
            let generated = straight_part(parts, part, cursor);
            cursor = generated.next;
            generated
        })
        .collect()
}
