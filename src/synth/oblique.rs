//! Oblique ramps: diagonal slopes built from cubes, one recipe per part.

use super::layers::{LayerTiler, Slope};
use crate::angle::AngleClass;
use crate::types::{BoxPrimitive, MAX_BOX_HEIGHT};

/// Depth lost per layer on the 22.5° ramp.
const RATE_22_5: f64 = 2.0;
/// Depth lost per layer on the 11.25° ramp, whose parts each span four layers.
const RATE_11_25: f64 = 4.0;

/// Selection boxes of partial-height parts reach this far above the collision box.
const SELECTION_MARGIN: f64 = 4.0;

/// Cubes for part `part` (1-based) of an oblique class.
///
/// Returns an empty list for straight classes or out-of-range parts.
pub fn oblique_part(tiler: &LayerTiler, class: AngleClass, part: u32) -> Vec<BoxPrimitive> {
    match class {
        AngleClass::Oblique22_5 => part_22_5(tiler, part),
        AngleClass::Oblique11_25 => part_11_25(tiler, part),
        AngleClass::Oblique45 => part_45(tiler, part),
        AngleClass::Straight { .. } => Vec::new(),
    }
}

fn part_22_5(tiler: &LayerTiler, part: u32) -> Vec<BoxPrimitive> {
    let slope = |anchor| Slope::new(RATE_22_5, anchor);
    match part {
        1 => tiler.triangle_layers(0.0, 15.0, slope(0.0)),
        2 => concat([
            tiler.full_layers(0.0, 0.0),
            tiler.banded_layers(1.0, 8.0, slope(0.0)),
            tiler.triangle_layers(9.0, 15.0, slope(8.0)),
        ]),
        3 => concat([
            tiler.full_layers(0.0, 7.0),
            tiler.row_layers(8.0, 15.0, slope(8.0)),
        ]),
        _ => Vec::new(),
    }
}

fn part_11_25(tiler: &LayerTiler, part: u32) -> Vec<BoxPrimitive> {
    let slope = |anchor| Slope::new(RATE_11_25, anchor);
    match part {
        1 => tiler.triangle_layers(0.0, 3.0, slope(0.0)),
        2 => concat([
            tiler.banded_layers(0.0, 3.0, slope(0.0)),
            tiler.triangle_layers(4.0, 7.0, slope(4.0)),
        ]),
        3 => concat([
            tiler.full_layers(0.0, 3.0),
            tiler.banded_layers(4.0, 7.0, slope(4.0)),
            tiler.triangle_layers(8.0, 11.0, slope(8.0)),
        ]),
        4 => concat([
            tiler.full_layers(0.0, 7.0),
            tiler.banded_layers(8.0, 11.0, slope(8.0)),
            tiler.triangle_layers(12.0, 15.0, slope(12.0)),
        ]),
        5 => concat([
            tiler.full_layers(0.0, 11.0),
            tiler.banded_layers(12.0, 15.0, slope(12.0)),
        ]),
        _ => Vec::new(),
    }
}

fn part_45(tiler: &LayerTiler, part: u32) -> Vec<BoxPrimitive> {
    match part {
        1 => tiler.sloped_45(0.0, 15.0),
        2 => tiler.decreasing_45(0.0, 15.0),
        _ => Vec::new(),
    }
}

fn concat<const N: usize>(groups: [Vec<BoxPrimitive>; N]) -> Vec<BoxPrimitive> {
    groups.into_iter().flatten().collect()
}

/// Collision height of an oblique part.
///
/// Fixed per part rather than measured from the cubes: block placement relies
/// on these exact steps.
pub fn collision_height(class: AngleClass, part: u32) -> f64 {
    match (class, part) {
        (AngleClass::Oblique22_5, 1) => 0.0,
        (AngleClass::Oblique22_5, 2) => 8.0,
        (AngleClass::Oblique11_25, 1) => 0.0,
        (AngleClass::Oblique11_25, 2) => 4.0,
        (AngleClass::Oblique11_25, 3) => 8.0,
        (AngleClass::Oblique11_25, 4) => 12.0,
        (AngleClass::Oblique11_25, 5) => 16.0,
        _ => MAX_BOX_HEIGHT,
    }
}

/// Selection height for a given collision height.
pub fn selection_height(collision: f64) -> f64 {
    if collision < MAX_BOX_HEIGHT {
        collision + SELECTION_MARGIN
    } else {
        MAX_BOX_HEIGHT
    }
}
