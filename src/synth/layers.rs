//! Layer tiling shared by the oblique ramp classes.
//!
//! Oblique ramps are built from cubes placed layer by layer. Every class uses
//! the same handful of layer shapes and differs only in how fast the occupied
//! depth shrinks with height, which is captured by [`Slope`].
//!
//! Within a layer the footprint is split into a *main rectangle* (full-width
//! rows nearest the low edge) and a *fringe* of rows whose width drops by one
//! cube per row, approximating the diagonal cut.

use crate::types::{BoxPrimitive, BLOCK_SPAN, FOOTPRINT_MIN};
use glam::DVec3;

/// Rate at which the occupied depth of a layer shrinks with height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slope {
    /// Depth lost per unit of height.
    pub rate: f64,
    /// Layer at which the depth is a full block.
    pub anchor: f64,
}

impl Slope {
    pub const fn new(rate: f64, anchor: f64) -> Self {
        Self { rate, anchor }
    }

    /// Occupied depth of the main rectangle at height `y`.
    pub fn depth_at(&self, y: f64) -> f64 {
        BLOCK_SPAN - self.rate * (y - self.anchor)
    }
}

/// Half-open range `[start, stop)` sampled every `step`, like `numpy.arange`.
fn arange(start: f64, stop: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = ((stop - start) / step).ceil().max(0.0) as usize;
    (0..count).map(move |i| start + i as f64 * step)
}

/// Edge length of the cubes oblique ramps are built from, one pixel.
pub const CUBE_EDGE: f64 = 1.0;

/// Emits unit cubes for the oblique layer shapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayerTiler;

impl LayerTiler {
    pub fn new() -> Self {
        Self
    }

    /// Heights `from..=to`.
    fn layers(&self, from: f64, to: f64) -> impl Iterator<Item = f64> {
        arange(from, to + 1.0, CUBE_EDGE)
    }

    fn cube(&self, x: f64, y: f64, z: f64) -> BoxPrimitive {
        BoxPrimitive::cube(DVec3::new(x, y, z), CUBE_EDGE)
    }

    /// One row of cubes along x starting at the low edge, `width` wide.
    fn row(&self, out: &mut Vec<BoxPrimitive>, y: f64, z: f64, width: f64) {
        for x in arange(FOOTPRINT_MIN, FOOTPRINT_MIN + width, CUBE_EDGE) {
            out.push(self.cube(x, y, z));
        }
    }

    /// Solid layers covering the whole footprint.
    pub fn full_layers(&self, from: f64, to: f64) -> Vec<BoxPrimitive> {
        let mut cubes = Vec::new();
        for y in self.layers(from, to) {
            for x in arange(FOOTPRINT_MIN, -FOOTPRINT_MIN, CUBE_EDGE) {
                for z in arange(FOOTPRINT_MIN, -FOOTPRINT_MIN, CUBE_EDGE) {
                    cubes.push(self.cube(x, y, z));
                }
            }
        }
        cubes
    }

    /// Full-width rows for `z` in `[-8, -8 + depth)`. Nothing when the depth is
    /// used up.
    pub fn main_rectangle(&self, y: f64, depth: f64) -> Vec<BoxPrimitive> {
        let mut cubes = Vec::new();
        if depth > 0.0 {
            for x in arange(FOOTPRINT_MIN, -FOOTPRINT_MIN, CUBE_EDGE) {
                for z in arange(FOOTPRINT_MIN, FOOTPRINT_MIN + depth, CUBE_EDGE) {
                    cubes.push(self.cube(x, y, z));
                }
            }
        }
        cubes
    }

    /// Rows past the main rectangle up to the far edge, each one cube
    /// narrower than the last.
    pub fn fringe(&self, y: f64, depth: f64) -> Vec<BoxPrimitive> {
        let mut cubes = Vec::new();
        let start = FOOTPRINT_MIN + depth;
        for z in arange(start, -FOOTPRINT_MIN, CUBE_EDGE) {
            let width = BLOCK_SPAN - (z - start);
            if width > 0.0 {
                self.row(&mut cubes, y, z, width);
            }
        }
        cubes
    }

    /// Main rectangle followed by its fringe, for every layer in range.
    pub fn banded_layers(&self, from: f64, to: f64, slope: Slope) -> Vec<BoxPrimitive> {
        let mut cubes = Vec::new();
        for y in self.layers(from, to) {
            let depth = slope.depth_at(y);
            cubes.extend(self.main_rectangle(y, depth));
            cubes.extend(self.fringe(y, depth));
        }
        cubes
    }

    /// Fringe only: a right triangle whose legs are the slope depth.
    pub fn triangle_layers(&self, from: f64, to: f64, slope: Slope) -> Vec<BoxPrimitive> {
        let mut cubes = Vec::new();
        for y in self.layers(from, to) {
            let width = slope.depth_at(y);
            for z in arange(FOOTPRINT_MIN, FOOTPRINT_MIN + width, CUBE_EDGE) {
                self.row(&mut cubes, y, z, width - (z - FOOTPRINT_MIN));
            }
        }
        cubes
    }

    /// Same cells as [`banded_layers`](Self::banded_layers), emitted row by row
    /// from the low edge: full rows while inside the slope depth (plus one),
    /// then rows that narrow by one cube each.
    pub fn row_layers(&self, from: f64, to: f64, slope: Slope) -> Vec<BoxPrimitive> {
        let mut cubes = Vec::new();
        for y in self.layers(from, to) {
            let boundary = FOOTPRINT_MIN + slope.depth_at(y) + CUBE_EDGE;
            for z in arange(FOOTPRINT_MIN, -FOOTPRINT_MIN, CUBE_EDGE) {
                let width = if z >= boundary {
                    BLOCK_SPAN - CUBE_EDGE - (z - boundary)
                } else {
                    BLOCK_SPAN
                };
                self.row(&mut cubes, y, z, width);
            }
        }
        cubes
    }

    /// Rows of `2 * (16 - y - (z + 8))` cubes from the west edge, used by the
    /// first 45° part. Rows run past the footprint on +x.
    pub fn sloped_45(&self, from: f64, to: f64) -> Vec<BoxPrimitive> {
        let mut cubes = Vec::new();
        for y in self.layers(from, to) {
            for z in arange(FOOTPRINT_MIN, -FOOTPRINT_MIN - y, CUBE_EDGE) {
                let size_x = BLOCK_SPAN - y - (z - FOOTPRINT_MIN);
                if size_x > 0.0 {
                    self.doubled_row(&mut cubes, y, z, size_x);
                }
            }
        }
        cubes
    }

    /// Second 45° part: full doubled rows below a threshold that drops one row
    /// per layer, shrinking rows past it. The lowest two layers stay full.
    pub fn decreasing_45(&self, from: f64, to: f64) -> Vec<BoxPrimitive> {
        let mut cubes = Vec::new();
        for y in self.layers(from, to) {
            let threshold = BLOCK_SPAN - y + 1.0;
            for z in arange(0.0, BLOCK_SPAN, CUBE_EDGE) {
                let size_x = if z < threshold || y < 2.0 {
                    BLOCK_SPAN
                } else {
                    BLOCK_SPAN - (z - threshold + 1.0)
                };
                self.doubled_row(&mut cubes, y, z, size_x);
            }
        }
        cubes
    }

    /// `2 * size_x` cubes from x = -8.
    fn doubled_row(&self, out: &mut Vec<BoxPrimitive>, y: f64, z: f64, size_x: f64) {
        for offset in arange(0.0, size_x * 2.0, CUBE_EDGE) {
            out.push(self.cube(FOOTPRINT_MIN + offset, y, z));
        }
    }
}
