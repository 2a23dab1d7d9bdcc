//! Greedy merging of unit cubes into larger boxes.
//!
//! Oblique parts are emitted as thousands of identical cubes. Merging scans
//! each layer for maximal rectangles (expand along x, then along z), then
//! stacks identical rectangles of consecutive layers into taller boxes. The
//! covered cell set is unchanged.

use super::layers::CUBE_EDGE;
use crate::types::BoxPrimitive;
use glam::DVec3;
use std::collections::{BTreeMap, BTreeSet};

/// A merged rectangle in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Rect {
    z: i64,
    x: i64,
    depth: i64,
    width: i64,
}

/// Merge unit cubes into larger boxes. Boxes of any other size are passed
/// through unchanged, ahead of the merged ones.
pub fn merge_cubes(boxes: &[BoxPrimitive]) -> Vec<BoxPrimitive> {
    let cell = |v: f64| v.round() as i64;

    let mut passthrough = Vec::new();
    let mut layers: BTreeMap<i64, BTreeSet<(i64, i64)>> = BTreeMap::new();
    for b in boxes {
        if b.is_cube_of(CUBE_EDGE) {
            layers
                .entry(cell(b.origin.y))
                .or_default()
                .insert((cell(b.origin.z), cell(b.origin.x)));
        } else {
            passthrough.push(b.clone());
        }
    }

    // Open columns keyed by rectangle: (bottom layer, height in layers)
    let mut open: BTreeMap<Rect, (i64, i64)> = BTreeMap::new();
    let mut closed: Vec<(Rect, i64, i64)> = Vec::new();

    for (&y, cells) in &layers {
        let rects = merge_layer(cells);
        let (continued, ended): (Vec<_>, Vec<_>) = std::mem::take(&mut open)
            .into_iter()
            .partition(|(rect, (bottom, height))| bottom + height == y && rects.contains(rect));
        closed.extend(ended.into_iter().map(|(rect, (bottom, height))| (rect, bottom, height)));
        open = continued.into_iter().collect();

        for rect in rects {
            open.entry(rect)
                .and_modify(|(_, height)| *height += 1)
                .or_insert((y, 1));
        }
    }
    closed.extend(open.into_iter().map(|(rect, (bottom, height))| (rect, bottom, height)));
    closed.sort_by_key(|(rect, bottom, _)| (*bottom, *rect));

    passthrough.extend(closed.into_iter().map(|(rect, bottom, height)| {
        BoxPrimitive::new(
            DVec3::new(rect.x as f64, bottom as f64, rect.z as f64) * CUBE_EDGE,
            DVec3::new(rect.width as f64, height as f64, rect.depth as f64) * CUBE_EDGE,
        )
    }));
    passthrough
}

/// Cover one layer's cells with maximal rectangles, scanning rows in z order.
fn merge_layer(cells: &BTreeSet<(i64, i64)>) -> BTreeSet<Rect> {
    let mut visited: BTreeSet<(i64, i64)> = BTreeSet::new();
    let mut rects = BTreeSet::new();

    for &(z, x) in cells {
        if visited.contains(&(z, x)) {
            continue;
        }

        // Expand along x
        let mut width = 1;
        while cells.contains(&(z, x + width)) && !visited.contains(&(z, x + width)) {
            width += 1;
        }

        // Expand along z while the whole row is free
        let mut depth = 1;
        while (0..width).all(|dx| {
            let c = (z + depth, x + dx);
            cells.contains(&c) && !visited.contains(&c)
        }) {
            depth += 1;
        }

        for dz in 0..depth {
            for dx in 0..width {
                visited.insert((z + dz, x + dx));
            }
        }
        rects.insert(Rect { z, x, depth, width });
    }

    rects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::layers::LayerTiler;

    fn cells(boxes: &[BoxPrimitive]) -> BTreeSet<(i64, i64, i64)> {
        let mut out = BTreeSet::new();
        for b in boxes {
            let min = b.origin.round().as_i64vec3();
            let max = b.max().round().as_i64vec3();
            for x in min.x..max.x {
                for y in min.y..max.y {
                    for z in min.z..max.z {
                        out.insert((x, y, z));
                    }
                }
            }
        }
        out
    }

    #[test]
    fn test_full_layers_collapse_to_one_box() {
        let cubes = LayerTiler::default().full_layers(0.0, 3.0);
        let merged = merge_cubes(&cubes);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].origin, DVec3::new(-8.0, 0.0, -8.0));
        assert_eq!(merged[0].size, DVec3::new(16.0, 4.0, 16.0));
    }

    #[test]
    fn test_merge_preserves_cells() {
        let tiler = LayerTiler::default();
        let cubes = tiler.triangle_layers(0.0, 3.0, crate::synth::layers::Slope::new(4.0, 0.0));
        let merged = merge_cubes(&cubes);

        assert!(merged.len() < cubes.len());
        assert_eq!(cells(&merged), cells(&cubes));
        for (i, a) in merged.iter().enumerate() {
            for b in &merged[i + 1..] {
                assert!(!a.overlaps(b));
            }
        }
    }

    #[test]
    fn test_non_cubes_pass_through() {
        let slab = BoxPrimitive::new(DVec3::new(-8.0, 0.0, -8.0), DVec3::new(16.0, 0.5, 16.0));
        let cube = BoxPrimitive::cube(DVec3::new(0.0, 0.0, 0.0), 1.0);
        let merged = merge_cubes(&[cube.clone(), slab.clone()]);
        assert_eq!(merged, vec![slab, cube]);
    }
}
