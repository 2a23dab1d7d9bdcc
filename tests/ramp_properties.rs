use std::collections::HashSet;

use ramp_mesher::angle::SUPPORTED_SUBDIVISIONS;
use ramp_mesher::export::GeometryFile;
use ramp_mesher::{AngleClass, BoundingBox, BoxPrimitive, RampSet, RampSynthesizer, SynthConfig};

type Cell = (i32, i32, i32);

fn synthesize(class: AngleClass) -> RampSet {
    RampSynthesizer::new().synthesize(class).unwrap()
}

/// Unit cells covered by integer-aligned boxes.
fn cells(boxes: &[BoxPrimitive]) -> Vec<Cell> {
    let mut out = Vec::new();
    for b in boxes {
        let (min, max) = (b.origin.as_ivec3(), b.max().as_ivec3());
        for x in min.x..max.x {
            for y in min.y..max.y {
                for z in min.z..max.z {
                    out.push((x, y, z));
                }
            }
        }
    }
    out
}

/// Cells of part `k` of an oblique class whose depth shrinks by `rate` per layer.
fn expected_oblique_cells(rate: i32, k: i32) -> HashSet<Cell> {
    let mut out = HashSet::new();
    for x in -8..8 {
        for y in 0..16 {
            for z in -8..8 {
                if (x + 8) + (z + 8) < 16 * k - rate * y {
                    out.insert((x, y, z));
                }
            }
        }
    }
    out
}

#[test]
fn oblique_parts_match_diagonal_cut() {
    for (class, rate) in [(AngleClass::Oblique22_5, 2), (AngleClass::Oblique11_25, 4)] {
        let set = synthesize(class);
        for part in &set.parts {
            let covered: HashSet<Cell> = cells(&part.boxes).into_iter().collect();
            assert_eq!(
                covered,
                expected_oblique_cells(rate, part.index as i32),
                "{}",
                part.identifier
            );
        }
    }
}

#[test]
fn oblique_columns_have_no_gaps() {
    for class in [AngleClass::Oblique22_5, AngleClass::Oblique11_25, AngleClass::Oblique45] {
        for part in synthesize(class).parts {
            let covered: HashSet<Cell> = cells(&part.boxes).into_iter().collect();
            for &(x, y, z) in &covered {
                if y > 0 {
                    assert!(
                        covered.contains(&(x, y - 1, z)),
                        "{}: gap below ({}, {}, {})",
                        part.identifier,
                        x,
                        y,
                        z
                    );
                }
            }
        }
    }
}

#[test]
fn oblique_cubes_never_overlap() {
    for class in [AngleClass::Oblique22_5, AngleClass::Oblique11_25, AngleClass::Oblique45] {
        for part in synthesize(class).parts {
            let all = cells(&part.boxes);
            let unique: HashSet<&Cell> = all.iter().collect();
            assert_eq!(all.len(), unique.len(), "{}", part.identifier);
            assert!(part.boxes.iter().all(|b| b.is_cube_of(1.0)));
        }
    }
}

#[test]
fn merged_parts_cover_the_same_cells() {
    let merging = RampSynthesizer::with_config(SynthConfig::default().with_merge(true));
    for class in [AngleClass::Oblique22_5, AngleClass::Oblique11_25, AngleClass::Oblique45] {
        let plain = synthesize(class);
        let merged = merging.synthesize(class).unwrap();
        for (a, b) in plain.parts.iter().zip(&merged.parts) {
            let merged_cells = cells(&b.boxes);
            let unique: HashSet<Cell> = merged_cells.iter().copied().collect();
            assert_eq!(merged_cells.len(), unique.len(), "{}", b.identifier);
            assert_eq!(
                unique,
                cells(&a.boxes).into_iter().collect::<HashSet<_>>(),
                "{}",
                b.identifier
            );
            assert!(b.box_count() <= a.box_count());
        }
    }
}

#[test]
fn straight_slabs_stack_without_gaps() {
    for parts in SUPPORTED_SUBDIVISIONS {
        let set = synthesize(AngleClass::Straight { parts });
        for part in &set.parts {
            let slabs = if part.index > 1 {
                let base = &part.boxes[0];
                assert_eq!(base.origin.y, 0.0);
                assert_eq!(base.size.y, part.boxes[1].origin.y);
                &part.boxes[1..]
            } else {
                &part.boxes[..]
            };

            for pair in slabs.windows(2) {
                let (lower, upper) = (&pair[0], &pair[1]);
                assert!((upper.origin.y - lower.max().y).abs() < 1e-6);
                assert!(upper.size.z < lower.size.z, "{}", part.identifier);
                assert_eq!(upper.size.x, 16.0);
            }
            let top = slabs.last().unwrap().max().y;
            assert!((top - part.y_start).abs() < 1e-6, "{}", part.identifier);
        }
    }
}

#[test]
fn straight_height_tracks_subdivision() {
    for parts in SUPPORTED_SUBDIVISIONS {
        let set = synthesize(AngleClass::Straight { parts });
        assert_eq!(set.parts.len(), parts as usize);

        let exact = matches!(parts, 1 | 2 | 4 | 8);
        let tolerance = if exact { 0.001 } else { 0.5 };
        let mut previous = 0.0;
        for part in &set.parts {
            let expected = 16.0 * part.index as f64 / parts as f64;
            assert!(
                (part.y_start - expected).abs() < tolerance,
                "{}: y_start {} expected {}",
                part.identifier,
                part.y_start,
                expected
            );
            assert!(part.y_start > previous);
            previous = part.y_start;
        }
    }
}

#[test]
fn heights_stay_within_one_block() {
    for class in AngleClass::all() {
        for part in synthesize(class).parts {
            assert!((0.0..=16.0).contains(&part.collision_height), "{}", part.identifier);
            assert!((0.0..=16.0).contains(&part.selection_height), "{}", part.identifier);
            assert!(part.selection_height >= part.collision_height);
        }
    }
}

#[test]
fn synthesis_is_deterministic() {
    for class in AngleClass::all() {
        let a = synthesize(class);
        let b = synthesize(class);
        assert_eq!(a, b);

        let render = |set: &RampSet| {
            set.parts
                .iter()
                .map(|p| GeometryFile::for_part(p, "1.21.60").to_json_string().unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(render(&a), render(&b));
    }
}

#[test]
fn half_slope_first_part() {
    let set = synthesize(AngleClass::Straight { parts: 2 });
    let part = &set.parts[0];
    assert_eq!(part.box_count(), 16);
    assert_eq!(part.y_start, 8.0);
    assert_eq!(part.collision_height, 8.0);
}

#[test]
fn steep_oblique_boundary_rows() {
    let set = synthesize(AngleClass::Oblique45);
    let part = &set.parts[0];

    let low_row = part
        .boxes
        .iter()
        .filter(|b| b.origin.y == 0.0 && b.origin.z == -8.0)
        .count();
    assert_eq!(low_row, 32);

    assert!(!part
        .boxes
        .iter()
        .any(|b| b.origin.y == 15.0 && b.origin.z == 0.0));
}

#[test]
fn oblique_cubes_sit_on_the_pixel_grid() {
    for class in [AngleClass::Oblique22_5, AngleClass::Oblique11_25, AngleClass::Oblique45] {
        for part in synthesize(class).parts {
            assert!(part.boxes.iter().all(|b| b.is_cube_of(1.0)
                && b.origin.to_array().iter().all(|v| v.fract() == 0.0)));

            let bounds = BoundingBox::from_boxes(&part.boxes).unwrap();
            assert!(bounds.min.x >= -8.0 && bounds.min.z >= -8.0, "{}", part.identifier);
            if class != AngleClass::Oblique45 {
                assert!(bounds.within_footprint(), "{}", part.identifier);
            }
        }
    }

    // rows of the steep ramp are consecutive cubes reaching past +x
    let part = &synthesize(AngleClass::Oblique45).parts[0];
    let row: Vec<f64> = part
        .boxes
        .iter()
        .filter(|b| b.origin.y == 0.0 && b.origin.z == -8.0)
        .map(|b| b.origin.x)
        .collect();
    let expected: Vec<f64> = (-8..24).map(f64::from).collect();
    assert_eq!(row, expected);
}
