//! Shared types used throughout the library.

mod direction;

pub use direction::{Cardinal, Direction};

use glam::DVec3;
use serde::ser::{SerializeMap, SerializeStruct, SerializeTuple};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Lowest x/z coordinate of the block footprint.
pub const FOOTPRINT_MIN: f64 = -8.0;
/// Width and depth of the block footprint, also the height of one full block.
pub const BLOCK_SPAN: f64 = 16.0;
/// Collision and selection boxes never exceed one block.
pub const MAX_BOX_HEIGHT: f64 = 16.0;

/// Round to three decimal places.
///
/// Straight ramps apply this after every addition so that drift never
/// accumulates across slabs.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// UV rectangle of one face, in texture pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FaceUv {
    pub uv: [u32; 2],
    pub uv_size: [u32; 2],
}

impl FaceUv {
    pub const fn new(uv: [u32; 2], uv_size: [u32; 2]) -> Self {
        Self { uv, uv_size }
    }
}

/// Per-face UV mapping of a box.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoxUv {
    faces: BTreeMap<Direction, FaceUv>,
}

impl BoxUv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Road surface mapping: a one-pixel strip of the texture's bottom row on
    /// the sides, the whole texture on top and bottom.
    pub fn road_slab() -> Self {
        let side = FaceUv::new([0, 15], [16, 1]);
        let cap = FaceUv::new([0, 0], [16, 16]);
        Direction::ALL
            .iter()
            .fold(Self::new(), |uv, &dir| {
                uv.with_face(dir, if dir.is_horizontal() { side } else { cap })
            })
    }

    pub fn with_face(mut self, direction: Direction, face: FaceUv) -> Self {
        self.faces.insert(direction, face);
        self
    }

    pub fn face(&self, direction: Direction) -> Option<&FaceUv> {
        self.faces.get(&direction)
    }
}

impl Serialize for BoxUv {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.faces.len()))?;
        for (direction, face) in &self.faces {
            map.serialize_entry(direction, face)?;
        }
        map.end()
    }
}

/// An axis-aligned cuboid: minimum corner plus positive extents.
///
/// Coordinates are block-local pixels. The footprint spans [-8, 8) on x and z,
/// y starts at 0.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPrimitive {
    pub origin: DVec3,
    pub size: DVec3,
    pub uv: Option<BoxUv>,
}

impl BoxPrimitive {
    pub fn new(origin: DVec3, size: DVec3) -> Self {
        Self {
            origin,
            size,
            uv: None,
        }
    }

    /// A cube with the given edge length.
    pub fn cube(origin: DVec3, edge: f64) -> Self {
        Self::new(origin, DVec3::splat(edge))
    }

    pub fn with_uv(mut self, uv: BoxUv) -> Self {
        self.uv = Some(uv);
        self
    }

    /// Maximum corner.
    pub fn max(&self) -> DVec3 {
        self.origin + self.size
    }

    pub fn volume(&self) -> f64 {
        self.size.x * self.size.y * self.size.z
    }

    /// True if any extent is zero, negative or not finite.
    pub fn is_degenerate(&self) -> bool {
        !self.size.is_finite() || !self.origin.is_finite() || self.size.min_element() <= 0.0
    }

    /// True if both boxes share interior volume. Touching faces do not count.
    pub fn overlaps(&self, other: &BoxPrimitive) -> bool {
        let (a_min, a_max) = (self.origin, self.max());
        let (b_min, b_max) = (other.origin, other.max());
        (0..3).all(|i| a_min[i] < b_max[i] && b_min[i] < a_max[i])
    }

    /// True if the box is a cube of the given edge length.
    pub fn is_cube_of(&self, edge: f64) -> bool {
        self.size == DVec3::splat(edge)
    }
}

impl Serialize for BoxPrimitive {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = if self.uv.is_some() { 3 } else { 2 };
        let mut state = serializer.serialize_struct("BoxPrimitive", fields)?;
        state.serialize_field("origin", &Coords(self.origin))?;
        state.serialize_field("size", &Coords(self.size))?;
        if let Some(uv) = &self.uv {
            state.serialize_field("uv", uv)?;
        }
        state.end()
    }
}

/// Serializes a vector as `[x, y, z]`, writing whole numbers without a
/// fractional part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Coords(pub DVec3);

impl Serialize for Coords {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        compact_array(&self.0.to_array(), serializer)
    }
}

/// A number that drops its fractional part when whole.
struct Compact(f64);

impl Serialize for Compact {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 && self.0.abs() < 1e15 {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

/// `serialize_with` helper writing `1.0` as `1`.
pub(crate) fn compact_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    Compact(*value).serialize(serializer)
}

/// `serialize_with` helper for a triple of compact numbers.
pub(crate) fn compact_array<S: Serializer>(
    values: &[f64; 3],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut tuple = serializer.serialize_tuple(3)?;
    for value in values {
        tuple.serialize_element(&Compact(*value))?;
    }
    tuple.end()
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: DVec3,
    pub max: DVec3,
}

impl BoundingBox {
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Smallest box enclosing all primitives, or `None` for an empty list.
    pub fn from_boxes<'a>(boxes: impl IntoIterator<Item = &'a BoxPrimitive>) -> Option<Self> {
        boxes.into_iter().fold(None, |acc, b| {
            Some(match acc {
                None => Self::new(b.origin, b.max()),
                Some(bb) => Self::new(bb.min.min(b.origin), bb.max.max(b.max())),
            })
        })
    }

    pub fn dimensions(&self) -> DVec3 {
        self.max - self.min
    }

    /// True if the box stays within the [-8, 8) x/z footprint.
    pub fn within_footprint(&self) -> bool {
        let limit = FOOTPRINT_MIN + BLOCK_SPAN;
        self.min.x >= FOOTPRINT_MIN
            && self.min.z >= FOOTPRINT_MIN
            && self.max.x <= limit
            && self.max.z <= limit
    }
}
