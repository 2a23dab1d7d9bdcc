//! Face directions and the cardinal placement directions of a block.

use serde::Serialize;

/// The six face directions of a box, in the order faces are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
    Up,
    Down,
}

impl Direction {
    /// All six directions in order.
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    /// True for the four side faces.
    pub fn is_horizontal(&self) -> bool {
        !matches!(self, Direction::Up | Direction::Down)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Direction a placed block faces, taken from the player's facing on placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinal {
    North,
    South,
    East,
    West,
}

impl Cardinal {
    /// The order in which block permutations are written.
    pub const ALL: [Cardinal; 4] = [
        Cardinal::North,
        Cardinal::South,
        Cardinal::East,
        Cardinal::West,
    ];

    /// Y rotation in degrees applied to the geometry for this facing.
    ///
    /// Geometry is authored facing north, so east maps to 270 rather than 90.
    pub fn y_rotation(&self) -> i32 {
        match self {
            Cardinal::North => 0,
            Cardinal::South => 180,
            Cardinal::East => 270,
            Cardinal::West => 90,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cardinal::North => "north",
            Cardinal::South => "south",
            Cardinal::East => "east",
            Cardinal::West => "west",
        }
    }
}
