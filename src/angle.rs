//! Ramp angle classes and the identifiers derived from them.

use crate::error::{RampError, Result};
use std::fmt;
use std::str::FromStr;

/// Subdivision counts a straight ramp may be split into.
pub const SUPPORTED_SUBDIVISIONS: [u32; 6] = [1, 2, 3, 4, 6, 8];

/// A named incline configuration with its own part count and algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleClass {
    /// A 45° rise split into `parts` blocks of `45 / parts` degrees each.
    Straight { parts: u32 },
    /// Diagonal ramp at 11.25°, five parts.
    Oblique11_25,
    /// Diagonal ramp at 22.5°, three parts.
    Oblique22_5,
    /// Diagonal ramp at 45°, two parts.
    Oblique45,
}

impl AngleClass {
    /// The classes generated when no explicit selection is made.
    pub const DEFAULT_BATCH: [AngleClass; 7] = [
        AngleClass::Oblique22_5,
        AngleClass::Oblique11_25,
        AngleClass::Straight { parts: 2 },
        AngleClass::Straight { parts: 3 },
        AngleClass::Straight { parts: 4 },
        AngleClass::Straight { parts: 6 },
        AngleClass::Straight { parts: 8 },
    ];

    /// Every supported class.
    pub fn all() -> Vec<AngleClass> {
        let mut classes = vec![
            AngleClass::Oblique45,
            AngleClass::Oblique22_5,
            AngleClass::Oblique11_25,
        ];
        classes.extend(
            SUPPORTED_SUBDIVISIONS
                .iter()
                .map(|&parts| AngleClass::Straight { parts }),
        );
        classes
    }

    /// Create a straight class, rejecting subdivision counts the slab loop
    /// cannot handle.
    pub fn straight(parts: u32) -> Result<Self> {
        if SUPPORTED_SUBDIVISIONS.contains(&parts) {
            Ok(AngleClass::Straight { parts })
        } else {
            Err(RampError::InvalidSubdivisionCount(parts))
        }
    }

    /// Incline in degrees, rounded to three decimals.
    pub fn angle_degrees(&self) -> f64 {
        match self {
            AngleClass::Straight { parts } => crate::types::round3(45.0 / *parts as f64),
            AngleClass::Oblique11_25 => 11.25,
            AngleClass::Oblique22_5 => 22.5,
            AngleClass::Oblique45 => 45.0,
        }
    }

    /// Angle as used in identifiers: `22.5` becomes `22_5`, `45.0` becomes `45`.
    pub fn angle_token(&self) -> String {
        angle_token(self.angle_degrees())
    }

    pub fn part_count(&self) -> u32 {
        match self {
            AngleClass::Straight { parts } => *parts,
            AngleClass::Oblique11_25 => 5,
            AngleClass::Oblique22_5 => 3,
            AngleClass::Oblique45 => 2,
        }
    }

    /// Identifier of the geometry for a part (1-based).
    ///
    /// A straight ramp made of a single block has no part suffix.
    pub fn geometry_id(&self, part: u32) -> String {
        match self {
            AngleClass::Straight { parts } => {
                part_identifier("road_ramp", &self.angle_token(), (*parts > 1).then_some(part))
            }
            _ => part_identifier("road_ramp_oblique", &self.angle_token(), Some(part)),
        }
    }
}

impl fmt::Display for AngleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleClass::Straight { parts } => write!(f, "straight-{}", parts),
            _ => write!(f, "oblique-{}", self.angle_degrees()),
        }
    }
}

impl FromStr for AngleClass {
    type Err = RampError;

    /// Accepts `straight-N` (or `straight:N`) and `oblique-<angle>` where the
    /// angle may use `.` or `_` as separator.
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        let (kind, value) = lower
            .split_once(|c: char| c == '-' || c == ':')
            .ok_or_else(|| RampError::UnknownAngleClass(s.to_string()))?;

        match kind {
            "straight" => {
                let parts = value
                    .parse::<u32>()
                    .map_err(|_| RampError::UnknownAngleClass(s.to_string()))?;
                AngleClass::straight(parts)
            }
            "oblique" => match value.replace('_', ".").as_str() {
                "11.25" => Ok(AngleClass::Oblique11_25),
                "22.5" => Ok(AngleClass::Oblique22_5),
                "45" | "45.0" => Ok(AngleClass::Oblique45),
                _ => Err(RampError::UnknownAngleClass(s.to_string())),
            },
            _ => Err(RampError::UnknownAngleClass(s.to_string())),
        }
    }
}

/// Format an angle for identifiers.
pub fn angle_token(angle: f64) -> String {
    // Display already omits a trailing ".0"
    format!("{}", angle).replace('.', "_")
}

/// Build `{base}_{token}[_part{N}]`.
pub fn part_identifier(base: &str, token: &str, part: Option<u32>) -> String {
    match part {
        Some(n) => format!("{}_{}_part{}", base, token, n),
        None => format!("{}_{}", base, token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_tokens() {
        assert_eq!(angle_token(22.5), "22_5");
        assert_eq!(angle_token(45.0), "45");
        assert_eq!(angle_token(11.25), "11_25");

        let tokens: Vec<String> = SUPPORTED_SUBDIVISIONS
            .iter()
            .map(|&parts| AngleClass::Straight { parts }.angle_token())
            .collect();
        assert_eq!(tokens, vec!["45", "22_5", "15", "11_25", "7_5", "5_625"]);
    }

    #[test]
    fn test_geometry_ids() {
        assert_eq!(AngleClass::Straight { parts: 1 }.geometry_id(1), "road_ramp_45");
        assert_eq!(
            AngleClass::Straight { parts: 4 }.geometry_id(3),
            "road_ramp_11_25_part3"
        );
        assert_eq!(
            AngleClass::Oblique22_5.geometry_id(2),
            "road_ramp_oblique_22_5_part2"
        );
        assert_eq!(AngleClass::Oblique45.geometry_id(1), "road_ramp_oblique_45_part1");
    }

    #[test]
    fn test_part_counts() {
        assert_eq!(AngleClass::Oblique11_25.part_count(), 5);
        assert_eq!(AngleClass::Oblique22_5.part_count(), 3);
        assert_eq!(AngleClass::Oblique45.part_count(), 2);
        assert_eq!(AngleClass::Straight { parts: 6 }.part_count(), 6);
    }

    #[test]
    fn test_rejects_unsupported_subdivisions() {
        assert!(AngleClass::straight(4).is_ok());
        for parts in [0, 5, 7, 16] {
            assert!(matches!(
                AngleClass::straight(parts),
                Err(RampError::InvalidSubdivisionCount(p)) if p == parts
            ));
        }
    }

    #[test]
    fn test_parse_round_trips_display() {
        for class in AngleClass::all() {
            let parsed: AngleClass = class.to_string().parse().unwrap();
            assert_eq!(parsed, class);
        }
        assert_eq!("oblique-22_5".parse::<AngleClass>().unwrap(), AngleClass::Oblique22_5);
        assert_eq!(
            "Straight:8".parse::<AngleClass>().unwrap(),
            AngleClass::Straight { parts: 8 }
        );
        assert!(matches!(
            "straight-5".parse::<AngleClass>(),
            Err(RampError::InvalidSubdivisionCount(5))
        ));
        assert!(matches!(
            "diagonal".parse::<AngleClass>(),
            Err(RampError::UnknownAngleClass(_))
        ));
    }
}
