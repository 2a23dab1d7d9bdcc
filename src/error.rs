//! Error types for ramp synthesis and document output.

use thiserror::Error;

/// Result type alias using RampError.
pub type Result<T> = std::result::Result<T, RampError>;

/// Main error type for ramp generation.
#[derive(Error, Debug)]
pub enum RampError {
    /// Straight ramps only subdivide into counts that terminate the slab loop.
    #[error("Unsupported subdivision count: {0} (expected one of 1, 2, 3, 4, 6, 8)")]
    InvalidSubdivisionCount(u32),

    /// A box primitive with a zero, negative or non-finite extent was produced.
    #[error("Degenerate box in {part}: origin {origin:?}, size {size:?}")]
    DegenerateGeometry {
        part: String,
        origin: [f64; 3],
        size: [f64; 3],
    },

    /// Angle class name could not be parsed.
    #[error("Unknown angle class: {0}")]
    UnknownAngleClass(String),

    /// Failed to serialize or parse JSON data.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
