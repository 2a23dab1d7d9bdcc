//! # Ramp Mesher
//!
//! A Rust library for generating sloped road-ramp blocks out of cuboids.
//!
//! ## Overview
//!
//! A ramp climbs one block height over one or more blocks. Each block of the
//! ramp (a *part*) is described by an ordered list of axis-aligned boxes, a
//! collision height and a selection height. Straight ramps are stacks of thin
//! slabs; oblique ramps are tiled from small cubes.
//!
//! The library computes the boxes and writes them out as add-on documents: a
//! geometry file per part and block definitions that reference it.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ramp_mesher::{AddonWriter, AngleClass, RampSynthesizer};
//!
//! let synth = RampSynthesizer::new();
//! let sets = synth.synthesize_all(&AngleClass::DEFAULT_BATCH)?;
//!
//! let report = AddonWriter::new("out").write_all(&sets);
//! assert!(report.is_success());
//! ```
//!
//! ## Custom configuration
//!
//! ```ignore
//! use ramp_mesher::{AngleClass, RampSynthesizer, SynthConfig};
//!
//! // Merge oblique cubes into larger boxes
//! let synth = RampSynthesizer::with_config(SynthConfig::default().with_merge(true));
//! let set = synth.synthesize(AngleClass::Oblique11_25)?;
//! println!("{} boxes", set.total_boxes());
//! ```

pub mod angle;
pub mod error;
pub mod export;
pub mod synth;
pub mod types;

// Re-export main types for convenience
pub use angle::AngleClass;
pub use error::{RampError, Result};
pub use export::{AddonConfig, AddonWriter, WriteReport};
pub use synth::{RampPart, RampSet, RampSynthesizer, SynthConfig};
pub use types::{BoundingBox, BoxPrimitive, Cardinal, Direction};

/// Synthesize one angle class with the default configuration.
pub fn synthesize(class: AngleClass) -> Result<RampSet> {
    RampSynthesizer::new().synthesize(class)
}
