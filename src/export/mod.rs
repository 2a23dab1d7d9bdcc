//! Add-on document output.
//!
//! Ramp parts are written as a geometry document in the resource pack and one
//! or more block definitions in the behaviour pack:
//!
//! ```text
//! <root>/RP/models/blocks/<geometry id>.geo.json
//! <root>/BP/blocks/<directory>/<block id>.block.json
//! ```

pub mod block;
pub mod geometry;

pub use block::{block_specs, BlockFile, BlockSpec};
pub use geometry::GeometryFile;

use crate::error::Result;
use crate::synth::{RampPart, RampSet};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings shared by every written document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AddonConfig {
    pub format_version: String,
    /// Prefix of block identifiers (`<namespace>:<id>`).
    pub namespace: String,
    pub base_texture: String,
    pub marking_texture: String,
    pub render_method: String,
    pub map_color: String,
    pub menu_category: String,
    pub seconds_to_destroy: f64,
    pub explosion_resistance: f64,
}

impl Default for AddonConfig {
    fn default() -> Self {
        Self {
            format_version: "1.21.60".to_string(),
            namespace: "jct".to_string(),
            base_texture: "base_road".to_string(),
            marking_texture: "road_marking".to_string(),
            render_method: "alpha_test_single_sided".to_string(),
            map_color: "#353637".to_string(),
            menu_category: "construction".to_string(),
            seconds_to_destroy: 1.0,
            explosion_resistance: 30.0,
        }
    }
}

impl AddonConfig {
    /// Load from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_format_version(mut self, format_version: impl Into<String>) -> Self {
        self.format_version = format_version.into();
        self
    }
}

/// Files written by a batch, and the ones that could not be.
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    /// Path and error message of every failed file.
    pub failed: Vec<(PathBuf, String)>,
}

impl WriteReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn merge(&mut self, other: WriteReport) {
        self.written.extend(other.written);
        self.failed.extend(other.failed);
    }

    fn record(&mut self, path: PathBuf, result: Result<()>) {
        match result {
            Ok(()) => {
                info!("Wrote {}", path.display());
                self.written.push(path);
            }
            Err(e) => {
                warn!("Failed to write {}: {}", path.display(), e);
                self.failed.push((path, e.to_string()));
            }
        }
    }
}

/// Writes ramp parts below an output root.
#[derive(Debug, Clone)]
pub struct AddonWriter {
    root: PathBuf,
    config: AddonConfig,
}

impl AddonWriter {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self::with_config(root, AddonConfig::default())
    }

    pub fn with_config<P: Into<PathBuf>>(root: P, config: AddonConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    pub fn config(&self) -> &AddonConfig {
        &self.config
    }

    pub fn geometry_path(&self, part: &RampPart) -> PathBuf {
        self.root
            .join("RP")
            .join("models")
            .join("blocks")
            .join(format!("{}.geo.json", part.identifier))
    }

    pub fn block_path(&self, spec: &BlockSpec) -> PathBuf {
        self.root
            .join("BP")
            .join("blocks")
            .join(spec.directory)
            .join(format!("{}.block.json", spec.identifier))
    }

    /// Write the geometry and block files of one part.
    ///
    /// Failures are recorded in the report; the remaining files are still
    /// attempted.
    pub fn write_part(&self, part: &RampPart) -> WriteReport {
        let mut report = WriteReport::default();

        let path = self.geometry_path(part);
        let result = GeometryFile::for_part(part, &self.config.format_version)
            .to_json_string()
            .and_then(|json| write_file(&path, &json));
        report.record(path, result);

        for spec in block_specs(part) {
            let path = self.block_path(&spec);
            let result = BlockFile::for_part(part, &spec, &self.config)
                .to_json_string()
                .and_then(|json| write_file(&path, &json));
            report.record(path, result);
        }

        report
    }

    pub fn write_set(&self, set: &RampSet) -> WriteReport {
        let mut report = WriteReport::default();
        for part in &set.parts {
            report.merge(self.write_part(part));
        }
        report
    }

    pub fn write_all(&self, sets: &[RampSet]) -> WriteReport {
        let mut report = WriteReport::default();
        for set in sets {
            report.merge(self.write_set(set));
        }
        report
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::AngleClass;
    use crate::synth::RampSynthesizer;
    use tempfile::TempDir;

    fn set(class: AngleClass) -> RampSet {
        RampSynthesizer::new().synthesize(class).unwrap()
    }

    #[test]
    fn test_config_defaults_fill_missing_keys() {
        let config: AddonConfig = serde_json::from_str(r#"{"namespace": "roads"}"#).unwrap();
        assert_eq!(config.namespace, "roads");
        assert_eq!(config.format_version, "1.21.60");
        assert_eq!(config.explosion_resistance, 30.0);
    }

    #[test]
    fn test_config_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("addon.json");
        fs::write(&path, r##"{"map_color": "#000000", "seconds_to_destroy": 2}"##).unwrap();

        let config = AddonConfig::from_json_file(&path).unwrap();
        assert_eq!(config.map_color, "#000000");
        assert_eq!(config.seconds_to_destroy, 2.0);
        assert_eq!(config.base_texture, "base_road");

        assert!(AddonConfig::from_json_file(dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_write_straight_set() {
        let dir = TempDir::new().unwrap();
        let writer = AddonWriter::new(dir.path());
        let report = writer.write_set(&set(AngleClass::Straight { parts: 2 }));

        assert!(report.is_success());
        // two parts, each with one geometry and two blocks
        assert_eq!(report.written.len(), 6);

        let geo = dir.path().join("RP/models/blocks/road_ramp_22_5_part1.geo.json");
        let marking = dir
            .path()
            .join("BP/blocks/road_ramp_marking/road_ramp_marking_22_5_part2.block.json");
        assert!(geo.is_file());
        assert!(marking.is_file());

        let block: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(marking).unwrap()).unwrap();
        assert_eq!(
            block["minecraft:block"]["components"]["minecraft:geometry"],
            "geometry.road_ramp_22_5_part2"
        );
    }

    #[test]
    fn test_write_oblique_with_namespace() {
        let dir = TempDir::new().unwrap();
        let config = AddonConfig::default().with_namespace("roads");
        let writer = AddonWriter::with_config(dir.path(), config);
        let report = writer.write_all(&[set(AngleClass::Oblique22_5)]);

        assert!(report.is_success());
        assert_eq!(report.written.len(), 6);

        let path = dir
            .path()
            .join("BP/blocks/road_ramp_oblique/road_ramp_oblique_22_5_part3.block.json");
        let block: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(
            block["minecraft:block"]["description"]["identifier"],
            "roads:road_ramp_oblique_22_5_part3"
        );
    }

    #[test]
    fn test_failed_file_does_not_stop_batch() {
        let dir = TempDir::new().unwrap();
        // A file where the RP directory should be blocks every geometry write
        fs::write(dir.path().join("RP"), "").unwrap();

        let writer = AddonWriter::new(dir.path());
        let report = writer.write_set(&set(AngleClass::Straight { parts: 2 }));

        assert!(!report.is_success());
        assert_eq!(report.failed.len(), 2);
        assert_eq!(report.written.len(), 4);
        assert!(report
            .failed
            .iter()
            .all(|(path, _)| path.to_string_lossy().ends_with(".geo.json")));
    }
}
