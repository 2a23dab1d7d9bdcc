//! Geometry documents (`*.geo.json`).
//!
//! One document per ramp part: a single `block` bone holding the part's boxes.
//! Cubes are written one per line so that large parts stay diffable.

use crate::error::Result;
use crate::synth::RampPart;
use crate::types::{compact_array, BoxPrimitive};
use serde::Serialize;

/// Top-level geometry file.
#[derive(Debug, Clone, Serialize)]
pub struct GeometryFile {
    pub format_version: String,
    #[serde(rename = "minecraft:geometry")]
    pub geometry: Vec<Geometry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Geometry {
    pub description: GeometryDescription,
    pub item_display_transforms: ItemDisplayTransforms,
    pub bones: Vec<Bone>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeometryDescription {
    pub identifier: String,
    pub texture_width: u32,
    pub texture_height: u32,
    pub visible_bounds_width: u32,
    pub visible_bounds_height: u32,
    #[serde(serialize_with = "compact_array")]
    pub visible_bounds_offset: [f64; 3],
}

/// Display transforms; only the inventory icon angle is set.
#[derive(Debug, Clone, Serialize)]
pub struct ItemDisplayTransforms {
    pub gui: DisplayTransform,
}

#[derive(Debug, Clone, Serialize)]
pub struct DisplayTransform {
    pub rotation: [i32; 3],
}

#[derive(Debug, Clone, Serialize)]
pub struct Bone {
    pub name: String,
    pub pivot: [i32; 3],
    pub cubes: Vec<BoxPrimitive>,
}

impl GeometryFile {
    /// Geometry document for one ramp part.
    pub fn for_part(part: &RampPart, format_version: &str) -> Self {
        Self {
            format_version: format_version.to_string(),
            geometry: vec![Geometry {
                description: GeometryDescription {
                    identifier: format!("geometry.{}", part.identifier),
                    texture_width: 16,
                    texture_height: 16,
                    visible_bounds_width: 1,
                    visible_bounds_height: 1,
                    visible_bounds_offset: [0.0, 0.75, 0.0],
                },
                item_display_transforms: ItemDisplayTransforms {
                    gui: DisplayTransform {
                        rotation: [30, 45, 0],
                    },
                },
                bones: vec![Bone {
                    name: "block".to_string(),
                    pivot: [0, 0, 0],
                    cubes: part.boxes.clone(),
                }],
            }],
        }
    }

    /// Pretty JSON with every cube on its own line.
    pub fn to_json_string(&self) -> Result<String> {
        let mut value = serde_json::to_value(self)?;

        // Swap each bone's cubes for a placeholder, render, then splice the
        // compact cube lines back in.
        let mut bodies = Vec::new();
        if let Some(geometries) = value["minecraft:geometry"].as_array_mut() {
            for geometry in geometries {
                if let Some(bones) = geometry["bones"].as_array_mut() {
                    for bone in bones {
                        let placeholder = format!("@cubes{}@", bodies.len());
                        let cubes = std::mem::replace(
                            &mut bone["cubes"],
                            serde_json::Value::String(placeholder),
                        );
                        bodies.push(cubes);
                    }
                }
            }
        }

        let mut json = serde_json::to_string_pretty(&value)?;
        for (i, cubes) in bodies.iter().enumerate() {
            let placeholder = format!("\"@cubes{}@\"", i);
            let Some(at) = json.find(&placeholder) else {
                continue;
            };
            let line_start = json[..at].rfind('\n').map(|p| p + 1).unwrap_or(0);
            let indent: String = json[line_start..]
                .chars()
                .take_while(|c| *c == ' ')
                .collect();
            let inline = inline_array(cubes, &indent)?;
            json.replace_range(at..at + placeholder.len(), &inline);
        }
        Ok(json)
    }
}

/// Render an array with one compact element per line.
fn inline_array(items: &serde_json::Value, indent: &str) -> Result<String> {
    let items = match items.as_array() {
        Some(items) if !items.is_empty() => items,
        _ => return Ok("[]".to_string()),
    };
    let lines = items
        .iter()
        .map(|item| Ok(format!("{}  {}", indent, serde_json::to_string(item)?)))
        .collect::<Result<Vec<_>>>()?;
    Ok(format!("[\n{}\n{}]", lines.join(",\n"), indent))
}
