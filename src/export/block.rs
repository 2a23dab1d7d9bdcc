//! Block definition documents (`*.block.json`).
//!
//! Every ramp part is placed through one or more blocks that share its
//! geometry. Blocks carry the collision and selection boxes and rotate the
//! geometry to the facing chosen on placement.

use super::AddonConfig;
use crate::angle::{part_identifier, AngleClass};
use crate::synth::RampPart;
use crate::types::{compact_number, Cardinal, Coords, BLOCK_SPAN, FOOTPRINT_MIN};
use glam::DVec3;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Which blocks to emit for a part and where they go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSpec {
    /// Identifier without namespace.
    pub identifier: String,
    /// Subdirectory under `BP/blocks`.
    pub directory: &'static str,
    /// Paint the road marking texture on the top and the ends.
    pub marking: bool,
}

impl BlockSpec {
    fn new(identifier: String, directory: &'static str, marking: bool) -> Self {
        Self {
            identifier,
            directory,
            marking,
        }
    }
}

/// Blocks for a ramp part.
///
/// Straight parts get a plain base block and a marked variant; oblique parts
/// get a single block named after the geometry.
pub fn block_specs(part: &RampPart) -> Vec<BlockSpec> {
    match part.class {
        AngleClass::Straight { parts } => {
            let token = part.class.angle_token();
            let index = (parts > 1).then_some(part.index);
            vec![
                BlockSpec::new(
                    part_identifier("base_road_ramp", &token, index),
                    "base_road_ramp",
                    false,
                ),
                BlockSpec::new(
                    part_identifier("road_ramp_marking", &token, index),
                    "road_ramp_marking",
                    true,
                ),
            ]
        }
        _ => vec![BlockSpec::new(
            part.identifier.clone(),
            "road_ramp_oblique",
            false,
        )],
    }
}

/// Top-level block file.
#[derive(Debug, Clone, Serialize)]
pub struct BlockFile {
    pub format_version: String,
    #[serde(rename = "minecraft:block")]
    pub block: BlockDefinition,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlockDefinition {
    pub description: BlockDescription,
    pub components: BlockComponents,
    pub permutations: Vec<Permutation>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlockDescription {
    pub identifier: String,
    pub menu_category: MenuCategory,
    pub traits: BlockTraits,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuCategory {
    pub category: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlockTraits {
    #[serde(rename = "minecraft:placement_direction")]
    pub placement_direction: PlacementDirection,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlacementDirection {
    pub enabled_states: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlockComponents {
    #[serde(rename = "minecraft:collision_box")]
    pub collision_box: BoxComponent,
    #[serde(rename = "minecraft:selection_box")]
    pub selection_box: BoxComponent,
    #[serde(rename = "minecraft:destructible_by_mining")]
    pub destructible_by_mining: DestructibleByMining,
    #[serde(rename = "minecraft:destructible_by_explosion")]
    pub destructible_by_explosion: DestructibleByExplosion,
    #[serde(rename = "minecraft:geometry")]
    pub geometry: String,
    #[serde(rename = "minecraft:material_instances")]
    pub material_instances: MaterialInstances,
    #[serde(rename = "minecraft:map_color")]
    pub map_color: String,
}

/// Full-footprint box of the given height.
#[derive(Debug, Clone, Serialize)]
pub struct BoxComponent {
    origin: Coords,
    size: Coords,
}

impl BoxComponent {
    pub fn with_height(height: f64) -> Self {
        Self {
            origin: Coords(DVec3::new(FOOTPRINT_MIN, 0.0, FOOTPRINT_MIN)),
            size: Coords(DVec3::new(BLOCK_SPAN, height, BLOCK_SPAN)),
        }
    }

    pub fn height(&self) -> f64 {
        self.size.0.y
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DestructibleByMining {
    #[serde(serialize_with = "compact_number")]
    pub seconds_to_destroy: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DestructibleByExplosion {
    #[serde(serialize_with = "compact_number")]
    pub explosion_resistance: f64,
}

/// A face material, or the name of another instance to reuse.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MaterialInstance {
    Material {
        texture: String,
        render_method: String,
    },
    Alias(String),
}

/// Material instances keyed by face or instance name, written in insertion
/// order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaterialInstances(Vec<(String, MaterialInstance)>);

impl MaterialInstances {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an instance, replacing an existing one of the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, instance: MaterialInstance) {
        let name = name.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = instance,
            None => self.0.push((name, instance)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&MaterialInstance> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, instance)| instance)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for MaterialInstances {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, instance) in &self.0 {
            map.serialize_entry(name, instance)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Permutation {
    pub condition: String,
    pub components: PermutationComponents,
}

#[derive(Debug, Clone, Serialize)]
pub struct PermutationComponents {
    #[serde(rename = "minecraft:transformation")]
    pub transformation: Transformation,
}

#[derive(Debug, Clone, Serialize)]
pub struct Transformation {
    pub rotation: [i32; 3],
}

const CARDINAL_STATE: &str = "minecraft:cardinal_direction";

impl BlockFile {
    /// Block document for one block variant of a ramp part.
    pub fn for_part(part: &RampPart, spec: &BlockSpec, config: &AddonConfig) -> Self {
        Self {
            format_version: config.format_version.clone(),
            block: BlockDefinition {
                description: BlockDescription {
                    identifier: format!("{}:{}", config.namespace, spec.identifier),
                    menu_category: MenuCategory {
                        category: config.menu_category.clone(),
                    },
                    traits: BlockTraits {
                        placement_direction: PlacementDirection {
                            enabled_states: vec![CARDINAL_STATE.to_string()],
                        },
                    },
                },
                components: BlockComponents {
                    collision_box: BoxComponent::with_height(part.collision_height),
                    selection_box: BoxComponent::with_height(part.selection_height),
                    destructible_by_mining: DestructibleByMining {
                        seconds_to_destroy: config.seconds_to_destroy,
                    },
                    destructible_by_explosion: DestructibleByExplosion {
                        explosion_resistance: config.explosion_resistance,
                    },
                    geometry: format!("geometry.{}", part.identifier),
                    material_instances: material_instances(config, spec.marking),
                    map_color: config.map_color.clone(),
                },
                permutations: Cardinal::ALL.iter().map(permutation).collect(),
            },
        }
    }

    pub fn to_json_string(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn material_instances(config: &AddonConfig, marking: bool) -> MaterialInstances {
    let material = |texture: &str| MaterialInstance::Material {
        texture: texture.to_string(),
        render_method: config.render_method.clone(),
    };

    let mut instances = MaterialInstances::new();
    instances.insert("*", material(&config.base_texture));
    if marking {
        instances.insert("up", material(&config.marking_texture));
        instances.insert("marking", material(&config.marking_texture));
        for face in ["north", "south"] {
            instances.insert(face, MaterialInstance::Alias("marking".to_string()));
        }
    }
    instances
}

fn permutation(cardinal: &Cardinal) -> Permutation {
    Permutation {
        condition: format!(
            "q.block_state('{}') == '{}'",
            CARDINAL_STATE,
            cardinal.name()
        ),
        components: PermutationComponents {
            transformation: Transformation {
                rotation: [0, cardinal.y_rotation(), 0],
            },
        },
    }
}
