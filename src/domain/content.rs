//! Material content - named materials mapped to cell templates and heat rows.
//!
//! The registry pairs a heat profile table with a material list. The built-in
//! set covers the base sandbox; a JSON bundle can replace both, following the
//! same load path the UI uses for content packs. Registration order fixes
//! heat profile index assignment, so bundles reference profiles by key and
//! get indices resolved at load time.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::cell::{
    compose_powder_type, compose_solid_type, compose_type, is_powder_class, is_solid_class, Cell,
    AMBIENT_TEMPERATURE, BH_ENTITY, BH_FIRE, BH_FIRE_SOURCE, BH_GRASS, BH_LEAF, BH_LIQUID,
    BH_METEOR, BH_NONE, BH_ROOT, BH_SOIL, BH_TRUNK, CLASS_EFFECT, CLASS_EMPTY, CLASS_FLUID,
    CLASS_GAS, CLASS_POWDER_DRY, CLASS_POWDER_FLOAT, CLASS_POWDER_WET, CLASS_SOLID, SP_MOLTEN,
    SP_OIL, SP_WATER,
};
use crate::domain::heat::{HeatProfile, HeatProfileTable, HeatProfileTableBuilder, HEAT_PROFILE_COUNT};

pub type MaterialId = u8;

// === Built-in heat profile indices (registration order) ===

pub const HP_AIR: u8 = 0;
pub const HP_SOIL: u8 = 1;
pub const HP_STONE: u8 = 2;
pub const HP_WATER: u8 = 3;
pub const HP_OIL: u8 = 4;
pub const HP_MOLTEN: u8 = 5;
pub const HP_WOOD: u8 = 6;
pub const HP_PLANT: u8 = 7;
pub const HP_METAL: u8 = 8;
pub const HP_FIRE: u8 = 9;

// === Built-in material ids ===

pub const MAT_AIR: MaterialId = 0;
pub const MAT_SAND: MaterialId = 1;
pub const MAT_SOIL: MaterialId = 2;
pub const MAT_MUD: MaterialId = 3;
pub const MAT_STONE: MaterialId = 4;
pub const MAT_METAL: MaterialId = 5;
pub const MAT_GRASS: MaterialId = 6;
pub const MAT_TRUNK: MaterialId = 7;
pub const MAT_ROOT: MaterialId = 8;
pub const MAT_LEAF: MaterialId = 9;
pub const MAT_WATER: MaterialId = 10;
pub const MAT_OIL: MaterialId = 11;
pub const MAT_MOLTEN_ROCK: MaterialId = 12;
pub const MAT_FIRE: MaterialId = 13;
pub const MAT_FIRE_SOURCE: MaterialId = 14;
pub const MAT_METEOR: MaterialId = 15;
pub const MAT_SMOKE: MaterialId = 16;
pub const MAT_ASH: MaterialId = 17;

/// One named material: the cell template painting produces.
#[derive(Clone, Debug)]
pub struct MaterialDef {
    pub key: String,
    pub type_class: u8,
    pub behavior: u8,
    pub special: u8,
    pub heat_profile: u8,
    pub spawn_temperature: u8,
    pub hidden: bool,
}

impl MaterialDef {
    /// Compose the packed cell a fresh paint of this material writes.
    /// Modifier bits (sliding, momentum, body id) start zeroed - they are
    /// runtime state owned by the rule engine, not content.
    pub fn template_cell(&self) -> Cell {
        let type_byte = if is_powder_class(self.type_class) {
            compose_powder_type(self.type_class, false, 0, 0)
        } else if is_solid_class(self.type_class) {
            compose_solid_type(self.type_class, false, 0)
        } else {
            compose_type(self.type_class)
        };
        Cell::encode(
            type_byte,
            self.behavior,
            self.special,
            self.heat_profile,
            self.spawn_temperature,
        )
    }
}

#[derive(Clone)]
pub struct MaterialRegistry {
    heat_profiles: HeatProfileTable,
    materials: Vec<MaterialDef>,
    key_to_id: HashMap<String, MaterialId>,
}

impl MaterialRegistry {
    /// The base content set.
    pub fn from_builtin() -> Self {
        let mut b = HeatProfileTableBuilder::new();

        let hp_air = b.register(HeatProfile::inert());
        let hp_soil = b.register(HeatProfile {
            conductive_index: 0.2,
            heat_loss_chance: 40,
            ..HeatProfile::inert()
        });
        let hp_stone = b.register(HeatProfile {
            conductive_index: 0.35,
            melting_point: 235,
            melting_target: HP_MOLTEN,
            ..HeatProfile::inert()
        });
        let hp_water = b.register(HeatProfile {
            conductive_index: 0.6,
            heat_loss_chance: 120,
            ..HeatProfile::inert()
        });
        let hp_oil = b.register(HeatProfile {
            conductive_index: 0.3,
            flammability_chance: 4500,
            self_ignition_chance: 5,
            flame_heat: 180,
            burn_down_chance: 60,
            ..HeatProfile::inert()
        });
        let hp_molten = b.register(HeatProfile {
            conductive_index: 0.5,
            heat_loss_chance: 15,
            flame_heat: 220,
            hardening_point: 120,
            hardening_target: HP_STONE,
            ..HeatProfile::inert()
        });
        let hp_wood = b.register(HeatProfile {
            conductive_index: 0.15,
            flammability_chance: 2200,
            self_ignition_chance: 8,
            flame_heat: 150,
            burn_down_chance: 35,
            ..HeatProfile::inert()
        });
        let hp_plant = b.register(HeatProfile {
            conductive_index: 0.2,
            flammability_chance: 9000,
            self_ignition_chance: 20,
            flame_heat: 120,
            burn_down_chance: 160,
            ..HeatProfile::inert()
        });
        let hp_metal = b.register(HeatProfile {
            conductive_index: 0.9,
            melting_point: 250,
            melting_target: HP_MOLTEN,
            ..HeatProfile::inert()
        });
        let hp_fire = b.register(HeatProfile {
            conductive_index: 0.8,
            heat_loss_chance: 300,
            flame_heat: 240,
            burn_down_chance: 700,
            ..HeatProfile::inert()
        });

        debug_assert_eq!(
            [hp_air, hp_soil, hp_stone, hp_water, hp_oil, hp_molten, hp_wood, hp_plant, hp_metal, hp_fire],
            [HP_AIR, HP_SOIL, HP_STONE, HP_WATER, HP_OIL, HP_MOLTEN, HP_WOOD, HP_PLANT, HP_METAL, HP_FIRE]
        );

        let defs = [
            ("base:air", CLASS_EMPTY, BH_NONE, 0, HP_AIR, AMBIENT_TEMPERATURE, true),
            ("base:sand", CLASS_POWDER_DRY, BH_NONE, 0, HP_SOIL, AMBIENT_TEMPERATURE, false),
            ("base:soil", CLASS_POWDER_DRY, BH_SOIL, 0, HP_SOIL, AMBIENT_TEMPERATURE, false),
            ("base:mud", CLASS_POWDER_WET, BH_SOIL, 0, HP_SOIL, AMBIENT_TEMPERATURE, false),
            ("base:stone", CLASS_SOLID, BH_NONE, 0, HP_STONE, AMBIENT_TEMPERATURE, false),
            ("base:metal", CLASS_SOLID, BH_NONE, 0, HP_METAL, AMBIENT_TEMPERATURE, false),
            ("base:grass", CLASS_SOLID, BH_GRASS, 0, HP_PLANT, AMBIENT_TEMPERATURE, false),
            ("base:trunk", CLASS_SOLID, BH_TRUNK, 0, HP_WOOD, AMBIENT_TEMPERATURE, false),
            ("base:root", CLASS_SOLID, BH_ROOT, 0, HP_WOOD, AMBIENT_TEMPERATURE, false),
            ("base:leaf", CLASS_SOLID, BH_LEAF, 0, HP_PLANT, AMBIENT_TEMPERATURE, false),
            ("base:water", CLASS_FLUID, BH_LIQUID, SP_WATER, HP_WATER, AMBIENT_TEMPERATURE, false),
            ("base:oil", CLASS_FLUID, BH_LIQUID, SP_OIL, HP_OIL, AMBIENT_TEMPERATURE, false),
            ("base:molten_rock", CLASS_FLUID, BH_LIQUID, SP_MOLTEN, HP_MOLTEN, 255, false),
            ("base:fire", CLASS_EFFECT, BH_FIRE, 0, HP_FIRE, 240, false),
            ("base:fire_source", CLASS_SOLID, BH_FIRE_SOURCE, 0, HP_FIRE, 240, false),
            ("base:meteor", CLASS_EFFECT, BH_METEOR, 0, HP_FIRE, 255, false),
            ("base:smoke", CLASS_GAS, BH_NONE, 0, HP_AIR, 120, false),
            ("base:ash", CLASS_POWDER_FLOAT, BH_NONE, 0, HP_SOIL, AMBIENT_TEMPERATURE, false),
        ];

        let mut materials = Vec::with_capacity(defs.len());
        let mut key_to_id = HashMap::new();
        for (key, type_class, behavior, special, heat_profile, spawn_temperature, hidden) in defs {
            let id = materials.len() as MaterialId;
            key_to_id.insert(key.to_string(), id);
            materials.push(MaterialDef {
                key: key.to_string(),
                type_class,
                behavior,
                special,
                heat_profile,
                spawn_temperature,
                hidden,
            });
        }

        MaterialRegistry {
            heat_profiles: b.build(),
            materials,
            key_to_id,
        }
    }

    /// Load a content bundle, replacing both profiles and materials.
    pub fn from_bundle_json(json: &str) -> Result<Self, String> {
        let bundle: BundleRoot = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Self::from_bundle(bundle)
    }

    fn from_bundle(bundle: BundleRoot) -> Result<Self, String> {
        if bundle.profiles.len() > HEAT_PROFILE_COUNT {
            return Err(format!(
                "bundle declares {} heat profiles, table holds {}",
                bundle.profiles.len(),
                HEAT_PROFILE_COUNT
            ));
        }
        if bundle.materials.is_empty() {
            return Err("bundle declares no materials".to_string());
        }
        if bundle.materials.len() > MaterialId::MAX as usize + 1 {
            return Err(format!(
                "bundle declares {} materials, ids are 8-bit",
                bundle.materials.len()
            ));
        }

        // First pass: assign profile indices by declaration order.
        let mut profile_index: HashMap<&str, u8> = HashMap::new();
        for (i, p) in bundle.profiles.iter().enumerate() {
            if profile_index.insert(p.key.as_str(), i as u8).is_some() {
                return Err(format!("duplicate heat profile key '{}'", p.key));
            }
        }
        let resolve_profile = |key: &Option<String>, fallback: u8| -> Result<u8, String> {
            match key {
                Some(k) => profile_index
                    .get(k.as_str())
                    .copied()
                    .ok_or_else(|| format!("unknown heat profile key '{k}'")),
                None => Ok(fallback),
            }
        };

        // Second pass: build rows with melt/harden targets resolved.
        let mut b = HeatProfileTableBuilder::new();
        for (i, p) in bundle.profiles.iter().enumerate() {
            let inert = HeatProfile::inert();
            b.register(HeatProfile {
                conductive_index: p.conductive_index.unwrap_or(inert.conductive_index),
                heat_loss_chance: p.heat_loss_chance.unwrap_or(0),
                flammability_chance: p.flammability_chance.unwrap_or(0),
                self_ignition_chance: p.self_ignition_chance.unwrap_or(0),
                flame_heat: p.flame_heat.unwrap_or(0),
                burn_down_chance: p.burn_down_chance.unwrap_or(0),
                melting_point: p.melting_point.unwrap_or(inert.melting_point),
                melting_target: resolve_profile(&p.melting_target, i as u8)?,
                hardening_point: p.hardening_point.unwrap_or(inert.hardening_point),
                hardening_target: resolve_profile(&p.hardening_target, i as u8)?,
            });
        }

        let mut materials = Vec::with_capacity(bundle.materials.len());
        let mut key_to_id = HashMap::new();
        for m in &bundle.materials {
            let id = materials.len() as MaterialId;
            if key_to_id.insert(m.key.clone(), id).is_some() {
                return Err(format!("duplicate material key '{}'", m.key));
            }
            let type_class = class_from_name(&m.class)?;
            materials.push(MaterialDef {
                key: m.key.clone(),
                type_class,
                behavior: behavior_from_name(m.behavior.as_deref().unwrap_or("none"))?,
                special: m.special.unwrap_or(0) & 0xF,
                heat_profile: resolve_profile(&m.profile, HP_AIR)?,
                spawn_temperature: m.temperature.unwrap_or(AMBIENT_TEMPERATURE),
                hidden: m.hidden.unwrap_or(type_class == CLASS_EMPTY),
            });
        }

        Ok(MaterialRegistry {
            heat_profiles: b.build(),
            materials,
            key_to_id,
        })
    }

    pub fn heat_profiles(&self) -> &HeatProfileTable {
        &self.heat_profiles
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn is_valid_material_id(&self, id: MaterialId) -> bool {
        (id as usize) < self.materials.len()
    }

    pub fn material(&self, id: MaterialId) -> Option<&MaterialDef> {
        self.materials.get(id as usize)
    }

    pub fn id_by_key(&self, key: &str) -> Option<MaterialId> {
        self.key_to_id.get(key).copied()
    }

    pub fn template_cell(&self, id: MaterialId) -> Option<Cell> {
        self.material(id).map(MaterialDef::template_cell)
    }

    /// JSON manifest for the UI palette.
    pub fn manifest_json(&self) -> String {
        let entries: Vec<ManifestEntry> = self
            .materials
            .iter()
            .enumerate()
            .map(|(id, m)| {
                let mut it = m.key.splitn(2, ':');
                let pack = it.next().map(|s| s.to_string());
                let name = it.next().map(|s| s.to_string());
                ManifestEntry {
                    id: id as MaterialId,
                    key: m.key.clone(),
                    pack,
                    name,
                    class: m.type_class,
                    behavior: m.behavior,
                    profile: m.heat_profile,
                    hidden: m.hidden,
                }
            })
            .collect();
        serde_json::to_string(&entries).unwrap_or_else(|_| "[]".to_string())
    }
}

fn class_from_name(name: &str) -> Result<u8, String> {
    match name {
        "empty" => Ok(CLASS_EMPTY),
        "effect" => Ok(CLASS_EFFECT),
        "gas" => Ok(CLASS_GAS),
        "floating_powder" => Ok(CLASS_POWDER_FLOAT),
        "fluid" => Ok(CLASS_FLUID),
        "powder" => Ok(CLASS_POWDER_DRY),
        "wet_powder" => Ok(CLASS_POWDER_WET),
        "solid" => Ok(CLASS_SOLID),
        other => Err(format!("unknown type class '{other}'")),
    }
}

fn behavior_from_name(name: &str) -> Result<u8, String> {
    match name {
        "none" => Ok(BH_NONE),
        "soil" => Ok(BH_SOIL),
        "grass" => Ok(BH_GRASS),
        "trunk" => Ok(BH_TRUNK),
        "root" => Ok(BH_ROOT),
        "leaf" => Ok(BH_LEAF),
        "fire" => Ok(BH_FIRE),
        "fire_source" => Ok(BH_FIRE_SOURCE),
        "meteor" => Ok(BH_METEOR),
        "liquid" => Ok(BH_LIQUID),
        "entity" => Ok(BH_ENTITY),
        other => Err(format!("unknown behavior '{other}'")),
    }
}

// === Bundle schema ===

#[derive(Deserialize)]
struct BundleRoot {
    #[serde(default)]
    profiles: Vec<BundleProfile>,
    materials: Vec<BundleMaterial>,
}

#[derive(Deserialize)]
struct BundleProfile {
    key: String,
    conductive_index: Option<f32>,
    heat_loss_chance: Option<u16>,
    flammability_chance: Option<u16>,
    self_ignition_chance: Option<u16>,
    flame_heat: Option<u8>,
    burn_down_chance: Option<u16>,
    melting_point: Option<u8>,
    melting_target: Option<String>,
    hardening_point: Option<u8>,
    hardening_target: Option<String>,
}

#[derive(Deserialize)]
struct BundleMaterial {
    key: String,
    class: String,
    behavior: Option<String>,
    special: Option<u8>,
    profile: Option<String>,
    temperature: Option<u8>,
    hidden: Option<bool>,
}

#[derive(Serialize)]
struct ManifestEntry {
    id: MaterialId,
    key: String,
    pack: Option<String>,
    name: Option<String>,
    class: u8,
    behavior: u8,
    profile: u8,
    hidden: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_keys_resolve_to_expected_ids() {
        let reg = MaterialRegistry::from_builtin();
        assert_eq!(reg.id_by_key("base:air"), Some(MAT_AIR));
        assert_eq!(reg.id_by_key("base:sand"), Some(MAT_SAND));
        assert_eq!(reg.id_by_key("base:molten_rock"), Some(MAT_MOLTEN_ROCK));
        assert_eq!(reg.id_by_key("base:ash"), Some(MAT_ASH));
        assert_eq!(reg.material_count(), 18);
    }

    #[test]
    fn builtin_templates_carry_expected_fields() {
        let reg = MaterialRegistry::from_builtin();

        let water = reg.template_cell(MAT_WATER).unwrap();
        assert_eq!(water.type_class(), CLASS_FLUID);
        assert_eq!(water.behavior(), BH_LIQUID);
        assert_eq!(water.special(), SP_WATER);
        assert_eq!(water.heat_profile(), HP_WATER);

        let sand = reg.template_cell(MAT_SAND).unwrap();
        assert_eq!(sand.type_class(), CLASS_POWDER_DRY);
        assert!(!sand.is_sliding());
        assert_eq!(sand.momentum(), 0);

        let molten = reg.template_cell(MAT_MOLTEN_ROCK).unwrap();
        assert_eq!(molten.temperature(), 255);
    }

    #[test]
    fn builtin_melt_and_harden_targets_cross_reference() {
        let reg = MaterialRegistry::from_builtin();
        let table = reg.heat_profiles();
        assert_eq!(table.melting_target_of(HP_STONE), HP_MOLTEN);
        assert_eq!(table.hardening_target_of(HP_MOLTEN), HP_STONE);
        assert_eq!(table.melting_target_of(HP_METAL), HP_MOLTEN);
        // Air never melts or hardens.
        assert_eq!(table.melting_point_of(HP_AIR), u8::MAX);
        assert_eq!(table.hardening_point_of(HP_AIR), u8::MIN);
    }

    #[test]
    fn bundle_round_trip_resolves_profile_keys() {
        let json = r#"{
            "profiles": [
                {"key": "rock", "conductive_index": 0.4, "melting_point": 230, "melting_target": "melt"},
                {"key": "melt", "flame_heat": 210, "hardening_point": 110, "hardening_target": "rock"}
            ],
            "materials": [
                {"key": "pack:rock", "class": "solid", "profile": "rock"},
                {"key": "pack:melt", "class": "fluid", "behavior": "liquid", "special": 2, "profile": "melt", "temperature": 255}
            ]
        }"#;
        let reg = MaterialRegistry::from_bundle_json(json).unwrap();
        assert_eq!(reg.material_count(), 2);

        let rock_id = reg.id_by_key("pack:rock").unwrap();
        let rock = reg.template_cell(rock_id).unwrap();
        assert_eq!(rock.type_class(), CLASS_SOLID);
        assert_eq!(reg.heat_profiles().melting_target_of(rock.heat_profile()), 1);
        assert_eq!(reg.heat_profiles().hardening_target_of(1), 0);
    }

    #[test]
    fn bundle_rejects_bad_references() {
        let unknown_profile = r#"{
            "profiles": [],
            "materials": [{"key": "pack:x", "class": "solid", "profile": "nope"}]
        }"#;
        assert!(MaterialRegistry::from_bundle_json(unknown_profile).is_err());

        let unknown_class = r#"{
            "materials": [{"key": "pack:x", "class": "plasma"}]
        }"#;
        assert!(MaterialRegistry::from_bundle_json(unknown_class).is_err());

        let empty = r#"{"materials": []}"#;
        assert!(MaterialRegistry::from_bundle_json(empty).is_err());
    }

    #[test]
    fn manifest_lists_every_material() {
        let reg = MaterialRegistry::from_builtin();
        let manifest = reg.manifest_json();
        let parsed: serde_json::Value = serde_json::from_str(&manifest).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), reg.material_count());
        assert_eq!(parsed[0]["key"], "base:air");
        assert_eq!(parsed[0]["hidden"], true);
    }
}
