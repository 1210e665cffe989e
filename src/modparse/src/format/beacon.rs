//! Beacon import projection
//!
//! A `.beacondata` file is a gzipped tar holding `Manifest.json` and one
//! content file named after the mod's content pack. The content file carries
//! two payloads: the content pack declaration and the engrams themselves.
//!
//! Beacon identifies every engram by a UUIDv5 of its lowercased path,
//! namespaced by the content pack that owns the path. Items shipped with the
//! base game live under `/Game/` or `/Packs/` and belong to Beacon's built-in
//! ARK: Survival Ascended pack.

use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::format::to_pretty_json;
use crate::model::{EngramDefinition, ExtractionResult, RecipeEntry};
use serde::{Deserialize, Serialize};
use uuid::{uuid, Uuid};

/// UUIDv5 namespace for Beacon object ids
pub const NAMESPACE: Uuid = uuid!("82aa4465-85f9-4b9e-8d36-f66164cef0a6");

/// Beacon's content pack for base-game content
pub const BASE_CONTENT_PACK_ID: &str = "b32a3d73-9406-56f2-bd8f-936ee0275249";

/// Path prefixes owned by the base-game content pack
pub const BASE_GAME_PREFIXES: &[&str] = &["/Game/", "/Packs/"];

pub const GAME_ID: &str = "ArkSA";
pub const MARKETPLACE: &str = "CurseForge";
pub const MANIFEST_FILE: &str = "Manifest.json";

const MANIFEST_VERSION: u32 = 7;
const GENERATED_WITH: u64 = 20100301;
const MIN_GAME_VERSION: u64 = 20000000;
const AVAILABILITY_ALL_MAPS: u32 = 3;
const BLUEPRINTABLE_TAG: &str = "blueprintable";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconManifest {
    pub version: u32,
    pub min_version: u32,
    pub generated_with: u64,
    pub is_full: bool,
    pub files: Vec<String>,
    pub is_user_data: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconContent {
    pub payloads: Vec<Payload>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    ContentPacks(ContentPackPayload),
    Engrams(EngramPayload),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPackPayload {
    pub game_id: String,
    pub content_packs: Vec<ContentPack>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngramPayload {
    pub game_id: String,
    pub engrams: Vec<BeaconEngram>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPack {
    pub content_pack_id: String,
    pub game_id: String,
    pub marketplace: String,
    pub marketplace_id: String,
    pub name: String,
    pub is_console_safe: bool,
    pub is_default_enabled: bool,
    pub min_version: u64,
    pub last_update: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconEngram {
    pub group: String,
    pub engram_id: Option<Uuid>,
    pub label: String,
    /// Always serialized, as `null`
    pub alternate_label: Option<String>,
    pub tags: Vec<String>,
    pub availability: u32,
    pub path: String,
    pub min_version: u64,
    pub last_update: f64,
    pub content_pack_id: String,
    pub content_pack_name: String,
    pub entry_string: String,
    pub required_level: u32,
    pub required_points: u32,
    pub stack_size: u32,
    pub recipe: Vec<BeaconIngredient>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconIngredient {
    /// `None` when the item belongs to neither the mod nor the base game
    pub engram_id: Option<Uuid>,
    pub quantity: u32,
    pub exact: bool,
}

/// Both halves of a `.beacondata` archive
#[derive(Debug, Clone, PartialEq)]
pub struct BeaconPackage {
    pub manifest: BeaconManifest,
    pub content: BeaconContent,
    pub content_pack_id: String,
}

impl BeaconPackage {
    /// Name of the content file inside the archive
    pub fn content_file_name(&self) -> String {
        content_file_name(&self.content_pack_id)
    }

    /// Archive members in write order: the manifest, then the content file
    pub fn members(&self) -> Result<Vec<(String, Vec<u8>)>> {
        Ok(vec![
            (MANIFEST_FILE.to_string(), to_pretty_json(&self.manifest)?),
            (self.content_file_name(), to_pretty_json(&self.content)?),
        ])
    }
}

fn content_file_name(content_pack_id: &str) -> String {
    format!("{}.json", content_pack_id)
}

/// Mod id and content pack id, or the options that are missing
pub fn required_ids(config: &RunConfig) -> Result<(&str, &str)> {
    match (config.mod_id.as_deref(), config.content_pack_id.as_deref()) {
        (Some(mod_id), Some(content_pack_id)) => Ok((mod_id, content_pack_id)),
        (mod_id, content_pack_id) => {
            let mut missing = Vec::new();
            if mod_id.is_none() {
                missing.push("mod-id");
            }
            if content_pack_id.is_none() {
                missing.push("content-pack-id");
            }
            Err(Error::MissingRequiredOption(missing))
        }
    }
}

/// Maps object paths to the content pack that owns them
#[derive(Debug, Clone)]
pub struct ContentPackTable<'a> {
    prefixes: Vec<(&'a str, &'a str)>,
}

impl<'a> ContentPackTable<'a> {
    /// Base-game prefixes first, then the mod's own root folder
    pub fn new(mod_root_folder: &'a str, content_pack_id: &'a str) -> Self {
        let mut prefixes: Vec<_> = BASE_GAME_PREFIXES
            .iter()
            .map(|prefix| (*prefix, BASE_CONTENT_PACK_ID))
            .collect();
        prefixes.push((mod_root_folder, content_pack_id));
        ContentPackTable { prefixes }
    }

    /// First matching prefix wins
    pub fn pack_for(&self, path: &str) -> Option<&'a str> {
        self.prefixes
            .iter()
            .find(|(prefix, _)| path.starts_with(prefix))
            .map(|(_, pack)| *pack)
    }

    pub fn engram_id(&self, path: &str) -> Option<Uuid> {
        self.pack_for(path).map(|pack| engram_id(pack, path))
    }
}

/// Beacon's id for an object path inside a content pack
pub fn engram_id(content_pack_id: &str, path: &str) -> Uuid {
    let name = format!("{}:{}", content_pack_id.to_lowercase(), path.to_lowercase());
    Uuid::new_v5(&NAMESPACE, name.as_bytes())
}

/// Project a result into a Beacon package
pub fn project(result: &ExtractionResult, config: &RunConfig) -> Result<BeaconPackage> {
    let (mod_id, content_pack_id) = required_ids(config)?;
    let table = ContentPackTable::new(&config.mod_root_folder, content_pack_id);
    let last_update = result.metadata.generated_at.timestamp_millis() as f64 / 1000.0;

    let pack = ContentPack {
        content_pack_id: content_pack_id.to_string(),
        game_id: GAME_ID.to_string(),
        marketplace: MARKETPLACE.to_string(),
        marketplace_id: mod_id.to_string(),
        name: result.metadata.mod_name.clone(),
        is_console_safe: false,
        is_default_enabled: false,
        min_version: MIN_GAME_VERSION,
        last_update,
    };

    let engrams = result
        .engrams
        .iter()
        .map(|engram| {
            let id = table.engram_id(&engram.path);
            if id.is_none() {
                tracing::debug!("No content pack owns {}", engram.path);
            }
            beacon_engram(engram, id, &table, &pack, last_update)
        })
        .collect();

    let content = BeaconContent {
        payloads: vec![
            Payload::ContentPacks(ContentPackPayload {
                game_id: GAME_ID.to_string(),
                content_packs: vec![pack],
            }),
            Payload::Engrams(EngramPayload {
                game_id: GAME_ID.to_string(),
                engrams,
            }),
        ],
    };

    let manifest = BeaconManifest {
        version: MANIFEST_VERSION,
        min_version: MANIFEST_VERSION,
        generated_with: GENERATED_WITH,
        is_full: false,
        files: vec![content_file_name(content_pack_id)],
        is_user_data: true,
    };

    Ok(BeaconPackage {
        manifest,
        content,
        content_pack_id: content_pack_id.to_string(),
    })
}

fn beacon_engram(
    engram: &EngramDefinition,
    engram_id: Option<Uuid>,
    table: &ContentPackTable<'_>,
    pack: &ContentPack,
    last_update: f64,
) -> BeaconEngram {
    let mut tags = Vec::new();
    if engram.blueprintable {
        tags.push(BLUEPRINTABLE_TAG.to_string());
    }

    BeaconEngram {
        group: "engrams".to_string(),
        engram_id,
        label: engram.name.clone(),
        alternate_label: None,
        tags,
        availability: AVAILABILITY_ALL_MAPS,
        path: engram.path.clone(),
        min_version: MIN_GAME_VERSION,
        last_update,
        content_pack_id: pack.content_pack_id.clone(),
        content_pack_name: pack.name.clone(),
        entry_string: engram.engram_entry.clone(),
        required_level: engram.required_level,
        required_points: engram.required_engram_points,
        stack_size: engram.max_stack_size,
        recipe: engram
            .recipe
            .iter()
            .map(|entry| ingredient(entry, table))
            .collect(),
    }
}

fn ingredient(entry: &RecipeEntry, table: &ContentPackTable<'_>) -> BeaconIngredient {
    BeaconIngredient {
        engram_id: table.engram_id(&entry.item),
        quantity: entry.quantity,
        exact: entry.exact,
    }
}
