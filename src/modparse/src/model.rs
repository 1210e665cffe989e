//! Resolved extraction data
//!
//! These are plain owned values produced by the resolver and read, never
//! mutated, by the output projections.

use chrono::{DateTime, Utc};

/// One crafting cost of an engram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeEntry {
    /// Item path with the class suffix stripped
    pub item: String,
    /// Display name of the item
    pub item_name: String,
    /// Always >= 1
    pub quantity: u32,
    /// Recipe only accepts this exact resource type
    pub exact: bool,
}

/// A fully resolved engram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngramDefinition {
    pub name: String,
    /// Stable identifier; unique within one result
    pub path: String,
    /// Engram entry class name, e.g. `EngramEntry_Foo_C`
    pub engram_entry: String,
    pub required_level: u32,
    pub required_engram_points: u32,
    /// Always >= 1
    pub max_stack_size: u32,
    pub blueprintable: bool,
    pub recipe: Vec<RecipeEntry>,
}

/// Per-run metadata carried alongside the engrams
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunMetadata {
    pub mod_name: String,
    pub mod_id: Option<String>,
    /// Object path of the ModDataAsset that was read
    pub mod_root: String,
    pub generated_at: DateTime<Utc>,
}

/// Output of the resolver stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub metadata: RunMetadata,
    pub engrams: Vec<EngramDefinition>,
}
