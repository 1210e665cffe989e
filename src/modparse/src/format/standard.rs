//! Standard JSON projection

use crate::model::{EngramDefinition, ExtractionResult, RecipeEntry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardDocument {
    pub mod_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mod_id: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub engrams: Vec<StandardEngram>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardEngram {
    pub name: String,
    pub path: String,
    pub engram_entry: String,
    pub required_level: u32,
    pub required_engram_points: u32,
    pub max_stack_size: u32,
    pub blueprintable: bool,
    pub recipe: Vec<StandardRecipeEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardRecipeEntry {
    pub item: String,
    pub item_name: String,
    pub quantity: u32,
    pub exact: bool,
}

/// Project a result into the standard document
pub fn project(result: &ExtractionResult) -> StandardDocument {
    StandardDocument {
        mod_name: result.metadata.mod_name.clone(),
        mod_id: result.metadata.mod_id.clone(),
        generated_at: result.metadata.generated_at,
        engrams: result.engrams.iter().map(StandardEngram::from).collect(),
    }
}

impl StandardDocument {
    pub fn from_json(data: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(data)
    }

    /// Parse back into engram definitions, in document order
    pub fn into_definitions(self) -> Vec<EngramDefinition> {
        self.engrams.into_iter().map(EngramDefinition::from).collect()
    }
}

impl From<&EngramDefinition> for StandardEngram {
    fn from(engram: &EngramDefinition) -> Self {
        StandardEngram {
            name: engram.name.clone(),
            path: engram.path.clone(),
            engram_entry: engram.engram_entry.clone(),
            required_level: engram.required_level,
            required_engram_points: engram.required_engram_points,
            max_stack_size: engram.max_stack_size,
            blueprintable: engram.blueprintable,
            recipe: engram
                .recipe
                .iter()
                .map(|entry| StandardRecipeEntry {
                    item: entry.item.clone(),
                    item_name: entry.item_name.clone(),
                    quantity: entry.quantity,
                    exact: entry.exact,
                })
                .collect(),
        }
    }
}

impl From<StandardEngram> for EngramDefinition {
    fn from(engram: StandardEngram) -> Self {
        EngramDefinition {
            name: engram.name,
            path: engram.path,
            engram_entry: engram.engram_entry,
            required_level: engram.required_level,
            required_engram_points: engram.required_engram_points,
            max_stack_size: engram.max_stack_size,
            blueprintable: engram.blueprintable,
            recipe: engram
                .recipe
                .into_iter()
                .map(|entry| RecipeEntry {
                    item: entry.item,
                    item_name: entry.item_name,
                    quantity: entry.quantity,
                    exact: entry.exact,
                })
                .collect(),
        }
    }
}
