//! Engram resolution
//!
//! Turns discovered engram entry classes into `EngramDefinition`s. Each field
//! is read on its own: an absent numeric field gets its documented default
//! and a warning, a bad recipe entry is dropped on its own, and only an
//! engram whose item cannot be found at all is left out.

use crate::asset::path::{object_name, strip_class_suffix};
use crate::asset::{AssetError, AssetHandle, AssetSource, PropertyValue};
use crate::config::RunConfig;
use crate::discover::Discovery;
use crate::model::{EngramDefinition, ExtractionResult, RecipeEntry, RunMetadata};
use crate::warning::{Warning, Warnings};
use std::collections::HashSet;

/// Reflection names read from engram entries and items
pub mod props {
    pub const BLUEPRINT_ENTRY: &str = "BluePrintEntry";
    pub const REQUIRED_LEVEL: &str = "RequiredCharacterLevel";
    pub const REQUIRED_POINTS: &str = "RequiredEngramPoints";

    pub const DISPLAY_NAME: &str = "DescriptiveNameBase";
    pub const MAX_STACK: &str = "MaxItemQuantity";
    pub const CAN_BE_BLUEPRINT: &str = "bCanBeBlueprint";
    pub const RECIPE: &str = "BaseCraftingResourceRequirements";

    pub const RESOURCE_ITEM: &str = "ResourceItemType";
    pub const RESOURCE_QUANTITY: &str = "BaseResourceRequirement";
    pub const RESOURCE_EXACT: &str = "bCraftingRequireExactResourceType";
}

pub const DEFAULT_LEVEL: u32 = 0;
pub const DEFAULT_POINTS: u32 = 0;
pub const DEFAULT_STACK_SIZE: u32 = 1;

/// Resolve every discovered engram into an immutable result
pub fn resolve_engrams(
    source: &dyn AssetSource,
    discovery: &Discovery,
    config: &RunConfig,
    warnings: &mut Warnings,
) -> ExtractionResult {
    let mut resolver = Resolver { source, warnings };
    let mut seen = HashSet::new();
    let mut engrams = Vec::with_capacity(discovery.engrams.len());

    for handle in &discovery.engrams {
        let Some(engram) = resolver.resolve_engram(handle) else {
            continue;
        };

        if !seen.insert(engram.path.clone()) {
            resolver.warnings.push(Warning::DuplicateEngram {
                engram: handle.path().to_string(),
                path: engram.path,
            });
            continue;
        }

        tracing::debug!(
            "Resolved {} -> {} ({} recipe entries)",
            handle,
            engram.path,
            engram.recipe.len()
        );
        engrams.push(engram);
    }

    tracing::info!("Resolved {} of {} engrams", engrams.len(), discovery.engrams.len());

    ExtractionResult {
        metadata: RunMetadata {
            mod_name: config.mod_name.clone(),
            mod_id: config.mod_id.clone(),
            mod_root: discovery.mod_root.path().to_string(),
            generated_at: config.generated_at,
        },
        engrams,
    }
}

struct Resolver<'a> {
    source: &'a dyn AssetSource,
    warnings: &'a mut Warnings,
}

impl Resolver<'_> {
    fn resolve_engram(&mut self, engram: &AssetHandle) -> Option<EngramDefinition> {
        let item = match self.item_for(engram) {
            Ok(item) => item,
            Err(reason) => {
                self.warnings.push(Warning::EngramDropped {
                    engram: engram.path().to_string(),
                    reason,
                });
                return None;
            }
        };
        let path = strip_class_suffix(item.path()).to_string();

        let name = self.display_name(&item, &path);
        let required_level = self.read_count(engram, props::REQUIRED_LEVEL, &path, DEFAULT_LEVEL, 0);
        let required_engram_points =
            self.read_count(engram, props::REQUIRED_POINTS, &path, DEFAULT_POINTS, 0);
        let max_stack_size = self.read_count(&item, props::MAX_STACK, &path, DEFAULT_STACK_SIZE, 1);
        let blueprintable = self.read_flag(&item, props::CAN_BE_BLUEPRINT, &path);
        let recipe = self.recipe(&item, &path);

        Some(EngramDefinition {
            name,
            path,
            engram_entry: engram.object_name().to_string(),
            required_level,
            required_engram_points,
            max_stack_size,
            blueprintable,
            recipe,
        })
    }

    /// Follow `BluePrintEntry` to the item class
    fn item_for(&self, engram: &AssetHandle) -> Result<AssetHandle, String> {
        let value = match self.source.get_property(engram, props::BLUEPRINT_ENTRY) {
            Ok(value) => value,
            Err(AssetError::PropertyMissing { .. }) => {
                return Err(format!("{} is absent", props::BLUEPRINT_ENTRY))
            }
            Err(err) => return Err(err.to_string()),
        };

        let reference = value.as_reference().ok_or_else(|| {
            format!(
                "{} is a {}, expected class",
                props::BLUEPRINT_ENTRY,
                value.type_name()
            )
        })?;
        let path = reference
            .path()
            .ok_or_else(|| format!("{} is None", props::BLUEPRINT_ENTRY))?;

        self.source
            .resolve(path)
            .map_err(|_| format!("{} {} does not resolve", props::BLUEPRINT_ENTRY, path))
    }

    fn display_name(&mut self, item: &AssetHandle, path: &str) -> String {
        let fallback = object_name(path).to_string();
        match self.source.get_property(item, props::DISPLAY_NAME) {
            Ok(value) => match value.as_str() {
                Some(name) => name.to_string(),
                None => {
                    self.warnings.push(Warning::InvalidField {
                        path: path.to_string(),
                        field: props::DISPLAY_NAME,
                        reason: format!("is a {}, expected str", value.type_name()),
                        used: fallback.clone(),
                    });
                    fallback
                }
            },
            Err(_) => {
                self.warnings.push(Warning::DefaultedField {
                    path: path.to_string(),
                    field: props::DISPLAY_NAME,
                    default: fallback.clone(),
                });
                fallback
            }
        }
    }

    /// Read a non-negative integer with a default for absence and a floor for range
    fn read_count(
        &mut self,
        handle: &AssetHandle,
        field: &'static str,
        path: &str,
        default: u32,
        min: u32,
    ) -> u32 {
        let value = match self.source.get_property(handle, field) {
            Ok(value) => value,
            Err(AssetError::PropertyMissing { .. }) => {
                self.warnings.push(Warning::DefaultedField {
                    path: path.to_string(),
                    field,
                    default: default.to_string(),
                });
                return default;
            }
            Err(err) => {
                self.warnings.push(Warning::InvalidField {
                    path: path.to_string(),
                    field,
                    reason: err.to_string(),
                    used: default.to_string(),
                });
                return default;
            }
        };

        match value.as_int() {
            Some(v) if v < i64::from(min) => {
                self.warnings.push(Warning::InvalidField {
                    path: path.to_string(),
                    field,
                    reason: format!("is {}, below minimum {}", v, min),
                    used: min.to_string(),
                });
                min
            }
            Some(v) => u32::try_from(v).unwrap_or_else(|_| {
                self.warnings.push(Warning::InvalidField {
                    path: path.to_string(),
                    field,
                    reason: format!("is {}, above maximum {}", v, u32::MAX),
                    used: u32::MAX.to_string(),
                });
                u32::MAX
            }),
            None => {
                self.warnings.push(Warning::InvalidField {
                    path: path.to_string(),
                    field,
                    reason: format!("is a {}, expected int", value.type_name()),
                    used: default.to_string(),
                });
                default
            }
        }
    }

    fn read_flag(&mut self, handle: &AssetHandle, field: &'static str, path: &str) -> bool {
        let Ok(value) = self.source.get_property(handle, field) else {
            return false;
        };
        value.as_bool().unwrap_or_else(|| {
            self.warnings.push(Warning::InvalidField {
                path: path.to_string(),
                field,
                reason: format!("is a {}, expected bool", value.type_name()),
                used: "false".to_string(),
            });
            false
        })
    }

    fn recipe(&mut self, item: &AssetHandle, path: &str) -> Vec<RecipeEntry> {
        // Resources have no recipe at all
        let Ok(value) = self.source.get_property(item, props::RECIPE) else {
            return Vec::new();
        };
        let Some(entries) = value.as_array() else {
            self.warnings.push(Warning::InvalidField {
                path: path.to_string(),
                field: props::RECIPE,
                reason: format!("is a {}, expected array", value.type_name()),
                used: "an empty recipe".to_string(),
            });
            return Vec::new();
        };

        let mut recipe = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            match self.recipe_entry(entry, path) {
                Ok(resolved) => recipe.push(resolved),
                Err(reason) => self.warnings.push(Warning::MalformedRecipeEntry {
                    path: path.to_string(),
                    index,
                    reason,
                }),
            }
        }
        recipe
    }

    fn recipe_entry(&mut self, entry: &PropertyValue, path: &str) -> Result<RecipeEntry, String> {
        let fields = entry
            .as_struct()
            .ok_or_else(|| format!("entry is a {}, expected struct", entry.type_name()))?;

        let item_class = fields
            .get(props::RESOURCE_ITEM)
            .ok_or_else(|| format!("{} is absent", props::RESOURCE_ITEM))?
            .as_reference()
            .ok_or_else(|| format!("{} is not a class reference", props::RESOURCE_ITEM))?;
        let item_class = item_class
            .path()
            .ok_or_else(|| format!("{} is None", props::RESOURCE_ITEM))?;

        let quantity = fields
            .get(props::RESOURCE_QUANTITY)
            .ok_or_else(|| format!("{} is absent", props::RESOURCE_QUANTITY))?;
        let quantity = quantity.as_int().ok_or_else(|| {
            format!(
                "{} is a {}, expected number",
                props::RESOURCE_QUANTITY,
                quantity.type_name()
            )
        })?;
        if quantity <= 0 {
            return Err(format!("quantity {} must be at least 1", quantity));
        }
        let quantity = u32::try_from(quantity)
            .map_err(|_| format!("quantity {} exceeds {}", quantity, u32::MAX))?;

        let exact = fields
            .get(props::RESOURCE_EXACT)
            .and_then(PropertyValue::as_bool)
            .unwrap_or(false);

        let item = strip_class_suffix(item_class).to_string();
        let item_name = self.recipe_item_name(item_class, &item, path);

        Ok(RecipeEntry {
            item,
            item_name,
            quantity,
            exact,
        })
    }

    fn recipe_item_name(&mut self, item_class: &str, item: &str, path: &str) -> String {
        let fallback = || object_name(item).to_string();

        let Ok(handle) = self.source.resolve(item_class) else {
            self.warnings.push(Warning::UnresolvedRecipeItem {
                path: path.to_string(),
                item: item.to_string(),
            });
            return fallback();
        };

        self.display_name(&handle, item)
    }
}
