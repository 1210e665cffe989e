//! Test fixture: a small mod project as an in-memory asset graph

use super::{AssetGraph, AssetRecord, PropertyValue};
use std::collections::BTreeMap;

pub const MOD_ROOT: &str = "/MyMod";
pub const MDA_PATH: &str = "/MyMod/ModDataAsset_MyMod.ModDataAsset_MyMod";
pub const FIBER_PATH: &str =
    "/Game/PrimalEarth/CoreBlueprints/Resources/PrimalItemResource_Fiber.PrimalItemResource_Fiber_C";

pub fn engram_path(name: &str) -> String {
    format!("/MyMod/Engrams/EngramEntry_{0}.EngramEntry_{0}_C", name)
}

pub fn item_path(name: &str) -> String {
    format!("/MyMod/Items/PrimalItem_{0}.PrimalItem_{0}_C", name)
}

/// Item path as it appears in output (class suffix stripped)
pub fn item_id(name: &str) -> String {
    format!("/MyMod/Items/PrimalItem_{0}.PrimalItem_{0}", name)
}

pub fn recipe_entry(item: Option<&str>, quantity: f64, exact: bool) -> PropertyValue {
    let mut fields = BTreeMap::new();
    fields.insert(
        "ResourceItemType".to_string(),
        PropertyValue::Class(item.map(str::to_string)),
    );
    fields.insert(
        "BaseResourceRequirement".to_string(),
        PropertyValue::Float(quantity),
    );
    fields.insert(
        "bCraftingRequireExactResourceType".to_string(),
        PropertyValue::Bool(exact),
    );
    PropertyValue::Struct(fields)
}

/// Builder for a mod graph with a ModDataAsset declaring engram classes
#[derive(Default)]
pub struct ModFixture {
    graph: AssetGraph,
    declared: Vec<PropertyValue>,
    omit_declared_list: bool,
}

impl ModFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fully populated item with the given recipe
    pub fn item(mut self, name: &str, display: &str, stack: i64, recipe: Vec<PropertyValue>) -> Self {
        self.graph.insert(
            AssetRecord::new(item_path(name))
                .with_super("/Script/ShooterGame.PrimalItem")
                .with_property("DescriptiveNameBase", PropertyValue::Str(display.to_string()))
                .with_property("MaxItemQuantity", PropertyValue::Int(stack))
                .with_property("bCanBeBlueprint", PropertyValue::Bool(true))
                .with_property("BaseCraftingResourceRequirements", PropertyValue::Array(recipe)),
        );
        self
    }

    /// Add an engram entry for an item and declare it on the mod root
    pub fn engram(mut self, name: &str, item: &str, level: i64, points: i64) -> Self {
        self.graph.insert(
            AssetRecord::new(engram_path(name))
                .with_super("/Script/ShooterGame.PrimalEngramEntry")
                .with_property("BluePrintEntry", PropertyValue::Class(Some(item_path(item))))
                .with_property("RequiredCharacterLevel", PropertyValue::Int(level))
                .with_property("RequiredEngramPoints", PropertyValue::Int(points)),
        );
        self.declare(Some(&engram_path(name)))
    }

    /// Declare a raw reference (which may not resolve)
    pub fn declare(mut self, path: Option<&str>) -> Self {
        self.declared.push(PropertyValue::Class(path.map(str::to_string)));
        self
    }

    /// Add an arbitrary record
    pub fn record(mut self, record: AssetRecord) -> Self {
        self.graph.insert(record);
        self
    }

    /// Leave `AdditionalEngramBlueprintClasses` off the ModDataAsset entirely
    pub fn without_declared_list(mut self) -> Self {
        self.omit_declared_list = true;
        self
    }

    pub fn build(self) -> AssetGraph {
        let mut graph = self.graph;
        let mut mda = AssetRecord::new(MDA_PATH).with_super("/Script/ShooterGame.ModDataAsset");
        if !self.omit_declared_list {
            mda = mda.with_property(
                "AdditionalEngramBlueprintClasses",
                PropertyValue::Array(self.declared),
            );
        }
        graph.insert(mda);
        graph
    }
}

/// Two engrams: a Spear made from Wood and base-game Fiber, and a Wood
/// resource with no recipe
pub fn basic_mod() -> AssetGraph {
    ModFixture::new()
        .record(
            AssetRecord::new(FIBER_PATH)
                .with_property("DescriptiveNameBase", PropertyValue::Str("Fiber".into())),
        )
        .item("Wood", "Wood", 100, vec![])
        .item(
            "Spear",
            "Spear",
            1,
            vec![
                recipe_entry(Some(&item_path("Wood")), 8.0, false),
                recipe_entry(Some(FIBER_PATH), 12.0, true),
            ],
        )
        .engram("Wood", "Wood", 0, 0)
        .engram("Spear", "Spear", 5, 3)
        .build()
}
