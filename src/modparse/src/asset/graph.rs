//! In-memory asset graph
//!
//! Holds a flat map of object path -> record. Blueprint inheritance is
//! modelled by the optional `super` link on each record; property reads fall
//! back along that chain the way class default objects inherit values.

use super::path::{is_under, primary_object_path, strip_class_suffix};
use super::{AssetError, AssetHandle, AssetSource, PropertyValue};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// A single asset (data asset or blueprint class default object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Object path, e.g. `/MyMod/Items/PrimalItem_Foo.PrimalItem_Foo_C`
    pub path: String,

    /// Parent class path; inherited defaults are looked up here
    #[serde(rename = "super", default, skip_serializing_if = "Option::is_none")]
    pub super_path: Option<String>,

    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
}

impl AssetRecord {
    pub fn new(path: impl Into<String>) -> Self {
        AssetRecord {
            path: path.into(),
            super_path: None,
            properties: BTreeMap::new(),
        }
    }

    pub fn with_super(mut self, super_path: impl Into<String>) -> Self {
        self.super_path = Some(super_path.into());
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.insert(name.into(), value);
        self
    }
}

/// In-memory `AssetSource`
#[derive(Debug, Clone, Default)]
pub struct AssetGraph {
    records: BTreeMap<String, AssetRecord>,
}

impl AssetGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a record (last insert for a path wins)
    pub fn insert(&mut self, record: AssetRecord) {
        self.records.insert(record.path.clone(), record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find the canonical key for a path, trying the usual spellings
    fn canonical_key(&self, path: &str) -> Option<&str> {
        let mut candidates = vec![path.to_string()];
        if !path.contains('.') {
            let primary = primary_object_path(path);
            candidates.push(format!("{}_C", primary));
            candidates.push(primary);
        }
        let stripped = strip_class_suffix(path);
        if stripped != path {
            candidates.push(stripped.to_string());
        } else {
            candidates.push(format!("{}_C", path));
        }

        candidates
            .iter()
            .find_map(|c| self.records.get_key_value(c.as_str()))
            .map(|(key, _)| key.as_str())
    }
}

impl FromIterator<AssetRecord> for AssetGraph {
    fn from_iter<I: IntoIterator<Item = AssetRecord>>(iter: I) -> Self {
        let mut graph = AssetGraph::new();
        for record in iter {
            graph.insert(record);
        }
        graph
    }
}

impl AssetSource for AssetGraph {
    fn resolve(&self, path: &str) -> Result<AssetHandle, AssetError> {
        self.canonical_key(path)
            .map(AssetHandle::new)
            .ok_or_else(|| AssetError::NotFound(path.to_string()))
    }

    fn get_property(&self, handle: &AssetHandle, name: &str) -> Result<PropertyValue, AssetError> {
        let mut current = self
            .records
            .get(handle.path())
            .ok_or_else(|| AssetError::NotFound(handle.path().to_string()))?;
        let mut visited = HashSet::new();

        loop {
            if let Some(value) = current.properties.get(name) {
                return Ok(value.clone());
            }
            if !visited.insert(current.path.as_str()) {
                break;
            }

            // Native parents (/Script/...) are usually absent from the graph
            let Some(parent) = current
                .super_path
                .as_deref()
                .and_then(|p| self.canonical_key(p))
                .and_then(|key| self.records.get(key))
            else {
                break;
            };
            current = parent;
        }

        Err(AssetError::PropertyMissing {
            asset: handle.path().to_string(),
            property: name.to_string(),
        })
    }

    fn list_assets(&self, folder: &str) -> Vec<String> {
        self.records
            .keys()
            .filter(|path| is_under(path, folder))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> AssetGraph {
        [
            AssetRecord::new("/MyMod/Items/PrimalItem_Base.PrimalItem_Base_C")
                .with_property("MaxItemQuantity", PropertyValue::Int(100))
                .with_property("DescriptiveNameBase", PropertyValue::Str("Base".into())),
            AssetRecord::new("/MyMod/Items/PrimalItem_Child.PrimalItem_Child_C")
                .with_super("/MyMod/Items/PrimalItem_Base.PrimalItem_Base_C")
                .with_property("DescriptiveNameBase", PropertyValue::Str("Child".into())),
            AssetRecord::new("/MyMod/ModDataAsset_MyMod.ModDataAsset_MyMod"),
            AssetRecord::new("/MyModExtra/Other.Other"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_resolve_exact_and_variants() {
        let g = graph();
        let exact = "/MyMod/Items/PrimalItem_Child.PrimalItem_Child_C";
        assert_eq!(g.resolve(exact).unwrap().path(), exact);
        assert_eq!(
            g.resolve("/MyMod/Items/PrimalItem_Child.PrimalItem_Child").unwrap().path(),
            exact
        );
        assert_eq!(
            g.resolve("/MyMod/ModDataAsset_MyMod").unwrap().path(),
            "/MyMod/ModDataAsset_MyMod.ModDataAsset_MyMod"
        );
        // Package path of a blueprint resolves to its generated class
        assert_eq!(g.resolve("/MyMod/Items/PrimalItem_Child").unwrap().path(), exact);
    }

    #[test]
    fn test_resolve_not_found() {
        let err = graph().resolve("/MyMod/Missing.Missing_C").unwrap_err();
        assert_eq!(err, AssetError::NotFound("/MyMod/Missing.Missing_C".into()));
    }

    #[test]
    fn test_get_property_inherits_from_super() {
        let g = graph();
        let child = g.resolve("/MyMod/Items/PrimalItem_Child.PrimalItem_Child_C").unwrap();

        assert_eq!(
            g.get_property(&child, "DescriptiveNameBase").unwrap(),
            PropertyValue::Str("Child".into())
        );
        assert_eq!(g.get_property(&child, "MaxItemQuantity").unwrap(), PropertyValue::Int(100));
        assert!(matches!(
            g.get_property(&child, "bCanBeBlueprint"),
            Err(AssetError::PropertyMissing { .. })
        ));
    }

    #[test]
    fn test_get_property_survives_super_cycle() {
        let g: AssetGraph = [
            AssetRecord::new("/M/A.A_C").with_super("/M/B.B_C"),
            AssetRecord::new("/M/B.B_C").with_super("/M/A.A_C"),
        ]
        .into_iter()
        .collect();
        let a = g.resolve("/M/A.A_C").unwrap();
        assert!(matches!(g.get_property(&a, "X"), Err(AssetError::PropertyMissing { .. })));
    }

    #[test]
    fn test_list_assets_is_sorted_and_scoped() {
        let listed = graph().list_assets("/MyMod");
        assert_eq!(
            listed,
            vec![
                "/MyMod/Items/PrimalItem_Base.PrimalItem_Base_C".to_string(),
                "/MyMod/Items/PrimalItem_Child.PrimalItem_Child_C".to_string(),
                "/MyMod/ModDataAsset_MyMod.ModDataAsset_MyMod".to_string(),
            ]
        );
    }
}
