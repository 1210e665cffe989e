//! Asset Query Adapter
//!
//! A narrow, read-only view over the editor's object graph:
//! - `AssetSource` is the query trait the extraction core talks to
//! - `AssetGraph` is the in-memory implementation (snapshots and tests)
//! - `path` holds helpers for Unreal object/class path conventions

#[cfg(test)]
pub(crate) mod fixture;
mod graph;
pub mod path;
mod snapshot;

pub use graph::{AssetGraph, AssetRecord};
pub use snapshot::{load_snapshot, SnapshotError};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Errors returned by an asset source
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Property {property} does not exist on {asset}")]
    PropertyMissing { asset: String, property: String },

    #[error("Property {property} on {asset}: expected {expected}, found {found}")]
    TypeMismatch {
        asset: String,
        property: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// A resolved asset inside the host graph, identified by its object path
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetHandle(String);

impl AssetHandle {
    pub fn new(path: impl Into<String>) -> Self {
        AssetHandle(path.into())
    }

    /// Full object path, e.g. `/MyMod/Items/PrimalItem_Foo.PrimalItem_Foo_C`
    pub fn path(&self) -> &str {
        &self.0
    }

    /// Object name after the final `.`, e.g. `PrimalItem_Foo_C`
    pub fn object_name(&self) -> &str {
        path::object_name(&self.0)
    }
}

impl fmt::Display for AssetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An unresolved reference to a blueprint class, as stored in a property
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassRef(Option<String>);

impl ClassRef {
    pub fn new(path: impl Into<String>) -> Self {
        ClassRef(Some(path.into()))
    }

    /// A null reference (`None` in the editor)
    pub fn null() -> Self {
        ClassRef(None)
    }

    pub fn path(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl fmt::Display for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_deref().unwrap_or("None"))
    }
}

/// A property value read from the host graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Name(String),
    Object(Option<String>),
    Class(Option<String>),
    Array(Vec<PropertyValue>),
    Struct(BTreeMap<String, PropertyValue>),
}

impl PropertyValue {
    /// Short type label used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Bool(_) => "bool",
            PropertyValue::Int(_) => "int",
            PropertyValue::Float(_) => "float",
            PropertyValue::Str(_) => "str",
            PropertyValue::Name(_) => "name",
            PropertyValue::Object(_) => "object",
            PropertyValue::Class(_) => "class",
            PropertyValue::Array(_) => "array",
            PropertyValue::Struct(_) => "struct",
        }
    }

    /// Integer view; floats are truncated toward zero like the editor's `int()`
    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(v) => Some(*v),
            // Out-of-range floats have no integer view
            PropertyValue::Float(v) if v.is_finite() && v.abs() < i64::MAX as f64 => {
                Some(v.trunc() as i64)
            }
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Text view of `Str` and `Name` values
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Str(v) | PropertyValue::Name(v) => Some(v),
            _ => None,
        }
    }

    /// Reference view of `Object` and `Class` values (`Some(None)` is a null reference)
    pub fn as_reference(&self) -> Option<ClassRef> {
        match self {
            PropertyValue::Object(v) | PropertyValue::Class(v) => Some(ClassRef(v.clone())),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[PropertyValue]> {
        match self {
            PropertyValue::Array(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&BTreeMap<String, PropertyValue>> {
        match self {
            PropertyValue::Struct(v) => Some(v),
            _ => None,
        }
    }
}

/// Read-only query interface over the host's object graph
///
/// All reads are synchronous and side-effect free. Any hierarchy walking
/// (class defaults inherited from a parent blueprint) happens behind this
/// trait, so callers only ever see flat values.
pub trait AssetSource {
    /// Resolve a path to an asset in the current project
    fn resolve(&self, path: &str) -> Result<AssetHandle, AssetError>;

    /// Read a property, following the class hierarchy for inherited defaults
    fn get_property(&self, handle: &AssetHandle, name: &str) -> Result<PropertyValue, AssetError>;

    /// List every asset path below a folder, recursively, in sorted order
    fn list_assets(&self, folder: &str) -> Vec<String>;

    /// Read an array-of-class-references property as a flat list
    fn list_referenced_classes(
        &self,
        handle: &AssetHandle,
        property: &str,
    ) -> Result<Vec<ClassRef>, AssetError> {
        let value = self.get_property(handle, property)?;
        let items = value.as_array().ok_or_else(|| AssetError::TypeMismatch {
            asset: handle.path().to_string(),
            property: property.to_string(),
            expected: "array",
            found: value.type_name(),
        })?;

        items
            .iter()
            .map(|item| {
                item.as_reference().ok_or_else(|| AssetError::TypeMismatch {
                    asset: handle.path().to_string(),
                    property: property.to_string(),
                    expected: "class",
                    found: item.type_name(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_truncates_to_int() {
        assert_eq!(PropertyValue::Float(2.9).as_int(), Some(2));
        assert_eq!(PropertyValue::Float(-0.5).as_int(), Some(0));
        assert_eq!(PropertyValue::Float(f64::NAN).as_int(), None);
        assert_eq!(PropertyValue::Float(1e300).as_int(), None);
        assert_eq!(PropertyValue::Float(-1e19).as_int(), None);
        assert_eq!(PropertyValue::Str("3".into()).as_int(), None);
    }

    #[test]
    fn test_null_reference_display() {
        let r = PropertyValue::Class(None).as_reference().unwrap();
        assert_eq!(r.path(), None);
        assert_eq!(r.to_string(), "None");
    }

    #[test]
    fn test_property_value_json_shape() {
        let value: PropertyValue =
            serde_json::from_str(r#"{"type": "class", "value": "/MyMod/A.A_C"}"#).unwrap();
        assert_eq!(value, PropertyValue::Class(Some("/MyMod/A.A_C".into())));

        let null: PropertyValue = serde_json::from_str(r#"{"type": "object", "value": null}"#).unwrap();
        assert_eq!(null, PropertyValue::Object(None));
    }

    #[test]
    fn test_list_referenced_classes_rejects_non_array() {
        let mut graph = AssetGraph::new();
        graph.insert(AssetRecord::new("/MyMod/Data.Data").with_property("List", PropertyValue::Int(1)));
        let handle = graph.resolve("/MyMod/Data.Data").unwrap();

        let err = graph.list_referenced_classes(&handle, "List").unwrap_err();
        assert!(matches!(err, AssetError::TypeMismatch { expected: "array", .. }));
    }
}
