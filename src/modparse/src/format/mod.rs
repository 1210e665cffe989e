//! Output projections
//!
//! Each projection is a pure function of the `ExtractionResult` and the run
//! configuration:
//! - `standard` - flat JSON document
//! - `beacon` - Beacon's import schema plus manifest
//! - `csv` - spreadsheet rows

pub mod beacon;
pub mod csv;
pub mod standard;

use crate::config::{Mode, RunConfig};
use crate::error::Result;
use crate::model::ExtractionResult;
use serde::Serialize;

pub use self::beacon::BeaconPackage;
pub use self::csv::CsvTable;
pub use self::standard::StandardDocument;

/// A projected document, ready for the writer
#[derive(Debug, Clone, PartialEq)]
pub enum OutputDocument {
    Standard(StandardDocument),
    Beacon(BeaconPackage),
    Csv(CsvTable),
}

impl OutputDocument {
    /// File extension used for this document
    pub fn extension(&self) -> &'static str {
        match self {
            OutputDocument::Standard(_) => "json",
            OutputDocument::Beacon(_) => "beacondata",
            OutputDocument::Csv(_) => "csv",
        }
    }
}

/// Fail early if the configured mode lacks options its projection needs
pub fn check_requirements(config: &RunConfig) -> Result<()> {
    match config.mode {
        Mode::Beacon => beacon::required_ids(config).map(|_| ()),
        Mode::Standard | Mode::Csv => Ok(()),
    }
}

/// Project a result with the configured mode
pub fn project(result: &ExtractionResult, config: &RunConfig) -> Result<OutputDocument> {
    Ok(match config.mode {
        Mode::Standard => OutputDocument::Standard(standard::project(result)),
        Mode::Beacon => OutputDocument::Beacon(beacon::project(result, config)?),
        Mode::Csv => OutputDocument::Csv(csv::project(result)),
    })
}

/// Serialize as JSON with the 4-space indentation Beacon's own exports use
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(out)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::{EngramDefinition, RecipeEntry, RunMetadata};
    use chrono::{TimeZone, Utc};

    pub(crate) fn sample_result() -> ExtractionResult {
        ExtractionResult {
            metadata: RunMetadata {
                mod_name: "MyMod".into(),
                mod_id: Some("123456".into()),
                mod_root: "/MyMod/ModDataAsset_MyMod.ModDataAsset_MyMod".into(),
                generated_at: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
            },
            engrams: vec![
                EngramDefinition {
                    name: "Wood".into(),
                    path: "/MyMod/Items/PrimalItem_Wood.PrimalItem_Wood".into(),
                    engram_entry: "EngramEntry_Wood_C".into(),
                    required_level: 0,
                    required_engram_points: 0,
                    max_stack_size: 100,
                    blueprintable: false,
                    recipe: vec![],
                },
                EngramDefinition {
                    name: "Spear".into(),
                    path: "/MyMod/Items/PrimalItem_Spear.PrimalItem_Spear".into(),
                    engram_entry: "EngramEntry_Spear_C".into(),
                    required_level: 5,
                    required_engram_points: 3,
                    max_stack_size: 1,
                    blueprintable: true,
                    recipe: vec![
                        RecipeEntry {
                            item: "/MyMod/Items/PrimalItem_Wood.PrimalItem_Wood".into(),
                            item_name: "Wood".into(),
                            quantity: 8,
                            exact: false,
                        },
                        RecipeEntry {
                            item: "/Game/PrimalEarth/CoreBlueprints/Resources/PrimalItemResource_Fiber.PrimalItemResource_Fiber".into(),
                            item_name: "Fiber".into(),
                            quantity: 12,
                            exact: true,
                        },
                    ],
                },
            ],
        }
    }

    #[test]
    fn test_pretty_json_uses_four_spaces() {
        let bytes = to_pretty_json(&serde_json::json!({ "a": [1] })).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "{\n    \"a\": [\n        1\n    ]\n}");
    }

    #[test]
    fn test_extensions() {
        let result = sample_result();
        assert_eq!(OutputDocument::Standard(standard::project(&result)).extension(), "json");
        assert_eq!(OutputDocument::Csv(csv::project(&result)).extension(), "csv");
    }
}
