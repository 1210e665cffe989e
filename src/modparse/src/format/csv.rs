//! Spreadsheet projection

use crate::error::{Error, Result};
use crate::model::{ExtractionResult, RecipeEntry};

pub const HEADER: [&str; 7] = [
    "Item Name",
    "Item Path",
    "Max Stack Size",
    "Engram Class Name",
    "Required Level",
    "Required Engram Points",
    "Crafting Recipe",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    pub name: String,
    pub path: String,
    pub max_stack_size: u32,
    pub engram_entry: String,
    pub required_level: u32,
    pub required_engram_points: u32,
    /// One line per recipe entry
    pub recipe: String,
}

impl CsvRow {
    fn record(&self) -> [String; 7] {
        [
            self.name.clone(),
            self.path.clone(),
            self.max_stack_size.to_string(),
            self.engram_entry.clone(),
            self.required_level.to_string(),
            self.required_engram_points.to_string(),
            self.recipe.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub rows: Vec<CsvRow>,
}

impl CsvTable {
    /// Encode with a header row, even when there are no engrams
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(HEADER)?;
        for row in &self.rows {
            writer.write_record(row.record())?;
        }
        writer
            .into_inner()
            .map_err(|err| Error::Csv(err.into_error().into()))
    }
}

fn recipe_line(entry: &RecipeEntry) -> String {
    let exact = if entry.exact { "True" } else { "False" };
    format!("{} x{} (Exact: {})", entry.item_name, entry.quantity, exact)
}

pub fn project(result: &ExtractionResult) -> CsvTable {
    let rows = result
        .engrams
        .iter()
        .map(|engram| CsvRow {
            name: engram.name.clone(),
            path: engram.path.clone(),
            max_stack_size: engram.max_stack_size,
            engram_entry: engram.engram_entry.clone(),
            required_level: engram.required_level,
            required_engram_points: engram.required_engram_points,
            recipe: engram
                .recipe
                .iter()
                .map(recipe_line)
                .collect::<Vec<_>>()
                .join("\n"),
        })
        .collect();
    CsvTable { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::tests::sample_result;

    #[test]
    fn test_recipe_cell() {
        let table = project(&sample_result());
        assert_eq!(table.rows[0].recipe, "");
        assert_eq!(
            table.rows[1].recipe,
            "Wood x8 (Exact: False)\nFiber x12 (Exact: True)"
        );
    }

    #[test]
    fn test_encoding_reads_back() {
        let bytes = project(&sample_result()).to_bytes().unwrap();
        let mut reader = csv::Reader::from_reader(bytes.as_slice());

        let header: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(header, HEADER);

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[1][0], "Spear");
        assert_eq!(&records[1][2], "1");
        assert_eq!(&records[1][3], "EngramEntry_Spear_C");
        assert_eq!(&records[1][6], "Wood x8 (Exact: False)\nFiber x12 (Exact: True)");
    }

    #[test]
    fn test_empty_table_keeps_header() {
        let bytes = CsvTable { rows: vec![] }.to_bytes().unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "Item Name,Item Path,Max Stack Size,Engram Class Name,Required Level,Required Engram Points,Crafting Recipe\n"
        );
    }
}
