//! End-to-end extraction run
//!
//! discover -> resolve -> project -> write, threaded with one immutable
//! `RunConfig`. Mode requirements are checked before the asset source is
//! touched.

use crate::asset::AssetSource;
use crate::config::RunConfig;
use crate::discover::discover;
use crate::error::Result;
use crate::format;
use crate::model::ExtractionResult;
use crate::resolve::resolve_engrams;
use crate::warning::{Warning, Warnings};
use crate::writer;
use std::path::PathBuf;

/// Resolved result plus every warning raised on the way
#[derive(Debug, Clone)]
pub struct Extraction {
    pub result: ExtractionResult,
    pub warnings: Vec<Warning>,
}

/// Summary of a successful run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Absolute path of the written file
    pub output_path: PathBuf,
    pub engram_count: usize,
    pub warnings: Vec<Warning>,
}

/// Discover and resolve, without producing output
pub fn extract(source: &dyn AssetSource, config: &RunConfig) -> Result<Extraction> {
    let mut warnings = Warnings::new();
    let discovery = discover(source, config, &mut warnings)?;
    let result = resolve_engrams(source, &discovery, config, &mut warnings);

    tracing::info!(
        "Resolved {} engram(s) with {} warning(s)",
        result.engrams.len(),
        warnings.len()
    );
    Ok(Extraction {
        result,
        warnings: warnings.into_vec(),
    })
}

/// Run a full extraction and write the configured output
pub fn run(source: &dyn AssetSource, config: &RunConfig) -> Result<RunReport> {
    format::check_requirements(config)?;

    let Extraction { result, warnings } = extract(source, config)?;
    let document = format::project(&result, config)?;
    let output_path = writer::write(&document, config)?;

    Ok(RunReport {
        output_path,
        engram_count: result.engrams.len(),
        warnings,
    })
}
