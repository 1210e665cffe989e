//! Extraction command handlers
//!
//! Merges command-line values with stored defaults, validates them, then
//! loads the asset snapshot and runs the pipeline.

use crate::cli::ExtractArgs;
use crate::config::Config;
use anyhow::Result;
use modparse::{load_snapshot, Error, Mode, Options, RunConfig, RunReport};
use std::path::PathBuf;

/// Beacon-only identifiers
#[derive(Debug, Default, Clone)]
pub struct BeaconIds {
    pub mod_id: Option<String>,
    pub content_pack_id: Option<String>,
}

/// Handle `standard`, `beacon` and `csv`
pub fn handle(mode: Mode, args: ExtractArgs, ids: BeaconIds) -> Result<()> {
    let defaults = Config::load()?;
    let (options, assets) = build_options(mode, args, ids, &defaults);
    let (config, assets) = validate(options, assets)?;

    tracing::info!("Starting {} extraction for {}", mode.as_str(), config.mod_name);

    let source = load_snapshot(&assets).map_err(Error::from)?;
    tracing::info!("Loaded {} assets from {}", source.len(), assets.display());

    let report = modparse::run(&source, &config)?;
    print_report(&report);

    Ok(())
}

/// Command-line values win; stored defaults fill the gaps
fn build_options(
    mode: Mode,
    args: ExtractArgs,
    ids: BeaconIds,
    defaults: &Config,
) -> (Options, Option<PathBuf>) {
    let options = Options {
        mod_root_folder: args.mod_root_folder,
        output_folder: args.output_folder.or_else(|| defaults.output_folder.clone()),
        mod_name: args.mod_name,
        mod_id: ids.mod_id,
        content_pack_id: ids.content_pack_id,
        mda_name: args.mda.or_else(|| defaults.mda.clone()),
        ..Options::new(mode)
    };
    let assets = args.assets.or_else(|| defaults.assets.clone());
    (options, assets)
}

/// Validate options and the snapshot path together, so every missing
/// option is reported at once
fn validate(options: Options, assets: Option<PathBuf>) -> modparse::Result<(RunConfig, PathBuf)> {
    match (RunConfig::validate(options), assets) {
        (Ok(config), Some(assets)) => Ok((config, assets)),
        (Ok(_), None) => Err(Error::MissingRequiredOption(vec!["assets"])),
        (Err(Error::MissingRequiredOption(mut missing)), None) => {
            missing.push("assets");
            Err(Error::MissingRequiredOption(missing))
        }
        (Err(err), _) => Err(err),
    }
}

fn print_report(report: &RunReport) {
    println!("Done! {}", report.output_path.display());
    println!("Extracted {} engram(s)", report.engram_count);

    if report.warnings.is_empty() {
        return;
    }
    println!();
    println!("{} warning(s):", report.warnings.len());
    for warning in &report.warnings {
        println!("  - {}", warning);
    }
}
