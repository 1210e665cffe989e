//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up modparse defaults.

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Values the user asked to store
#[derive(Debug, Default)]
pub struct Updates {
    pub assets: Option<PathBuf>,
    pub output_folder: Option<PathBuf>,
    pub mda: Option<String>,
}

impl Updates {
    fn is_empty(&self) -> bool {
        self.assets.is_none() && self.output_folder.is_none() && self.mda.is_none()
    }
}

/// Handle the configure command
pub fn handle(updates: Updates, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if updates.is_empty() {
        show_usage();
        return Ok(());
    }

    apply(&mut config, updates);
    let path = config.save()?;
    println!("Config saved to: {}", path.display());
    show_config(&config);

    Ok(())
}

/// Merge updates into the stored configuration, keeping unset fields
fn apply(config: &mut Config, updates: Updates) {
    if let Some(assets) = updates.assets {
        config.assets = Some(assets);
    }
    if let Some(folder) = updates.output_folder {
        config.output_folder = Some(folder);
    }
    if let Some(mda) = updates.mda {
        config.mda = Some(mda);
    }
}

/// Display current configuration
fn show_config(config: &Config) {
    if config.is_empty() {
        println!("No defaults configured");
    }
    if let Some(assets) = &config.assets {
        println!("Assets: {}", assets.display());
    }
    if let Some(folder) = &config.output_folder {
        println!("Output folder: {}", folder.display());
    }
    if let Some(mda) = &config.mda {
        println!("ModDataAsset: {}", mda);
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: modparse configure --assets PATH [--output-folder DIR] [--mda NAME]");
    println!("   or: modparse configure --show");
    println!();
    println!("Note: the asset snapshot is exported from the ARK DevKit and can be");
    println!("      a single JSON file or a directory of per-asset JSON files.");
}
