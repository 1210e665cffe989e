//! Core CLI definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "modparse")]
#[command(about = "ARK: Survival Ascended mod engram extractor", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write engrams as a standard JSON document
    Standard(ExtractArgs),

    /// Write a .beacondata archive that Beacon can import
    Beacon(BeaconArgs),

    /// Write engrams as a spreadsheet-friendly CSV file
    Csv(ExtractArgs),

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set the default asset snapshot (file or directory)
        #[arg(long)]
        assets: Option<PathBuf>,

        /// Set the default output folder
        #[arg(long)]
        output_folder: Option<PathBuf>,

        /// Set the default ModDataAsset name
        #[arg(long)]
        mda: Option<String>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

/// Options shared by every extraction mode
#[derive(Args, Debug, Clone, Default)]
pub struct ExtractArgs {
    /// Asset snapshot exported from the editor (uses configured default if not provided)
    #[arg(long, env = "MODPARSE_ASSETS")]
    pub assets: Option<PathBuf>,

    /// Root folder of the mod, e.g. /MyMod
    #[arg(long, env = "MODPARSE_MOD_ROOT_FOLDER")]
    pub mod_root_folder: Option<String>,

    /// Folder the output file is written to (uses configured default if not provided)
    #[arg(long, env = "MODPARSE_OUTPUT_FOLDER")]
    pub output_folder: Option<PathBuf>,

    /// Name of the mod, also used as the output file name
    #[arg(long, env = "MODPARSE_MOD_NAME")]
    pub mod_name: Option<String>,

    /// ModDataAsset file name, defaults to ModDataAsset
    #[arg(long, env = "MODPARSE_MDA")]
    pub mda: Option<String>,
}

/// Beacon mode needs the marketplace and content pack ids on top
#[derive(Args, Debug, Clone, Default)]
pub struct BeaconArgs {
    #[command(flatten)]
    pub common: ExtractArgs,

    /// CurseForge id of the mod
    #[arg(long, env = "MODPARSE_MOD_ID")]
    pub mod_id: Option<String>,

    /// Content pack id assigned by Beacon
    #[arg(long, env = "MODPARSE_CONTENT_PACK_ID")]
    pub content_pack_id: Option<String>,
}
