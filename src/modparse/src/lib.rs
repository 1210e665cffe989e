//! # modparse
//!
//! ARK: Survival Ascended mod engram extraction.
//!
//! This library provides functionality to:
//! - Query a mod's assets through a read-only adapter (`AssetSource`)
//! - Discover the engrams a mod declares on its ModDataAsset
//! - Resolve each engram's item, unlock requirements and crafting recipe
//! - Project the result as standard JSON, a Beacon `.beacondata` archive or CSV
//!
//! ## Example
//!
//! ```no_run
//! use modparse::{load_snapshot, run, Mode, Options, RunConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut options = Options::new(Mode::Standard);
//! options.mod_root_folder = Some("/MyMod".into());
//! options.output_folder = Some("out".into());
//! options.mod_name = Some("MyMod".into());
//!
//! // Validate before touching any assets
//! let config = RunConfig::validate(options)?;
//! let assets = load_snapshot("assets.json".as_ref())?;
//!
//! let report = run(&assets, &config)?;
//! println!("Done! {}", report.output_path.display());
//! for warning in &report.warnings {
//!     println!("  {}", warning);
//! }
//! # Ok(())
//! # }
//! ```

pub mod asset;
pub mod config;
pub mod discover;
pub mod error;
pub mod format;
pub mod model;
pub mod pipeline;
pub mod resolve;
pub mod warning;
pub mod writer;

// Re-export commonly used items
#[doc(inline)]
pub use asset::{
    load_snapshot, AssetError, AssetGraph, AssetHandle, AssetRecord, AssetSource, ClassRef,
    PropertyValue, SnapshotError,
};
#[doc(inline)]
pub use config::{Mode, Options, RunConfig, DEFAULT_MDA_NAME};
#[doc(inline)]
pub use discover::{discover, Discovery};
#[doc(inline)]
pub use error::{Error, ErrorKind, Result};
#[doc(inline)]
pub use format::{BeaconPackage, CsvTable, OutputDocument, StandardDocument};
#[doc(inline)]
pub use model::{EngramDefinition, ExtractionResult, RecipeEntry, RunMetadata};
#[doc(inline)]
pub use pipeline::{extract, run, Extraction, RunReport};
#[doc(inline)]
pub use resolve::resolve_engrams;
#[doc(inline)]
pub use warning::{Warning, Warnings};
