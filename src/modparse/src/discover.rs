//! Engram discovery
//!
//! Finds the mod's ModDataAsset below the configured root folder, reads its
//! declared engram blueprint classes and resolves each one to a handle.
//! Dangling references are recorded and skipped; only a missing mod root is
//! fatal.

use crate::asset::path::base_filename;
use crate::asset::{AssetError, AssetHandle, AssetSource};
use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::warning::{Warning, Warnings};
use std::collections::HashSet;

/// Property on the ModDataAsset listing engram entry classes
pub const ADDITIONAL_ENGRAMS: &str = "AdditionalEngramBlueprintClasses";

/// Output of discovery: the mod root plus engram classes in first-seen order
#[derive(Debug, Clone, PartialEq)]
pub struct Discovery {
    pub mod_root: AssetHandle,
    pub engrams: Vec<AssetHandle>,
}

/// Locate the ModDataAsset: the first asset (sorted) under the mod root
/// folder whose file name contains the configured name, ignoring case
pub fn locate_mod_root(source: &dyn AssetSource, config: &RunConfig) -> Result<AssetHandle> {
    let needle = config.mda_name.to_lowercase();
    let not_found = || Error::ModRootNotFound {
        folder: config.mod_root_folder.clone(),
        mda: config.mda_name.clone(),
    };

    let path = source
        .list_assets(&config.mod_root_folder)
        .into_iter()
        .find(|path| base_filename(path).to_lowercase().contains(&needle))
        .ok_or_else(not_found)?;

    source.resolve(&path).map_err(|_| not_found())
}

/// Discover all engram classes declared by the mod
pub fn discover(
    source: &dyn AssetSource,
    config: &RunConfig,
    warnings: &mut Warnings,
) -> Result<Discovery> {
    let mod_root = locate_mod_root(source, config)?;
    tracing::info!("Found ModDataAsset: {}", mod_root);

    let declared = match source.list_referenced_classes(&mod_root, ADDITIONAL_ENGRAMS) {
        Ok(refs) => refs,
        Err(AssetError::PropertyMissing { .. }) => {
            warnings.push(Warning::EngramListMissing {
                mod_root: mod_root.path().to_string(),
            });
            Vec::new()
        }
        Err(err) => {
            return Err(Error::ModRootUnreadable {
                path: mod_root.path().to_string(),
                source: err,
            })
        }
    };
    tracing::info!("{} engram entries declared", declared.len());

    let mut seen = HashSet::new();
    let mut engrams = Vec::with_capacity(declared.len());

    for reference in &declared {
        let resolved = reference
            .path()
            .ok_or_else(|| AssetError::NotFound(reference.to_string()))
            .and_then(|path| source.resolve(path));

        match resolved {
            Ok(handle) => {
                if seen.insert(handle.path().to_string()) {
                    engrams.push(handle);
                } else {
                    tracing::debug!("Skipping duplicate engram class {}", handle);
                }
            }
            Err(err) => {
                tracing::debug!("Failed to resolve {}: {}", reference, err);
                warnings.push(Warning::DanglingReference {
                    reference: reference.to_string(),
                });
            }
        }
    }

    Ok(Discovery { mod_root, engrams })
}
