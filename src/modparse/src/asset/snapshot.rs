//! Asset snapshot loading
//!
//! The editor-side exporter writes the project's object graph as JSON, either
//! as one document:
//!
//! ```json
//! { "assets": [ { "path": "/MyMod/A.A_C", "super": "/MyMod/B.B_C", "properties": { ... } } ] }
//! ```
//!
//! or as a directory tree with one record per `*.json` file.

use super::{AssetGraph, AssetRecord};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Snapshot path does not exist: {0}")]
    Missing(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

#[derive(Deserialize)]
struct SnapshotDocument {
    assets: Vec<AssetRecord>,
}

/// Load an asset graph from a snapshot file or directory
pub fn load_snapshot(path: &Path) -> Result<AssetGraph, SnapshotError> {
    if path.is_file() {
        let document: SnapshotDocument = read_json(path)?;
        tracing::debug!("Loaded {} assets from {}", document.assets.len(), path.display());
        return Ok(document.assets.into_iter().collect());
    }

    if !path.is_dir() {
        return Err(SnapshotError::Missing(path.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.map_err(|source| SnapshotError::Walk {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = entry
            .path()
            .extension()
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if entry.file_type().is_file() && is_json {
            files.push(entry.into_path());
        }
    }

    let mut graph = AssetGraph::new();
    for file in &files {
        let record: AssetRecord = read_json(file)?;
        graph.insert(record);
    }
    tracing::debug!("Loaded {} assets from {} files under {}", graph.len(), files.len(), path.display());

    Ok(graph)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SnapshotError> {
    let data = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| SnapshotError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
