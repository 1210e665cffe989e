//! Output writer
//!
//! Encodes a projected document and writes it as `<mod-name>.<ext>` in the
//! output folder, creating the folder first. Returns the absolute path of
//! the written file.

use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::format::{to_pretty_json, BeaconPackage, OutputDocument};
use chrono::{DateTime, Utc};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Path the document will be written to, relative to the output folder
pub fn output_path(document: &OutputDocument, config: &RunConfig) -> PathBuf {
    config
        .output_folder
        .join(format!("{}.{}", config.mod_name, document.extension()))
}

/// Encode a document into the bytes written to disk
pub fn encode(document: &OutputDocument, config: &RunConfig) -> Result<Vec<u8>> {
    match document {
        OutputDocument::Standard(doc) => to_pretty_json(doc),
        OutputDocument::Csv(table) => table.to_bytes(),
        OutputDocument::Beacon(package) => {
            let target = output_path(document, config);
            beacon_archive(package, config.generated_at)
                .map_err(|err| err.with_path(&target))
        }
    }
}

/// Write the document and return its absolute path
pub fn write(document: &OutputDocument, config: &RunConfig) -> Result<PathBuf> {
    let bytes = encode(document, config)?;
    let path = output_path(document, config);

    fs::create_dir_all(&config.output_folder)
        .map_err(|e| Error::write_failed(&config.output_folder, e))?;
    fs::write(&path, &bytes).map_err(|e| Error::write_failed(&path, e))?;
    let path = path.canonicalize().map_err(|e| Error::write_failed(&path, e))?;

    tracing::info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(path)
}

/// Build the gzipped tar holding the manifest and content file
pub fn beacon_archive(package: &BeaconPackage, mtime: DateTime<Utc>) -> Result<Vec<u8>> {
    let members = package.members()?;
    let mtime = mtime.timestamp().max(0) as u64;
    let io_err = |e| Error::write_failed(PathBuf::new(), e);

    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for (name, data) in &members {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_mtime(mtime);
        builder
            .append_data(&mut header, name, data.as_slice())
            .map_err(io_err)?;
    }

    let mut encoder = builder.into_inner().map_err(io_err)?;
    encoder.flush().map_err(io_err)?;
    encoder.finish().map_err(io_err)
}

impl Error {
    /// Attach the destination path to a write failure raised while encoding
    fn with_path(self, path: &Path) -> Self {
        match self {
            Error::OutputWriteFailed { source, .. } => Error::write_failed(path, source),
            other => other,
        }
    }
}
