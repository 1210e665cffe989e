//! Fatal run errors

use crate::asset::{AssetError, SnapshotError};
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification used when reporting a failed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or missing options; nothing was read
    Configuration,
    /// The asset snapshot could not be loaded
    Input,
    /// Nothing to extract
    Discovery,
    /// Extraction finished but the result could not be written
    Output,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ErrorKind::Configuration => "configuration",
            ErrorKind::Input => "input",
            ErrorKind::Discovery => "discovery",
            ErrorKind::Output => "output",
        };
        f.write_str(label)
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required option(s): {}", format_options(.0))]
    MissingRequiredOption(Vec<&'static str>),

    #[error("Invalid value for --{option}: {reason}")]
    InvalidOption { option: &'static str, reason: String },

    #[error("Could not find an asset with '{mda}' in its name under {folder}")]
    ModRootNotFound { folder: String, mda: String },

    #[error("Failed to load mod root {path}: {source}")]
    ModRootUnreadable {
        path: String,
        #[source]
        source: AssetError,
    },

    #[error("Asset snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to write output {path}: {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingRequiredOption(_) | Error::InvalidOption { .. } => ErrorKind::Configuration,
            Error::Snapshot(_) => ErrorKind::Input,
            Error::ModRootNotFound { .. } | Error::ModRootUnreadable { .. } => ErrorKind::Discovery,
            Error::Serialize(_) | Error::Csv(_) | Error::OutputWriteFailed { .. } => {
                ErrorKind::Output
            }
        }
    }

    pub(crate) fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::OutputWriteFailed {
            path: path.into(),
            source,
        }
    }
}

fn format_options(options: &[&'static str]) -> String {
    options
        .iter()
        .map(|o| format!("--{}", o))
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, Error>;
