//! Run configuration
//!
//! `Options` is what the command line (or a caller) hands in, with every
//! field optional. `RunConfig::validate` turns it into the immutable record
//! that every stage receives. Validation never touches the asset graph.

use crate::asset::path::folder_prefix;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Default ModDataAsset name fragment
pub const DEFAULT_MDA_NAME: &str = "ModDataAsset";

/// Output projection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Standard,
    Beacon,
    Csv,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Standard => "standard",
            Mode::Beacon => "beacon",
            Mode::Csv => "csv",
        }
    }
}

/// Raw, unvalidated options
#[derive(Debug, Clone)]
pub struct Options {
    pub mode: Mode,
    pub mod_root_folder: Option<String>,
    pub output_folder: Option<PathBuf>,
    pub mod_name: Option<String>,
    pub mod_id: Option<String>,
    pub content_pack_id: Option<String>,
    pub mda_name: Option<String>,
}

impl Options {
    pub fn new(mode: Mode) -> Self {
        Options {
            mode,
            mod_root_folder: None,
            output_folder: None,
            mod_name: None,
            mod_id: None,
            content_pack_id: None,
            mda_name: None,
        }
    }
}

/// Validated, immutable run configuration
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub mode: Mode,
    /// Always ends with `/`
    pub mod_root_folder: String,
    pub output_folder: PathBuf,
    pub mod_name: String,
    pub mda_name: String,
    /// Marketplace id; required for Beacon output
    pub mod_id: Option<String>,
    /// Opaque Beacon content pack id; required for Beacon output
    pub content_pack_id: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl RunConfig {
    /// Validate options, stamping the run with the current time
    pub fn validate(options: Options) -> Result<Self> {
        Self::validate_at(options, Utc::now())
    }

    /// Validate options with an explicit run timestamp
    pub fn validate_at(options: Options, generated_at: DateTime<Utc>) -> Result<Self> {
        let mode = options.mode;
        let mod_root_folder = non_empty(options.mod_root_folder);
        let output_folder = options.output_folder.filter(|p| !p.as_os_str().is_empty());
        let mod_name = non_empty(options.mod_name);
        let mod_id = non_empty(options.mod_id);
        let content_pack_id = non_empty(options.content_pack_id);

        let mut missing = Vec::new();
        if mod_root_folder.is_none() {
            missing.push("mod-root-folder");
        }
        if output_folder.is_none() {
            missing.push("output-folder");
        }
        if mod_name.is_none() {
            missing.push("mod-name");
        }
        if mode == Mode::Beacon {
            if mod_id.is_none() {
                missing.push("mod-id");
            }
            if content_pack_id.is_none() {
                missing.push("content-pack-id");
            }
        }

        let (Some(mod_root_folder), Some(output_folder), Some(mod_name)) =
            (mod_root_folder, output_folder, mod_name)
        else {
            return Err(Error::MissingRequiredOption(missing));
        };
        if !missing.is_empty() {
            return Err(Error::MissingRequiredOption(missing));
        }

        if !mod_root_folder.starts_with('/') {
            return Err(Error::InvalidOption {
                option: "mod-root-folder",
                reason: format!("'{}' must start with '/'", mod_root_folder),
            });
        }
        check_file_name("mod-name", &mod_name)?;
        if let Some(id) = &content_pack_id {
            check_file_name("content-pack-id", id)?;
        }

        Ok(RunConfig {
            mode,
            mod_root_folder: folder_prefix(&mod_root_folder),
            output_folder,
            mod_name,
            mda_name: non_empty(options.mda_name).unwrap_or_else(|| DEFAULT_MDA_NAME.to_string()),
            mod_id,
            content_pack_id,
            generated_at,
        })
    }
}

/// Options that end up as file or archive member names
fn check_file_name(option: &'static str, value: &str) -> Result<()> {
    if value.contains(['/', '\\']) || value == "." || value == ".." {
        return Err(Error::InvalidOption {
            option,
            reason: format!("'{}' is used as a file name and cannot contain path separators", value),
        });
    }
    Ok(())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn options(mode: Mode) -> Options {
        Options {
            mod_root_folder: Some("/MyMod".into()),
            output_folder: Some(PathBuf::from("out")),
            mod_name: Some("MyMod".into()),
            mod_id: Some("123456".into()),
            content_pack_id: Some("5a1f4e6e-0f2c-4a55-9a3e-2d7c7f0b8e11".into()),
            ..Options::new(mode)
        }
    }

    #[test]
    fn test_standard_mode_ignores_beacon_options() {
        let mut opts = options(Mode::Standard);
        opts.mod_id = None;
        opts.content_pack_id = None;

        let config = RunConfig::validate(opts).unwrap();
        assert_eq!(config.mod_root_folder, "/MyMod/");
        assert_eq!(config.mda_name, DEFAULT_MDA_NAME);
        assert!(config.content_pack_id.is_none());
    }

    #[test]
    fn test_beacon_requires_content_pack_id() {
        let mut opts = options(Mode::Beacon);
        opts.content_pack_id = None;

        match RunConfig::validate(opts) {
            Err(Error::MissingRequiredOption(missing)) => assert_eq!(missing, vec!["content-pack-id"]),
            other => panic!("expected MissingRequiredOption, got {:?}", other),
        }
    }

    #[test]
    fn test_all_missing_options_reported_together() {
        let opts = Options::new(Mode::Beacon);
        match RunConfig::validate(opts) {
            Err(Error::MissingRequiredOption(missing)) => assert_eq!(
                missing,
                vec!["mod-root-folder", "output-folder", "mod-name", "mod-id", "content-pack-id"]
            ),
            other => panic!("expected MissingRequiredOption, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let mut opts = options(Mode::Standard);
        opts.mod_name = Some("   ".into());
        assert!(matches!(
            RunConfig::validate(opts),
            Err(Error::MissingRequiredOption(m)) if m == vec!["mod-name"]
        ));
    }

    #[test]
    fn test_mod_root_must_be_absolute() {
        let mut opts = options(Mode::Standard);
        opts.mod_root_folder = Some("MyMod".into());
        assert!(matches!(
            RunConfig::validate(opts),
            Err(Error::InvalidOption { option: "mod-root-folder", .. })
        ));
    }

    #[test]
    fn test_mod_name_rejects_separators() {
        let mut opts = options(Mode::Standard);
        opts.mod_name = Some("../escape".into());
        assert!(matches!(
            RunConfig::validate(opts),
            Err(Error::InvalidOption { option: "mod-name", .. })
        ));
    }

    #[test]
    fn test_content_pack_id_rejects_separators() {
        for bad in ["../evil", "packs/mine", "..", "a\\b"] {
            let mut opts = options(Mode::Beacon);
            opts.content_pack_id = Some(bad.into());
            match RunConfig::validate(opts) {
                Err(err @ Error::InvalidOption { option: "content-pack-id", .. }) => {
                    assert_eq!(err.kind(), crate::error::ErrorKind::Configuration)
                }
                other => panic!("expected InvalidOption for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_beacon_ids_kept_verbatim() {
        let config = RunConfig::validate(options(Mode::Beacon)).unwrap();
        assert_eq!(config.mod_id.as_deref(), Some("123456"));
        assert_eq!(
            config.content_pack_id.as_deref(),
            Some("5a1f4e6e-0f2c-4a55-9a3e-2d7c7f0b8e11")
        );
    }

    #[test]
    fn test_custom_mda_name() {
        let mut opts = options(Mode::Csv);
        opts.mda_name = Some("MyModData".into());
        assert_eq!(RunConfig::validate(opts).unwrap().mda_name, "MyModData");
    }
}
