//! CLI argument definitions for modparse
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;

pub use core::{BeaconArgs, Cli, Commands, ExtractArgs};
