use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CompareArgs, FormatArgs};

/// Render stored family dates the way each viewer sees them
///
/// Heirloom stores every date as a UTC ISO-8601 string. This tool shows how
/// a stored value renders for a region: as a local date and time, as a
/// calendar day, or as a relative phrase.
#[derive(Parser)]
#[command(version, about, name = "heirloom")]
pub struct Args {
    /// Path to the JSON profile file. Defaults to
    /// $XDG_CONFIG_HOME/heirloom/config.json when present
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Heirloom CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Format one stored value for a viewer
    #[command(alias = "f")]
    Format(FormatArgs),
    /// List the named region presets
    Regions,
    /// Format one stored value for every region preset
    #[command(alias = "c")]
    Compare(CompareArgs),
}
