//! Heirloom CLI Application
//!
//! Command-line interface for inspecting how stored dates render per region.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use heirloom_core::SettingsBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config_file,
        no_color,
        command,
    } = Args::parse();

    let settings = SettingsBuilder::new()
        .with_config_path(config_file)
        .build()
        .context("Failed to load settings")?;

    if let Some(path) = settings.source() {
        info!("Using settings from {}", path.display());
    }

    let cli = Cli::new(settings, TerminalRenderer::new(!no_color));

    match command {
        Format(args) => cli.format(&args),
        Regions => cli.regions(),
        Compare(args) => cli.compare(&args),
    }
}
