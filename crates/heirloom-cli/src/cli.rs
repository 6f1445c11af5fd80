//! Command handlers.
//!
//! Argument structs carry clap attributes; the handlers translate them into
//! core types and hand the output to the [`TerminalRenderer`].

use anyhow::{Context, Result};
use clap::Args;
use heirloom_core::{
    format_for_user_at, try_format_for_user_at, DateKind, LocaleList, RegionComparison,
    RegionPreset, RegionPrefs, RegionTable, Settings,
};
use jiff::Timestamp;
use log::debug;

use crate::renderer::TerminalRenderer;

/// Format one stored value
#[derive(Args)]
pub struct FormatArgs {
    /// Stored ISO-8601 value, e.g. 1953-10-11 or 2025-09-19T18:30:00Z
    pub raw: String,
    /// How to render the value: datetime, date-only or relative
    #[arg(short, long)]
    pub kind: Option<DateKind>,
    /// Named region preset (see `heirloom regions`)
    #[arg(short, long)]
    pub region: Option<RegionPreset>,
    /// BCP-47 locale, overriding the region's
    #[arg(short, long)]
    pub locale: Option<String>,
    /// IANA timezone, overriding the region's
    #[arg(short, long)]
    pub timezone: Option<String>,
    /// Instant to measure relative phrases against instead of the clock
    #[arg(long)]
    pub now: Option<Timestamp>,
    /// Fail instead of printing the fallback text
    #[arg(long)]
    pub strict: bool,
}

impl FormatArgs {
    /// Region flags win over the profile when any of them is given.
    fn region_prefs(&self, settings: &Settings) -> RegionPrefs {
        if self.region.is_none() && self.locale.is_none() && self.timezone.is_none() {
            return settings.region();
        }
        RegionPrefs::from_profile(
            self.region.as_ref().map(RegionPreset::as_str),
            self.locale.as_deref(),
            self.timezone.as_deref(),
        )
    }
}

/// Format one stored value for every preset
#[derive(Args)]
pub struct CompareArgs {
    /// Stored ISO-8601 value
    pub raw: String,
    /// How to render the value: datetime, date-only or relative
    #[arg(short, long)]
    pub kind: Option<DateKind>,
    /// Instant to measure relative phrases against instead of the clock
    #[arg(long)]
    pub now: Option<Timestamp>,
}

/// Dispatches commands against the loaded settings.
pub struct Cli {
    settings: Settings,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(settings: Settings, renderer: TerminalRenderer) -> Self {
        Self { settings, renderer }
    }

    pub fn format(&self, args: &FormatArgs) -> Result<()> {
        let prefs = args.region_prefs(&self.settings);
        let kind = args.kind.unwrap_or_else(|| self.settings.default_kind());
        let now = args.now.unwrap_or_else(Timestamp::now);
        debug!("Formatting '{}' as {kind} for {prefs}", args.raw);

        let text = if args.strict {
            try_format_for_user_at(&args.raw, kind, &prefs, now)
                .with_context(|| format!("Failed to format '{}'", args.raw))?
        } else {
            format_for_user_at(&args.raw, kind, &prefs, now)
        };

        self.renderer.render_line(&text)
    }

    pub fn regions(&self) -> Result<()> {
        let markdown = format!("{}\n{}", RegionTable(&RegionPreset::ALL), LocaleList);
        self.renderer.render(&markdown)
    }

    pub fn compare(&self, args: &CompareArgs) -> Result<()> {
        let kind = args.kind.unwrap_or_else(|| self.settings.default_kind());
        let now = args.now.unwrap_or_else(Timestamp::now);
        self.renderer
            .render(&RegionComparison::new(&args.raw, kind, now).to_string())
    }
}
