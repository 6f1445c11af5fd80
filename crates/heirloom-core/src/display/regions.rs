//! Markdown views over the region preset table.

use std::fmt;

use jiff::Timestamp;

use super::UserDate;
use crate::{
    locale,
    models::{DateKind, RegionPreset},
};

/// Newtype wrapper for displaying presets as a markdown table.
///
/// # Examples
///
/// ```rust
/// use heirloom_core::{display::RegionTable, RegionPreset};
///
/// let table = RegionTable(&RegionPreset::ALL);
/// let output = format!("{}", table);
/// assert!(output.contains("| UK | en-GB | Europe/London | 24h |"));
/// ```
pub struct RegionTable<'a>(pub &'a [RegionPreset]);

impl<'a> fmt::Display for RegionTable<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No regions configured.");
        }

        writeln!(f, "| Region | Locale | Timezone | Clock |")?;
        writeln!(f, "|--------|--------|----------|-------|")?;
        for preset in self.0 {
            let clock = match locale::resolve(preset.locale()) {
                Ok(conventions) if conventions.uses_12_hour_clock() => "12h",
                Ok(_) => "24h",
                Err(_) => "?",
            };
            writeln!(
                f,
                "| {} | {} | {} | {} |",
                preset.as_str(),
                preset.locale(),
                preset.timezone(),
                clock
            )?;
        }
        Ok(())
    }
}

/// Comma-separated list of the locale tags with their own conventions.
pub struct LocaleList;

impl fmt::Display for LocaleList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags = locale::supported_tags().collect::<Vec<_>>();
        writeln!(f, "Supported locales: {}", tags.join(", "))
    }
}

/// One stored value rendered for every preset, as a markdown list.
pub struct RegionComparison<'a> {
    pub raw: &'a str,
    pub kind: DateKind,
    pub now: Timestamp,
}

impl<'a> RegionComparison<'a> {
    /// Compare a value across presets, pinned to `now`.
    pub fn new(raw: &'a str, kind: DateKind, now: Timestamp) -> Self {
        Self { raw, kind, now }
    }
}

impl<'a> fmt::Display for RegionComparison<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# `{}` as {}", self.raw.trim(), self.kind)?;
        writeln!(f)?;
        for preset in RegionPreset::ALL {
            let prefs = preset.prefs();
            writeln!(
                f,
                "- **{}** ({}): {}",
                preset.as_str(),
                prefs,
                UserDate::new(self.raw, self.kind, &prefs).at(self.now)
            )?;
        }
        Ok(())
    }
}
