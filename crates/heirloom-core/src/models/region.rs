//! Viewer region preferences and the named preset table.

use std::{fmt, str::FromStr};

use log::debug;
use serde::{Deserialize, Serialize};

/// Named regions a viewer can pick in their profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum RegionPreset {
    /// United Kingdom
    #[default]
    #[serde(alias = "GB")]
    Uk,
    /// United States (Eastern)
    Us,
    /// Ireland
    Ie,
    /// Australia (Sydney)
    Au,
    /// New Zealand
    Nz,
    /// Canada (Toronto)
    Ca,
    /// France
    Fr,
    /// Germany
    De,
    /// Spain
    Es,
    /// Netherlands
    Nl,
}

impl RegionPreset {
    /// Every preset, in display order.
    pub const ALL: [RegionPreset; 10] = [
        RegionPreset::Uk,
        RegionPreset::Us,
        RegionPreset::Ie,
        RegionPreset::Au,
        RegionPreset::Nz,
        RegionPreset::Ca,
        RegionPreset::Fr,
        RegionPreset::De,
        RegionPreset::Es,
        RegionPreset::Nl,
    ];

    /// Short name as stored in profiles.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionPreset::Uk => "UK",
            RegionPreset::Us => "US",
            RegionPreset::Ie => "IE",
            RegionPreset::Au => "AU",
            RegionPreset::Nz => "NZ",
            RegionPreset::Ca => "CA",
            RegionPreset::Fr => "FR",
            RegionPreset::De => "DE",
            RegionPreset::Es => "ES",
            RegionPreset::Nl => "NL",
        }
    }

    /// BCP-47 locale tag for this preset.
    pub fn locale(&self) -> &'static str {
        match self {
            RegionPreset::Uk => "en-GB",
            RegionPreset::Us => "en-US",
            RegionPreset::Ie => "en-IE",
            RegionPreset::Au => "en-AU",
            RegionPreset::Nz => "en-NZ",
            RegionPreset::Ca => "en-CA",
            RegionPreset::Fr => "fr-FR",
            RegionPreset::De => "de-DE",
            RegionPreset::Es => "es-ES",
            RegionPreset::Nl => "nl-NL",
        }
    }

    /// IANA timezone name for this preset.
    pub fn timezone(&self) -> &'static str {
        match self {
            RegionPreset::Uk => "Europe/London",
            RegionPreset::Us => "America/New_York",
            RegionPreset::Ie => "Europe/Dublin",
            RegionPreset::Au => "Australia/Sydney",
            RegionPreset::Nz => "Pacific/Auckland",
            RegionPreset::Ca => "America/Toronto",
            RegionPreset::Fr => "Europe/Paris",
            RegionPreset::De => "Europe/Berlin",
            RegionPreset::Es => "Europe/Madrid",
            RegionPreset::Nl => "Europe/Amsterdam",
        }
    }

    /// Build the preferences this preset stands for.
    pub fn prefs(&self) -> RegionPrefs {
        RegionPrefs::from_preset(*self)
    }
}

impl FromStr for RegionPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "UK" | "GB" => Ok(RegionPreset::Uk),
            "US" => Ok(RegionPreset::Us),
            "IE" => Ok(RegionPreset::Ie),
            "AU" => Ok(RegionPreset::Au),
            "NZ" => Ok(RegionPreset::Nz),
            "CA" => Ok(RegionPreset::Ca),
            "FR" => Ok(RegionPreset::Fr),
            "DE" => Ok(RegionPreset::De),
            "ES" => Ok(RegionPreset::Es),
            "NL" => Ok(RegionPreset::Nl),
            _ => Err(format!("Invalid region: {s}")),
        }
    }
}

impl fmt::Display for RegionPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A viewer's formatting preference: a BCP-47 locale and an IANA timezone.
///
/// Values are never validated on construction. Unknown locales or timezones
/// surface when formatting, where they turn into a fallback string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionPrefs {
    locale: String,
    timezone: String,
}

impl RegionPrefs {
    /// Create preferences from explicit locale and timezone strings.
    pub fn new(locale: impl Into<String>, timezone: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            timezone: timezone.into(),
        }
    }

    /// Create preferences from a named preset.
    pub fn from_preset(preset: RegionPreset) -> Self {
        Self::new(preset.locale(), preset.timezone())
    }

    /// Derive preferences from stored profile fields.
    ///
    /// Explicit `locale` and `timezone` take priority over the named
    /// `region`. Missing pieces come from the named region, or from the
    /// default preset when the name is blank or unknown.
    pub fn from_profile(
        region: Option<&str>,
        locale: Option<&str>,
        timezone: Option<&str>,
    ) -> Self {
        let preset = match non_blank(region) {
            Some(name) => name.parse::<RegionPreset>().unwrap_or_else(|_| {
                debug!("Unknown profile region '{name}', using default");
                RegionPreset::default()
            }),
            None => RegionPreset::default(),
        };

        Self::new(
            non_blank(locale).unwrap_or(preset.locale()),
            non_blank(timezone).unwrap_or(preset.timezone()),
        )
    }

    /// BCP-47 locale tag.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// IANA timezone name.
    pub fn timezone(&self) -> &str {
        &self.timezone
    }
}

impl Default for RegionPrefs {
    fn default() -> Self {
        Self::from_preset(RegionPreset::default())
    }
}

impl From<RegionPreset> for RegionPrefs {
    fn from(preset: RegionPreset) -> Self {
        Self::from_preset(preset)
    }
}

impl fmt::Display for RegionPrefs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.locale, self.timezone)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
