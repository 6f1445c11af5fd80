//! Date kind enumeration.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Selects which formatting rule applies to a raw value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum DateKind {
    /// Absolute instant with a time of day, shown in the viewer's timezone
    #[default]
    #[serde(rename = "datetime")]
    Datetime,

    /// Calendar day with no time component, never shifted
    #[serde(rename = "dateOnly")]
    DateOnly,

    /// Duration-since-now phrasing
    #[serde(rename = "relative")]
    Relative,
}

impl FromStr for DateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "datetime" | "date-time" => Ok(DateKind::Datetime),
            "dateonly" | "date-only" | "date_only" | "date" => Ok(DateKind::DateOnly),
            "relative" => Ok(DateKind::Relative),
            _ => Err(format!("Invalid date kind: {s}")),
        }
    }
}

impl DateKind {
    /// Wire name used by stored profiles and the web client.
    pub fn as_str(&self) -> &'static str {
        match self {
            DateKind::Datetime => "datetime",
            DateKind::DateOnly => "dateOnly",
            DateKind::Relative => "relative",
        }
    }
}

impl fmt::Display for DateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
