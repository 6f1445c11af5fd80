//! DateTime display utilities.
//!
//! Wrapper types that render a stored value for a particular viewer through
//! the `Display` trait.

use std::fmt;

use jiff::Timestamp;

use crate::{
    formatter::format_for_user_at,
    models::{DateKind, RegionPrefs},
};

/// A stored value paired with the viewer it is rendered for.
///
/// Formatting never fails. Values that cannot be localized render as the
/// fallback text, exactly as [`crate::format_for_user`] does.
///
/// # Examples
///
/// ```rust
/// use heirloom_core::{display::UserDate, DateKind, RegionPreset};
///
/// let uk = RegionPreset::Uk.prefs();
/// let birthday = UserDate::new("1953-10-11", DateKind::DateOnly, &uk);
/// assert_eq!(birthday.to_string(), "11/10/1953");
/// ```
pub struct UserDate<'a> {
    raw: &'a str,
    kind: DateKind,
    prefs: &'a RegionPrefs,
    now: Option<Timestamp>,
}

impl<'a> UserDate<'a> {
    /// Create a wrapper that reads the clock when rendered.
    pub fn new(raw: &'a str, kind: DateKind, prefs: &'a RegionPrefs) -> Self {
        Self {
            raw,
            kind,
            prefs,
            now: None,
        }
    }

    /// Pin the current instant used for relative phrasing.
    pub fn at(mut self, now: Timestamp) -> Self {
        self.now = Some(now);
        self
    }
}

impl<'a> fmt::Display for UserDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let now = self.now.unwrap_or_else(Timestamp::now);
        f.write_str(&format_for_user_at(self.raw, self.kind, self.prefs, now))
    }
}
