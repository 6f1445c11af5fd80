//! Locale-aware formatting of stored dates.
//!
//! The entry points map `(raw UTC value, DateKind, RegionPrefs)` to a display
//! string. [`try_format_for_user`] reports failures, [`format_for_user`]
//! swaps them for a fallback so rendering code never sees an error.

use jiff::{civil::Date, fmt::strtime, tz::TimeZone, Timestamp, Zoned};
use log::warn;

use crate::{
    error::{FormatError, Result},
    locale::{self, Conventions},
    models::{DateKind, RawValue, RegionPrefs},
    relative,
};

/// Shown in place of values that cannot be parsed.
pub const FALLBACK_TEXT: &str = "Invalid date";

/// Format a raw value for a viewer, reporting any failure.
///
/// # Errors
///
/// - `FormatError::InvalidInputFormat` if `raw` is not an ISO-8601 date or
///   timestamp
/// - `FormatError::UnsupportedLocale` if the locale has no conventions
/// - `FormatError::UnsupportedTimezone` if the timezone is unknown
pub fn try_format_for_user(raw: &str, kind: DateKind, prefs: &RegionPrefs) -> Result<String> {
    try_format_for_user_at(raw, kind, prefs, Timestamp::now())
}

/// Like [`try_format_for_user`], with an explicit current instant for
/// relative phrasing.
pub fn try_format_for_user_at(
    raw: &str,
    kind: DateKind,
    prefs: &RegionPrefs,
    now: Timestamp,
) -> Result<String> {
    let value = RawValue::parse(raw)?;
    let conventions = locale::resolve(prefs.locale())?;

    match (kind, value) {
        (DateKind::DateOnly, value) | (DateKind::Datetime, value @ RawValue::Date(_)) => {
            format_date(value.calendar_date(), conventions)
        }
        (DateKind::Datetime, RawValue::Instant { timestamp, .. }) => {
            let zoned = timestamp.to_zoned(resolve_timezone(prefs.timezone())?);
            format_datetime(&zoned, conventions)
        }
        (DateKind::Relative, RawValue::Date(date)) => {
            let today = now.to_zoned(resolve_timezone(prefs.timezone())?).date();
            relative::describe_date(date, today, conventions.phrases)
        }
        (DateKind::Relative, RawValue::Instant { timestamp, .. }) => {
            // Validated so an unknown zone fails the same way for every kind.
            resolve_timezone(prefs.timezone())?;
            Ok(relative::describe_instant(
                timestamp,
                now,
                conventions.phrases,
            ))
        }
    }
}

/// Format a raw value for a viewer, never failing.
///
/// Unparseable values render as [`FALLBACK_TEXT`]. Values that parse but
/// cannot be localized for the viewer's region render as the raw string.
pub fn format_for_user(raw: &str, kind: DateKind, prefs: &RegionPrefs) -> String {
    format_for_user_at(raw, kind, prefs, Timestamp::now())
}

/// Like [`format_for_user`], with an explicit current instant for relative
/// phrasing.
pub fn format_for_user_at(
    raw: &str,
    kind: DateKind,
    prefs: &RegionPrefs,
    now: Timestamp,
) -> String {
    try_format_for_user_at(raw, kind, prefs, now).unwrap_or_else(|err| {
        warn!("Falling back for {kind} value '{raw}' ({prefs}): {err}");
        fallback_for(raw, &err)
    })
}

/// Fallback text for a failed format.
pub fn fallback_for(raw: &str, err: &FormatError) -> String {
    if err.is_region_error() {
        raw.trim().to_string()
    } else {
        FALLBACK_TEXT.to_string()
    }
}

fn resolve_timezone(name: &str) -> Result<TimeZone> {
    TimeZone::get(name.trim()).map_err(|e| FormatError::UnsupportedTimezone {
        timezone: name.to_string(),
        reason: e.to_string(),
    })
}

fn format_date(date: Date, conventions: &Conventions) -> Result<String> {
    strtime::format(conventions.date_pattern, date).map_err(|e| pattern_error(conventions, &e))
}

fn format_datetime(zoned: &Zoned, conventions: &Conventions) -> Result<String> {
    let date = strtime::format(conventions.date_pattern, zoned)
        .map_err(|e| pattern_error(conventions, &e))?;
    let time = strtime::format(conventions.time_pattern, zoned)
        .map(|time| conventions.localize_meridiem(time))
        .map_err(|e| pattern_error(conventions, &e))?;
    Ok(format!("{date}{}{time}", conventions.date_time_separator))
}

fn pattern_error(conventions: &Conventions, err: &jiff::Error) -> FormatError {
    FormatError::Configuration {
        message: format!("pattern for locale {} failed: {err}", conventions.tag),
    }
}
