//! Parsing of raw stored values.
//!
//! Stored values are ISO-8601 strings in UTC. Two shapes are accepted: a
//! calendar date (`YYYY-MM-DD`) and a full timestamp with `Z` or a numeric
//! offset. Timestamps written without an offset are read as UTC, unless they
//! carry an RFC 9557 `[Zone/Name]` annotation, in which case the wall clock
//! is read in that zone.

use std::str::FromStr;

use jiff::{civil::Date, civil::DateTime, tz::TimeZone, Timestamp, Zoned};

use crate::error::{FormatError, Result};

/// A raw value parsed into the shape it was stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawValue {
    /// A calendar day. Never shifted between timezones.
    Date(Date),
    /// An absolute instant, along with the calendar date as written.
    Instant { timestamp: Timestamp, written: Date },
}

impl RawValue {
    /// Parse a raw ISO-8601 string.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::InvalidInputFormat` when the string is neither a
    /// date nor a timestamp.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FormatError::invalid_input(raw).with_reason("empty value"));
        }
        if !has_date_prefix(trimmed.as_bytes()) {
            return Err(FormatError::invalid_input(raw).with_reason("expected YYYY-MM-DD"));
        }

        let written = Date::from_str(&trimmed[..10])
            .map_err(|e| FormatError::invalid_input(raw).with_reason(e.to_string()))?;

        if trimmed.len() == 10 {
            return Ok(RawValue::Date(written));
        }

        match trimmed.as_bytes()[10] {
            b'T' | b't' | b' ' => {}
            _ => {
                return Err(
                    FormatError::invalid_input(raw).with_reason("unexpected text after date")
                )
            }
        }

        let timestamp = parse_instant(trimmed)
            .map_err(|e| FormatError::invalid_input(raw).with_reason(e.to_string()))?;

        Ok(RawValue::Instant { timestamp, written })
    }

    /// Calendar date carried by the value, with no timezone applied.
    pub fn calendar_date(&self) -> Date {
        match self {
            RawValue::Date(date) => *date,
            RawValue::Instant { written, .. } => *written,
        }
    }

    /// Instant carried by the value, if it has one.
    pub fn timestamp(&self) -> Option<Timestamp> {
        match self {
            RawValue::Date(_) => None,
            RawValue::Instant { timestamp, .. } => Some(*timestamp),
        }
    }
}

/// Parse the instant in a timestamp whose date prefix is already checked.
fn parse_instant(text: &str) -> std::result::Result<Timestamp, jiff::Error> {
    if text.contains('[') {
        return Zoned::from_str(text).map(|zoned| zoned.timestamp());
    }
    if has_explicit_offset(&text[10..]) {
        return Timestamp::from_str(text);
    }
    DateTime::from_str(text)
        .and_then(|dt| dt.to_zoned(TimeZone::UTC))
        .map(|zoned| zoned.timestamp())
}

fn has_explicit_offset(time: &str) -> bool {
    time.contains(['Z', 'z', '+', '-'])
}

fn has_date_prefix(bytes: &[u8]) -> bool {
    bytes.len() >= 10
        && bytes[..10].iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
