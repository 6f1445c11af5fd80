//! Relative ("3 days ago", "in 2 hours") phrasing.
//!
//! Durations are phrased by [`timeago::Formatter`] in the largest unit that
//! fits at least once, truncated, so 47 hours reads as "1 day".

use std::time::Duration;

use jiff::{civil::Date, Timestamp};
use timeago::{BoxedLanguage, Formatter};

use crate::{
    error::{FormatError, Result},
    locale::Phrasebook,
};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

fn formatter(phrases: &Phrasebook, future: bool) -> Formatter<BoxedLanguage> {
    let mut formatter = Formatter::with_language(phrases.time_language());
    formatter.too_low(phrases.now);
    if future {
        formatter.ago("");
    }
    formatter
}

/// Phrase an elapsed duration in the past or the future.
pub fn phrase(elapsed: Duration, future: bool, phrases: &Phrasebook) -> String {
    let text = formatter(phrases, future).convert(elapsed);
    if future {
        let amount = text.split_whitespace().collect::<Vec<_>>().join(" ");
        phrases.future.replacen("{}", &amount, 1)
    } else {
        text
    }
}

/// Describe an instant relative to `now`.
pub fn describe_instant(value: Timestamp, now: Timestamp, phrases: &Phrasebook) -> String {
    let delta = value.duration_since(now);
    if delta.as_secs() == 0 {
        return phrases.now.to_string();
    }
    phrase(delta.unsigned_abs(), !delta.is_negative(), phrases)
}

/// Describe a calendar day relative to the viewer's current day.
///
/// # Errors
///
/// Returns `FormatError::InvalidInputFormat` if the day distance cannot be
/// computed.
pub fn describe_date(value: Date, today: Date, phrases: &Phrasebook) -> Result<String> {
    let days = i64::from(
        today
            .until(value)
            .map_err(|e| FormatError::invalid_input(value.to_string()).with_reason(e.to_string()))?
            .get_days(),
    );
    if days == 0 {
        return Ok(phrases.today.to_string());
    }
    let elapsed = Duration::from_secs(days.unsigned_abs() * SECONDS_PER_DAY);
    Ok(phrase(elapsed, days > 0, phrases))
}
