//! Locale conventions.
//!
//! Each supported locale maps to strftime patterns for dates and times and
//! to a [`Phrasebook`] for relative phrasing. Locale tags resolve by
//! language and region first, then by language alone.

use timeago::{
    languages::{english::English, french::French, german::German, spanish::Spanish},
    BoxedLanguage, Language, TimeUnit,
};

use crate::error::{FormatError, Result};

/// Relative-time phrasing for one language.
///
/// Unit names, plural forms and the "ago" placement come from a
/// [`timeago::Language`]. `future` holds a `{}` placeholder for
/// "count unit", since timeago only phrases the past.
#[derive(Debug)]
pub struct Phrasebook {
    pub language: &'static str,
    pub future: &'static str,
    pub now: &'static str,
    pub today: &'static str,
    words: fn() -> BoxedLanguage,
}

impl Phrasebook {
    /// Fresh timeago language for this phrasebook.
    pub fn time_language(&self) -> BoxedLanguage {
        (self.words)()
    }
}

fn english() -> BoxedLanguage {
    Box::new(English)
}

fn french() -> BoxedLanguage {
    Box::new(French)
}

fn german() -> BoxedLanguage {
    Box::new(German)
}

fn spanish() -> BoxedLanguage {
    Box::new(Spanish)
}

fn dutch() -> BoxedLanguage {
    Box::new(Dutch)
}

static ENGLISH: Phrasebook = Phrasebook {
    language: "en",
    future: "in {}",
    now: "now",
    today: "today",
    words: english,
};

static FRENCH: Phrasebook = Phrasebook {
    language: "fr",
    future: "dans {}",
    now: "maintenant",
    today: "aujourd’hui",
    words: french,
};

static GERMAN: Phrasebook = Phrasebook {
    language: "de",
    future: "in {}",
    now: "jetzt",
    today: "heute",
    words: german,
};

static SPANISH: Phrasebook = Phrasebook {
    language: "es",
    future: "dentro de {}",
    now: "ahora",
    today: "hoy",
    words: spanish,
};

static DUTCH: Phrasebook = Phrasebook {
    language: "nl",
    future: "over {}",
    now: "nu",
    today: "vandaag",
    words: dutch,
};

/// Dutch unit names; timeago ships no Dutch translation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dutch;

impl Language for Dutch {
    fn clone_boxed(&self) -> BoxedLanguage {
        Box::new(*self)
    }

    fn too_low(&self) -> &'static str {
        "nu"
    }

    fn too_high(&self) -> &'static str {
        "oud"
    }

    fn ago(&self) -> &'static str {
        "geleden"
    }

    fn get_word(&self, tu: TimeUnit, x: u64) -> &'static str {
        use TimeUnit::*;
        if x == 1 {
            match tu {
                Nanoseconds => "nanoseconde",
                Microseconds => "microseconde",
                Milliseconds => "milliseconde",
                Seconds => "seconde",
                Minutes => "minuut",
                Hours => "uur",
                Days => "dag",
                Weeks => "week",
                Months => "maand",
                Years => "jaar",
            }
        } else {
            match tu {
                Nanoseconds => "nanoseconden",
                Microseconds => "microseconden",
                Milliseconds => "milliseconden",
                Seconds => "seconden",
                Minutes => "minuten",
                Hours => "uur",
                Days => "dagen",
                Weeks => "weken",
                Months => "maanden",
                Years => "jaar",
            }
        }
    }
}

/// Formatting conventions for a resolved locale.
#[derive(Debug)]
pub struct Conventions {
    /// Canonical tag of the table entry
    pub tag: &'static str,
    /// strftime pattern for calendar dates
    pub date_pattern: &'static str,
    /// strftime pattern for time of day
    pub time_pattern: &'static str,
    /// Text between the date and the time
    pub date_time_separator: &'static str,
    /// Replacements for `AM`/`PM` where the locale spells them differently
    pub meridiem: Option<(&'static str, &'static str)>,
    pub phrases: &'static Phrasebook,
}

impl Conventions {
    /// Whether times render on a 12-hour clock.
    pub fn uses_12_hour_clock(&self) -> bool {
        self.time_pattern.contains("%I")
            || self.time_pattern.contains("%-I")
            || self.time_pattern.contains("%l")
    }

    /// Apply the locale's meridiem spelling to a rendered time.
    pub fn localize_meridiem(&self, time: String) -> String {
        match self.meridiem {
            Some((am, pm)) => time.replace("AM", am).replace("PM", pm),
            None => time,
        }
    }
}

const fn entry(
    tag: &'static str,
    date_pattern: &'static str,
    time_pattern: &'static str,
    date_time_separator: &'static str,
    phrases: &'static Phrasebook,
) -> Conventions {
    Conventions {
        tag,
        date_pattern,
        time_pattern,
        date_time_separator,
        meridiem: None,
        phrases,
    }
}

// The first entry for each language is its default.
static LOCALES: &[Conventions] = &[
    entry("en-US", "%-m/%-d/%Y", "%-I:%M %p", ", ", &ENGLISH),
    entry("en-GB", "%d/%m/%Y", "%H:%M", ", ", &ENGLISH),
    entry("en-IE", "%-d/%-m/%Y", "%H:%M", ", ", &ENGLISH),
    entry("en-AU", "%d/%m/%Y", "%-I:%M %P", ", ", &ENGLISH),
    entry("en-NZ", "%d/%m/%Y", "%-I:%M %P", ", ", &ENGLISH),
    Conventions {
        meridiem: Some(("a.m.", "p.m.")),
        ..entry("en-CA", "%Y-%m-%d", "%-I:%M %p", ", ", &ENGLISH)
    },
    entry("fr-FR", "%d/%m/%Y", "%H:%M", " ", &FRENCH),
    entry("fr-BE", "%d/%m/%Y", "%H:%M", " ", &FRENCH),
    entry("fr-CA", "%Y-%m-%d", "%H h %M", " ", &FRENCH),
    entry("fr-CH", "%d.%m.%Y", "%H:%M", " ", &FRENCH),
    entry("de-DE", "%-d.%-m.%Y", "%H:%M", ", ", &GERMAN),
    entry("de-AT", "%-d.%-m.%Y", "%H:%M", ", ", &GERMAN),
    entry("de-CH", "%-d.%-m.%Y", "%H:%M", ", ", &GERMAN),
    entry("es-ES", "%-d/%-m/%Y", "%-H:%M", ", ", &SPANISH),
    entry("nl-NL", "%-d-%-m-%Y", "%H:%M", ", ", &DUTCH),
    entry("nl-BE", "%-d/%-m/%Y", "%H:%M", ", ", &DUTCH),
];

/// Language and region subtags pulled from a BCP-47 tag.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LocaleTag {
    language: String,
    region: Option<String>,
}

impl LocaleTag {
    /// Parse the language and region out of a tag, ignoring script
    /// subtags and `-u-`/`-x-` extensions.
    fn parse(tag: &str) -> Option<Self> {
        let normalized = tag.trim().replace('_', "-");
        let mut parts = normalized.split('-');

        let language = parts.next()?.to_ascii_lowercase();
        if !(2..=3).contains(&language.len()) || !language.bytes().all(|b| b.is_ascii_alphabetic())
        {
            return None;
        }

        let mut region = None;
        for part in parts {
            if part.len() == 1 {
                break;
            }
            let is_region = (part.len() == 2 && part.bytes().all(|b| b.is_ascii_alphabetic()))
                || (part.len() == 3 && part.bytes().all(|b| b.is_ascii_digit()));
            if is_region {
                region = Some(part.to_ascii_uppercase());
                break;
            }
        }

        Some(Self { language, region })
    }
}

/// Resolve a BCP-47 tag to the conventions used to format it.
///
/// # Errors
///
/// Returns `FormatError::UnsupportedLocale` when the tag is malformed or its
/// language has no table entry.
pub fn resolve(tag: &str) -> Result<&'static Conventions> {
    let unsupported = || FormatError::UnsupportedLocale {
        locale: tag.to_string(),
    };
    let parsed = LocaleTag::parse(tag).ok_or_else(unsupported)?;

    if let Some(region) = &parsed.region {
        let full = format!("{}-{}", parsed.language, region);
        if let Some(conventions) = LOCALES.iter().find(|c| c.tag == full) {
            return Ok(conventions);
        }
    }

    LOCALES
        .iter()
        .find(|c| c.phrases.language == parsed.language)
        .ok_or_else(unsupported)
}

/// Tags with an exact table entry.
pub fn supported_tags() -> impl Iterator<Item = &'static str> {
    LOCALES.iter().map(|c| c.tag)
}
