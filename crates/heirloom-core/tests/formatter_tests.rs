use heirloom_core::{
    format_for_user, format_for_user_at, try_format_for_user, try_format_for_user_at, DateKind,
    FormatError, RegionPreset, RegionPrefs, FALLBACK_TEXT,
};
use jiff::Timestamp;

/// Fixed clock for relative phrasing
fn now() -> Timestamp {
    "2025-09-22T18:30:00Z".parse().expect("valid timestamp")
}

fn numbers(text: &str) -> Vec<u32> {
    text.split(|c: char| !c.is_ascii_digit())
        .filter(|part| !part.is_empty())
        .map(|part| part.parse().expect("digits"))
        .collect()
}

#[test]
fn test_date_only_keeps_calendar_day_for_every_region() {
    let dates = [
        ("1953-10-11", 1953, 10, 11),
        ("2000-02-29", 2000, 2, 29),
        ("1999-12-31", 1999, 12, 31),
        ("2024-01-01", 2024, 1, 1),
    ];

    for (raw, year, month, day) in dates {
        for preset in RegionPreset::ALL {
            let output = try_format_for_user(raw, DateKind::DateOnly, &preset.prefs())
                .unwrap_or_else(|e| panic!("{raw} under {preset}: {e}"));
            let parts = numbers(&output);
            assert_eq!(parts.len(), 3, "{raw} under {preset}: {output}");
            assert!(parts.contains(&year), "{raw} under {preset}: {output}");
            assert!(parts.contains(&month), "{raw} under {preset}: {output}");
            assert!(parts.contains(&day), "{raw} under {preset}: {output}");
        }
    }
}

#[test]
fn test_date_only_is_timezone_independent() {
    let zones = [
        "Pacific/Kiritimati",
        "Pacific/Pago_Pago",
        "Asia/Kolkata",
        "America/Los_Angeles",
        "UTC",
    ];
    for zone in zones {
        let prefs = RegionPrefs::new("en-GB", zone);
        assert_eq!(
            format_for_user("1953-10-11", DateKind::DateOnly, &prefs),
            "11/10/1953",
            "zone {zone}"
        );
    }
}

#[test]
fn test_date_only_per_region() {
    let expected = [
        (RegionPreset::Uk, "11/10/1953"),
        (RegionPreset::Us, "10/11/1953"),
        (RegionPreset::Ie, "11/10/1953"),
        (RegionPreset::Au, "11/10/1953"),
        (RegionPreset::Nz, "11/10/1953"),
        (RegionPreset::Ca, "1953-10-11"),
        (RegionPreset::Fr, "11/10/1953"),
        (RegionPreset::De, "11.10.1953"),
        (RegionPreset::Es, "11/10/1953"),
        (RegionPreset::Nl, "11-10-1953"),
    ];
    for (preset, text) in expected {
        assert_eq!(
            format_for_user("1953-10-11", DateKind::DateOnly, &preset.prefs()),
            text,
            "{preset}"
        );
    }
}

#[test]
fn test_unpadded_locales() {
    let us = RegionPreset::Us.prefs();
    let de = RegionPreset::De.prefs();
    assert_eq!(format_for_user("2024-01-05", DateKind::DateOnly, &us), "1/5/2024");
    assert_eq!(format_for_user("2024-01-05", DateKind::DateOnly, &de), "5.1.2024");
}

#[test]
fn test_datetime_per_region() {
    let raw = "2025-09-19T18:30:00Z";
    let expected = [
        (RegionPreset::Uk, "19/09/2025, 19:30"),
        (RegionPreset::Us, "9/19/2025, 2:30 PM"),
        (RegionPreset::Ie, "19/9/2025, 19:30"),
        (RegionPreset::Au, "20/09/2025, 4:30 am"),
        (RegionPreset::Nz, "20/09/2025, 6:30 am"),
        (RegionPreset::Ca, "2025-09-19, 2:30 p.m."),
        (RegionPreset::Fr, "19/09/2025 20:30"),
        (RegionPreset::De, "19.9.2025, 20:30"),
        (RegionPreset::Es, "19/9/2025, 20:30"),
        (RegionPreset::Nl, "19-9-2025, 20:30"),
    ];
    for (preset, text) in expected {
        assert_eq!(
            try_format_for_user(raw, DateKind::Datetime, &preset.prefs()).unwrap(),
            text,
            "{preset}"
        );
    }
}

#[test]
fn test_datetime_is_idempotent() {
    let raws = [
        "2025-09-19T18:30:00Z",
        "1999-12-31T23:59:59+01:00",
        "2024-02-29T00:00:00.5Z",
    ];
    for raw in raws {
        for preset in RegionPreset::ALL {
            let prefs = preset.prefs();
            let first = format_for_user(raw, DateKind::Datetime, &prefs);
            let second = format_for_user(raw, DateKind::Datetime, &prefs);
            assert_eq!(first, second);
            assert_ne!(first, FALLBACK_TEXT);
        }
    }
}

#[test]
fn test_datetime_follows_dst() {
    let uk = RegionPreset::Uk.prefs();
    assert_eq!(
        format_for_user("2025-01-15T18:30:00Z", DateKind::Datetime, &uk),
        "15/01/2025, 18:30"
    );
    assert_eq!(
        format_for_user("2025-07-15T18:30:00Z", DateKind::Datetime, &uk),
        "15/07/2025, 19:30"
    );
}

#[test]
fn test_locale_change_only_reorders() {
    let gb_in_london = RegionPrefs::new("en-GB", "Europe/London");
    let us_in_london = RegionPrefs::new("en-US", "Europe/London");
    assert_eq!(
        format_for_user("2025-09-19T18:30:00Z", DateKind::Datetime, &gb_in_london),
        "19/09/2025, 19:30"
    );
    assert_eq!(
        format_for_user("2025-09-19T18:30:00Z", DateKind::Datetime, &us_in_london),
        "9/19/2025, 7:30 PM"
    );
}

#[test]
fn test_datetime_crosses_midnight_into_next_day() {
    let tokyo = RegionPrefs::new("en-GB", "Asia/Tokyo");
    assert_eq!(
        format_for_user("2025-09-19T18:30:00Z", DateKind::Datetime, &tokyo),
        "20/09/2025, 03:30"
    );
}

#[test]
fn test_french_canadian_time_pattern() {
    let prefs = RegionPrefs::new("fr-CA", "America/Toronto");
    assert_eq!(
        format_for_user("2025-09-19T18:30:00Z", DateKind::Datetime, &prefs),
        "2025-09-19 14 h 30"
    );
}

#[test]
fn test_relative_phrasing_by_language() {
    let cases = [
        ("2025-09-19T18:30:00Z", "nl-NL", "3 dagen geleden"),
        ("2025-09-22T18:29:00Z", "en-GB", "1 minute ago"),
        ("2025-09-22T18:30:45Z", "en-US", "in 45 seconds"),
        ("2025-08-01T18:30:00Z", "en-GB", "1 month ago"),
        ("2025-09-22T18:30:00Z", "nl-NL", "nu"),
        ("2025-09-22T18:30:00Z", "fr-FR", "maintenant"),
    ];
    for (raw, locale, text) in cases {
        let prefs = RegionPrefs::new(locale, "Europe/London");
        assert_eq!(
            try_format_for_user_at(raw, DateKind::Relative, &prefs, now()).unwrap(),
            text,
            "{raw} in {locale}"
        );
    }
}

#[test]
fn test_relative_translated_units() {
    // (raw, locale, leading words, count, unit stem)
    let cases = [
        ("2025-09-19T18:30:00Z", "fr-FR", "il y a", 3, "jour"),
        ("2025-09-19T18:30:00Z", "es-ES", "hace", 3, "d"),
        ("2025-09-19T18:30:00Z", "de-DE", "vor", 3, "Tag"),
        ("2025-09-22T19:30:00Z", "fr-FR", "dans", 1, "heure"),
        ("2026-09-23T18:30:00Z", "es-ES", "dentro de", 1, "a"),
        ("2025-09-25T18:30:00Z", "de-DE", "in", 3, "Tag"),
    ];
    for (raw, locale, lead, count, stem) in cases {
        let prefs = RegionPrefs::new(locale, "Europe/London");
        let text = try_format_for_user_at(raw, DateKind::Relative, &prefs, now()).unwrap();
        assert!(text.starts_with(lead), "{raw} in {locale}: {text}");
        assert_eq!(numbers(&text), vec![count], "{raw} in {locale}: {text}");
        let unit = text.rsplit(' ').next().unwrap_or_default();
        assert!(unit.starts_with(stem), "{raw} in {locale}: {text}");
    }
}

#[test]
fn test_relative_calendar_days() {
    let uk = RegionPreset::Uk.prefs();
    assert_eq!(
        format_for_user_at("2025-09-22", DateKind::Relative, &uk, now()),
        "today"
    );
    assert_eq!(
        format_for_user_at("2025-09-20", DateKind::Relative, &uk, now()),
        "2 days ago"
    );

    let fr = RegionPreset::Fr.prefs();
    assert_eq!(
        format_for_user_at("2025-09-22", DateKind::Relative, &fr, now()),
        "aujourd’hui"
    );
}

#[test]
fn test_malformed_input_never_fails() {
    for raw in ["not-a-date", "", "2025-99-99", "19/09/2025", "2025-09-19T18:30:00Q"] {
        for kind in [DateKind::Datetime, DateKind::DateOnly, DateKind::Relative] {
            for preset in RegionPreset::ALL {
                assert_eq!(
                    format_for_user_at(raw, kind, &preset.prefs(), now()),
                    FALLBACK_TEXT,
                    "{raw:?} as {kind} under {preset}"
                );
            }
        }
    }
}

#[test]
fn test_unsupported_region_falls_back_to_raw() {
    let prefs = RegionPrefs::new("tlh-QS", "Europe/London");
    let err = try_format_for_user("2025-09-19T18:30:00Z", DateKind::Datetime, &prefs).unwrap_err();
    assert!(matches!(err, FormatError::UnsupportedLocale { .. }));
    assert_eq!(
        format_for_user("2025-09-19T18:30:00Z", DateKind::Datetime, &prefs),
        "2025-09-19T18:30:00Z"
    );
}
