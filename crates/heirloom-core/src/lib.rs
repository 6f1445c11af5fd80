//! Core library for rendering family timeline dates.
//!
//! Stored values are ISO-8601 strings in UTC. This crate turns them into
//! display strings that follow a viewer's regional conventions, without ever
//! writing anything back.
//!
//! # Formatting Rules
//!
//! - **datetime**: the instant is shifted into the viewer's timezone, then
//!   rendered with the locale's date and clock conventions
//! - **dateOnly**: the calendar day is rendered as stored, with no timezone
//!   shift, so a birthday reads the same day everywhere
//! - **relative**: a "3 days ago" / "in 2 hours" phrase in the viewer's
//!   language
//!
//! Rendering code should call [`format_for_user`], which never fails and
//! substitutes a fallback string on error. [`try_format_for_user`] exposes the
//! underlying [`FormatError`].
//!
//! # Quick Start
//!
//! ```rust
//! use heirloom_core::{format_for_user, DateKind, RegionPreset};
//!
//! let uk = RegionPreset::Uk.prefs();
//! let us = RegionPreset::Us.prefs();
//!
//! assert_eq!(format_for_user("1953-10-11", DateKind::DateOnly, &uk), "11/10/1953");
//! assert_eq!(format_for_user("1953-10-11", DateKind::DateOnly, &us), "10/11/1953");
//!
//! assert_eq!(
//!     format_for_user("2025-09-19T18:30:00Z", DateKind::Datetime, &uk),
//!     "19/09/2025, 19:30"
//! );
//! assert_eq!(format_for_user("not-a-date", DateKind::Datetime, &us), "Invalid date");
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod formatter;
pub mod locale;
pub mod models;
pub mod relative;

// Re-export commonly used types
pub use config::{Profile, Settings, SettingsBuilder};
pub use display::{LocaleList, RegionComparison, RegionTable, UserDate};
pub use error::{FormatError, Result};
pub use formatter::{
    fallback_for, format_for_user, format_for_user_at, try_format_for_user,
    try_format_for_user_at, FALLBACK_TEXT,
};
pub use models::{DateKind, RawValue, RegionPreset, RegionPrefs};
