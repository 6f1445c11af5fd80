//! Data models for date formatting.
//!
//! - [`DateKind`] selects the formatting rule.
//! - [`RegionPrefs`] carries the viewer's locale and timezone, usually built
//!   from a [`RegionPreset`].
//! - [`RawValue`] is the parsed form of a stored ISO-8601 string.
//!
//! All three are read-only once built. The stored string stays canonical and
//! display output is always derived from it.

mod kind;
mod raw;
mod region;

pub use kind::DateKind;
pub use raw::RawValue;
pub use region::{RegionPreset, RegionPrefs};
