//! Display wrappers for formatted dates.
//!
//! - [`datetime`]: [`UserDate`], a stored value bound to one viewer
//! - [`regions`]: markdown views over the preset and locale tables
//!   ([`RegionTable`], [`RegionComparison`], [`LocaleList`])
//!
//! Wrappers hold references, never owned data, and produce markdown where
//! the output is meant for a terminal.

pub mod datetime;
pub mod regions;

pub use datetime::UserDate;
pub use regions::{LocaleList, RegionComparison, RegionTable};
