//! Catalog of strftime templates
//!
//! Named directives grouped by field (`year`, `month`, `hour`, ...) and
//! pre-built composites (`hms`, `dmy`, `ymd`, ...). Every value is a plain
//! `&'static str` that can be handed to chrono's formatter as is.
//!
//! ```
//! use dtfmt::catalog::{self, dmy, hms};
//!
//! assert_eq!(dmy::SLASHED, "%d/%m/%Y");
//! assert_eq!(catalog::compose(&[dmy::DASHED, hms::DASHED], "_"), dmy::DASHED_UNDERSCORE_HMS_DASHED);
//! ```

mod composite;
mod fields;

pub use composite::{dmy, hm, hms, ymd};
pub use fields::{day, hour, minute, month, second, week, weekday, year};

/// A strftime template from the catalog
pub type Template = &'static str;

/// Time zone name, or offset when the zone has no name.
pub const TZ: Template = "%Z";
/// Locale date and time. `Thu Jul 15 13:35:46 2021`
pub const LOCALE_DTTM: Template = "%c";
/// Locale date. `07/15/21`
pub const LOCALE_DT: Template = "%x";
/// Locale time. `13:35:46`
pub const LOCALE_TM: Template = "%X";
/// A literal `%`.
pub const PERCENTAGE: Template = "%%";

/// Join template fields in order with `separator` between each pair.
///
/// No separator is added before the first or after the last field; an empty
/// slice gives an empty template.
pub fn compose(fields: &[&str], separator: &str) -> String {
    fields.join(separator)
}
