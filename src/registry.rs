//! Lookup of catalog templates by dotted name
//!
//! Lets the CLI and the config file refer to `dmy.slashed` instead of
//! spelling out `%d/%m/%Y`. Names are the catalog path in lower case.

use crate::catalog::{self, day, dmy, hm, hms, hour, minute, month, second, week, weekday, year, ymd, Template};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// A named catalog template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub template: Template,
}

const fn entry(name: &'static str, template: Template) -> CatalogEntry {
    CatalogEntry { name, template }
}

static ENTRIES: &[CatalogEntry] = &[
    entry("year.full", year::FULL),
    entry("year.only", year::ONLY),
    entry("month.znum", month::ZNUM),
    entry("month.num", month::NUM),
    entry("month.abbr", month::ABBR),
    entry("month.full", month::FULL),
    entry("day.dom", day::DOM),
    entry("day.zdoy", day::ZDOY),
    entry("day.doy", day::DOY),
    entry("hour.z24", hour::Z24),
    entry("hour.num24", hour::NUM24),
    entry("hour.z12", hour::Z12),
    entry("hour.num12", hour::NUM12),
    entry("hour.ampm", hour::AMPM),
    entry("minute.znum", minute::ZNUM),
    entry("minute.num", minute::NUM),
    entry("second.znum", second::ZNUM),
    entry("second.num", second::NUM),
    entry("second.msec", second::MSEC),
    entry("weekday.abbr", weekday::ABBR),
    entry("weekday.full", weekday::FULL),
    entry("weekday.num", weekday::NUM),
    entry("week.zofyear", week::ZOFYEAR),
    entry("week.ofyear", week::OFYEAR),
    entry("hms.thin", hms::THIN),
    entry("hms.colon", hms::COLON),
    entry("hms.spaced", hms::SPACED),
    entry("hms.underscored", hms::UNDERSCORED),
    entry("hms.dotted", hms::DOTTED),
    entry("hms.dashed", hms::DASHED),
    entry("hm.thin", hm::THIN),
    entry("hm.colon", hm::COLON),
    entry("hm.spaced", hm::SPACED),
    entry("hm.underscored", hm::UNDERSCORED),
    entry("hm.dotted", hm::DOTTED),
    entry("hm.dashed", hm::DASHED),
    entry("dmy.thin", dmy::THIN),
    entry("dmy.spaced", dmy::SPACED),
    entry("dmy.underscored", dmy::UNDERSCORED),
    entry("dmy.dotted", dmy::DOTTED),
    entry("dmy.dashed", dmy::DASHED),
    entry("dmy.slashed", dmy::SLASHED),
    entry("dmy.backslashed", dmy::BACKSLASHED),
    entry("dmy.thin_dash_hm_thin", dmy::THIN_DASH_HM_THIN),
    entry("dmy.thin_dash_hms_thin", dmy::THIN_DASH_HMS_THIN),
    entry("dmy.thin_underscore_hm_thin", dmy::THIN_UNDERSCORE_HM_THIN),
    entry("dmy.thin_underscore_hms_thin", dmy::THIN_UNDERSCORE_HMS_THIN),
    entry("dmy.dashed_underscore_hms_dashed", dmy::DASHED_UNDERSCORE_HMS_DASHED),
    entry("dmy.slashed_space_hms_colon", dmy::SLASHED_SPACE_HMS_COLON),
    entry("ymd.thin", ymd::THIN),
    entry("ymd.spaced", ymd::SPACED),
    entry("ymd.underscored", ymd::UNDERSCORED),
    entry("ymd.dotted", ymd::DOTTED),
    entry("ymd.dashed", ymd::DASHED),
    entry("ymd.slashed", ymd::SLASHED),
    entry("ymd.backslashed", ymd::BACKSLASHED),
    entry("ymd.thin_dash_hm_thin", ymd::THIN_DASH_HM_THIN),
    entry("ymd.thin_dash_hms_thin", ymd::THIN_DASH_HMS_THIN),
    entry("ymd.thin_underscore_hm_thin", ymd::THIN_UNDERSCORE_HM_THIN),
    entry("ymd.thin_underscore_hms_thin", ymd::THIN_UNDERSCORE_HMS_THIN),
    entry("ymd.dashed_underscore_hms_dashed", ymd::DASHED_UNDERSCORE_HMS_DASHED),
    entry("ymd.slashed_and_hms_colon", ymd::SLASHED_AND_HMS_COLON),
    entry("tz", catalog::TZ),
    entry("locale.datetime", catalog::LOCALE_DTTM),
    entry("locale.date", catalog::LOCALE_DT),
    entry("locale.time", catalog::LOCALE_TM),
    entry("percentage", catalog::PERCENTAGE),
];

static INDEX: Lazy<HashMap<&'static str, Template>> =
    Lazy::new(|| ENTRIES.iter().map(|e| (e.name, e.template)).collect());

/// Every catalog template, in catalog order
pub fn entries() -> &'static [CatalogEntry] {
    ENTRIES
}

/// Find a catalog template by dotted name, ignoring case
pub fn lookup(name: &str) -> Option<Template> {
    INDEX.get(name.trim().to_ascii_lowercase().as_str()).copied()
}

/// Catalog template for `name`, or `name` itself taken as a raw template
pub fn resolve(name: &str) -> &str {
    match lookup(name) {
        Some(template) => template,
        None => name,
    }
}
