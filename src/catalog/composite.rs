//! Composite templates
//!
//! Pre-built combinations of the field directives. Values are spelled out as
//! literals so they stay `const`; each group's `FIELDS` lists the directives
//! it is composed from and the tests check every value against
//! [`compose`](super::compose).

/// Hour, minute and second
pub mod hms {
    use crate::catalog::{hour, minute, second};

    pub const FIELDS: [&str; 3] = [hour::Z24, minute::ZNUM, second::ZNUM];

    /// `133546`
    pub const THIN: &str = "%H%M%S";
    /// `13:35:46`
    pub const COLON: &str = "%H:%M:%S";
    /// `13 35 46`
    pub const SPACED: &str = "%H %M %S";
    /// `13_35_46`
    pub const UNDERSCORED: &str = "%H_%M_%S";
    /// `13.35.46`
    pub const DOTTED: &str = "%H.%M.%S";
    /// `13-35-46`
    pub const DASHED: &str = "%H-%M-%S";
}

/// Hour and minute
pub mod hm {
    use crate::catalog::{hour, minute};

    pub const FIELDS: [&str; 2] = [hour::Z24, minute::ZNUM];

    pub const THIN: &str = "%H%M";
    pub const COLON: &str = "%H:%M";
    pub const SPACED: &str = "%H %M";
    pub const UNDERSCORED: &str = "%H_%M";
    pub const DOTTED: &str = "%H.%M";
    pub const DASHED: &str = "%H-%M";
}

/// Day, month, year
pub mod dmy {
    use crate::catalog::{day, month, year};

    pub const FIELDS: [&str; 3] = [day::DOM, month::ZNUM, year::FULL];

    /// `15072021`
    pub const THIN: &str = "%d%m%Y";
    /// `15 07 2021`
    pub const SPACED: &str = "%d %m %Y";
    pub const UNDERSCORED: &str = "%d_%m_%Y";
    pub const DOTTED: &str = "%d.%m.%Y";
    pub const DASHED: &str = "%d-%m-%Y";
    /// `15/07/2021`
    pub const SLASHED: &str = "%d/%m/%Y";
    pub const BACKSLASHED: &str = "%d\\%m\\%Y";

    /// `15072021-1335`
    pub const THIN_DASH_HM_THIN: &str = "%d%m%Y-%H%M";
    /// `15072021-133546`
    pub const THIN_DASH_HMS_THIN: &str = "%d%m%Y-%H%M%S";
    pub const THIN_UNDERSCORE_HM_THIN: &str = "%d%m%Y_%H%M";
    pub const THIN_UNDERSCORE_HMS_THIN: &str = "%d%m%Y_%H%M%S";
    /// `15-07-2021_13-35-46`
    pub const DASHED_UNDERSCORE_HMS_DASHED: &str = "%d-%m-%Y_%H-%M-%S";
    /// `15/07/2021 13:35:46`
    pub const SLASHED_SPACE_HMS_COLON: &str = "%d/%m/%Y %H:%M:%S";
}

/// Year, month, day
pub mod ymd {
    use crate::catalog::{day, month, year};

    pub const FIELDS: [&str; 3] = [year::FULL, month::ZNUM, day::DOM];

    /// `20210715`
    pub const THIN: &str = "%Y%m%d";
    pub const SPACED: &str = "%Y %m %d";
    pub const UNDERSCORED: &str = "%Y_%m_%d";
    pub const DOTTED: &str = "%Y.%m.%d";
    /// `2021-07-15`
    pub const DASHED: &str = "%Y-%m-%d";
    pub const SLASHED: &str = "%Y/%m/%d";
    pub const BACKSLASHED: &str = "%Y\\%m\\%d";

    pub const THIN_DASH_HM_THIN: &str = "%Y%m%d-%H%M";
    /// `20210715-133546`
    pub const THIN_DASH_HMS_THIN: &str = "%Y%m%d-%H%M%S";
    pub const THIN_UNDERSCORE_HM_THIN: &str = "%Y%m%d_%H%M";
    pub const THIN_UNDERSCORE_HMS_THIN: &str = "%Y%m%d_%H%M%S";
    /// `2021-07-15_13-35-46`
    pub const DASHED_UNDERSCORE_HMS_DASHED: &str = "%Y-%m-%d_%H-%M-%S";
    /// `2021/07/15 13:35:46`
    pub const SLASHED_AND_HMS_COLON: &str = "%Y/%m/%d %H:%M:%S";
}
