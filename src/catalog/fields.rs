//! Single-field directives
//!
//! One module per date/time field. Each constant is a single strftime token
//! as understood by chrono. Sample values in the docs are for
//! Thursday 2021-07-15 13:35:46.

/// Year directives
pub mod year {
    /// Year with century. `2021`
    pub const FULL: &str = "%Y";
    /// Year without century, zero-padded. `21`
    pub const ONLY: &str = "%y";
}

/// Month directives
pub mod month {
    /// Month as a zero-padded number. `07`
    pub const ZNUM: &str = "%m";
    /// Month as a number without padding. `7`
    pub const NUM: &str = "%-m";
    /// Abbreviated month name. `Jul`
    pub const ABBR: &str = "%b";
    /// Full month name. `July`
    pub const FULL: &str = "%B";
}

/// Day directives
pub mod day {
    /// Day of the month, zero-padded. `15`
    pub const DOM: &str = "%d";
    /// Day of the year, zero-padded to three digits. `196`
    pub const ZDOY: &str = "%j";
    /// Day of the year without padding. `196`
    pub const DOY: &str = "%-j";
}

/// Hour directives
pub mod hour {
    /// 24-hour clock, zero-padded. `13`
    pub const Z24: &str = "%H";
    /// 24-hour clock without padding. `13`
    pub const NUM24: &str = "%-H";
    /// 12-hour clock, zero-padded. `01`
    pub const Z12: &str = "%I";
    /// 12-hour clock without padding. `1`
    pub const NUM12: &str = "%-I";
    /// `AM` or `PM`. `PM`
    pub const AMPM: &str = "%p";
}

/// Minute directives
pub mod minute {
    /// Zero-padded minute. `35`
    pub const ZNUM: &str = "%M";
    /// Minute without padding. `35`
    pub const NUM: &str = "%-M";
}

/// Second directives
pub mod second {
    /// Zero-padded second. `46`
    pub const ZNUM: &str = "%S";
    /// Second without padding. `46`
    pub const NUM: &str = "%-S";
    /// Microseconds, zero-padded to six digits. `000000`
    ///
    /// chrono's bare `%f` prints nanoseconds, hence the explicit width.
    pub const MSEC: &str = "%6f";
}

/// Weekday directives
pub mod weekday {
    /// Abbreviated weekday name. `Thu`
    pub const ABBR: &str = "%a";
    /// Full weekday name. `Thursday`
    pub const FULL: &str = "%A";
    /// Weekday number, Sunday is 0. `4`
    pub const NUM: &str = "%w";
}

/// Week-of-year directives
///
/// Days of a new year before the first start-of-week day belong to week 0.
pub mod week {
    /// Week number with Sunday as the first day of the week. `28`
    pub const ZOFYEAR: &str = "%U";
    /// Week number with Monday as the first day of the week. `28`
    pub const OFYEAR: &str = "%W";
}
