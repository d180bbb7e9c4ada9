//! Stamping the current moment with a template
//!
//! Thin helpers over chrono's strftime formatter. Nothing here keeps state:
//! every call reads the system clock (if it needs to) and formats once.

use crate::catalog::{self, Template};
use chrono::format::{DelayedFormat, Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use std::fmt::{self, Write};

/// Default template for [`now_text`]
pub const DEFAULT_TEMPLATE: Template = catalog::LOCALE_DTTM;

/// Formatter failures surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Invalid template '{0}': unsupported or truncated directive")]
    InvalidTemplate(String),

    #[error("Template '{0}' asks for a field the moment does not carry")]
    Unrepresentable(String),
}

/// Anything chrono can format with strftime items.
pub trait Moment {
    fn format_items<'a>(&self, items: StrftimeItems<'a>) -> DelayedFormat<StrftimeItems<'a>>;
}

impl Moment for NaiveDate {
    fn format_items<'a>(&self, items: StrftimeItems<'a>) -> DelayedFormat<StrftimeItems<'a>> {
        self.format_with_items(items)
    }
}

impl Moment for NaiveTime {
    fn format_items<'a>(&self, items: StrftimeItems<'a>) -> DelayedFormat<StrftimeItems<'a>> {
        self.format_with_items(items)
    }
}

impl Moment for NaiveDateTime {
    fn format_items<'a>(&self, items: StrftimeItems<'a>) -> DelayedFormat<StrftimeItems<'a>> {
        self.format_with_items(items)
    }
}

impl<Tz: TimeZone> Moment for DateTime<Tz>
where
    Tz::Offset: fmt::Display,
{
    fn format_items<'a>(&self, items: StrftimeItems<'a>) -> DelayedFormat<StrftimeItems<'a>> {
        self.format_with_items(items)
    }
}

/// Calendar date of the current local moment
pub fn current_date() -> NaiveDate {
    Local::now().date_naive()
}

/// Current local moment
pub fn current_date_time() -> DateTime<Local> {
    Local::now()
}

/// Render `moment` through `template`.
///
/// # Arguments
/// * `moment` - Date, time, or date-time to format
/// * `template` - strftime template, usually one from [`catalog`]
///
/// # Returns
/// * `Result<String, FormatError>` - Rendered text or the formatter's failure
pub fn render<M: Moment + ?Sized>(moment: &M, template: &str) -> Result<String, FormatError> {
    let items = StrftimeItems::new(template);
    if items.clone().any(|item| matches!(item, Item::Error)) {
        log::debug!("Rejected template {:?}", template);
        return Err(FormatError::InvalidTemplate(template.to_string()));
    }

    // chrono reports missing fields (e.g. %H on a date) as fmt::Error
    let mut text = String::new();
    write!(text, "{}", moment.format_items(items))
        .map_err(|_| FormatError::Unrepresentable(template.to_string()))?;
    Ok(text)
}

/// Current moment in the locale date and time representation
pub fn now_text() -> Result<String, FormatError> {
    now_text_with(DEFAULT_TEMPLATE)
}

/// Current moment rendered through `template`
pub fn now_text_with(template: &str) -> Result<String, FormatError> {
    render(&current_date_time(), template)
}

/// Current date rendered through `template`
///
/// Time-of-day directives fail with [`FormatError::Unrepresentable`].
pub fn today_text_with(template: &str) -> Result<String, FormatError> {
    render(&current_date(), template)
}
