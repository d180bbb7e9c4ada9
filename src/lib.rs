//! dtfmt - A catalog of strftime templates
//!
//! Named, grouped date/time formatting templates (years, months, hours,
//! day-month-year and year-month-day composites, ...) and helpers that stamp
//! the current moment with one of them. Formatting is done by chrono.
//!
//! # Modules
//!
//! * [`catalog`] - Template constants and [`catalog::compose`]
//! * [`stamp`] - Rendering moments and stamping "now"
//! * [`registry`] - Looking templates up by dotted name
//! * [`config`] - Application configuration management
//! * [`logger`] - Logging setup

/// Template constants grouped by field and composite pattern
pub mod catalog;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging setup for the command line tool
pub mod logger;

/// Name-based lookup of catalog templates
pub mod registry;

/// Rendering the current moment through a template
pub mod stamp;

pub use catalog::{compose, Template};
pub use stamp::{
    current_date, current_date_time, now_text, now_text_with, render, today_text_with, FormatError, Moment,
    DEFAULT_TEMPLATE,
};
