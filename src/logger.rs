//! Logging setup
//!
//! Routes the `log` macros to stderr through a `fern` dispatcher. Each line
//! is stamped with a catalog template.

use crate::catalog::{self, hms, ymd};
use crate::config::LoggingConfig;
use crate::stamp::{self, FormatError};
use anyhow::Result;
use log::Level;
use once_cell::sync::Lazy;

/// `2021-07-15 13:35:46`
static LOG_TIMESTAMP: Lazy<String> = Lazy::new(|| catalog::compose(&[ymd::DASHED, hms::COLON], " "));

/// Timestamp template used on every log line
pub fn timestamp_template() -> &'static str {
    LOG_TIMESTAMP.as_str()
}

/// Rendered timestamp, or the formatter error in its place
pub fn timestamp_or_marker(rendered: Result<String, FormatError>) -> String {
    rendered.unwrap_or_else(|e| format!("<{}>", e))
}

/// Build one log line
pub fn format_line(timestamp: &str, level: Level, target: &str, message: &std::fmt::Arguments) -> String {
    format!("[{} {:<5} {}] {}", timestamp, level, target, message)
}

/// Install the global logger according to `config`
///
/// Fails if the level is invalid or a logger is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let level = config.level_filter()?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            let timestamp = timestamp_or_marker(stamp::now_text_with(timestamp_template()));
            out.finish(format_args!(
                "{}",
                format_line(&timestamp, record.level(), record.target(), message)
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    log::debug!("Logging initialized at {}", level);
    Ok(())
}
