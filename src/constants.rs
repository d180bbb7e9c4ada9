//! Constants used throughout the application
//!
//! This module centralizes file names, messages, and other constant values.

// Config file locations
pub const CONFIG_FILE_NAME: &str = "dtfmt.toml";
pub const CONFIG_DIR_NAME: &str = "dtfmt";
pub const XDG_CONFIG_FILE_NAME: &str = "config.toml";

// Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
