use dtfmt::catalog::{self, dmy};
use dtfmt::config::Config;
use log::LevelFilter;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.stamp.template, "locale.datetime");
    assert_eq!(config.stamp_template(), catalog::LOCALE_DTTM);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Catalog names and raw templates are both accepted
    config.stamp.template = "DMY.SLASHED".to_string();
    assert!(config.validate().is_ok());
    config.stamp.template = "%Y%m%d %Z".to_string();
    assert!(config.validate().is_ok());

    // Malformed templates are rejected
    config.stamp.template = "%Q".to_string();
    assert!(config.validate().is_err());

    config.stamp.template = String::new();
    assert!(config.validate().is_err());

    // Reset and test invalid level
    config.stamp.template = "dmy.thin".to_string();
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_stamp_template_resolution() {
    let mut config = Config::default();
    config.stamp.template = "dmy.slashed".to_string();
    assert_eq!(config.stamp_template(), dmy::SLASHED);

    config.stamp.template = "%H h %M".to_string();
    assert_eq!(config.stamp_template(), "%H h %M");
}

#[test]
fn test_level_filter() {
    let mut config = Config::default();
    assert_eq!(config.logging.level_filter().unwrap(), LevelFilter::Off);

    config.logging.enabled = true;
    assert_eq!(config.logging.level_filter().unwrap(), LevelFilter::Info);

    config.logging.level = "debug".to_string();
    assert_eq!(config.logging.level_filter().unwrap(), LevelFilter::Debug);

    config.logging.level = "loud".to_string();
    assert!(config.logging.level_filter().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("template = \"locale.datetime\""));
    assert!(toml_str.contains("level = \"info\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[stamp]
template = "ymd.dashed_underscore_hms_dashed"
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.stamp.template, "ymd.dashed_underscore_hms_dashed");
    assert_eq!(config.stamp_template(), "%Y-%m-%d_%H-%M-%S");

    // Check that unspecified values use defaults
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.stamp.template, default_config.stamp.template);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.logging.level, default_config.logging.level);
}

#[test]
fn test_load_from_file_rejects_bad_template() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("dtfmt_test_bad_template");
    let _ = fs::remove_dir_all(&temp_dir);
    fs::create_dir_all(&temp_dir).unwrap();
    let config_path = temp_dir.join("config.toml");
    fs::write(&config_path, "[stamp]\ntemplate = \"%Y-%Q\"\n").unwrap();

    let err = Config::load_from_file(&config_path).unwrap_err();
    assert!(err.to_string().contains("%Y-%Q"));

    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_load_from_missing_file() {
    let path = std::env::temp_dir().join("dtfmt_test_missing").join("config.toml");
    let err = Config::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("dtfmt_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    // Ensure the directory doesn't exist initially
    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    // Verify the directory was created
    assert!(temp_dir.exists());
    assert!(config_path.exists());

    // Verify the file contains expected content and loads back
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# dtfmt Configuration File"));
    assert!(content.contains("# Generated on "));
    assert!(content.contains("template = \"locale.datetime\""));

    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.stamp.template, "locale.datetime");

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}
