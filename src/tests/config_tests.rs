//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{
    limits::{CompareMode, LimitsConfig},
    server::ServerConfig,
    ConfigLoader, LogConfig, PonoConfig, Validate,
};
use crate::error::config::ConfigError;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = PonoConfig::default();
    assert!(config.validate().is_ok());

    assert_eq!(config.server.address.to_string(), "127.0.0.1:5000");
    assert_eq!(config.limits.compare_mode, CompareMode::Sequential);
    assert_eq!(config.limits.computation_timeout(), Duration::from_secs(10));
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = PonoConfig::default();

    // Invalid server configuration
    config.server.worker_threads = 0;
    assert!(config.validate().is_err());

    // Fix and test another invalid value
    config.server.worker_threads = 4;
    config.limits.computation_timeout_ms = 0;
    assert!(config.validate().is_err());

    // Fix and test another invalid value
    config.limits.computation_timeout_ms = 500;
    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    // Clean environment variables that might affect this test
    std::env::remove_var("TEST_FILE__SERVER__NAME");
    std::env::remove_var("TEST_FILE__LIMITS__COMPARE_MODE");

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config_file_test.toml");

    let config_content = r#"
    [server]
    name = "test-server"
    address = "0.0.0.0:8080"
    worker_threads = 2

    [limits]
    max_pattern_bytes = 1024
    compare_mode = "parallel"
    "#;

    fs::write(&config_path, config_content).unwrap();

    // Load the configuration with a unique prefix
    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    // Verify values were loaded correctly
    assert_eq!(config.server.name, "test-server");
    assert_eq!(config.server.address.port(), 8080);
    assert_eq!(config.server.worker_threads, 2);
    assert_eq!(config.limits.max_pattern_bytes, 1024);
    assert_eq!(config.limits.compare_mode, CompareMode::Parallel);

    // Other values should be defaults
    assert_eq!(
        config.limits.max_text_bytes,
        LimitsConfig::default().max_text_bytes
    );
    assert_eq!(config.log.level, LogConfig::default().level);
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    fs::write(
        &config_path,
        r#"{ "log": { "level": "warn", "json": true } }"#,
    )
    .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON")
        .load()
        .unwrap();

    assert_eq!(config.log.level, "warn");
    assert!(config.log.json);
    assert_eq!(config.server.name, ServerConfig::default().name);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config_env_test.toml");

    let config_content = r#"
    [server]
    name = "test-server"
    worker_threads = 2
    "#;

    fs::write(&config_path, config_content).unwrap();

    // Set environment variables with a unique prefix
    std::env::set_var("TEST_ENV__SERVER__NAME", "env-server");
    std::env::set_var("TEST_ENV__LIMITS__COMPUTATION_TIMEOUT_MS", "250");

    // Load the configuration with a unique prefix
    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV");
    let config = loader.load().unwrap();

    // Verify environment variables took precedence
    assert_eq!(config.server.name, "env-server");
    assert_eq!(config.limits.computation_timeout_ms, 250);
    assert_eq!(config.server.worker_threads, 2);

    // Clean up environment variables
    std::env::remove_var("TEST_ENV__SERVER__NAME");
    std::env::remove_var("TEST_ENV__LIMITS__COMPUTATION_TIMEOUT_MS");
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("invalid.toml");

    // Create an invalid TOML file
    let config_content = r#"
    [server
    name = test-server"
    "#;

    fs::write(&config_path, config_content).unwrap();

    // Try to load the configuration with a unique prefix
    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that a missing file and an unknown extension are reported.
#[test]
fn test_load_missing_or_unsupported_file() {
    let dir = tempdir().unwrap();

    let missing = dir.path().join("missing.toml");
    let loader = ConfigLoader::new(Some(&missing), "TEST_MISSING");
    assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(_))));

    let unsupported = dir.path().join("config.ini");
    fs::write(&unsupported, "[server]\n").unwrap();
    let loader = ConfigLoader::new(Some(&unsupported), "TEST_UNSUPPORTED");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that values loaded from a file are validated.
#[test]
fn test_loaded_config_is_validated() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("out_of_range.toml");
    fs::write(
        &config_path,
        "[limits]\nmax_text_bytes = 10\nmax_pattern_bytes = 20\n",
    )
    .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_RANGE");
    assert!(matches!(
        loader.load(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));
}

/// Test that validation fails for various invalid configurations.
#[test]
fn test_specific_validation_rules() {
    let mut server_config = ServerConfig::default();
    server_config.name = "  ".to_string();
    assert!(server_config.validate().is_err());

    let mut server_config = ServerConfig::default();
    server_config.max_body_bytes = 0;
    assert!(server_config.validate().is_err());

    let mut limits_config = LimitsConfig::default();
    limits_config.max_text_bytes = 0;
    assert!(limits_config.validate().is_err());

    let mut limits_config = LimitsConfig::default();
    limits_config.max_pattern_bytes = limits_config.max_text_bytes + 1;
    assert!(limits_config.validate().is_err());
}

/// Test that the generated default configuration loads back unchanged.
#[test]
fn test_generated_config_round_trips() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("generated.toml");
    let defaults = PonoConfig::default();
    fs::write(&config_path, toml::to_string_pretty(&defaults).unwrap()).unwrap();

    let loaded = ConfigLoader::new(Some(&config_path), "TEST_GENERATED")
        .load()
        .unwrap();

    assert_eq!(loaded.server.address, defaults.server.address);
    assert_eq!(loaded.limits.max_text_bytes, defaults.limits.max_text_bytes);
    assert_eq!(loaded.limits.compare_mode, defaults.limits.compare_mode);
    assert_eq!(loaded.log.level, defaults.log.level);
}
