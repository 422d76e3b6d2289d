//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use pairwheel_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_pairwheel_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(ref msg) if msg.contains("failed to read")));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[constraints]
forbidden_groups = [["a", "b", "c"]]
locked_pair = ["Jake", "Pranavi"]

[draw]
pick_delay_ms = 50
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.constraints.forbidden_groups.len(), 1);
    assert_eq!(config.draw.pick_delay_ms, 50);
    // Defaults preserved
    assert_eq!(config.draw.spin_duration_ms, 4000);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn load_contradictory_constraints_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[constraints]
forbidden_groups = [["jake", "pranavi"]]
locked_pair = ["jake", "pranavi"]
"#,
    )
    .unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pairwheel").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert!(config.constraints.forbidden_groups.is_empty());
    assert_eq!(config.draw.max_attempts, 16);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::PairwheelConfig;

    let config: PairwheelConfig = toml::from_str(default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    // This may not work in all CI environments, but should work locally
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("pairwheel"));
        assert!(path_str.ends_with("config.toml"));
    }
}
