//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    assert!(validate(&TinctConfig::default()).is_ok());
}

#[test]
fn catches_capacity_zero() {
    let mut config = TinctConfig::default();
    config.palette.capacity = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("palette.capacity"));
}

#[test]
fn catches_capacity_too_large() {
    let mut config = TinctConfig::default();
    config.palette.capacity = 65;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("palette.capacity = 65 is out of range [1, 64]"));
}

#[test]
fn catches_storage_key_with_path_separator() {
    let mut config = TinctConfig::default();
    config.palette.storage_key = "../colors".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("palette.storage_key"));
}

#[test]
fn catches_empty_storage_key() {
    let mut config = TinctConfig::default();
    config.palette.storage_key = String::new();
    assert!(validate(&config).is_err());
}

#[test]
fn collects_all_errors() {
    let mut config = TinctConfig::default();
    config.palette.capacity = 0;
    config.palette.storage_key = "a b".into();
    let err = validate(&config).unwrap_err();
    assert!(matches!(err, tinct_common::ConfigError::ValidationError(_)));
    let msg = err.to_string();
    assert!(msg.contains("palette.capacity"));
    assert!(msg.contains("palette.storage_key"));
}
