//! Unit tests for config module
//!
//! Tests configuration types, defaults, serialization and file loading.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::{fs, path::PathBuf, time::Duration};

use tempfile::TempDir;

use crate::{
    NetStopwatchError,
    config::{Config, FALLBACK_INTERFACE, LogLevel},
};

#[test]
fn config_default() {
    let config = Config::default();

    assert_eq!(config.general.log_level, LogLevel::Info);
    assert_eq!(config.monitor.interval_ms, 1000);
    assert_eq!(config.monitor.fallback_interface, FALLBACK_INTERFACE);
    assert_eq!(config.monitor.net_class_dir, PathBuf::from("/sys/class/net"));
    assert_eq!(config.monitor.route_table, PathBuf::from("/proc/net/route"));
    assert!(config.monitor.state_file.is_none());
}

#[test]
fn config_serialize_toml() {
    let config = Config::default();

    let toml_str = toml::to_string(&config).unwrap();
    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[monitor]"));
    assert!(!toml_str.contains("state_file"));
}

#[test]
fn config_serialize_roundtrip() {
    let mut original = Config::default();
    original.monitor.state_file = Some(PathBuf::from("/tmp/store.json"));
    original.general.log_level = LogLevel::Trace;

    let toml_str = toml::to_string(&original).unwrap();
    let deserialized: Config = toml::from_str(&toml_str).unwrap();

    assert_eq!(original, deserialized);
}

#[test]
fn config_partial_monitor_section_keeps_defaults() {
    let config = Config::from_toml_str(
        r#"
        [monitor]
        interval_ms = 2500
        "#,
        None,
    )
    .unwrap();

    assert_eq!(config.monitor.interval_ms, 2500);
    assert_eq!(config.monitor.fallback_interface, FALLBACK_INTERFACE);
    assert_eq!(config.general.log_level, LogLevel::Info);
}

#[test]
fn config_empty_toml() {
    let config = Config::from_toml_str("", None).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn config_unknown_keys_are_ignored() {
    let config = Config::from_toml_str(
        r#"
        [general]
        log_level = "debug"
        colour = "blue"
        "#,
        None,
    )
    .unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
}

#[test]
fn config_invalid_log_level_is_a_parse_error() {
    let result = Config::from_toml_str("[general]\nlog_level = \"loud\"\n", None);

    match result {
        Err(NetStopwatchError::TomlParseError { location, .. }) => assert_eq!(location, "string"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn interval_has_a_floor() {
    let mut config = Config::default();
    config.monitor.interval_ms = 10;

    assert_eq!(config.monitor.interval(), Duration::from_millis(100));
}

#[test]
fn load_missing_file_returns_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load(&temp.path().join("absent.toml")).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn load_rejects_empty_fallback_interface() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[monitor]\nfallback_interface = \"  \"\n").unwrap();

    match Config::load(&path) {
        Err(NetStopwatchError::InvalidConfigField { field, .. }) => {
            assert_eq!(field, "fallback_interface")
        }
        other => panic!("expected invalid field, got {other:?}"),
    }
}

#[test]
fn load_or_create_writes_a_loadable_default_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested/config.toml");

    let config = Config::load_or_create(&path).unwrap();

    assert!(path.exists());
    assert_eq!(config, Config::default());
    assert!(
        fs::read_to_string(&path)
            .unwrap()
            .starts_with("# netstopwatch")
    );
}
