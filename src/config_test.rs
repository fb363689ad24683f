#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_page_contract() {
    let config = SiteConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.theme_attribute, "data-theme");
    assert_eq!(config.toggle_id, "theme-toggle");
    assert_eq!(config.dark_icon_class, "ri-moon-line");
    assert_eq!(config.light_icon_class, "ri-sun-line");
    assert_eq!(config.nav_link_selector, ".nav-links a");
    assert_eq!(config.section_selector, ".section");
    assert_eq!(config.header_offset_px, 200.0);
    assert_eq!(config.reveal_threshold, 0.1);
    assert_eq!(config.reveal_offset_px, 20.0);
    assert_eq!(config.reveal_duration_secs, 0.6);
}

#[test]
fn defaults_validate() {
    assert!(SiteConfig::default().validate().is_ok());
}

#[test]
fn partial_json_keeps_other_defaults() {
    let config = SiteConfig::from_json(r#"{"header_offset_px": 80, "active_class": "current"}"#).unwrap();
    assert_eq!(config.header_offset_px, 80.0);
    assert_eq!(config.active_class, "current");
    assert_eq!(config.storage_key, "theme");
}

#[test]
fn missing_or_blank_attribute_yields_defaults() {
    assert_eq!(SiteConfig::from_attribute(None).unwrap(), SiteConfig::default());
    assert_eq!(SiteConfig::from_attribute(Some("   ")).unwrap(), SiteConfig::default());
}

#[test]
fn malformed_json_is_rejected() {
    let err = SiteConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn unknown_field_is_rejected() {
    let err = SiteConfig::from_json(r#"{"storage": "x"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn threshold_above_one_is_rejected() {
    let err = SiteConfig::from_json(r#"{"reveal_threshold": 1.5}"#).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { field: "reveal_threshold", .. }));
}

#[test]
fn negative_header_offset_is_rejected() {
    let err = SiteConfig::from_json(r#"{"header_offset_px": -1}"#).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { field: "header_offset_px", .. }));
}

#[test]
fn empty_storage_key_is_rejected() {
    let err = SiteConfig::from_json(r#"{"storage_key": ""}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Empty { field: "storage_key" }));
}

#[test]
fn log_level_parses_case_insensitively() {
    let config = SiteConfig::from_json(r#"{"log_level": "DEBUG"}"#).unwrap();
    assert_eq!(config.log_level().unwrap(), log::Level::Debug);
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = SiteConfig::from_json(r#"{"log_level": "loud"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::LogLevel(level) if level == "loud"));
}
