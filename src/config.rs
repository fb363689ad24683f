//! Page configuration.
//!
//! Every selector, class name, storage key and numeric constant used by the
//! behaviors lives in [`SiteConfig`]. A page may override any subset of the
//! defaults with a JSON object in the `data-docsite-config` attribute of
//! `<html>`; missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("unknown log level: {0}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub storage_key: String,
    pub theme_attribute: String,
    pub toggle_id: String,
    pub icon_selector: String,
    pub dark_icon_class: String,
    pub light_icon_class: String,
    pub nav_link_selector: String,
    pub section_selector: String,
    pub active_class: String,
    pub header_offset_px: f64,
    pub reveal_threshold: f64,
    pub reveal_offset_px: f64,
    pub reveal_duration_secs: f64,
    pub reveal_easing: String,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::STORAGE_KEY.to_owned(),
            theme_attribute: consts::THEME_ATTRIBUTE.to_owned(),
            toggle_id: consts::TOGGLE_ID.to_owned(),
            icon_selector: consts::ICON_SELECTOR.to_owned(),
            dark_icon_class: consts::DARK_ICON_CLASS.to_owned(),
            light_icon_class: consts::LIGHT_ICON_CLASS.to_owned(),
            nav_link_selector: consts::NAV_LINK_SELECTOR.to_owned(),
            section_selector: consts::SECTION_SELECTOR.to_owned(),
            active_class: consts::ACTIVE_CLASS.to_owned(),
            header_offset_px: consts::HEADER_OFFSET_PX,
            reveal_threshold: consts::REVEAL_THRESHOLD,
            reveal_offset_px: consts::REVEAL_OFFSET_PX,
            reveal_duration_secs: consts::REVEAL_DURATION_SECS,
            reveal_easing: consts::REVEAL_EASING.to_owned(),
            log_level: consts::LOG_LEVEL.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override and validate the result.
    ///
    /// # Errors
    ///
    /// Returns `Json` for malformed input or unknown fields, and a field
    /// error when a value fails [`SiteConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an optional raw attribute value. `None` or a blank value
    /// yields the defaults.
    ///
    /// # Errors
    ///
    /// Same as [`SiteConfig::from_json`].
    pub fn from_attribute(raw: Option<&str>) -> Result<Self, ConfigError> {
        match raw.map(str::trim) {
            Some(raw) if !raw.is_empty() => Self::from_json(raw),
            _ => Ok(Self::default()),
        }
    }

    /// Check ranges and required fields.
    ///
    /// # Errors
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("storage_key", &self.storage_key),
            ("theme_attribute", &self.theme_attribute),
            ("toggle_id", &self.toggle_id),
            ("icon_selector", &self.icon_selector),
            ("dark_icon_class", &self.dark_icon_class),
            ("light_icon_class", &self.light_icon_class),
            ("nav_link_selector", &self.nav_link_selector),
            ("section_selector", &self.section_selector),
            ("active_class", &self.active_class),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty { field });
            }
        }

        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::OutOfRange { field: "reveal_threshold", value: self.reveal_threshold });
        }
        let non_negative = [
            ("header_offset_px", self.header_offset_px),
            ("reveal_offset_px", self.reveal_offset_px),
            ("reveal_duration_secs", self.reveal_duration_secs),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }

        self.log_level()?;
        Ok(())
    }

    /// The configured console log level.
    ///
    /// # Errors
    ///
    /// Returns `LogLevel` when the name is not a `log` level.
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
