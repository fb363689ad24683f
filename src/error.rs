//! Error types for page startup and DOM writes.
//!
//! Startup errors propagate to the WASM entry point and are thrown to the
//! page, which stops initialization. Errors raised inside event handlers
//! are logged where they occur.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("no window object; not running in a browser page")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("required element not found: {selector}")]
    MissingElement { selector: String },
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("dom call failed: {0}")]
    Dom(String),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl SiteError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement { selector: selector.into() }
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Dom(message)
    }
}

#[cfg(feature = "hydrate")]
impl From<SiteError> for wasm_bindgen::JsValue {
    fn from(err: SiteError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
