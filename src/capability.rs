//! Narrow capability traits over browser globals.
//!
//! The behaviors never touch `window`, `document` or `localStorage`
//! directly. The browser implementations live in `dom`; tests supply
//! in-memory fakes.

use crate::error::SiteError;

/// String key/value storage that survives page reloads.
pub trait PreferenceStore {
    /// Read a value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store refuses the read.
    fn get(&self, key: &str) -> Result<Option<String>, SiteError>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store refuses the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError>;
}

/// Signals the page reads from its viewport and environment.
pub trait ViewportSignal {
    /// Whether the operating system asks for a dark color scheme.
    fn prefers_dark_scheme(&self) -> bool;

    /// Vertical scroll offset of the page in CSS pixels.
    fn scroll_offset(&self) -> f64;
}
