//! Default values for the page enhancements.

// ── Theme ───────────────────────────────────────────────────────

/// Local storage key holding the persisted theme.
pub const STORAGE_KEY: &str = "theme";

/// Attribute on `<html>` read by the stylesheet.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Id of the theme toggle button.
pub const TOGGLE_ID: &str = "theme-toggle";

/// Selector of the icon inside the toggle button.
pub const ICON_SELECTOR: &str = "i";

/// Icon class shown while the dark theme is active.
pub const DARK_ICON_CLASS: &str = "ri-moon-line";

/// Icon class shown while the light theme is active.
pub const LIGHT_ICON_CLASS: &str = "ri-sun-line";

/// Media query for the operating system dark preference.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Scroll spy ──────────────────────────────────────────────────

/// Navigation anchors whose `href` names a section id.
pub const NAV_LINK_SELECTOR: &str = ".nav-links a";

/// Page sections tracked by the scroll spy and the entrance animation.
pub const SECTION_SELECTOR: &str = ".section";

/// Class marking the nav link of the section in view.
pub const ACTIVE_CLASS: &str = "active";

/// Height reserved for the sticky header, in CSS pixels. A section becomes
/// active once the scroll offset is within this distance of its top.
pub const HEADER_OFFSET_PX: f64 = 200.0;

// ── Entrance animation ──────────────────────────────────────────

/// Visible fraction of a section that counts as entering the viewport.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Downward offset of a hidden section, in CSS pixels.
pub const REVEAL_OFFSET_PX: f64 = 20.0;

/// Length of the fade and slide transition, in seconds.
pub const REVEAL_DURATION_SECS: f64 = 0.6;

/// CSS timing function of the reveal transition.
pub const REVEAL_EASING: &str = "ease-out";

// ── Boot ────────────────────────────────────────────────────────

/// Attribute on `<html>` that may carry a JSON configuration override.
pub const CONFIG_ATTRIBUTE: &str = "data-docsite-config";

/// Console log level used until the configuration is read.
pub const LOG_LEVEL: &str = "info";
