//! Light/dark theme selection and toggle.
//!
//! The initial theme comes from the persisted preference, then the
//! operating system signal, then [`Theme::Light`]. Applying a theme writes
//! the `data-theme` attribute on `<html>` and swaps the toggle icon class.
//! Toggling applies the flipped theme and persists it.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::capability::{PreferenceStore, ViewportSignal};
use crate::config::SiteConfig;
use crate::error::SiteError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Interpret a persisted value. Empty means "no choice"; anything other
    /// than `dark` toggles and shows its icon as light.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "" => None,
            "dark" => Some(Self::Dark),
            _ => Some(Self::Light),
        }
    }
}

/// Icon classes shown inside the toggle button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeIcons {
    pub dark: String,
    pub light: String,
}

impl ThemeIcons {
    #[must_use]
    pub fn for_theme(&self, theme: Theme) -> &str {
        match theme {
            Theme::Dark => &self.dark,
            Theme::Light => &self.light,
        }
    }
}

/// The two document writes a theme change performs.
pub trait ThemeSurface {
    /// Set the document-wide theme attribute.
    ///
    /// # Errors
    ///
    /// Returns an error when the DOM rejects the write.
    fn set_theme_attribute(&mut self, value: &str) -> Result<(), SiteError>;

    /// Replace the toggle icon's class.
    ///
    /// # Errors
    ///
    /// Returns an error when the DOM rejects the write.
    fn set_icon_class(&mut self, class: &str) -> Result<(), SiteError>;
}

/// In-memory current theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeStore {
    current: Theme,
}

impl ThemeStore {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { current: theme }
    }

    #[must_use]
    pub fn get(&self) -> Theme {
        self.current
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
    }

    /// Flip the current theme and return the new value.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.current
    }
}

/// Resolve the theme to show at page load.
///
/// A storage read failure counts as "no persisted choice".
pub fn initial_theme<P, V>(prefs: &P, signal: &V, storage_key: &str) -> Theme
where
    P: PreferenceStore + ?Sized,
    V: ViewportSignal + ?Sized,
{
    resolve_initial(prefs, signal, storage_key).0
}

/// Initial theme plus the attribute value to show for it. A non-empty
/// persisted value is shown verbatim, even when it is not a known theme.
fn resolve_initial<P, V>(prefs: &P, signal: &V, storage_key: &str) -> (Theme, String)
where
    P: PreferenceStore + ?Sized,
    V: ViewportSignal + ?Sized,
{
    let stored = match prefs.get(storage_key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("theme preference unreadable, ignoring: {e}");
            None
        }
    };
    if let Some(raw) = stored {
        if let Some(theme) = Theme::from_stored(&raw) {
            return (theme, raw);
        }
    }
    let theme = if signal.prefers_dark_scheme() { Theme::Dark } else { Theme::Light };
    (theme, theme.as_str().to_owned())
}

/// Owns the current theme and the capabilities needed to show and persist it.
pub struct ThemeController<P, S> {
    store: ThemeStore,
    prefs: P,
    surface: S,
    icons: ThemeIcons,
    storage_key: String,
}

impl<P: PreferenceStore, S: ThemeSurface> ThemeController<P, S> {
    /// Resolve the initial theme and apply it.
    ///
    /// # Errors
    ///
    /// Returns an error when the initial theme cannot be written to the
    /// document.
    pub fn init<V: ViewportSignal + ?Sized>(
        prefs: P,
        surface: S,
        signal: &V,
        config: &SiteConfig,
    ) -> Result<Self, SiteError> {
        let (theme, attribute) = resolve_initial(&prefs, signal, &config.storage_key);
        let mut controller = Self {
            store: ThemeStore::new(theme),
            prefs,
            surface,
            icons: ThemeIcons { dark: config.dark_icon_class.clone(), light: config.light_icon_class.clone() },
            storage_key: config.storage_key.clone(),
        };
        controller.show(theme, &attribute)?;
        log::debug!("initial theme: {attribute}");
        Ok(controller)
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.store.get()
    }

    /// Show `theme` on the page. Does not persist.
    ///
    /// # Errors
    ///
    /// Returns an error when a DOM write fails.
    pub fn apply(&mut self, theme: Theme) -> Result<(), SiteError> {
        self.show(theme, theme.as_str())
    }

    fn show(&mut self, theme: Theme, attribute: &str) -> Result<(), SiteError> {
        self.store.set(theme);
        self.surface.set_theme_attribute(attribute)?;
        self.surface.set_icon_class(self.icons.for_theme(theme))
    }

    /// Flip the theme, show it and persist it.
    ///
    /// # Errors
    ///
    /// Returns an error when a DOM write or the storage write fails. The
    /// in-memory theme has already flipped in either case.
    pub fn toggle(&mut self) -> Result<Theme, SiteError> {
        let next = self.store.toggle();
        self.apply(next)?;
        self.prefs.set(&self.storage_key, next.as_str())?;
        log::debug!("theme toggled to {}", next.as_str());
        Ok(next)
    }

    #[must_use]
    pub fn prefs(&self) -> &P {
        &self.prefs
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
