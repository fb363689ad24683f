//! Browser bindings and event wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only module that touches `web-sys`. It implements the
//! capability traits over `window`, `localStorage` and the document, then
//! registers the click, scroll and intersection handlers that feed the
//! pure cores. Handlers live for the page lifetime, so their closures are
//! leaked with `Closure::forget`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Storage, Window,
};

use crate::capability::{PreferenceStore, ViewportSignal};
use crate::config::SiteConfig;
use crate::consts;
use crate::error::SiteError;
use crate::reveal::{IntersectionEvent, RevealStyle, Revealer, StyleDecl};
use crate::scroll_spy::{ScrollEvent, ScrollSpy, SectionBounds};
use crate::theme::{ThemeController, ThemeSurface};

// =============================================================================
// CAPABILITIES
// =============================================================================

/// `window.localStorage`.
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// # Errors
    ///
    /// Returns `StorageUnavailable` when the page has no local storage or
    /// access is denied.
    pub fn open(window: &Window) -> Result<Self, SiteError> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            _ => Err(SiteError::StorageUnavailable),
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        Ok(self.storage.get_item(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
        Ok(self.storage.set_item(key, value)?)
    }
}

/// Media queries and scroll position of the window.
pub struct BrowserViewport {
    window: Window,
}

impl ViewportSignal for BrowserViewport {
    fn prefers_dark_scheme(&self) -> bool {
        match self.window.match_media(consts::PREFERS_DARK_QUERY) {
            Ok(Some(query)) => query.matches(),
            _ => false,
        }
    }

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }
}

/// `<html>` theme attribute plus the toggle icon.
pub struct DocumentTheme {
    root: Element,
    icon: Element,
    attribute: String,
}

impl ThemeSurface for DocumentTheme {
    fn set_theme_attribute(&mut self, value: &str) -> Result<(), SiteError> {
        Ok(self.root.set_attribute(&self.attribute, value)?)
    }

    fn set_icon_class(&mut self, class: &str) -> Result<(), SiteError> {
        self.icon.set_class_name(class);
        Ok(())
    }
}

// =============================================================================
// BOOT
// =============================================================================

/// Mount now, or once `DOMContentLoaded` fires if the document is still
/// being parsed.
///
/// # Errors
///
/// Returns startup failures when mounting immediately.
pub fn boot() -> Result<(), SiteError> {
    install_logger();
    let window = web_sys::window().ok_or(SiteError::NoWindow)?;
    let document = window.document().ok_or(SiteError::NoDocument)?;

    if document.ready_state() != "loading" {
        return mount(&window, &document);
    }

    let listener = document.clone();
    let deferred = Closure::once_into_js(move || {
        if let Err(e) = mount(&window, &document) {
            log::error!("page enhancements failed to start: {e}");
        }
    });
    listener.add_event_listener_with_callback("DOMContentLoaded", deferred.unchecked_ref())?;
    Ok(())
}

/// Read configuration, set the log level and attach all three behaviors.
///
/// # Errors
///
/// Returns the first missing element, storage or configuration failure.
pub fn mount(window: &Window, document: &Document) -> Result<(), SiteError> {
    let root = document
        .document_element()
        .ok_or_else(|| SiteError::missing("html"))?;
    let config = SiteConfig::from_attribute(root.get_attribute(consts::CONFIG_ATTRIBUTE).as_deref())?;
    log::set_max_level(config.log_level()?.to_level_filter());

    mount_theme(window, document, root, &config)?;
    let sections = collect_html_elements(document, &config.section_selector)?;
    let links = collect_html_elements(document, &config.nav_link_selector)?;
    mount_scroll_spy(window, &config, sections.clone(), links)?;
    mount_reveal(&config, &sections)?;

    log::info!("page enhancements ready: {} sections", sections.len());
    Ok(())
}

/// Route `log` records to the browser console at the default level. Runs
/// before the configuration is read so config errors are visible too;
/// [`mount`] narrows the level afterwards.
fn install_logger() {
    let level = consts::LOG_LEVEL.parse::<log::Level>().unwrap_or(log::Level::Info);
    if let Err(e) = console_log::init_with_level(level) {
        log::debug!("console logger already installed: {e}");
    }
}

// =============================================================================
// THEME
// =============================================================================

fn mount_theme(window: &Window, document: &Document, root: Element, config: &SiteConfig) -> Result<(), SiteError> {
    let toggle = document
        .get_element_by_id(&config.toggle_id)
        .ok_or_else(|| SiteError::missing(format!("#{}", config.toggle_id)))?;
    let icon = toggle
        .query_selector(&config.icon_selector)?
        .ok_or_else(|| SiteError::missing(format!("#{} {}", config.toggle_id, config.icon_selector)))?;

    let prefs = LocalStorage::open(window)?;
    let surface = DocumentTheme { root, icon, attribute: config.theme_attribute.clone() };
    let signal = BrowserViewport { window: window.clone() };
    let controller = Rc::new(RefCell::new(ThemeController::init(prefs, surface, &signal, config)?));

    let on_click = Closure::<dyn FnMut()>::new(move || {
        if let Err(e) = controller.borrow_mut().toggle() {
            log::warn!("theme toggle incomplete: {e}");
        }
    });
    toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

// =============================================================================
// SCROLL SPY
// =============================================================================

fn mount_scroll_spy(
    window: &Window,
    config: &SiteConfig,
    sections: Vec<HtmlElement>,
    links: Vec<HtmlElement>,
) -> Result<(), SiteError> {
    let mut spy = ScrollSpy::new(config.header_offset_px);
    let active_class = config.active_class.clone();
    let viewport = BrowserViewport { window: window.clone() };

    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        let event = ScrollEvent {
            offset: viewport.scroll_offset(),
            sections: sections
                .iter()
                .map(|s| SectionBounds::new(s.id(), f64::from(s.offset_top())))
                .collect(),
        };
        spy.on_scroll(&event);
        let hrefs = links.iter().map(|l| l.get_attribute("href")).collect::<Vec<_>>();
        let states = spy.link_states(hrefs.iter().map(Option::as_deref));
        for (link, active) in links.iter().zip(states) {
            if let Err(e) = link.class_list().toggle_with_force(&active_class, active) {
                log::warn!("nav link class update failed: {e:?}");
            }
        }
    });
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}

// =============================================================================
// ENTRANCE ANIMATION
// =============================================================================

fn mount_reveal(config: &SiteConfig, sections: &[HtmlElement]) -> Result<(), SiteError> {
    let mut revealer = Revealer::new(RevealStyle::from_config(config));
    for section in sections {
        let (_, hidden) = revealer.register();
        write_style(section, &hidden)?;
    }

    let targets = sections.to_vec();
    let state = Rc::new(RefCell::new(revealer));
    let on_entries = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(section) = targets.iter().position(|t| **t == target) else {
                    continue;
                };
                let event = IntersectionEvent { section, is_intersecting: entry.is_intersecting() };
                let Some(style) = state.borrow_mut().on_intersection(event) else {
                    continue;
                };
                if let Err(e) = write_style(&targets[section], &style) {
                    log::warn!("section reveal failed: {e}");
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(config.reveal_threshold));
    let observer = IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &options)?;
    on_entries.forget();
    for section in sections {
        observer.observe(section);
    }
    Ok(())
}

fn write_style(element: &HtmlElement, decl: &StyleDecl) -> Result<(), SiteError> {
    let style = element.style();
    for (property, value) in &decl.properties {
        style.set_property(property, value)?;
    }
    Ok(())
}

// =============================================================================
// HELPERS
// =============================================================================

fn collect_html_elements(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, SiteError> {
    let nodes = document.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else {
            continue;
        };
        match node.dyn_into::<HtmlElement>() {
            Ok(element) => out.push(element),
            Err(_) => log::debug!("skipping non-html match for {selector}"),
        }
    }
    Ok(out)
}
