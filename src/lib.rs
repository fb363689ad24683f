//! Page enhancements for the static documentation site.
//!
//! This crate is compiled to WebAssembly and runs in the browser once the
//! page has loaded. It attaches three independent behaviors: a light/dark
//! theme toggle, a scroll spy that marks the navigation link of the section
//! in view, and an entrance animation that fades sections in the first time
//! they intersect the viewport.
//!
//! Each behavior is a pure core that compiles and tests natively. The
//! browser glue in `dom` only exists with the `hydrate` feature and turns
//! DOM events into calls on those cores.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme value, persisted preference and the toggle controller |
//! | [`scroll_spy`] | Active-section selection and nav link marking |
//! | [`reveal`] | One-way `Hidden -> Revealed` section animation |
//! | [`capability`] | Narrow traits over storage and viewport signals |
//! | [`config`] | Selectors, class names and constants, overridable from JSON |
//! | [`consts`] | Default values for [`config::SiteConfig`] |
//! | [`error`] | Startup and DOM error types |
//! | `dom` | `web-sys` bindings and event wiring (`hydrate` only) |

pub mod capability;
pub mod config;
pub mod consts;
pub mod error;
pub mod reveal;
pub mod scroll_spy;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod dom;

/// WASM entry point. Runs when the module is instantiated.
///
/// # Errors
///
/// Returns the startup failure as a thrown JS value when a required element,
/// local storage or the configuration is unusable.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    dom::boot().map_err(Into::into)
}
