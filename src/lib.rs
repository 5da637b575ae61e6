//! Sidebar toggle and scroll-synced navigation highlighting for a single page site.
//!
//! Loaded as a wasm module, the crate attaches itself to the page on
//! `DOMContentLoaded`: every `section` is tracked against the scroll position and
//! the `.nav-icon` linking to it gets the `active` class. `toggleSidebar()` is
//! installed on `window` for the page's menu button.
//!
//! Yew apps can use [`components::NavSidebar`] or the
//! [`hooks::use_active_section`] hook instead.

use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod hooks;
mod logging;
pub mod sidebar;
pub mod tracker;

pub use config::NavConfig;
pub use error::{NavError, NavResult};

#[cfg(feature = "autostart")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if let Err(err) = app::install_global_toggle() {
        logging::warn(&err.to_string());
    }
    if let Err(err) = app::on_page_ready(NavConfig::default()) {
        logging::warn(&format!("navigation not attached: {}", err));
    }
    logging::info("sidenav loaded");
}

/// Shows or hides the sidebar.
#[wasm_bindgen(js_name = toggleSidebar)]
pub fn toggle_sidebar() {
    app::toggle_sidebar();
}

/// Re-attaches the tracker with custom selectors or tuning. Listeners from an
/// earlier attach are removed.
#[wasm_bindgen(js_name = initNavigation)]
pub fn init_navigation(config: JsValue) -> Result<(), JsValue> {
    let config = NavConfig::from_js(config)?;
    app::on_page_ready(config)?;
    Ok(())
}
