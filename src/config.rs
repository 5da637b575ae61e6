use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::error::{NavError, NavResult};

/// Selectors and tuning for the sidebar and the scroll tracker.
///
/// Every field has a default, so a host page only needs to pass the keys it
/// wants to change, e.g. `initNavigation({ throttleMs: 50 })`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct NavConfig {
    pub section_selector: String,
    pub icon_selector: String,
    pub sidebar_selector: String,
    pub active_class: String,
    /// Pixels subtracted from each section's top before the band test.
    pub scroll_offset: f64,
    /// Section id forced when the viewport is above the first section.
    pub home_id: String,
    pub smooth_scroll: bool,
    /// Coalesce scroll events into one recompute per window. `None` recomputes on every event.
    pub throttle_ms: Option<u32>,
    pub debug_logs: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            section_selector: "section".to_string(),
            icon_selector: ".nav-icon".to_string(),
            sidebar_selector: ".sidebar".to_string(),
            active_class: "active".to_string(),
            scroll_offset: 100.0,
            home_id: "home".to_string(),
            smooth_scroll: true,
            throttle_ms: None,
            debug_logs: false,
        }
    }
}

impl NavConfig {
    /// `undefined` and `null` map to the defaults.
    pub fn from_js(value: JsValue) -> NavResult<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| NavError::Config(e.to_string()))
    }

    pub fn from_json(body: &str) -> NavResult<Self> {
        serde_json::from_str(body).map_err(|e| NavError::Config(e.to_string()))
    }
}
