//! Page configuration supplied by the hosting HTML.
//!
//! A page may define `window.__LIVELY_CONFIG__` before loading the module;
//! any field it leaves out keeps its default.

use lively_types::PageConfig;
use wasm_bindgen::prelude::*;

pub const CONFIG_GLOBAL: &str = "__LIVELY_CONFIG__";

/// Read and check the page config. `Ok(default)` when none is defined.
///
/// Runs before logging is initialised, so problems are returned rather
/// than logged.
pub fn load() -> Result<PageConfig, String> {
    let window = web_sys::window().ok_or("No window")?;
    let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| format!("reading {CONFIG_GLOBAL} failed: {e:?}"))?;
    if raw.is_undefined() || raw.is_null() {
        return Ok(PageConfig::default());
    }

    let config: PageConfig = serde_wasm_bindgen::from_value(raw)
        .map_err(|e| format!("invalid {CONFIG_GLOBAL}: {e}"))?;
    lively_core::config::validate(&config).map_err(|e| e.to_string())?;
    Ok(config)
}
