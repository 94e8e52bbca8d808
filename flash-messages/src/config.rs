/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Runtime configuration.
//!
//! The page may define `window.__FLASH_CONFIG` before the module loads:
//!
//! ```js
//! window.__FLASH_CONFIG = { elementId: "flash-messages", onParseFailure: "failClosed" };
//! ```
//!
//! Every field is optional; a missing object means defaults.

use serde::Deserialize;

pub const DEFAULT_ELEMENT_ID: &str = "flash-messages";
pub const CONFIG_GLOBAL: &str = "__FLASH_CONFIG";

/// What to do when the payload element holds malformed JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParseFailurePolicy {
    /// Surface the fault to the caller (and from there to the console).
    #[default]
    Propagate,
    /// Log a warning and show nothing.
    FailClosed,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    #[serde(rename = "elementId")]
    pub element_id: String,
    #[serde(rename = "onParseFailure")]
    pub on_parse_failure: ParseFailurePolicy,
    #[serde(rename = "warnOnUnrecognized")]
    pub warn_on_unrecognized: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            element_id: DEFAULT_ELEMENT_ID.to_string(),
            on_parse_failure: ParseFailurePolicy::default(),
            warn_on_unrecognized: false,
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl RendererConfig {
    /// Read `window.__FLASH_CONFIG`, falling back to defaults when it is absent.
    pub fn from_window() -> Result<Self, crate::FlashError> {
        use crate::FlashError;
        use wasm_bindgen::JsValue;

        let win = web_sys::window().ok_or_else(|| FlashError::Dom("no global window".into()))?;
        let config = js_sys::Reflect::get(&win, &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        if config.is_undefined() || config.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| FlashError::Config(format!("Failed to parse {CONFIG_GLOBAL}: {e}")))
    }
}
