// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for flash-messages tests.
//
// Provides a recording popup sink for native tests and, in the browser,
// helpers that mount a payload element and stub out `window.Swal`.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use flash_messages::{FlashError, PopupOptions, PopupSink};

/// Records popups and can be told to fail on the n-th call.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub shown: Vec<PopupOptions>,
    pub fail_on: Option<usize>,
}

impl RecordingSink {
    pub fn failing_on(call: usize) -> Self {
        Self {
            shown: Vec::new(),
            fail_on: Some(call),
        }
    }

    pub fn titles(&self) -> Vec<&str> {
        self.shown.iter().map(|o| o.title.as_str()).collect()
    }
}

impl PopupSink for RecordingSink {
    fn show(&mut self, options: &PopupOptions) -> Result<(), FlashError> {
        if self.fail_on == Some(self.shown.len()) {
            return Err(FlashError::Popup("Swal is not defined".into()));
        }
        self.shown.push(options.clone());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// DOM helpers (browser only)
// ---------------------------------------------------------------------------

#[cfg(target_arch = "wasm32")]
pub mod dom {
    use wasm_bindgen::JsValue;

    /// Append `<script type="application/json" id=...>` holding `payload` to
    /// `<body>` and return it.
    pub fn mount_payload(id: &str, payload: &str) -> web_sys::Element {
        let document = gloo_utils::document();
        let script = document.create_element("script").unwrap();
        script.set_attribute("type", "application/json").unwrap();
        script.set_id(id);
        script.set_text_content(Some(payload));
        document.body().unwrap().append_child(&script).unwrap();
        script
    }

    /// Remove the element from `<body>` so subsequent tests start clean.
    pub fn cleanup(element: &web_sys::Element) {
        gloo_utils::document()
            .body()
            .unwrap()
            .remove_child(element)
            .ok();
    }

    /// Install a `window.Swal` whose `fire` pushes its argument onto the
    /// returned array.
    pub fn stub_swal() -> js_sys::Array {
        let calls = js_sys::Array::new();
        let fire = js_sys::Function::new_with_args(
            "options",
            "this.calls.push(options); return Promise.resolve({ isConfirmed: true });",
        );
        let swal = js_sys::Object::new();
        js_sys::Reflect::set(&swal, &"calls".into(), &calls).unwrap();
        js_sys::Reflect::set(&swal, &"fire".into(), &fire).unwrap();
        js_sys::Reflect::set(&gloo_utils::window(), &"Swal".into(), &swal).unwrap();
        calls
    }

    /// Remove `window.Swal` so tests don't leak state.
    pub fn remove_swal() {
        let window = gloo_utils::window();
        let _ = js_sys::Reflect::delete_property(&window.into(), &"Swal".into());
    }

    /// Set `window.__FLASH_CONFIG` to the given object.
    pub fn inject_flash_config(config: &js_sys::Object) {
        js_sys::Reflect::set(&gloo_utils::window(), &"__FLASH_CONFIG".into(), config).unwrap();
    }

    /// Remove `window.__FLASH_CONFIG` so tests don't leak state.
    pub fn remove_flash_config() {
        let window = gloo_utils::window();
        let _ = js_sys::Reflect::delete_property(&window.into(), &"__FLASH_CONFIG".into());
    }

    pub fn get_str(object: &JsValue, key: &str) -> Option<String> {
        js_sys::Reflect::get(object, &key.into()).ok()?.as_string()
    }

    pub fn get_bool(object: &JsValue, key: &str) -> Option<bool> {
        js_sys::Reflect::get(object, &key.into()).ok()?.as_bool()
    }
}
