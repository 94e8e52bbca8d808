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

//! Browser glue: read the payload element and fire SweetAlert2 popups.

use log::{debug, error};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::config::RendererConfig;
use crate::error::FlashError;
use crate::popup::{PopupOptions, PopupSink};
use crate::renderer::{FlashMessageRenderer, RenderReport};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Swal, js_name = fire)]
    fn swal_fire(options: &JsValue) -> Result<JsValue, JsValue>;
}

/// Displays popups through the page's global `Swal`.
///
/// `Swal.fire` returns a promise that settles when the user closes the popup;
/// it is not awaited, so stacking of consecutive popups is up to the library.
#[derive(Debug, Default)]
pub struct SwalPopup;

impl PopupSink for SwalPopup {
    fn show(&mut self, options: &PopupOptions) -> Result<(), FlashError> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let value = serde::Serialize::serialize(options, &serializer)
            .map_err(|e| FlashError::Popup(format!("could not build popup options: {e}")))?;
        swal_fire(&value).map_err(|e| FlashError::Popup(format!("Swal.fire failed: {e:?}")))?;
        Ok(())
    }
}

fn document() -> Result<Document, FlashError> {
    web_sys::window()
        .ok_or_else(|| FlashError::Dom("no global window".into()))?
        .document()
        .ok_or_else(|| FlashError::Dom("window has no document".into()))
}

/// Text content of the payload element, or `None` when it is not on the page.
pub fn read_payload(element_id: &str) -> Result<Option<String>, FlashError> {
    Ok(document()?
        .get_element_by_id(element_id)
        .map(|element| element.text_content().unwrap_or_default()))
}

/// Render whatever the page currently holds under the configured element id.
pub fn render_from_document<S: PopupSink>(
    renderer: &FlashMessageRenderer,
    sink: &mut S,
) -> Result<RenderReport, FlashError> {
    let payload = read_payload(&renderer.config().element_id)?;
    renderer.render(payload.as_deref(), sink)
}

fn run(config: RendererConfig) -> Result<RenderReport, FlashError> {
    let renderer = FlashMessageRenderer::new(config);
    render_from_document(&renderer, &mut SwalPopup)
}

fn into_js_error(e: FlashError) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

/// Render flash messages once the document has been parsed.
///
/// While the document is still loading this registers a one-shot
/// `DOMContentLoaded` listener; a fault inside it is thrown into JS
/// uncaught. Otherwise it renders right away and returns the fault.
pub fn install(config: RendererConfig) -> Result<(), FlashError> {
    let document = document()?;
    if document.ready_state() != "loading" {
        return run(config).map(|_| ());
    }
    debug!("deferring flash messages until DOMContentLoaded");
    let callback = Closure::once_into_js(move || -> Result<(), JsValue> {
        run(config).map(|_| ()).map_err(|e| {
            error!("{e}");
            into_js_error(e)
        })
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        .map_err(|e| FlashError::Dom(format!("could not register DOMContentLoaded: {e:?}")))
}
