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

//! Shows server-rendered flash messages as SweetAlert2 popups.
//!
//! The server embeds its flashed `[category, message]` pairs as JSON in a
//! page element (`#flash-messages` by default). [`FlashMessageRenderer`]
//! decodes that text and hands one [`PopupOptions`] per success/error entry
//! to a [`PopupSink`]. In the browser, [`start`] wires this to the document
//! and to `Swal.fire`; everything else runs natively for tests.

pub mod config;
pub mod error;
pub mod message;
#[cfg(target_arch = "wasm32")]
pub mod page;
pub mod popup;
pub mod renderer;

pub use config::{ParseFailurePolicy, RendererConfig};
pub use error::FlashError;
pub use message::{Category, FlashMessage, FlashMessageBatch};
pub use popup::{Icon, PopupOptions, PopupSink};
pub use renderer::{FlashMessageRenderer, RenderReport};

/// Read `window.__FLASH_CONFIG` and render the page's flash messages once it
/// has been parsed.
///
/// A malformed config object is logged and replaced by defaults.
#[cfg(target_arch = "wasm32")]
pub fn start() -> Result<(), FlashError> {
    let config = RendererConfig::from_window().unwrap_or_else(|e| {
        log::error!("{e}; using defaults");
        RendererConfig::default()
    });
    page::install(config)
}
