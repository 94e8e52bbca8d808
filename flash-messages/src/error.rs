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

//! Error types for the flash message renderer.

use thiserror::Error;

/// Faults raised while turning a page payload into popups.
///
/// A missing source element and unrecognised categories are not errors; they
/// simply produce no popups.
#[derive(Debug, Error)]
pub enum FlashError {
    /// The payload was not a JSON array of `[category, message]` pairs.
    #[error("Malformed flash message payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// The popup library rejected or could not run the call.
    #[error("Popup library error: {0}")]
    Popup(String),

    /// `window.__FLASH_CONFIG` is present but could not be decoded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No window or document to read from.
    #[error("DOM unavailable: {0}")]
    Dom(String),
}
