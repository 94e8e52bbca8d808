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

//! Popup options and the sink that displays them.

use serde::Serialize;

use crate::error::FlashError;
use crate::message::{Category, FlashMessage};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Success,
    Error,
}

/// Argument to `Swal.fire`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupOptions {
    pub icon: Icon,
    pub title: String,
    pub show_confirm_button: bool,
}

impl PopupOptions {
    /// Options for a flash message, or `None` when its category has no popup.
    pub fn for_message(flash: &FlashMessage) -> Option<Self> {
        let icon = match flash.category {
            Category::Success => Icon::Success,
            Category::Error => Icon::Error,
            Category::Other(_) => return None,
        };
        Some(Self {
            icon,
            title: flash.message.clone(),
            show_confirm_button: true,
        })
    }
}

/// Something that can put a popup in front of the user.
pub trait PopupSink {
    fn show(&mut self, options: &PopupOptions) -> Result<(), FlashError>;
}

impl<S: PopupSink + ?Sized> PopupSink for &mut S {
    fn show(&mut self, options: &PopupOptions) -> Result<(), FlashError> {
        (**self).show(options)
    }
}

/// Collects popups instead of displaying them.
impl PopupSink for Vec<PopupOptions> {
    fn show(&mut self, options: &PopupOptions) -> Result<(), FlashError> {
        self.push(options.clone());
        Ok(())
    }
}
