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

//! Flash message payload types.
//!
//! The server embeds its flashed messages as a JSON array of two-element
//! arrays, `[["success", "Saved"], ["error", "Invalid input"]]`, in the order
//! they were flashed. Decoding keeps that order.

use std::fmt;

use serde::Deserialize;

use crate::error::FlashError;

/// Severity tag attached to a flash message by the producer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Category {
    Success,
    Error,
    /// Any other tag, e.g. Flask's default `"message"`. Never displayed.
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Success => "success",
            Category::Error => "error",
            Category::Other(tag) => tag,
        }
    }
}

impl From<String> for Category {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "success" => Category::Success,
            "error" => Category::Error,
            _ => Category::Other(tag),
        }
    }
}

impl From<&str> for Category {
    fn from(tag: &str) -> Self {
        Category::from(tag.to_string())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `[category, message]` pair. The message text is already localised and
/// escaped by the producer and is shown verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "(Category, String)")]
pub struct FlashMessage {
    pub category: Category,
    pub message: String,
}

impl FlashMessage {
    pub fn new(category: impl Into<Category>, message: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            message: message.into(),
        }
    }
}

impl From<(Category, String)> for FlashMessage {
    fn from((category, message): (Category, String)) -> Self {
        Self { category, message }
    }
}

/// The messages flashed for a single page load, in producer order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FlashMessageBatch(Vec<FlashMessage>);

impl FlashMessageBatch {
    /// Decode the text content of the payload element.
    ///
    /// Blank text decodes to an empty batch. A leading byte order mark is
    /// ignored.
    pub fn parse(text: &str) -> Result<Self, FlashError> {
        let text = text.trim_start_matches('\u{feff}').trim();
        if text.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(text)?)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlashMessage> {
        self.0.iter()
    }
}

impl From<Vec<FlashMessage>> for FlashMessageBatch {
    fn from(messages: Vec<FlashMessage>) -> Self {
        Self(messages)
    }
}

impl<'a> IntoIterator for &'a FlashMessageBatch {
    type Item = &'a FlashMessage;
    type IntoIter = std::slice::Iter<'a, FlashMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
