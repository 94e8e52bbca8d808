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

//! Turns a flash message payload into popups.

use log::{debug, warn};

use crate::config::{ParseFailurePolicy, RendererConfig};
use crate::error::FlashError;
use crate::message::{Category, FlashMessageBatch};
use crate::popup::{PopupOptions, PopupSink};

/// Outcome of one rendering pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub shown: usize,
    pub skipped: usize,
}

#[derive(Clone, Debug, Default)]
pub struct FlashMessageRenderer {
    config: RendererConfig,
}

impl FlashMessageRenderer {
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Render the raw text of the payload element.
    ///
    /// `None` means the element is not on the page and renders nothing.
    pub fn render<S: PopupSink>(
        &self,
        payload: Option<&str>,
        sink: &mut S,
    ) -> Result<RenderReport, FlashError> {
        let Some(text) = payload else {
            debug!("no flash message element on page");
            return Ok(RenderReport::default());
        };
        let batch = match FlashMessageBatch::parse(text) {
            Ok(batch) => batch,
            Err(e) => match self.config.on_parse_failure {
                ParseFailurePolicy::Propagate => return Err(e),
                ParseFailurePolicy::FailClosed => {
                    warn!("ignoring flash messages: {e}");
                    return Ok(RenderReport::default());
                }
            },
        };
        self.render_batch(&batch, sink)
    }

    /// Show one popup per success/error entry, in batch order.
    ///
    /// Stops at the first sink failure.
    pub fn render_batch<S: PopupSink>(
        &self,
        batch: &FlashMessageBatch,
        sink: &mut S,
    ) -> Result<RenderReport, FlashError> {
        let mut report = RenderReport::default();
        for flash in batch {
            match PopupOptions::for_message(flash) {
                Some(options) => {
                    sink.show(&options)?;
                    report.shown += 1;
                }
                None => {
                    if let Category::Other(tag) = &flash.category {
                        if self.config.warn_on_unrecognized {
                            warn!("skipping flash message with unrecognized category {tag:?}");
                        } else {
                            debug!("skipping flash message with unrecognized category {tag:?}");
                        }
                    }
                    report.skipped += 1;
                }
            }
        }
        debug!(
            "rendered flash messages: {} shown, {} skipped",
            report.shown, report.skipped
        );
        Ok(report)
    }
}
