// SPDX-License-Identifier: MPL-2.0
//! Infinite-scroll trigger.
//!
//! The trigger point is recomputed on every scroll event as a fixed fraction
//! of the current document height. Crossing it fires once; the trigger stays
//! busy until the shell reports that the appended page has been laid out.

use crate::config::{DEFAULT_SCROLL_TRIGGER_RATIO, MAX_SCROLL_TRIGGER_RATIO, MIN_SCROLL_TRIGGER_RATIO};

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTrigger {
    ratio: f32,
    trigger_height: Option<f32>,
    busy: bool,
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_TRIGGER_RATIO)
    }
}

impl ScrollTrigger {
    #[must_use]
    pub fn new(ratio: f32) -> Self {
        Self {
            ratio: ratio.clamp(MIN_SCROLL_TRIGGER_RATIO, MAX_SCROLL_TRIGGER_RATIO),
            trigger_height: None,
            busy: false,
        }
    }

    /// Handles a scroll event.
    ///
    /// `viewport_bottom` is the scroll offset plus the viewport height.
    /// Returns `true` when more photos should be requested.
    pub fn on_scroll(&mut self, viewport_bottom: f32, document_height: f32) -> bool {
        let trigger = document_height * self.ratio;
        self.trigger_height = Some(trigger);

        if viewport_bottom < trigger || self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    /// Releases the trigger once the append layout pass is done and records
    /// the previous trigger plus the new document height.
    ///
    /// Also called when a request could not be issued or failed, so a later
    /// scroll can try again.
    pub fn complete(&mut self, document_height: f32) {
        self.busy = false;
        self.trigger_height = Some(self.trigger_height.unwrap_or(0.0) + document_height);
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Trigger height recorded by the last scroll or completion.
    ///
    /// Informational only: the next [`on_scroll`](Self::on_scroll) recomputes
    /// the trigger from the document height it is given.
    #[must_use]
    pub fn trigger_height(&self) -> Option<f32> {
        self.trigger_height
    }

    #[must_use]
    pub fn ratio(&self) -> f32 {
        self.ratio
    }
}
