// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A full layout pass: region, caption and button.

use kurbo::{Rect, Size};

use crate::{Region, place_button, place_caption, select_region};

/// Result of one layout pass.
///
/// Recomputed from scratch on every pass; nothing is cached between passes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpotlightLayout {
    /// Edge hosting the caption.
    pub region: Region,
    /// Target rectangle the pass was computed for, if any.
    pub highlight: Option<Rect>,
    /// Caption panel.
    pub caption: Rect,
    /// Dismiss button.
    pub button: Rect,
}

/// Run region selection, caption placement and button placement.
pub fn layout(highlight: Option<Rect>, button_size: Size, screen: Size) -> SpotlightLayout {
    let region = select_region(highlight, screen);
    SpotlightLayout {
        region,
        highlight,
        caption: place_caption(region, highlight, screen),
        button: place_button(button_size, screen),
    }
}
