// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classifying taps on a laid-out spotlight.

use kurbo::Point;

use crate::SpotlightLayout;

/// Part of the overlay under a point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpotlightHit {
    /// The dismiss button.
    Button,
    /// The highlighted target.
    Highlight,
    /// The caption panel.
    Caption,
    /// Anywhere else on the cover.
    Cover,
}

/// Classify `pt` against `layout`.
///
/// Parts are checked in the order button, highlight, caption, cover, so the
/// button wins where it overlaps the caption. Rectangles are half-open, as with
/// [`kurbo::Rect::contains`].
pub fn hit_test(layout: &SpotlightLayout, pt: Point) -> SpotlightHit {
    if layout.button.contains(pt) {
        SpotlightHit::Button
    } else if layout.highlight.is_some_and(|h| h.contains(pt)) {
        SpotlightHit::Highlight
    } else if layout.caption.contains(pt) {
        SpotlightHit::Caption
    } else {
        SpotlightHit::Cover
    }
}
