// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caption region selection.
//!
//! Each edge of the surface gets a score for the open space between the highlight
//! and that edge, and the best edge hosts the caption. The scores are:
//!
//! - top: `y0 × width`
//! - left: `x0 × height`
//! - bottom: `(height − y1) × width`
//! - right: `(width − x1) − height`
//!
//! The right score is a difference, not an area, so it rarely wins on ordinary
//! layouts. Existing layouts depend on that outcome, so it is kept as is.

use kurbo::{Rect, Size};

use crate::Region;

/// Open-space scores for [`Region::EDGES`], in the same order.
///
/// The highlight is not clamped to the surface; a highlight that sticks out
/// simply produces negative scores for the edges it crosses.
pub fn region_scores(highlight: Rect, screen: Size) -> [f64; 4] {
    [
        highlight.y0 * screen.width,
        highlight.x0 * screen.height,
        (screen.height - highlight.y1) * screen.width,
        (screen.width - highlight.x1) - screen.height,
    ]
}

/// Pick the edge with the strictly greatest score.
///
/// Ties go to the earlier edge in [`Region::EDGES`] order (top, left, bottom,
/// right). Without a highlight the result is [`Region::None`].
pub fn select_region(highlight: Option<Rect>, screen: Size) -> Region {
    let Some(highlight) = highlight else {
        return Region::None;
    };
    let scores = region_scores(highlight, screen);

    let mut best = 0;
    for (i, score) in scores.iter().enumerate().skip(1) {
        if *score > scores[best] {
            best = i;
        }
    }
    let region = Region::EDGES[best];

    tracing::trace!(
        target: "spotlight.region",
        ?highlight,
        top = scores[0],
        left = scores[1],
        bottom = scores[2],
        right = scores[3],
        ?region,
        "region_selected"
    );
    region
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portrait_example_prefers_bottom() {
        let screen = Size::new(400.0, 800.0);
        let highlight = Rect::from_origin_size((50.0, 50.0), (100.0, 40.0));
        assert_eq!(
            region_scores(highlight, screen),
            [20000.0, 40000.0, 284000.0, -550.0]
        );
        assert_eq!(select_region(Some(highlight), screen), Region::Bottom);
    }

    #[test]
    fn highlight_near_bottom_prefers_top() {
        let screen = Size::new(400.0, 800.0);
        let highlight = Rect::from_origin_size((150.0, 700.0), (100.0, 50.0));
        assert_eq!(select_region(Some(highlight), screen), Region::Top);
    }

    #[test]
    fn highlight_on_right_edge_prefers_left() {
        let screen = Size::new(800.0, 400.0);
        let highlight = Rect::from_origin_size((700.0, 150.0), (50.0, 100.0));
        assert_eq!(select_region(Some(highlight), screen), Region::Left);
    }

    #[test]
    fn right_wins_only_when_everything_else_is_worse() {
        // Highlight pinned to the top-left corner and spanning the full height.
        let screen = Size::new(2000.0, 100.0);
        let highlight = Rect::new(0.0, 0.0, 10.0, 100.0);
        let scores = region_scores(highlight, screen);
        assert_eq!(scores, [0.0, 0.0, 0.0, 1890.0]);
        assert_eq!(select_region(Some(highlight), screen), Region::Right);
    }

    #[test]
    fn ties_go_to_earlier_edge() {
        // Top and bottom both score 100 × 100; left and right are lower.
        let screen = Size::new(100.0, 300.0);
        let highlight = Rect::new(0.0, 100.0, 100.0, 200.0);
        assert_eq!(select_region(Some(highlight), screen), Region::Top);

        // Everything zero: the first edge wins.
        let full = Rect::new(0.0, 0.0, 100.0, 300.0);
        let scores = region_scores(full, screen);
        assert!(scores[..3].iter().all(|s| *s == 0.0));
        assert_eq!(select_region(Some(full), screen), Region::Top);
    }

    #[test]
    fn no_highlight_selects_none() {
        assert_eq!(
            select_region(None, Size::new(400.0, 800.0)),
            Region::None
        );
    }

    #[test]
    fn out_of_bounds_highlight_is_not_clamped() {
        let screen = Size::new(400.0, 800.0);
        let highlight = Rect::new(-50.0, -20.0, 10.0, 30.0);
        let scores = region_scores(highlight, screen);
        assert!(scores[0] < 0.0, "top score should be negative above the surface");
        assert!(scores[1] < 0.0, "left score should be negative left of the surface");
        assert_eq!(select_region(Some(highlight), screen), Region::Bottom);
    }
}
