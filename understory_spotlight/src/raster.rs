// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-pixel coverage helpers used by the compositor.
//!
//! All inputs are in logical units. `cell` is the footprint of one device pixel
//! and `px` its side length.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

use crate::GLOW_BLUR;

/// Fraction of `cell` covered by `rect`.
///
/// `rect` may be inverted (for example after inflating by a negative amount);
/// inverted rectangles cover nothing.
pub(crate) fn rect_coverage(rect: Rect, cell: Rect) -> f64 {
    let w = (rect.x1.min(cell.x1) - rect.x0.max(cell.x0)).max(0.0);
    let h = (rect.y1.min(cell.y1) - rect.y0.max(cell.y0)).max(0.0);
    let area = cell.area();
    if area > 0.0 {
        (w * h / area).min(1.0)
    } else {
        0.0
    }
}

/// Coverage of a disc of `radius` at a pixel `distance` away from its center.
///
/// One pixel of linear ramp across the edge.
pub(crate) fn disc_coverage(distance: f64, radius: f64, px: f64) -> f64 {
    ((radius - distance) / px + 0.5).clamp(0.0, 1.0)
}

/// Coverage of a stroke of `half_width` at a pixel `offset` away from its centerline.
pub(crate) fn stroke_coverage(offset: f64, half_width: f64, px: f64) -> f64 {
    ((half_width - offset.abs()) / px + 0.5).clamp(0.0, 1.0)
}

/// Intensity of a blurred stroke at `offset` from its centerline.
///
/// Full strength on the stroke, then a quadratic fade that reaches zero
/// [`GLOW_BLUR`] units past the stroke's edge.
pub(crate) fn glow_falloff(offset: f64, half_width: f64) -> f64 {
    let d = offset.abs() - half_width;
    if d <= 0.0 {
        return 1.0;
    }
    let t = (d / GLOW_BLUR).min(1.0);
    let s = 1.0 - t;
    s * s
}

/// Unsigned distance from `pt` to the outline of `rect`.
pub(crate) fn distance_to_outline(rect: Rect, pt: Point) -> f64 {
    let dx = (rect.x0 - pt.x).max(pt.x - rect.x1).max(0.0);
    let dy = (rect.y0 - pt.y).max(pt.y - rect.y1).max(0.0);
    if dx > 0.0 || dy > 0.0 {
        (dx * dx + dy * dy).sqrt()
    } else {
        (pt.x - rect.x0)
            .min(rect.x1 - pt.x)
            .min(pt.y - rect.y0)
            .min(rect.y1 - pt.y)
    }
}

/// Source-over of two layers of the same color.
pub(crate) fn over(below: f64, above: f64) -> f64 {
    above + below * (1.0 - above)
}

/// Map `0.0..=1.0` to a byte, rounding to nearest.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Value is clamped to 0.0..=255.5 before the cast."
)]
pub(crate) fn unit_to_byte(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_coverage_partial_and_inverted() {
        let cell = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert_eq!(rect_coverage(Rect::new(-5.0, -5.0, 5.0, 5.0), cell), 1.0);
        assert_eq!(rect_coverage(Rect::new(0.5, 0.0, 5.0, 5.0), cell), 0.5);
        assert_eq!(rect_coverage(Rect::new(2.0, 2.0, 5.0, 5.0), cell), 0.0);
        // Inverted after a negative inflation.
        assert_eq!(rect_coverage(Rect::new(0.8, 0.8, 0.2, 0.2), cell), 0.0);
    }

    #[test]
    fn disc_and_stroke_ramps() {
        assert_eq!(disc_coverage(0.0, 10.0, 1.0), 1.0);
        assert_eq!(disc_coverage(10.0, 10.0, 1.0), 0.5);
        assert_eq!(disc_coverage(12.0, 10.0, 1.0), 0.0);

        assert_eq!(stroke_coverage(0.0, 1.27, 1.0), 1.0);
        assert_eq!(stroke_coverage(-5.0, 1.27, 1.0), 0.0);
    }

    #[test]
    fn glow_fades_to_zero_past_blur() {
        assert_eq!(glow_falloff(0.0, 1.0), 1.0);
        let mid = glow_falloff(1.0 + GLOW_BLUR / 2.0, 1.0);
        assert!((mid - 0.25).abs() < 1e-12, "half way should be 0.25, got {mid}");
        assert_eq!(glow_falloff(1.0 + GLOW_BLUR, 1.0), 0.0);
        assert_eq!(glow_falloff(-(1.0 + 2.0 * GLOW_BLUR), 1.0), 0.0);
    }

    #[test]
    fn outline_distance_inside_and_outside() {
        let r = Rect::new(0.0, 0.0, 10.0, 20.0);
        assert_eq!(distance_to_outline(r, Point::new(5.0, 5.0)), 5.0);
        assert_eq!(distance_to_outline(r, Point::new(2.0, 10.0)), 2.0);
        assert_eq!(distance_to_outline(r, Point::new(13.0, 24.0)), 5.0);
        assert_eq!(distance_to_outline(r, Point::new(-1.0, 10.0)), 1.0);
    }

    #[test]
    fn bytes_round_to_nearest() {
        assert_eq!(unit_to_byte(0.0), 0);
        assert_eq!(unit_to_byte(1.0), 255);
        assert_eq!(unit_to_byte(0.75), 191);
        assert_eq!(unit_to_byte(2.0), 255);
        assert_eq!(unit_to_byte(-1.0), 0);
    }
}
