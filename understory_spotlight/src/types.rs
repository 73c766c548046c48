// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public value types: regions, highlight shapes, targets, style and configuration.

use kurbo::{Circle, Rect, Shape};
use rgb::RGB8;

use crate::SpotlightError;

/// Inflation of the glow outline around a rectangular highlight, in logical units.
pub const GLOW_MARGIN: f64 = 15.0;

/// Blur radius of the highlight glow, in logical units.
///
/// The glow fades out completely at this distance from the stroke that casts it.
pub const GLOW_BLUR: f64 = 30.0;

/// Width of the border stroked on the exact edge of a rectangular highlight.
pub const RECT_BORDER_WIDTH: f64 = 3.0;

/// Stroke width of both rings drawn around a circular highlight.
pub const RING_STROKE_WIDTH: f64 = 2.54;

/// How far inside the inner ring's radius the circular cut-out stops.
pub const RING_CLEAR_INSET: f64 = 0.54;

/// Distance between the dismiss button and the bottom-right corner of the surface.
pub const BUTTON_INSET: f64 = 8.0;

/// Radius used for circular highlights when the target is a rectangle.
pub const DEFAULT_RADIUS: f64 = 35.0;

/// Edge of the surface that hosts the caption panel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Region {
    /// Above the highlight.
    Top,
    /// Left of the highlight.
    Left,
    /// Below the highlight.
    Bottom,
    /// Right of the highlight.
    Right,
    /// No highlight is set; the caption may use the whole surface.
    None,
}

impl Region {
    /// The four edges in tie-break order.
    pub const EDGES: [Self; 4] = [Self::Top, Self::Left, Self::Bottom, Self::Right];
}

/// Which outline is drawn around the target.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeKind {
    /// Two concentric rings with a circular cut-out.
    #[default]
    Circle,
    /// A glowing frame with a rectangular cut-out.
    Rectangle,
}

/// What the host asked the spotlight to point at.
///
/// Coordinates must already be in the surface's space; converting a view's frame
/// is up to the host.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    /// The frame of an element.
    Rect(Rect),
    /// An explicit circle.
    Circle(Circle),
}

impl Target {
    /// The rectangle used for region selection and caption placement.
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect(r) => *r,
            Self::Circle(c) => c.bounding_box(),
        }
    }
}

/// Shape that is cut out of the cover.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HighlightShape {
    /// Rectangular cut-out.
    Rect(Rect),
    /// Circular cut-out.
    Circle(Circle),
}

impl HighlightShape {
    /// Resolve a [`Target`] into the shape drawn for `kind`.
    ///
    /// A rectangle drawn as a circle is centred on the rectangle's centroid with the
    /// given `radius`. A circle drawn as a rectangle uses its bounding box.
    pub fn from_target(kind: ShapeKind, target: Target, radius: f64) -> Self {
        match (kind, target) {
            (ShapeKind::Circle, Target::Rect(r)) => Self::Circle(Circle::new(r.center(), radius)),
            (ShapeKind::Circle, Target::Circle(c)) => Self::Circle(c),
            (ShapeKind::Rectangle, Target::Rect(r)) => Self::Rect(r),
            (ShapeKind::Rectangle, Target::Circle(c)) => Self::Rect(c.bounding_box()),
        }
    }

    /// The kind of outline this shape is drawn with.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Rect(_) => ShapeKind::Rectangle,
            Self::Circle(_) => ShapeKind::Circle,
        }
    }

    /// Axis-aligned bounds of the cut-out.
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect(r) => *r,
            Self::Circle(c) => c.bounding_box(),
        }
    }

    /// Reject shapes with non-positive or non-finite dimensions.
    pub fn validate(&self) -> Result<(), SpotlightError> {
        match self {
            Self::Rect(r) => {
                let (width, height) = (r.width(), r.height());
                let ok = r.origin().is_finite()
                    && width.is_finite()
                    && height.is_finite()
                    && width > 0.0
                    && height > 0.0;
                if ok {
                    Ok(())
                } else {
                    Err(SpotlightError::InvalidGeometry { width, height })
                }
            }
            Self::Circle(c) => {
                if c.center.is_finite() && c.radius.is_finite() && c.radius > 0.0 {
                    Ok(())
                } else {
                    Err(SpotlightError::InvalidRadius { radius: c.radius })
                }
            }
        }
    }
}

/// Colors of one render pass.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpotlightStyle {
    /// Color of the dimming plane.
    pub cover_color: RGB8,
    /// Opacity applied to the whole cover, `0.0..=1.0`.
    ///
    /// Values outside that range are clamped when the mask is composited. The
    /// cut-out stays fully transparent whatever this is.
    pub cover_alpha: f64,
    /// Color of the glow, rings and border.
    pub highlight_color: RGB8,
}

impl Default for SpotlightStyle {
    fn default() -> Self {
        Self {
            cover_color: RGB8::new(25, 25, 25),
            cover_alpha: 0.75,
            highlight_color: RGB8::new(44, 159, 204),
        }
    }
}

/// Per-spotlight configuration held by [`crate::Spotlight`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpotlightConfig {
    /// Outline drawn around the target.
    pub kind: ShapeKind,
    /// Radius of the circle drawn around a rectangular target.
    pub radius: f64,
    /// Colors used when rendering.
    pub style: SpotlightStyle,
    /// Dismiss on a tap anywhere, not only on the dismiss button.
    pub dismiss_on_tap_anywhere: bool,
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Circle,
            radius: DEFAULT_RADIUS,
            style: SpotlightStyle::default(),
            dismiss_on_tap_anywhere: false,
        }
    }
}
