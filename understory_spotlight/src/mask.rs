// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cover mask compositing.
//!
//! The cover is built in layers, all in the highlight color over an opaque plane
//! of the cover color:
//!
//! - Rectangle: a glow cast outward by the outline of the highlight inflated by
//!   [`GLOW_MARGIN`], then a [`RECT_BORDER_WIDTH`] border on the exact edge, then
//!   the exact rectangle is cleared.
//! - Circle: a ring at twice the radius glowing outward, a plain ring at the
//!   radius (both [`RING_STROKE_WIDTH`] wide), then a disc [`RING_CLEAR_INSET`]
//!   smaller than the radius is cleared. Radii at or below the inset clear nothing.
//!
//! Glows only spread away from the highlight; inside the glowing outline the
//! cover stays plain.
//!
//! Cover opacity is applied last and never reaches into the cleared area.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size};
use rgb::{RGB8, RGBA8};

use crate::raster::{
    disc_coverage, distance_to_outline, glow_falloff, over, rect_coverage, stroke_coverage,
    unit_to_byte,
};
use crate::{
    GLOW_MARGIN, HighlightShape, RECT_BORDER_WIDTH, RING_CLEAR_INSET, RING_STROKE_WIDTH,
    SpotlightError, SpotlightStyle,
};

/// Width of the outline that casts the rectangular glow.
const GLOW_OUTLINE_WIDTH: f64 = 1.0;

/// A rendered cover mask: row-major, straight-alpha RGBA, top-left origin.
///
/// Dimensions are in device pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<RGBA8>,
}

impl PixelBuffer {
    /// Width in device pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in device pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels, row by row.
    pub fn pixels(&self) -> &[RGBA8] {
        &self.pixels
    }

    /// The pixel at `(x, y)`, or `None` outside the buffer.
    pub fn get(&self, x: u32, y: u32) -> Option<RGBA8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels.get(idx).copied()
    }

    /// Pixels flattened to `r, g, b, a` bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| [p.r, p.g, p.b, p.a]).collect()
    }

    /// Copy into an [`image::RgbaImage`] for encoding.
    #[cfg(feature = "image")]
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.to_rgba_bytes())
    }
}

/// What one pixel receives from the highlight layers.
#[derive(Copy, Clone, Debug)]
struct Sample {
    /// Opacity of the highlight color over the cover color.
    highlight: f64,
    /// Fraction of the pixel that is cleared.
    clear: f64,
}

/// Highlight geometry resolved once per pass.
#[derive(Copy, Clone, Debug)]
enum Cutout {
    Rect {
        exact: Rect,
        glow_outline: Rect,
        border_outer: Rect,
        border_inner: Rect,
    },
    Circle {
        center: Point,
        radius: f64,
        clear_radius: f64,
    },
}

impl Cutout {
    fn new(shape: &HighlightShape) -> Self {
        match *shape {
            HighlightShape::Rect(r) => {
                let half = RECT_BORDER_WIDTH / 2.0;
                Self::Rect {
                    exact: r,
                    glow_outline: r.inflate(GLOW_MARGIN, GLOW_MARGIN),
                    border_outer: r.inflate(half, half),
                    border_inner: r.inflate(-half, -half),
                }
            }
            HighlightShape::Circle(c) => Self::Circle {
                center: c.center,
                radius: c.radius,
                clear_radius: (c.radius - RING_CLEAR_INSET).max(0.0),
            },
        }
    }

    fn sample(&self, pt: Point, cell: Rect, px: f64) -> Sample {
        match *self {
            Self::Rect {
                exact,
                glow_outline,
                border_outer,
                border_inner,
            } => {
                let glow = if glow_outline.contains(pt) {
                    0.0
                } else {
                    glow_falloff(
                        distance_to_outline(glow_outline, pt),
                        GLOW_OUTLINE_WIDTH / 2.0,
                    )
                };
                let border = (rect_coverage(border_outer, cell)
                    - rect_coverage(border_inner, cell))
                .max(0.0);
                Sample {
                    highlight: over(glow, border),
                    clear: rect_coverage(exact, cell),
                }
            }
            Self::Circle {
                center,
                radius,
                clear_radius,
            } => {
                let half = RING_STROKE_WIDTH / 2.0;
                let d = pt.distance(center);
                let outer_offset = d - 2.0 * radius;
                let outer = if outer_offset < -half {
                    0.0
                } else {
                    glow_falloff(outer_offset, half)
                };
                let inner = stroke_coverage(d - radius, half, px);
                let clear = if clear_radius > 0.0 {
                    disc_coverage(d, clear_radius, px)
                } else {
                    0.0
                };
                Sample {
                    highlight: over(outer, inner),
                    clear,
                }
            }
        }
    }
}

/// Rasterize the cover for `shape` over a `screen`-sized surface.
///
/// `scale` is the number of device pixels per logical unit; the buffer is
/// `ceil(screen × scale)` pixels in each direction. Identical inputs always
/// produce identical buffers.
///
/// Fails when the shape has non-positive or non-finite dimensions, or when
/// `scale` is not a finite positive number.
pub fn composite(
    shape: &HighlightShape,
    screen: Size,
    style: &SpotlightStyle,
    scale: f64,
) -> Result<PixelBuffer, SpotlightError> {
    if !scale.is_finite() || scale <= 0.0 {
        tracing::debug!(target: "spotlight.mask", scale, "invalid_scale");
        return Err(SpotlightError::InvalidScale { scale });
    }
    shape.validate().inspect_err(|err| {
        tracing::debug!(target: "spotlight.mask", ?shape, %err, "invalid_geometry");
    })?;

    let width = device_extent(screen.width, scale);
    let height = device_extent(screen.height, scale);
    let px = 1.0 / scale;
    let cover_alpha = style.cover_alpha.clamp(0.0, 1.0);
    let cutout = Cutout::new(shape);

    tracing::trace!(
        target: "spotlight.mask",
        kind = ?shape.kind(),
        width,
        height,
        scale,
        cover_alpha,
        "composite"
    );

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        let y0 = f64::from(y) * px;
        for x in 0..width {
            let x0 = f64::from(x) * px;
            let cell = Rect::new(x0, y0, x0 + px, y0 + px);
            let sample = cutout.sample(cell.center(), cell, px);
            pixels.push(shade(style, cover_alpha, sample));
        }
    }

    Ok(PixelBuffer {
        width,
        height,
        pixels,
    })
}

fn shade(style: &SpotlightStyle, cover_alpha: f64, sample: Sample) -> RGBA8 {
    let alpha = unit_to_byte(cover_alpha * (1.0 - sample.clear));
    if alpha == 0 {
        return RGBA8::new(0, 0, 0, 0);
    }
    let RGB8 { r, g, b } = mix(style.cover_color, style.highlight_color, sample.highlight);
    RGBA8::new(r, g, b, alpha)
}

fn mix(below: RGB8, above: RGB8, t: f64) -> RGB8 {
    let channel = |a: u8, b: u8| {
        let (a, b) = (f64::from(a), f64::from(b));
        unit_to_byte((a + (b - a) * t) / 255.0)
    };
    RGB8::new(
        channel(below.r, above.r),
        channel(below.g, above.g),
        channel(below.b, above.b),
    )
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Float-to-int casts saturate; surfaces beyond u32::MAX pixels are not meaningful."
)]
fn device_extent(extent: f64, scale: f64) -> u32 {
    let scaled = (extent * scale).ceil();
    if scaled.is_finite() && scaled > 0.0 {
        scaled as u32
    } else {
        0
    }
}
