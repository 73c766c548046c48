// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_spotlight --heading-base-level=0

//! Understory Spotlight: geometry and mask compositing for "spotlight" overlays.
//!
//! A spotlight overlay dims the whole surface, cuts a hole around one target
//! element, and shows a caption panel plus a dismiss button next to it. It is the
//! classic first-run hint used to point a new user at a control.
//!
//! This crate contains the parts of such an overlay that do not depend on a UI
//! toolkit. Everything is expressed in plain value types ([`kurbo`] geometry and
//! [`rgb`] colors) in one caller-chosen coordinate space.
//!
//! - [`select_region`]: picks which edge of the surface ([`Region`]) has the most
//!   open space around the highlight, and therefore hosts the caption.
//! - [`place_caption`] / [`place_button`]: compute the caption panel and the dismiss
//!   button rectangles.
//! - [`layout`]: runs the three steps above as one pass and returns a
//!   [`SpotlightLayout`].
//! - [`composite`]: rasterizes the cover into a [`PixelBuffer`]: an opaque plane in
//!   the cover color with a glowing outline and a transparent cut-out over the
//!   [`HighlightShape`].
//! - [`Spotlight`]: a small controller that keeps the current [`Target`] and
//!   [`SpotlightConfig`], and turns show, dismiss and tap input into
//!   [`SpotlightEvent`]s, honoring single-shot ids through a [`SeenRegistry`].
//!
//! ## Not a widget
//!
//! This crate does not attach anything to a view tree, animate, recognize gestures,
//! measure text, or persist state. Host frameworks are responsible for:
//!
//! - Converting the target element's frame into the same space as the surface
//!   bounds before calling in.
//! - Measuring the dismiss button label and passing its size to [`layout`].
//! - Displaying the returned [`PixelBuffer`] (fading it in and out as they like) and
//!   laying out title and detail text inside the caption rectangle.
//! - Storing which single-shot ids have been seen, via their own [`SeenRegistry`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_spotlight::{Region, place_button, place_caption, select_region};
//!
//! let screen = Size::new(400.0, 800.0);
//! let highlight = Rect::new(50.0, 50.0, 150.0, 90.0);
//!
//! // Most of the open space is below the highlight.
//! let region = select_region(Some(highlight), screen);
//! assert_eq!(region, Region::Bottom);
//!
//! let caption = place_caption(region, Some(highlight), screen);
//! assert_eq!(caption, Rect::new(0.0, 90.0, 400.0, 800.0));
//!
//! // The dismiss button sits 8 units in from the bottom-right corner.
//! let button = place_button(Size::new(80.0, 30.0), screen);
//! assert_eq!(button, Rect::new(312.0, 762.0, 392.0, 792.0));
//! ```
//!
//! ## Rendering
//!
//! ```rust
//! use kurbo::{Circle, Size};
//! use understory_spotlight::{HighlightShape, SpotlightStyle, composite};
//!
//! let shape = HighlightShape::Circle(Circle::new((100.0, 100.0), 35.0));
//! let style = SpotlightStyle::default();
//! let mask = composite(&shape, Size::new(200.0, 300.0), &style, 2.0).unwrap();
//!
//! // Buffers are sized in device pixels.
//! assert_eq!((mask.width(), mask.height()), (400, 600));
//! // The middle of the cut-out is fully transparent.
//! assert_eq!(mask.get(200, 200).unwrap().a, 0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `serde`: derives `Serialize`/`Deserialize` for configuration and geometry types.
//! - `image`: adds [`PixelBuffer::to_rgba_image`] for encoding masks with the `image` crate.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod hit;
mod layout;
mod mask;
mod placement;
mod raster;
mod region;
mod seen;
mod spotlight;
mod types;

pub use error::SpotlightError;
pub use hit::{SpotlightHit, hit_test};
pub use layout::{SpotlightLayout, layout};
pub use mask::{PixelBuffer, composite};
pub use placement::{place_button, place_caption};
pub use region::{region_scores, select_region};
pub use seen::{MemorySeenRegistry, SeenRegistry};
pub use spotlight::{Spotlight, SpotlightEvent};
pub use types::{
    BUTTON_INSET, DEFAULT_RADIUS, GLOW_BLUR, GLOW_MARGIN, HighlightShape, RECT_BORDER_WIDTH,
    RING_CLEAR_INSET, RING_STROKE_WIDTH, Region, ShapeKind, SpotlightConfig, SpotlightStyle,
    Target,
};
