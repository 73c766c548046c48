// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caption panel and dismiss button placement.

use kurbo::{Point, Rect, Size};

use crate::{BUTTON_INSET, Region};

/// Rectangle of the caption panel for `region`.
///
/// | Region | Caption |
/// |---|---|
/// | Top | full width, from the surface top down to the highlight |
/// | Bottom | full width, from the highlight down to the surface bottom |
/// | Left | full height, `highlight.y0` wide from the surface's left edge |
/// | Right | full height, from the highlight to the surface's right edge |
/// | None | the whole surface |
///
/// The Left panel takes its width from the highlight's top coordinate rather
/// than its left one. Hosts tuned their caption text against that width, so it
/// is preserved.
///
/// With no highlight the whole surface is returned whatever `region` says.
pub fn place_caption(region: Region, highlight: Option<Rect>, screen: Size) -> Rect {
    let full = screen.to_rect();
    let Some(h) = highlight else {
        return full;
    };
    match region {
        Region::Top => Rect::new(0.0, 0.0, screen.width, h.y0),
        Region::Bottom => Rect::new(0.0, h.y1, screen.width, screen.height),
        Region::Left => Rect::new(0.0, 0.0, h.y0, screen.height),
        Region::Right => Rect::new(h.x1, 0.0, screen.width, screen.height),
        Region::None => full,
    }
}

/// Rectangle of the dismiss button, [`BUTTON_INSET`] in from the bottom-right
/// corner of the surface.
///
/// `button_size` comes from the host's text measurement.
pub fn place_button(button_size: Size, screen: Size) -> Rect {
    let origin = Point::new(
        screen.width - BUTTON_INSET - button_size.width,
        screen.height - BUTTON_INSET - button_size.height,
    );
    Rect::from_origin_size(origin, button_size)
}
