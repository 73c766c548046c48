// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lay out and render a spotlight, then write the masks as PNG files.
//!
//! This example shows the host side of a spotlight pass:
//! - feed the target frame and surface size into a `Spotlight`,
//! - read the caption and button rectangles from the layout,
//! - render the cover mask at device scale and encode it with `image`,
//! - drive show/tap/dismiss through a `SeenRegistry`.
//!
//! Run:
//! - `RUST_LOG=demo=info,spotlight=trace cargo run -p understory_spotlight_demos --example spotlight_png`

use std::path::PathBuf;

use anyhow::{Context, Result};
use kurbo::{Point, Rect, Size};
use rgb::RGB8;
use tracing_subscriber::EnvFilter;
use understory_spotlight::{
    MemorySeenRegistry, ShapeKind, Spotlight, SpotlightConfig, SpotlightStyle, Target,
};

/// Phone-sized surface in logical points.
const SCREEN: Size = Size::new(390.0, 844.0);
/// What a host would measure for a "Got it" label with padding.
const BUTTON: Size = Size::new(86.0, 36.0);
const SCALE: f64 = 3.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // A search field near the top of the screen.
    let search_field = Rect::new(16.0, 96.0, 374.0, 136.0);
    // A floating action button in the bottom-right corner.
    let fab = Rect::new(310.0, 740.0, 366.0, 796.0);

    let out_dir = std::env::temp_dir();
    render(
        ShapeKind::Rectangle,
        search_field,
        SpotlightStyle::default(),
        out_dir.join("spotlight_rect.png"),
    )?;
    render(
        ShapeKind::Circle,
        fab,
        SpotlightStyle {
            cover_color: RGB8::new(10, 20, 40),
            cover_alpha: 0.85,
            highlight_color: RGB8::new(255, 196, 0),
        },
        out_dir.join("spotlight_circle.png"),
    )?;

    // Single-shot flow: the second `show` is suppressed after a dismiss.
    let mut registry = MemorySeenRegistry::new();
    let mut spotlight = Spotlight::new(SpotlightConfig::default());
    spotlight.set_target(Target::Rect(fab));
    spotlight.set_single_shot_id("intro.compose");
    let layout = spotlight.layout(SCREEN, BUTTON);
    tracing::info!(target: "demo", id = ?spotlight.single_shot_id(), "single_shot_flow");

    println!("show: {:?}", spotlight.show(&registry));
    println!(
        "tap caption: {:?}",
        spotlight.on_tap(Point::new(20.0, 20.0), &layout, &mut registry)
    );
    println!(
        "tap button: {:?}",
        spotlight.on_tap(layout.button.center(), &layout, &mut registry)
    );
    println!("show again: {:?}", spotlight.show(&registry));
    Ok(())
}

fn render(kind: ShapeKind, target: Rect, style: SpotlightStyle, path: PathBuf) -> Result<()> {
    let mut spotlight = Spotlight::new(SpotlightConfig {
        kind,
        style,
        ..SpotlightConfig::default()
    });
    spotlight.set_target(Target::Rect(target));

    let layout = spotlight.layout(SCREEN, BUTTON);
    tracing::info!(
        target: "demo",
        ?kind,
        region = ?layout.region,
        caption = ?layout.caption,
        button = ?layout.button,
        "laid_out"
    );

    let mask = spotlight.render(SCREEN, SCALE)?;
    let image = mask
        .to_rgba_image()
        .context("mask dimensions do not match its pixel data")?;
    image
        .save(&path)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(
        target: "demo",
        width = mask.width(),
        height = mask.height(),
        path = %path.display(),
        "mask_written"
    );
    Ok(())
}
