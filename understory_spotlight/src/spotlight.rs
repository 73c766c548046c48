// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spotlight controller: target, configuration and visibility.
//!
//! The controller holds no references into the host's view tree. The host feeds
//! it the target frame, surface size and input, and acts on the returned values:
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_spotlight::{
//!     MemorySeenRegistry, Spotlight, SpotlightConfig, SpotlightEvent, Target,
//! };
//!
//! let mut registry = MemorySeenRegistry::new();
//! let mut spotlight = Spotlight::new(SpotlightConfig::default());
//! spotlight.set_single_shot_id("intro.search");
//! spotlight.set_target(Target::Rect(Rect::new(50.0, 50.0, 150.0, 90.0)));
//!
//! let screen = Size::new(400.0, 800.0);
//! let layout = spotlight.layout(screen, Size::new(80.0, 30.0));
//! let mask = spotlight.render(screen, 2.0).unwrap();
//! assert_eq!(mask.width(), 800);
//!
//! assert_eq!(spotlight.show(&registry), Some(SpotlightEvent::Shown));
//! // Tapping the dismiss button closes it and records the id.
//! let tap = layout.button.center();
//! assert_eq!(
//!     spotlight.on_tap(tap, &layout, &mut registry),
//!     Some(SpotlightEvent::Dismissed { programmatic: false })
//! );
//! // Single-shot: it will not show again.
//! assert_eq!(spotlight.show(&registry), None);
//! ```

use alloc::string::String;

use kurbo::{Point, Rect, Size};

use crate::{
    HighlightShape, PixelBuffer, SeenRegistry, SpotlightConfig, SpotlightError, SpotlightHit,
    SpotlightLayout, Target, composite, hit_test, layout,
};

/// Notification for the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpotlightEvent {
    /// The spotlight became visible.
    Shown,
    /// The spotlight was dismissed.
    Dismissed {
        /// `true` when the host dismissed it, `false` when the user did.
        programmatic: bool,
    },
}

/// State of one spotlight overlay.
#[derive(Clone, Debug, Default)]
pub struct Spotlight {
    config: SpotlightConfig,
    target: Option<Target>,
    single_shot_id: Option<String>,
    visible: bool,
}

impl Spotlight {
    /// Create a hidden spotlight with no target.
    pub fn new(config: SpotlightConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &SpotlightConfig {
        &self.config
    }

    /// Mutable configuration; changes apply from the next layout or render pass.
    pub fn config_mut(&mut self) -> &mut SpotlightConfig {
        &mut self.config
    }

    /// Point the spotlight at `target`.
    pub fn set_target(&mut self, target: Target) {
        self.target = Some(target);
    }

    /// Remove the target.
    pub fn clear_target(&mut self) {
        self.target = None;
    }

    /// Current target, if any.
    pub fn target(&self) -> Option<Target> {
        self.target
    }

    /// Rectangle used for region selection and caption placement.
    pub fn highlight_rect(&self) -> Option<Rect> {
        self.target.map(|t| t.bounds())
    }

    /// Shape cut out of the cover for the current target and configuration.
    pub fn highlight_shape(&self) -> Option<HighlightShape> {
        self.target
            .map(|t| HighlightShape::from_target(self.config.kind, t, self.config.radius))
    }

    /// Show this spotlight at most once per `id`.
    pub fn set_single_shot_id(&mut self, id: impl Into<String>) {
        self.single_shot_id = Some(id.into());
    }

    /// Single-shot id, if any.
    pub fn single_shot_id(&self) -> Option<&str> {
        self.single_shot_id.as_deref()
    }

    /// Whether the spotlight is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Lay out caption and button for the current target.
    ///
    /// Without a target the caption spans the whole surface.
    pub fn layout(&self, screen: Size, button_size: Size) -> SpotlightLayout {
        layout(self.highlight_rect(), button_size, screen)
    }

    /// Render the cover mask for the current target.
    pub fn render(&self, screen: Size, scale: f64) -> Result<PixelBuffer, SpotlightError> {
        let shape = self
            .highlight_shape()
            .ok_or(SpotlightError::NoHighlightSet)?;
        composite(&shape, screen, &self.config.style, scale)
    }

    /// Make the spotlight visible.
    ///
    /// Returns `None` when it is already visible, or when its single-shot id was
    /// seen before.
    pub fn show<R: SeenRegistry + ?Sized>(&mut self, registry: &R) -> Option<SpotlightEvent> {
        if self.visible {
            return None;
        }
        if let Some(id) = self.single_shot_id.as_deref()
            && registry.has_seen(id)
        {
            tracing::debug!(target: "spotlight.state", id, "show_skipped_seen");
            return None;
        }
        self.visible = true;
        tracing::debug!(target: "spotlight.state", id = self.single_shot_id.as_deref(), "shown");
        Some(SpotlightEvent::Shown)
    }

    /// Hide the spotlight and record its single-shot id.
    ///
    /// Returns `None` when it was not visible.
    pub fn dismiss<R: SeenRegistry + ?Sized>(
        &mut self,
        programmatic: bool,
        registry: &mut R,
    ) -> Option<SpotlightEvent> {
        if !self.visible {
            return None;
        }
        self.visible = false;
        if let Some(id) = self.single_shot_id.as_deref() {
            registry.mark_seen(id);
        }
        tracing::debug!(
            target: "spotlight.state",
            id = self.single_shot_id.as_deref(),
            programmatic,
            "dismissed"
        );
        Some(SpotlightEvent::Dismissed { programmatic })
    }

    /// Handle a tap at `pt` against `layout`.
    ///
    /// A tap on the dismiss button dismisses the spotlight; so does a tap anywhere
    /// when [`SpotlightConfig::dismiss_on_tap_anywhere`] is set.
    pub fn on_tap<R: SeenRegistry + ?Sized>(
        &mut self,
        pt: Point,
        layout: &SpotlightLayout,
        registry: &mut R,
    ) -> Option<SpotlightEvent> {
        if !self.visible {
            return None;
        }
        let hit = hit_test(layout, pt);
        tracing::trace!(target: "spotlight.state", ?pt, ?hit, "tap");
        if hit == SpotlightHit::Button || self.config.dismiss_on_tap_anywhere {
            self.dismiss(false, registry)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemorySeenRegistry, Region, ShapeKind};
    use kurbo::Circle;

    const SCREEN: Size = Size::new(400.0, 800.0);
    const BUTTON: Size = Size::new(80.0, 30.0);

    fn targeted(kind: ShapeKind) -> Spotlight {
        let mut s = Spotlight::new(SpotlightConfig {
            kind,
            ..SpotlightConfig::default()
        });
        s.set_target(Target::Rect(Rect::new(50.0, 50.0, 150.0, 90.0)));
        s
    }

    #[test]
    fn render_without_target_fails() {
        let s = Spotlight::new(SpotlightConfig::default());
        assert_eq!(s.render(SCREEN, 1.0), Err(SpotlightError::NoHighlightSet));
        let out = s.layout(SCREEN, BUTTON);
        assert_eq!(out.region, Region::None);
        assert_eq!(out.caption, SCREEN.to_rect());
    }

    #[test]
    fn circle_kind_centres_on_target() {
        let s = targeted(ShapeKind::Circle);
        assert_eq!(
            s.highlight_shape(),
            Some(HighlightShape::Circle(Circle::new((100.0, 70.0), 35.0)))
        );
        let mask = s.render(SCREEN, 1.0).expect("valid target");
        assert_eq!(mask.get(100, 70).expect("inside").a, 0);
        // Region selection uses the target frame, not the circle.
        assert_eq!(s.layout(SCREEN, BUTTON).region, Region::Bottom);
    }

    #[test]
    fn rectangle_kind_uses_target_frame() {
        let s = targeted(ShapeKind::Rectangle);
        assert_eq!(
            s.highlight_shape(),
            Some(HighlightShape::Rect(Rect::new(50.0, 50.0, 150.0, 90.0)))
        );
        let mask = s.render(SCREEN, 1.0).expect("valid target");
        assert_eq!(mask.get(60, 55).expect("inside").a, 0);
    }

    #[test]
    fn zero_sized_target_is_rejected_on_render() {
        let mut s = Spotlight::new(SpotlightConfig {
            kind: ShapeKind::Rectangle,
            ..SpotlightConfig::default()
        });
        s.set_target(Target::Rect(Rect::new(10.0, 10.0, 10.0, 10.0)));
        assert!(matches!(
            s.render(SCREEN, 1.0),
            Err(SpotlightError::InvalidGeometry { .. })
        ));
        s.clear_target();
        assert_eq!(s.target(), None);
    }

    #[test]
    fn show_and_dismiss_emit_events_once() {
        let mut reg = MemorySeenRegistry::new();
        let mut s = targeted(ShapeKind::Circle);
        assert_eq!(s.dismiss(true, &mut reg), None);
        assert_eq!(s.show(&reg), Some(SpotlightEvent::Shown));
        assert_eq!(s.show(&reg), None);
        assert!(s.is_visible());
        assert_eq!(
            s.dismiss(true, &mut reg),
            Some(SpotlightEvent::Dismissed { programmatic: true })
        );
        assert!(!s.is_visible());
        // Without a single-shot id it can show again and nothing is recorded.
        assert!(reg.is_empty());
        assert_eq!(s.show(&reg), Some(SpotlightEvent::Shown));
    }

    #[test]
    fn single_shot_id_blocks_second_show() {
        let mut reg = MemorySeenRegistry::new();
        let mut s = targeted(ShapeKind::Circle);
        s.set_single_shot_id("intro.search");
        assert_eq!(s.single_shot_id(), Some("intro.search"));
        assert_eq!(s.show(&reg), Some(SpotlightEvent::Shown));
        s.dismiss(false, &mut reg);
        assert!(reg.has_seen("intro.search"));
        assert_eq!(s.show(&reg), None);

        reg.forget("intro.search");
        assert_eq!(s.show(&reg), Some(SpotlightEvent::Shown));
    }

    #[test]
    fn taps_dismiss_only_on_button_by_default() {
        let mut reg = MemorySeenRegistry::new();
        let mut s = targeted(ShapeKind::Circle);
        let out = s.layout(SCREEN, BUTTON);
        s.show(&reg);

        assert_eq!(s.on_tap(Point::new(100.0, 400.0), &out, &mut reg), None);
        assert_eq!(s.on_tap(Point::new(100.0, 70.0), &out, &mut reg), None);
        assert_eq!(
            s.on_tap(out.button.center(), &out, &mut reg),
            Some(SpotlightEvent::Dismissed {
                programmatic: false
            })
        );
        // Hidden spotlights ignore taps.
        assert_eq!(s.on_tap(out.button.center(), &out, &mut reg), None);
    }

    #[test]
    fn tap_anywhere_dismisses_when_configured() {
        let mut reg = MemorySeenRegistry::new();
        let mut s = targeted(ShapeKind::Circle);
        s.config_mut().dismiss_on_tap_anywhere = true;
        let out = s.layout(SCREEN, BUTTON);
        s.show(&reg);
        assert_eq!(
            s.on_tap(Point::new(10.0, 10.0), &out, &mut reg),
            Some(SpotlightEvent::Dismissed {
                programmatic: false
            })
        );
    }
}
