// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Selection tracking.
//!
//! Turns pointer drags into a [`Rect`] in percent-of-viewport coordinates.
//! The tracker holds the drag anchor between pointer-down and pointer-up and
//! the pending region until something else clears it. Gating on zoom state
//! is done by the session before it calls in here.

use crate::models::region::{Point, Rect, ViewportBounds};
use crate::util::geometry;

/// Drag anchor and pending region.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    /// Where the current drag started (only while the pointer is down)
    anchor: Option<Point>,
    /// Current selection candidate
    region: Option<Rect>,
    /// Clamp pointer positions into the viewport
    clamp: bool,
}

impl SelectionTracker {
    pub fn new(clamp: bool) -> Self {
        Self {
            anchor: None,
            region: None,
            clamp,
        }
    }

    fn locate(&self, pointer: (f64, f64), viewport: &ViewportBounds) -> Point {
        let point = geometry::to_percent(pointer.0, pointer.1, viewport);
        if self.clamp {
            geometry::clamp_percent(point)
        } else {
            point
        }
    }

    /// Start a drag at the pointer, seeding a zero-sized region there.
    pub fn begin(&mut self, pointer: (f64, f64), viewport: &ViewportBounds) -> Rect {
        let point = self.locate(pointer, viewport);
        let region = Rect::at(point);
        self.anchor = Some(point);
        self.region = Some(region);
        region
    }

    /// Stretch the region from the anchor to the pointer.
    ///
    /// Without an active drag this leaves the region untouched and returns it.
    pub fn update(&mut self, pointer: (f64, f64), viewport: &ViewportBounds) -> Option<Rect> {
        if let Some(anchor) = self.anchor {
            let point = self.locate(pointer, viewport);
            self.region = Some(geometry::span(anchor, point));
        }
        self.region
    }

    /// Release the drag. The region stays as the selection candidate.
    ///
    /// Returns `true` if a drag was actually active.
    pub fn end(&mut self) -> bool {
        self.anchor.take().is_some()
    }

    /// Replace the region wholesale, as a completed drag would.
    pub fn seed(&mut self, region: Rect) {
        self.anchor = None;
        self.region = Some(region);
    }

    /// Drop both the anchor and the region.
    pub fn clear(&mut self) {
        self.anchor = None;
        self.region = None;
    }

    pub fn region(&self) -> Option<Rect> {
        self.region
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.0001;

    fn viewport() -> ViewportBounds {
        ViewportBounds::new(0.0, 0.0, 1000.0, 500.0)
    }

    fn approx(a: Rect, b: Rect) -> bool {
        (a.x - b.x).abs() < EPSILON
            && (a.y - b.y).abs() < EPSILON
            && (a.w - b.w).abs() < EPSILON
            && (a.h - b.h).abs() < EPSILON
    }

    #[test]
    fn test_begin_seeds_zero_region() {
        let mut tracker = SelectionTracker::new(true);
        let region = tracker.begin((250.0, 100.0), &viewport());

        assert!(approx(region, Rect::new(25.0, 20.0, 0.0, 0.0)));
        assert!(tracker.is_dragging());
        assert_eq!(tracker.region(), Some(region));
    }

    #[test]
    fn test_drag_in_every_direction() {
        let corners = [(200.0, 100.0), (600.0, 100.0), (200.0, 400.0), (600.0, 400.0)];
        let expected = Rect::new(20.0, 20.0, 40.0, 60.0);

        for &start in &corners {
            let end = (800.0 - start.0, 500.0 - start.1);
            let mut tracker = SelectionTracker::new(true);
            tracker.begin(start, &viewport());
            let region = tracker.update(end, &viewport()).unwrap();
            assert!(approx(region, expected), "drag from {:?}: {:?}", start, region);
        }
    }

    #[test]
    fn test_update_without_anchor_is_noop() {
        let mut tracker = SelectionTracker::new(true);
        assert_eq!(tracker.update((10.0, 10.0), &viewport()), None);

        tracker.seed(Rect::new(1.0, 2.0, 3.0, 4.0));
        let region = tracker.update((900.0, 400.0), &viewport());
        assert_eq!(region, Some(Rect::new(1.0, 2.0, 3.0, 4.0)));
    }

    #[test]
    fn test_end_keeps_region() {
        let mut tracker = SelectionTracker::new(true);
        tracker.begin((100.0, 100.0), &viewport());
        tracker.update((300.0, 200.0), &viewport());

        assert!(tracker.end());
        assert!(!tracker.is_dragging());
        assert!(approx(tracker.region().unwrap(), Rect::new(10.0, 20.0, 20.0, 20.0)));

        // A second release is harmless
        assert!(!tracker.end());
    }

    #[test]
    fn test_clamp_policy() {
        let mut clamped = SelectionTracker::new(true);
        clamped.begin((900.0, 400.0), &viewport());
        let region = clamped.update((1200.0, 600.0), &viewport()).unwrap();
        assert!(approx(region, Rect::new(90.0, 80.0, 10.0, 20.0)));

        let mut permissive = SelectionTracker::new(false);
        permissive.begin((900.0, 400.0), &viewport());
        let region = permissive.update((1200.0, 600.0), &viewport()).unwrap();
        assert!(approx(region, Rect::new(90.0, 80.0, 30.0, 40.0)));
    }
}
