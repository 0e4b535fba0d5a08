// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides utilities for converting screen coordinates into
//! percent-of-viewport coordinates and building drag rectangles from them.

use crate::models::region::{Point, Rect, ViewportBounds};

/// Convert a screen position to percent-of-viewport coordinates.
///
/// The result is not clamped; positions outside the viewport map outside
/// `0..=100`.
pub fn to_percent(screen_x: f64, screen_y: f64, viewport: &ViewportBounds) -> Point {
    Point {
        x: (screen_x - viewport.left) / viewport.width * 100.0,
        y: (screen_y - viewport.top) / viewport.height * 100.0,
    }
}

/// Clamp a point into the viewport (`0..=100` on both axes).
pub fn clamp_percent(point: Point) -> Point {
    Point {
        x: point.x.clamp(0.0, 100.0),
        y: point.y.clamp(0.0, 100.0),
    }
}

/// Rectangle spanned by an anchor and the current pointer, whichever corner
/// the drag started from.
pub fn span(anchor: Point, pointer: Point) -> Rect {
    let dx = pointer.x - anchor.x;
    let dy = pointer.y - anchor.y;
    Rect {
        x: if dx > 0.0 { anchor.x } else { pointer.x },
        y: if dy > 0.0 { anchor.y } else { pointer.y },
        w: dx.abs(),
        h: dy.abs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.0001;

    #[test]
    fn test_percent_with_offset_viewport() {
        let viewport = ViewportBounds::new(100.0, 50.0, 1920.0, 1080.0);

        let percent = to_percent(1060.0, 590.0, &viewport);
        assert!((percent.x - 50.0).abs() < EPSILON);
        assert!((percent.y - 50.0).abs() < EPSILON);
    }

    #[test]
    fn test_percent_corners() {
        let viewport = ViewportBounds::new(0.0, 0.0, 1920.0, 1080.0);

        let tl = to_percent(0.0, 0.0, &viewport);
        assert_eq!(tl, Point::new(0.0, 0.0));

        let br = to_percent(1920.0, 1080.0, &viewport);
        assert_eq!(br, Point::new(100.0, 100.0));

        // Outside the viewport is preserved until clamped
        let outside = to_percent(-192.0, 1188.0, &viewport);
        assert!((outside.x + 10.0).abs() < EPSILON);
        assert!((outside.y - 110.0).abs() < EPSILON);
        assert_eq!(clamp_percent(outside), Point::new(0.0, 100.0));
    }

    #[test]
    fn test_span_is_direction_invariant() {
        let a = Point::new(20.0, 30.0);
        let b = Point::new(45.0, 70.0);
        let expected = Rect::new(20.0, 30.0, 25.0, 40.0);

        // Down-right, up-left, and the two mixed diagonals
        assert_eq!(span(a, b), expected);
        assert_eq!(span(b, a), expected);
        let c = Point::new(20.0, 70.0);
        let d = Point::new(45.0, 30.0);
        assert_eq!(span(c, d), expected);
        assert_eq!(span(d, c), expected);
    }

    #[test]
    fn test_span_degenerate() {
        let a = Point::new(10.0, 10.0);
        assert_eq!(span(a, a), Rect::new(10.0, 10.0, 0.0, 0.0));
    }
}
