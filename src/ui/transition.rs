// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Zoom transition animation.
//!
//! Animates the session's transform descriptor over its duration and reports
//! when the animation has finished. It keeps reporting `finished` on every
//! frame until the session leaves the zooming state, so the session sees the
//! completion signal possibly more than once.

use crate::models::region::Point;
use crate::viewer::easing::EASE_OUT_EMPHASIZED;
use crate::viewer::sequencer::TransformDescriptor;

/// Animated state for one repaint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    /// Transform origin in percent of the viewport
    pub origin: Point,
    pub scale: f64,
    pub finished: bool,
}

#[derive(Debug, Clone, Copy)]
struct Active {
    started_at: f64,
    transform: TransformDescriptor,
}

#[derive(Debug, Default)]
pub struct TransitionDriver {
    active: Option<Active>,
}

impl TransitionDriver {
    /// Follow the session: start animating a new transform, stop when there is none.
    pub fn sync(&mut self, transform: Option<TransformDescriptor>, now: f64) {
        match transform {
            Some(transform) => {
                let restart = self.active.map_or(true, |a| a.transform != transform);
                if restart {
                    self.active = Some(Active {
                        started_at: now,
                        transform,
                    });
                }
            }
            None => self.active = None,
        }
    }

    /// Animation state at time `now` (seconds).
    pub fn frame(&self, now: f64) -> Option<TransitionFrame> {
        let active = self.active?;
        let duration = active.transform.duration_ms as f64 / 1000.0;
        let linear = if duration > 0.0 {
            ((now - active.started_at) / duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        Some(TransitionFrame {
            origin: active.transform.origin(),
            scale: active.transform.scale_at(EASE_OUT_EMPHASIZED.ease(linear)),
            finished: linear >= 1.0,
        })
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::region::Rect;

    fn transform() -> TransformDescriptor {
        TransformDescriptor::for_region(&Rect::new(30.0, 30.0, 40.0, 20.0), 2000)
    }

    #[test]
    fn test_idle_has_no_frame() {
        let driver = TransitionDriver::default();
        assert_eq!(driver.frame(0.0), None);
    }

    #[test]
    fn test_progress_over_duration() {
        let mut driver = TransitionDriver::default();
        driver.sync(Some(transform()), 10.0);

        let start = driver.frame(10.0).unwrap();
        assert_eq!(start.scale, 1.0);
        assert!(!start.finished);
        assert_eq!(start.origin, Point::new(50.0, 40.0));

        let middle = driver.frame(11.0).unwrap();
        assert!(middle.scale > 1.0 && middle.scale < 2.5);
        assert!(!middle.finished);

        let end = driver.frame(12.0).unwrap();
        assert!((end.scale - 2.5).abs() < 1e-9);
        assert!(end.finished);

        // Keeps reporting finished until the session moves on
        assert!(driver.frame(13.0).unwrap().finished);
    }

    #[test]
    fn test_sync_same_transform_does_not_restart() {
        let mut driver = TransitionDriver::default();
        driver.sync(Some(transform()), 0.0);
        driver.sync(Some(transform()), 1.5);
        assert!(driver.frame(2.0).unwrap().finished);
    }

    #[test]
    fn test_sync_none_stops() {
        let mut driver = TransitionDriver::default();
        driver.sync(Some(transform()), 0.0);
        driver.sync(None, 0.5);
        assert!(!driver.is_active());
        assert_eq!(driver.frame(1.0), None);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut driver = TransitionDriver::default();
        let t = TransformDescriptor::for_region(&Rect::new(0.0, 0.0, 50.0, 50.0), 0);
        driver.sync(Some(t), 3.0);
        let frame = driver.frame(3.0).unwrap();
        assert!(frame.finished);
        assert!((frame.scale - 2.0).abs() < 1e-9);
    }
}
