// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Zoom sequencing.
//!
//! The confirm -> animate -> advance cycle. The sequencer owns no timer: the
//! presentation layer runs the animation and reports completion, which may
//! arrive more than once per zoom.

use super::error::Rejected;
use crate::models::region::{Point, Rect};

/// Scale and origin that bring a region to fill the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformDescriptor {
    /// Transform origin in percent of the viewport
    pub origin_x: f64,
    pub origin_y: f64,
    /// Final scale factor, derived from the region width only
    pub scale: f64,
    pub duration_ms: u64,
}

impl TransformDescriptor {
    /// Transform for a region. The caller guarantees `region.w > 0`.
    pub fn for_region(region: &Rect, duration_ms: u64) -> Self {
        let origin = region.center();
        Self {
            origin_x: origin.x,
            origin_y: origin.y,
            scale: 100.0 / region.w,
            duration_ms,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.origin_x, self.origin_y)
    }

    /// Scale at an eased progress value in `0..=1`.
    pub fn scale_at(&self, progress: f64) -> f64 {
        1.0 + (self.scale - 1.0) * progress.clamp(0.0, 1.0)
    }
}

/// Where the sequencer is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ZoomPhase {
    #[default]
    Idle,
    Zooming { transform: TransformDescriptor },
}

/// Outcome of a completion signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The zoom finished and the frame should advance
    Advanced,
    /// No zoom was in flight; the signal was a duplicate
    Ignored,
}

/// The zoom state machine.
#[derive(Debug, Clone)]
pub struct ZoomSequencer {
    phase: ZoomPhase,
    duration_ms: u64,
}

impl ZoomSequencer {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            phase: ZoomPhase::Idle,
            duration_ms,
        }
    }

    /// Check that `confirm` would accept `region`, without changing phase.
    pub fn check(&self, region: Option<Rect>, has_next: bool) -> Result<Rect, Rejected> {
        if self.is_zooming() {
            return Err(Rejected::ZoomInFlight);
        }
        if !has_next {
            return Err(Rejected::NoNextFrame);
        }
        let region = region.ok_or(Rejected::NoRegion)?;
        if !(region.w.is_finite() && region.w > 0.0) {
            return Err(Rejected::DegenerateRegion { width: region.w });
        }
        Ok(region)
    }

    /// Start zooming into `region`.
    pub fn confirm(
        &mut self,
        region: Option<Rect>,
        has_next: bool,
    ) -> Result<TransformDescriptor, Rejected> {
        let region = self.check(region, has_next)?;
        let transform = TransformDescriptor::for_region(&region, self.duration_ms);
        self.phase = ZoomPhase::Zooming { transform };
        Ok(transform)
    }

    /// Handle the animation-finished signal.
    pub fn complete(&mut self) -> Completion {
        match self.phase {
            ZoomPhase::Zooming { .. } => {
                self.phase = ZoomPhase::Idle;
                Completion::Advanced
            }
            ZoomPhase::Idle => Completion::Ignored,
        }
    }

    pub fn is_zooming(&self) -> bool {
        matches!(self.phase, ZoomPhase::Zooming { .. })
    }

    pub fn transform(&self) -> Option<TransformDescriptor> {
        match self.phase {
            ZoomPhase::Zooming { transform } => Some(transform),
            ZoomPhase::Idle => None,
        }
    }
}
