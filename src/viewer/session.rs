// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Viewer session.
//!
//! [`Session`] owns the catalog and the mutable [`ViewerState`] and exposes
//! the whole control surface of the viewer. Every state change goes through
//! one of its methods; the presentation layer only reads snapshots.

use super::calibration::{self, AuthoringSink, CoordinateRecord};
use super::error::Rejected;
use super::selection::SelectionTracker;
use super::sequencer::{Completion, TransformDescriptor, ZoomSequencer};
use crate::config::{GuideClickMode, ManualDrag, ViewerConfig};
use crate::models::project::{Catalog, Project};
use crate::models::region::{Rect, ViewportBounds};

/// Mutable state of a viewing session.
#[derive(Debug, Clone)]
pub struct ViewerState {
    /// Index of the active project in the catalog
    active_project: usize,
    /// Displayed frame; only advanced by a completed zoom
    current_step: usize,
    selection: SelectionTracker,
    sequencer: ZoomSequencer,
    debug_enabled: bool,
}

impl ViewerState {
    fn new(config: &ViewerConfig, active_project: usize) -> Self {
        Self {
            active_project,
            current_step: 0,
            selection: SelectionTracker::new(config.clamp_to_viewport),
            sequencer: ZoomSequencer::new(config.transition_ms),
            debug_enabled: false,
        }
    }
}

/// What a guide click did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GuideClick {
    /// The guide was copied into the selection
    Seeded(Rect),
    /// The guide was copied into the selection and the zoom started
    Zooming(TransformDescriptor),
}

/// A viewing session over a catalog.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    state: ViewerState,
}

impl Session {
    /// Create a session showing the first frame of the first project.
    pub fn new(catalog: Catalog) -> anyhow::Result<Self> {
        catalog.validate()?;
        let state = ViewerState::new(&catalog.viewer, 0);
        Ok(Self { catalog, state })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.catalog.viewer
    }

    /// The active project.
    pub fn project(&self) -> &Project {
        &self.catalog.projects[self.state.active_project]
    }

    pub fn current_step(&self) -> usize {
        self.state.current_step
    }

    pub fn pending_region(&self) -> Option<Rect> {
        self.state.selection.region()
    }

    pub fn is_zooming(&self) -> bool {
        self.state.sequencer.is_zooming()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.selection.is_dragging()
    }

    pub fn debug_enabled(&self) -> bool {
        self.state.debug_enabled
    }

    pub fn transform(&self) -> Option<TransformDescriptor> {
        self.state.sequencer.transform()
    }

    pub fn has_next(&self) -> bool {
        self.project().has_next(self.state.current_step)
    }

    /// Guide for the displayed frame.
    pub fn current_guide(&self) -> Option<Rect> {
        self.project().guide(self.state.current_step)
    }

    /// Make another project active, starting from its first frame.
    ///
    /// Any in-flight zoom is abandoned without advancing.
    pub fn switch_project(&mut self, id: &str) -> Result<(), Rejected> {
        let index = self
            .catalog
            .projects
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| Rejected::UnknownProject(id.to_string()))?;

        if self.state.sequencer.is_zooming() {
            log::info!("Abandoning zoom on project switch");
        }
        let debug_enabled = self.state.debug_enabled;
        self.state = ViewerState::new(&self.catalog.viewer, index);
        self.state.debug_enabled = debug_enabled;
        log::info!("Switched to project '{}'", self.project().name);
        Ok(())
    }

    /// Restart from scratch: first project, first frame, debug off.
    pub fn reset_session(&mut self) {
        self.state = ViewerState::new(&self.catalog.viewer, 0);
        log::info!("Session reset");
    }

    /// Swap in a freshly loaded catalog and reset.
    pub fn replace_catalog(&mut self, catalog: Catalog) -> anyhow::Result<()> {
        catalog.validate()?;
        self.catalog = catalog;
        self.reset_session();
        Ok(())
    }

    /// Start a free-form selection at the pointer.
    pub fn begin_drag(
        &mut self,
        pointer: (f64, f64),
        viewport: &ViewportBounds,
    ) -> Result<Rect, Rejected> {
        if self.is_zooming() {
            return Err(Rejected::ZoomInFlight);
        }
        if !self.has_next() {
            return Err(Rejected::NoNextFrame);
        }
        if self.config().manual_drag == ManualDrag::DebugOnly && !self.state.debug_enabled {
            return Err(Rejected::ManualDragDisabled);
        }
        Ok(self.state.selection.begin(pointer, viewport))
    }

    /// Stretch the selection to the pointer. No-op without a drag or while zooming.
    pub fn update_drag(&mut self, pointer: (f64, f64), viewport: &ViewportBounds) -> Option<Rect> {
        if self.is_zooming() {
            return self.pending_region();
        }
        self.state.selection.update(pointer, viewport)
    }

    /// Release the pointer (button up or pointer leaving the viewport).
    ///
    /// In debug mode a usable region is logged as a coordinate record, which
    /// is also returned. Nothing is logged once a zoom has started.
    pub fn end_drag(&mut self, sink: &mut dyn AuthoringSink) -> Option<CoordinateRecord> {
        if !self.state.selection.end() || !self.state.debug_enabled || self.is_zooming() {
            return None;
        }
        let record = self.coordinate_record()?;
        sink.log(&record.to_string());
        Some(record)
    }

    /// Copy the guide for `frame_index` into the selection.
    ///
    /// `Ok(None)` means that frame has no guide.
    pub fn accept_guide(&mut self, frame_index: usize) -> Result<Option<Rect>, Rejected> {
        if self.is_zooming() {
            return Err(Rejected::ZoomInFlight);
        }
        let Some(guide) = self.project().guide(frame_index) else {
            return Ok(None);
        };
        self.state.selection.seed(guide);
        log::info!("Accepted guide for step {}", frame_index);
        Ok(Some(guide))
    }

    /// Click on the current frame's guide, following the configured mode.
    ///
    /// In seed-and-confirm mode the zoom preconditions are checked first, so
    /// a click that cannot zoom leaves the selection as it was.
    pub fn click_guide(&mut self) -> Result<Option<GuideClick>, Rejected> {
        if self.is_zooming() {
            return Err(Rejected::ZoomInFlight);
        }
        let mode = self.config().guide_click;
        if mode == GuideClickMode::SeedAndConfirm {
            if let Some(guide) = self.current_guide() {
                self.state.sequencer.check(Some(guide), self.has_next())?;
            }
        }
        let Some(guide) = self.accept_guide(self.state.current_step)? else {
            return Ok(None);
        };
        match mode {
            GuideClickMode::SeedOnly => Ok(Some(GuideClick::Seeded(guide))),
            GuideClickMode::SeedAndConfirm => {
                self.confirm_zoom().map(|t| Some(GuideClick::Zooming(t)))
            }
        }
    }

    /// Start zooming into the pending region.
    pub fn confirm_zoom(&mut self) -> Result<TransformDescriptor, Rejected> {
        let has_next = self.has_next();
        let region = self.pending_region();
        let transform = self.state.sequencer.confirm(region, has_next)?;
        log::info!(
            "Zoom confirmed at step {}: origin ({:.2}%, {:.2}%), scale {:.3}",
            self.state.current_step,
            transform.origin_x,
            transform.origin_y,
            transform.scale
        );
        Ok(transform)
    }

    /// The zoom animation finished. Duplicate signals are ignored.
    pub fn on_transition_complete(&mut self) -> Completion {
        let completion = self.state.sequencer.complete();
        match completion {
            Completion::Advanced => {
                let last = self.project().last_step();
                self.state.current_step = (self.state.current_step + 1).min(last);
                self.state.selection.clear();
                log::info!("Advanced to step {}", self.state.current_step);
            }
            Completion::Ignored => log::debug!("Ignoring duplicate transition completion"),
        }
        completion
    }

    pub fn set_debug_enabled(&mut self, enabled: bool) {
        if self.state.debug_enabled != enabled {
            self.state.debug_enabled = enabled;
            log::info!("Debug mode {}", if enabled { "enabled" } else { "disabled" });
        }
    }

    /// Jump to a step (debug only, clamped to the sequence).
    pub fn set_step(&mut self, step: usize) -> Result<usize, Rejected> {
        if !self.state.debug_enabled {
            return Err(Rejected::DebugDisabled);
        }
        if self.is_zooming() {
            return Err(Rejected::ZoomInFlight);
        }
        self.state.current_step = step.min(self.project().last_step());
        log::debug!("Jumped to step {}", self.state.current_step);
        Ok(self.state.current_step)
    }

    /// The pending region as a record for the displayed frame.
    pub fn coordinate_record(&self) -> Option<CoordinateRecord> {
        let region = self.pending_region().filter(|r| r.w > 0.0)?;
        let step = self.state.current_step;
        let frame = self.project().frame(step)?;
        Some(CoordinateRecord::new(step, frame, region))
    }

    /// Put the pending region's record on the clipboard.
    ///
    /// `None` when there is nothing to copy, otherwise the sink's result.
    /// Records that would read back as a zero-width guide are not copied.
    pub fn copy_record(&self, sink: &mut dyn AuthoringSink) -> Option<bool> {
        let text = self.coordinate_record()?.to_string();
        match calibration::parse_entry(&text) {
            Ok((_, region)) if region.w > 0.0 => {}
            Ok((_, region)) => {
                log::warn!("Not copying record: width {:.4} rounds to zero", region.w);
                return None;
            }
            Err(e) => {
                log::error!("Not copying unreadable record: {}", e);
                return None;
            }
        }
        let copied = sink.copy_to_clipboard(&text);
        if copied {
            log::info!("Copied guide record to clipboard");
        } else {
            log::warn!("Clipboard unavailable");
        }
        Some(copied)
    }
}
