// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Render snapshots.
//!
//! A [`RenderSnapshot`] is everything the presentation layer needs to draw a
//! frame, captured from the session in one go so drawing never reads the
//! session mid-update.

use super::session::Session;
use super::sequencer::TransformDescriptor;
use crate::models::region::Rect;

/// How the guide outline should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideEmphasis {
    /// Subtle outline marking a click target
    ClickTarget,
    /// Bright outline used while calibrating
    Calibration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    pub project_id: String,
    pub project_name: String,
    pub step: usize,
    pub frame_count: usize,
    pub current_frame: String,
    pub next_frame: Option<String>,
    /// Pending selection (kept while zooming; see `selection_visible`)
    pub active_region: Option<Rect>,
    pub selection_visible: bool,
    pub is_dragging: bool,
    pub transform: Option<TransformDescriptor>,
    pub is_zooming: bool,
    pub guide: Option<Rect>,
    pub guide_visible: bool,
    pub guide_emphasis: GuideEmphasis,
    pub debug_enabled: bool,
    /// The zoom command should be offered
    pub can_confirm: bool,
    /// Last frame reached; offer a reset
    pub at_end: bool,
    /// Show the first-frame instruction hint
    pub show_hint: bool,
}

impl RenderSnapshot {
    pub fn capture(session: &Session) -> Self {
        let project = session.project();
        let step = session.current_step();
        let region = session.pending_region();
        let is_zooming = session.is_zooming();
        let guide = session.current_guide();
        let has_next = session.has_next();
        let min_width = session.config().min_confirm_width;

        Self {
            project_id: project.id.clone(),
            project_name: project.name.clone(),
            step,
            frame_count: project.len(),
            current_frame: project.frame(step).unwrap_or_default().to_string(),
            next_frame: project.frame(step + 1).map(str::to_string),
            active_region: region,
            selection_visible: !is_zooming && region.is_some(),
            is_dragging: session.is_dragging(),
            transform: session.transform(),
            is_zooming,
            guide,
            // A click target needs a frame to zoom into; calibration shows it anyway
            guide_visible: !is_zooming && guide.is_some() && (has_next || session.debug_enabled()),
            guide_emphasis: if session.debug_enabled() {
                GuideEmphasis::Calibration
            } else {
                GuideEmphasis::ClickTarget
            },
            debug_enabled: session.debug_enabled(),
            can_confirm: !is_zooming && has_next && region.is_some_and(|r| r.w > min_width),
            at_end: !has_next,
            show_hint: !is_zooming && region.is_none() && step == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewerConfig;
    use crate::models::project::{Catalog, Project};

    fn session() -> Session {
        let mut guides = std::collections::BTreeMap::new();
        guides.insert(0, Rect::new(30.0, 30.0, 40.0, 20.0));
        guides.insert(1, Rect::new(40.0, 40.0, 3.0, 3.0));
        guides.insert(2, Rect::new(20.0, 20.0, 10.0, 10.0));
        let catalog = Catalog {
            viewer: ViewerConfig {
                guide_click: crate::config::GuideClickMode::SeedOnly,
                ..ViewerConfig::default()
            },
            projects: vec![Project {
                id: "p".to_string(),
                name: "Project".to_string(),
                folder: "frames".to_string(),
                frames: vec!["a.webp".into(), "b.webp".into(), "c.webp".into()],
                guides,
            }],
        };
        Session::new(catalog).unwrap()
    }

    #[test]
    fn test_initial_snapshot() {
        let snap = RenderSnapshot::capture(&session());
        assert_eq!(snap.current_frame, "a.webp");
        assert_eq!(snap.next_frame.as_deref(), Some("b.webp"));
        assert_eq!(snap.frame_count, 3);
        assert!(snap.guide_visible);
        assert_eq!(snap.guide_emphasis, GuideEmphasis::ClickTarget);
        assert!(snap.show_hint);
        assert!(!snap.can_confirm);
        assert!(!snap.at_end);
        assert_eq!(snap.transform, None);
    }

    #[test]
    fn test_zooming_hides_overlays() {
        let mut s = session();
        s.click_guide().unwrap();
        assert!(RenderSnapshot::capture(&s).can_confirm);

        s.confirm_zoom().unwrap();
        let snap = RenderSnapshot::capture(&s);
        assert!(snap.is_zooming);
        assert!(snap.transform.is_some());
        assert!(snap.active_region.is_some());
        assert!(!snap.selection_visible);
        assert!(!snap.guide_visible);
        assert!(!snap.can_confirm);
    }

    #[test]
    fn test_small_region_not_confirmable() {
        let mut s = session();
        s.set_debug_enabled(true);
        s.set_step(1).unwrap();
        s.click_guide().unwrap();

        let snap = RenderSnapshot::capture(&s);
        assert_eq!(snap.guide_emphasis, GuideEmphasis::Calibration);
        // Width 3 is below the usability threshold even though a zoom would be legal
        assert!(!snap.can_confirm);
        assert!(!snap.show_hint);
    }

    #[test]
    fn test_last_frame() {
        let mut s = session();
        s.set_debug_enabled(true);
        s.set_step(2).unwrap();

        let snap = RenderSnapshot::capture(&s);
        assert!(snap.at_end);
        assert_eq!(snap.next_frame, None);
        assert!(snap.guide_visible);

        // Out of calibration the last frame's guide is not clickable
        s.set_debug_enabled(false);
        let snap = RenderSnapshot::capture(&s);
        assert_eq!(snap.guide, Some(Rect::new(20.0, 20.0, 10.0, 10.0)));
        assert!(!snap.guide_visible);
    }
}
