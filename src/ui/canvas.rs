// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Viewing canvas for frame display and region selection.
//!
//! This module provides the main canvas area: it draws the current frame
//! under the zoom transform, the guide and selection outlines, and turns
//! pointer input into canvas actions for the session.

use super::frames::FrameSlot;
use super::transition::TransitionFrame;
use crate::models::region::{Rect, ViewportBounds};
use crate::util::geometry;
use crate::viewer::snapshot::{GuideEmphasis, RenderSnapshot};

/// Aspect ratio used until the frame has been decoded.
const FALLBACK_ASPECT: f32 = 16.0 / 9.0;

/// Result of canvas interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasAction {
    None,
    BeginDrag {
        pointer: (f64, f64),
        viewport: ViewportBounds,
    },
    UpdateDrag {
        pointer: (f64, f64),
        viewport: ViewportBounds,
    },
    /// Pointer released or dragged out of the viewport
    EndDrag,
    ClickGuide,
}

/// Largest rect with the given aspect ratio centered in `available`.
pub fn fit_rect(available: egui::Rect, aspect: f32) -> egui::Rect {
    let available_aspect = available.width() / available.height();

    let (display_width, display_height) = if aspect > available_aspect {
        // Frame is wider - fit to width
        let width = available.width();
        (width, width / aspect)
    } else {
        // Frame is taller - fit to height
        let height = available.height();
        (height * aspect, height)
    };

    egui::Rect::from_center_size(available.center(), egui::vec2(display_width, display_height))
}

/// Screen rect of a percent-of-viewport rectangle.
pub fn percent_rect(viewport: egui::Rect, region: &Rect) -> egui::Rect {
    let size = viewport.size();
    egui::Rect::from_min_size(
        viewport.min + egui::vec2(region.x as f32 / 100.0 * size.x, region.y as f32 / 100.0 * size.y),
        egui::vec2(region.w as f32 / 100.0 * size.x, region.h as f32 / 100.0 * size.y),
    )
}

/// Where the viewport-filling frame lands after scaling about the transition origin.
pub fn zoomed_rect(viewport: egui::Rect, transition: &TransitionFrame) -> egui::Rect {
    let size = viewport.size();
    let origin = viewport.min
        + egui::vec2(
            transition.origin.x as f32 / 100.0 * size.x,
            transition.origin.y as f32 / 100.0 * size.y,
        );
    let scale = transition.scale as f32;
    egui::Rect::from_min_max(
        origin + (viewport.min - origin) * scale,
        origin + (viewport.max - origin) * scale,
    )
}

/// Viewport bounds for pointer mapping, or `None` when the viewport has no area.
fn bounds(viewport: egui::Rect) -> Option<ViewportBounds> {
    let (width, height) = (viewport.width() as f64, viewport.height() as f64);
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return None;
    }
    Some(ViewportBounds::new(
        viewport.min.x as f64,
        viewport.min.y as f64,
        width,
        height,
    ))
}

/// Map pointer input over a viewport with area to a canvas action.
fn pointer_action(
    ui: &egui::Ui,
    response: &egui::Response,
    snapshot: &RenderSnapshot,
    viewport: egui::Rect,
    viewport_bounds: ViewportBounds,
) -> CanvasAction {
    let hovering_guide = response.hover_pos().is_some_and(|pos| {
        snapshot.guide_visible
            && snapshot.guide.is_some_and(|g| {
                g.contains(geometry::to_percent(pos.x as f64, pos.y as f64, &viewport_bounds))
            })
    });
    if hovering_guide {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    } else if snapshot.debug_enabled && response.hovered() && !snapshot.is_zooming {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
    }

    if response.drag_started() {
        let origin = ui
            .input(|i| i.pointer.press_origin())
            .or(response.interact_pointer_pos());
        match origin {
            Some(pos) => CanvasAction::BeginDrag {
                pointer: (pos.x as f64, pos.y as f64),
                viewport: viewport_bounds,
            },
            None => CanvasAction::None,
        }
    } else if response.drag_stopped() {
        CanvasAction::EndDrag
    } else if response.dragged() {
        match response.interact_pointer_pos() {
            Some(pos) if viewport.contains(pos) => CanvasAction::UpdateDrag {
                pointer: (pos.x as f64, pos.y as f64),
                viewport: viewport_bounds,
            },
            // Leaving the viewport ends the drag like a release would
            _ => CanvasAction::EndDrag,
        }
    } else if response.clicked() && hovering_guide {
        CanvasAction::ClickGuide
    } else {
        CanvasAction::None
    }
}

/// Display the canvas and handle pointer interactions.
pub fn show(
    ui: &mut egui::Ui,
    snapshot: &RenderSnapshot,
    frame: Option<&FrameSlot>,
    transition: Option<TransitionFrame>,
) -> CanvasAction {
    // Set background color
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(20);

    let status_height = ui.spacing().interact_size.y + ui.spacing().item_spacing.y * 2.0;
    let mut available = ui.available_rect_before_wrap();
    available.max.y -= status_height;
    let _ = ui.allocate_rect(available, egui::Sense::hover());

    let aspect = frame.and_then(FrameSlot::aspect).unwrap_or(FALLBACK_ASPECT);
    let viewport = fit_rect(available, aspect);
    let painter = ui.painter_at(viewport);
    painter.rect_filled(viewport, 0.0, egui::Color32::from_gray(20));

    // Current frame under the zoom transform
    let image_rect = transition
        .as_ref()
        .map_or(viewport, |t| zoomed_rect(viewport, t));
    match frame {
        Some(FrameSlot::Ready { texture, .. }) => {
            painter.image(
                texture.id(),
                image_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
        slot => {
            let message = match slot {
                Some(FrameSlot::Failed) => format!("{} (missing)", snapshot.current_frame),
                _ => format!("Loading {}...", snapshot.current_frame),
            };
            painter.rect_stroke(
                image_rect.shrink(4.0),
                4.0,
                egui::Stroke::new(1.0, egui::Color32::from_gray(90)),
            );
            painter.text(
                image_rect.center(),
                egui::Align2::CENTER_CENTER,
                message,
                egui::FontId::proportional(18.0 * transition.map_or(1.0, |t| t.scale as f32)),
                egui::Color32::from_gray(160),
            );
        }
    }

    // Guide box (click target or calibration aid)
    if let Some(guide) = snapshot.guide.filter(|_| snapshot.guide_visible) {
        let rect = percent_rect(viewport, &guide);
        let stroke = match snapshot.guide_emphasis {
            GuideEmphasis::Calibration => {
                painter.rect_stroke(
                    rect.expand(3.0),
                    2.0,
                    egui::Stroke::new(6.0, egui::Color32::from_rgba_unmultiplied(0, 255, 0, 60)),
                );
                egui::Stroke::new(2.0, egui::Color32::from_rgb(0, 255, 0))
            }
            GuideEmphasis::ClickTarget => {
                egui::Stroke::new(1.0, egui::Color32::from_rgba_unmultiplied(255, 0, 0, 204))
            }
        };
        painter.rect(rect, 0.0, egui::Color32::from_white_alpha(38), stroke);
    }

    // User selection
    if let Some(region) = snapshot.active_region.filter(|_| snapshot.selection_visible) {
        let rect = percent_rect(viewport, &region);
        painter.rect(
            rect,
            0.0,
            egui::Color32::from_rgba_unmultiplied(0, 150, 255, 40),
            egui::Stroke::new(2.0, egui::Color32::WHITE),
        );
    }

    // Instruction hint
    if snapshot.show_hint {
        let hint = if snapshot.debug_enabled {
            "Debug: Drag to measure & copy coords"
        } else {
            "Click the white box to go one level deeper"
        };
        let anchor = egui::pos2(viewport.center().x, viewport.min.y + 40.0);
        let galley = painter.layout_no_wrap(
            hint.to_string(),
            egui::FontId::proportional(18.0),
            egui::Color32::WHITE,
        );
        let text_rect = egui::Rect::from_center_size(anchor, galley.size());
        painter.rect(
            text_rect.expand2(egui::vec2(20.0, 10.0)),
            20.0,
            egui::Color32::from_black_alpha(153),
            egui::Stroke::new(1.0, egui::Color32::from_white_alpha(77)),
        );
        painter.galley(text_rect.min, galley, egui::Color32::WHITE);
    }

    // Pointer handling
    let response = ui.interact(viewport, ui.id().with("viewport"), egui::Sense::click_and_drag());
    let action = match bounds(viewport) {
        Some(viewport_bounds) => pointer_action(ui, &response, snapshot, viewport, viewport_bounds),
        // Viewport collapsed to nothing; a pending drag still needs its release
        None if response.drag_stopped() => CanvasAction::EndDrag,
        None => CanvasAction::None,
    };

    // Status line at the bottom
    ui.separator();
    ui.horizontal(|ui| {
        ui.label(format!(
            "{} - Step {} of {}",
            snapshot.current_frame,
            snapshot.step + 1,
            snapshot.frame_count
        ));
        ui.separator();
        if let Some(t) = snapshot.transform.filter(|_| snapshot.is_zooming) {
            ui.label(format!("Zooming x{:.1}...", t.scale));
        } else if snapshot.is_dragging {
            ui.label("Selecting");
        } else if snapshot.at_end {
            ui.label("End of sequence");
        } else {
            ui.label("Ready");
        }
    });

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::region::Point;

    const EPSILON: f32 = 0.001;

    fn approx(a: egui::Rect, b: egui::Rect) -> bool {
        (a.min.x - b.min.x).abs() < EPSILON
            && (a.min.y - b.min.y).abs() < EPSILON
            && (a.max.x - b.max.x).abs() < EPSILON
            && (a.max.y - b.max.y).abs() < EPSILON
    }

    #[test]
    fn test_fit_rect_wide_frame() {
        let available = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(1000.0, 1000.0));
        let fitted = fit_rect(available, 2.0);
        assert!(approx(
            fitted,
            egui::Rect::from_min_max(egui::pos2(0.0, 250.0), egui::pos2(1000.0, 750.0))
        ));
    }

    #[test]
    fn test_fit_rect_tall_frame() {
        let available = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(1000.0, 500.0));
        let fitted = fit_rect(available, 0.5);
        assert!(approx(
            fitted,
            egui::Rect::from_min_max(egui::pos2(375.0, 0.0), egui::pos2(625.0, 500.0))
        ));
    }

    #[test]
    fn test_percent_rect() {
        let viewport = egui::Rect::from_min_size(egui::pos2(100.0, 50.0), egui::vec2(200.0, 100.0));
        let rect = percent_rect(viewport, &Rect::new(25.0, 50.0, 50.0, 10.0));
        assert!(approx(
            rect,
            egui::Rect::from_min_max(egui::pos2(150.0, 100.0), egui::pos2(250.0, 110.0))
        ));
    }

    #[test]
    fn test_zoomed_rect_fills_viewport_width_with_region() {
        // At the end of the transition the region's horizontal extent spans the viewport
        let viewport = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(200.0, 100.0));
        let region = Rect::new(30.0, 30.0, 40.0, 20.0);
        let transition = TransitionFrame {
            origin: region.center(),
            scale: 2.5,
            finished: true,
        };
        let zoomed = zoomed_rect(viewport, &transition);

        let region_left = zoomed.min.x + region.x as f32 / 100.0 * zoomed.width();
        let region_right = region_left + region.w as f32 / 100.0 * zoomed.width();
        assert!((region_left - 0.0).abs() < EPSILON);
        assert!((region_right - 200.0).abs() < EPSILON);
    }

    #[test]
    fn test_bounds_skip_empty_viewport() {
        let empty = egui::Rect::from_min_size(egui::pos2(10.0, 10.0), egui::vec2(0.0, 100.0));
        assert_eq!(bounds(empty), None);
        let flat = egui::Rect::from_min_size(egui::pos2(10.0, 10.0), egui::vec2(200.0, 0.0));
        assert_eq!(bounds(flat), None);

        let viewport = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(200.0, 100.0));
        assert_eq!(
            bounds(viewport),
            Some(ViewportBounds::new(10.0, 20.0, 200.0, 100.0))
        );
    }

    #[test]
    fn test_zoomed_rect_identity() {
        let viewport = egui::Rect::from_min_size(egui::pos2(10.0, 10.0), egui::vec2(200.0, 100.0));
        let transition = TransitionFrame {
            origin: Point::new(12.0, 80.0),
            scale: 1.0,
            finished: false,
        };
        assert!(approx(zoomed_rect(viewport, &transition), viewport));
    }
}
