// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Calibration panel.
//!
//! Shown in debug mode while a region exists: step navigation, the region's
//! coordinates and a button copying the guide record.

use crate::viewer::snapshot::RenderSnapshot;

/// Result of debug panel interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugAction {
    None,
    SetStep(usize),
    CopyConfig,
}

/// Display the panel if it applies to the snapshot.
pub fn show(ctx: &egui::Context, snapshot: &RenderSnapshot) -> DebugAction {
    let mut action = DebugAction::None;
    let Some(region) = snapshot.active_region.filter(|_| snapshot.debug_enabled) else {
        return action;
    };

    egui::Window::new("Debug Info")
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-20.0, 80.0))
        .resizable(false)
        .collapsible(false)
        .min_width(200.0)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!("{} (Step {})", snapshot.current_frame, snapshot.step))
                    .strong(),
            );

            let navigable = !snapshot.is_zooming;
            ui.horizontal(|ui| {
                let can_prev = navigable && snapshot.step > 0;
                if ui.add_enabled(can_prev, egui::Button::new("< Prev")).clicked() {
                    action = DebugAction::SetStep(snapshot.step - 1);
                }
                let can_next = navigable && snapshot.step + 1 < snapshot.frame_count;
                if ui.add_enabled(can_next, egui::Button::new("Next >")).clicked() {
                    action = DebugAction::SetStep(snapshot.step + 1);
                }
            });

            ui.separator();
            let green = egui::Color32::from_rgb(0, 255, 0);
            for (name, value) in [("x", region.x), ("y", region.y), ("w", region.w), ("h", region.h)] {
                ui.label(
                    egui::RichText::new(format!("{}: {:.2}", name, value))
                        .monospace()
                        .color(green),
                );
            }

            ui.add_space(6.0);
            let copy = egui::Button::new(egui::RichText::new("COPY CONFIG").strong().color(egui::Color32::BLACK))
                .fill(green)
                .min_size(egui::vec2(ui.available_width(), 0.0));
            if ui.add(copy).clicked() {
                action = DebugAction::CopyConfig;
            }
        });

    action
}
