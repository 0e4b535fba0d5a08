// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar with the project switcher and zoom controls.

use crate::models::project::Catalog;
use crate::viewer::snapshot::RenderSnapshot;

/// Result of toolbar interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarAction {
    None,
    SwitchProject(String),
    SetDebug(bool),
    ConfirmZoom,
    Reset,
}

/// Display the toolbar.
pub fn show(ui: &mut egui::Ui, catalog: &Catalog, snapshot: &RenderSnapshot) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        // Project switcher
        egui::ComboBox::from_id_source("project_switcher")
            .selected_text(egui::RichText::new(&snapshot.project_name).strong())
            .show_ui(ui, |ui| {
                for project in &catalog.projects {
                    let selected = project.id == snapshot.project_id;
                    if ui.selectable_label(selected, &project.name).clicked() && !selected {
                        action = ToolbarAction::SwitchProject(project.id.clone());
                    }
                }
            });

        ui.separator();

        let mut debug = snapshot.debug_enabled;
        if ui
            .checkbox(&mut debug, egui::RichText::new("Debug Box").color(egui::Color32::from_rgb(136, 255, 136)))
            .changed()
        {
            action = ToolbarAction::SetDebug(debug);
        }

        if snapshot.can_confirm && ui.button(egui::RichText::new("ZOOM ➤").strong()).clicked() {
            action = ToolbarAction::ConfirmZoom;
        }
        if snapshot.at_end && ui.button("RESET").clicked() {
            action = ToolbarAction::Reset;
        }

        ui.separator();

        let help_text = if snapshot.is_zooming {
            "Zooming in..."
        } else if snapshot.at_end {
            "You reached the innermost frame"
        } else if snapshot.debug_enabled {
            "Drag to measure a region, then copy its coordinates"
        } else {
            "Click the highlighted box to zoom in"
        };
        ui.label(egui::RichText::new(help_text).italics().weak());
    });

    action
}
