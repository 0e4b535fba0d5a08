// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait. It forwards input to the viewer session, runs the
//! zoom animation and delivers its completion back to the session.

use crate::io::serialization::LoadedCatalog;
use crate::ui::{canvas, debug_panel, frames::FrameCache, toolbar, transition::TransitionDriver};
use crate::viewer::calibration::AuthoringSink;
use crate::viewer::session::{GuideClick, Session};
use crate::viewer::snapshot::RenderSnapshot;
use std::path::PathBuf;

/// Authoring sink backed by the log and the egui clipboard.
struct ShellSink<'a> {
    ctx: &'a egui::Context,
}

impl AuthoringSink for ShellSink<'_> {
    fn log(&mut self, text: &str) {
        log::info!("Guide record:\n{}", text);
    }

    fn copy_to_clipboard(&mut self, text: &str) -> bool {
        let text = text.to_string();
        self.ctx.output_mut(|o| o.copied_text = text);
        true
    }
}

/// Main application state.
pub struct MosaicZoomApp {
    /// Viewer core
    session: Session,

    /// Directory frame folders are resolved against
    base_dir: PathBuf,

    /// Decoded frame textures
    frames: FrameCache,

    /// Zoom animation
    transition: TransitionDriver,

    /// Last user-facing message (copy confirmation, load errors)
    status: Option<String>,
}

impl MosaicZoomApp {
    /// Create a new application instance for a loaded catalog.
    pub fn new(loaded: LoadedCatalog) -> anyhow::Result<Self> {
        Ok(Self {
            session: Session::new(loaded.catalog)?,
            base_dir: loaded.base_dir,
            frames: FrameCache::default(),
            transition: TransitionDriver::default(),
            status: None,
        })
    }

    fn frame_path(&self, frame: &str) -> PathBuf {
        self.base_dir.join(&self.session.project().folder).join(frame)
    }

    /// Make sure the current and next frames are loading, and drop the rest.
    fn request_frames(&mut self, snapshot: &RenderSnapshot) {
        let mut wanted = vec![self.frame_path(&snapshot.current_frame)];
        if let Some(ref next) = snapshot.next_frame {
            wanted.push(self.frame_path(next));
        }
        self.frames.retain_only(&wanted);
        for path in &wanted {
            self.frames.request(path);
        }
    }

    /// Load a catalog file and restart on it.
    fn open_catalog(&mut self, path: PathBuf) {
        let result = crate::io::serialization::load_catalog(&path).and_then(|loaded| {
            self.session.replace_catalog(loaded.catalog)?;
            self.base_dir = loaded.base_dir;
            Ok(())
        });

        match result {
            Ok(()) => {
                self.frames.clear();
                self.transition = TransitionDriver::default();
                self.status = Some(format!("Opened {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to open catalog: {:#}", e);
                self.status = Some(format!("Failed to open catalog: {}", e));
            }
        }
    }

    fn handle_toolbar(&mut self, action: toolbar::ToolbarAction) {
        let result = match action {
            toolbar::ToolbarAction::SwitchProject(id) => self.session.switch_project(&id),
            toolbar::ToolbarAction::SetDebug(enabled) => {
                self.session.set_debug_enabled(enabled);
                Ok(())
            }
            toolbar::ToolbarAction::ConfirmZoom => self.session.confirm_zoom().map(|_| ()),
            toolbar::ToolbarAction::Reset => {
                self.session.reset_session();
                self.status = None;
                Ok(())
            }
            toolbar::ToolbarAction::None => Ok(()),
        };
        if let Err(rejected) = result {
            log::debug!("Toolbar action rejected: {}", rejected);
        }
    }

    fn handle_canvas(&mut self, ctx: &egui::Context, action: canvas::CanvasAction) {
        match action {
            canvas::CanvasAction::BeginDrag { pointer, viewport } => {
                if let Err(rejected) = self.session.begin_drag(pointer, &viewport) {
                    log::debug!("Drag rejected: {}", rejected);
                }
            }
            canvas::CanvasAction::UpdateDrag { pointer, viewport } => {
                self.session.update_drag(pointer, &viewport);
            }
            canvas::CanvasAction::EndDrag => {
                let mut sink = ShellSink { ctx };
                if let Some(record) = self.session.end_drag(&mut sink) {
                    self.status = Some(format!("Measured step {}", record.frame_index));
                }
            }
            canvas::CanvasAction::ClickGuide => match self.session.click_guide() {
                Ok(Some(GuideClick::Zooming(_))) | Ok(None) => {}
                Ok(Some(GuideClick::Seeded(_))) => {
                    self.status = Some("Guide selected; press ZOOM to continue".to_string());
                }
                Err(rejected) => log::debug!("Guide click rejected: {}", rejected),
            },
            canvas::CanvasAction::None => {}
        }
    }

    fn handle_debug_panel(&mut self, ctx: &egui::Context, action: debug_panel::DebugAction) {
        match action {
            debug_panel::DebugAction::SetStep(step) => {
                if let Err(rejected) = self.session.set_step(step) {
                    log::debug!("Step change rejected: {}", rejected);
                }
            }
            debug_panel::DebugAction::CopyConfig => {
                let mut sink = ShellSink { ctx };
                self.status = match self.session.copy_record(&mut sink) {
                    Some(true) => self
                        .session
                        .coordinate_record()
                        .map(|record| format!("Copied to clipboard: {}", record.to_string().replace('\n', " "))),
                    Some(false) => Some("Could not copy to clipboard".to_string()),
                    None => None,
                };
            }
            debug_panel::DebugAction::None => {}
        }
    }
}

impl eframe::App for MosaicZoomApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        // Advance the animation; a finished one completes the zoom
        self.transition.sync(self.session.transform(), now);
        if self.transition.frame(now).is_some_and(|f| f.finished) {
            self.session.on_transition_complete();
            self.transition.sync(self.session.transform(), now);
        }

        let snapshot = RenderSnapshot::capture(&self.session);
        self.request_frames(&snapshot);
        if self.frames.poll(ctx) {
            ctx.request_repaint();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Catalog...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Catalogs", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.open_catalog(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Toolbar
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| toolbar::show(ui, self.session.catalog(), &snapshot))
            .inner;

        if let Some(ref message) = self.status {
            egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
                ui.label(egui::RichText::new(message).weak());
            });
        }

        let debug_action = debug_panel::show(ctx, &snapshot);

        // Main canvas (center)
        let transition_frame = self.transition.frame(now);
        let current_path = self.frame_path(&snapshot.current_frame);
        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                canvas::show(
                    ui,
                    &snapshot,
                    self.frames.get(&current_path),
                    transition_frame,
                )
            })
            .inner;

        self.handle_toolbar(toolbar_action);
        self.handle_debug_panel(ctx, debug_action);
        self.handle_canvas(ctx, canvas_action);

        // Start animating a zoom confirmed this frame
        self.transition.sync(self.session.transform(), now);

        if self.transition.is_active() || self.frames.is_loading() {
            ctx.request_repaint();
        }
    }
}
