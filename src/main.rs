// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Mosaic Zoom - an infinite-zoom viewer for nested image sequences.
//!
//! Select a region of the current frame (or click its guide box) and the
//! viewer magnifies that region to fill the window, then swaps in the next,
//! higher-resolution frame.

mod app;
mod config;
mod io;
mod models;
mod ui;
mod util;
mod viewer;

use anyhow::Result;
use app::MosaicZoomApp;
use std::path::PathBuf;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Optional catalog path as the only argument
    let loaded = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => io::serialization::load_catalog(&path)?,
        None => io::serialization::default_catalog()?,
    };
    let app = MosaicZoomApp::new(loaded)?;

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Mosaic Zoom"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Mosaic Zoom",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
