// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Frame texture cache.
//!
//! Keeps textures for the frames around the current step. Decoding happens
//! off the UI thread through [`FrameDecoder`]; textures are created when the
//! results are polled.

use crate::io::media::FrameDecoder;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Load state of one frame.
pub enum FrameSlot {
    Loading,
    Ready {
        texture: egui::TextureHandle,
        size: (u32, u32),
    },
    Failed,
}

impl FrameSlot {
    /// Width / height of the frame, once known.
    pub fn aspect(&self) -> Option<f32> {
        match self {
            FrameSlot::Ready { size, .. } if size.1 > 0 => Some(size.0 as f32 / size.1 as f32),
            _ => None,
        }
    }
}

#[derive(Default)]
pub struct FrameCache {
    slots: HashMap<PathBuf, FrameSlot>,
    decoder: FrameDecoder,
}

impl FrameCache {
    /// Queue `path` for decoding unless it is already known.
    pub fn request(&mut self, path: &Path) {
        if !self.slots.contains_key(path) {
            self.slots.insert(path.to_path_buf(), FrameSlot::Loading);
            self.decoder.request(path.to_path_buf());
        }
    }

    /// Turn finished decodes into textures. Returns `true` if anything arrived.
    pub fn poll(&mut self, ctx: &egui::Context) -> bool {
        let mut arrived = false;
        for decoded in self.decoder.drain() {
            // Evicted while decoding
            let Some(slot) = self.slots.get_mut(&decoded.path) else {
                continue;
            };
            arrived = true;
            *slot = match decoded.result {
                Ok(img) => {
                    let size = [img.width as usize, img.height as usize];
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &img.pixels);
                    let texture = ctx.load_texture(
                        decoded.path.to_string_lossy(),
                        color_image,
                        egui::TextureOptions::LINEAR,
                    );
                    FrameSlot::Ready {
                        texture,
                        size: (img.width, img.height),
                    }
                }
                Err(e) => {
                    log::error!("Failed to load frame: {}", e);
                    FrameSlot::Failed
                }
            };
        }
        arrived
    }

    pub fn get(&self, path: &Path) -> Option<&FrameSlot> {
        self.slots.get(path)
    }

    pub fn is_loading(&self) -> bool {
        self.slots.values().any(|s| matches!(s, FrameSlot::Loading))
    }

    /// Drop every frame not in `keep`.
    pub fn retain_only(&mut self, keep: &[PathBuf]) {
        self.slots.retain(|path, _| keep.iter().any(|k| k == path));
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
