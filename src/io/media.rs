// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Frame image loading.
//!
//! This module decodes frame files into RGBA pixels suitable for display in
//! egui. Decoding runs on a background thread; results come back over a
//! channel and are picked up on the next repaint.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};

/// A decoded frame.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decode an image file to RGBA8.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to decode {}", path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    Ok(LoadedImage {
        width,
        height,
        pixels: img.into_raw(),
    })
}

/// Result of a background decode, tagged with the path it was requested for.
pub struct DecodedFrame {
    pub path: PathBuf,
    pub result: Result<LoadedImage, String>,
}

/// Decodes frames on worker threads.
pub struct FrameDecoder {
    sender: Sender<DecodedFrame>,
    receiver: Receiver<DecodedFrame>,
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDecoder {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }

    /// Start decoding `path` in the background.
    pub fn request(&self, path: PathBuf) {
        let sender = self.sender.clone();
        std::thread::spawn(move || {
            let result = load_image(&path).map_err(|e| format!("{:#}", e));
            if let Ok(ref img) = result {
                log::info!("Loaded frame: {} ({}x{})", path.display(), img.width, img.height);
            }
            let _ = sender.send(DecodedFrame { path, result });
        });
    }

    /// Collect every decode that finished since the last call.
    pub fn drain(&self) -> Vec<DecodedFrame> {
        self.receiver.try_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_missing_file_fails() {
        assert!(load_image(Path::new("definitely/not/here.webp")).is_err());
    }

    #[test]
    fn test_background_decode() {
        let path = std::env::temp_dir().join("mosaic_zoom_media_test.png");
        image::RgbaImage::from_pixel(4, 2, image::Rgba([255, 0, 0, 255]))
            .save(&path)
            .unwrap();

        let decoder = FrameDecoder::new();
        decoder.request(path.clone());
        decoder.request(PathBuf::from("definitely/not/here.png"));

        let mut results = Vec::new();
        for _ in 0..100 {
            results.extend(decoder.drain());
            if results.len() == 2 {
                break;
            }
            std::thread::sleep(Duration::from_millis(20));
        }
        std::fs::remove_file(&path).ok();

        assert_eq!(results.len(), 2);
        let ok = results.iter().find(|d| d.path == path).unwrap();
        let img = ok.result.as_ref().unwrap();
        assert_eq!((img.width, img.height), (4, 2));
        assert_eq!(img.pixels.len(), 4 * 2 * 4);
        assert!(results.iter().any(|d| d.result.is_err()));
    }
}
