// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Guide authoring records.
//!
//! In debug mode a finished drag is turned into a text record that can be
//! pasted straight into a catalog's guide map:
//!
//! ```text
//! // 5.webp (Step 2)
//! 2: { x: 39.08, y: 34.14, w: 26.30, h: 23.71 },
//! ```

use crate::models::region::Rect;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Where authoring records go. Both outputs are fire-and-forget.
pub trait AuthoringSink {
    /// Write the record to the log.
    fn log(&mut self, text: &str);

    /// Put the record on the clipboard, returning whether that worked.
    fn copy_to_clipboard(&mut self, text: &str) -> bool;
}

/// A region measured on a specific frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateRecord {
    pub frame_index: usize,
    pub frame_id: String,
    pub region: Rect,
}

impl CoordinateRecord {
    pub fn new(frame_index: usize, frame_id: impl Into<String>, region: Rect) -> Self {
        Self {
            frame_index,
            frame_id: frame_id.into(),
            region,
        }
    }
}

impl fmt::Display for CoordinateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.region;
        writeln!(f, "// {} (Step {})", self.frame_id, self.frame_index)?;
        write!(
            f,
            "{}: {{ x: {:.2}, y: {:.2}, w: {:.2}, h: {:.2} }},",
            self.frame_index, r.x, r.y, r.w, r.h
        )
    }
}

/// Failure to read a guide entry back.
#[derive(Debug, Error)]
pub enum RecordParseError {
    #[error("no guide entry line found")]
    MissingEntry,

    #[error("invalid guide entry: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Parse the first `<index>: { x: .., y: .., w: .., h: .. },` entry in `text`.
///
/// `//` comment lines are skipped. The entry itself is a one-line YAML
/// mapping once the trailing comma is dropped.
pub fn parse_entry(text: &str) -> Result<(usize, Rect), RecordParseError> {
    let line = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with("//"))
        .ok_or(RecordParseError::MissingEntry)?;

    let entry: BTreeMap<usize, Rect> = serde_yaml::from_str(line.trim_end_matches(','))?;
    entry.into_iter().next().ok_or(RecordParseError::MissingEntry)
}
