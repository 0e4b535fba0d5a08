// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project catalog.
//!
//! This module defines the static configuration the viewer reads: an ordered
//! set of projects, each a sequence of frame identifiers plus a sparse map of
//! precomputed guide rectangles.

use super::region::Rect;
use crate::config::ViewerConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named sequence of nested frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Folder holding the frame files, relative to the catalog's directory
    #[serde(default)]
    pub folder: String,
    pub frames: Vec<String>,
    /// Guide rectangle per frame index (not every frame has one)
    #[serde(default)]
    pub guides: BTreeMap<usize, Rect>,
}

impl Project {
    /// Number of frames in the sequence.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Index of the last frame.
    pub fn last_step(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }

    /// Frame identifier at the given step.
    pub fn frame(&self, step: usize) -> Option<&str> {
        self.frames.get(step).map(String::as_str)
    }

    /// Check whether a frame follows the given step.
    pub fn has_next(&self, step: usize) -> bool {
        step + 1 < self.frames.len()
    }

    /// Guide rectangle for the given step, if one is defined.
    pub fn guide(&self, step: usize) -> Option<Rect> {
        self.guides.get(&step).copied()
    }
}

/// The full catalog: viewer settings plus the ordered list of projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub viewer: ViewerConfig,
    pub projects: Vec<Project>,
}

impl Catalog {
    /// Check the catalog is usable: at least one project, unique ids and
    /// no empty frame sequence.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.projects.is_empty() {
            anyhow::bail!("catalog contains no projects");
        }
        for (i, project) in self.projects.iter().enumerate() {
            if project.frames.is_empty() {
                anyhow::bail!("project '{}' has no frames", project.id);
            }
            if self.projects[..i].iter().any(|p| p.id == project.id) {
                anyhow::bail!("duplicate project id '{}'", project.id);
            }
            if let Some(&step) = project.guides.keys().find(|&&s| s >= project.len()) {
                log::warn!(
                    "project '{}' has a guide for step {} beyond its {} frames",
                    project.id,
                    step,
                    project.len()
                );
            }
        }
        Ok(())
    }
}
