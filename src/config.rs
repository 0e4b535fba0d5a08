// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Viewer configuration.
//!
//! Deployment knobs read from the catalog file's `viewer` section. Every
//! field has a default so a catalog may omit the section entirely.

use serde::{Deserialize, Serialize};

/// What clicking a guide box does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GuideClickMode {
    /// Seed the selection and start the zoom in one action (end-user mode)
    #[default]
    SeedAndConfirm,
    /// Only seed the selection; the zoom must be confirmed separately (calibration mode)
    SeedOnly,
}

/// When free-form drag selection is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ManualDrag {
    /// Dragging only works while debug mode is enabled
    #[default]
    DebugOnly,
    /// Dragging always works
    Always,
}

/// Viewer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Duration of the zoom transition in milliseconds
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,

    #[serde(default)]
    pub guide_click: GuideClickMode,

    #[serde(default)]
    pub manual_drag: ManualDrag,

    /// Minimum region width (percent) before the zoom command is offered
    #[serde(default = "default_min_confirm_width")]
    pub min_confirm_width: f64,

    /// Clamp drag coordinates to the viewport
    #[serde(default = "default_clamp_to_viewport")]
    pub clamp_to_viewport: bool,
}

fn default_transition_ms() -> u64 {
    2000
}

fn default_min_confirm_width() -> f64 {
    5.0
}

fn default_clamp_to_viewport() -> bool {
    true
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_transition_ms(),
            guide_click: GuideClickMode::default(),
            manual_drag: ManualDrag::default(),
            min_confirm_width: default_min_confirm_width(),
            clamp_to_viewport: default_clamp_to_viewport(),
        }
    }
}
