// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the Mosaic Zoom viewer.

pub mod canvas;
pub mod debug_panel;
pub mod frames;
pub mod toolbar;
pub mod transition;
