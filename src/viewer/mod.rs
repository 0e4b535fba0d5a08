// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The viewer core: selection tracking, zoom sequencing and guide authoring.
//!
//! Nothing in here draws or touches egui; the `ui` module renders
//! [`snapshot::RenderSnapshot`]s and feeds input back through [`session::Session`].

pub mod calibration;
pub mod easing;
pub mod error;
pub mod selection;
pub mod sequencer;
pub mod session;
pub mod snapshot;
