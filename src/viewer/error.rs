// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Reasons a viewer operation was refused.

use thiserror::Error;

/// A precondition the operation needed did not hold. The state is unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejected {
    #[error("a zoom transition is already in flight")]
    ZoomInFlight,

    #[error("the current frame is the last one")]
    NoNextFrame,

    #[error("no region is selected")]
    NoRegion,

    #[error("region width {width} is not positive")]
    DegenerateRegion { width: f64 },

    #[error("manual drag selection requires debug mode")]
    ManualDragDisabled,

    #[error("step navigation requires debug mode")]
    DebugDisabled,

    #[error("unknown project '{0}'")]
    UnknownProject(String),
}
