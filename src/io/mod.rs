// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for catalogs and frame images.

pub mod media;
pub mod serialization;
