// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: regions and the project catalog.

pub mod project;
pub mod region;
