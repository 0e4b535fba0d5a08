// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Catalog deserialization.
//!
//! This module handles loading project catalogs from YAML and JSON files,
//! and provides the built-in catalog used when no file is given.

use crate::models::project::Catalog;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Catalog shipped with the application.
const DEFAULT_CATALOG: &str = include_str!("../../assets/catalog.yaml");

/// A catalog together with the directory its frame folders are relative to.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub base_dir: PathBuf,
}

/// Parse a catalog from YAML text.
pub fn parse_yaml(text: &str) -> Result<Catalog> {
    let catalog: Catalog = serde_yaml::from_str(text)?;
    catalog.validate()?;
    Ok(catalog)
}

/// Parse a catalog from JSON text.
pub fn parse_json(text: &str) -> Result<Catalog> {
    let catalog: Catalog = serde_json::from_str(text)?;
    catalog.validate()?;
    Ok(catalog)
}

/// Load a catalog file, choosing the format from its extension.
pub fn load_catalog(path: &Path) -> Result<LoadedCatalog> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;

    let extension = path.extension().and_then(|s| s.to_str());
    let catalog = match extension {
        Some("yaml") | Some("yml") => parse_yaml(&text),
        Some("json") => parse_json(&text),
        _ => anyhow::bail!("Unsupported file extension: {:?}", extension),
    }
    .with_context(|| format!("Invalid catalog {}", path.display()))?;

    let base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    log::info!(
        "Loaded catalog {} with {} projects",
        path.display(),
        catalog.projects.len()
    );
    Ok(LoadedCatalog { catalog, base_dir })
}

/// The built-in catalog, with frames resolved under `assets/`.
pub fn default_catalog() -> Result<LoadedCatalog> {
    let catalog = parse_yaml(DEFAULT_CATALOG).context("Invalid built-in catalog")?;
    Ok(LoadedCatalog {
        catalog,
        base_dir: PathBuf::from("assets"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GuideClickMode;
    use crate::models::region::Rect;

    #[test]
    fn test_default_catalog() {
        let loaded = default_catalog().unwrap();
        let catalog = &loaded.catalog;

        assert_eq!(catalog.projects.len(), 2);
        let infinite = &catalog.projects[0];
        assert_eq!(infinite.id, "infinite");
        assert_eq!(infinite.name, "Infinite Zoom");
        assert_eq!(infinite.len(), 7);
        assert_eq!(infinite.guide(0), Some(Rect::new(39.39, 65.14, 20.07, 27.43)));
        assert_eq!(infinite.guide(6), None);

        let earth = &catalog.projects[1];
        assert_eq!(earth.id, "earth");
        assert_eq!(earth.len(), 21);
        assert_eq!(earth.guides.len(), 20);

        assert_eq!(loaded.base_dir, PathBuf::from("assets"));
        assert_eq!(infinite.folder, "images");
    }

    #[test]
    fn test_parse_json_with_string_keys() {
        let json = r#"{
            "viewer": { "guide_click": "seed_only" },
            "projects": [{
                "id": "demo",
                "name": "Demo",
                "frames": ["a.png", "b.png"],
                "guides": { "0": { "x": 10.0, "y": 20.0, "w": 30.0, "h": 40.0 } }
            }]
        }"#;
        let catalog = parse_json(json).unwrap();
        assert_eq!(catalog.viewer.guide_click, GuideClickMode::SeedOnly);
        assert_eq!(catalog.viewer.transition_ms, 2000);
        let demo = &catalog.projects[0];
        assert_eq!(demo.folder, "");
        assert_eq!(demo.guide(0), Some(Rect::new(10.0, 20.0, 30.0, 40.0)));
    }

    #[test]
    fn test_parse_rejects_empty_frames() {
        let yaml = "projects:\n  - id: x\n    name: X\n    frames: []\n";
        assert!(parse_yaml(yaml).is_err());
    }

    #[test]
    fn test_load_catalog_unsupported_extension() {
        let path = std::env::temp_dir().join("mosaic_zoom_catalog_test.txt");
        std::fs::write(&path, "projects: []").unwrap();
        let result = load_catalog(&path);
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn test_load_catalog_from_file() {
        let dir = std::env::temp_dir().join("mosaic_zoom_catalog_dir");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("catalog.yml");
        std::fs::write(
            &path,
            "projects:\n  - id: x\n    name: X\n    folder: shots\n    frames: [a.png]\n",
        )
        .unwrap();

        let loaded = load_catalog(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.base_dir, dir);
        assert_eq!(loaded.catalog.projects[0].folder, "shots");
    }
}
