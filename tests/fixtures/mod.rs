//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use figma_token_sync::models::{CollectionConfig, CollectionEntry};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Collection configuration JSON with a dual-mode semantic collection.
pub const COLLECTIONS_JSON: &str = r#"{
    "semantic": {"name": "Semantic", "modeId": "light", "secondaryModeId": "dark"},
    "color": {"name": "Color", "modeId": "color"},
    "unused": {"name": "Unused", "modeId": "unused"},
    "default": {"name": "Default", "modeId": "default"}
}"#;

/// A small Style Dictionary export covering colors, themes, dimensions,
/// line heights, letter spacing, fonts, aliases, and metadata keys.
pub const TOKENS_JSON: &str = r##"{
    "$description": "sample export",
    "color": {
        "$type": "color",
        "brand": {
            "red": {
                "$value": "#ee0000",
                "name": "rh-color-brand-red",
                "path": ["color", "brand", "red"],
                "attributes": {"category": "color", "type": "brand", "hex": "ee0000"}
            },
            "red-light": {
                "$value": "#f56e6e",
                "name": "rh-color-brand-red-light",
                "path": ["color", "brand", "red-light"],
                "attributes": {"category": "color", "type": "brand", "hex": "f56e6e"}
            }
        },
        "text": {
            "primary-on-dark": {
                "$value": "#ffffff",
                "name": "rh-color-text-primary-on-dark",
                "path": ["color", "text", "primary-on-dark"],
                "attributes": {"category": "color", "type": "text", "hex": "ffffff"}
            },
            "white": {
                "$value": "#fff",
                "name": "rh-color-white",
                "path": ["color", "text", "white"],
                "attributes": {"category": "color", "type": "text", "hex": "ffffff"}
            }
        },
        "link": {
            "$value": "#0066cc",
            "name": "rh-color-link",
            "path": ["color", "link"],
            "attributes": {"category": "color", "type": "link", "hex": "0066cc"},
            "original": {"$value": "{color.blue.50}"}
        }
    },
    "space": {
        "$extensions": {"generator": "test"},
        "md": {
            "$value": "8px",
            "name": "rh-space-md",
            "path": ["space", "md"],
            "attributes": {"category": "space", "type": "md"}
        }
    },
    "line-height": {
        "body": {"$value": "1.5", "name": "rh-line-height-body", "path": ["line-height", "body"]}
    },
    "letter-spacing": {
        "$type": "number",
        "wide": {"$value": "0.05", "name": "rh-letter-spacing-wide", "path": ["letter-spacing", "wide"]}
    },
    "font": {
        "family": {
            "heading": {
                "$value": "Red Hat Display",
                "name": "rh-font-family-heading",
                "path": ["font", "family", "heading"],
                "attributes": {"category": "font", "type": "family"}
            }
        }
    }
}"##;

/// Parsed [`COLLECTIONS_JSON`].
pub fn collections() -> CollectionConfig {
    CollectionConfig::from_json_str(COLLECTIONS_JSON).expect("fixture collections are valid")
}

/// Minimal configuration: `color` plus the required `default`.
pub fn color_and_default() -> CollectionConfig {
    CollectionConfig::new()
        .with("color", CollectionEntry::new("Color", "color"))
        .with("default", CollectionEntry::new("Default", "default"))
}

/// Writes a file into a fresh temp directory.
///
/// The `TempDir` must be kept alive for the file to exist.
pub fn create_temp_file(name: &str, content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write temp file");
    (path, temp_dir)
}
