//! Centralized configuration with TOML preset support.
//!
//! All tweakable settings (camera projection, navigation behavior,
//! keybindings) are consolidated here. Options serialize to/from TOML
//! so presets can be stored on disk and edited by hand.

mod camera;
mod keybindings;
mod navigation;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
pub use navigation::NavigationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[navigation]`) work
/// correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Navigation controller parameters.
    pub navigation: NavigationOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let content = std::fs::read_to_string(path).map_err(NavError::Io)?;
        let mut options: Self = toml::from_str(&content)
            .map_err(|e| NavError::OptionsParse(e.to_string()))?;
        // The reverse map is serde-skipped, so a deserialized value
        // starts without one.
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), NavError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NavError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(NavError::Io)?;
        }
        std::fs::write(path, content).map_err(NavError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
