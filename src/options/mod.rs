//! Centralized viewer options with TOML preset support.
//!
//! All tweakable settings (zoom tuning, camera pose, HUD fading, key chords,
//! the weapon roster) are consolidated here. Options serialize to/from TOML.

mod camera;
mod hud;
mod keybindings;
mod roster;
mod zoom;

use std::path::Path;

pub use camera::CameraOptions;
pub use hud::HudOptions;
pub use keybindings::KeybindingOptions;
pub use roster::{InitialSelection, RosterOptions, WeaponSpec};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use zoom::{ZoomOptions, ZoomTiming};

use crate::camera::zoom::{FOVY_MAX, FOVY_MIN};
use crate::error::ArsenalError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[zoom]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Smoothed zoom tuning.
    pub zoom: ZoomOptions,
    /// Camera pose and projection parameters.
    pub camera: CameraOptions,
    /// HUD fading and frame pacing.
    pub hud: HudOptions,
    /// Key chord options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
    /// Weapon roster.
    #[schemars(skip)]
    pub roster: RosterOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ArsenalError::OptionsParse`] for malformed TOML or values
    /// rejected by [`validate`](Self::validate), and
    /// [`ArsenalError::InvalidChord`] for unparsable key bindings.
    pub fn from_toml_str(content: &str) -> Result<Self, ArsenalError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| ArsenalError::OptionsParse(e.to_string()))?;
        opts.validate()?;
        opts.keybindings.rebuild_chords()?;
        Ok(opts)
    }

    /// Check values that would break the zoom or camera invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ArsenalError::OptionsParse`] for a non-positive or
    /// non-finite zoom rate, or a starting fovy outside
    /// [`FOVY_MIN`]..=[`FOVY_MAX`].
    pub fn validate(&self) -> Result<(), ArsenalError> {
        self.zoom.validate()?;
        if !(FOVY_MIN..=FOVY_MAX).contains(&self.camera.fovy) {
            return Err(ArsenalError::OptionsParse(format!(
                "camera.fovy must lie in [{FOVY_MIN}, {FOVY_MAX}], got {}",
                self.camera.fovy
            )));
        }
        Ok(())
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ArsenalError::Io`] if the file cannot be read, otherwise
    /// the errors of [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &Path) -> Result<Self, ArsenalError> {
        let content = std::fs::read_to_string(path).map_err(ArsenalError::Io)?;
        let opts = Self::from_toml_str(&content)?;
        log::info!("Loaded options from {}", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`ArsenalError`] if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), ArsenalError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ArsenalError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ArsenalError::Io)?;
        }
        std::fs::write(path, content).map_err(ArsenalError::Io)
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
