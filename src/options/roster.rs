use std::path::PathBuf;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which slot is selected when a session starts or restarts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum InitialSelection {
    /// Always start on the first slot.
    #[default]
    First,
    /// Start on a uniformly random slot.
    Random,
}

impl InitialSelection {
    /// Pick a starting index in `[0, count)`. `count` must be non-zero.
    #[must_use]
    pub fn pick<R: Rng>(self, count: usize, rng: &mut R) -> usize {
        match self {
            Self::First => 0,
            Self::Random if count > 1 => rng.random_range(0..count),
            Self::Random => 0,
        }
    }
}

/// One weapon in the roster: its model, textures, name and display scale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeaponSpec {
    /// Display name shown in the HUD.
    pub name: String,
    /// Model file, relative to the roster's asset root.
    pub model: PathBuf,
    /// Uniform scale applied when drawing the model.
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Diffuse/base-color texture.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_color: Option<PathBuf>,
    /// Normal map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<PathBuf>,
    /// Roughness map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roughness: Option<PathBuf>,
    /// Emission map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emissive: Option<PathBuf>,
}

fn default_scale() -> f32 {
    1.0
}

impl WeaponSpec {
    /// Spec with a model and no textures.
    #[must_use]
    pub fn new(name: impl Into<String>, model: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            scale: default_scale(),
            base_color: None,
            normal: None,
            roughness: None,
            emissive: None,
        }
    }

    /// Set the display scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Set the base-color texture.
    #[must_use]
    pub fn with_base_color(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_color = Some(path.into());
        self
    }

    /// Set the normal map.
    #[must_use]
    pub fn with_normal(mut self, path: impl Into<PathBuf>) -> Self {
        self.normal = Some(path.into());
        self
    }

    /// Set the roughness map.
    #[must_use]
    pub fn with_roughness(mut self, path: impl Into<PathBuf>) -> Self {
        self.roughness = Some(path.into());
        self
    }

    /// Set the emission map.
    #[must_use]
    pub fn with_emissive(mut self, path: impl Into<PathBuf>) -> Self {
        self.emissive = Some(path.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// The fixed weapon roster loaded at session start.
pub struct RosterOptions {
    /// Directory the model and texture paths are relative to.
    pub asset_root: PathBuf,
    /// Starting slot policy.
    pub initial: InitialSelection,
    /// Weapons in display order.
    pub weapons: Vec<WeaponSpec>,
}

impl Default for RosterOptions {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("Res"),
            initial: InitialSelection::First,
            weapons: vec![
                WeaponSpec::new("PISTOL", "Pistol/Model.obj")
                    .with_base_color("Pistol/BaseColor.png")
                    .with_normal("Pistol/Normal.png")
                    .with_roughness("Pistol/Roughness.png"),
                WeaponSpec::new("MACHINE GUN", "MachineGun/Model.obj")
                    .with_scale(2.0)
                    .with_base_color("MachineGun/BaseColor.png")
                    .with_normal("MachineGun/Normal.png")
                    .with_roughness("MachineGun/Roughness.png"),
                WeaponSpec::new("RIFLE", "Rifle/Model.obj")
                    .with_scale(0.7)
                    .with_base_color("Rifle/BaseColor0.png")
                    .with_emissive("Rifle/Emissive.png"),
            ],
        }
    }
}
