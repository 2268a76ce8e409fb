use std::path::{Path, PathBuf};

use super::{AssetBackend, TextureSlot};
use crate::error::ArsenalError;

/// Model handle from [`FsAssets`]: the file path plus attached textures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsModel {
    /// Model file.
    pub path: PathBuf,
    /// Textures bound to the model's material.
    pub textures: Vec<(TextureSlot, FsTexture)>,
}

impl FsModel {
    /// Texture bound to `slot`, if any.
    #[must_use]
    pub fn texture(&self, slot: TextureSlot) -> Option<&FsTexture> {
        self.textures
            .iter()
            .find(|(bound, _)| *bound == slot)
            .map(|(_, texture)| texture)
    }
}

/// Texture handle from [`FsAssets`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsTexture {
    /// Texture file.
    pub path: PathBuf,
}

/// Filesystem backend: checks that each asset file exists and hands out
/// path-backed handles. Decoding is left to the renderer that consumes the
/// handles.
#[derive(Debug, Default)]
pub struct FsAssets {
    live_models: usize,
}

impl FsAssets {
    /// Backend with nothing loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Models loaded and not yet released.
    #[must_use]
    pub const fn live_models(&self) -> usize {
        self.live_models
    }

    fn check_file(path: &Path) -> Result<(), ArsenalError> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => Ok(()),
            Ok(_) => Err(ArsenalError::AssetLoad {
                path: path.to_owned(),
                reason: "not a regular file".to_owned(),
            }),
            Err(e) => Err(ArsenalError::AssetLoad {
                path: path.to_owned(),
                reason: e.to_string(),
            }),
        }
    }
}

impl AssetBackend for FsAssets {
    type Model = FsModel;
    type Texture = FsTexture;

    fn load_model(&mut self, path: &Path) -> Result<FsModel, ArsenalError> {
        Self::check_file(path)?;
        self.live_models += 1;
        log::debug!("Loaded model {}", path.display());
        Ok(FsModel {
            path: path.to_owned(),
            textures: Vec::new(),
        })
    }

    fn load_texture(&mut self, path: &Path) -> Result<FsTexture, ArsenalError> {
        Self::check_file(path)?;
        log::debug!("Loaded texture {}", path.display());
        Ok(FsTexture {
            path: path.to_owned(),
        })
    }

    fn attach_texture(
        &mut self,
        model: &mut FsModel,
        slot: TextureSlot,
        texture: FsTexture,
    ) {
        model.textures.retain(|(bound, _)| *bound != slot);
        model.textures.push((slot, texture));
    }

    fn unload_model(&mut self, model: FsModel) {
        self.live_models = self.live_models.saturating_sub(1);
        log::debug!(
            "Unloaded model {} ({} textures)",
            model.path.display(),
            model.textures.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("arsenal-fs-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_file_is_an_asset_error() {
        let mut assets = FsAssets::new();
        let err = assets
            .load_model(Path::new("definitely/not/here.obj"))
            .unwrap_err();
        assert!(matches!(err, ArsenalError::AssetLoad { .. }));
        assert_eq!(assets.live_models(), 0);
    }

    #[test]
    fn directory_is_not_a_model() {
        let dir = scratch_dir("dir");
        let mut assets = FsAssets::new();
        assert!(assets.load_model(&dir).is_err());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn loads_attaches_and_unloads() {
        let dir = scratch_dir("load");
        let model_path = dir.join("Model.obj");
        let texture_path = dir.join("BaseColor.png");
        std::fs::write(&model_path, b"o weapon\n").unwrap();
        std::fs::write(&texture_path, b"png").unwrap();

        let mut assets = FsAssets::new();
        let mut model = assets.load_model(&model_path).unwrap();
        let texture = assets.load_texture(&texture_path).unwrap();
        assets.attach_texture(&mut model, TextureSlot::BaseColor, texture);
        assert_eq!(assets.live_models(), 1);
        assert_eq!(
            model.texture(TextureSlot::BaseColor).map(|t| t.path.clone()),
            Some(texture_path)
        );
        assert!(model.texture(TextureSlot::Normal).is_none());

        assets.unload_model(model);
        assert_eq!(assets.live_models(), 0);
        let _ = std::fs::remove_dir_all(dir);
    }
}
