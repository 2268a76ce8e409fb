//! Asset loading seam: the backend trait the session loads weapon models
//! through, and roster loading with all-or-nothing semantics.

mod fs;
#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

pub use fs::{FsAssets, FsModel, FsTexture};

use crate::error::ArsenalError;
use crate::options::{RosterOptions, WeaponSpec};
use crate::weapons::WeaponSet;

/// Material map a texture is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    /// Diffuse/base color.
    BaseColor,
    /// Tangent-space normal map.
    Normal,
    /// Roughness map.
    Roughness,
    /// Emission map.
    Emissive,
}

/// Loads and releases model and texture handles.
///
/// Handles are opaque to the crate. A texture attached to a model belongs
/// to it from then on and is released by [`unload_model`](Self::unload_model).
pub trait AssetBackend {
    /// Loaded model handle.
    type Model;
    /// Loaded texture handle.
    type Texture;

    /// Load a model file.
    ///
    /// # Errors
    ///
    /// Returns [`ArsenalError::AssetLoad`] if the file cannot be loaded.
    fn load_model(&mut self, path: &Path) -> Result<Self::Model, ArsenalError>;

    /// Load a texture file.
    ///
    /// # Errors
    ///
    /// Returns [`ArsenalError::AssetLoad`] if the file cannot be loaded.
    fn load_texture(
        &mut self,
        path: &Path,
    ) -> Result<Self::Texture, ArsenalError>;

    /// Bind `texture` to `slot` of `model`'s material.
    fn attach_texture(
        &mut self,
        model: &mut Self::Model,
        slot: TextureSlot,
        texture: Self::Texture,
    );

    /// Release a model and every texture attached to it.
    fn unload_model(&mut self, model: Self::Model);
}

fn texture_paths(spec: &WeaponSpec) -> [(TextureSlot, Option<&Path>); 4] {
    [
        (TextureSlot::BaseColor, spec.base_color.as_deref()),
        (TextureSlot::Normal, spec.normal.as_deref()),
        (TextureSlot::Roughness, spec.roughness.as_deref()),
        (TextureSlot::Emissive, spec.emissive.as_deref()),
    ]
}

fn load_weapon<B: AssetBackend + ?Sized>(
    backend: &mut B,
    root: &Path,
    spec: &WeaponSpec,
) -> Result<B::Model, ArsenalError> {
    let mut model = backend.load_model(&root.join(&spec.model))?;
    for (slot, path) in texture_paths(spec) {
        let Some(path) = path else { continue };
        match backend.load_texture(&root.join(path)) {
            Ok(texture) => backend.attach_texture(&mut model, slot, texture),
            Err(e) => {
                backend.unload_model(model);
                return Err(e);
            }
        }
    }
    Ok(model)
}

/// Load every weapon in `roster` through `backend`.
///
/// Either the whole roster loads or nothing stays loaded: on the first
/// failure every model already loaded is released before the error is
/// returned.
///
/// # Errors
///
/// Returns [`ArsenalError::EmptyRoster`] for a roster without weapons and
/// the backend's error for the first asset that fails to load.
pub fn load_roster<B: AssetBackend + ?Sized>(
    backend: &mut B,
    roster: &RosterOptions,
) -> Result<WeaponSet<B::Model>, ArsenalError> {
    if roster.weapons.is_empty() {
        return Err(ArsenalError::EmptyRoster);
    }

    let mut entries = Vec::with_capacity(roster.weapons.len());
    for spec in &roster.weapons {
        match load_weapon(backend, &roster.asset_root, spec) {
            Ok(model) => entries.push((spec.name.clone(), spec.scale, model)),
            Err(e) => {
                log::error!("Failed to load weapon '{}': {e}", spec.name);
                for (_, _, model) in entries {
                    backend.unload_model(model);
                }
                return Err(e);
            }
        }
    }

    let set = WeaponSet::new(entries)?;
    for slot in &set {
        log::debug!(
            "Weapon {}: {} (scale {})",
            slot.index,
            slot.name,
            slot.display_scale
        );
    }
    log::info!("Loaded {} weapons", set.len());
    Ok(set)
}

/// Release every model in `set`.
pub fn release_roster<B: AssetBackend + ?Sized>(
    backend: &mut B,
    set: WeaponSet<B::Model>,
) {
    let mut released = 0usize;
    for model in set.into_models() {
        backend.unload_model(model);
        released += 1;
    }
    log::debug!("Released {released} weapons");
}
