//! In-memory backend that counts loads and releases.

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::{AssetBackend, TextureSlot};
use crate::error::ArsenalError;

#[derive(Debug, Default)]
pub(crate) struct Ledger {
    models_loaded: Cell<usize>,
    models_unloaded: Cell<usize>,
    textures_loaded: Cell<usize>,
    textures_unloaded: Cell<usize>,
}

impl Ledger {
    pub(crate) fn models_loaded(&self) -> usize {
        self.models_loaded.get()
    }

    pub(crate) fn models_unloaded(&self) -> usize {
        self.models_unloaded.get()
    }

    pub(crate) fn textures_loaded(&self) -> usize {
        self.textures_loaded.get()
    }

    pub(crate) fn live_models(&self) -> usize {
        self.models_loaded.get() - self.models_unloaded.get()
    }

    pub(crate) fn live_textures(&self) -> usize {
        self.textures_loaded.get() - self.textures_unloaded.get()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct MockModel {
    pub(crate) path: PathBuf,
    pub(crate) textures: Vec<TextureSlot>,
}

#[derive(Debug)]
pub(crate) struct MockAssets {
    ledger: Rc<Ledger>,
    fail_on: Option<PathBuf>,
}

impl MockAssets {
    pub(crate) fn new() -> Self {
        Self {
            ledger: Rc::default(),
            fail_on: None,
        }
    }

    pub(crate) fn failing_on(path: &Path) -> Self {
        Self {
            fail_on: Some(path.to_owned()),
            ..Self::new()
        }
    }

    pub(crate) fn ledger(&self) -> Rc<Ledger> {
        Rc::clone(&self.ledger)
    }

    fn check(&self, path: &Path) -> Result<(), ArsenalError> {
        if self.fail_on.as_deref() == Some(path) {
            return Err(ArsenalError::AssetLoad {
                path: path.to_owned(),
                reason: "mock failure".to_owned(),
            });
        }
        Ok(())
    }
}

impl AssetBackend for MockAssets {
    type Model = MockModel;
    type Texture = PathBuf;

    fn load_model(&mut self, path: &Path) -> Result<MockModel, ArsenalError> {
        self.check(path)?;
        self.ledger.models_loaded.set(self.ledger.models_loaded.get() + 1);
        Ok(MockModel {
            path: path.to_owned(),
            textures: Vec::new(),
        })
    }

    fn load_texture(&mut self, path: &Path) -> Result<PathBuf, ArsenalError> {
        self.check(path)?;
        self.ledger
            .textures_loaded
            .set(self.ledger.textures_loaded.get() + 1);
        Ok(path.to_owned())
    }

    fn attach_texture(
        &mut self,
        model: &mut MockModel,
        slot: TextureSlot,
        _texture: PathBuf,
    ) {
        model.textures.push(slot);
    }

    fn unload_model(&mut self, model: MockModel) {
        self.ledger
            .models_unloaded
            .set(self.ledger.models_unloaded.get() + 1);
        self.ledger
            .textures_unloaded
            .set(self.ledger.textures_unloaded.get() + model.textures.len());
    }
}
