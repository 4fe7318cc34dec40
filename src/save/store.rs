use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::core::EconomyEngine;

use super::{
    apply_save_data, export_to_base64, import_from_base64, load_from_json_string,
    save_data_from_engine, save_to_json_string,
};

/// Key the game is saved under.
pub const SAVE_KEY: &str = "idle_miner_save";
/// Key a save that failed to load is copied to, so later saves cannot destroy it.
pub const REJECTED_SAVE_KEY: &str = "idle_miner_save.rejected";
/// Key holding a base64 save for copying between installs.
pub const TRANSFER_KEY: &str = "idle_miner_transfer";

/// A key-value store of text blobs.
pub trait BlobStore {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&mut self, key: &str, blob: &str) -> Result<()>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobStore for FileBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("failed reading save file: {}", path.display()))
            }
        }
    }

    fn write(&mut self, key: &str, blob: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed creating save directory: {}", self.dir.display()))?;
        let path = self.path_for(key);
        fs::write(&path, blob)
            .with_context(|| format!("failed writing save file: {}", path.display()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryBlobStore {
    entries: BTreeMap<String, String>,
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, blob: &str) -> Result<()> {
        self.entries.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    NoSavedGame,
}

pub fn save_game<S: BlobStore + ?Sized>(engine: &EconomyEngine, store: &mut S) -> Result<()> {
    let json = save_to_json_string(&save_data_from_engine(engine))?;
    store.write(SAVE_KEY, &json)?;
    info!(key = SAVE_KEY, bytes = json.len(), "game saved");
    Ok(())
}

/// Loads the saved game into `engine`. A missing save is not an error and
/// leaves the engine as it was.
pub fn load_game<S: BlobStore + ?Sized>(
    engine: &mut EconomyEngine,
    store: &S,
) -> Result<LoadOutcome> {
    let Some(json) = store.read(SAVE_KEY)? else {
        info!(key = SAVE_KEY, "no saved game");
        return Ok(LoadOutcome::NoSavedGame);
    };
    let save = load_from_json_string(&json)?;
    apply_save_data(engine, &save)?;
    info!(key = SAVE_KEY, "game loaded");
    Ok(LoadOutcome::Loaded)
}

/// Copies the blob under [`SAVE_KEY`] to [`REJECTED_SAVE_KEY`]. Returns
/// whether there was anything to copy.
pub fn preserve_rejected_save<S: BlobStore + ?Sized>(store: &mut S) -> Result<bool> {
    let Some(blob) = store.read(SAVE_KEY)? else {
        return Ok(false);
    };
    store.write(REJECTED_SAVE_KEY, &blob)?;
    warn!(
        from = SAVE_KEY,
        to = REJECTED_SAVE_KEY,
        "kept a copy of the rejected save"
    );
    Ok(true)
}

/// Writes the game as base64 under [`TRANSFER_KEY`] and returns the encoding.
pub fn export_game<S: BlobStore + ?Sized>(engine: &EconomyEngine, store: &mut S) -> Result<String> {
    let encoded = export_to_base64(&save_data_from_engine(engine))?;
    store.write(TRANSFER_KEY, &encoded)?;
    info!(key = TRANSFER_KEY, "game exported");
    Ok(encoded)
}

/// Replaces the game with the base64 save under [`TRANSFER_KEY`].
pub fn import_game<S: BlobStore + ?Sized>(
    engine: &mut EconomyEngine,
    store: &S,
) -> Result<LoadOutcome> {
    let Some(encoded) = store.read(TRANSFER_KEY)? else {
        info!(key = TRANSFER_KEY, "nothing to import");
        return Ok(LoadOutcome::NoSavedGame);
    };
    let save = import_from_base64(&encoded)?;
    apply_save_data(engine, &save)?;
    info!(key = TRANSFER_KEY, "game imported");
    Ok(LoadOutcome::Loaded)
}
