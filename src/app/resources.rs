use std::env;
use std::path::PathBuf;

use bevy::prelude::*;
use idle_miner::{EconomyEngine, FileBlobStore, TechKind, UpgradeKind};

pub const SAVE_DIR_ENV: &str = "IDLE_MINER_SAVE_DIR";
pub const CATALOG_ENV: &str = "IDLE_MINER_CATALOG";

#[derive(Resource, Debug, Clone)]
pub struct RuntimeConfig {
    pub tick_seconds: f32,
    pub autosave_interval_seconds: f32,
    pub save_dir: PathBuf,
    pub catalog_path: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_seconds: 1.0,
            autosave_interval_seconds: 30.0,
            save_dir: env::var_os(SAVE_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("saves")),
            catalog_path: env::var_os(CATALOG_ENV).map(PathBuf::from),
        }
    }
}

#[derive(Resource, Debug)]
pub struct SessionState {
    pub engine: EconomyEngine,
    pub store: FileBlobStore,
    pub tick_timer: Timer,
    pub autosave_timer: Timer,
    /// Off after a save was rejected, until the player saves or loads explicitly.
    pub autosave_enabled: bool,
    pub status_line: String,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EconomyAction {
    Click,
    BuyUpgrade(UpgradeKind),
    UnlockTech(TechKind),
    Rebirth,
    Save,
    Load,
    Export,
    Import,
}

#[derive(Component)]
pub struct HudText;
