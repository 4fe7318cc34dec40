use anyhow::Result;
use bevy::prelude::*;
use idle_miner::{
    EconomyCatalog, EconomyEngine, FileBlobStore, LoadOutcome, load_catalog_from_path, load_game,
    preserve_rejected_save,
};

use super::resources::{RuntimeConfig, SessionState};
use super::state::AppPhase;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Name::new("PrimaryCamera"), Camera2d));
}

pub fn bootstrap_session(
    mut commands: Commands,
    config: Res<RuntimeConfig>,
    mut next_phase: ResMut<NextState<AppPhase>>,
) {
    let mut engine = match build_engine(&config) {
        Ok(engine) => engine,
        Err(err) => {
            warn!("falling back to built-in economy: {err:#}");
            EconomyEngine::default()
        }
    };

    let mut store = FileBlobStore::new(config.save_dir.clone());
    let mut autosave_enabled = true;
    let status_line = match load_game(&mut engine, &store) {
        Ok(LoadOutcome::Loaded) => "Loaded saved game".to_string(),
        Ok(LoadOutcome::NoSavedGame) => "New game".to_string(),
        Err(err) => {
            warn!("could not load saved game: {err:#}");
            autosave_enabled = false;
            if let Err(copy_err) = preserve_rejected_save(&mut store) {
                warn!("could not keep a copy of the rejected save: {copy_err:#}");
            }
            format!("Load failed, autosave off: {err}")
        }
    };
    info!(save_dir = %config.save_dir.display(), "session ready");

    commands.insert_resource(SessionState {
        engine,
        store,
        tick_timer: Timer::from_seconds(config.tick_seconds.max(0.01), TimerMode::Repeating),
        autosave_timer: Timer::from_seconds(
            config.autosave_interval_seconds.max(1.0),
            TimerMode::Repeating,
        ),
        autosave_enabled,
        status_line,
    });

    next_phase.set(AppPhase::InGame);
}

fn build_engine(config: &RuntimeConfig) -> Result<EconomyEngine> {
    let catalog = match &config.catalog_path {
        Some(path) => load_catalog_from_path(path)?,
        None => EconomyCatalog::default(),
    };
    catalog.build_engine()
}
