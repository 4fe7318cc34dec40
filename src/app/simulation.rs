use bevy::prelude::*;
use idle_miner::{
    LoadOutcome, TRANSFER_KEY, export_game, format_amount, import_game, load_game,
    preserve_rejected_save, save_game,
};

use super::resources::{EconomyAction, SessionState};

pub fn apply_economy_actions(
    mut actions: EventReader<EconomyAction>,
    mut session: ResMut<SessionState>,
) {
    for action in actions.read() {
        match *action {
            EconomyAction::Click => session.engine.click(),
            EconomyAction::BuyUpgrade(kind) => {
                if let Err(err) = session.engine.buy_upgrade(kind) {
                    debug!("purchase refused: {err}");
                }
            }
            EconomyAction::UnlockTech(kind) => match session.engine.unlock_tech(kind) {
                Ok(()) => session.status_line = format!("Unlocked {}", kind.label()),
                Err(err) => debug!("unlock refused: {err}"),
            },
            EconomyAction::Rebirth => match session.engine.rebirth() {
                Ok(gain) => {
                    session.status_line = format!("Reborn for {} dark matter", format_amount(gain));
                }
                Err(err) => debug!("rebirth refused: {err}"),
            },
            EconomyAction::Save => save_session(&mut session),
            EconomyAction::Load => load_session(&mut session),
            EconomyAction::Export => export_session(&mut session),
            EconomyAction::Import => import_session(&mut session),
        }
    }
}

pub fn tick_economy(time: Res<Time>, mut session: ResMut<SessionState>) {
    let steps = session
        .tick_timer
        .tick(time.delta())
        .times_finished_this_tick();

    session.engine.tick_many(steps);
}

pub fn autosave_session(time: Res<Time>, mut session: ResMut<SessionState>) {
    if !session.autosave_timer.tick(time.delta()).just_finished() || !session.autosave_enabled {
        return;
    }
    let session = &mut *session;
    session.status_line = match save_game(&session.engine, &mut session.store) {
        Ok(()) => "Autosaved".to_string(),
        Err(err) => {
            warn!("autosave failed: {err:#}");
            format!("Autosave failed: {err}")
        }
    };
}

fn save_session(session: &mut SessionState) {
    session.status_line = match save_game(&session.engine, &mut session.store) {
        Ok(()) => {
            session.autosave_enabled = true;
            "Game saved".to_string()
        }
        Err(err) => {
            warn!("save failed: {err:#}");
            format!("Save failed: {err}")
        }
    };
}

fn load_session(session: &mut SessionState) {
    session.status_line = match load_game(&mut session.engine, &session.store) {
        Ok(LoadOutcome::Loaded) => {
            session.autosave_enabled = true;
            "Game loaded".to_string()
        }
        Ok(LoadOutcome::NoSavedGame) => "No saved game".to_string(),
        Err(err) => {
            warn!("load failed: {err:#}");
            session.autosave_enabled = false;
            if let Err(copy_err) = preserve_rejected_save(&mut session.store) {
                warn!("could not keep a copy of the rejected save: {copy_err:#}");
            }
            format!("Load failed, autosave off: {err}")
        }
    };
}

fn export_session(session: &mut SessionState) {
    session.status_line = match export_game(&session.engine, &mut session.store) {
        Ok(encoded) => {
            info!("exported save: {encoded}");
            format!("Save exported to {TRANSFER_KEY}")
        }
        Err(err) => {
            warn!("export failed: {err:#}");
            format!("Export failed: {err}")
        }
    };
}

fn import_session(session: &mut SessionState) {
    session.status_line = match import_game(&mut session.engine, &session.store) {
        Ok(LoadOutcome::Loaded) => "Save imported".to_string(),
        Ok(LoadOutcome::NoSavedGame) => format!("Nothing to import in {TRANSFER_KEY}"),
        Err(err) => {
            warn!("import failed: {err:#}");
            format!("Import failed: {err}")
        }
    };
}
