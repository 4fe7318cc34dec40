mod input;
mod resources;
mod setup;
mod simulation;
mod state;
mod view;

use bevy::prelude::*;

use resources::{EconomyAction, RuntimeConfig};
use state::AppPhase;

pub struct IdleMinerAppPlugin;

impl Plugin for IdleMinerAppPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppPhase>()
            .init_resource::<RuntimeConfig>()
            .add_event::<EconomyAction>()
            .add_systems(Startup, setup::spawn_camera)
            .add_systems(OnEnter(AppPhase::Boot), setup::bootstrap_session)
            .add_systems(OnEnter(AppPhase::InGame), view::spawn_hud)
            .add_systems(
                Update,
                (
                    input::handle_keyboard_controls,
                    input::emit_mouse_actions,
                    simulation::apply_economy_actions,
                    simulation::tick_economy,
                    simulation::autosave_session,
                    view::refresh_hud,
                )
                    .chain()
                    .run_if(in_state(AppPhase::InGame)),
            );
    }
}
