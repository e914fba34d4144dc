//! Core domain: run state machine, loss latch and camera.

mod events;
mod resources;
mod state;
mod systems;


pub use events::RunWonEvent;
pub use resources::LossLatch;
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{
    handle_hit, handle_run_won, log_run_started, setup_camera, tick_loss_latch,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<LossLatch>()
            .add_message::<RunWonEvent>()
            .insert_resource(ClearColor(Color::srgb(0.47, 0.65, 0.84)))
            .add_systems(Startup, setup_camera)
            .add_systems(Update, tick_loss_latch)
            .add_systems(
                Update,
                (handle_run_won, handle_hit).run_if(in_state(GameState::Running)),
            )
            .add_systems(OnEnter(GameState::Running), log_run_started);
    }
}
