//! Movement domain: input state, motion model and jump controller.

mod components;
pub(crate) mod model;
mod resources;
pub(crate) mod systems;

#[cfg(test)]
mod tests;

pub use components::{Facing, JumpState, Player, PlayerPose};
pub use resources::{JumpTuning, MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::systems::{
    advance_player, read_input, reset_player, spawn_player, sync_player_transform,
    tick_jump_timers, trigger_jump,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .init_resource::<MovementTuning>()
            .init_resource::<JumpTuning>()
            .add_systems(Startup, spawn_player)
            .add_systems(OnEnter(GameState::Running), reset_player)
            .add_systems(
                Update,
                (
                    read_input,
                    tick_jump_timers,
                    trigger_jump,
                    advance_player,
                    sync_player_transform,
                )
                    .chain()
                    .run_if(in_state(GameState::Running)),
            );
    }
}
