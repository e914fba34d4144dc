//! Obstacle domain: the single recurring critter on the track.

mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Obstacle, ObstacleState, PatrolCycle};
pub use resources::ObstacleTuning;

use bevy::prelude::*;

use crate::core::GameState;
use crate::obstacle::systems::{
    animate_patrol, handle_stomp, reset_obstacle, spawn_obstacle, tick_stomp_fade,
};

pub struct ObstaclePlugin;

impl Plugin for ObstaclePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ObstacleTuning>()
            .add_systems(Startup, spawn_obstacle)
            .add_systems(OnEnter(GameState::Running), reset_obstacle)
            .add_systems(
                Update,
                (animate_patrol, handle_stomp, tick_stomp_fade)
                    .chain()
                    .run_if(in_state(GameState::Running)),
            );
    }
}
