//! Track domain: the stage, parallax backdrop and the cave at the end.

mod components;
mod resources;
mod systems;


pub use components::{Backdrop, Goal};
pub use resources::{GoalLatch, TrackTuning};

use bevy::prelude::*;

use crate::core::GameState;
use crate::track::systems::{
    check_goal_reached, reset_goal_latch, spawn_stage, update_goal_visibility, update_parallax,
};

/// Vertical position of the walking surface in world coordinates.
pub const GROUND_Y: f32 = -200.0;

/// Convert a left-edge screen offset (px from the viewport's left edge) into
/// the world x of a sprite's center, with the camera at the origin.
pub fn screen_to_world_x(screen_x: f32, viewport_width: f32, sprite_width: f32) -> f32 {
    screen_x + sprite_width / 2.0 - viewport_width / 2.0
}

pub struct TrackPlugin;

impl Plugin for TrackPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrackTuning>()
            .init_resource::<GoalLatch>()
            .add_systems(Startup, spawn_stage)
            .add_systems(OnEnter(GameState::Running), reset_goal_latch)
            .add_systems(
                Update,
                (update_parallax, update_goal_visibility, check_goal_reached)
                    .run_if(in_state(GameState::Running)),
            );
    }
}
