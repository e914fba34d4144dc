//! Collision domain: fixed-cadence AABB checks and outcome classification.

pub(crate) mod aabb;
mod events;
mod resources;
mod systems;


pub use events::{HitEvent, StompEvent};
pub use resources::{CollisionTicker, CollisionTuning, Invincibility};

use bevy::prelude::*;

use crate::collision::systems::check_collisions;
use crate::core::GameState;

pub struct CollisionPlugin;

impl Plugin for CollisionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CollisionTicker>()
            .init_resource::<CollisionTuning>()
            .init_resource::<Invincibility>()
            .add_message::<StompEvent>()
            .add_message::<HitEvent>()
            .add_systems(
                Update,
                check_collisions.run_if(in_state(GameState::Running)),
            );
    }
}
