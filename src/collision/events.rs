//! Collision domain: outcome messages for the run controller.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Fired when the player stomps an obstacle from above.
#[derive(Debug)]
pub struct StompEvent {
    pub obstacle: Entity,
}

impl Message for StompEvent {}

/// Fired on plain body contact with an obstacle.
#[derive(Debug)]
pub struct HitEvent;

impl Message for HitEvent {}
