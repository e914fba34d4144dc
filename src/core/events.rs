//! Core domain: run flow messages.

use bevy::ecs::message::Message;

/// Fired once when world progress reaches the end of the track.
#[derive(Debug)]
pub struct RunWonEvent;

impl Message for RunWonEvent {}
