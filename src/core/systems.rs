//! Core domain: run flow systems.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::collision::HitEvent;
use crate::core::events::RunWonEvent;
use crate::core::resources::LossLatch;
use crate::core::state::GameState;
use crate::track::TrackTuning;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn log_run_started(track: Res<TrackTuning>) {
    info!("Run started, {:.0}px of track to the cave", track.length);
}

pub(crate) fn handle_run_won(
    mut events: MessageReader<RunWonEvent>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    for _ in events.read() {
        info!("Reached the cave, run won");
        game_state.set(GameState::Won);
    }
}

/// A hit ends the run unless the latch is already held.
pub(crate) fn handle_hit(
    mut events: MessageReader<HitEvent>,
    mut latch: ResMut<LossLatch>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    for _ in events.read() {
        if !latch.try_lock() {
            continue;
        }
        info!("Hit by the critter, run lost");
        game_state.set(GameState::Lost);
    }
}

pub(crate) fn tick_loss_latch(time: Res<Time>, mut latch: ResMut<LossLatch>) {
    latch.tick(time.delta());
}
