//! Movement domain: player spawn, per-frame motion step and transform sync.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::movement::components::{JumpState, Player, PlayerPose};
use crate::movement::model;
use crate::movement::resources::{JumpTuning, MovementInput, MovementTuning};
use crate::track::{GROUND_Y, TrackTuning, screen_to_world_x};

pub(crate) fn spawn_player(mut commands: Commands, tuning: Res<MovementTuning>) {
    commands.spawn((
        Player,
        PlayerPose {
            screen_x: tuning.start_screen_x,
            world_progress: 0.0,
        },
        JumpState::default(),
        Sprite {
            color: Color::srgb(0.62, 0.44, 0.26),
            custom_size: Some(Vec2::new(tuning.player_width, tuning.player_height)),
            ..default()
        },
        Transform::from_xyz(0.0, GROUND_Y + tuning.player_height / 2.0, 0.0),
    ));
}

/// Back to the start of the track for a fresh run. Input and jump state
/// persist across runs otherwise, so they reset here too.
pub(crate) fn reset_player(
    tuning: Res<MovementTuning>,
    mut input: ResMut<MovementInput>,
    mut query: Query<(&mut PlayerPose, &mut JumpState), With<Player>>,
) {
    input.reset();
    for (mut pose, mut jump) in &mut query {
        pose.screen_x = tuning.start_screen_x;
        pose.world_progress = 0.0;
        jump.reset();
    }
}

/// The motion model: one clamped integration step per frame.
pub(crate) fn advance_player(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    jump_tuning: Res<JumpTuning>,
    track: Res<TrackTuning>,
    window: Query<&Window, With<PrimaryWindow>>,
    mut query: Query<(&mut PlayerPose, &JumpState), With<Player>>,
) {
    let Ok(window) = window.single() else {
        return;
    };
    let viewport_width = window.width();

    for (mut pose, jump) in &mut query {
        model::step_pose(
            &mut pose,
            &input,
            jump,
            &tuning,
            &jump_tuning,
            track.length,
            track.near_end_viewports,
            viewport_width,
            time.delta_secs(),
        );
    }
}

pub(crate) fn sync_player_transform(
    tuning: Res<MovementTuning>,
    jump_tuning: Res<JumpTuning>,
    window: Query<&Window, With<PrimaryWindow>>,
    mut query: Query<(&PlayerPose, &JumpState, &mut Transform), With<Player>>,
) {
    let Ok(window) = window.single() else {
        return;
    };
    let viewport_width = window.width();

    for (pose, jump, mut transform) in &mut query {
        transform.translation.x =
            screen_to_world_x(pose.screen_x, viewport_width, tuning.player_width);
        transform.translation.y = GROUND_Y
            + tuning.player_height / 2.0
            + model::jump_arc_offset(jump.air_timer, jump_tuning.air_time, jump_tuning.arc_height);
    }
}
