//! Track domain: stage spawn, parallax scroll and win detection.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::RunWonEvent;
use crate::movement::{Player, PlayerPose};
use crate::track::components::{Backdrop, Goal};
use crate::track::resources::{GoalLatch, TrackTuning};
use crate::track::{GROUND_Y, screen_to_world_x};

const BACKDROP_SPACING: f32 = 480.0;
const BACKDROP_COUNT: usize = 8;
const BACKDROP_PATTERN_W: f32 = BACKDROP_SPACING * BACKDROP_COUNT as f32;

const CAVE_SIZE: Vec2 = Vec2::new(120.0, 150.0);
const CAVE_MARGIN: f32 = 10.0;

pub(crate) fn spawn_stage(mut commands: Commands) {
    // Walking surface.
    commands.spawn((
        Sprite {
            color: Color::srgb(0.27, 0.21, 0.15),
            custom_size: Some(Vec2::new(4096.0, 140.0)),
            ..default()
        },
        Transform::from_xyz(0.0, GROUND_Y - 70.0, -5.0),
    ));

    // Repeating hills behind the track, shifted by the parallax offset.
    for i in 0..BACKDROP_COUNT {
        let height = 140.0 + 60.0 * (i % 3) as f32;
        commands.spawn((
            Backdrop {
                base_x: i as f32 * BACKDROP_SPACING,
            },
            Sprite {
                color: Color::srgb(0.18, 0.26, 0.2),
                custom_size: Some(Vec2::new(340.0, height)),
                ..default()
            },
            Transform::from_xyz(i as f32 * BACKDROP_SPACING, GROUND_Y + height / 2.0, -10.0),
        ));
    }

    // The cave, pinned to the viewport's right edge, revealed near the end.
    commands.spawn((
        Goal,
        Sprite {
            color: Color::srgb(0.12, 0.09, 0.14),
            custom_size: Some(CAVE_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, GROUND_Y + CAVE_SIZE.y / 2.0, -2.0),
        Visibility::Hidden,
    ));
}

pub(crate) fn reset_goal_latch(mut latch: ResMut<GoalLatch>) {
    latch.reset();
}

/// Wrap offset for the repeating backdrop pattern.
pub(crate) fn parallax_offset(world_progress: f32, factor: f32, pattern_width: f32) -> f32 {
    (world_progress * factor).rem_euclid(pattern_width)
}

/// World position of a backdrop element after the parallax shift, wrapped so
/// the pattern tiles across the viewport.
pub(crate) fn backdrop_x(base_x: f32, offset: f32, pattern_width: f32) -> f32 {
    (base_x - offset).rem_euclid(pattern_width) - pattern_width / 2.0
}

pub(crate) fn update_parallax(
    tuning: Res<TrackTuning>,
    player: Query<&PlayerPose, With<Player>>,
    mut backdrops: Query<(&Backdrop, &mut Transform)>,
) {
    let Ok(pose) = player.single() else {
        return;
    };
    let offset = parallax_offset(pose.world_progress, tuning.parallax_factor, BACKDROP_PATTERN_W);

    for (backdrop, mut transform) in &mut backdrops {
        transform.translation.x = backdrop_x(backdrop.base_x, offset, BACKDROP_PATTERN_W);
    }
}

pub(crate) fn update_goal_visibility(
    tuning: Res<TrackTuning>,
    window: Query<&Window, With<PrimaryWindow>>,
    player: Query<&PlayerPose, With<Player>>,
    mut goal: Query<(&mut Transform, &mut Visibility), With<Goal>>,
) {
    let Ok(window) = window.single() else {
        return;
    };
    let Ok(pose) = player.single() else {
        return;
    };
    let Ok((mut transform, mut visibility)) = goal.single_mut() else {
        return;
    };

    let viewport_width = window.width();
    transform.translation.x = screen_to_world_x(
        viewport_width - CAVE_MARGIN - CAVE_SIZE.x,
        viewport_width,
        CAVE_SIZE.x,
    );

    *visibility = if pose.world_progress > tuning.length - viewport_width * tuning.goal_reveal_viewports
    {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
}

pub(crate) fn check_goal_reached(
    tuning: Res<TrackTuning>,
    mut latch: ResMut<GoalLatch>,
    player: Query<&PlayerPose, With<Player>>,
    mut won: MessageWriter<RunWonEvent>,
) {
    let Ok(pose) = player.single() else {
        return;
    };
    if pose.world_progress >= tuning.length && latch.try_latch() {
        won.write(RunWonEvent);
    }
}
