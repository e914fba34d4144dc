//! Obstacle domain: patrol animation, stomp fade and respawn.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::collision::StompEvent;
use crate::obstacle::components::{Obstacle, ObstacleState, PatrolCycle};
use crate::obstacle::resources::ObstacleTuning;
use crate::track::{GROUND_Y, screen_to_world_x};

pub(crate) fn spawn_obstacle(mut commands: Commands, tuning: Res<ObstacleTuning>) {
    commands.spawn((
        Obstacle,
        PatrolCycle::default(),
        ObstacleState::new(tuning.fade_time, tuning.respawn_delay),
        Sprite {
            color: Color::srgb(0.58, 0.2, 0.16),
            custom_size: Some(Vec2::new(tuning.width, tuning.height)),
            ..default()
        },
        // Off-screen until the first patrol tick places it.
        Transform::from_xyz(4000.0, GROUND_Y + tuning.height / 2.0, 0.5),
    ));
}

/// Restart the patrol from its origin at the top of every run.
pub(crate) fn reset_obstacle(
    mut query: Query<(&mut ObstacleState, &mut PatrolCycle, &mut Sprite), With<Obstacle>>,
) {
    for (mut state, mut cycle, mut sprite) in &mut query {
        state.clear();
        cycle.restart();
        sprite.color = sprite.color.with_alpha(1.0);
    }
}

pub(crate) fn animate_patrol(
    time: Res<Time>,
    tuning: Res<ObstacleTuning>,
    window: Query<&Window, With<PrimaryWindow>>,
    mut query: Query<(&mut PatrolCycle, &mut Transform), With<Obstacle>>,
) {
    let Ok(window) = window.single() else {
        return;
    };
    let viewport_width = window.width();

    for (mut cycle, mut transform) in &mut query {
        cycle.advance(time.delta_secs(), tuning.patrol_period);
        let screen_x = cycle.screen_x(tuning.patrol_period, viewport_width, tuning.width);
        transform.translation.x = screen_to_world_x(screen_x, viewport_width, tuning.width);
        transform.translation.y = GROUND_Y + tuning.height / 2.0;
    }
}

pub(crate) fn handle_stomp(
    mut events: MessageReader<StompEvent>,
    mut query: Query<&mut ObstacleState, With<Obstacle>>,
) {
    for event in events.read() {
        if let Ok(mut state) = query.get_mut(event.obstacle) {
            state.begin_stomp();
            info!("Obstacle stomped, respawning at cycle start");
        }
    }
}

pub(crate) fn tick_stomp_fade(
    time: Res<Time>,
    mut query: Query<(&mut ObstacleState, &mut PatrolCycle, &mut Sprite), With<Obstacle>>,
) {
    for (mut state, mut cycle, mut sprite) in &mut query {
        if state.tick(time.delta()) {
            cycle.restart();
        }
        sprite.color = sprite.color.with_alpha(state.alpha());
    }
}
