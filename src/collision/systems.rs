//! Collision domain: the fixed-cadence check against the single obstacle.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::collision::aabb::{CollisionOutcome, classify, sprite_rect};
use crate::collision::events::{HitEvent, StompEvent};
use crate::collision::resources::{CollisionTicker, CollisionTuning, Invincibility};
use crate::core::LossLatch;
use crate::movement::{JumpState, Player};
use crate::obstacle::{Obstacle, ObstacleState};

/// Tick the wall-clock cadence and classify overlaps when it fires. Runs
/// every frame but only checks geometry on the ticker interval.
pub(crate) fn check_collisions(
    time: Res<Time>,
    mut ticker: ResMut<CollisionTicker>,
    tuning: Res<CollisionTuning>,
    latch: Res<LossLatch>,
    invincibility: Res<Invincibility>,
    player: Query<(&Transform, &Sprite, &JumpState), With<Player>>,
    obstacles: Query<(Entity, &Transform, &Sprite, &ObstacleState), With<Obstacle>>,
    mut stomps: MessageWriter<StompEvent>,
    mut hits: MessageWriter<HitEvent>,
) {
    ticker.timer.tick(time.delta());
    if !ticker.timer.just_finished() {
        return;
    }

    let Ok((player_tf, player_sprite, jump)) = player.single() else {
        return;
    };
    let player_box = sprite_rect(
        player_tf.translation.truncate(),
        player_sprite.custom_size.unwrap_or(Vec2::ZERO),
    );

    for (entity, obstacle_tf, obstacle_sprite, state) in &obstacles {
        // A stomped obstacle has no box until it respawns.
        if state.is_hidden() {
            continue;
        }
        let obstacle_box = sprite_rect(
            obstacle_tf.translation.truncate(),
            obstacle_sprite.custom_size.unwrap_or(Vec2::ZERO),
        );

        match classify(player_box, obstacle_box, jump.airborne, tuning.stomp_tolerance) {
            Some(CollisionOutcome::Stomp) => {
                stomps.write(StompEvent { obstacle: entity });
            }
            Some(CollisionOutcome::Hit) => {
                if !latch.is_locked() && !invincibility.enabled {
                    hits.write(HitEvent);
                }
            }
            None => {}
        }
    }
}
