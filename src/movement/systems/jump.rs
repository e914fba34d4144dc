//! Movement domain: jump controller systems.

use bevy::prelude::*;

use crate::movement::components::{JumpState, Player};
use crate::movement::model;
use crate::movement::resources::{JumpTuning, MovementInput};

pub(crate) fn tick_jump_timers(time: Res<Time>, mut query: Query<&mut JumpState, With<Player>>) {
    let dt = time.delta_secs();
    for mut jump in &mut query {
        jump.tick(dt);
    }
}

/// Start a jump on a fresh press. A no-op while airborne; the begin guard is
/// the re-entrancy check.
pub(crate) fn trigger_jump(
    mut input: ResMut<MovementInput>,
    tuning: Res<JumpTuning>,
    mut query: Query<&mut JumpState, With<Player>>,
) {
    if !input.jump_pressed {
        return;
    }
    let Ok(mut jump) = query.single_mut() else {
        return;
    };

    let facing = model::resolve_jump_direction(&input);
    if !jump.begin(facing, &tuning) {
        return;
    }
    input.last_facing = facing;
    debug!("Jump: facing {:?}, boost {:+.0}px/s", facing, jump.boost_vx);
}
