//! Movement domain: pure motion model for the per-frame step.
//!
//! Everything here is a plain function of state and dt so the frame loop and
//! the collision cadence can interleave in any order without changing the
//! clamp invariants.

use crate::movement::components::{Facing, JumpState, PlayerPose};
use crate::movement::resources::{JumpTuning, MovementInput, MovementTuning};

pub(crate) fn clamp_step_dt(dt: f32, max_step_dt: f32) -> f32 {
    dt.clamp(0.0, max_step_dt)
}

/// Dynamic right bound for the on-screen position. While traveling the player
/// is held left of center; within `near_end_viewports` of the end the clamp
/// widens so they can reach the visual right edge. Never negative, even when
/// the viewport is narrower than the player.
pub(crate) fn screen_right_bound(
    viewport_width: f32,
    world_progress: f32,
    track_length: f32,
    near_end_viewports: f32,
    tuning: &MovementTuning,
) -> f32 {
    let near_end = world_progress > track_length - viewport_width * near_end_viewports;
    let bound = if near_end {
        viewport_width - tuning.player_width
    } else {
        viewport_width * tuning.right_fraction_traveling - tuning.player_width
    };
    bound.max(0.0)
}

/// One integration step for both position variables.
///
/// Screen velocity is held-direction speed plus the boost captured at jump
/// time. World velocity differs: the boost contribution is recomputed from
/// the current facing and applies regardless of which direction is held, so
/// a jump always drifts the player along their faced direction.
#[allow(clippy::too_many_arguments)]
pub(crate) fn step_pose(
    pose: &mut PlayerPose,
    input: &MovementInput,
    jump: &JumpState,
    tuning: &MovementTuning,
    jump_tuning: &JumpTuning,
    track_length: f32,
    near_end_viewports: f32,
    viewport_width: f32,
    dt: f32,
) {
    let dt = clamp_step_dt(dt, tuning.max_step_dt);

    let mut vx = 0.0;
    if input.left_held {
        vx -= tuning.player_speed;
    }
    if input.right_held {
        vx += tuning.player_speed;
    }
    if jump.boost_active() {
        vx += jump.boost_vx;
    }

    // Bound computed from the pre-step progress, same as the on-screen clamp
    // is applied before the world advance.
    let bound = screen_right_bound(
        viewport_width,
        pose.world_progress,
        track_length,
        near_end_viewports,
        tuning,
    );
    pose.screen_x = (pose.screen_x + vx * dt).clamp(0.0, bound);

    let mut world_vx = if jump.boost_active() {
        jump_tuning.forward_vx * input.last_facing.sign()
    } else {
        0.0
    };
    if input.right_held {
        world_vx += tuning.player_speed;
    }
    if input.left_held {
        world_vx -= tuning.player_speed;
    }
    pose.world_progress = (pose.world_progress + world_vx * dt).clamp(0.0, track_length);
}

/// Resolution order for the jump direction: right hold wins over left hold
/// wins over the last known facing.
pub(crate) fn resolve_jump_direction(input: &MovementInput) -> Facing {
    if input.right_held {
        Facing::Right
    } else if input.left_held {
        Facing::Left
    } else {
        input.last_facing
    }
}

/// Cosmetic arc: parabolic vertical offset over the airborne window, zero at
/// takeoff and landing, peaking at `arc_height`.
pub(crate) fn jump_arc_offset(air_timer: f32, air_time: f32, arc_height: f32) -> f32 {
    if air_timer <= 0.0 || air_time <= 0.0 {
        return 0.0;
    }
    let progress = (1.0 - air_timer / air_time).clamp(0.0, 1.0);
    4.0 * arc_height * progress * (1.0 - progress)
}
