//! Movement domain: unit tests for the motion model and jump controller.

use super::components::{Facing, JumpState, PlayerPose};
use super::model::{clamp_step_dt, jump_arc_offset, resolve_jump_direction, screen_right_bound, step_pose};
use super::resources::{JumpTuning, MovementInput, MovementTuning};
use crate::track::GoalLatch;

const VIEWPORT: f32 = 1280.0;
const TRACK_LENGTH: f32 = 31200.0;
const NEAR_END: f32 = 1.2;

fn tunings() -> (MovementTuning, JumpTuning) {
    (MovementTuning::default(), JumpTuning::default())
}

fn hold_right() -> MovementInput {
    MovementInput {
        right_held: true,
        ..default_input()
    }
}

fn hold_left() -> MovementInput {
    MovementInput {
        left_held: true,
        last_facing: Facing::Left,
        ..default_input()
    }
}

fn default_input() -> MovementInput {
    MovementInput::default()
}

fn step(pose: &mut PlayerPose, input: &MovementInput, jump: &JumpState, dt: f32) {
    let (tuning, jump_tuning) = tunings();
    step_pose(
        pose,
        input,
        jump,
        &tuning,
        &jump_tuning,
        TRACK_LENGTH,
        NEAR_END,
        VIEWPORT,
        dt,
    );
}

// -----------------------------------------------------------------------------
// Screen clamp tests
// -----------------------------------------------------------------------------

#[test]
fn test_screen_x_clamped_for_all_dt() {
    let (tuning, _) = tunings();
    let jump = JumpState::default();
    let input = hold_right();

    for dt in [0.0, 0.001, 0.016, 0.033, 0.1, 5.0] {
        let mut pose = PlayerPose {
            screen_x: tuning.start_screen_x,
            world_progress: 0.0,
        };
        for _ in 0..200 {
            step(&mut pose, &input, &jump, dt);
            let bound = screen_right_bound(VIEWPORT, pose.world_progress, TRACK_LENGTH, NEAR_END, &tuning);
            assert!(pose.screen_x >= 0.0);
            assert!(pose.screen_x <= bound);
        }
    }
}

#[test]
fn test_screen_x_stops_at_left_edge() {
    let jump = JumpState::default();
    let input = hold_left();
    let mut pose = PlayerPose {
        screen_x: 50.0,
        world_progress: 0.0,
    };
    for _ in 0..100 {
        step(&mut pose, &input, &jump, 0.033);
    }
    assert_eq!(pose.screen_x, 0.0);
}

#[test]
fn test_large_dt_is_clamped() {
    let (tuning, _) = tunings();
    let jump = JumpState::default();
    let input = hold_right();
    let mut pose = PlayerPose::default();

    step(&mut pose, &input, &jump, 10.0);
    let max_advance = tuning.player_speed * tuning.max_step_dt;
    assert!(pose.world_progress <= max_advance + 1e-3);
    assert_eq!(clamp_step_dt(10.0, tuning.max_step_dt), tuning.max_step_dt);
    assert_eq!(clamp_step_dt(-1.0, tuning.max_step_dt), 0.0);
}

// -----------------------------------------------------------------------------
// Right bound tests
// -----------------------------------------------------------------------------

#[test]
fn test_right_bound_holds_player_left_of_center_while_traveling() {
    let (tuning, _) = tunings();
    let bound = screen_right_bound(VIEWPORT, 0.0, TRACK_LENGTH, NEAR_END, &tuning);
    assert_eq!(bound, VIEWPORT * 0.65 - tuning.player_width);
}

#[test]
fn test_right_bound_widens_near_the_end() {
    let (tuning, _) = tunings();
    let near = TRACK_LENGTH - VIEWPORT;
    let bound = screen_right_bound(VIEWPORT, near, TRACK_LENGTH, NEAR_END, &tuning);
    assert_eq!(bound, VIEWPORT - tuning.player_width);
}

#[test]
fn test_right_bound_never_negative_on_tiny_viewport() {
    let (tuning, _) = tunings();
    // Narrower than the player sprite.
    let viewport = 60.0;
    assert_eq!(
        screen_right_bound(viewport, 0.0, TRACK_LENGTH, NEAR_END, &tuning),
        0.0
    );
    assert_eq!(
        screen_right_bound(viewport, TRACK_LENGTH, TRACK_LENGTH, NEAR_END, &tuning),
        0.0
    );
}

// -----------------------------------------------------------------------------
// World progress tests
// -----------------------------------------------------------------------------

#[test]
fn test_world_progress_never_below_zero() {
    let jump = JumpState::default();
    let input = hold_left();
    let mut pose = PlayerPose::default();
    for _ in 0..50 {
        step(&mut pose, &input, &jump, 0.033);
        assert_eq!(pose.world_progress, 0.0);
    }
}

#[test]
fn test_world_progress_monotonic_while_holding_right() {
    let jump = JumpState::default();
    let input = hold_right();
    let mut pose = PlayerPose::default();
    let mut last = 0.0;
    for _ in 0..500 {
        step(&mut pose, &input, &jump, 0.016);
        assert!(pose.world_progress >= last);
        assert!(pose.world_progress <= TRACK_LENGTH);
        last = pose.world_progress;
    }
}

#[test]
fn test_boost_drifts_forward_without_any_hold() {
    let (_, jump_tuning) = tunings();
    let mut jump = JumpState::default();
    let mut input = default_input();
    input.last_facing = Facing::Right;
    assert!(jump.begin(Facing::Right, &jump_tuning));

    let mut pose = PlayerPose::default();
    let dt = 0.02;
    step(&mut pose, &input, &jump, dt);
    assert!((pose.world_progress - jump_tuning.forward_vx * dt).abs() < 1e-3);

    // Once the boost window closes the drift stops.
    jump.tick(jump_tuning.boost_time);
    let before = pose.world_progress;
    step(&mut pose, &input, &jump, dt);
    assert_eq!(pose.world_progress, before);
}

#[test]
fn test_boost_outruns_plain_hold() {
    let (tuning, jump_tuning) = tunings();
    let mut jump = JumpState::default();
    let input = hold_right();
    assert!(jump.begin(Facing::Right, &jump_tuning));

    let mut pose = PlayerPose::default();
    let dt = 0.02;
    step(&mut pose, &input, &jump, dt);
    let expected = (tuning.player_speed + jump_tuning.forward_vx) * dt;
    assert!((pose.world_progress - expected).abs() < 1e-3);
}

// -----------------------------------------------------------------------------
// Jump controller tests
// -----------------------------------------------------------------------------

#[test]
fn test_jump_is_reentrancy_guarded() {
    let (_, jump_tuning) = tunings();
    let mut jump = JumpState::default();
    assert!(jump.begin(Facing::Right, &jump_tuning));

    jump.tick(0.1);
    let boost_before = jump.boost_timer;
    assert!(!jump.begin(Facing::Left, &jump_tuning));
    assert_eq!(jump.boost_timer, boost_before);
    assert!(jump.boost_vx > 0.0);
}

#[test]
fn test_jump_direction_resolution_priority() {
    let mut input = default_input();
    input.last_facing = Facing::Left;
    assert_eq!(resolve_jump_direction(&input), Facing::Left);

    input.left_held = true;
    assert_eq!(resolve_jump_direction(&input), Facing::Left);

    // Right hold wins even with left also held.
    input.right_held = true;
    assert_eq!(resolve_jump_direction(&input), Facing::Right);
}

#[test]
fn test_airborne_window_outlasts_boost_window() {
    let (_, jump_tuning) = tunings();
    let mut jump = JumpState::default();
    assert!(jump.begin(Facing::Right, &jump_tuning));

    // Past the boost window but inside the airborne window.
    jump.tick(jump_tuning.boost_time + 0.05);
    assert!(!jump.boost_active());
    assert!(jump.airborne);

    jump.tick(jump_tuning.air_time);
    assert!(!jump.airborne);
    assert_eq!(jump.air_timer, 0.0);
}

#[test]
fn test_arc_offset_grounded_and_peak() {
    let (_, jump_tuning) = tunings();
    assert_eq!(jump_arc_offset(0.0, jump_tuning.air_time, jump_tuning.arc_height), 0.0);
    assert_eq!(
        jump_arc_offset(jump_tuning.air_time, jump_tuning.air_time, jump_tuning.arc_height),
        0.0
    );
    let peak = jump_arc_offset(
        jump_tuning.air_time / 2.0,
        jump_tuning.air_time,
        jump_tuning.arc_height,
    );
    assert!((peak - jump_tuning.arc_height).abs() < 1e-3);
}

// -----------------------------------------------------------------------------
// Input facing tests
// -----------------------------------------------------------------------------

#[test]
fn test_facing_follows_single_hold() {
    let mut input = default_input();
    input.left_held = true;
    input.update_facing();
    assert_eq!(input.last_facing, Facing::Left);

    input.left_held = false;
    input.right_held = true;
    input.update_facing();
    assert_eq!(input.last_facing, Facing::Right);
}

#[test]
fn test_facing_unchanged_when_both_or_neither_held() {
    let mut input = default_input();
    input.last_facing = Facing::Left;

    input.update_facing();
    assert_eq!(input.last_facing, Facing::Left);

    input.left_held = true;
    input.right_held = true;
    input.update_facing();
    assert_eq!(input.last_facing, Facing::Left);
}

// -----------------------------------------------------------------------------
// Scenario tests
// -----------------------------------------------------------------------------

#[test]
fn test_scenario_hold_right_all_the_way_to_the_cave() {
    let jump = JumpState::default();
    let input = hold_right();
    let mut pose = PlayerPose {
        screen_x: 50.0,
        world_progress: 0.0,
    };
    let mut latch = GoalLatch::default();
    let mut wins = 0;

    // 122 simulated seconds of 20ms steps; the walk itself takes 120s.
    let dt = 0.02;
    for _ in 0..6100 {
        step(&mut pose, &input, &jump, dt);
        if pose.world_progress >= TRACK_LENGTH && latch.try_latch() {
            wins += 1;
        }
    }

    assert_eq!(pose.world_progress, TRACK_LENGTH);
    assert_eq!(wins, 1);
}

#[test]
fn test_scenario_win_fires_exactly_once_at_exact_length() {
    let jump = JumpState::default();
    let input = hold_right();
    let mut pose = PlayerPose {
        screen_x: 50.0,
        world_progress: TRACK_LENGTH - 1.0,
    };
    let mut latch = GoalLatch::default();
    let mut wins = 0;

    for _ in 0..10 {
        step(&mut pose, &input, &jump, 0.033);
        if pose.world_progress >= TRACK_LENGTH && latch.try_latch() {
            wins += 1;
        }
    }

    assert_eq!(pose.world_progress, TRACK_LENGTH);
    assert_eq!(wins, 1);
}
