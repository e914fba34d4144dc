//! Obstacle domain: unit tests for patrol math and stomp state.

use std::time::Duration;

use super::{ObstacleState, PatrolCycle};

const PERIOD: f32 = 2.0;
const VIEWPORT: f32 = 1280.0;
const WIDTH: f32 = 48.0;

// -----------------------------------------------------------------------------
// Patrol cycle tests
// -----------------------------------------------------------------------------

#[test]
fn test_patrol_starts_at_right_boundary() {
    let cycle = PatrolCycle::default();
    assert_eq!(cycle.screen_x(PERIOD, VIEWPORT, WIDTH), VIEWPORT);
}

#[test]
fn test_patrol_sweeps_left() {
    let mut cycle = PatrolCycle::default();
    let mut last_x = cycle.screen_x(PERIOD, VIEWPORT, WIDTH);
    for _ in 0..10 {
        cycle.advance(0.1, PERIOD);
        let x = cycle.screen_x(PERIOD, VIEWPORT, WIDTH);
        assert!(x < last_x);
        last_x = x;
    }
}

#[test]
fn test_patrol_exits_fully_left_before_wrap() {
    let mut cycle = PatrolCycle::default();
    cycle.advance(PERIOD * 0.999, PERIOD);
    let x = cycle.screen_x(PERIOD, VIEWPORT, WIDTH);
    assert!(x < 0.0);
    assert!(x + WIDTH < VIEWPORT * 0.05);
}

#[test]
fn test_patrol_wraps_at_period() {
    let mut cycle = PatrolCycle::default();
    cycle.advance(PERIOD + 0.3, PERIOD);
    assert!((cycle.elapsed - 0.3).abs() < 1e-4);
}

#[test]
fn test_patrol_restart_returns_to_origin() {
    let mut cycle = PatrolCycle::default();
    cycle.advance(1.3, PERIOD);
    cycle.restart();
    assert_eq!(cycle.elapsed, 0.0);
    assert_eq!(cycle.screen_x(PERIOD, VIEWPORT, WIDTH), VIEWPORT);
}

// -----------------------------------------------------------------------------
// Stomp state tests
// -----------------------------------------------------------------------------

#[test]
fn test_fresh_obstacle_is_visible() {
    let state = ObstacleState::new(0.12, 0.14);
    assert!(!state.is_hidden());
    assert_eq!(state.alpha(), 1.0);
}

#[test]
fn test_stomp_hides_and_fades() {
    let mut state = ObstacleState::new(0.12, 0.14);
    state.begin_stomp();
    assert!(state.is_hidden());

    state.tick(Duration::from_secs_f32(0.06));
    assert!(state.is_hidden());
    assert!(state.alpha() < 1.0);
    assert!(state.alpha() > 0.0);
}

#[test]
fn test_respawn_after_delay() {
    let mut state = ObstacleState::new(0.12, 0.14);
    state.begin_stomp();

    assert!(!state.tick(Duration::from_secs_f32(0.1)));
    assert!(state.tick(Duration::from_secs_f32(0.05)));
    assert!(!state.is_hidden());
    assert_eq!(state.alpha(), 1.0);
}

#[test]
fn test_tick_without_stomp_is_inert() {
    let mut state = ObstacleState::new(0.12, 0.14);
    assert!(!state.tick(Duration::from_secs_f32(1.0)));
    assert!(!state.is_hidden());
}
