//! Content domain: unit tests for tuning parsing and validation.

use super::data::TuningFile;
use super::loader::parse_tuning;
use super::validation::validate_tuning;

// -----------------------------------------------------------------------------
// Parse tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_full_document() {
    let doc = r#"(
        movement: (
            player_speed: 300.0,
            player_width: 64.0,
            player_height: 64.0,
            start_screen_x: 40.0,
            right_fraction_traveling: 0.5,
            max_step_dt: 0.05,
        ),
        jump: (forward_vx: 200.0, boost_time: 0.3, air_time: 0.6, arc_height: 100.0),
        track: (
            walk_duration_secs: 60.0,
            parallax_factor: 0.2,
            near_end_viewports: 1.0,
            goal_reveal_viewports: 1.5,
        ),
        obstacle: (width: 40.0, height: 40.0, patrol_period: 3.0, fade_time: 0.1, respawn_delay: 0.2),
        collision: (check_interval: 0.05, stomp_tolerance: 12.0, loss_latch_delay: 0.3),
    )"#;

    let tuning = parse_tuning(doc, "inline").expect("full document parses");
    assert_eq!(tuning.movement.player_speed, 300.0);
    assert_eq!(tuning.track.walk_duration_secs, 60.0);
    assert_eq!(tuning.collision.stomp_tolerance, 12.0);
    assert!(validate_tuning(&tuning).is_empty());
}

#[test]
fn test_parse_partial_document_fills_defaults() {
    let doc = "(movement: (player_speed: 200.0))";
    let tuning = parse_tuning(doc, "inline").expect("partial document parses");
    assert_eq!(tuning.movement.player_speed, 200.0);
    // Untouched fields come from the compiled defaults.
    assert_eq!(tuning.movement.player_width, 80.0);
    assert_eq!(tuning.jump.boost_time, 0.36);
    assert_eq!(tuning.obstacle.patrol_period, 2.0);
}

#[test]
fn test_parse_rejects_malformed_document() {
    let error = parse_tuning("(movement: oops)", "inline").unwrap_err();
    assert_eq!(error.file, "inline");
    assert!(error.message.contains("Parse error"));
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_tuning_is_valid() {
    assert!(validate_tuning(&TuningFile::default()).is_empty());
}

#[test]
fn test_rejects_nonpositive_speed() {
    let mut tuning = TuningFile::default();
    tuning.movement.player_speed = 0.0;
    let errors = validate_tuning(&tuning);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "movement.player_speed");
}

#[test]
fn test_air_time_must_cover_boost_window() {
    let mut tuning = TuningFile::default();
    tuning.jump.air_time = tuning.jump.boost_time / 2.0;
    let errors = validate_tuning(&tuning);
    assert!(errors.iter().any(|e| e.field == "jump.air_time"));
}

#[test]
fn test_fraction_bounds_enforced() {
    let mut tuning = TuningFile::default();
    tuning.movement.right_fraction_traveling = 1.5;
    tuning.track.parallax_factor = -0.1;
    let errors = validate_tuning(&tuning);
    assert!(errors.iter().any(|e| e.field == "movement.right_fraction_traveling"));
    assert!(errors.iter().any(|e| e.field == "track.parallax_factor"));
}
