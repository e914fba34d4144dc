//! Validation for loaded tuning values.

use super::data::TuningFile;

/// A validation error with context about which field failed.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tuning field '{}': {}", self.field, self.message)
    }
}

macro_rules! require {
    ($errors:expr, $cond:expr, $field:expr, $msg:expr) => {
        if !$cond {
            $errors.push(ValidationError {
                field: $field,
                message: $msg.to_string(),
            });
        }
    };
}

/// Validate a loaded tuning file. Returns a list of errors, empty when every
/// value is usable.
pub fn validate_tuning(tuning: &TuningFile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let movement = &tuning.movement;
    require!(errors, movement.player_speed > 0.0, "movement.player_speed", "must be positive");
    require!(errors, movement.player_width > 0.0, "movement.player_width", "must be positive");
    require!(errors, movement.player_height > 0.0, "movement.player_height", "must be positive");
    require!(
        errors,
        movement.start_screen_x >= 0.0,
        "movement.start_screen_x",
        "must not be negative"
    );
    require!(
        errors,
        movement.right_fraction_traveling > 0.0 && movement.right_fraction_traveling <= 1.0,
        "movement.right_fraction_traveling",
        "must be in (0, 1]"
    );
    require!(errors, movement.max_step_dt > 0.0, "movement.max_step_dt", "must be positive");

    let jump = &tuning.jump;
    require!(errors, jump.forward_vx >= 0.0, "jump.forward_vx", "must not be negative");
    require!(errors, jump.boost_time > 0.0, "jump.boost_time", "must be positive");
    require!(
        errors,
        jump.air_time >= jump.boost_time,
        "jump.air_time",
        "must cover the boost window"
    );
    require!(errors, jump.arc_height >= 0.0, "jump.arc_height", "must not be negative");

    let track = &tuning.track;
    require!(
        errors,
        track.walk_duration_secs > 0.0,
        "track.walk_duration_secs",
        "must be positive"
    );
    require!(
        errors,
        (0.0..=1.0).contains(&track.parallax_factor),
        "track.parallax_factor",
        "must be in [0, 1]"
    );
    require!(
        errors,
        track.near_end_viewports > 0.0,
        "track.near_end_viewports",
        "must be positive"
    );
    require!(
        errors,
        track.goal_reveal_viewports > 0.0,
        "track.goal_reveal_viewports",
        "must be positive"
    );

    let obstacle = &tuning.obstacle;
    require!(errors, obstacle.width > 0.0, "obstacle.width", "must be positive");
    require!(errors, obstacle.height > 0.0, "obstacle.height", "must be positive");
    require!(errors, obstacle.patrol_period > 0.0, "obstacle.patrol_period", "must be positive");
    require!(errors, obstacle.fade_time > 0.0, "obstacle.fade_time", "must be positive");
    require!(
        errors,
        obstacle.respawn_delay >= 0.0,
        "obstacle.respawn_delay",
        "must not be negative"
    );

    let collision = &tuning.collision;
    require!(
        errors,
        collision.check_interval > 0.0,
        "collision.check_interval",
        "must be positive"
    );
    require!(
        errors,
        collision.stomp_tolerance >= 0.0,
        "collision.stomp_tolerance",
        "must not be negative"
    );
    require!(
        errors,
        collision.loss_latch_delay >= 0.0,
        "collision.loss_latch_delay",
        "must not be negative"
    );

    errors
}
