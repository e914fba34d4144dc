//! Definition structs mirrored by `assets/data/tuning.ron`.
//!
//! Every field has a compiled default so a partial or missing file still
//! yields a playable game.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TuningFile {
    pub movement: MovementDef,
    pub jump: JumpDef,
    pub track: TrackDef,
    pub obstacle: ObstacleDef,
    pub collision: CollisionDef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementDef {
    /// Walking speed, px/s.
    pub player_speed: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Screen position at the start of a run, px.
    pub start_screen_x: f32,
    /// Fraction of the viewport the player may occupy while traveling.
    pub right_fraction_traveling: f32,
    /// Upper bound on a single integration step, seconds.
    pub max_step_dt: f32,
}

impl Default for MovementDef {
    fn default() -> Self {
        Self {
            player_speed: 260.0,
            player_width: 80.0,
            player_height: 80.0,
            start_screen_x: 50.0,
            right_fraction_traveling: 0.65,
            max_step_dt: 0.033,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct JumpDef {
    /// Extra forward speed during the boost window, px/s.
    pub forward_vx: f32,
    /// Boost window, seconds.
    pub boost_time: f32,
    /// Airborne window, seconds. Must cover the boost window.
    pub air_time: f32,
    /// Peak height of the cosmetic arc, px.
    pub arc_height: f32,
}

impl Default for JumpDef {
    fn default() -> Self {
        Self {
            forward_vx: 260.0,
            boost_time: 0.36,
            air_time: 0.55,
            arc_height: 140.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackDef {
    /// Seconds of straight walking from start to cave.
    pub walk_duration_secs: f32,
    pub parallax_factor: f32,
    /// Viewport widths from the end where the screen clamp widens.
    pub near_end_viewports: f32,
    /// Viewport widths from the end where the cave becomes visible.
    pub goal_reveal_viewports: f32,
}

impl Default for TrackDef {
    fn default() -> Self {
        Self {
            walk_duration_secs: 120.0,
            parallax_factor: 0.25,
            near_end_viewports: 1.2,
            goal_reveal_viewports: 2.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObstacleDef {
    pub width: f32,
    pub height: f32,
    /// Seconds per sweep across the viewport.
    pub patrol_period: f32,
    /// Stomp fade-out, seconds.
    pub fade_time: f32,
    /// Delay before the obstacle respawns after a stomp, seconds.
    pub respawn_delay: f32,
}

impl Default for ObstacleDef {
    fn default() -> Self {
        Self {
            width: 48.0,
            height: 56.0,
            patrol_period: 2.0,
            fade_time: 0.12,
            respawn_delay: 0.14,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CollisionDef {
    /// Wall-clock period of the collision check, seconds.
    pub check_interval: f32,
    /// Vertical slack for the stomp classification, px.
    pub stomp_tolerance: f32,
    /// How long the loss latch holds after a hit, seconds.
    pub loss_latch_delay: f32,
}

impl Default for CollisionDef {
    fn default() -> Self {
        Self {
            check_interval: 0.1,
            stomp_tolerance: 18.0,
            loss_latch_delay: 0.25,
        }
    }
}
