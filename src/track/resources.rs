//! Track domain: tuning and win latch resources.

use bevy::prelude::*;

use crate::content::{MovementDef, TrackDef};

#[derive(Resource, Debug, Clone)]
pub struct TrackTuning {
    /// Total world distance to the cave, in px.
    pub length: f32,
    pub parallax_factor: f32,
    /// Viewport widths from the end where the screen clamp widens.
    pub near_end_viewports: f32,
    /// Viewport widths from the end where the cave becomes visible.
    pub goal_reveal_viewports: f32,
}

impl TrackTuning {
    /// Track length is `player_speed * walk_duration_secs`: a straight two
    /// minute walk by default.
    pub fn from_defs(track: &TrackDef, movement: &MovementDef) -> Self {
        Self {
            length: movement.player_speed * track.walk_duration_secs,
            parallax_factor: track.parallax_factor,
            near_end_viewports: track.near_end_viewports,
            goal_reveal_viewports: track.goal_reveal_viewports,
        }
    }
}

impl Default for TrackTuning {
    fn default() -> Self {
        Self::from_defs(&TrackDef::default(), &MovementDef::default())
    }
}

/// Ensures the win transition fires exactly once per run.
#[derive(Resource, Debug, Default)]
pub struct GoalLatch {
    reached: bool,
}

impl GoalLatch {
    /// Returns true only on the first call after a reset.
    pub fn try_latch(&mut self) -> bool {
        if self.reached {
            return false;
        }
        self.reached = true;
        true
    }

    pub fn reset(&mut self) {
        self.reached = false;
    }

    pub fn is_latched(&self) -> bool {
        self.reached
    }
}
