//! Movement domain: player components for the trek loop.

use bevy::prelude::*;

use crate::movement::resources::JumpTuning;

#[derive(Component, Debug)]
pub struct Player;

/// The two coupled position variables: where the player sits on screen and
/// how far along the track they actually are.
#[derive(Component, Debug, Clone, Default)]
pub struct PlayerPose {
    /// Left-edge position on screen, px, clamped to `[0, right_bound]`.
    pub screen_x: f32,
    /// Distance travelled along the track, px, clamped to `[0, track_length]`.
    pub world_progress: f32,
}

/// Jump controller state: a timed forward boost plus a longer airborne window
/// that gates re-triggering and stomp eligibility. Both are dt countdowns and
/// run independently.
#[derive(Component, Debug, Default)]
pub struct JumpState {
    pub airborne: bool,
    /// Signed screen-velocity contribution, fixed at trigger time.
    pub boost_vx: f32,
    pub boost_timer: f32,
    pub air_timer: f32,
}

impl JumpState {
    /// Start a jump. Returns false (and leaves the state untouched) while
    /// already airborne.
    pub fn begin(&mut self, facing: Facing, tuning: &JumpTuning) -> bool {
        if self.airborne {
            return false;
        }
        self.airborne = true;
        self.boost_vx = tuning.forward_vx * facing.sign();
        self.boost_timer = tuning.boost_time;
        self.air_timer = tuning.air_time;
        true
    }

    pub fn tick(&mut self, dt: f32) {
        if self.boost_timer > 0.0 {
            self.boost_timer = (self.boost_timer - dt).max(0.0);
        }
        if self.airborne {
            self.air_timer -= dt;
            if self.air_timer <= 0.0 {
                self.air_timer = 0.0;
                self.airborne = false;
            }
        }
    }

    pub fn boost_active(&self) -> bool {
        self.boost_timer > 0.0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}
