//! Movement domain: input state and tuning resources.

use bevy::prelude::*;

use crate::content::{JumpDef, MovementDef};
use crate::movement::components::Facing;

/// Directional hold state unified from keyboard and on-screen buttons,
/// refreshed every frame before the motion step.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub left_held: bool,
    pub right_held: bool,
    /// Edge-triggered jump request, consumed by the jump controller.
    pub jump_pressed: bool,
    pub last_facing: Facing,
}

impl MovementInput {
    /// Facing follows a single held direction; both or neither held leaves
    /// it unchanged.
    pub fn update_facing(&mut self) {
        if self.right_held && !self.left_held {
            self.last_facing = Facing::Right;
        } else if self.left_held && !self.right_held {
            self.last_facing = Facing::Left;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    /// Walking speed, px/s, for both screen and world velocities.
    pub player_speed: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Screen position at the start of a run.
    pub start_screen_x: f32,
    /// Fraction of the viewport the player may occupy while traveling.
    pub right_fraction_traveling: f32,
    /// Upper bound on a single integration step, guards tab-resume spikes.
    pub max_step_dt: f32,
}

impl MovementTuning {
    pub fn from_def(def: &MovementDef) -> Self {
        Self {
            player_speed: def.player_speed,
            player_width: def.player_width,
            player_height: def.player_height,
            start_screen_x: def.start_screen_x,
            right_fraction_traveling: def.right_fraction_traveling,
            max_step_dt: def.max_step_dt,
        }
    }
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self::from_def(&MovementDef::default())
    }
}

#[derive(Resource, Debug, Clone)]
pub struct JumpTuning {
    /// Extra forward speed granted for the boost window, px/s.
    pub forward_vx: f32,
    /// Boost window length, seconds.
    pub boost_time: f32,
    /// Airborne window length, seconds. At least `boost_time`.
    pub air_time: f32,
    /// Peak height of the cosmetic jump arc, px.
    pub arc_height: f32,
}

impl JumpTuning {
    pub fn from_def(def: &JumpDef) -> Self {
        Self {
            forward_vx: def.forward_vx,
            boost_time: def.boost_time,
            air_time: def.air_time,
            arc_height: def.arc_height,
        }
    }
}

impl Default for JumpTuning {
    fn default() -> Self {
        Self::from_def(&JumpDef::default())
    }
}
