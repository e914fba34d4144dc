//! Obstacle domain: tuning resource.

use bevy::prelude::*;

use crate::content::ObstacleDef;

#[derive(Resource, Debug, Clone)]
pub struct ObstacleTuning {
    pub width: f32,
    pub height: f32,
    pub patrol_period: f32,
    pub fade_time: f32,
    pub respawn_delay: f32,
}

impl ObstacleTuning {
    pub fn from_def(def: &ObstacleDef) -> Self {
        Self {
            width: def.width,
            height: def.height,
            patrol_period: def.patrol_period,
            fade_time: def.fade_time,
            respawn_delay: def.respawn_delay,
        }
    }
}

impl Default for ObstacleTuning {
    fn default() -> Self {
        Self::from_def(&ObstacleDef::default())
    }
}
