//! Collision domain: cadence and tuning resources.

use bevy::prelude::*;

use crate::content::CollisionDef;

/// Repeating wall-clock timer driving the collision check, deliberately
/// decoupled from the render frame rate.
#[derive(Resource, Debug)]
pub struct CollisionTicker {
    pub timer: Timer,
}

impl CollisionTicker {
    pub fn new(interval: f32) -> Self {
        Self {
            timer: Timer::from_seconds(interval, TimerMode::Repeating),
        }
    }
}

impl Default for CollisionTicker {
    fn default() -> Self {
        Self::new(CollisionDef::default().check_interval)
    }
}

/// Runtime tuning for the classification itself. The check interval and the
/// latch delay live in `CollisionTicker` and `LossLatch` respectively.
#[derive(Resource, Debug, Clone)]
pub struct CollisionTuning {
    pub stomp_tolerance: f32,
}

impl CollisionTuning {
    pub fn from_def(def: &CollisionDef) -> Self {
        Self {
            stomp_tolerance: def.stomp_tolerance,
        }
    }
}

impl Default for CollisionTuning {
    fn default() -> Self {
        Self::from_def(&CollisionDef::default())
    }
}

/// Hit suppression toggle for the dev-tools overlay.
#[derive(Resource, Debug, Default)]
pub struct Invincibility {
    pub enabled: bool,
}
