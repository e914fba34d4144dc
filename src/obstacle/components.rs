//! Obstacle domain: patrol cycle and stomp/respawn state.

use bevy::prelude::*;
use std::time::Duration;

use crate::content::ObstacleDef;

#[derive(Component, Debug)]
pub struct Obstacle;

/// Periodic sweep across the viewport, right edge to past the left edge,
/// restarting at phase zero.
#[derive(Component, Debug, Default)]
pub struct PatrolCycle {
    pub elapsed: f32,
}

impl PatrolCycle {
    pub fn advance(&mut self, dt: f32, period: f32) {
        self.elapsed = (self.elapsed + dt) % period;
    }

    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }

    /// Cycle phase in `[0, 1)`.
    pub fn phase(&self, period: f32) -> f32 {
        (self.elapsed / period).clamp(0.0, 1.0)
    }

    /// Left-edge screen position: enters at the viewport's right boundary and
    /// is fully off the left edge as the phase wraps.
    pub fn screen_x(&self, period: f32, viewport_width: f32, width: f32) -> f32 {
        viewport_width - self.phase(period) * (viewport_width + width)
    }
}

/// Stomp fade-out and respawn bookkeeping. The fade is cosmetic; the respawn
/// timer decides when the obstacle gets its box back and the cycle restarts.
#[derive(Component, Debug)]
pub struct ObstacleState {
    stomped: bool,
    fade: Timer,
    respawn: Timer,
}

impl Default for ObstacleState {
    fn default() -> Self {
        let def = ObstacleDef::default();
        Self::new(def.fade_time, def.respawn_delay)
    }
}

impl ObstacleState {
    pub fn new(fade_time: f32, respawn_delay: f32) -> Self {
        Self {
            stomped: false,
            fade: Timer::from_seconds(fade_time, TimerMode::Once),
            respawn: Timer::from_seconds(respawn_delay, TimerMode::Once),
        }
    }

    pub fn begin_stomp(&mut self) {
        self.stomped = true;
        self.fade.reset();
        self.respawn.reset();
    }

    /// Advance the fade and respawn timers. Returns true on the tick where
    /// the respawn delay elapses.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if !self.stomped {
            return false;
        }
        self.fade.tick(delta);
        self.respawn.tick(delta);
        if self.respawn.is_finished() {
            self.clear();
            return true;
        }
        false
    }

    pub fn clear(&mut self) {
        self.stomped = false;
        self.fade.reset();
        self.respawn.reset();
    }

    /// No bounding box while waiting to respawn.
    pub fn is_hidden(&self) -> bool {
        self.stomped
    }

    pub fn alpha(&self) -> f32 {
        if self.stomped {
            1.0 - self.fade.fraction()
        } else {
            1.0
        }
    }
}
