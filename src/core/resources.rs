//! Core domain: shared run-flow resources.

use bevy::prelude::*;
use std::time::Duration;

use crate::content::CollisionDef;

/// Latch engaged when a hit ends the run. While held, further hits are
/// ignored and the start action is refused; it releases a fixed delay after
/// the loss so a second collision tick cannot fire a second notification.
#[derive(Resource, Debug)]
pub struct LossLatch {
    locked: bool,
    release: Timer,
}

impl Default for LossLatch {
    fn default() -> Self {
        Self::new(CollisionDef::default().loss_latch_delay)
    }
}

impl LossLatch {
    pub fn new(release_delay: f32) -> Self {
        Self {
            locked: false,
            release: Timer::from_seconds(release_delay, TimerMode::Once),
        }
    }

    /// Engage the latch. Returns false when already held.
    pub fn try_lock(&mut self) -> bool {
        if self.locked {
            return false;
        }
        self.locked = true;
        self.release.reset();
        true
    }

    pub fn tick(&mut self, delta: Duration) {
        if !self.locked {
            return;
        }
        self.release.tick(delta);
        if self.release.is_finished() {
            self.locked = false;
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}
