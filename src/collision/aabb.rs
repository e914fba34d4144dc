//! Collision domain: axis-aligned box tests for the fixed-cadence check.

use bevy::prelude::*;

/// Outcome of a single collision check between the player and an obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// Airborne player landed on top of the obstacle.
    Stomp,
    /// Plain body contact.
    Hit,
}

/// Build a box from a sprite's center and size.
pub fn sprite_rect(center: Vec2, size: Vec2) -> Rect {
    Rect::from_center_size(center, size)
}

/// Strict separation test: boxes overlap unless disjoint on some axis.
/// Touching edges count as overlap.
pub fn boxes_overlap(a: Rect, b: Rect) -> bool {
    !(a.max.x < b.min.x || a.min.x > b.max.x || a.max.y < b.min.y || a.min.y > b.max.y)
}

/// Stomp test, independent of the full overlap test: the player must be
/// airborne, their bottom edge at or above the obstacle's top edge minus
/// `tolerance`, and the horizontal projections must overlap.
pub fn is_stomp(player: Rect, obstacle: Rect, airborne: bool, tolerance: f32) -> bool {
    let vertical_ok = player.min.y >= obstacle.max.y - tolerance;
    let horizontal_overlap = !(player.max.x < obstacle.min.x || player.min.x > obstacle.max.x);
    airborne && vertical_ok && horizontal_overlap
}

/// Classify one check: `None` when the boxes are disjoint, otherwise exactly
/// one of stomp or hit.
pub fn classify(
    player: Rect,
    obstacle: Rect,
    airborne: bool,
    tolerance: f32,
) -> Option<CollisionOutcome> {
    if !boxes_overlap(player, obstacle) {
        return None;
    }
    if is_stomp(player, obstacle, airborne, tolerance) {
        Some(CollisionOutcome::Stomp)
    } else {
        Some(CollisionOutcome::Hit)
    }
}
