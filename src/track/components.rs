//! Track domain: stage markers.

use bevy::prelude::*;

/// Repeating backdrop element shifted by the parallax offset.
#[derive(Component, Debug)]
pub struct Backdrop {
    pub base_x: f32,
}

/// The cave at the end of the track.
#[derive(Component, Debug)]
pub struct Goal;
