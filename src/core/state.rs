//! Core domain: run state definitions.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Idle on the start overlay.
    #[default]
    StartScreen,
    Running,
    Won,
    Lost,
}
