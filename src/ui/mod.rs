//! UI domain: start overlay, result banners and touch controls.

mod controls;
mod result;
mod start;

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::controls::{apply_hold_buttons, despawn_hold_buttons, spawn_hold_buttons};
use crate::ui::result::{spawn_lost_banner, spawn_won_banner};
use crate::ui::start::{
    dismiss_menus, handle_play_action, reveal_start_screen_after_loss, show_start_screen,
};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::StartScreen), show_start_screen)
            .add_systems(OnEnter(GameState::Won), (spawn_won_banner, show_start_screen))
            .add_systems(OnEnter(GameState::Lost), spawn_lost_banner)
            .add_systems(
                Update,
                reveal_start_screen_after_loss.run_if(in_state(GameState::Lost)),
            )
            .add_systems(
                Update,
                handle_play_action.run_if(not(in_state(GameState::Running))),
            )
            .add_systems(OnEnter(GameState::Running), (dismiss_menus, spawn_hold_buttons))
            .add_systems(OnExit(GameState::Running), despawn_hold_buttons)
            .add_systems(
                Update,
                apply_hold_buttons
                    .after(crate::movement::systems::read_input)
                    .before(crate::movement::systems::trigger_jump)
                    .run_if(in_state(GameState::Running)),
            );
    }
}
