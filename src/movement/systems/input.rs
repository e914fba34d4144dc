//! Movement domain: keyboard sampling into the shared input state.

use bevy::prelude::*;

use crate::movement::resources::MovementInput;

/// Poll the keyboard into `MovementInput`. On-screen buttons OR into the
/// same resource right after this runs.
pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    input.left_held = keyboard.pressed(KeyCode::ArrowLeft) || keyboard.pressed(KeyCode::KeyA);
    input.right_held = keyboard.pressed(KeyCode::ArrowRight) || keyboard.pressed(KeyCode::KeyD);
    input.jump_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::ArrowUp);
    input.update_facing();
}
