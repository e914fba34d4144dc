//! UI domain: on-screen hold buttons for touch play.
//!
//! The buttons OR into the same `MovementInput` the keyboard writes, so the
//! motion step never cares which source held a direction.

use bevy::prelude::*;

use crate::movement::MovementInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Left,
    Right,
    Jump,
}

#[derive(Component, Debug)]
pub struct ControlButton {
    pub action: ControlAction,
}

/// Marker for the hold-button containers
#[derive(Component)]
pub struct HoldControlsUI;

pub(crate) fn spawn_hold_buttons(mut commands: Commands) {
    // Direction pair, bottom-left.
    commands
        .spawn((
            HoldControlsUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(24.0),
                bottom: Val::Px(24.0),
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(12.0),
                ..default()
            },
            ZIndex(50),
        ))
        .with_children(|parent| {
            spawn_hold_button(parent, "\u{2190}", ControlAction::Left);
            spawn_hold_button(parent, "\u{2192}", ControlAction::Right);
        });

    // Jump, bottom-right.
    commands
        .spawn((
            HoldControlsUI,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(24.0),
                bottom: Val::Px(24.0),
                ..default()
            },
            ZIndex(50),
        ))
        .with_children(|parent| {
            spawn_hold_button(parent, "JUMP", ControlAction::Jump);
        });
}

pub(crate) fn despawn_hold_buttons(
    mut commands: Commands,
    query: Query<Entity, With<HoldControlsUI>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

/// Merge button state into `MovementInput`: held directions level-trigger,
/// jump edge-triggers on the press transition.
pub(crate) fn apply_hold_buttons(
    buttons: Query<(&Interaction, &ControlButton)>,
    pressed: Query<(&Interaction, &ControlButton), Changed<Interaction>>,
    mut input: ResMut<MovementInput>,
) {
    for (interaction, button) in &buttons {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match button.action {
            ControlAction::Left => input.left_held = true,
            ControlAction::Right => input.right_held = true,
            ControlAction::Jump => {}
        }
    }

    for (interaction, button) in &pressed {
        if *interaction == Interaction::Pressed && button.action == ControlAction::Jump {
            input.jump_pressed = true;
        }
    }

    input.update_facing();
}

fn spawn_hold_button(parent: &mut ChildSpawnerCommands, label: &str, action: ControlAction) {
    parent
        .spawn((
            ControlButton { action },
            Button,
            Node {
                width: Val::Px(88.0),
                height: Val::Px(72.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.15, 0.55)),
            BorderColor::all(Color::srgba(0.6, 0.6, 0.7, 0.6)),
        ))
        .with_child((
            Text::new(label),
            TextFont {
                font_size: 24.0,
                ..default()
            },
            TextColor(Color::srgb(0.9, 0.9, 0.9)),
        ));
}
