//! UI domain: start overlay and the start action.

use bevy::prelude::*;

use crate::core::{GameState, LossLatch};
use crate::ui::result::ResultBannerUI;

/// Marker for the start overlay root
#[derive(Component)]
pub struct StartScreenUI;

/// Marker for the play button on the start overlay
#[derive(Component)]
pub struct PlayButton;

pub(crate) fn show_start_screen(
    mut commands: Commands,
    existing: Query<Entity, With<StartScreenUI>>,
) {
    if existing.is_empty() {
        spawn_start_overlay(&mut commands);
    }
}

/// After a loss the overlay comes back only once the latch releases.
pub(crate) fn reveal_start_screen_after_loss(
    mut commands: Commands,
    latch: Res<LossLatch>,
    existing: Query<Entity, With<StartScreenUI>>,
) {
    if !latch.is_locked() && existing.is_empty() {
        spawn_start_overlay(&mut commands);
    }
}

/// Enter/Space or the play button starts a run from any non-running surface,
/// unless the loss latch is still held.
pub(crate) fn handle_play_action(
    keyboard: Res<ButtonInput<KeyCode>>,
    latch: Res<LossLatch>,
    buttons: Query<&Interaction, (With<PlayButton>, Changed<Interaction>)>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    let pressed = keyboard.just_pressed(KeyCode::Enter)
        || keyboard.just_pressed(KeyCode::NumpadEnter)
        || keyboard.just_pressed(KeyCode::Space)
        || buttons
            .iter()
            .any(|interaction| *interaction == Interaction::Pressed);

    if !pressed || latch.is_locked() {
        return;
    }
    game_state.set(GameState::Running);
}

pub(crate) fn dismiss_menus(
    mut commands: Commands,
    overlays: Query<Entity, With<StartScreenUI>>,
    banners: Query<Entity, With<ResultBannerUI>>,
) {
    for entity in overlays.iter().chain(banners.iter()) {
        commands.entity(entity).despawn();
    }
}

fn spawn_start_overlay(commands: &mut Commands) {
    commands
        .spawn((
            StartScreenUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.02, 0.05, 0.1, 0.8)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("CAVE TREK"),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.85, 0.3)),
                Node {
                    margin: UiRect::bottom(Val::Px(16.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Reach the cave before the critter gets you"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.85)),
                Node {
                    margin: UiRect::bottom(Val::Px(48.0)),
                    ..default()
                },
            ));

            parent
                .spawn((
                    PlayButton,
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(48.0), Val::Px(16.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.2, 0.25, 0.2)),
                    BorderColor::all(Color::srgb(0.5, 0.6, 0.5)),
                ))
                .with_child((
                    Text::new("PLAY"),
                    TextFont {
                        font_size: 28.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.9, 0.9, 0.9)),
                ));

            parent.spawn((
                Text::new("Hold \u{2190}/\u{2192} to walk, Space to jump, stomp the critter"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.5, 0.55, 0.6)),
                Node {
                    margin: UiRect::top(Val::Px(24.0)),
                    ..default()
                },
            ));
        });
}
