//! Dev-tools overlay and hotkeys for fast iteration.
//!
//! F1 toggles an info overlay. Ctrl+I toggles invincibility, Ctrl+G warps
//! the player to just before the cave.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::collision::Invincibility;
use crate::core::GameState;
use crate::movement::{JumpState, Player, PlayerPose};
use crate::track::TrackTuning;

#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub overlay_visible: bool,
}

/// Marker for the debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (toggle_overlay, handle_debug_hotkeys, update_info_overlay).chain(),
        );
    }
}

fn toggle_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }

    debug_state.overlay_visible = !debug_state.overlay_visible;
    if debug_state.overlay_visible {
        spawn_info_overlay(&mut commands);
    } else {
        for entity in &existing {
            commands.entity(entity).despawn();
        }
    }
}

fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut invincibility: ResMut<Invincibility>,
    track: Res<TrackTuning>,
    window: Query<&Window, With<PrimaryWindow>>,
    mut player: Query<&mut PlayerPose, With<Player>>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    // Ctrl+I: toggle invincibility
    if keyboard.just_pressed(KeyCode::KeyI) {
        invincibility.enabled = !invincibility.enabled;
        info!(
            "[DEBUG] Invincibility {}",
            if invincibility.enabled { "ON" } else { "OFF" }
        );
    }

    // Ctrl+G: warp to just before the cave
    if keyboard.just_pressed(KeyCode::KeyG) {
        let viewport_width = window.single().map(Window::width).unwrap_or(1280.0);
        for mut pose in &mut player {
            pose.world_progress = (track.length - viewport_width * 1.5).max(0.0);
            info!("[DEBUG] Warped to {:.0}px", pose.world_progress);
        }
    }
}

fn update_info_overlay(
    debug_state: Res<DebugState>,
    game_state: Res<State<GameState>>,
    track: Res<TrackTuning>,
    invincibility: Res<Invincibility>,
    player: Query<(&PlayerPose, &JumpState), With<Player>>,
    mut overlay: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    if !debug_state.overlay_visible {
        return;
    }
    let (Some((pose, jump)), Ok(mut text)) = (player.iter().next(), overlay.single_mut()) else {
        return;
    };

    **text = format!(
        "State: {:?}\nScreen x: {:.0}\nProgress: {:.0}/{:.0}\nAirborne: {} (boost {:.2}s)\nInvincible: {}",
        game_state.get(),
        pose.screen_x,
        pose.world_progress,
        track.length,
        jump.airborne,
        jump.boost_timer,
        invincibility.enabled
    );
}

fn spawn_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            top: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
