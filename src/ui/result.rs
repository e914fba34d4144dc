//! UI domain: win and loss banners.

use bevy::prelude::*;

/// Marker for the result banner shown after a run ends
#[derive(Component)]
pub struct ResultBannerUI;

pub(crate) fn spawn_won_banner(mut commands: Commands) {
    spawn_banner(
        &mut commands,
        "YOU REACHED THE CAVE!",
        Color::srgb(0.95, 0.85, 0.3),
    );
}

pub(crate) fn spawn_lost_banner(mut commands: Commands) {
    spawn_banner(
        &mut commands,
        "THE CRITTER GOT YOU!",
        Color::srgb(0.85, 0.2, 0.2),
    );
}

fn spawn_banner(commands: &mut Commands, title: &str, color: Color) {
    commands
        .spawn((
            ResultBannerUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(60.0),
                justify_content: JustifyContent::Center,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                ..default()
            },
            ZIndex(200),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(color),
            ));

            parent.spawn((
                Text::new("Press Enter or click Play for another trek"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.75)),
                Node {
                    margin: UiRect::top(Val::Px(12.0)),
                    ..default()
                },
            ));
        });
}
