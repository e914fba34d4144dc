mod collision;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod movement;
mod obstacle;
mod track;
mod ui;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Cave Trek".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        content::ContentPlugin,
        core::CorePlugin,
        movement::MovementPlugin,
        collision::CollisionPlugin,
        obstacle::ObstaclePlugin,
        track::TrackPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
