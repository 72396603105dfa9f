mod audio;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod entity;
mod level;
mod player;
mod ui;

use bevy::prelude::*;
use bevy::window::WindowResolution;

fn main() {
    let mut app = App::new();
    app.insert_resource(ClearColor(Color::srgb(0.08, 0.1, 0.16)))
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Floe Runner".to_string(),
                        resolution: WindowResolution::new(960, 540),
                        resizable: true,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            level::LevelPlugin,
            player::PlayerPlugin,
            audio::SoundPlugin,
            ui::UiPlugin,
        ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
