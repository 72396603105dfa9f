//! Core domain: session state, display scaling and camera.

pub mod camera;
pub mod display;
mod state;

#[cfg(test)]
mod tests;

pub use camera::{CameraOffset, FollowCamera, ScreenRect};
pub use display::DisplayScale;
pub use state::GameState;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::camera::spawn_view_camera;
use crate::level::TileMap;

/// Ordering of the fixed simulation step.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum FrameSet {
    /// Entities run their own update.
    Simulate,
    /// Level reactions to where entities ended up (pickups, hazards).
    Resolve,
}

/// Ordering of per-render work.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum ViewSet {
    Camera,
    Draw,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<DisplayScale>()
            .init_resource::<FollowCamera>()
            .configure_sets(
                FixedUpdate,
                (FrameSet::Simulate, FrameSet::Resolve)
                    .chain()
                    .run_if(in_state(GameState::Run))
                    .run_if(resource_exists::<TileMap>),
            )
            .configure_sets(
                Update,
                (ViewSet::Camera, ViewSet::Draw)
                    .chain()
                    .run_if(resource_exists::<TileMap>),
            )
            .add_systems(Startup, spawn_view_camera)
            .add_systems(PreUpdate, track_viewport);
    }
}

fn track_viewport(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut camera: ResMut<FollowCamera>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    if camera.viewport != size {
        camera.viewport = size;
    }
}
