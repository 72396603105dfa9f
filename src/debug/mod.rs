//! Dev tools: a player info overlay and a couple of hotkeys.
//!
//! - F3 toggles the info overlay (position, velocity, ground, cooldown)
//! - Ctrl+H restores the player to starting health
//! - Ctrl+C grants ten coins

mod state;
mod systems;

pub use state::DebugState;

use bevy::prelude::*;

use crate::core::GameState;
use crate::debug::systems::{handle_debug_hotkeys, toggle_info_overlay, update_debug_info_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                toggle_info_overlay,
                handle_debug_hotkeys.run_if(in_state(GameState::Run)),
                update_debug_info_overlay,
            )
                .chain(),
        );
    }
}
