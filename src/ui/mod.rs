//! UI domain: in-run HUD and the game-over flow.

mod death;
mod hud_player;

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::death::{despawn_death_screen, handle_retry, spawn_death_screen};
use crate::ui::hud_player::{spawn_player_hud, update_player_hud};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_player_hud)
            .add_systems(OnEnter(GameState::GameOver), spawn_death_screen)
            .add_systems(OnExit(GameState::GameOver), despawn_death_screen)
            .add_systems(Update, update_player_hud)
            .add_systems(
                Update,
                handle_retry.run_if(in_state(GameState::GameOver)),
            );
    }
}
