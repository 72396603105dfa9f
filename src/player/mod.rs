//! Player domain: the player entity, its input and its Bevy wiring.

mod entity;
mod input;
mod physics;
mod sprites;
mod systems;


pub use entity::{Facing, PLAYER_FALLBACK_COLOR, PlayerEntity};
pub use input::{ControlState, Controls};
pub use physics::PlayerPhysics;
pub use sprites::{PlayerSprites, SpriteKind, SpriteManifest};
pub use systems::build_player;

use bevy::prelude::*;

use crate::core::{FrameSet, GameState, ViewSet};
use crate::level::build_level;
use crate::player::input::read_input;
use crate::player::sprites::load_sprite_manifest;
use crate::player::systems::{
    detect_player_death, draw_player, follow_player, spawn_player, tick_player,
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlState>()
            .add_systems(Startup, load_sprite_manifest)
            .add_systems(OnEnter(GameState::Run), spawn_player.after(build_level))
            .add_systems(Update, read_input)
            .add_systems(FixedUpdate, tick_player.in_set(FrameSet::Simulate))
            .add_systems(Update, follow_player.in_set(ViewSet::Camera))
            .add_systems(Update, draw_player.in_set(ViewSet::Draw))
            .add_systems(
                Update,
                detect_player_death.run_if(in_state(GameState::Run)),
            );
    }
}
