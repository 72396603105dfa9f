//! Level domain: tile map, tile collision, pickups and hazards.

mod collision;
mod map;
mod pickups;
mod spawn;
mod tile;

#[cfg(test)]
mod tests;

pub use collision::{CollisionResolver, TileCollision};
pub use map::{MapError, TileMap, TileQuery, tile_index, tile_span};
pub use pickups::{CoinCollected, apply_thorns, check_fall_out, collect_coins_at};
pub use spawn::{LevelEntity, build_level, build_tile_map};
pub use tile::{Tile, TileKind};

use bevy::prelude::*;

use crate::core::{FrameSet, GameState, ViewSet};
use crate::level::pickups::resolve_pickups;
use crate::level::spawn::{cleanup_level, despawn_collected_coins, sync_tile_sprites};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<CoinCollected>()
            .add_systems(OnEnter(GameState::Run), build_level)
            .add_systems(OnExit(GameState::GameOver), cleanup_level)
            .add_systems(FixedUpdate, resolve_pickups.in_set(FrameSet::Resolve))
            .add_systems(
                Update,
                (despawn_collected_coins, sync_tile_sprites)
                    .chain()
                    .in_set(ViewSet::Draw),
            );
    }
}
