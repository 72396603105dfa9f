//! Level domain: building the map on session start and drawing its tiles.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::content::{ContentRegistry, GameplayDefaults, LevelDef};
use crate::core::{CameraOffset, DisplayScale, FollowCamera, ScreenRect};
use crate::level::{CoinCollected, MapError, TileMap, TileQuery};

const TILE_Z: f32 = 0.0;

/// Marker for everything that belongs to the running session and is
/// despawned on retry.
#[derive(Component, Debug)]
pub struct LevelEntity;

/// Grid cell drawn by a tile sprite.
#[derive(Component, Debug, Clone, Copy)]
pub struct TileSprite {
    pub row: i32,
    pub col: i32,
}

/// Build the configured level, falling back to the built-in one if it does
/// not parse.
pub fn build_tile_map(level: &LevelDef, scale: &DisplayScale) -> Result<TileMap, MapError> {
    TileMap::from_level(level, scale).or_else(|e| {
        error!("Level '{}' is invalid: {}", level.id, e);
        TileMap::from_level(&LevelDef::fallback(), scale)
    })
}

pub fn build_level(
    mut commands: Commands,
    registry: Res<ContentRegistry>,
    defaults: Res<GameplayDefaults>,
    scale: Res<DisplayScale>,
) {
    let level = registry.level_or_fallback(&defaults.start_level);
    let map = match build_tile_map(&level, &scale) {
        Ok(map) => map,
        Err(e) => {
            error!("No playable level: {}", e);
            return;
        }
    };
    let size = map.tile_size();

    let mut count = 0;
    for (row, col, tile) in map.cells() {
        if tile.is_empty() {
            continue;
        }
        commands.spawn((
            LevelEntity,
            TileSprite { row, col },
            Sprite::from_color(tile.color(), Vec2::splat(size)),
            Transform::from_xyz(0.0, 0.0, TILE_Z),
        ));
        count += 1;
    }

    info!(
        "Built level '{}' ({}x{} tiles, {} drawn, tile size {})",
        map.level_id(),
        map.cols(),
        map.rows(),
        count,
        size
    );
    commands.insert_resource(map);
}

pub(crate) fn sync_tile_sprites(
    map: Res<TileMap>,
    camera: Res<FollowCamera>,
    mut tiles: Query<(&TileSprite, &mut Transform)>,
) {
    let size = map.tile_size();
    for (cell, mut transform) in &mut tiles {
        let rect = ScreenRect::new(
            (cell.col as f32 * size - camera.offset_x()) as i32,
            (cell.row as f32 * size - camera.offset_y()) as i32,
            size as i32,
            size as i32,
        );
        transform.translation = rect.view_translation(camera.viewport, TILE_Z);
    }
}

pub(crate) fn despawn_collected_coins(
    mut commands: Commands,
    mut collected: MessageReader<CoinCollected>,
    tiles: Query<(Entity, &TileSprite)>,
) {
    for event in collected.read() {
        for (entity, cell) in &tiles {
            if cell.row == event.row && cell.col == event.col {
                commands.entity(entity).despawn();
            }
        }
    }
}

pub(crate) fn cleanup_level(mut commands: Commands, entities: Query<Entity, With<LevelEntity>>) {
    for entity in &entities {
        commands.entity(entity).despawn();
    }
}
