//! Level domain: coin pickups, thorn contact and falling out of the level.
//!
//! These run after the player's own update each fixed frame.

use bevy::ecs::message::{Message, MessageWriter};
use bevy::prelude::*;

use crate::audio::{AudioCues, CueBuffer};
use crate::entity::Actor;
use crate::level::{Tile, TileMap, TileQuery, tile_span};
use crate::player::PlayerEntity;

/// A coin tile was picked up and cleared from the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinCollected {
    pub row: i32,
    pub col: i32,
}

impl Message for CoinCollected {}

fn overlapped_cells(player: &PlayerEntity, size: f32) -> Vec<(i32, i32)> {
    let body = player.body();
    let rows = tile_span(body.y, body.bottom(), size);
    let cols = tile_span(body.x, body.right(), size);
    rows.flat_map(|row| cols.clone().map(move |col| (row, col)))
        .collect()
}

/// Clear every coin tile the player overlaps, crediting one coin each.
pub fn collect_coins_at(
    map: &mut TileMap,
    player: &mut PlayerEntity,
    audio: &mut dyn AudioCues,
) -> Vec<CoinCollected> {
    if !player.body().is_alive() {
        return Vec::new();
    }
    let mut collected = Vec::new();
    for (row, col) in overlapped_cells(player, map.tile_size()) {
        if map.tile(row, col).is_coin() && map.set(row, col, Tile::EMPTY) {
            player.add_coins(1, audio);
            collected.push(CoinCollected { row, col });
        }
    }
    collected
}

/// Apply cooldown-gated damage if the player touches thorns.
pub fn apply_thorns(map: &TileMap, player: &mut PlayerEntity, audio: &mut dyn AudioCues) -> bool {
    if !player.body().is_alive() {
        return false;
    }
    let touching = overlapped_cells(player, map.tile_size())
        .into_iter()
        .any(|(row, col)| map.tile(row, col).is_hurt());
    if touching {
        player.take_damage(1, audio);
    }
    touching
}

/// Kill the player once its top edge passes the bottom of the level.
pub fn check_fall_out(map: &TileMap, player: &mut PlayerEntity, audio: &mut dyn AudioCues) -> bool {
    let body = player.body();
    if !body.is_alive() || body.y <= map.pixel_size().y {
        return false;
    }
    let health = body.health;
    player.body_mut().damage(health);
    audio.play_lose();
    info!("Player fell out of level '{}'", map.level_id());
    true
}

pub(crate) fn resolve_pickups(
    mut map: ResMut<TileMap>,
    mut cues: ResMut<CueBuffer>,
    mut players: Query<&mut PlayerEntity>,
    mut collected_events: MessageWriter<CoinCollected>,
) {
    for mut player in &mut players {
        let collected = collect_coins_at(&mut map, &mut player, &mut *cues);
        if !collected.is_empty() {
            info!("Collected {} coin(s). Total: {}", collected.len(), player.coins());
        }
        for event in collected {
            collected_events.write(event);
        }
        apply_thorns(&map, &mut player, &mut *cues);
        check_fall_out(&map, &mut player, &mut *cues);
    }
}
