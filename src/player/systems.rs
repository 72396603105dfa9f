//! Player domain: Bevy systems driving the player entity.

use bevy::prelude::*;

use crate::audio::CueBuffer;
use crate::content::PlayerTuning;
use crate::core::{DisplayScale, FollowCamera, GameState};
use crate::entity::{Actor, Body, FrameContext, SpriteSurface};
use crate::level::{LevelEntity, TileCollision, TileMap};
use crate::player::{ControlState, PlayerEntity, PlayerPhysics, PlayerSprites, SpriteManifest};

const PLAYER_Z: f32 = 10.0;

/// Build the player from tuning, standing in the level's spawn cell.
pub fn build_player(
    map: &TileMap,
    tuning: &PlayerTuning,
    scale: &DisplayScale,
    sprites: PlayerSprites,
) -> PlayerEntity {
    let width = scale.sc(tuning.width) as f32;
    let height = scale.sc(tuning.height) as f32;
    let spawn = map.spawn_position(width, height);
    let body = Body::new(spawn.x, spawn.y, width, height, tuning.start_health);
    PlayerEntity::new(body, sprites, PlayerPhysics::from_tuning(tuning, scale))
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    map: Option<Res<TileMap>>,
    tuning: Res<PlayerTuning>,
    scale: Res<DisplayScale>,
    manifest: Res<SpriteManifest>,
    asset_server: Res<AssetServer>,
) {
    let Some(map) = map else {
        warn!("No tile map, player not spawned");
        return;
    };
    let sprites = PlayerSprites::load(&manifest, &asset_server);
    let player = build_player(&map, &tuning, &scale, sprites);

    info!(
        "Spawning player at ({}, {}), size {}x{}, health {}",
        player.body().x,
        player.body().y,
        player.body().width,
        player.body().height,
        player.health()
    );

    commands.spawn((
        LevelEntity,
        player,
        Sprite::default(),
        Transform::from_xyz(0.0, 0.0, PLAYER_Z),
        Visibility::Hidden,
    ));
}

pub(crate) fn tick_player(
    controls: Res<ControlState>,
    map: Res<TileMap>,
    mut cues: ResMut<CueBuffer>,
    mut players: Query<&mut PlayerEntity>,
) {
    for mut player in &mut players {
        let mut ctx = FrameContext {
            map: &*map,
            collision: &TileCollision,
            controls: &*controls,
            audio: &mut *cues,
        };
        player.update(&mut ctx);
    }
}

pub(crate) fn follow_player(
    map: Res<TileMap>,
    mut camera: ResMut<FollowCamera>,
    players: Query<&PlayerEntity>,
) {
    let Ok(player) = players.single() else {
        return;
    };
    if !player.body().is_alive() {
        return;
    }
    camera.follow(player.body().center(), map.pixel_size());
}

pub(crate) fn draw_player(
    images: Res<Assets<Image>>,
    camera: Res<FollowCamera>,
    mut players: Query<(&PlayerEntity, &mut Sprite, &mut Transform, &mut Visibility)>,
) {
    for (player, mut sprite, mut transform, mut visibility) in &mut players {
        let mut surface = SpriteSurface {
            images: &images,
            sprite: &mut sprite,
            transform: &mut transform,
            visibility: &mut visibility,
            viewport: camera.viewport,
            z: PLAYER_Z,
        };
        surface.begin();
        player.draw(&mut surface, &*camera);
    }
}

pub(crate) fn detect_player_death(
    players: Query<&PlayerEntity>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Ok(player) = players.single() else {
        return;
    };
    if !player.body().is_alive() {
        info!(
            "Game over: health {}, coins {}",
            player.health(),
            player.coins()
        );
        next_state.set(GameState::GameOver);
    }
}
