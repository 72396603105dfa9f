//! Level domain: tests for the tile map, collision and pickups.

use super::{
    CollisionResolver, MapError, Tile, TileCollision, TileKind, TileMap, TileQuery,
    apply_thorns, build_tile_map, check_fall_out, collect_coins_at, tile_index, tile_span,
};
use crate::audio::{AudioCue, CueBuffer};
use crate::content::{FALLBACK_LEVEL_ID, LevelDef};
use crate::core::DisplayScale;
use crate::entity::{Actor, Body};
use crate::player::{PlayerEntity, PlayerPhysics, PlayerSprites};

fn map(rows: &[&str]) -> TileMap {
    TileMap::from_rows(rows, 10.0).unwrap()
}

fn player_at(x: f32, y: f32) -> PlayerEntity {
    PlayerEntity::new(
        Body::new(x, y, 8.0, 10.0, 3),
        PlayerSprites::default(),
        PlayerPhysics::default(),
    )
}

// ============================================================================
// Tiles
// ============================================================================

#[test]
fn test_tile_flags() {
    let ground = Tile::new(TileKind::Ground);
    assert!(ground.is_solid() && !ground.is_kill());

    let lava = Tile::new(TileKind::Lava);
    assert!(lava.is_solid() && lava.is_kill());

    let spikes = Tile::new(TileKind::Spikes);
    assert!(!spikes.is_solid() && spikes.is_kill());

    let coin = Tile::new(TileKind::Coin);
    assert!(coin.is_coin() && !coin.is_solid());

    let thorns = Tile::new(TileKind::Thorns);
    assert!(thorns.is_hurt() && !thorns.is_kill() && !thorns.is_solid());

    assert!(Tile::EMPTY.is_empty());
    assert!(!Tile::EMPTY.is_solid() && !Tile::EMPTY.is_kill());
}

#[test]
fn test_tile_glyphs() {
    assert_eq!(TileKind::from_glyph('.'), Some(TileKind::Empty));
    assert_eq!(TileKind::from_glyph('#'), Some(TileKind::Ground));
    assert_eq!(TileKind::from_glyph('^'), Some(TileKind::Spikes));
    assert_eq!(TileKind::from_glyph('~'), Some(TileKind::Lava));
    assert_eq!(TileKind::from_glyph('o'), Some(TileKind::Coin));
    assert_eq!(TileKind::from_glyph('*'), Some(TileKind::Thorns));
    assert_eq!(TileKind::from_glyph('x'), None);
}

// ============================================================================
// Tile map
// ============================================================================

#[test]
fn test_from_rows_dimensions_and_spawn() {
    let map = map(&["....", ".P.#", "####"]);

    assert_eq!(map.rows(), 3);
    assert_eq!(map.cols(), 4);
    assert_eq!(map.spawn_cell(), (1, 1));
    // The spawn marker is an empty cell
    assert!(map.tile(1, 1).is_empty());
    assert_eq!(map.tile(1, 3).kind, TileKind::Ground);
    assert_eq!(map.pixel_size().x, 40.0);
    assert_eq!(map.pixel_size().y, 30.0);
}

#[test]
fn test_from_rows_errors() {
    let empty: [&str; 0] = [];
    assert_eq!(TileMap::from_rows(&empty, 10.0).unwrap_err(), MapError::Empty);
    assert_eq!(
        TileMap::from_rows(&["P."], 0.0).unwrap_err(),
        MapError::BadTileSize(0.0)
    );
    assert_eq!(
        TileMap::from_rows(&["P..", ".."], 10.0).unwrap_err(),
        MapError::Ragged {
            row: 1,
            expected: 3,
            found: 2
        }
    );
    assert_eq!(
        TileMap::from_rows(&["P.x"], 10.0).unwrap_err(),
        MapError::UnknownGlyph {
            row: 0,
            col: 2,
            glyph: 'x'
        }
    );
    assert_eq!(
        TileMap::from_rows(&["...", "###"], 10.0).unwrap_err(),
        MapError::MissingSpawn
    );
    assert_eq!(
        TileMap::from_rows(&["P.P"], 10.0).unwrap_err(),
        MapError::DuplicateSpawn { row: 0, col: 2 }
    );
}

#[test]
fn test_out_of_range_tiles_are_empty() {
    let map = map(&["###", "#P#", "###"]);

    for (row, col) in [(-1, 0), (0, -1), (3, 0), (0, 3), (-50, 99)] {
        assert_eq!(map.tile(row, col), Tile::EMPTY);
        assert!(!map.is_tile_solid(row, col));
        assert_eq!(map.get(row, col), None);
    }
}

#[test]
fn test_set_replaces_tile_in_range_only() {
    let mut map = map(&["Po"]);

    assert!(map.set(0, 1, Tile::EMPTY));
    assert!(map.tile(0, 1).is_empty());
    assert!(!map.set(0, 2, Tile::new(TileKind::Ground)));
}

#[test]
fn test_spawn_position_centers_body_on_floor() {
    let map = map(&["....", "..P.", "####"]);

    let spawn = map.spawn_position(8.0, 10.0);
    assert_eq!(spawn.x, 21.0);
    assert_eq!(spawn.y, 10.0);

    let tall = map.spawn_position(6.0, 15.0);
    assert_eq!(tall.x, 22.0);
    assert_eq!(tall.y, 5.0);
}

#[test]
fn test_from_level_scales_tile_size() {
    let level = LevelDef {
        id: "tiny".to_string(),
        name: "Tiny".to_string(),
        tile_size: 20,
        rows: vec!["P.".to_string(), "##".to_string()],
    };

    let map = TileMap::from_level(&level, &DisplayScale::new(2.0)).unwrap();

    assert_eq!(map.tile_size(), 40.0);
    assert_eq!(map.level_id(), "tiny");
}

#[test]
fn test_build_tile_map_falls_back_on_bad_level() {
    let broken = LevelDef {
        id: "broken".to_string(),
        name: "Broken".to_string(),
        tile_size: 20,
        rows: vec!["...".to_string(), "##".to_string()],
    };

    let map = build_tile_map(&broken, &DisplayScale::default()).unwrap();

    assert_eq!(map.level_id(), FALLBACK_LEVEL_ID);
}

#[test]
fn test_cells_are_row_major() {
    let map = map(&["P#", "o."]);
    let cells: Vec<(i32, i32, TileKind)> = map.cells().map(|(r, c, t)| (r, c, t.kind)).collect();

    assert_eq!(
        cells,
        vec![
            (0, 0, TileKind::Empty),
            (0, 1, TileKind::Ground),
            (1, 0, TileKind::Coin),
            (1, 1, TileKind::Empty),
        ]
    );
}

// ============================================================================
// World to tile conversion
// ============================================================================

#[test]
fn test_tile_index_floors() {
    assert_eq!(tile_index(0.0, 10.0), 0);
    assert_eq!(tile_index(9.99, 10.0), 0);
    assert_eq!(tile_index(10.0, 10.0), 1);
    assert_eq!(tile_index(-0.5, 10.0), -1);
    assert_eq!(tile_index(-10.0, 10.0), -1);
    assert_eq!(tile_index(-10.5, 10.0), -2);
}

#[test]
fn test_tile_span_is_half_open() {
    assert_eq!(tile_span(0.0, 10.0, 10.0), 0..=0);
    assert_eq!(tile_span(5.0, 15.0, 10.0), 0..=1);
    assert_eq!(tile_span(10.0, 20.0, 10.0), 1..=1);
    assert!(tile_span(10.0, 10.0, 10.0).is_empty());
}

// ============================================================================
// Collision
// ============================================================================

#[test]
fn test_collision_lands_flush_on_floor() {
    let map = map(&["P..", "...", "###"]);
    let mut body = Body::new(0.0, 7.0, 8.0, 10.0, 1);
    body.dy = 5.0;

    TileCollision.resolve_axis_y(&mut body, &map);

    assert_eq!(body.y, 10.0);
    assert_eq!(body.dy, 0.0);
}

#[test]
fn test_collision_free_fall_is_untouched() {
    let map = map(&["P..", "...", "...", "###"]);
    let mut body = Body::new(0.0, 0.0, 8.0, 10.0, 1);
    body.dy = 5.0;

    TileCollision.resolve_axis_y(&mut body, &map);

    assert_eq!(body.y, 0.0);
    assert_eq!(body.dy, 5.0);
}

#[test]
fn test_collision_stops_at_ceiling() {
    let map = map(&["###", "...", "P.."]);
    let mut body = Body::new(0.0, 12.0, 8.0, 10.0, 1);
    body.dy = -4.0;

    TileCollision.resolve_axis_y(&mut body, &map);

    assert_eq!(body.y, 10.0);
    assert_eq!(body.dy, 0.0);
}

#[test]
fn test_collision_stops_at_walls() {
    let map = map(&["#P.#"]);

    let mut right = Body::new(20.0, 0.0, 8.0, 10.0, 1);
    right.dx = 3.0;
    TileCollision.resolve_axis_x(&mut right, &map);
    assert_eq!(right.x, 22.0);
    assert_eq!(right.dx, 0.0);

    let mut left = Body::new(11.0, 0.0, 8.0, 10.0, 1);
    left.dx = -3.0;
    TileCollision.resolve_axis_x(&mut left, &map);
    assert_eq!(left.x, 10.0);
    assert_eq!(left.dx, 0.0);
}

#[test]
fn test_collision_passes_through_non_solid_tiles() {
    let map = map(&["P^o*.", "....."]);
    let mut body = Body::new(0.0, 0.0, 8.0, 10.0, 1);
    body.dx = 3.0;

    for _ in 0..5 {
        TileCollision.resolve_axis_x(&mut body, &map);
        body.x += body.dx;
    }

    assert_eq!(body.x, 15.0);
    assert_eq!(body.dx, 3.0);
}

#[test]
fn test_fast_fall_lands_on_thin_floor() {
    let map = map(&["P..", "...", "...", "###", "..."]);
    let mut body = Body::new(0.0, 0.0, 8.0, 10.0, 1);
    // Bottom would end at 55, past the whole floor row
    body.dy = 45.0;

    TileCollision.resolve_axis_y(&mut body, &map);

    assert_eq!(body.y, 20.0);
    assert_eq!(body.dy, 0.0);
}

#[test]
fn test_long_drop_never_tunnels() {
    for floor_row in 2..120 {
        let mut rows = vec!["P..".to_string()];
        rows.extend((1..floor_row).map(|_| "...".to_string()));
        rows.push("###".to_string());
        rows.push("...".to_string());
        let map = TileMap::from_rows(&rows, 10.0).unwrap();

        let mut body = Body::new(0.0, 0.0, 8.0, 10.0, 1);
        let mut landed = false;
        for _ in 0..2000 {
            body.dy += 0.2;
            TileCollision.resolve_axis_y(&mut body, &map);
            body.y += body.dy;
            if body.dy == 0.0 {
                landed = true;
                break;
            }
        }

        assert!(landed, "fell through floor at row {}", floor_row);
        assert_eq!(body.y, (floor_row * 10 - 10) as f32);
    }
}

#[test]
fn test_fast_rise_stops_at_thin_ceiling() {
    let map = map(&["...", "###", "...", "...", "...", "P..", "###"]);
    let mut body = Body::new(0.0, 50.0, 8.0, 10.0, 1);
    body.dy = -45.0;

    TileCollision.resolve_axis_y(&mut body, &map);

    assert_eq!(body.y, 20.0);
    assert_eq!(body.dy, 0.0);
}

#[test]
fn test_fast_horizontal_stops_at_thin_wall() {
    let map = map(&["P.....#...."]);

    let mut right = Body::new(0.0, 0.0, 8.0, 10.0, 1);
    right.dx = 65.0;
    TileCollision.resolve_axis_x(&mut right, &map);
    assert_eq!(right.x, 52.0);
    assert_eq!(right.dx, 0.0);

    let mut left = Body::new(100.0, 0.0, 8.0, 10.0, 1);
    left.dx = -65.0;
    TileCollision.resolve_axis_x(&mut left, &map);
    assert_eq!(left.x, 70.0);
    assert_eq!(left.dx, 0.0);
}

#[test]
fn test_fast_fall_lands_on_lava_surface() {
    let map = map(&["P..", "...", "...", "~~~", "..."]);
    let mut body = Body::new(0.0, 0.0, 8.0, 10.0, 1);
    body.dy = 45.0;

    TileCollision.resolve_axis_y(&mut body, &map);

    assert_eq!(body.y, 20.0);
}

// ============================================================================
// Pickups and hazards
// ============================================================================

#[test]
fn test_collect_coins_clears_tiles() {
    let mut map = map(&["Poo.", "####"]);
    let mut player = player_at(6.0, 0.0);
    let mut cues = CueBuffer::default();

    let collected = collect_coins_at(&mut map, &mut player, &mut cues);

    // Overlaps columns 0 and 1 only
    assert_eq!(collected.len(), 1);
    assert_eq!((collected[0].row, collected[0].col), (0, 1));
    assert_eq!(player.coins(), 1);
    assert!(map.tile(0, 1).is_empty());
    assert!(map.tile(0, 2).is_coin());
    assert_eq!(cues.cues, vec![AudioCue::Coin]);

    // Nothing left to collect in the same spot
    assert!(collect_coins_at(&mut map, &mut player, &mut cues).is_empty());
    assert_eq!(player.coins(), 1);
}

#[test]
fn test_thorns_hurt_with_cooldown() {
    let map = map(&["P*.", "###"]);
    let mut player = player_at(4.0, 0.0);
    let mut cues = CueBuffer::default();

    assert!(apply_thorns(&map, &mut player, &mut cues));
    assert!(apply_thorns(&map, &mut player, &mut cues));

    assert_eq!(player.health(), 2);
    assert_eq!(cues.cues, vec![AudioCue::Hurt]);
}

#[test]
fn test_thorns_out_of_reach() {
    let map = map(&["P.*", "###"]);
    let mut player = player_at(0.0, 0.0);
    let mut cues = CueBuffer::default();

    assert!(!apply_thorns(&map, &mut player, &mut cues));
    assert_eq!(player.health(), 3);
}

#[test]
fn test_fall_out_kills_below_level() {
    let map = map(&["P..", "..."]);
    let mut cues = CueBuffer::default();

    let mut inside = player_at(0.0, 20.0);
    assert!(!check_fall_out(&map, &mut inside, &mut cues));
    assert!(inside.body().is_alive());

    let mut below = player_at(0.0, 20.5);
    assert!(check_fall_out(&map, &mut below, &mut cues));
    assert_eq!(below.health(), 0);
    assert_eq!(cues.cues, vec![AudioCue::Lose]);
}

#[test]
fn test_dead_player_collects_nothing() {
    let mut map = map(&["Po", "##"]);
    let mut player = player_at(6.0, 0.0);
    player.set_health(0);
    let mut cues = CueBuffer::default();

    assert!(collect_coins_at(&mut map, &mut player, &mut cues).is_empty());
    assert!(!check_fall_out(&map, &mut player, &mut cues));
    assert!(map.tile(0, 1).is_coin());
    assert!(cues.is_empty());
}
