//! Level domain: axis-separated collision against solid tiles.

use std::ops::RangeInclusive;

use crate::entity::Body;
use crate::level::{TileQuery, tile_index, tile_span};

/// Keeps a body from entering solid tiles along one axis at a time.
///
/// Callers resolve X, commit `x += dx`, then resolve Y and commit `y += dy`.
pub trait CollisionResolver {
    fn resolve_axis_x(&self, body: &mut Body, map: &dyn TileQuery);

    fn resolve_axis_y(&self, body: &mut Body, map: &dyn TileQuery);
}

/// On contact the body is snapped flush against the nearest blocking tile
/// along the whole swept path and its velocity on that axis is zeroed, so the
/// following commit moves it by nothing. Thin walls hold at any speed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TileCollision;

/// Tile lines whose near edge lies in `[edge, edge + delta]` when moving
/// toward positive coordinates, nearest first.
fn swept_ahead(edge: f32, delta: f32, size: f32) -> RangeInclusive<i32> {
    let first = (edge / size).ceil() as i32;
    let last = ((edge + delta) / size).ceil() as i32 - 1;
    first..=last
}

/// Tile lines whose far edge lies in `[edge + delta, edge]` when moving
/// toward negative coordinates, nearest first.
fn swept_behind(edge: f32, delta: f32, size: f32) -> impl Iterator<Item = i32> {
    let first = tile_index(edge, size) - 1;
    let last = tile_index(edge + delta, size);
    (last..=first).rev()
}

impl CollisionResolver for TileCollision {
    fn resolve_axis_x(&self, body: &mut Body, map: &dyn TileQuery) {
        if body.dx == 0.0 {
            return;
        }
        let size = map.tile_size();
        let rows = tile_span(body.y, body.bottom(), size);
        let blocked = |col: i32| rows.clone().any(|row| map.is_tile_solid(row, col));

        if body.dx > 0.0 {
            if let Some(col) = swept_ahead(body.right(), body.dx, size).find(|&c| blocked(c)) {
                body.x = col as f32 * size - body.width;
                body.dx = 0.0;
            }
        } else if let Some(col) = swept_behind(body.x, body.dx, size).find(|&c| blocked(c)) {
            body.x = (col + 1) as f32 * size;
            body.dx = 0.0;
        }
    }

    fn resolve_axis_y(&self, body: &mut Body, map: &dyn TileQuery) {
        if body.dy == 0.0 {
            return;
        }
        let size = map.tile_size();
        let cols = tile_span(body.x, body.right(), size);
        let blocked = |row: i32| cols.clone().any(|col| map.is_tile_solid(row, col));

        if body.dy > 0.0 {
            if let Some(row) = swept_ahead(body.bottom(), body.dy, size).find(|&r| blocked(r)) {
                body.y = row as f32 * size - body.height;
                body.dy = 0.0;
            }
        } else if let Some(row) = swept_behind(body.y, body.dy, size).find(|&r| blocked(r)) {
            body.y = (row + 1) as f32 * size;
            body.dy = 0.0;
        }
    }
}
