//! Level domain: the tile grid and world-to-tile conversion.

use bevy::prelude::*;
use std::ops::RangeInclusive;

use crate::content::LevelDef;
use crate::core::DisplayScale;
use crate::level::{Tile, TileKind};

const SPAWN_GLYPH: char = 'P';

/// Read access to tiles by row and column.
///
/// Indices outside the stored grid are answered with [`Tile::EMPTY`]:
/// neither solid nor lethal.
pub trait TileQuery {
    /// Edge length of one tile in world pixels.
    fn tile_size(&self) -> f32;

    fn tile(&self, row: i32, col: i32) -> Tile;

    fn is_tile_solid(&self, row: i32, col: i32) -> bool {
        self.tile(row, col).is_solid()
    }
}

/// Tile index containing the world coordinate. Floors, so negative
/// coordinates land on negative indices.
pub fn tile_index(coord: f32, tile_size: f32) -> i32 {
    (coord / tile_size).floor() as i32
}

/// Tile indices overlapped by the half-open pixel span `[min, max)`.
/// Empty when the span has no width.
pub fn tile_span(min: f32, max: f32, tile_size: f32) -> RangeInclusive<i32> {
    let first = tile_index(min, tile_size);
    let last = (max / tile_size).ceil() as i32 - 1;
    first..=last
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    Empty,
    BadTileSize(f32),
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    UnknownGlyph {
        row: usize,
        col: usize,
        glyph: char,
    },
    MissingSpawn,
    DuplicateSpawn {
        row: usize,
        col: usize,
    },
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::Empty => write!(f, "level has no tiles"),
            MapError::BadTileSize(size) => write!(f, "tile size must be positive, got {}", size),
            MapError::Ragged {
                row,
                expected,
                found,
            } => write!(f, "row {} has {} columns, expected {}", row, found, expected),
            MapError::UnknownGlyph { row, col, glyph } => {
                write!(f, "unknown tile '{}' at row {}, column {}", glyph, row, col)
            }
            MapError::MissingSpawn => write!(f, "no '{}' spawn marker", SPAWN_GLYPH),
            MapError::DuplicateSpawn { row, col } => {
                write!(f, "second spawn marker at row {}, column {}", row, col)
            }
        }
    }
}

impl std::error::Error for MapError {}

#[derive(Resource, Debug, Clone)]
pub struct TileMap {
    level_id: String,
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
    tile_size: f32,
    spawn: (i32, i32),
}

impl TileMap {
    /// Parse a grid of glyph rows (top row first).
    pub fn from_rows<S: AsRef<str>>(rows: &[S], tile_size: f32) -> Result<Self, MapError> {
        if !(tile_size > 0.0) {
            return Err(MapError::BadTileSize(tile_size));
        }
        let cols = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        if cols == 0 {
            return Err(MapError::Empty);
        }

        let mut tiles = Vec::with_capacity(rows.len() * cols);
        let mut spawn = None;

        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != cols {
                return Err(MapError::Ragged {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                if glyph == SPAWN_GLYPH {
                    if spawn.is_some() {
                        return Err(MapError::DuplicateSpawn { row, col });
                    }
                    spawn = Some((row as i32, col as i32));
                    tiles.push(Tile::EMPTY);
                    continue;
                }
                let kind =
                    TileKind::from_glyph(glyph).ok_or(MapError::UnknownGlyph { row, col, glyph })?;
                tiles.push(Tile::new(kind));
            }
        }

        let spawn = spawn.ok_or(MapError::MissingSpawn)?;

        Ok(Self {
            level_id: String::new(),
            rows: rows.len(),
            cols,
            tiles,
            tile_size,
            spawn,
        })
    }

    /// Build a level, scaling its tile size to screen pixels.
    pub fn from_level(level: &LevelDef, scale: &DisplayScale) -> Result<Self, MapError> {
        let mut map = Self::from_rows(&level.rows, scale.sc(level.tile_size) as f32)?;
        map.level_id = level.id.clone();
        Ok(map)
    }

    pub fn level_id(&self) -> &str {
        &self.level_id
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Level extent in world pixels.
    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new(
            self.cols as f32 * self.tile_size,
            self.rows as f32 * self.tile_size,
        )
    }

    pub fn spawn_cell(&self) -> (i32, i32) {
        self.spawn
    }

    /// Top-left corner for a body of the given size standing in the spawn
    /// cell: horizontally centered, feet on the cell's bottom edge.
    pub fn spawn_position(&self, width: f32, height: f32) -> Vec2 {
        let (row, col) = self.spawn;
        let x = col as f32 * self.tile_size + (self.tile_size - width) * 0.5;
        let y = (row + 1) as f32 * self.tile_size - height;
        Vec2::new(x.floor(), y)
    }

    fn offset(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }

    pub fn get(&self, row: i32, col: i32) -> Option<Tile> {
        self.offset(row, col).map(|i| self.tiles[i])
    }

    /// Replace a tile. Returns false when the cell is out of range.
    pub fn set(&mut self, row: i32, col: i32, tile: Tile) -> bool {
        match self.offset(row, col) {
            Some(i) => {
                self.tiles[i] = tile;
                true
            }
            None => false,
        }
    }

    /// Every cell with its row and column, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, Tile)> + '_ {
        let cols = self.cols;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, tile)| ((i / cols) as i32, (i % cols) as i32, *tile))
    }
}

impl TileQuery for TileMap {
    fn tile_size(&self) -> f32 {
        self.tile_size
    }

    fn tile(&self, row: i32, col: i32) -> Tile {
        self.get(row, col).unwrap_or(Tile::EMPTY)
    }
}
