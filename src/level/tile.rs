//! Level domain: tile kinds and their flags.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileKind {
    #[default]
    Empty,
    Ground,
    /// Lethal, can be fallen into.
    Spikes,
    /// Lethal and solid.
    Lava,
    Coin,
    /// Hurts on contact, subject to the damage cooldown.
    Thorns,
}

impl TileKind {
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(TileKind::Empty),
            '#' => Some(TileKind::Ground),
            '^' => Some(TileKind::Spikes),
            '~' => Some(TileKind::Lava),
            'o' => Some(TileKind::Coin),
            '*' => Some(TileKind::Thorns),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    pub kind: TileKind,
}

impl Tile {
    pub const EMPTY: Tile = Tile {
        kind: TileKind::Empty,
    };

    pub fn new(kind: TileKind) -> Self {
        Self { kind }
    }

    pub fn is_solid(&self) -> bool {
        matches!(self.kind, TileKind::Ground | TileKind::Lava)
    }

    pub fn is_kill(&self) -> bool {
        matches!(self.kind, TileKind::Spikes | TileKind::Lava)
    }

    pub fn is_coin(&self) -> bool {
        self.kind == TileKind::Coin
    }

    pub fn is_hurt(&self) -> bool {
        self.kind == TileKind::Thorns
    }

    pub fn is_empty(&self) -> bool {
        self.kind == TileKind::Empty
    }

    /// Flat color used when drawing the tile.
    pub fn color(&self) -> Color {
        match self.kind {
            TileKind::Empty => Color::NONE,
            TileKind::Ground => Color::srgb(0.75, 0.85, 0.95),
            TileKind::Spikes => Color::srgb(0.55, 0.55, 0.6),
            TileKind::Lava => Color::srgb(0.95, 0.35, 0.1),
            TileKind::Coin => Color::srgb(0.9, 0.75, 0.2),
            TileKind::Thorns => Color::srgb(0.3, 0.6, 0.25),
        }
    }
}
