//! Data definitions for all RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. Tuning values are in design units; they are scaled
//! through `DisplayScale` when the player and level are built.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Session defaults (gameplay.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplayDefaults {
    pub schema_version: u32,
    pub display_scale: f32,
    pub start_level: String,
    /// Simulation frames per second.
    pub fixed_hz: f64,
}

impl Default for GameplayDefaults {
    fn default() -> Self {
        Self {
            schema_version: 1,
            display_scale: 2.0,
            start_level: FALLBACK_LEVEL_ID.to_string(),
            fixed_hz: 60.0,
        }
    }
}

// ============================================================================
// Player tuning (player.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub gravity: f32,
    /// Negative is upward.
    pub jump_speed: f32,
    pub move_speed: f32,
    pub damage_cooldown_frames: u32,
    /// Frames per walk-cycle sprite flip.
    pub anim_speed: u32,
    pub draw_size: i32,
    pub width: i32,
    pub height: i32,
    pub start_health: i32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            gravity: 0.2,
            jump_speed: -5.0,
            move_speed: 3.0,
            damage_cooldown_frames: 20,
            anim_speed: 7,
            draw_size: 20,
            width: 18,
            height: 20,
            start_health: 3,
        }
    }
}

// ============================================================================
// Levels (levels.ron)
// ============================================================================

pub const FALLBACK_LEVEL_ID: &str = "level_fallback";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: String,
    pub name: String,
    /// Tile edge length in design units.
    pub tile_size: i32,
    /// One string per tile row, top row first.
    pub rows: Vec<String>,
}

impl LevelDef {
    /// Small built-in level used when levels.ron is missing or broken.
    pub fn fallback() -> Self {
        let rows = [
            "..............................",
            "..............................",
            ".....................o.o......",
            "...................#######....",
            "..........o.o.................",
            "........######...........o....",
            "..P....................####...",
            "..............*...............",
            "#######..###########..########",
            "#######~~###########^^########",
        ];
        Self {
            id: FALLBACK_LEVEL_ID.to_string(),
            name: "Fallback".to_string(),
            tile_size: 20,
            rows: rows.iter().map(|r| r.to_string()).collect(),
        }
    }
}

// ============================================================================
// Audio (audio.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioConfig {
    pub jump: String,
    pub coin: String,
    pub hurt: String,
    pub lose: String,
    pub music: String,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            jump: "audio/jump.ogg".to_string(),
            coin: "audio/coin.ogg".to_string(),
            hurt: "audio/hurt.ogg".to_string(),
            lose: "audio/lose.ogg".to_string(),
            music: "audio/music.ogg".to_string(),
        }
    }
}
