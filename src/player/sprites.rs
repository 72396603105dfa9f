//! Player domain: sprite variants and the manifest that locates them.
//!
//! The manifest JSON maps each [`SpriteKind`] key to an image path relative
//! to assets/. Missing entries fall back to built-in paths; images that fail
//! to load are drawn as a flat rectangle instead.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const SPRITE_MANIFEST_PATH: &str = "assets/sprites/manifest.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    IdleRight,
    IdleLeft,
    WalkRight,
    WalkLeft,
    JumpRight,
    JumpLeft,
}

impl SpriteKind {
    pub const ALL: [SpriteKind; 6] = [
        SpriteKind::IdleRight,
        SpriteKind::IdleLeft,
        SpriteKind::WalkRight,
        SpriteKind::WalkLeft,
        SpriteKind::JumpRight,
        SpriteKind::JumpLeft,
    ];

    fn index(self) -> usize {
        match self {
            SpriteKind::IdleRight => 0,
            SpriteKind::IdleLeft => 1,
            SpriteKind::WalkRight => 2,
            SpriteKind::WalkLeft => 3,
            SpriteKind::JumpRight => 4,
            SpriteKind::JumpLeft => 5,
        }
    }

    /// Manifest key.
    pub fn key(self) -> &'static str {
        match self {
            SpriteKind::IdleRight => "idle_right",
            SpriteKind::IdleLeft => "idle_left",
            SpriteKind::WalkRight => "walk_right",
            SpriteKind::WalkLeft => "walk_left",
            SpriteKind::JumpRight => "jump_right",
            SpriteKind::JumpLeft => "jump_left",
        }
    }

    pub fn default_path(self) -> &'static str {
        match self {
            SpriteKind::IdleRight => "sprites/penguin_idle.png",
            SpriteKind::IdleLeft => "sprites/penguin_idle_left.png",
            SpriteKind::WalkRight => "sprites/penguin_walk.png",
            SpriteKind::WalkLeft => "sprites/penguin_walk_left.png",
            SpriteKind::JumpRight => "sprites/penguin_jump.png",
            SpriteKind::JumpLeft => "sprites/penguin_jump_left.png",
        }
    }
}

/// One image handle per sprite variant.
#[derive(Debug, Clone, Default)]
pub struct PlayerSprites {
    handles: [Handle<Image>; 6],
}

impl PlayerSprites {
    pub fn from_fn(mut f: impl FnMut(SpriteKind) -> Handle<Image>) -> Self {
        Self {
            handles: std::array::from_fn(|i| f(SpriteKind::ALL[i])),
        }
    }

    pub fn load(manifest: &SpriteManifest, asset_server: &AssetServer) -> Self {
        Self::from_fn(|kind| asset_server.load(manifest.path_for(kind).to_string()))
    }

    pub fn get(&self, kind: SpriteKind) -> &Handle<Image> {
        &self.handles[kind.index()]
    }
}

/// Raw manifest JSON structure.
#[derive(Debug, Deserialize)]
struct ManifestJson {
    version: u32,
    sprites: HashMap<String, String>,
}

/// Resource holding sprite paths by key.
#[derive(Resource, Debug, Default, Clone)]
pub struct SpriteManifest {
    pub version: u32,
    pub paths: HashMap<String, String>,
}

impl SpriteManifest {
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        let manifest: ManifestJson = serde_json::from_str(contents)?;
        Ok(Self {
            version: manifest.version,
            paths: manifest.sprites,
        })
    }

    /// Load the manifest from a JSON file, or an empty one if it is
    /// missing or malformed.
    pub fn load_from_file(path: &str) -> Self {
        let manifest_path = Path::new(path);

        if !manifest_path.exists() {
            warn!("Sprite manifest not found at {:?}, using built-in paths", path);
            return Self::default();
        }

        let contents = match fs::read_to_string(manifest_path) {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to read sprite manifest: {}", e);
                return Self::default();
            }
        };

        match Self::from_json(&contents) {
            Ok(manifest) => {
                info!(
                    "Loaded sprite manifest v{} with {} sprites",
                    manifest.version,
                    manifest.paths.len()
                );
                manifest
            }
            Err(e) => {
                error!("Failed to parse sprite manifest: {}", e);
                Self::default()
            }
        }
    }

    pub fn path_for(&self, kind: SpriteKind) -> &str {
        self.paths
            .get(kind.key())
            .map(String::as_str)
            .unwrap_or_else(|| kind.default_path())
    }
}

pub(crate) fn load_sprite_manifest(mut commands: Commands) {
    commands.insert_resource(SpriteManifest::load_from_file(SPRITE_MANIFEST_PATH));
}
