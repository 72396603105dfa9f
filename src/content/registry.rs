//! ContentRegistry resource providing lookups for loaded levels.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::{FALLBACK_LEVEL_ID, LevelDef};

/// Central registry for loaded level content.
#[derive(Resource, Default)]
pub struct ContentRegistry {
    pub levels: HashMap<String, LevelDef>,
}

impl ContentRegistry {
    pub fn insert_level(&mut self, level: LevelDef) {
        self.levels.insert(level.id.clone(), level);
    }

    /// Look up a level, falling back to the built-in one.
    pub fn level_or_fallback(&self, id: &str) -> LevelDef {
        match self.levels.get(id) {
            Some(level) => level.clone(),
            None => {
                warn!("Level '{}' not found, using {}", id, FALLBACK_LEVEL_ID);
                LevelDef::fallback()
            }
        }
    }

    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        let mut ids: Vec<&str> = self.levels.keys().map(String::as_str).collect();
        ids.sort_unstable();
        format!(
            "ContentRegistry loaded: {} level(s) [{}]",
            self.levels.len(),
            ids.join(", ")
        )
    }
}
