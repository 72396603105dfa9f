//! Validation for loaded content definitions.

use super::data::{GameplayDefaults, LevelDef, PlayerTuning};
use super::registry::ContentRegistry;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' has invalid '{}': {}",
            self.source_type, self.source_id, self.field, self.message
        )
    }
}

macro_rules! check {
    ($errors:expr, $cond:expr, $source_type:expr, $source_id:expr, $field:expr, $($msg:tt)+) => {
        if !$cond {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field,
                message: format!($($msg)+),
            });
        }
    };
}

/// Shape checks for a level; glyph-level parsing happens when the map is built.
pub fn validate_level(level: &LevelDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    check!(
        errors,
        level.tile_size > 0,
        "Level",
        level.id,
        "tile_size",
        "must be positive, got {}",
        level.tile_size
    );
    check!(
        errors,
        !level.rows.is_empty(),
        "Level",
        level.id,
        "rows",
        "level has no rows"
    );
    if let Some(first) = level.rows.first() {
        let width = first.chars().count();
        for (index, row) in level.rows.iter().enumerate() {
            let len = row.chars().count();
            check!(
                errors,
                len == width,
                "Level",
                level.id,
                "rows",
                "row {} has {} columns, expected {}",
                index,
                len,
                width
            );
        }
    }
    errors
}

pub fn validate_tuning(tuning: &PlayerTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    check!(
        errors,
        tuning.anim_speed > 0,
        "PlayerTuning",
        "player",
        "anim_speed",
        "must be at least 1 frame"
    );
    check!(
        errors,
        tuning.width > 0 && tuning.height > 0,
        "PlayerTuning",
        "player",
        "width/height",
        "size must be positive, got {}x{}",
        tuning.width,
        tuning.height
    );
    check!(
        errors,
        tuning.start_health > 0,
        "PlayerTuning",
        "player",
        "start_health",
        "player would spawn dead with {}",
        tuning.start_health
    );
    errors
}

/// The player spawns inside a single empty cell, so its body must fit one
/// tile. Both sides are in design units and scale together.
pub fn validate_spawn_fit(level: &LevelDef, tuning: &PlayerTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    check!(
        errors,
        tuning.width <= level.tile_size && tuning.height <= level.tile_size,
        "Level",
        level.id,
        "tile_size",
        "player body {}x{} does not fit a {} tile, it would spawn inside a wall",
        tuning.width,
        tuning.height,
        level.tile_size
    );
    errors
}

/// Validate everything that was loaded.
/// Returns a list of validation errors, empty if all content is usable.
pub fn validate_content(
    registry: &ContentRegistry,
    defaults: &GameplayDefaults,
    tuning: &PlayerTuning,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for level in registry.levels.values() {
        errors.extend(validate_level(level));
        errors.extend(validate_spawn_fit(level, tuning));
    }

    check!(
        errors,
        registry.levels.contains_key(&defaults.start_level),
        "GameplayDefaults",
        "gameplay",
        "start_level",
        "references missing level '{}'",
        defaults.start_level
    );
    check!(
        errors,
        defaults.fixed_hz > 0.0,
        "GameplayDefaults",
        "gameplay",
        "fixed_hz",
        "must be positive, got {}",
        defaults.fixed_hz
    );

    errors.extend(validate_tuning(tuning));
    errors
}
