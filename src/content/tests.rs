//! Content domain: tests for RON parsing, validation, and fallbacks.

use std::path::Path;

use super::data::{DataFile, FALLBACK_LEVEL_ID, GameplayDefaults, LevelDef, PlayerTuning};
use super::loader::{load_all_content, parse_data_file, parse_single_file};
use super::registry::ContentRegistry;
use super::validation::{validate_content, validate_level, validate_spawn_fit, validate_tuning};
use super::{AudioConfig, CONTENT_DIR};

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

#[test]
fn test_parse_player_tuning_partial_uses_defaults() {
    let tuning: PlayerTuning =
        parse_single_file("player.ron", "(gravity: 0.5, start_health: 5)").unwrap();
    assert_eq!(tuning.gravity, 0.5);
    assert_eq!(tuning.start_health, 5);
    assert_eq!(tuning.damage_cooldown_frames, 20);
    assert_eq!(tuning.anim_speed, 7);
    assert_eq!(tuning.jump_speed, -5.0);
}

#[test]
fn test_parse_level_data_file() {
    let text = r###"(
        schema_version: 1,
        items: [
            (id: "a", name: "A", tile_size: 16, rows: ["..", "P.", "##"]),
            (id: "b", name: "B", tile_size: 8, rows: ["P", "#"]),
        ],
    )"###;
    let levels: Vec<LevelDef> = parse_data_file("levels.ron", text).unwrap();
    assert_eq!(levels.len(), 2);
    assert_eq!(levels[0].id, "a");
    assert_eq!(levels[0].rows.len(), 3);
    assert_eq!(levels[1].tile_size, 8);
}

#[test]
fn test_parse_error_reports_file_name() {
    let err = parse_single_file::<GameplayDefaults>("gameplay.ron", "(display_scale: ")
        .unwrap_err();
    assert_eq!(err.file, "gameplay.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("gameplay.ron"));
}

#[test]
fn test_data_file_wrapper_requires_items() {
    let result = parse_data_file::<LevelDef>("levels.ron", "(schema_version: 1)");
    assert!(result.is_err());
    // The wrapper type itself is plain serde
    let empty: DataFile<LevelDef> =
        ron::from_str("(schema_version: 2, items: [])").unwrap();
    assert_eq!(empty.schema_version, 2);
    assert!(empty.items.is_empty());
}

// -----------------------------------------------------------------------------
// Loading from disk
// -----------------------------------------------------------------------------

#[test]
fn test_load_missing_directory_falls_back_per_file() {
    let (content, errors) = load_all_content(Path::new("does/not/exist"));
    assert_eq!(errors.len(), 4);
    assert!(errors.iter().all(|e| e.message.starts_with("IO error")));

    let (registry, defaults, tuning, audio) = content.into_registry();
    assert!(registry.levels.contains_key(FALLBACK_LEVEL_ID));
    assert_eq!(defaults.start_level, FALLBACK_LEVEL_ID);
    assert_eq!(tuning, PlayerTuning::default());
    assert_eq!(audio.music, AudioConfig::default().music);
}

#[test]
fn test_shipped_content_loads_and_validates() {
    let (content, errors) = load_all_content(Path::new(CONTENT_DIR));
    assert!(errors.is_empty(), "unexpected load errors: {:?}", errors);

    let (registry, defaults, tuning, _audio) = content.into_registry();
    assert!(registry.levels.contains_key(&defaults.start_level));
    assert!(validate_content(&registry, &defaults, &tuning).is_empty());
}

// -----------------------------------------------------------------------------
// Validation
// -----------------------------------------------------------------------------

#[test]
fn test_fallback_level_is_valid() {
    assert!(validate_level(&LevelDef::fallback()).is_empty());
}

#[test]
fn test_validate_level_reports_ragged_rows_and_bad_tile_size() {
    let level = LevelDef {
        id: "bad".to_string(),
        name: "Bad".to_string(),
        tile_size: 0,
        rows: vec!["...".to_string(), "..".to_string(), "...".to_string()],
    };
    let errors = validate_level(&level);
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().any(|e| e.field == "tile_size"));
    assert!(errors.iter().any(|e| e.message.contains("row 1")));
}

#[test]
fn test_validate_tuning_rejects_dead_spawn() {
    let tuning = PlayerTuning {
        start_health: 0,
        anim_speed: 0,
        ..PlayerTuning::default()
    };
    let errors = validate_tuning(&tuning);
    assert_eq!(errors.len(), 2);
    assert!(validate_tuning(&PlayerTuning::default()).is_empty());
}

#[test]
fn test_validate_content_flags_missing_start_level() {
    let mut registry = ContentRegistry::default();
    registry.insert_level(LevelDef::fallback());
    let defaults = GameplayDefaults {
        start_level: "level_missing".to_string(),
        ..GameplayDefaults::default()
    };
    let errors = validate_content(&registry, &defaults, &PlayerTuning::default());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "start_level");
}

#[test]
fn test_registry_level_lookup_falls_back() {
    let registry = ContentRegistry::default();
    let level = registry.level_or_fallback("nope");
    assert_eq!(level.id, FALLBACK_LEVEL_ID);
    assert!(registry.summary().contains("0 level(s)"));
}

#[test]
fn test_spawn_fit_rejects_body_larger_than_tile() {
    let level = LevelDef::fallback();
    assert!(validate_spawn_fit(&level, &PlayerTuning::default()).is_empty());

    let wide = PlayerTuning {
        width: level.tile_size + 1,
        ..PlayerTuning::default()
    };
    let errors = validate_spawn_fit(&level, &wide);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].source_id, FALLBACK_LEVEL_ID);
    assert_eq!(errors[0].field, "tile_size");

    let tall = PlayerTuning {
        height: level.tile_size * 2,
        ..PlayerTuning::default()
    };
    assert_eq!(validate_spawn_fit(&level, &tall).len(), 1);
}

#[test]
fn test_validate_content_flags_oversized_player() {
    let mut registry = ContentRegistry::default();
    registry.insert_level(LevelDef::fallback());
    let defaults = GameplayDefaults::default();
    let tuning = PlayerTuning {
        width: 40,
        height: 40,
        ..PlayerTuning::default()
    };

    let errors = validate_content(&registry, &defaults, &tuning);

    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("40x40"));
}
