//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use super::registry::ContentRegistry;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Everything read from assets/data. Files that failed to load hold defaults.
#[derive(Debug, Default)]
pub struct LoadedContent {
    pub levels: Vec<LevelDef>,
    pub defaults: GameplayDefaults,
    pub tuning: PlayerTuning,
    pub audio: AudioConfig,
}

impl LoadedContent {
    pub fn into_registry(self) -> (ContentRegistry, GameplayDefaults, PlayerTuning, AudioConfig) {
        let mut registry = ContentRegistry::default();
        for level in self.levels {
            registry.insert_level(level);
        }
        if !registry.levels.contains_key(FALLBACK_LEVEL_ID) {
            registry.insert_level(LevelDef::fallback());
        }
        (registry, self.defaults, self.tuning, self.audio)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse RON text containing a DataFile<T> wrapper.
pub fn parse_data_file<T>(file_name: &str, contents: &str) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Parse RON text containing a single struct (not wrapped in DataFile).
pub fn parse_single_file<T>(file_name: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = read_file(path)?;
    parse_data_file(&path.display().to_string(), &contents)
}

fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = read_file(path)?;
    parse_single_file(&path.display().to_string(), &contents)
}

/// Load all content from assets/data/*.ron.
///
/// Never fails outright: each file that cannot be read or parsed is replaced
/// by its defaults and reported in the returned error list.
pub fn load_all_content(base_path: &Path) -> (LoadedContent, Vec<ContentLoadError>) {
    let mut content = LoadedContent::default();
    let mut errors = Vec::new();

    // Helper macro to reduce boilerplate
    macro_rules! load_single_into {
        ($field:expr, $file:expr, $type:ty) => {
            match load_single_file::<$type>(&base_path.join($file)) {
                Ok(value) => $field = value,
                Err(e) => errors.push(e),
            }
        };
    }

    load_single_into!(content.defaults, "gameplay.ron", GameplayDefaults);
    load_single_into!(content.tuning, "player.ron", PlayerTuning);
    load_single_into!(content.audio, "audio.ron", AudioConfig);

    match load_data_file::<LevelDef>(&base_path.join("levels.ron")) {
        Ok(levels) => content.levels = levels,
        Err(e) => errors.push(e),
    }

    (content, errors)
}
