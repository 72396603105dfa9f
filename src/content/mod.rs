//! Content domain: RON-driven configuration loaded at boot.

mod data;
mod loader;
mod registry;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{AudioConfig, FALLBACK_LEVEL_ID, GameplayDefaults, LevelDef, PlayerTuning};
pub use loader::{ContentLoadError, load_all_content};
pub use registry::ContentRegistry;

use bevy::prelude::*;
use std::path::Path;

use crate::content::validation::{validate_content, validate_tuning};
use crate::core::{DisplayScale, GameState};

pub const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Boot), load_content);
    }
}

fn load_content(mut commands: Commands, mut next_state: ResMut<NextState<GameState>>) {
    let (content, errors) = load_all_content(Path::new(CONTENT_DIR));
    for e in &errors {
        warn!("{}; using built-in defaults", e);
    }

    let (registry, defaults, tuning, audio) = content.into_registry();

    for e in validate_content(&registry, &defaults, &tuning) {
        error!("Content validation: {}", e);
    }

    let tuning = if validate_tuning(&tuning).is_empty() {
        tuning
    } else {
        warn!("Player tuning rejected, using built-in defaults");
        PlayerTuning::default()
    };

    info!("{}", registry.summary());
    info!(
        "Gameplay: scale={}, start_level={}, fixed_hz={}",
        defaults.display_scale, defaults.start_level, defaults.fixed_hz
    );

    let fixed_hz = if defaults.fixed_hz > 0.0 {
        defaults.fixed_hz
    } else {
        GameplayDefaults::default().fixed_hz
    };

    commands.insert_resource(Time::<Fixed>::from_hz(fixed_hz));
    commands.insert_resource(DisplayScale::new(defaults.display_scale));
    commands.insert_resource(registry);
    commands.insert_resource(defaults);
    commands.insert_resource(tuning);
    commands.insert_resource(audio);

    next_state.set(GameState::Run);
}
