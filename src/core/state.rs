//! Core domain: game state definitions for the session flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Content is loaded and resources are inserted.
    #[default]
    Boot,
    Run,
    GameOver,
}
