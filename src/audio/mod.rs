//! Audio domain: cue recording and playback.

mod cues;
mod playback;

#[cfg(test)]
mod tests;

pub use cues::{AudioCue, AudioCueEvent, AudioCues, CueBuffer};
pub use playback::{BackgroundMusic, SoundBank};

use bevy::prelude::*;

use crate::audio::playback::{flush_cues, load_sound_bank, play_cues, start_music};
use crate::core::GameState;

pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CueBuffer>()
            .add_message::<AudioCueEvent>()
            .add_systems(OnExit(GameState::Boot), load_sound_bank)
            .add_systems(OnEnter(GameState::Run), start_music)
            .add_systems(Update, (flush_cues, play_cues).chain());
    }
}
