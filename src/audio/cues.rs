//! Audio domain: fire-and-forget sound cues.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Sound cues gameplay code can request. No return value, no queuing
/// guarantee beyond "played at some point this frame".
pub trait AudioCues {
    fn play_jump(&mut self);
    fn play_coin(&mut self);
    fn play_hurt(&mut self);
    fn play_lose(&mut self);
    fn stop_music(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Jump,
    Coin,
    Hurt,
    Lose,
    StopMusic,
}

/// Records cues raised during the fixed step until they are flushed.
#[derive(Resource, Debug, Default)]
pub struct CueBuffer {
    pub cues: Vec<AudioCue>,
}

impl CueBuffer {
    pub fn push(&mut self, cue: AudioCue) {
        self.cues.push(cue);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = AudioCue> + '_ {
        self.cues.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }
}

impl AudioCues for CueBuffer {
    fn play_jump(&mut self) {
        self.push(AudioCue::Jump);
    }

    fn play_coin(&mut self) {
        self.push(AudioCue::Coin);
    }

    fn play_hurt(&mut self) {
        self.push(AudioCue::Hurt);
    }

    fn play_lose(&mut self) {
        self.push(AudioCue::Lose);
    }

    fn stop_music(&mut self) {
        self.push(AudioCue::StopMusic);
    }
}

/// Message carrying one cue to the playback systems.
#[derive(Debug, Clone, Copy)]
pub struct AudioCueEvent {
    pub cue: AudioCue,
}

impl Message for AudioCueEvent {}
