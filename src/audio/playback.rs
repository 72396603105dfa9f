//! Audio domain: turning cues into Bevy audio entities.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::{AudioCue, AudioCueEvent, CueBuffer};
use crate::content::AudioConfig;
use crate::level::LevelEntity;

/// Loaded sound handles, one per cue plus the looping track.
#[derive(Resource, Debug, Clone)]
pub struct SoundBank {
    pub jump: Handle<AudioSource>,
    pub coin: Handle<AudioSource>,
    pub hurt: Handle<AudioSource>,
    pub lose: Handle<AudioSource>,
    pub music: Handle<AudioSource>,
}

impl SoundBank {
    pub fn handle_for(&self, cue: AudioCue) -> Option<&Handle<AudioSource>> {
        match cue {
            AudioCue::Jump => Some(&self.jump),
            AudioCue::Coin => Some(&self.coin),
            AudioCue::Hurt => Some(&self.hurt),
            AudioCue::Lose => Some(&self.lose),
            AudioCue::StopMusic => None,
        }
    }
}

/// Marker for the looping background track.
#[derive(Component, Debug)]
pub struct BackgroundMusic;

pub(crate) fn load_sound_bank(
    mut commands: Commands,
    config: Res<AudioConfig>,
    asset_server: Res<AssetServer>,
) {
    commands.insert_resource(SoundBank {
        jump: asset_server.load(config.jump.clone()),
        coin: asset_server.load(config.coin.clone()),
        hurt: asset_server.load(config.hurt.clone()),
        lose: asset_server.load(config.lose.clone()),
        music: asset_server.load(config.music.clone()),
    });
    info!("Queued sound bank from {}", config.music);
}

pub(crate) fn start_music(mut commands: Commands, bank: Option<Res<SoundBank>>) {
    let Some(bank) = bank else {
        return;
    };
    commands.spawn((
        LevelEntity,
        BackgroundMusic,
        AudioPlayer::new(bank.music.clone()),
        PlaybackSettings::LOOP,
    ));
}

pub(crate) fn flush_cues(mut buffer: ResMut<CueBuffer>, mut events: MessageWriter<AudioCueEvent>) {
    if buffer.is_empty() {
        return;
    }
    for cue in buffer.drain() {
        events.write(AudioCueEvent { cue });
    }
}

pub(crate) fn play_cues(
    mut commands: Commands,
    mut events: MessageReader<AudioCueEvent>,
    bank: Option<Res<SoundBank>>,
    music: Query<Entity, With<BackgroundMusic>>,
) {
    for event in events.read() {
        debug!("Audio cue {:?}", event.cue);
        if event.cue == AudioCue::StopMusic {
            for entity in &music {
                commands.entity(entity).despawn();
            }
            continue;
        }
        let Some(handle) = bank.as_ref().and_then(|b| b.handle_for(event.cue)) else {
            continue;
        };
        commands.spawn((AudioPlayer::new(handle.clone()), PlaybackSettings::DESPAWN));
    }
}
