//! Audio domain: tests for cue recording.

use super::{AudioCue, AudioCues, CueBuffer};

#[test]
fn test_cue_buffer_records_in_order() {
    let mut buffer = CueBuffer::default();
    buffer.play_jump();
    buffer.play_coin();
    buffer.play_hurt();
    buffer.play_lose();
    buffer.stop_music();

    assert_eq!(
        buffer.cues,
        vec![
            AudioCue::Jump,
            AudioCue::Coin,
            AudioCue::Hurt,
            AudioCue::Lose,
            AudioCue::StopMusic,
        ]
    );
}

#[test]
fn test_cue_buffer_drain_empties() {
    let mut buffer = CueBuffer::default();
    buffer.play_coin();
    buffer.play_coin();

    let drained: Vec<AudioCue> = buffer.drain().collect();
    assert_eq!(drained, vec![AudioCue::Coin, AudioCue::Coin]);
    assert!(buffer.is_empty());
}

#[test]
fn test_cue_buffer_as_trait_object() {
    let mut buffer = CueBuffer::default();
    {
        let cues: &mut dyn AudioCues = &mut buffer;
        cues.play_hurt();
    }
    assert_eq!(buffer.cues, vec![AudioCue::Hurt]);
}
