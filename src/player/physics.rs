//! Player domain: physics constants in screen pixels.

use crate::content::PlayerTuning;
use crate::core::DisplayScale;

/// Tuning converted through the display scale. Fixed once the player is
/// built.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerPhysics {
    /// Added to `dy` every frame.
    pub gravity: f32,
    /// Vertical impulse on jump; negative is upward.
    pub jump_speed: f32,
    pub move_speed: f32,
    pub damage_cooldown_frames: u32,
    /// Frames per walk-cycle sprite flip.
    pub anim_speed: u32,
    /// Edge length of the drawn sprite, independent of the body size.
    pub draw_size: i32,
}

impl PlayerPhysics {
    pub fn from_tuning(tuning: &PlayerTuning, scale: &DisplayScale) -> Self {
        Self {
            gravity: scale.dsc(tuning.gravity),
            jump_speed: scale.dsc(tuning.jump_speed),
            move_speed: scale.dsc(tuning.move_speed),
            damage_cooldown_frames: tuning.damage_cooldown_frames,
            anim_speed: tuning.anim_speed,
            draw_size: scale.sc(tuning.draw_size),
        }
    }
}

impl Default for PlayerPhysics {
    fn default() -> Self {
        Self::from_tuning(&PlayerTuning::default(), &DisplayScale::default())
    }
}
