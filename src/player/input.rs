//! Player domain: input sampling for locomotion.

use bevy::prelude::*;

/// Level-triggered directional state, sampled once per frame.
pub trait Controls {
    fn is_left(&self) -> bool;
    fn is_right(&self) -> bool;
    fn is_up(&self) -> bool;
}

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
}

impl Controls for ControlState {
    fn is_left(&self) -> bool {
        self.left
    }

    fn is_right(&self) -> bool {
        self.right
    }

    fn is_up(&self) -> bool {
        self.up
    }
}

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut controls: ResMut<ControlState>) {
    let sampled = ControlState {
        left: keyboard.pressed(KeyCode::ArrowLeft) || keyboard.pressed(KeyCode::KeyA),
        right: keyboard.pressed(KeyCode::ArrowRight) || keyboard.pressed(KeyCode::KeyD),
        up: keyboard.pressed(KeyCode::ArrowUp)
            || keyboard.pressed(KeyCode::KeyW)
            || keyboard.pressed(KeyCode::Space),
    };
    if *controls != sampled {
        *controls = sampled;
    }
}
