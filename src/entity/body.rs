//! Entity domain: kinematic fields shared by every game entity.

use bevy::prelude::*;

/// Position, velocity, size and health of an entity.
///
/// World coordinates are y-down pixels; `(x, y)` is the top-left corner.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub width: f32,
    pub height: f32,
    pub health: i32,
}

impl Body {
    pub fn new(x: f32, y: f32, width: f32, height: f32, health: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            health,
            ..default()
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Ungated health loss. No cooldown, no clamping.
    pub fn damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}
