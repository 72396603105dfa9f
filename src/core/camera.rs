//! Core domain: follow camera and screen-space placement.
//!
//! The world uses y-down pixel coordinates with the origin at the top-left
//! corner of the level. The Bevy camera never moves; instead every drawable
//! is placed at `world - offset` in screen space and then converted to the
//! y-up view space centered on the window.

use bevy::prelude::*;

/// World-to-screen offset supplier.
pub trait CameraOffset {
    fn offset_x(&self) -> f32;
    fn offset_y(&self) -> f32;
}

/// Axis-aligned rectangle in screen pixels (y-down, top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ScreenRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Center of the rect in Bevy view space for a window of `viewport` size.
    pub fn view_translation(&self, viewport: Vec2, z: f32) -> Vec3 {
        let center_x = self.x as f32 + self.width as f32 * 0.5;
        let center_y = self.y as f32 + self.height as f32 * 0.5;
        Vec3::new(
            center_x - viewport.x * 0.5,
            viewport.y * 0.5 - center_y,
            z,
        )
    }
}

/// Camera that keeps a target centered while staying inside the level.
#[derive(Resource, Debug, Clone, Default)]
pub struct FollowCamera {
    pub x: f32,
    pub y: f32,
    pub viewport: Vec2,
}

impl CameraOffset for FollowCamera {
    fn offset_x(&self) -> f32 {
        self.x
    }

    fn offset_y(&self) -> f32 {
        self.y
    }
}

impl FollowCamera {
    /// Center on `target` (world pixels), clamped to a level of `bounds` pixels.
    pub fn follow(&mut self, target: Vec2, bounds: Vec2) {
        let max_x = (bounds.x - self.viewport.x).max(0.0);
        let max_y = (bounds.y - self.viewport.y).max(0.0);
        self.x = (target.x - self.viewport.x * 0.5).clamp(0.0, max_x);
        self.y = (target.y - self.viewport.y * 0.5).clamp(0.0, max_y);
    }
}

pub(crate) fn spawn_view_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
