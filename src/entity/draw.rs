//! Entity domain: draw surfaces.
//!
//! Entities describe what to draw in screen pixels; a surface decides how.
//! [`SpriteSurface`] maps those calls onto a single Bevy sprite.

use bevy::prelude::*;

use crate::core::ScreenRect;

pub trait DrawSurface {
    /// Whether the image behind `image` can be drawn this frame.
    fn image_ready(&self, image: &Handle<Image>) -> bool;

    fn draw_image(&mut self, image: &Handle<Image>, rect: ScreenRect);

    fn fill_rect(&mut self, color: Color, rect: ScreenRect);
}

/// Surface backed by one sprite entity. Hidden unless something is drawn.
pub struct SpriteSurface<'a> {
    pub images: &'a Assets<Image>,
    pub sprite: &'a mut Sprite,
    pub transform: &'a mut Transform,
    pub visibility: &'a mut Visibility,
    pub viewport: Vec2,
    pub z: f32,
}

impl SpriteSurface<'_> {
    /// Reset before the entity draws; an entity that draws nothing stays hidden.
    pub fn begin(&mut self) {
        *self.visibility = Visibility::Hidden;
    }

    fn place(&mut self, rect: ScreenRect) {
        self.transform.translation = rect.view_translation(self.viewport, self.z);
        self.sprite.custom_size = Some(rect.size());
        *self.visibility = Visibility::Visible;
    }
}

impl DrawSurface for SpriteSurface<'_> {
    fn image_ready(&self, image: &Handle<Image>) -> bool {
        self.images.contains(image.id())
    }

    fn draw_image(&mut self, image: &Handle<Image>, rect: ScreenRect) {
        if self.sprite.image != *image {
            self.sprite.image = image.clone();
        }
        self.sprite.color = Color::WHITE;
        self.place(rect);
    }

    fn fill_rect(&mut self, color: Color, rect: ScreenRect) {
        self.sprite.image = Handle::default();
        self.sprite.color = color;
        self.place(rect);
    }
}
