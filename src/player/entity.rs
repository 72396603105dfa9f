//! Player domain: the player-controlled entity.
//!
//! One fixed frame of [`PlayerEntity::update`] reads input, sets horizontal
//! speed and the walk-cycle phase, jumps if grounded, applies gravity,
//! resolves and commits X then Y, re-samples the ground under its feet and
//! finally checks the tiles it occupies for anything lethal.

use bevy::prelude::*;

use crate::audio::AudioCues;
use crate::core::{CameraOffset, ScreenRect};
use crate::entity::{Actor, Body, DrawSurface, FrameContext};
use crate::level::{TileQuery, tile_index};
use crate::player::{PlayerPhysics, PlayerSprites, SpriteKind};

/// Drawn in place of a sprite whose image is not available.
pub const PLAYER_FALLBACK_COLOR: Color = Color::srgb(0.0, 0.0, 1.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

#[derive(Component, Debug, Clone)]
pub struct PlayerEntity {
    body: Body,
    coins: u32,
    damage_cooldown: u32,
    on_ground: bool,
    last_direction: Facing,
    anim_frame: u8,
    anim_counter: u32,
    sprites: PlayerSprites,
    physics: PlayerPhysics,
}

impl PlayerEntity {
    pub fn new(body: Body, sprites: PlayerSprites, physics: PlayerPhysics) -> Self {
        Self {
            body,
            coins: 0,
            damage_cooldown: 0,
            on_ground: false,
            last_direction: Facing::Right,
            anim_frame: 0,
            anim_counter: 0,
            sprites,
            physics,
        }
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    pub fn coins(&self) -> u32 {
        self.coins
    }

    pub fn add_coins(&mut self, amount: u32, audio: &mut dyn AudioCues) {
        self.coins = self.coins.saturating_add(amount);
        audio.play_coin();
    }

    pub fn health(&self) -> i32 {
        self.body.health
    }

    /// No validation: negative or above-start values are stored as given.
    pub fn set_health(&mut self, health: i32) {
        self.body.health = health;
    }

    /// Cooldown-gated hit. Always removes exactly one point of health,
    /// whatever `amount` says.
    pub fn take_damage(&mut self, amount: i32, audio: &mut dyn AudioCues) {
        if self.damage_cooldown != 0 {
            return;
        }
        self.body.damage(1);
        audio.play_hurt();
        self.damage_cooldown = self.physics.damage_cooldown_frames;
        debug!(
            "Player hit (requested {}), health now {}",
            amount, self.body.health
        );

        if !self.body.is_alive() {
            audio.play_lose();
            audio.stop_music();
            info!("Player died with {} coin(s)", self.coins);
        }
    }

    pub fn damage_cooldown(&self) -> u32 {
        self.damage_cooldown
    }

    pub fn on_ground(&self) -> bool {
        self.on_ground
    }

    pub fn last_direction(&self) -> Facing {
        self.last_direction
    }

    pub fn anim_frame(&self) -> u8 {
        self.anim_frame
    }

    pub fn physics(&self) -> &PlayerPhysics {
        &self.physics
    }

    pub fn sprites(&self) -> &PlayerSprites {
        &self.sprites
    }

    /// Sprite for the current state. Airborne wins, then standing still,
    /// then the two-frame walk cycle in the direction of travel.
    pub fn select_sprite(&self) -> SpriteKind {
        let dx = self.body.dx;
        if !self.on_ground {
            match self.last_direction {
                Facing::Right => SpriteKind::JumpRight,
                Facing::Left => SpriteKind::JumpLeft,
            }
        } else if dx == 0.0 {
            match self.last_direction {
                Facing::Right => SpriteKind::IdleRight,
                Facing::Left => SpriteKind::IdleLeft,
            }
        } else if dx > 0.0 {
            if self.anim_frame == 0 {
                SpriteKind::IdleRight
            } else {
                SpriteKind::WalkRight
            }
        } else if self.anim_frame == 0 {
            SpriteKind::IdleLeft
        } else {
            SpriteKind::WalkLeft
        }
    }

    /// Screen rect of the sprite: fixed draw size, top-left at the body's
    /// position relative to the camera.
    pub fn screen_rect(&self, camera: &dyn CameraOffset) -> ScreenRect {
        let size = self.physics.draw_size;
        ScreenRect::new(
            (self.body.x - camera.offset_x()) as i32,
            (self.body.y - camera.offset_y()) as i32,
            size,
            size,
        )
    }

    fn advance_animation(&mut self, moving: bool) {
        if moving && self.on_ground {
            self.anim_counter += 1;
            if self.anim_counter >= self.physics.anim_speed {
                self.anim_counter = 0;
                self.anim_frame = (self.anim_frame + 1) % 2;
            }
        } else {
            self.anim_frame = 0;
            self.anim_counter = 0;
        }
    }

    fn sample_ground(&mut self, map: &dyn TileQuery) {
        let size = map.tile_size();
        let left_col = tile_index(self.body.x, size);
        let right_col = tile_index(self.body.x + self.body.width - 1.0, size);
        let below = tile_index(self.body.bottom(), size);

        let was_on_ground = self.on_ground;
        self.on_ground = (left_col..=right_col).any(|col| map.is_tile_solid(below, col));

        if self.on_ground && !was_on_ground {
            debug!("Landed at ({:.1}, {:.1})", self.body.x, self.body.y);
        }
    }

    /// Whether any cell from the head row down to the row under the feet is
    /// lethal.
    fn touches_lethal(&self, map: &dyn TileQuery) -> bool {
        let size = map.tile_size();
        let left_col = tile_index(self.body.x, size);
        let right_col = tile_index(self.body.x + self.body.width - 1.0, size);
        let top_row = tile_index(self.body.y, size);
        let bottom_row = tile_index(self.body.bottom(), size);

        (top_row..=bottom_row)
            .any(|row| (left_col..=right_col).any(|col| map.tile(row, col).is_kill()))
    }
}

impl Actor for PlayerEntity {
    fn body(&self) -> &Body {
        &self.body
    }

    fn update(&mut self, ctx: &mut FrameContext<'_>) {
        if self.damage_cooldown > 0 {
            self.damage_cooldown -= 1;
        }

        // Dead is terminal.
        if !self.body.is_alive() {
            self.body.width = 0.0;
            self.body.height = 0.0;
            return;
        }

        // Right is checked last so it wins when both are held.
        self.body.dx = 0.0;
        let mut moving = false;
        if ctx.controls.is_left() {
            self.body.dx = -self.physics.move_speed;
            moving = true;
            self.last_direction = Facing::Left;
        }
        if ctx.controls.is_right() {
            self.body.dx = self.physics.move_speed;
            moving = true;
            self.last_direction = Facing::Right;
        }

        self.advance_animation(moving);

        if ctx.controls.is_up() && self.on_ground {
            self.body.dy = self.physics.jump_speed;
            self.on_ground = false;
            ctx.audio.play_jump();
            debug!("Jump from ({:.1}, {:.1})", self.body.x, self.body.y);
        }

        self.body.dy += self.physics.gravity;

        ctx.collision.resolve_axis_x(&mut self.body, ctx.map);
        self.body.x += self.body.dx;

        ctx.collision.resolve_axis_y(&mut self.body, ctx.map);
        self.body.y += self.body.dy;

        self.sample_ground(ctx.map);

        if self.touches_lethal(ctx.map) {
            let health = self.body.health;
            self.body.damage(health);
            ctx.audio.play_lose();
            info!(
                "Player killed by lethal tile at ({:.1}, {:.1})",
                self.body.x, self.body.y
            );
        }
    }

    fn draw(&self, surface: &mut dyn DrawSurface, camera: &dyn CameraOffset) {
        if !self.body.is_alive() {
            return;
        }
        let image = self.sprites.get(self.select_sprite());
        let rect = self.screen_rect(camera);
        if surface.image_ready(image) {
            surface.draw_image(image, rect);
        } else {
            surface.fill_rect(PLAYER_FALLBACK_COLOR, rect);
        }
    }
}
