//! Entity domain: the per-frame update/draw contract.

use crate::audio::AudioCues;
use crate::core::CameraOffset;
use crate::entity::{Body, DrawSurface};
use crate::level::{CollisionResolver, TileQuery};
use crate::player::Controls;

/// Collaborators an entity may consult during one simulation frame.
pub struct FrameContext<'a> {
    pub map: &'a dyn TileQuery,
    pub collision: &'a dyn CollisionResolver,
    pub controls: &'a dyn Controls,
    pub audio: &'a mut dyn AudioCues,
}

/// Anything the game loop steps once per frame and draws once per render.
pub trait Actor {
    fn body(&self) -> &Body;

    fn update(&mut self, ctx: &mut FrameContext<'_>);

    /// Must not mutate state.
    fn draw(&self, surface: &mut dyn DrawSurface, camera: &dyn CameraOffset);
}
