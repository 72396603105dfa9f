//! Entity domain: shared kinematics and the update/draw contract.

mod actor;
mod body;
mod draw;

pub use actor::{Actor, FrameContext};
pub use body::Body;
pub use draw::{DrawSurface, SpriteSurface};
