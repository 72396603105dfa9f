use bevy::prelude::*;

/// Marker for the info overlay text node.
#[derive(Component)]
pub struct DebugInfoOverlay;

#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the player info overlay is shown
    pub show_info: bool,
}
