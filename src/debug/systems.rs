use bevy::prelude::*;

use crate::audio::CueBuffer;
use crate::content::PlayerTuning;
use crate::debug::state::{DebugInfoOverlay, DebugState};
use crate::entity::Actor;
use crate::player::PlayerEntity;

const DEBUG_COIN_GRANT: u32 = 10;

pub(crate) fn toggle_info_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_info = !debug_state.show_info;
        info!("Debug info overlay: {}", debug_state.show_info);
    }
}

pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<PlayerTuning>,
    mut cues: ResMut<CueBuffer>,
    mut players: Query<&mut PlayerEntity>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }
    let Ok(mut player) = players.single_mut() else {
        return;
    };
    if !player.body().is_alive() {
        return;
    }

    // Ctrl+H: full heal
    if keyboard.just_pressed(KeyCode::KeyH) {
        player.set_health(tuning.start_health);
        info!("Debug: health restored to {}", tuning.start_health);
    }

    // Ctrl+C: coins
    if keyboard.just_pressed(KeyCode::KeyC) {
        player.add_coins(DEBUG_COIN_GRANT, &mut *cues);
        info!("Debug: granted {} coins", DEBUG_COIN_GRANT);
    }
}

pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    players: Query<&PlayerEntity>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    let (Ok(player), Ok(mut text)) = (players.single(), overlay_query.single_mut()) else {
        return;
    };
    let body = player.body();
    **text = format!(
        "Pos: ({:.1}, {:.1})\nVel: ({:.2}, {:.2})\nHP: {}\nCoins: {}\nGround: {}\nCooldown: {}\nFacing: {:?} frame {}",
        body.x,
        body.y,
        body.dx,
        body.dy,
        player.health(),
        player.coins(),
        player.on_ground(),
        player.damage_cooldown(),
        player.last_direction(),
        player.anim_frame()
    );
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
