//! UI domain: game-over overlay and retry flow.

use bevy::prelude::*;

use crate::core::GameState;
use crate::player::PlayerEntity;

/// Root of the game-over overlay.
#[derive(Component)]
pub struct DeathScreenUI;

#[derive(Component)]
pub struct RetryButton;

const OVERLAY_TINT: Color = Color::srgba(0.02, 0.04, 0.1, 0.8);
const TITLE_COLOR: Color = Color::srgb(0.85, 0.3, 0.25);
const BODY_COLOR: Color = Color::srgb(0.85, 0.9, 0.95);
const HINT_COLOR: Color = Color::srgb(0.5, 0.55, 0.6);

pub(crate) fn spawn_death_screen(mut commands: Commands, players: Query<&PlayerEntity>) {
    let coins = players.iter().next().map(PlayerEntity::coins).unwrap_or(0);

    commands
        .spawn((
            DeathScreenUI,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(24.0),
                ..default()
            },
            BackgroundColor(OVERLAY_TINT),
            ZIndex(100),
        ))
        .with_children(|overlay| {
            overlay.spawn((
                Text::new("YOU FELL"),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(TITLE_COLOR),
            ));

            overlay.spawn((
                Text::new(format!("Coins collected: {}", coins)),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(BODY_COLOR),
            ));

            overlay
                .spawn((
                    RetryButton,
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(32.0), Val::Px(12.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.15, 0.22, 0.32)),
                    BorderColor::all(BODY_COLOR),
                ))
                .with_child((
                    Text::new("Try again"),
                    TextFont {
                        font_size: 24.0,
                        ..default()
                    },
                    TextColor(BODY_COLOR),
                ));

            overlay.spawn((
                Text::new("Enter / R"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(HINT_COLOR),
            ));
        });
}

pub(crate) fn handle_retry(
    keyboard: Res<ButtonInput<KeyCode>>,
    button_query: Query<&Interaction, (With<RetryButton>, Changed<Interaction>)>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let pressed = keyboard.any_just_pressed([KeyCode::Enter, KeyCode::NumpadEnter, KeyCode::KeyR]);
    let clicked = button_query.iter().any(|i| *i == Interaction::Pressed);
    if pressed || clicked {
        info!("Retry requested, rebuilding level");
        next_state.set(GameState::Run);
    }
}

pub(crate) fn despawn_death_screen(
    mut commands: Commands,
    screens: Query<Entity, With<DeathScreenUI>>,
) {
    for entity in &screens {
        commands.entity(entity).despawn();
    }
}
