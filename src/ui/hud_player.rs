//! UI domain: player HUD with health and coin counters.

use bevy::prelude::*;

use crate::player::PlayerEntity;

pub(crate) const HUD_PADDING: f32 = 16.0;

/// Marker for the HUD container
#[derive(Component)]
pub struct PlayerHudUI;

/// Marker for the health text
#[derive(Component)]
pub struct HealthText;

/// Marker for the coin amount text
#[derive(Component)]
pub struct CoinAmountText;

pub(crate) fn spawn_player_hud(mut commands: Commands) {
    // Root container positioned at top-left
    commands
        .spawn((
            PlayerHudUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            // Heart (red square)
            parent.spawn((
                Node {
                    width: Val::Px(16.0),
                    height: Val::Px(16.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.85, 0.2, 0.25)),
            ));

            parent.spawn((
                HealthText,
                Text::new("0"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.9, 0.9)),
                Node {
                    margin: UiRect::right(Val::Px(16.0)),
                    ..default()
                },
            ));

            // Coin icon (gold square)
            parent.spawn((
                Node {
                    width: Val::Px(16.0),
                    height: Val::Px(16.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.9, 0.75, 0.2)),
            ));

            parent.spawn((
                CoinAmountText,
                Text::new("0"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.85, 0.5)),
            ));
        });
}

pub(crate) fn update_player_hud(
    players: Query<&PlayerEntity, Changed<PlayerEntity>>,
    mut health_text: Query<&mut Text, (With<HealthText>, Without<CoinAmountText>)>,
    mut coin_text: Query<&mut Text, (With<CoinAmountText>, Without<HealthText>)>,
) {
    let Ok(player) = players.single() else {
        return;
    };

    for mut text in &mut health_text {
        **text = format!("{}", player.health().max(0));
    }
    for mut text in &mut coin_text {
        **text = format!("{}", player.coins());
    }
}
