//! UI domain: welcome screen with drifting clouds and staggered fade-in.

use bevy::prelude::*;

use crate::fx::{FadeIn, Pulse, spawn_clouds};
use crate::ui::widgets::{HEADER_GREEN, INK, INK_SOFT, spawn_continue_button};

/// Marker for the welcome screen root
#[derive(Component, Debug)]
pub struct WelcomeScreenUI;

pub(crate) fn spawn_welcome_screen(mut commands: Commands) {
    let sky_blue = Color::srgb(0.7, 0.9, 1.0);
    let grass_green = Color::srgb(0.5, 0.8, 0.3);
    let leaf_green = Color::srgb(0.3, 0.7, 0.2);
    let paw_brown = Color::srgb(0.55, 0.4, 0.25);

    commands
        .spawn((
            WelcomeScreenUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
            BackgroundColor(sky_blue),
        ))
        .with_children(|parent| {
            // Grass band along the bottom, under everything else
            parent.spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(0.0),
                    right: Val::Px(0.0),
                    bottom: Val::Px(0.0),
                    height: Val::Percent(40.0),
                    ..default()
                },
                BackgroundColor(grass_green),
            ));

            spawn_clouds(parent);

            // Village badge
            parent.spawn((
                FadeIn::new(0.0, 0.8),
                Node {
                    width: Val::Px(120.0),
                    height: Val::Px(120.0),
                    margin: UiRect::bottom(Val::Px(10.0)),
                    border_radius: BorderRadius::MAX,
                    ..default()
                },
                BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.5)),
            ));

            parent.spawn((
                FadeIn::new(0.3, 0.6),
                Text::new("welcome to"),
                TextFont {
                    font_size: 26.0,
                    ..default()
                },
                TextColor(INK),
            ));

            parent.spawn((
                FadeIn::new(0.5, 0.8).with_rise(30.0),
                Text::new("cat village"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(HEADER_GREEN),
            ));

            parent.spawn((
                FadeIn::new(0.7, 0.6),
                Text::new("your new island adventure awaits!"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(INK_SOFT),
            ));

            // Leaf / paw / leaf accents, each pulsing off-beat
            parent
                .spawn((
                    FadeIn::new(1.0, 0.6),
                    Node {
                        flex_direction: FlexDirection::Row,
                        align_items: AlignItems::Center,
                        column_gap: Val::Px(20.0),
                        margin: UiRect::top(Val::Px(20.0)),
                        ..default()
                    },
                ))
                .with_children(|accents| {
                    for (color, period, phase, round) in [
                        (leaf_green, 2.0, 0.0, 12.0),
                        (paw_brown, 1.8, 0.6, 100.0),
                        (leaf_green, 2.2, 1.1, 12.0),
                    ] {
                        accents.spawn((
                            Pulse::new(Vec2::splat(28.0), 0.12, period).with_phase(phase),
                            Node {
                                width: Val::Px(28.0),
                                height: Val::Px(28.0),
                                border_radius: BorderRadius::all(Val::Px(round)),
                                ..default()
                            },
                            BackgroundColor(color),
                        ));
                    }
                });

            spawn_continue_button(parent, "get started");
        });
}

pub(crate) fn cleanup_welcome_screen(
    mut commands: Commands,
    query: Query<Entity, With<WelcomeScreenUI>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
