//! UI domain: post-completion screen. The flow is over by the time this
//! spawns and its form data has been discarded, so nothing here reads it.

use bevy::prelude::*;

use crate::fx::FadeIn;
use crate::ui::widgets::{HEADER_GREEN, INK_SOFT};

/// Marker for the completion screen root
#[derive(Component, Debug)]
pub struct DoneScreenUI;

pub(crate) fn spawn_done_screen(mut commands: Commands) {
    let sky_blue = Color::srgb(0.7, 0.9, 1.0);
    let grass_green = Color::srgb(0.5, 0.8, 0.3);

    commands
        .spawn((
            DoneScreenUI,
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

            parent.spawn((
                FadeIn::new(0.0, 0.8).with_rise(30.0),
                Text::new("welcome to the village!"),
                TextFont {
                    font_size: 44.0,
                    ..default()
                },
                TextColor(HEADER_GREEN),
            ));

            parent.spawn((
                FadeIn::new(0.4, 0.6),
                Text::new("your island adventure begins"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(INK_SOFT),
            ));
        });
}

pub(crate) fn cleanup_done_screen(mut commands: Commands, query: Query<Entity, With<DoneScreenUI>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
