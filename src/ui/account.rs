//! UI domain: account creation screen.

use bevy::prelude::*;

use crate::fx::FadeIn;
use crate::ui::text_input::{FieldKind, spawn_text_field};
use crate::ui::widgets::{HEADER_GREEN, INK_SOFT, spawn_back_button, spawn_continue_button};

/// Marker for the account creation screen root
#[derive(Component, Debug)]
pub struct AccountScreenUI;

pub(crate) fn spawn_account_screen(mut commands: Commands) {
    let backdrop = Color::srgb(0.93, 0.96, 0.94);

    commands
        .spawn((
            AccountScreenUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(10.0),
                ..default()
            },
            BackgroundColor(backdrop),
        ))
        .with_children(|parent| {
            spawn_back_button(parent);

            parent.spawn((
                FadeIn::new(0.0, 0.5),
                Text::new("your new island adventure awaits!"),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(HEADER_GREEN),
                TextLayout::new_with_justify(Justify::Center),
            ));

            parent.spawn((
                FadeIn::new(0.15, 0.5),
                Text::new("create your account"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(INK_SOFT),
                Node {
                    margin: UiRect::bottom(Val::Px(24.0)),
                    ..default()
                },
            ));

            spawn_text_field(parent, "username", FieldKind::Username);
            spawn_text_field(parent, "password", FieldKind::Password);

            spawn_continue_button(parent, "join the village");
        });
}

pub(crate) fn cleanup_account_screen(
    mut commands: Commands,
    query: Query<Entity, With<AccountScreenUI>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
