//! UI domain: character selection grid and input handling.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::{ContentRegistry, builtin_catalog};
use crate::core::{CharacterPickedEvent, OnboardingFlow};
use crate::fx::FadeIn;
use crate::ui::widgets::{
    ENABLED_GREEN, HEADER_GREEN, INK, INK_SOFT, spawn_back_button, spawn_continue_button,
};

/// Marker for the character selection screen root
#[derive(Component, Debug)]
pub struct CharacterSelectScreenUI;

/// Button for selecting a specific character
#[derive(Component, Debug)]
pub struct CharacterCardButton {
    pub character_id: u32,
    pub accent: Color,
}

pub(crate) fn spawn_character_select_screen(
    mut commands: Commands,
    registry: Option<Res<ContentRegistry>>,
) {
    let backdrop = Color::srgb(0.93, 0.96, 0.94);

    // Fall back to the shipped catalog if the registry never loaded
    let fallback;
    let registry = match registry.as_deref() {
        Some(registry) => registry,
        None => {
            fallback = builtin_catalog();
            &fallback
        }
    };

    commands
        .spawn((
            CharacterSelectScreenUI,
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
            BackgroundColor(backdrop),
        ))
        .with_children(|parent| {
            spawn_back_button(parent);

            parent.spawn((
                FadeIn::new(0.0, 0.5),
                Text::new("choose your fruit cat"),
                TextFont {
                    font_size: 40.0,
                    ..default()
                },
                TextColor(HEADER_GREEN),
            ));

            parent.spawn((
                FadeIn::new(0.15, 0.5),
                Text::new("pick the one that matches you best"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(INK_SOFT),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            // 2x2 card grid
            let characters = registry.characters_ordered();
            for row in characters.chunks(2) {
                parent
                    .spawn(Node {
                        flex_direction: FlexDirection::Row,
                        column_gap: Val::Px(12.0),
                        margin: UiRect::bottom(Val::Px(12.0)),
                        ..default()
                    })
                    .with_children(|cards| {
                        for character in row {
                            spawn_character_card(
                                cards,
                                character.id,
                                &character.name,
                                Color::srgb(
                                    character.color[0],
                                    character.color[1],
                                    character.color[2],
                                ),
                            );
                        }
                    });
            }

            parent.spawn((
                Text::new("press 1-4 or click to select"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(INK_SOFT),
            ));

            spawn_continue_button(parent, "continue adventure");
        });
}

fn spawn_character_card(
    parent: &mut ChildSpawnerCommands,
    character_id: u32,
    name: &str,
    accent: Color,
) {
    parent
        .spawn((
            CharacterCardButton {
                character_id,
                accent,
            },
            Button,
            Node {
                width: Val::Px(150.0),
                min_height: Val::Px(170.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Px(15.0)),
                border: UiRect::all(Val::Px(3.0)),
                border_radius: BorderRadius::all(Val::Px(20.0)),
                ..default()
            },
            BackgroundColor(Color::WHITE),
            BorderColor::all(Color::NONE),
        ))
        .with_children(|card| {
            // Cat portrait stand-in, tinted per fruit
            card.spawn((
                Node {
                    width: Val::Px(80.0),
                    height: Val::Px(80.0),
                    margin: UiRect::bottom(Val::Px(12.0)),
                    border_radius: BorderRadius::MAX,
                    ..default()
                },
                BackgroundColor(accent.with_alpha(0.45)),
            ));

            card.spawn((
                Text::new(name),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(INK),
                TextLayout::new_with_justify(Justify::Center),
            ));
        });
}

pub(crate) fn handle_character_card_click(
    button_query: Query<(&CharacterCardButton, &Interaction), Changed<Interaction>>,
    mut flow: ResMut<OnboardingFlow>,
    mut picked_events: MessageWriter<CharacterPickedEvent>,
) {
    for (card, interaction) in &button_query {
        if *interaction == Interaction::Pressed {
            flow.select_character(card.character_id);
            picked_events.write(CharacterPickedEvent {
                character_id: card.character_id,
            });
            info!("Character picked via click: {}", card.character_id);
        }
    }
}

pub(crate) fn handle_character_pick_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut flow: ResMut<OnboardingFlow>,
    mut picked_events: MessageWriter<CharacterPickedEvent>,
) {
    let picked = if keyboard.just_pressed(KeyCode::Digit1) || keyboard.just_pressed(KeyCode::Numpad1)
    {
        Some(0)
    } else if keyboard.just_pressed(KeyCode::Digit2) || keyboard.just_pressed(KeyCode::Numpad2) {
        Some(1)
    } else if keyboard.just_pressed(KeyCode::Digit3) || keyboard.just_pressed(KeyCode::Numpad3) {
        Some(2)
    } else if keyboard.just_pressed(KeyCode::Digit4) || keyboard.just_pressed(KeyCode::Numpad4) {
        Some(3)
    } else {
        None
    };

    if let Some(character_id) = picked {
        flow.select_character(character_id);
        picked_events.write(CharacterPickedEvent { character_id });
        info!("Character picked via keyboard: {}", character_id);
    }
}

/// Re-derives card highlight from the current selection and hover state.
pub(crate) fn update_character_cards(
    flow: Res<OnboardingFlow>,
    mut card_query: Query<(
        &CharacterCardButton,
        &Interaction,
        &mut BackgroundColor,
        &mut BorderColor,
    )>,
) {
    for (card, interaction, mut bg_color, mut border_color) in &mut card_query {
        let selected = flow.selected_character() == Some(card.character_id);

        *border_color = if selected {
            BorderColor::all(ENABLED_GREEN)
        } else {
            BorderColor::all(Color::NONE)
        };

        *bg_color = match interaction {
            Interaction::Hovered | Interaction::Pressed => {
                BackgroundColor(card.accent.with_alpha(0.15))
            }
            Interaction::None => BackgroundColor(Color::WHITE),
        };
    }
}

pub(crate) fn cleanup_character_select_screen(
    mut commands: Commands,
    query: Query<Entity, With<CharacterSelectScreenUI>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
