//! UI domain: customization screen with name field and trait chips.

use bevy::prelude::*;

use crate::content::{ContentRegistry, MAX_TRAITS, builtin_catalog};
use crate::core::OnboardingFlow;
use crate::fx::FadeIn;
use crate::ui::text_input::{FieldKind, spawn_text_field};
use crate::ui::widgets::{HEADER_GREEN, INK, INK_SOFT, spawn_back_button, spawn_continue_button};

/// Marker for the customization screen root
#[derive(Component, Debug)]
pub struct CustomizeScreenUI;

/// Chip for toggling a personality trait
#[derive(Component, Debug)]
pub struct TraitChipButton {
    pub trait_id: u32,
    pub accent: Color,
}

/// The "select 3 traits (n/3)" counter text
#[derive(Component, Debug)]
pub struct TraitCounterText;

pub(crate) fn spawn_customize_screen(
    mut commands: Commands,
    registry: Option<Res<ContentRegistry>>,
) {
    let backdrop = Color::srgb(0.93, 0.96, 0.94);

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
            CustomizeScreenUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(8.0),
                ..default()
            },
            BackgroundColor(backdrop),
        ))
        .with_children(|parent| {
            spawn_back_button(parent);

            parent.spawn((
                FadeIn::new(0.0, 0.5),
                Text::new("customize your cat"),
                TextFont {
                    font_size: 40.0,
                    ..default()
                },
                TextColor(HEADER_GREEN),
            ));

            parent.spawn((
                FadeIn::new(0.15, 0.5),
                Text::new("give your cat a name and pick 3 personality traits"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(INK_SOFT),
                Node {
                    margin: UiRect::bottom(Val::Px(16.0)),
                    ..default()
                },
            ));

            spawn_text_field(parent, "cat name", FieldKind::CharacterName);

            parent.spawn((
                Text::new("personality traits"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(INK),
            ));

            parent.spawn((
                TraitCounterText,
                Text::new(format!("select {} traits (0/{})", MAX_TRAITS, MAX_TRAITS)),
                TextFont {
                    font_size: 15.0,
                    ..default()
                },
                TextColor(INK_SOFT),
                Node {
                    margin: UiRect::bottom(Val::Px(8.0)),
                    ..default()
                },
            ));

            // Chip grid, three per row
            let traits = registry.traits_ordered();
            for row in traits.chunks(3) {
                parent
                    .spawn(Node {
                        flex_direction: FlexDirection::Row,
                        column_gap: Val::Px(8.0),
                        margin: UiRect::bottom(Val::Px(8.0)),
                        ..default()
                    })
                    .with_children(|chips| {
                        for trait_def in row {
                            spawn_trait_chip(
                                chips,
                                trait_def.id,
                                &trait_def.name,
                                Color::srgb(
                                    trait_def.color[0],
                                    trait_def.color[1],
                                    trait_def.color[2],
                                ),
                            );
                        }
                    });
            }

            spawn_continue_button(parent, "complete setup");
        });
}

fn spawn_trait_chip(parent: &mut ChildSpawnerCommands, trait_id: u32, name: &str, accent: Color) {
    parent
        .spawn((
            TraitChipButton { trait_id, accent },
            Button,
            Node {
                width: Val::Px(120.0),
                justify_content: JustifyContent::Center,
                padding: UiRect::axes(Val::Px(16.0), Val::Px(9.0)),
                border: UiRect::all(Val::Px(2.0)),
                border_radius: BorderRadius::all(Val::Px(18.0)),
                ..default()
            },
            BackgroundColor(Color::WHITE),
            BorderColor::all(accent.with_alpha(0.6)),
        ))
        .with_child((
            Text::new(name),
            TextFont {
                font_size: 16.0,
                ..default()
            },
            TextColor(INK),
        ));
}

pub(crate) fn handle_trait_chip_click(
    button_query: Query<(&TraitChipButton, &Interaction), Changed<Interaction>>,
    mut flow: ResMut<OnboardingFlow>,
) {
    for (chip, interaction) in &button_query {
        if *interaction == Interaction::Pressed {
            flow.toggle_trait(chip.trait_id);
            info!(
                "Trait {} toggled, {} selected",
                chip.trait_id,
                flow.trait_count()
            );
        }
    }
}

/// Re-derives chip styling from the trait set: selected chips fill with
/// their accent color, unselected chips grey out once the cap is hit.
pub(crate) fn update_trait_chips(
    flow: Res<OnboardingFlow>,
    mut chip_query: Query<(&TraitChipButton, &Children, &mut BackgroundColor, &mut BorderColor)>,
    mut text_query: Query<&mut TextColor>,
) {
    let at_cap = flow.trait_count() >= MAX_TRAITS;

    for (chip, children, mut bg_color, mut border_color) in &mut chip_query {
        let selected = flow.selected_traits().contains(&chip.trait_id);

        let (bg, border, label) = if selected {
            (chip.accent, chip.accent, Color::WHITE)
        } else if at_cap {
            (
                Color::srgba(0.5, 0.5, 0.5, 0.3),
                Color::srgba(0.5, 0.5, 0.5, 0.5),
                Color::srgb(0.5, 0.5, 0.5),
            )
        } else {
            (Color::WHITE, chip.accent.with_alpha(0.6), INK)
        };

        *bg_color = BackgroundColor(bg);
        *border_color = BorderColor::all(border);
        for child in children.iter() {
            if let Ok(mut text_color) = text_query.get_mut(child) {
                text_color.0 = label;
            }
        }
    }
}

pub(crate) fn update_trait_counter(
    flow: Res<OnboardingFlow>,
    mut counter_query: Query<&mut Text, With<TraitCounterText>>,
) {
    for mut text in &mut counter_query {
        text.0 = format!(
            "select {} traits ({}/{})",
            MAX_TRAITS,
            flow.trait_count(),
            MAX_TRAITS
        );
    }
}

pub(crate) fn cleanup_customize_screen(
    mut commands: Commands,
    query: Query<Entity, With<CustomizeScreenUI>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
