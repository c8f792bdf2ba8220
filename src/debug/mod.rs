//! Debug overlay for poking at the flow while iterating on screens.
//!
//! F3 toggles a corner panel showing the current step, guard result, and
//! form state. The password is reported as a length only.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::{CharacterPickedEvent, OnboardingFlow, OnboardingStep, StepChangedEvent};

/// Resource tracking overlay visibility and the last observed events
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub visible: bool,
    pub last_transition: Option<(OnboardingStep, OnboardingStep)>,
    pub last_picked: Option<u32>,
}

/// Marker for the overlay root
#[derive(Component, Debug)]
struct DebugOverlayUI;

/// Marker for the overlay body text
#[derive(Component, Debug)]
struct DebugOverlayText;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (toggle_overlay, record_flow_events, update_overlay_text),
        );
    }
}

fn toggle_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    overlay_query: Query<Entity, With<DebugOverlayUI>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    debug_state.visible = !debug_state.visible;

    if debug_state.visible {
        spawn_overlay(&mut commands);
    } else {
        for entity in overlay_query.iter() {
            commands.entity(entity).despawn();
        }
    }
}

fn spawn_overlay(commands: &mut Commands) {
    commands
        .spawn((
            DebugOverlayUI,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(10.0),
                top: Val::Px(10.0),
                padding: UiRect::all(Val::Px(10.0)),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.05, 0.05, 0.1, 0.9)),
            ZIndex(500),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("flow debug [F3]"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.7, 0.3)),
            ));
            parent.spawn((
                DebugOverlayText,
                Text::new(String::new()),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.85)),
            ));
        });
}

fn record_flow_events(
    mut step_events: MessageReader<StepChangedEvent>,
    mut picked_events: MessageReader<CharacterPickedEvent>,
    mut debug_state: ResMut<DebugState>,
) {
    for event in step_events.read() {
        debug_state.last_transition = Some((event.from, event.to));
    }
    for event in picked_events.read() {
        debug_state.last_picked = Some(event.character_id);
    }
}

fn update_overlay_text(
    debug_state: Res<DebugState>,
    flow: Res<OnboardingFlow>,
    state: Res<State<OnboardingStep>>,
    mut text_query: Query<&mut Text, With<DebugOverlayText>>,
) {
    if !debug_state.visible {
        return;
    }

    let mut traits: Vec<u32> = flow.selected_traits().iter().copied().collect();
    traits.sort_unstable();

    let transition = match debug_state.last_transition {
        Some((from, to)) => format!("{:?} -> {:?}", from, to),
        None => "-".to_string(),
    };

    for mut text in &mut text_query {
        text.0 = format!(
            "screen: {:?}\nstep: {:?}\ncan_advance: {}\ncharacter: {:?} (last picked {:?})\n\
             name: {:?}\ntraits: {:?}\nusername: {:?}\npassword: {} chars\n\
             completed: {}\nlast transition: {}",
            state.get(),
            flow.current_step(),
            flow.can_advance(),
            flow.selected_character(),
            debug_state.last_picked,
            flow.character_name(),
            traits,
            flow.username(),
            flow.password().len(),
            flow.is_completed(),
            transition,
        );
    }
}
