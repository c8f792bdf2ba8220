//! UI domain: shared buttons and navigation input.

use bevy::prelude::*;

use crate::core::{OnboardingFlow, OnboardingStep};
use crate::ui::text_input::FocusedField;

pub(crate) const ENABLED_GREEN: Color = Color::srgb(0.2, 0.6, 0.3);
pub(crate) const DISABLED_GREY: Color = Color::srgba(0.5, 0.5, 0.5, 0.6);
pub(crate) const INK: Color = Color::srgb(0.3, 0.2, 0.1);
pub(crate) const INK_SOFT: Color = Color::srgb(0.4, 0.3, 0.2);
pub(crate) const HEADER_GREEN: Color = Color::srgb(0.2, 0.4, 0.1);

/// Marker for the per-screen continue/complete button
#[derive(Component, Debug)]
pub struct ContinueButton;

/// Marker for the per-screen back button
#[derive(Component, Debug)]
pub struct BackButton;

/// Spawns the rounded continue button. Enabled styling is applied every
/// frame by `update_continue_buttons`, derived from the flow's guard.
pub(crate) fn spawn_continue_button(parent: &mut ChildSpawnerCommands, label: &str) {
    parent
        .spawn((
            ContinueButton,
            Button,
            Node {
                padding: UiRect::axes(Val::Px(40.0), Val::Px(14.0)),
                margin: UiRect::top(Val::Px(20.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_radius: BorderRadius::all(Val::Px(25.0)),
                ..default()
            },
            BackgroundColor(DISABLED_GREY),
        ))
        .with_child((
            Text::new(label),
            TextFont {
                font_size: 24.0,
                ..default()
            },
            TextColor(Color::WHITE),
        ));
}

/// Spawns the "< back" button in the screen's top-left corner.
pub(crate) fn spawn_back_button(parent: &mut ChildSpawnerCommands) {
    parent
        .spawn((
            BackButton,
            Button,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(30.0),
                top: Val::Px(24.0),
                padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                ..default()
            },
            BackgroundColor(Color::NONE),
        ))
        .with_child((
            Text::new("< back"),
            TextFont {
                font_size: 20.0,
                ..default()
            },
            TextColor(INK_SOFT),
        ));
}

/// Continue means `advance()` everywhere except the account screen,
/// where it means `complete()`. Guard-failed presses are no-ops.
pub(crate) fn handle_continue_button(
    button_query: Query<&Interaction, (With<ContinueButton>, Changed<Interaction>)>,
    state: Res<State<OnboardingStep>>,
    mut flow: ResMut<OnboardingFlow>,
) {
    let pressed = button_query
        .iter()
        .any(|interaction| *interaction == Interaction::Pressed);
    if !pressed {
        return;
    }

    if *state.get() == OnboardingStep::AccountCreation {
        flow.complete();
    } else {
        flow.advance();
    }
}

pub(crate) fn handle_back_button(
    button_query: Query<&Interaction, (With<BackButton>, Changed<Interaction>)>,
    mut flow: ResMut<OnboardingFlow>,
) {
    let pressed = button_query
        .iter()
        .any(|interaction| *interaction == Interaction::Pressed);
    if pressed {
        flow.back();
    }
}

/// Re-derives the continue button's enabled look from the guard every
/// frame. No reactive bindings: state in, pixels out.
pub(crate) fn update_continue_buttons(
    flow: Res<OnboardingFlow>,
    mut button_query: Query<&mut BackgroundColor, With<ContinueButton>>,
) {
    for mut bg_color in &mut button_query {
        let target = if flow.can_advance() {
            ENABLED_GREEN
        } else {
            DISABLED_GREY
        };
        if bg_color.0 != target {
            *bg_color = BackgroundColor(target);
        }
    }
}

/// Enter activates continue/complete, Escape unfocuses a text field or
/// goes back a step.
pub(crate) fn handle_navigation_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<OnboardingStep>>,
    mut flow: ResMut<OnboardingFlow>,
    mut focus: ResMut<FocusedField>,
) {
    if *state.get() == OnboardingStep::Done {
        return;
    }

    if keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::NumpadEnter) {
        if *state.get() == OnboardingStep::AccountCreation {
            flow.complete();
        } else {
            flow.advance();
        }
    }

    if keyboard.just_pressed(KeyCode::Escape) {
        if focus.0.is_some() {
            focus.0 = None;
        } else {
            flow.back();
        }
    }
}
