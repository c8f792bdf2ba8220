//! UI domain: minimal text fields over raw keyboard input.
//!
//! A field is a clickable node whose child text is re-derived from the
//! flow every frame: value (masked for the password), placeholder when
//! empty, blinking caret while focused. Typing writes through the flow's
//! setters, so the aggregate stays the single source of truth.

use bevy::ecs::message::MessageReader;
use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;

use crate::core::OnboardingFlow;
use crate::ui::widgets::INK;

const PLACEHOLDER_GREY: Color = Color::srgb(0.6, 0.6, 0.6);

/// Which form field a text input edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldKind {
    CharacterName,
    Username,
    Password,
}

impl FieldKind {
    fn placeholder(self) -> &'static str {
        match self {
            Self::CharacterName => "enter character name",
            Self::Username => "enter username",
            Self::Password => "enter password",
        }
    }
}

/// The clickable field node
#[derive(Component, Debug)]
pub struct TextInputField {
    pub kind: FieldKind,
}

/// The field's display text child
#[derive(Component, Debug)]
pub struct TextInputText {
    pub kind: FieldKind,
}

/// Resource tracking which field, if any, receives keystrokes.
#[derive(Resource, Debug, Default)]
pub struct FocusedField(pub Option<FieldKind>);

/// Resource driving the caret blink.
#[derive(Resource, Debug)]
pub struct CaretBlink {
    timer: f32,
    pub visible: bool,
}

impl Default for CaretBlink {
    fn default() -> Self {
        Self {
            timer: 0.0,
            visible: true,
        }
    }
}

/// Spawns a labeled text field: label above, white rounded input below.
pub(crate) fn spawn_text_field(parent: &mut ChildSpawnerCommands, label: &str, kind: FieldKind) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Column,
            width: Val::Px(420.0),
            margin: UiRect::bottom(Val::Px(16.0)),
            ..default()
        })
        .with_children(|field| {
            field.spawn((
                Text::new(label),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(INK),
                Node {
                    margin: UiRect::bottom(Val::Px(6.0)),
                    ..default()
                },
            ));

            field
                .spawn((
                    TextInputField { kind },
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(15.0), Val::Px(12.0)),
                        border_radius: BorderRadius::all(Val::Px(12.0)),
                        ..default()
                    },
                    BackgroundColor(Color::WHITE),
                ))
                .with_child((
                    TextInputText { kind },
                    Text::new(kind.placeholder()),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(PLACEHOLDER_GREY),
                ));
        });
}

pub(crate) fn handle_field_click(
    button_query: Query<(&TextInputField, &Interaction), Changed<Interaction>>,
    mut focus: ResMut<FocusedField>,
) {
    for (field, interaction) in &button_query {
        if *interaction == Interaction::Pressed {
            focus.0 = Some(field.kind);
        }
    }
}

/// Tab moves focus to the next field on the current screen, wrapping.
pub(crate) fn cycle_field_focus(
    keyboard: Res<ButtonInput<KeyCode>>,
    fields: Query<&TextInputField>,
    mut focus: ResMut<FocusedField>,
) {
    if !keyboard.just_pressed(KeyCode::Tab) {
        return;
    }

    let mut kinds: Vec<FieldKind> = fields.iter().map(|f| f.kind).collect();
    if kinds.is_empty() {
        return;
    }
    kinds.sort();
    kinds.dedup();

    focus.0 = Some(match focus.0 {
        None => kinds[0],
        Some(current) => {
            let index = kinds.iter().position(|k| *k == current).unwrap_or(0);
            kinds[(index + 1) % kinds.len()]
        }
    });
}

/// Feeds printable keystrokes into the focused field. Writes are
/// verbatim: no trimming, no validation at write time.
pub(crate) fn capture_text_input(
    mut key_events: MessageReader<KeyboardInput>,
    focus: Res<FocusedField>,
    mut flow: ResMut<OnboardingFlow>,
) {
    let Some(kind) = focus.0 else {
        key_events.clear();
        return;
    };

    for event in key_events.read() {
        if event.state != ButtonState::Pressed {
            continue;
        }

        let mut value = field_value(&flow, kind).to_string();
        match &event.logical_key {
            Key::Character(typed) => {
                value.extend(typed.chars().filter(|c| !c.is_control()));
            }
            Key::Space => value.push(' '),
            Key::Backspace => {
                value.pop();
            }
            _ => continue,
        }

        match kind {
            FieldKind::CharacterName => flow.set_character_name(value),
            FieldKind::Username => flow.set_username(value),
            FieldKind::Password => flow.set_password(value),
        }
    }
}

pub(crate) fn tick_caret(time: Res<Time>, mut caret: ResMut<CaretBlink>) {
    caret.timer += time.delta_secs();
    if caret.timer >= 0.5 {
        caret.timer -= 0.5;
        caret.visible = !caret.visible;
    }
}

/// Re-derives every field's display text from the flow.
pub(crate) fn refresh_field_text(
    flow: Res<OnboardingFlow>,
    focus: Res<FocusedField>,
    caret: Res<CaretBlink>,
    mut text_query: Query<(&TextInputText, &mut Text, &mut TextColor)>,
) {
    for (input_text, mut text, mut text_color) in &mut text_query {
        let kind = input_text.kind;
        let value = field_value(&flow, kind);
        let focused = focus.0 == Some(kind);

        let mut display = if kind == FieldKind::Password {
            "*".repeat(value.chars().count())
        } else {
            value.to_string()
        };

        if focused && caret.visible {
            display.push('|');
        }

        if display.is_empty() {
            text.0 = kind.placeholder().to_string();
            text_color.0 = PLACEHOLDER_GREY;
        } else {
            text.0 = display;
            text_color.0 = INK;
        }
    }
}

pub(crate) fn clear_focus(mut focus: ResMut<FocusedField>) {
    focus.0 = None;
}

fn field_value(flow: &OnboardingFlow, kind: FieldKind) -> &str {
    match kind {
        FieldKind::CharacterName => flow.character_name(),
        FieldKind::Username => flow.username(),
        FieldKind::Password => flow.password(),
    }
}
