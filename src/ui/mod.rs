//! UI domain: one module per onboarding screen plus shared widgets.
//!
//! Screens spawn on OnEnter and despawn on OnExit of their step. Every
//! visual that depends on flow state (continue button enablement, card
//! highlight, chip styling, field text) is re-derived from the flow each
//! frame rather than observed.

mod account;
mod character_select;
mod customize;
mod done;
mod text_input;
mod welcome;
mod widgets;

use bevy::prelude::*;

use crate::core::OnboardingStep;
use crate::ui::account::{cleanup_account_screen, spawn_account_screen};
use crate::ui::character_select::{
    cleanup_character_select_screen, handle_character_card_click, handle_character_pick_keys,
    spawn_character_select_screen, update_character_cards,
};
use crate::ui::customize::{
    cleanup_customize_screen, handle_trait_chip_click, spawn_customize_screen, update_trait_chips,
    update_trait_counter,
};
use crate::ui::done::{cleanup_done_screen, spawn_done_screen};
use crate::ui::text_input::{
    CaretBlink, FocusedField, capture_text_input, clear_focus, cycle_field_focus,
    handle_field_click, refresh_field_text, tick_caret,
};
use crate::ui::welcome::{cleanup_welcome_screen, spawn_welcome_screen};
use crate::ui::widgets::{
    handle_back_button, handle_continue_button, handle_navigation_keys, update_continue_buttons,
};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FocusedField>()
            .init_resource::<CaretBlink>()
            .add_systems(OnEnter(OnboardingStep::Welcome), spawn_welcome_screen)
            .add_systems(OnExit(OnboardingStep::Welcome), cleanup_welcome_screen)
            .add_systems(
                OnEnter(OnboardingStep::CharacterSelection),
                spawn_character_select_screen,
            )
            .add_systems(
                OnExit(OnboardingStep::CharacterSelection),
                cleanup_character_select_screen,
            )
            .add_systems(OnEnter(OnboardingStep::Customization), spawn_customize_screen)
            .add_systems(
                OnExit(OnboardingStep::Customization),
                (cleanup_customize_screen, clear_focus),
            )
            .add_systems(OnEnter(OnboardingStep::AccountCreation), spawn_account_screen)
            .add_systems(
                OnExit(OnboardingStep::AccountCreation),
                (cleanup_account_screen, clear_focus),
            )
            .add_systems(OnEnter(OnboardingStep::Done), spawn_done_screen)
            .add_systems(OnExit(OnboardingStep::Done), cleanup_done_screen)
            .add_systems(
                Update,
                (
                    handle_continue_button,
                    handle_back_button,
                    handle_navigation_keys,
                    update_continue_buttons,
                ),
            )
            .add_systems(
                Update,
                (
                    handle_character_card_click,
                    handle_character_pick_keys,
                    update_character_cards,
                )
                    .run_if(in_state(OnboardingStep::CharacterSelection)),
            )
            .add_systems(
                Update,
                (
                    handle_trait_chip_click,
                    update_trait_chips,
                    update_trait_counter,
                )
                    .run_if(in_state(OnboardingStep::Customization)),
            )
            .add_systems(
                Update,
                (
                    handle_field_click,
                    cycle_field_focus,
                    capture_text_input,
                    tick_caret,
                    refresh_field_text,
                ),
            );
    }
}
