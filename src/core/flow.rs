//! Core domain: the onboarding flow aggregate and its guards.
//!
//! All step-local form fields live in one resource so the invariants
//! (trait cap, sequential navigation) are enforced in one place rather
//! than per screen. Screens read this state every frame and render from
//! it; they never mutate `current_step` directly.

use std::collections::HashSet;
use std::fmt;

use bevy::prelude::*;

use crate::content::{CHARACTER_COUNT, MAX_TRAITS, TRAIT_COUNT};
use crate::core::state::OnboardingStep;

/// The single mutable aggregate for the whole onboarding session.
///
/// Guard-failed operations are silent no-ops: a disabled continue button,
/// not an error. Navigating back never clears the data of the step being
/// left, so returning forward shows previously entered values.
#[derive(Resource, Clone, PartialEq, Default)]
pub struct OnboardingFlow {
    current_step: OnboardingStep,
    selected_character: Option<u32>,
    character_name: String,
    selected_traits: HashSet<u32>,
    username: String,
    password: String,
    completed: bool,
}

impl OnboardingFlow {
    pub fn current_step(&self) -> OnboardingStep {
        self.current_step
    }

    pub fn selected_character(&self) -> Option<u32> {
        self.selected_character
    }

    pub fn character_name(&self) -> &str {
        &self.character_name
    }

    pub fn selected_traits(&self) -> &HashSet<u32> {
        &self.selected_traits
    }

    pub fn trait_count(&self) -> usize {
        self.selected_traits.len()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Picks a character. Only meaningful on the selection screen;
    /// ids outside the catalog are rejected.
    pub fn select_character(&mut self, id: u32) {
        if self.current_step != OnboardingStep::CharacterSelection || id >= CHARACTER_COUNT {
            return;
        }
        self.selected_character = Some(id);
    }

    /// Overwrites the cat name verbatim. No trimming: the guard tests
    /// literal emptiness, so whitespace-only names count as non-empty.
    pub fn set_character_name(&mut self, text: impl Into<String>) {
        self.character_name = text.into();
    }

    /// Adds or removes a trait. Adding past the cap is a no-op, as is
    /// any id outside the catalog.
    pub fn toggle_trait(&mut self, id: u32) {
        if id >= TRAIT_COUNT {
            return;
        }
        if !self.selected_traits.remove(&id) && self.selected_traits.len() < MAX_TRAITS {
            self.selected_traits.insert(id);
        }
    }

    pub fn set_username(&mut self, text: impl Into<String>) {
        self.username = text.into();
    }

    pub fn set_password(&mut self, text: impl Into<String>) {
        self.password = text.into();
    }

    /// Whether the current step's continue affordance should be enabled.
    /// Equal to the guard of the step's advance/complete transition.
    pub fn can_advance(&self) -> bool {
        match self.current_step {
            OnboardingStep::Welcome => true,
            OnboardingStep::CharacterSelection => self.selected_character.is_some(),
            OnboardingStep::Customization => {
                !self.character_name.is_empty() && self.selected_traits.len() == MAX_TRAITS
            }
            OnboardingStep::AccountCreation => {
                !self.username.is_empty() && !self.password.is_empty()
            }
            OnboardingStep::Done => false,
        }
    }

    /// Moves one step forward when the current step's guard holds.
    /// The account screen exits through `complete()`, not here.
    pub fn advance(&mut self) {
        if !self.can_advance() {
            return;
        }
        if let Some(next) = self.current_step.next() {
            self.current_step = next;
        }
    }

    /// Moves one step back. No-op on the first step; leaves all entered
    /// data intact.
    pub fn back(&mut self) {
        if let Some(previous) = self.current_step.previous() {
            self.current_step = previous;
        }
    }

    /// Finishes the flow from the account screen when both credentials
    /// are non-empty. No-op anywhere else or with the guard unmet.
    pub fn complete(&mut self) {
        if self.current_step == OnboardingStep::AccountCreation && self.can_advance() {
            self.completed = true;
        }
    }

    /// Drops all entered form data. Called once the flow has completed;
    /// nothing here is persisted.
    pub fn discard_form(&mut self) {
        self.selected_character = None;
        self.character_name.clear();
        self.selected_traits.clear();
        self.username.clear();
        self.password.clear();
    }
}

// Manual impl so the password can never leak through debug logging or
// the dev overlay.
impl fmt::Debug for OnboardingFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnboardingFlow")
            .field("current_step", &self.current_step)
            .field("selected_character", &self.selected_character)
            .field("character_name", &self.character_name)
            .field("selected_traits", &self.selected_traits)
            .field("username", &self.username)
            .field("password", &format_args!("<{} chars>", self.password.len()))
            .field("completed", &self.completed)
            .finish()
    }
}
