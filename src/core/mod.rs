//! Core domain: onboarding flow state, guards, and navigation events.

mod events;
mod flow;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use events::{CharacterPickedEvent, OnboardingCompletedEvent, StepChangedEvent};
pub use flow::OnboardingFlow;
pub use state::OnboardingStep;

use bevy::prelude::*;

use crate::core::systems::{discard_form_data, setup_camera, sync_step_state};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<OnboardingStep>()
            .init_resource::<OnboardingFlow>()
            .add_message::<StepChangedEvent>()
            .add_message::<CharacterPickedEvent>()
            .add_message::<OnboardingCompletedEvent>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, sync_step_state)
            .add_systems(OnEnter(OnboardingStep::Done), discard_form_data);
    }
}
