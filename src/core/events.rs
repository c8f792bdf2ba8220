//! Core domain: events for flow navigation and selection.

use bevy::ecs::message::Message;

use crate::core::state::OnboardingStep;

/// Event fired when the visible step changes
#[derive(Debug)]
pub struct StepChangedEvent {
    pub from: OnboardingStep,
    pub to: OnboardingStep,
}

impl Message for StepChangedEvent {}

/// Event fired when a character card is picked
#[derive(Debug)]
pub struct CharacterPickedEvent {
    pub character_id: u32,
}

impl Message for CharacterPickedEvent {}

/// Event fired once when account creation succeeds and the flow ends
#[derive(Debug)]
pub struct OnboardingCompletedEvent;

impl Message for OnboardingCompletedEvent {}
