//! Core domain: onboarding step definitions for the flow.

use bevy::prelude::*;

/// Ordered screens of the onboarding sequence. Navigation is strictly
/// sequential; `Done` is the post-completion screen and is only reachable
/// through a successful `complete()`, never through `advance()`.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum OnboardingStep {
    #[default]
    Welcome,
    CharacterSelection,
    Customization,
    AccountCreation,
    Done,
}

impl OnboardingStep {
    /// The step `advance()` moves to, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Welcome => Some(Self::CharacterSelection),
            Self::CharacterSelection => Some(Self::Customization),
            Self::Customization => Some(Self::AccountCreation),
            Self::AccountCreation | Self::Done => None,
        }
    }

    /// The step `back()` moves to, if any.
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Welcome | Self::Done => None,
            Self::CharacterSelection => Some(Self::Welcome),
            Self::Customization => Some(Self::CharacterSelection),
            Self::AccountCreation => Some(Self::Customization),
        }
    }
}
