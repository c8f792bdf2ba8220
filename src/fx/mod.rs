//! Fx domain: decorative animation with no semantic state.

mod clouds;
mod fade;
mod pulse;

pub use clouds::spawn_clouds;
pub use fade::FadeIn;
pub use pulse::Pulse;

use bevy::prelude::*;

use crate::core::OnboardingStep;
use crate::fx::clouds::drift_clouds;
use crate::fx::fade::tick_fade_in;
use crate::fx::pulse::tick_pulse;

pub struct FxPlugin;

impl Plugin for FxPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (tick_fade_in, tick_pulse))
            .add_systems(
                Update,
                drift_clouds.run_if(in_state(OnboardingStep::Welcome)),
            );
    }
}
