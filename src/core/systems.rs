//! Core domain: systems bridging the flow aggregate to Bevy states.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::events::{OnboardingCompletedEvent, StepChangedEvent};
use crate::core::flow::OnboardingFlow;
use crate::core::state::OnboardingStep;

/// Mirrors the flow's current step into the `OnboardingStep` state so
/// screen spawn/cleanup runs through the usual OnEnter/OnExit schedules.
/// The flow aggregate is the only writer of step changes; the Bevy state
/// just follows it.
pub(crate) fn sync_step_state(
    flow: Res<OnboardingFlow>,
    state: Res<State<OnboardingStep>>,
    mut next_state: ResMut<NextState<OnboardingStep>>,
    mut step_events: MessageWriter<StepChangedEvent>,
    mut completed_events: MessageWriter<OnboardingCompletedEvent>,
) {
    if !flow.is_changed() {
        return;
    }

    let target = if flow.is_completed() {
        OnboardingStep::Done
    } else {
        flow.current_step()
    };

    let current = *state.get();
    if target == current {
        return;
    }

    next_state.set(target);
    step_events.write(StepChangedEvent {
        from: current,
        to: target,
    });
    info!("Onboarding step: {:?} -> {:?}", current, target);

    if target == OnboardingStep::Done {
        completed_events.write(OnboardingCompletedEvent);
        info!("Account created, joining the village!");
    }
}

/// Drops the session's form data once the flow has completed. Nothing
/// entered during onboarding outlives the flow.
pub(crate) fn discard_form_data(mut flow: ResMut<OnboardingFlow>) {
    flow.discard_form();
    info!("Onboarding form data discarded");
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
