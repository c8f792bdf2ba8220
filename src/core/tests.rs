//! Core domain: unit tests for flow navigation and guards.

use super::flow::OnboardingFlow;
use super::state::OnboardingStep;

fn flow_at_selection() -> OnboardingFlow {
    let mut flow = OnboardingFlow::default();
    flow.advance();
    assert_eq!(flow.current_step(), OnboardingStep::CharacterSelection);
    flow
}

fn flow_at_customization() -> OnboardingFlow {
    let mut flow = flow_at_selection();
    flow.select_character(2);
    flow.advance();
    assert_eq!(flow.current_step(), OnboardingStep::Customization);
    flow
}

fn flow_at_account() -> OnboardingFlow {
    let mut flow = flow_at_customization();
    flow.set_character_name("Mochi");
    flow.toggle_trait(1);
    flow.toggle_trait(3);
    flow.toggle_trait(7);
    flow.advance();
    assert_eq!(flow.current_step(), OnboardingStep::AccountCreation);
    flow
}

#[test]
fn test_welcome_advances_unconditionally() {
    let mut flow = OnboardingFlow::default();
    assert_eq!(flow.current_step(), OnboardingStep::Welcome);
    assert!(flow.can_advance());
    flow.advance();
    assert_eq!(flow.current_step(), OnboardingStep::CharacterSelection);
}

#[test]
fn test_back_on_welcome_is_noop() {
    let mut flow = OnboardingFlow::default();
    flow.back();
    assert_eq!(flow.current_step(), OnboardingStep::Welcome);
}

#[test]
fn test_selection_guard_requires_character() {
    let mut flow = flow_at_selection();
    assert!(!flow.can_advance());

    // Guard unmet: advance must not change step or data
    let before = flow.clone();
    flow.advance();
    assert_eq!(flow, before);

    flow.select_character(2);
    assert!(flow.can_advance());
    flow.advance();
    assert_eq!(flow.current_step(), OnboardingStep::Customization);
}

#[test]
fn test_select_character_rejects_invalid_id() {
    let mut flow = flow_at_selection();
    flow.select_character(4);
    assert_eq!(flow.selected_character(), None);
}

#[test]
fn test_select_character_noop_off_selection_screen() {
    let mut flow = OnboardingFlow::default();
    flow.select_character(1);
    assert_eq!(flow.selected_character(), None);
}

#[test]
fn test_select_character_overwrites_prior_pick() {
    let mut flow = flow_at_selection();
    flow.select_character(0);
    flow.select_character(3);
    assert_eq!(flow.selected_character(), Some(3));
}

#[test]
fn test_trait_cap_holds_for_any_sequence() {
    let mut flow = flow_at_customization();
    for id in [0u32, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 5, 11, 2] {
        flow.toggle_trait(id);
        assert!(flow.trait_count() <= 3);
    }
}

#[test]
fn test_toggle_trait_is_its_own_inverse() {
    let mut flow = flow_at_customization();
    flow.toggle_trait(1);
    let before = flow.selected_traits().clone();
    flow.toggle_trait(9);
    flow.toggle_trait(9);
    assert_eq!(*flow.selected_traits(), before);
}

#[test]
fn test_fourth_trait_is_rejected() {
    let mut flow = flow_at_customization();
    flow.toggle_trait(0);
    flow.toggle_trait(1);
    flow.toggle_trait(2);
    flow.toggle_trait(3);
    assert_eq!(flow.trait_count(), 3);
    assert!(!flow.selected_traits().contains(&3));

    // Removal still works at the cap
    flow.toggle_trait(1);
    assert_eq!(flow.trait_count(), 2);
}

#[test]
fn test_toggle_trait_rejects_invalid_id() {
    let mut flow = flow_at_customization();
    flow.toggle_trait(12);
    assert_eq!(flow.trait_count(), 0);
}

#[test]
fn test_customization_guard() {
    let mut flow = flow_at_customization();
    flow.set_character_name("Mochi");
    flow.toggle_trait(1);
    flow.toggle_trait(3);
    assert!(!flow.can_advance());

    flow.toggle_trait(7);
    assert!(flow.can_advance());

    flow.set_character_name("");
    assert!(!flow.can_advance());
}

#[test]
fn test_whitespace_name_counts_as_nonempty() {
    let mut flow = flow_at_customization();
    flow.set_character_name("   ");
    flow.toggle_trait(0);
    flow.toggle_trait(1);
    flow.toggle_trait(2);
    assert!(flow.can_advance());
}

#[test]
fn test_back_then_advance_round_trips() {
    let mut flow = flow_at_account();
    flow.set_username("catlover");

    flow.back();
    assert_eq!(flow.current_step(), OnboardingStep::Customization);

    // Nothing entered is cleared by going back
    assert_eq!(flow.character_name(), "Mochi");
    assert_eq!(flow.selected_character(), Some(2));
    assert_eq!(flow.trait_count(), 3);
    assert_eq!(flow.username(), "catlover");

    flow.advance();
    assert_eq!(flow.current_step(), OnboardingStep::AccountCreation);
    assert_eq!(flow.username(), "catlover");
}

#[test]
fn test_complete_requires_both_credentials() {
    let mut flow = flow_at_account();
    flow.set_username("catlover");
    flow.complete();
    assert!(!flow.is_completed());

    flow.set_password("meow123");
    flow.complete();
    assert!(flow.is_completed());
}

#[test]
fn test_complete_noop_off_account_screen() {
    let mut flow = flow_at_customization();
    flow.set_username("catlover");
    flow.set_password("meow123");
    flow.complete();
    assert!(!flow.is_completed());
}

#[test]
fn test_advance_does_not_leave_account_screen() {
    let mut flow = flow_at_account();
    flow.set_username("catlover");
    flow.set_password("meow123");
    flow.advance();
    assert_eq!(flow.current_step(), OnboardingStep::AccountCreation);
    assert!(!flow.is_completed());
}

#[test]
fn test_discard_form_clears_everything() {
    let mut flow = flow_at_account();
    flow.set_username("catlover");
    flow.set_password("meow123");
    flow.complete();

    flow.discard_form();
    assert_eq!(flow.selected_character(), None);
    assert!(flow.character_name().is_empty());
    assert_eq!(flow.trait_count(), 0);
    assert!(flow.username().is_empty());
    assert!(flow.password().is_empty());
}

#[test]
fn test_debug_never_prints_password() {
    let mut flow = flow_at_account();
    flow.set_password("meow123");
    let printed = format!("{:?}", flow);
    assert!(!printed.contains("meow123"));
}
