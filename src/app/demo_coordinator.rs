//! Demo-level coordination.
//!
//! Applies panel interactions to the application state, fires due timers
//! each frame, and decides when the next repaint is needed.

use std::time::Duration;

use rangekit::{markers, MarkerSurface, RetriggerPolicy, ScaleOutcome};

use crate::app::AppState;
use crate::ui::panel_manager::PanelInteraction;

/// Repaint cadence while the box is animating.
const ANIMATION_FRAME: Duration = Duration::from_millis(16);

/// Coordinates demo operations.
pub struct DemoCoordinator;

impl DemoCoordinator {
    /// Fires every timed removal that is due. Called once per frame.
    pub fn tick(state: &mut AppState, now: Duration) -> usize {
        state.timers.fire_due(now, &mut state.board)
    }

    /// Applies one panel interaction.
    pub fn handle_interaction(state: &mut AppState, interaction: PanelInteraction, now: Duration) {
        match interaction {
            PanelInteraction::TriggerAnimation => Self::trigger_animation(state, now),
            PanelInteraction::FlipCard => {
                let flipped = markers::flip_card(&mut state.board, &state.config);
                tracing::debug!(?flipped, "card toggled");
            }
            PanelInteraction::StartLoader => {
                markers::start_loader(&mut state.board, &state.config);
            }
            PanelInteraction::StopLoader => {
                markers::stop_loader(&mut state.board, &state.config);
            }
            PanelInteraction::OpenModal => {
                markers::open_modal(&mut state.board, &state.config);
            }
            PanelInteraction::CloseModal => {
                markers::close_modal(&mut state.board, &state.config);
            }
            PanelInteraction::SubmitScaleForm => Self::submit_scale_form(state),
            PanelInteraction::RetriggerPolicyChanged(policy) => Self::set_retrigger_policy(state, policy),
            PanelInteraction::ElementAttachmentChanged { element, attached } => {
                Self::set_element_attached(state, &element, attached)
            }
            PanelInteraction::CancelPendingRemovals => {
                state.timers.cancel_all();
                tracing::info!("cancelled pending removals");
            }
        }
    }

    /// Starts an animation run with the current pace.
    fn trigger_animation(state: &mut AppState, now: Duration) {
        let duration = state.pacing.animation_duration();
        let handle = markers::trigger_animation(&mut state.board, &mut state.timers, &state.config, duration, now);
        if handle.is_some() {
            state.pacing.start_run(now);
        }
    }

    /// Submits the scale form and applies the derived pace.
    ///
    /// A failed mapping or a non-computable duration leaves the pace unchanged.
    fn submit_scale_form(state: &mut AppState) {
        if let ScaleOutcome::Scaled { duration_ms: Some(ms), .. } = state.form.submit() {
            let ms = *ms;
            state.pacing.set_animation_duration(Duration::from_millis(ms));
            tracing::info!(duration_ms = ms, "animation pace updated");
        }
    }

    fn set_retrigger_policy(state: &mut AppState, policy: RetriggerPolicy) {
        state.timers.set_policy(policy);
        tracing::info!(policy = policy.label(), "retrigger policy changed");
    }

    /// Attaches or detaches an element, exercising the absent-element path.
    fn set_element_attached(state: &mut AppState, element: &str, attached: bool) {
        if attached {
            state.board.register(element);
        } else {
            state.board.unregister(element);
        }
        tracing::info!(element, attached, "element attachment changed");
    }

    /// Returns how soon the next frame is needed, `None` if nothing is moving.
    pub fn next_repaint_delay(state: &AppState, now: Duration) -> Option<Duration> {
        let animating = state
            .board
            .has_class(&state.config.elements.animated_box, &state.config.classes.animate);
        let loading = state
            .board
            .has_class(&state.config.elements.loader, &state.config.classes.loading);
        if animating || loading {
            return Some(ANIMATION_FRAME);
        }

        state
            .timers
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::settings_coordinator::Preferences;
    use rangekit::DemoConfig;

    fn demo_state() -> AppState {
        let config = DemoConfig::default();
        let preferences = Preferences::from_config(&config);
        AppState::new(config, preferences)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_form_submission_sets_pace_for_next_run() {
        let mut state = demo_state();
        DemoCoordinator::handle_interaction(&mut state, PanelInteraction::SubmitScaleForm, ms(0));
        assert_eq!(state.pacing.animation_duration(), ms(1150));

        DemoCoordinator::handle_interaction(&mut state, PanelInteraction::TriggerAnimation, ms(100));
        assert!(state.board.has_class("box", "animate"));
        assert_eq!(state.timers.next_deadline(), Some(ms(1250)));

        DemoCoordinator::tick(&mut state, ms(1250));
        assert!(!state.board.has_class("box", "animate"));
    }

    #[test]
    fn test_failed_submission_keeps_pace() {
        let mut state = demo_state();
        state.form.fields_mut().in_min = "10".to_string();
        DemoCoordinator::handle_interaction(&mut state, PanelInteraction::SubmitScaleForm, ms(0));

        assert_eq!(state.pacing.animation_duration(), ms(600));
        let outcome = state.form.last_outcome().unwrap();
        assert!(outcome.text().starts_with("Error: "));
    }

    #[test]
    fn test_detached_element_ignores_interactions() {
        let mut state = demo_state();
        DemoCoordinator::handle_interaction(
            &mut state,
            PanelInteraction::ElementAttachmentChanged { element: "box".to_string(), attached: false },
            ms(0),
        );
        DemoCoordinator::handle_interaction(&mut state, PanelInteraction::TriggerAnimation, ms(0));

        assert_eq!(state.timers.pending_count(), 0);
        assert!(state.pacing.last_run().is_none());
    }

    #[test]
    fn test_replace_policy_extends_run() {
        let mut state = demo_state();
        DemoCoordinator::handle_interaction(
            &mut state,
            PanelInteraction::RetriggerPolicyChanged(RetriggerPolicy::Replace),
            ms(0),
        );
        DemoCoordinator::handle_interaction(&mut state, PanelInteraction::TriggerAnimation, ms(0));
        DemoCoordinator::handle_interaction(&mut state, PanelInteraction::TriggerAnimation, ms(400));

        assert_eq!(DemoCoordinator::tick(&mut state, ms(600)), 0);
        assert!(state.board.has_class("box", "animate"));
        assert_eq!(DemoCoordinator::tick(&mut state, ms(1000)), 1);
    }

    #[test]
    fn test_repaint_delay() {
        let mut state = demo_state();
        assert_eq!(DemoCoordinator::next_repaint_delay(&state, ms(0)), None);

        DemoCoordinator::handle_interaction(&mut state, PanelInteraction::StartLoader, ms(0));
        assert_eq!(DemoCoordinator::next_repaint_delay(&state, ms(0)), Some(ANIMATION_FRAME));

        DemoCoordinator::handle_interaction(&mut state, PanelInteraction::StopLoader, ms(0));
        state.timers.schedule_removal("card", "flipped", ms(500), ms(0));
        assert_eq!(DemoCoordinator::next_repaint_delay(&state, ms(200)), Some(ms(300)));
    }

    #[test]
    fn test_modal_open_close() {
        let mut state = demo_state();
        DemoCoordinator::handle_interaction(&mut state, PanelInteraction::OpenModal, ms(0));
        assert!(state.board.has_class("modal", "open"));
        DemoCoordinator::handle_interaction(&mut state, PanelInteraction::CloseModal, ms(0));
        assert!(!state.board.has_class("modal", "open"));
    }
}
