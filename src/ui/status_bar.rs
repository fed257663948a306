//! Status bar UI rendering
//!
//! Shows the timer queue and the current animation pace.

use eframe::egui;
use egui::RichText;
use std::time::Duration;

use crate::app::AppState;

/// Renders the status bar at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `now` - Current time on the timer clock
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, now: Duration) {
    ui.horizontal(|ui| {
        let pending = state.timers.pending_count();
        ui.label(RichText::new(format!("Pending removals: {}", pending)).strong());

        if let Some(deadline) = state.timers.next_deadline() {
            let remaining = deadline.saturating_sub(now);
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(format!("Next in {} ms", remaining.as_millis())).strong());
        }

        ui.label(RichText::new("|").strong());
        ui.label(RichText::new(format!("Policy: {}", state.timers.policy().label())).strong());

        ui.label(RichText::new("|").strong());
        ui.label(RichText::new(format!(
            "Pace: {} ms",
            state.pacing.animation_duration().as_millis()
        )).strong());
    });
}
