//! Header panel UI rendering
//!
//! Handles the top bar with the retrigger policy selector, element
//! attachment switches and the error display.

use eframe::egui;
use egui::Color32;
use rangekit::{MarkerSurface, RetriggerPolicy};

use crate::app::AppState;
use crate::ui::panel_manager::PanelInteraction;

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
///
/// # Returns
/// * `Option<PanelInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &AppState) -> Option<PanelInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.strong("rangekit");
        ui.separator();

        // Retrigger policy selector
        ui.label("Retrigger:");
        let current = state.timers.policy();
        let mut selected = current;
        egui::ComboBox::from_id_salt("retrigger_selector")
            .selected_text(selected.label())
            .show_ui(ui, |ui| {
                for policy in RetriggerPolicy::ALL {
                    ui.selectable_value(&mut selected, policy, policy.label());
                }
            })
            .response
            .on_hover_text("Stack keeps earlier removals pending, Replace cancels them");

        if selected != current {
            interaction = Some(PanelInteraction::RetriggerPolicyChanged(selected));
        }

        if ui.button("⏹ Cancel timers").clicked() {
            interaction = Some(PanelInteraction::CancelPendingRemovals);
        }

        ui.separator();

        // Detaching an element shows the absent-element no-op path
        ui.label("Elements:");
        for element in state.config.elements.all() {
            let mut attached = state.board.has_element(element);
            if ui.checkbox(&mut attached, element).changed() {
                interaction = Some(PanelInteraction::ElementAttachmentChanged {
                    element: element.to_string(),
                    attached,
                });
            }
        }
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
