//! Modal window rendering
//!
//! The modal is shown while its element carries the open class.

use eframe::egui;
use rangekit::MarkerSurface;

use crate::app::AppState;
use crate::ui::panel_manager::PanelInteraction;

/// Renders the modal if it is open
///
/// # Returns
/// * `Option<PanelInteraction>` - `CloseModal` when the user dismisses it
pub fn render_modal(ctx: &egui::Context, state: &AppState) -> Option<PanelInteraction> {
    let open = state
        .board
        .has_class(&state.config.elements.modal, &state.config.classes.open);
    if !open {
        return None;
    }

    let mut interaction = None;
    egui::Window::new("Modal")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("This panel is open because its element carries the open marker class.");
            ui.add_space(8.0);
            if ui.button("Close").clicked() {
                interaction = Some(PanelInteraction::CloseModal);
            }
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        interaction = Some(PanelInteraction::CloseModal);
    }

    interaction
}
