//! Scale form UI rendering
//!
//! Five numeric fields, a submit button, and the outcome of the last
//! submission. Enter in any field submits as well.

use eframe::egui;
use egui::{Color32, RichText};
use rangekit::{RangeMapper, ScaleOutcome};

use crate::app::AppState;
use crate::ui::panel_manager::PanelInteraction;

/// Renders the scale form
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state (the fields are edited in place)
///
/// # Returns
/// * `Option<PanelInteraction>` - `SubmitScaleForm` when the user submits
pub fn render_scale_form(ui: &mut egui::Ui, state: &mut AppState) -> Option<PanelInteraction> {
    let mut submitted = false;

    egui::Grid::new("scale_form_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            let fields = state.form.fields_mut();
            let rows: [(&str, &mut String); 5] = [
                ("Value", &mut fields.value),
                ("In min", &mut fields.in_min),
                ("In max", &mut fields.in_max),
                ("Out min", &mut fields.out_min),
                ("Out max", &mut fields.out_max),
            ];

            for (label, text) in rows {
                ui.label(label);
                let response = ui.add(egui::TextEdit::singleline(text).desired_width(120.0));
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submitted = true;
                }
                ui.end_row();
            }
        });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button("Scale").clicked() {
            submitted = true;
        }

        // Live preview while the source interval is valid
        let (value, in_min, in_max, out_min, out_max) = state.form.fields().parse();
        if let Ok(mapper) = RangeMapper::new(in_min, in_max, out_min, out_max) {
            ui.weak(format!("preview {:.3}", mapper.map(value)));
        }
    });

    if let Some(outcome) = state.form.last_outcome() {
        ui.add_space(6.0);
        match outcome {
            ScaleOutcome::Scaled { text, duration_ms, .. } => {
                ui.label(RichText::new(text).strong());
                let pace = duration_ms
                    .map(|ms| format!("Animation pace: {} ms", ms))
                    .unwrap_or_else(|| "Animation pace: unchanged".to_string());
                ui.label(pace);
            }
            ScaleOutcome::Failed { text } => {
                ui.colored_label(Color32::RED, text);
            }
        }
    }

    submitted.then_some(PanelInteraction::SubmitScaleForm)
}
