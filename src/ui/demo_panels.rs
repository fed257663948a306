//! Demo element panels
//!
//! Renders the animated box, the flip card and the loader. Each one reads
//! its marker classes from the board; an element that is detached from the
//! board is drawn greyed out and its buttons do nothing.

use eframe::egui;
use egui::{Color32, RichText, Sense, Stroke, Vec2};
use std::time::Duration;

use rangekit::MarkerSurface;

use crate::app::AppState;
use crate::presentation::marker_style::{box_fill, box_offset, card_face, BOX_TRAVEL};
use crate::ui::panel_manager::PanelInteraction;

const BOX_SIZE: f32 = 48.0;
const CARD_SIZE: Vec2 = Vec2::new(180.0, 110.0);

/// Renders the three demo element panels stacked vertically
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `now` - Current time on the timer clock
///
/// # Returns
/// * `Option<PanelInteraction>` - User interaction result
pub fn render_demo_panels(ui: &mut egui::Ui, state: &AppState, now: Duration) -> Option<PanelInteraction> {
    let mut interaction = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.heading("Animation");
        if let Some(i) = render_animation(ui, state, now) {
            interaction = Some(i);
        }
        ui.separator();

        ui.heading("Flip Card");
        if let Some(i) = render_card(ui, state) {
            interaction = Some(i);
        }
        ui.separator();

        ui.heading("Loader");
        if let Some(i) = render_loader(ui, state) {
            interaction = Some(i);
        }
        ui.separator();

        ui.heading("Modal");
        if ui.button("Open modal").clicked() {
            interaction = Some(PanelInteraction::OpenModal);
        }
    });

    interaction
}

fn render_animation(ui: &mut egui::Ui, state: &AppState, now: Duration) -> Option<PanelInteraction> {
    let elements = &state.config.elements;
    let attached = state.board.has_element(&elements.animated_box);
    let animating = state.board.has_class(&elements.animated_box, &state.config.classes.animate);

    let mut interaction = None;
    ui.horizontal(|ui| {
        if ui.button("▶ Play once").clicked() {
            interaction = Some(PanelInteraction::TriggerAnimation);
        }
        ui.label(format!(
            "Duration: {} ms",
            state.pacing.animation_duration().as_millis()
        ));
    });

    let (rect, _) = ui.allocate_exact_size(Vec2::new(BOX_TRAVEL + BOX_SIZE, BOX_SIZE), Sense::hover());
    let offset = match state.pacing.last_run() {
        Some(run) if animating => box_offset(run, now, BOX_TRAVEL),
        _ => 0.0,
    };
    let box_rect = egui::Rect::from_min_size(rect.min + Vec2::new(offset, 0.0), Vec2::splat(BOX_SIZE));

    let painter = ui.painter();
    if attached {
        painter.rect_filled(box_rect, 6.0, box_fill(animating));
    } else {
        painter.rect_stroke(box_rect, 6.0, Stroke::new(1.0, Color32::DARK_GRAY), egui::StrokeKind::Inside);
    }

    interaction
}

fn render_card(ui: &mut egui::Ui, state: &AppState) -> Option<PanelInteraction> {
    let elements = &state.config.elements;
    let attached = state.board.has_element(&elements.card);
    let flipped = state.board.has_class(&elements.card, &state.config.classes.flipped);
    let (label, fill) = card_face(flipped);

    let (rect, response) = ui.allocate_exact_size(CARD_SIZE, Sense::click());
    let painter = ui.painter();
    if attached {
        painter.rect_filled(rect, 8.0, fill);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(20.0),
            Color32::WHITE,
        );
    } else {
        painter.rect_stroke(rect, 8.0, Stroke::new(1.0, Color32::DARK_GRAY), egui::StrokeKind::Inside);
    }

    if response.on_hover_text("Click to flip").clicked() {
        Some(PanelInteraction::FlipCard)
    } else {
        None
    }
}

fn render_loader(ui: &mut egui::Ui, state: &AppState) -> Option<PanelInteraction> {
    let elements = &state.config.elements;
    let active = state.board.has_class(&elements.loader, &state.config.classes.loading);

    let mut interaction = None;
    ui.horizontal(|ui| {
        if ui.button("Start").clicked() {
            interaction = Some(PanelInteraction::StartLoader);
        }
        if ui.button("Stop").clicked() {
            interaction = Some(PanelInteraction::StopLoader);
        }

        if active {
            ui.add(egui::Spinner::new());
            ui.label("Loading…");
        } else if !state.board.has_element(&elements.loader) {
            ui.label(RichText::new("detached").weak());
        }
    });

    interaction
}
