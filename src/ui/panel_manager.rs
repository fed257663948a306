//! Panel orchestration and layout management.
//!
//! Lays out the header, the demo panels, the scale form, the modal and the
//! status bar, and funnels whatever the user did into one `PanelInteraction`.

use std::time::Duration;

use rangekit::RetriggerPolicy;

use crate::app::AppState;
use crate::ui::{demo_panels, header, modal_window, scale_form_panel, status_bar};

/// Result of panel interactions that need to be handled by the demo coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelInteraction {
    /// Play the animation once
    TriggerAnimation,
    /// Flip the card to its other face
    FlipCard,
    /// Show the loader
    StartLoader,
    /// Hide the loader
    StopLoader,
    /// Open the modal
    OpenModal,
    /// Close the modal
    CloseModal,
    /// Map the scale form's value
    SubmitScaleForm,
    /// User picked a different retrigger policy
    RetriggerPolicyChanged(RetriggerPolicy),
    /// An element was attached to or detached from the surface
    ElementAttachmentChanged {
        element: String,
        attached: bool,
    },
    /// Drop every pending timed removal
    CancelPendingRemovals,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from `eframe::App::update()`. At most one interaction is
    /// reported per frame; a later panel wins over an earlier one.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        now: Duration,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(header_interaction);
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, now);
        });

        egui::SidePanel::right("scale_form_panel")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.heading("Scale Value");
                ui.separator();

                if let Some(form_interaction) = scale_form_panel::render_scale_form(ui, state) {
                    interaction = Some(form_interaction);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(demo_interaction) = demo_panels::render_demo_panels(ui, state, now) {
                interaction = Some(demo_interaction);
            }
        });

        // Modal floats above everything else
        if let Some(modal_interaction) = modal_window::render_modal(ctx, state) {
            interaction = Some(modal_interaction);
        }

        interaction
    }
}
