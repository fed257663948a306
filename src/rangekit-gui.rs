//! rangekit demo GUI
//!
//! An interactive surface for the range mapper built with egui:
//! - Animated box whose marker class is removed by a cancellable timer
//! - Flip card, loader and modal driven by marker class toggles
//! - Scale form that maps a value between ranges and derives the animation pace

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//!
//! The binary is split into:
//! - `app/` - Application state and coordination
//! - `state/` - Form and pacing state
//! - `presentation/` - Mapping marker state to visuals
//! - `ui/` - Panel rendering
//! - `logging` - Tracing subscriber setup

use eframe::egui;
use std::path::PathBuf;

mod app;
mod logging;
mod presentation;
mod state;
mod ui;

use app::{AppState, DemoCoordinator, SettingsCoordinator};
use rangekit::DemoConfig;
use ui::panel_manager::PanelManager;

/// Loads the config, then launches the demo window.
///
/// The first command-line argument, if any, is a config file path.
fn main() -> eframe::Result {
    logging::init_logging("info");

    let config_path = std::env::args().nth(1).map(PathBuf::from);

    // A broken config should not keep the demo from starting
    let (config, startup_error) = match DemoConfig::load_or_default(config_path.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::error!("{:#}", err);
            (DemoConfig::default(), Some(format!("Config error: {:#}", err)))
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_title("rangekit"),
        ..Default::default()
    };

    eframe::run_native(
        "rangekit",
        options,
        Box::new(move |cc| Ok(Box::new(RangekitApp::new(cc, config, startup_error)))),
    )
}

/// The demo application.
///
/// Rendering goes through `PanelManager`, which reports what the user did as
/// a `PanelInteraction`; `DemoCoordinator` applies it to the state.
struct RangekitApp {
    state: AppState,
}

impl RangekitApp {
    /// Creates the app, restoring the last session's preferences from storage.
    fn new(cc: &eframe::CreationContext, config: DemoConfig, startup_error: Option<String>) -> Self {
        let preferences = SettingsCoordinator::load_preferences(cc.storage, &config);

        let mut state = AppState::new(config, preferences);
        state.error_message = startup_error;

        Self { state }
    }
}

impl eframe::App for RangekitApp {
    /// Saves the form fields and retrigger policy on shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_preferences(storage, &self.state.preferences());
    }

    /// Fires due timers, renders the panels, then applies the interaction.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = self.state.now();
        DemoCoordinator::tick(&mut self.state, now);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, now) {
            DemoCoordinator::handle_interaction(&mut self.state, interaction, now);
        }

        // Keep frames coming while something is animating or pending
        if let Some(delay) = DemoCoordinator::next_repaint_delay(&self.state, now) {
            ctx.request_repaint_after(delay);
        }
    }
}
