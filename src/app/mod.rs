//! Application-level modules for the demo GUI.
//!
//! This module contains the demo coordinator, preference persistence and
//! centralized state.

mod app_state;
mod demo_coordinator;
pub mod settings_coordinator;

pub use app_state::AppState;
pub use demo_coordinator::DemoCoordinator;
pub use settings_coordinator::SettingsCoordinator;
