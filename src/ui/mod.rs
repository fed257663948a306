//! UI panel rendering subsystem
//!
//! - Header panel (retrigger policy, element attachment, errors)
//! - Demo panels (animated box, flip card, loader, modal trigger)
//! - Scale form panel
//! - Modal window
//! - Status bar (timer queue, pace)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod demo_panels;
pub mod scale_form_panel;
pub mod modal_window;
pub mod status_bar;
pub mod panel_manager;
