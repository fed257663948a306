//! State management modules for the demo GUI.
//!
//! This module contains state-only logic (no UI concerns):
//! - Form state (field text, last outcome)
//! - Pacing state (animation duration, current run)

mod form_state;
mod pacing_state;

pub use form_state::FormState;
pub use pacing_state::PacingState;
