//! Centralized application state for the demo GUI.
//!
//! Composes the marker surface, the timer queue and the focused state
//! components. The config is owned here once and lent out by reference.

use std::time::{Duration, Instant};

use rangekit::{DemoConfig, MarkerBoard, MarkerTimers};

use crate::app::settings_coordinator::Preferences;
use crate::state::{FormState, PacingState};

/// Main application state.
pub struct AppState {
    /// Settings loaded at startup
    pub config: DemoConfig,

    /// Elements and their marker classes
    pub board: MarkerBoard,

    /// Pending timed class removals
    pub timers: MarkerTimers,

    /// Scale form text and last outcome
    pub form: FormState,

    /// Animation duration and current run
    pub pacing: PacingState,

    /// Current error message to display (if any)
    pub error_message: Option<String>,

    /// Origin for the timer clock
    started: Instant,
}

impl AppState {
    /// Creates state with every configured element present.
    pub fn new(config: DemoConfig, preferences: Preferences) -> Self {
        let board = MarkerBoard::with_elements(config.elements.all());
        let pacing = PacingState::new(config.animation_duration());

        Self {
            board,
            timers: MarkerTimers::new(preferences.retrigger),
            form: FormState::with_fields(preferences.form),
            pacing,
            config,
            error_message: None,
            started: Instant::now(),
        }
    }

    /// Time elapsed since startup, the clock the timer queue runs on.
    pub fn now(&self) -> Duration {
        self.started.elapsed()
    }

    /// Snapshot of what gets persisted between sessions.
    pub fn preferences(&self) -> Preferences {
        Preferences {
            form: self.form.fields().clone(),
            retrigger: self.timers.policy(),
        }
    }
}
