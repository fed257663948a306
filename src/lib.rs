pub mod mapper;
pub mod scaling;
pub mod surface;
pub mod timers;
pub mod markers;
pub mod config;

// Export range mapping
pub use mapper::{map_range, InvalidRangeError, RangeMapper};

// Export form pipeline
pub use scaling::{derive_duration_ms, format_scaled, parse_field, ScaleForm, ScaleOutcome};

// Export marker surface and timers
pub use surface::{MarkerBoard, MarkerSurface};
pub use timers::{MarkerTimers, RetriggerPolicy, TimerHandle};

// Export configuration
pub use config::{ClassNames, DemoConfig, ElementIds};
