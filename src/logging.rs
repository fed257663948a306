//! Tracing subscriber setup for the demo binary.

use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber.
///
/// `level` is the default filter; `RUST_LOG` overrides it when set.
pub fn init_logging(level: &str) {
    let default = format!("{level},rangekit={level},eframe=warn,egui_glow=warn,winit=warn");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .init();
}
