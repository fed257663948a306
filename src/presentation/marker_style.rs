//! Visual mapping for marker state.
//!
//! This module provides functions for:
//! - Positioning the animated box along its travel during a run
//! - Choosing the flip card's face

use egui::Color32;
use std::f64::consts::PI;
use std::time::Duration;

use rangekit::map_range;

/// Horizontal distance the box travels at the peak of a run.
pub const BOX_TRAVEL: f32 = 160.0;

/// Returns the box's horizontal offset for a run at `now`.
///
/// The run's time span is mapped onto `[0, 1]` and the box moves out and
/// back along a half sine, so it rests at both ends. Outside the run the
/// progress clamps to an end and the offset is 0.
///
/// # Arguments
/// * `run` - Start and duration of the run
/// * `now` - Current time on the same clock as `run`
/// * `travel` - Peak offset in points
pub fn box_offset(run: (Duration, Duration), now: Duration, travel: f32) -> f32 {
    let (start, duration) = run;
    let start_s = start.as_secs_f64();
    let end_s = (start + duration).as_secs_f64();

    match map_range(now.as_secs_f64(), start_s, end_s, 0.0, 1.0) {
        Ok(progress) => ((progress * PI).sin() as f32) * travel,
        // Zero-length run
        Err(_) => 0.0,
    }
}

/// Label and fill for the flip card.
pub fn card_face(flipped: bool) -> (&'static str, Color32) {
    if flipped {
        ("Back", Color32::from_rgb(0x8e, 0x44, 0xad))
    } else {
        ("Front", Color32::from_rgb(0x29, 0x80, 0xb9))
    }
}

/// Fill for the animated box, brighter while a run is in progress.
pub fn box_fill(animating: bool) -> Color32 {
    if animating {
        Color32::from_rgb(0xe6, 0x7e, 0x22)
    } else {
        Color32::from_rgb(0x7f, 0x8c, 0x8d)
    }
}
