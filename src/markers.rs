//! Marker class operations.
//!
//! Two primitives, [`run_once`] and [`toggle`], and the demo actions built
//! on them. All functions are stateless: the surface, the timer queue and
//! the config are passed in by the caller.

use std::time::Duration;

use crate::config::DemoConfig;
use crate::surface::MarkerSurface;
use crate::timers::{MarkerTimers, TimerHandle};

/// Adds `class` to `element` and schedules its removal after `duration`.
///
/// Returns the removal's handle, or `None` if the element is absent, in
/// which case nothing is added or scheduled.
pub fn run_once<S: MarkerSurface + ?Sized>(
    surface: &mut S,
    timers: &mut MarkerTimers,
    element: &str,
    class: &str,
    duration: Duration,
    now: Duration,
) -> Option<TimerHandle> {
    if !surface.add_class(element, class) {
        return None;
    }
    Some(timers.schedule_removal(element, class, duration, now))
}

/// Flips `class` on `element` and returns whether it is now present.
///
/// `None` if the element is absent.
pub fn toggle<S: MarkerSurface + ?Sized>(surface: &mut S, element: &str, class: &str) -> Option<bool> {
    surface.toggle_class(element, class)
}

/// Plays the animation on the animated box for `duration`.
pub fn trigger_animation<S: MarkerSurface + ?Sized>(
    surface: &mut S,
    timers: &mut MarkerTimers,
    config: &DemoConfig,
    duration: Duration,
    now: Duration,
) -> Option<TimerHandle> {
    run_once(
        surface,
        timers,
        &config.elements.animated_box,
        &config.classes.animate,
        duration,
        now,
    )
}

/// Flips the card. Returns whether it now shows its back side.
pub fn flip_card<S: MarkerSurface + ?Sized>(surface: &mut S, config: &DemoConfig) -> Option<bool> {
    toggle(surface, &config.elements.card, &config.classes.flipped)
}

/// Shows the loader. Returns false if the loader element is absent.
pub fn start_loader<S: MarkerSurface + ?Sized>(surface: &mut S, config: &DemoConfig) -> bool {
    surface.add_class(&config.elements.loader, &config.classes.loading)
}

/// Hides the loader. Returns false if the loader element is absent.
pub fn stop_loader<S: MarkerSurface + ?Sized>(surface: &mut S, config: &DemoConfig) -> bool {
    surface.remove_class(&config.elements.loader, &config.classes.loading)
}

/// Opens the modal. Returns false if the modal element is absent.
pub fn open_modal<S: MarkerSurface + ?Sized>(surface: &mut S, config: &DemoConfig) -> bool {
    surface.add_class(&config.elements.modal, &config.classes.open)
}

/// Closes the modal. Returns false if the modal element is absent.
pub fn close_modal<S: MarkerSurface + ?Sized>(surface: &mut S, config: &DemoConfig) -> bool {
    surface.remove_class(&config.elements.modal, &config.classes.open)
}
