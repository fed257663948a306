//! Animation pacing state.
//!
//! Tracks the duration the next animation run uses and when the current run
//! started, so the animated box can be drawn at the right position.

use std::time::Duration;

/// State related to animation timing.
#[derive(Debug, Clone)]
pub struct PacingState {
    /// Duration used by the next animation run
    animation_duration: Duration,
    /// Start time and duration of the most recent run
    last_run: Option<(Duration, Duration)>,
}

impl PacingState {
    /// Creates pacing state with the configured default duration.
    pub fn new(animation_duration: Duration) -> Self {
        Self {
            animation_duration,
            last_run: None,
        }
    }

    pub fn animation_duration(&self) -> Duration {
        self.animation_duration
    }

    /// Sets the duration for subsequent runs. Runs in flight keep theirs.
    pub fn set_animation_duration(&mut self, duration: Duration) {
        self.animation_duration = duration;
    }

    /// Records that a run started at `now` with the current duration.
    pub fn start_run(&mut self, now: Duration) {
        self.last_run = Some((now, self.animation_duration));
    }

    /// Returns (start, duration) of the most recent run.
    pub fn last_run(&self) -> Option<(Duration, Duration)> {
        self.last_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_keeps_its_duration() {
        let mut pacing = PacingState::new(Duration::from_millis(600));
        pacing.start_run(Duration::from_millis(10));
        pacing.set_animation_duration(Duration::from_millis(1150));

        assert_eq!(pacing.last_run(), Some((Duration::from_millis(10), Duration::from_millis(600))));
        assert_eq!(pacing.animation_duration(), Duration::from_millis(1150));
    }
}
