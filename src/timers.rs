//! Scheduled marker class removals.
//!
//! Each scheduled removal gets a [`TimerHandle`] so callers can cancel it.
//! What happens when the same class is scheduled again before the pending
//! removal fires is decided by the [`RetriggerPolicy`].
//!
//! The queue never reads a clock. Callers pass `now` as a [`Duration`] since
//! an origin of their choosing and call [`MarkerTimers::fire_due`] regularly
//! (once per frame in the GUI).

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::surface::MarkerSurface;

/// Opaque id of a scheduled removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Behavior when a removal is scheduled for an element/class pair that
/// already has one pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetriggerPolicy {
    /// Keep the pending removal and add an independent one
    #[default]
    Stack,
    /// Cancel the pending removal before scheduling the new one
    Replace,
}

impl RetriggerPolicy {
    pub const ALL: [RetriggerPolicy; 2] = [RetriggerPolicy::Stack, RetriggerPolicy::Replace];

    /// Human-readable label for selectors.
    pub fn label(&self) -> &'static str {
        match self {
            RetriggerPolicy::Stack => "Stack",
            RetriggerPolicy::Replace => "Replace",
        }
    }
}

#[derive(Debug, Clone)]
struct PendingRemoval {
    handle: TimerHandle,
    deadline: Duration,
    element: String,
    class: String,
}

/// Queue of pending class removals.
#[derive(Debug, Clone, Default)]
pub struct MarkerTimers {
    policy: RetriggerPolicy,
    /// Kept sorted by (deadline, handle)
    pending: Vec<PendingRemoval>,
    next_id: u64,
}

impl MarkerTimers {
    /// Creates an empty queue with the given retrigger policy.
    pub fn new(policy: RetriggerPolicy) -> Self {
        Self {
            policy,
            pending: Vec::new(),
            next_id: 0,
        }
    }

    pub fn policy(&self) -> RetriggerPolicy {
        self.policy
    }

    /// Changes the retrigger policy. Already pending removals are untouched.
    pub fn set_policy(&mut self, policy: RetriggerPolicy) {
        self.policy = policy;
    }

    /// Schedules removal of `class` from `element` at `now + delay`.
    pub fn schedule_removal(
        &mut self,
        element: &str,
        class: &str,
        delay: Duration,
        now: Duration,
    ) -> TimerHandle {
        if self.policy == RetriggerPolicy::Replace {
            let before = self.pending.len();
            self.pending.retain(|p| p.element != element || p.class != class);
            let replaced = before - self.pending.len();
            if replaced > 0 {
                tracing::debug!(element, class, replaced, "replaced pending removal");
            }
        }

        let handle = TimerHandle(self.next_id);
        self.next_id += 1;

        let removal = PendingRemoval {
            handle,
            deadline: now.saturating_add(delay),
            element: element.to_string(),
            class: class.to_string(),
        };
        let index = self
            .pending
            .partition_point(|p| (p.deadline, p.handle) < (removal.deadline, removal.handle));
        self.pending.insert(index, removal);

        handle
    }

    /// Cancels a pending removal. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.pending.iter().position(|p| p.handle == handle) {
            Some(index) => {
                self.pending.remove(index);
                true
            }
            None => false,
        }
    }

    /// Cancels every pending removal.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|p| p.handle == handle)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns the earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.first().map(|p| p.deadline)
    }

    /// Applies every removal whose deadline is at or before `now`.
    ///
    /// Removals run in deadline order. Returns how many fired; a removal
    /// targeting an absent element still counts as fired.
    pub fn fire_due<S: MarkerSurface + ?Sized>(&mut self, now: Duration, surface: &mut S) -> usize {
        let due = self.pending.partition_point(|p| p.deadline <= now);
        for removal in self.pending.drain(..due) {
            surface.remove_class(&removal.element, &removal.class);
            tracing::trace!(element = %removal.element, class = %removal.class, "marker removal fired");
        }
        due
    }
}
