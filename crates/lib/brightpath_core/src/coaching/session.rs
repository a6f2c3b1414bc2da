//! Per-session coaching state: hold debouncing and running statistics.

use std::time::{Duration, Instant};

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Deserializer, Serialize};

/// How long a pose must be held before the task counts as done.
pub const HOLD_DURATION: Duration = Duration::from_millis(500);

/// Accuracy gained per completed task.
pub const ACCURACY_STEP: u8 = 5;

const ENCOURAGEMENTS: [&str; 7] = [
    "Excellent work! You did it perfectly!",
    "Amazing! You're getting so good at this!",
    "Wonderful! That was fantastic!",
    "Great job! You nailed it!",
    "Perfect! You're a superstar!",
    "Outstanding! Keep it up!",
    "Fantastic! You're improving every day!",
];

/// Said after a failed attempt.
pub const RETRY_PROMPT: &str = "That's okay! Let's try again. Take your time, you can do this!";

/// Picks a random encouragement phrase.
pub fn encouragement<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    ENCOURAGEMENTS.choose(rng).copied().unwrap_or(ENCOURAGEMENTS[0])
}

/// Requires a check to pass on every frame for [`HOLD_DURATION`].
///
/// Feed it one observation per analyzed frame. A failing frame resets the
/// hold; the tracker reports completion once, then must be reset.
#[derive(Debug, Clone)]
pub struct HoldTracker {
    hold: Duration,
    since: Option<Instant>,
    completed: bool,
}

impl Default for HoldTracker {
    fn default() -> Self {
        Self::new(HOLD_DURATION)
    }
}

impl HoldTracker {
    pub fn new(hold: Duration) -> Self {
        Self {
            hold,
            since: None,
            completed: false,
        }
    }

    /// Records one frame. Returns `true` on the frame that completes the hold.
    pub fn observe(&mut self, satisfied: bool, now: Instant) -> bool {
        if self.completed {
            return false;
        }
        if !satisfied {
            self.since = None;
            return false;
        }
        let since = *self.since.get_or_insert(now);
        if now.saturating_duration_since(since) >= self.hold {
            self.completed = true;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.since = None;
        self.completed = false;
    }

    pub fn is_holding(&self) -> bool {
        self.since.is_some() && !self.completed
    }
}

/// Running totals for one coaching session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionStats {
    pub tasks_completed: u32,
    pub tasks_failed: u32,
    pub encouragements: u32,
    /// Percentage, capped at 100.
    #[serde(deserialize_with = "capped_percent")]
    pub accuracy: u8,
}

fn capped_percent<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    u8::deserialize(deserializer).map(|v| v.min(100))
}

impl SessionStats {
    pub fn record_success(&mut self) {
        self.tasks_completed = self.tasks_completed.saturating_add(1);
        self.encouragements = self.encouragements.saturating_add(1);
        self.accuracy = self.accuracy.saturating_add(ACCURACY_STEP).min(100);
    }

    pub fn record_failure(&mut self) {
        self.tasks_failed = self.tasks_failed.saturating_add(1);
    }
}
