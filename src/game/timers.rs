//! Cosmetic timers
//!
//! Timers are deadlines checked on each tick of the UI loop. They only drive
//! presentation (row shake, staggered reveal) and never touch [`GameState`].
//!
//! [`GameState`]: super::GameState

use crate::core::WORD_LENGTH;
use std::time::{Duration, Instant};

/// How long a rejected row shakes
pub const SHAKE_DURATION: Duration = Duration::from_millis(820);

/// Delay between revealing consecutive cells of a scored row
pub const REVEAL_STEP: Duration = Duration::from_millis(250);

/// A cancelable one-shot timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CosmeticTimer {
    started: Option<Instant>,
    duration: Duration,
}

impl CosmeticTimer {
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            started: None,
            duration,
        }
    }

    /// Start (or restart) the timer at `now`
    pub fn schedule(&mut self, now: Instant) {
        self.started = Some(now);
    }

    pub fn cancel(&mut self) {
        self.started = None;
    }

    /// Whether the timer is pending at `now`
    #[must_use]
    pub fn is_active(&self, now: Instant) -> bool {
        self.elapsed(now).is_some_and(|elapsed| elapsed < self.duration)
    }

    /// Time since the timer was scheduled, if it is scheduled
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        self.started
            .map(|started| now.saturating_duration_since(started))
    }

    /// Clear the timer if its deadline has passed
    ///
    /// Returns `true` when this call expired it.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.started.is_some() && !self.is_active(now) {
            self.started = None;
            true
        } else {
            false
        }
    }
}

/// Staggered reveal of one scored row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTimer {
    timer: CosmeticTimer,
    row: usize,
}

impl Default for RevealTimer {
    fn default() -> Self {
        Self {
            timer: CosmeticTimer::new(REVEAL_STEP.saturating_mul(WORD_LENGTH as u32)),
            row: 0,
        }
    }
}

impl RevealTimer {
    pub fn schedule(&mut self, row: usize, now: Instant) {
        self.row = row;
        self.timer.schedule(now);
    }

    pub fn cancel(&mut self) {
        self.timer.cancel();
    }

    pub fn expire(&mut self, now: Instant) -> bool {
        self.timer.expire(now)
    }

    #[must_use]
    pub fn is_active(&self, now: Instant) -> bool {
        self.timer.is_active(now)
    }

    /// How many cells of `row` should show their colour at `now`
    ///
    /// Cell `i` is revealed `i * REVEAL_STEP` after scoring; rows that are not
    /// being revealed show every cell.
    #[must_use]
    pub fn revealed_cells(&self, row: usize, now: Instant) -> usize {
        if row != self.row || !self.timer.is_active(now) {
            return WORD_LENGTH;
        }
        let elapsed = self.timer.elapsed(now).unwrap_or_default();
        let steps = elapsed.as_millis() / REVEAL_STEP.as_millis();
        (steps as usize + 1).min(WORD_LENGTH)
    }
}
