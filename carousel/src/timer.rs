//! Timer seam between the engine and whatever clock drives it.
//!
//! The engine hands out a fresh [`TimerId`] each time it starts autoplay and
//! cancels the previous one first. A scheduler only has to deliver ticks for
//! ids it was asked to start; the engine drops ticks for any other id.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::collections::BTreeMap;

/// Identity of one scheduled autoplay timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Recurring timer backend.
pub trait Scheduler {
    /// Start a timer that reports `id` every `interval_ms` until cancelled.
    fn start(&mut self, id: TimerId, interval_ms: u32);

    /// Cancel the timer started under `id`. Unknown ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

/// Virtual-clock scheduler for hosts without a real event loop.
///
/// Nothing fires on its own: the owner moves the clock forward and collects
/// due ids with [`ManualScheduler::pop_due`], or lets
/// [`crate::Carousel::advance_by`] do both.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    timers: BTreeMap<TimerId, ManualTimer>,
    started: usize,
}

#[derive(Debug, Clone, Copy)]
struct ManualTimer {
    interval_ms: u64,
    due_ms: u64,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Timers currently armed.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.timers.len()
    }

    /// Timers started over the scheduler's lifetime, cancelled or not.
    #[must_use]
    pub fn started_count(&self) -> usize {
        self.started
    }

    /// Earliest due time among armed timers.
    #[must_use]
    pub fn next_due_ms(&self) -> Option<u64> {
        self.timers.values().map(|t| t.due_ms).min()
    }

    /// Take the earliest timer due at or before `until_ms`.
    ///
    /// The clock jumps to that timer's due time and the timer is re-armed one
    /// interval later, the way a browser `setInterval` keeps firing.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<TimerId> {
        let (id, due_ms) = self
            .timers
            .iter()
            .filter(|(_, t)| t.due_ms <= until_ms)
            .map(|(id, t)| (*id, t.due_ms))
            .min_by_key(|(id, due)| (*due, *id))?;
        self.now_ms = self.now_ms.max(due_ms);
        if let Some(timer) = self.timers.get_mut(&id) {
            timer.due_ms = due_ms + timer.interval_ms;
        }
        Some(id)
    }

    /// Move the clock forward. The clock never runs backwards.
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}

impl Scheduler for ManualScheduler {
    fn start(&mut self, id: TimerId, interval_ms: u32) {
        let interval_ms = u64::from(interval_ms.max(1));
        self.timers.insert(id, ManualTimer { interval_ms, due_ms: self.now_ms + interval_ms });
        self.started += 1;
    }

    fn cancel(&mut self, id: TimerId) {
        self.timers.remove(&id);
    }
}
