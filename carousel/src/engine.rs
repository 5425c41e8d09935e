//! The carousel state machine.
//!
//! STATE
//! =====
//! `index` is always a valid slide index while the carousel has slides. The
//! timer sub-state is `Running` exactly when `timer` holds an id, and that id
//! is the only timer the scheduler has armed for this instance.
//!
//! ORDERING
//! ========
//! Every navigation path updates `index`, then notifies the listener, then
//! cancels and re-arms the timer. A manual action therefore restarts the
//! countdown from a full interval.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::config::{CarouselConfig, LoopPolicy};
use crate::error::CarouselError;
use crate::input::Command;
use crate::timer::{ManualScheduler, Scheduler, TimerId};

/// What moved the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    Manual,
    Autoplay,
}

/// Emitted on every index change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChange {
    pub previous: usize,
    pub current: usize,
    pub cause: ChangeCause,
}

/// Why autoplay is held. Reasons are tracked independently so that, say,
/// the pointer leaving does not resume a carousel that still has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuspendReason {
    Manual,
    Hover,
    Touch,
    Focus,
    Offscreen,
}

impl SuspendReason {
    const fn bit(self) -> u8 {
        match self {
            Self::Manual => 1,
            Self::Hover => 1 << 1,
            Self::Touch => 1 << 2,
            Self::Focus => 1 << 3,
            Self::Offscreen => 1 << 4,
        }
    }
}

/// Point-in-time view of the engine, for renderers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    pub current_index: usize,
    pub autoplay_enabled: bool,
    pub is_suspended: bool,
}

type Listener = Box<dyn FnMut(IndexChange)>;

pub struct Carousel<T, S: Scheduler> {
    slides: Vec<T>,
    config: CarouselConfig,
    index: usize,
    autoplay: bool,
    suspended: u8,
    timer: Option<TimerId>,
    next_timer_id: u64,
    scheduler: S,
    listener: Option<Listener>,
}

impl<T, S: Scheduler> Carousel<T, S> {
    /// Build a carousel over `slides`.
    ///
    /// An empty slide list yields an inert carousel: every operation is a
    /// no-op and no timer is ever armed. A zero interval leaves autoplay off.
    pub fn new(slides: Vec<T>, config: CarouselConfig, scheduler: S) -> Self {
        let mut carousel = Self {
            slides,
            config,
            index: 0,
            autoplay: false,
            suspended: 0,
            timer: None,
            next_timer_id: 0,
            scheduler,
            listener: None,
        };

        if carousel.slides.is_empty() {
            log::warn!("carousel created without slides; it will stay inert");
            return carousel;
        }
        if carousel.config.autoplay {
            if carousel.config.interval_ms == 0 {
                log::warn!("carousel autoplay disabled: interval is 0 ms");
            } else {
                carousel.autoplay = true;
                carousel.sync_timer();
            }
        }
        carousel
    }

    /// Register the renderer. Replaces any previous listener.
    pub fn on_change(&mut self, listener: impl FnMut(IndexChange) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    // --- Navigation ---

    /// Jump to `index`, restarting the autoplay countdown.
    pub fn go_to(&mut self, index: usize) -> Result<Option<IndexChange>, CarouselError> {
        if self.is_inert() {
            return Err(CarouselError::EmptyCollection);
        }
        if index >= self.slides.len() {
            log::debug!("rejecting slide index {index} (len {})", self.slides.len());
            return Err(CarouselError::InvalidIndex { index, len: self.slides.len() });
        }
        let change = self.move_to(index, ChangeCause::Manual);
        self.reset_countdown();
        Ok(change)
    }

    /// Step forward. Wraps or clamps at the last slide per the loop policy.
    pub fn next(&mut self) -> Option<IndexChange> {
        if self.is_inert() {
            return None;
        }
        let last = self.slides.len() - 1;
        let target = match self.config.loop_policy {
            LoopPolicy::Wrap => (self.index + 1) % self.slides.len(),
            LoopPolicy::Clamp => (self.index + 1).min(last),
        };
        let change = self.move_to(target, ChangeCause::Manual);
        self.reset_countdown();
        change
    }

    /// Step back. Wraps or clamps at the first slide per the loop policy.
    pub fn previous(&mut self) -> Option<IndexChange> {
        if self.is_inert() {
            return None;
        }
        let last = self.slides.len() - 1;
        let target = match (self.config.loop_policy, self.index) {
            (LoopPolicy::Wrap, 0) => last,
            (LoopPolicy::Clamp, 0) => 0,
            (_, i) => i - 1,
        };
        let change = self.move_to(target, ChangeCause::Manual);
        self.reset_countdown();
        change
    }

    /// Dispatch a mapped input command.
    pub fn apply(&mut self, command: Command) -> Option<IndexChange> {
        match command {
            Command::Next => self.next(),
            Command::Previous => self.previous(),
            Command::First => self.go_to_quietly(0),
            Command::Last => self.go_to_quietly(self.slides.len().saturating_sub(1)),
            Command::GoTo(index) => self.go_to_quietly(index),
            Command::ToggleAutoplay => {
                self.toggle_autoplay();
                None
            }
        }
    }

    fn go_to_quietly(&mut self, index: usize) -> Option<IndexChange> {
        match self.go_to(index) {
            Ok(change) => change,
            Err(_) => None,
        }
    }

    // --- Autoplay ---

    pub fn set_autoplay(&mut self, enabled: bool) -> Result<(), CarouselError> {
        if self.is_inert() {
            return Err(CarouselError::EmptyCollection);
        }
        if enabled && self.config.interval_ms == 0 {
            log::warn!("cannot start autoplay: interval is 0 ms");
            return Err(CarouselError::MisconfiguredInterval { interval_ms: 0 });
        }
        self.autoplay = enabled;
        self.sync_timer();
        Ok(())
    }

    /// Flip autoplay and return the resulting setting.
    pub fn toggle_autoplay(&mut self) -> bool {
        let target = !self.autoplay;
        match self.set_autoplay(target) {
            Ok(()) => target,
            Err(_) => self.autoplay,
        }
    }

    /// Change the autoplay interval. A running timer is re-armed with it.
    ///
    /// Zero turns autoplay off and is reported as misconfigured.
    pub fn set_interval(&mut self, interval_ms: u32) -> Result<(), CarouselError> {
        if interval_ms == 0 {
            log::warn!("autoplay disabled: interval set to 0 ms");
            self.autoplay = false;
            self.stop_timer();
            return Err(CarouselError::MisconfiguredInterval { interval_ms });
        }
        self.config.interval_ms = interval_ms;
        if self.timer.is_some() {
            self.restart_timer();
        }
        Ok(())
    }

    /// Deliver a scheduler tick. Ticks for anything but the live timer are dropped.
    pub fn on_timer(&mut self, id: TimerId) -> Option<IndexChange> {
        if self.timer != Some(id) {
            log::debug!("dropping stale autoplay tick {id:?}");
            return None;
        }
        // Autoplay always rewinds to the first slide, even under a clamp policy.
        let target = (self.index + 1) % self.slides.len();
        self.move_to(target, ChangeCause::Autoplay)
    }

    // --- Suspension ---

    pub fn suspend(&mut self) {
        self.suspend_for(SuspendReason::Manual);
    }

    pub fn resume(&mut self) {
        self.resume_for(SuspendReason::Manual);
    }

    /// Hold autoplay for `reason`. Hover, touch and focus are ignored when the
    /// matching `pause_on_*` flag is off.
    pub fn suspend_for(&mut self, reason: SuspendReason) {
        if self.is_inert() || !self.honours(reason) {
            return;
        }
        self.suspended |= reason.bit();
        self.stop_timer();
    }

    /// Release `reason`. Autoplay resumes once no reason is held.
    pub fn resume_for(&mut self, reason: SuspendReason) {
        if self.is_inert() {
            return;
        }
        self.suspended &= !reason.bit();
        self.sync_timer();
    }

    fn honours(&self, reason: SuspendReason) -> bool {
        match reason {
            SuspendReason::Hover => self.config.pause_on_hover,
            SuspendReason::Touch => self.config.pause_on_touch,
            SuspendReason::Focus => self.config.pause_on_focus,
            SuspendReason::Manual | SuspendReason::Offscreen => true,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn slides(&self) -> &[T] {
        &self.slides
    }

    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.slides.get(self.index)
    }

    /// True when built without slides.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay
    }

    #[must_use]
    pub fn is_suspended(&self) -> bool {
        self.suspended != 0
    }

    #[must_use]
    pub fn is_suspended_for(&self, reason: SuspendReason) -> bool {
        self.suspended & reason.bit() != 0
    }

    /// Whether an autoplay timer is armed right now.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    #[must_use]
    pub fn state(&self) -> CarouselState {
        CarouselState {
            current_index: self.index,
            autoplay_enabled: self.autoplay,
            is_suspended: self.is_suspended(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    // --- Render helpers ---

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        match self.config.loop_policy {
            LoopPolicy::Wrap => self.slides.len() > 1,
            LoopPolicy::Clamp => self.index > 0,
        }
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        match self.config.loop_policy {
            LoopPolicy::Wrap => self.slides.len() > 1,
            LoopPolicy::Clamp => self.index + 1 < self.slides.len(),
        }
    }

    /// Horizontal track offset for a one-slide-per-view layout.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn track_offset_percent(&self) -> f64 {
        -(self.index as f64) * 100.0
    }

    /// Share of the deck seen so far, counting the active slide.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_percent(&self) -> f64 {
        if self.is_inert() {
            return 0.0;
        }
        (self.index + 1) as f64 / self.slides.len() as f64 * 100.0
    }

    // --- Internals ---

    fn move_to(&mut self, target: usize, cause: ChangeCause) -> Option<IndexChange> {
        let previous = self.index;
        self.index = target;
        if previous == target {
            return None;
        }
        let change = IndexChange { previous, current: target, cause };
        if let Some(listener) = self.listener.as_mut() {
            listener(change);
        }
        Some(change)
    }

    fn should_run(&self) -> bool {
        !self.is_inert() && self.autoplay && self.suspended == 0 && self.config.interval_ms > 0
    }

    /// Arm or disarm the timer to match the current state without touching
    /// a timer that is already armed.
    fn sync_timer(&mut self) {
        if !self.should_run() {
            self.stop_timer();
        } else if self.timer.is_none() {
            self.start_timer();
        }
    }

    fn reset_countdown(&mut self) {
        if self.timer.is_some() {
            self.restart_timer();
        }
    }

    fn restart_timer(&mut self) {
        self.stop_timer();
        if self.should_run() {
            self.start_timer();
        }
    }

    fn start_timer(&mut self) {
        self.stop_timer();
        self.next_timer_id += 1;
        let id = TimerId(self.next_timer_id);
        self.scheduler.start(id, self.config.interval_ms);
        self.timer = Some(id);
    }

    fn stop_timer(&mut self) {
        if let Some(id) = self.timer.take() {
            self.scheduler.cancel(id);
        }
    }
}

impl<T> Carousel<T, ManualScheduler> {
    /// Move the virtual clock forward by `ms`, delivering every tick that
    /// falls due on the way. Returns the changes autoplay produced.
    pub fn advance_by(&mut self, ms: u64) -> Vec<IndexChange> {
        let until = self.scheduler.now_ms() + ms;
        let mut changes = Vec::new();
        while let Some(id) = self.scheduler.pop_due(until) {
            changes.extend(self.on_timer(id));
        }
        self.scheduler.set_now(until);
        changes
    }
}

impl<T, S: Scheduler> Drop for Carousel<T, S> {
    fn drop(&mut self) {
        self.stop_timer();
    }
}
