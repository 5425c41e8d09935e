//! `carousel::Scheduler` backed by browser intervals.
//!
//! Each started id owns one `gloo_timers` [`Interval`]; dropping the interval
//! clears it, so cancelling is removal from the map.

use std::collections::HashMap;
use std::rc::Rc;

use carousel::{Scheduler, TimerId};
use gloo_timers::callback::Interval;

pub struct IntervalScheduler {
    on_tick: Rc<dyn Fn(TimerId)>,
    live: HashMap<TimerId, Interval>,
}

impl IntervalScheduler {
    /// `on_tick` runs from the browser event loop with the id that fired.
    pub fn new(on_tick: impl Fn(TimerId) + 'static) -> Self {
        Self { on_tick: Rc::new(on_tick), live: HashMap::new() }
    }
}

impl Scheduler for IntervalScheduler {
    fn start(&mut self, id: TimerId, interval_ms: u32) {
        let on_tick = Rc::clone(&self.on_tick);
        let interval = Interval::new(interval_ms, move || on_tick(id));
        self.live.insert(id, interval);
    }

    fn cancel(&mut self, id: TimerId) {
        self.live.remove(&id);
    }
}
