#[cfg(test)]
#[path = "carousel_view_test.rs"]
mod carousel_view_test;

use carousel::{Carousel, CarouselConfig, IndexChange, LoopPolicy, Scheduler};

/// Render snapshot of one carousel instance.
///
/// The engine lives outside the reactive graph; components hold this in an
/// `RwSignal` and refresh it after every engine call.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselView {
    pub index: usize,
    pub slide_count: usize,
    pub autoplay: bool,
    pub running: bool,
    pub can_previous: bool,
    pub can_next: bool,
    pub progress_percent: f64,
    pub offset_percent: f64,
    pub last_change: Option<IndexChange>,
}

impl CarouselView {
    /// Snapshot for server rendering, before any engine exists.
    #[allow(clippy::cast_precision_loss)]
    pub fn initial(slide_count: usize, config: &CarouselConfig) -> Self {
        let wraps = config.loop_policy == LoopPolicy::Wrap;
        Self {
            index: 0,
            slide_count,
            autoplay: config.autoplay && config.interval_ms > 0 && slide_count > 0,
            running: false,
            can_previous: wraps && slide_count > 1,
            can_next: slide_count > 1,
            progress_percent: if slide_count == 0 { 0.0 } else { 100.0 / slide_count as f64 },
            offset_percent: 0.0,
            last_change: None,
        }
    }

    pub fn from_engine<T, S: Scheduler>(engine: &Carousel<T, S>) -> Self {
        let mut view = Self::initial(engine.slide_count(), engine.config());
        view.sync_from(engine);
        view
    }

    /// Copy the engine's current state, keeping `last_change`.
    pub fn sync_from<T, S: Scheduler>(&mut self, engine: &Carousel<T, S>) {
        self.index = engine.index();
        self.slide_count = engine.slide_count();
        self.autoplay = engine.autoplay_enabled();
        self.running = engine.is_running();
        self.can_previous = engine.can_go_previous();
        self.can_next = engine.can_go_next();
        self.progress_percent = engine.progress_percent();
        self.offset_percent = engine.track_offset_percent();
    }

    pub fn apply_change(&mut self, change: IndexChange) {
        self.index = change.current;
        self.last_change = Some(change);
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.slide_count > 0 && self.index == index
    }

    /// Inline style for the slide track.
    pub fn track_style(&self) -> String {
        format!("transform: translateX({:.1}%);", self.offset_percent)
    }

    pub fn progress_style(&self) -> String {
        format!("width: {:.1}%;", self.progress_percent)
    }
}
