//! Input mapping for carousel controls.
//!
//! The host forwards raw key names and touch x-coordinates; this module
//! turns them into [`Command`]s the engine understands.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::SWIPE_THRESHOLD_PX;

/// Navigation intent, independent of where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Previous,
    Next,
    First,
    Last,
    GoTo(usize),
    ToggleAutoplay,
}

impl Command {
    /// Map a `KeyboardEvent.key` value. Unmapped keys return `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            " " | "Spacebar" => Some(Self::ToggleAutoplay),
            _ => None,
        }
    }

    /// Map a key pressed while the carousel region has focus.
    ///
    /// Keys that bubble up from a control inside the region keep their
    /// native meaning (Space on a dot presses the dot), so only keys aimed
    /// at the region itself are mapped.
    #[must_use]
    pub fn from_region_key(key: &str, target_is_region: bool) -> Option<Self> {
        if target_is_region { Self::from_key(key) } else { None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right to left: show the next slide.
    Left,
    /// Finger moved left to right: show the previous slide.
    Right,
}

impl SwipeDirection {
    #[must_use]
    pub fn command(self) -> Command {
        match self {
            Self::Left => Command::Next,
            Self::Right => Command::Previous,
        }
    }
}

/// Tracks one touch gesture across start/move/end.
#[derive(Debug, Clone, Copy)]
pub struct SwipeTracker {
    threshold_px: f64,
    start_x: Option<f64>,
    current_x: f64,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD_PX)
    }
}

impl SwipeTracker {
    #[must_use]
    pub fn new(threshold_px: f64) -> Self {
        Self { threshold_px, start_x: None, current_x: 0.0 }
    }

    pub fn touch_start(&mut self, x: f64) {
        self.start_x = Some(x);
        // A tap without movement must not read as a swipe.
        self.current_x = x;
    }

    pub fn touch_move(&mut self, x: f64) {
        if self.start_x.is_some() {
            self.current_x = x;
        }
    }

    /// Finish the gesture. Returns a direction when travel exceeds the threshold.
    pub fn touch_end(&mut self) -> Option<SwipeDirection> {
        let start_x = self.start_x.take()?;
        let travel = start_x - self.current_x;
        if travel.abs() <= self.threshold_px {
            return None;
        }
        if travel > 0.0 { Some(SwipeDirection::Left) } else { Some(SwipeDirection::Right) }
    }

    /// Drop an in-flight gesture, e.g. on `touchcancel`.
    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}

/// Tells keyboard focus apart from focus that follows a pointer press.
///
/// A mouse click on a control focuses it before the click fires. Only
/// keyboard focus should pause autoplay, since nothing releases a pause
/// taken on click until focus leaves the region.
#[derive(Debug, Clone, Copy, Default)]
pub struct FocusTracker {
    pointer_down: bool,
}

impl FocusTracker {
    pub fn pointer_down(&mut self) {
        self.pointer_down = true;
    }

    pub fn key_down(&mut self) {
        self.pointer_down = false;
    }

    /// Forget a pending pointer press once focus leaves the region.
    pub fn reset(&mut self) {
        self.pointer_down = false;
    }

    /// Consume a `focusin`. Returns true when the focus came from the keyboard.
    pub fn focus_in(&mut self) -> bool {
        !std::mem::take(&mut self.pointer_down)
    }
}
