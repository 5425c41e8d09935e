//! Count-up animation for statistics and case-study metrics.
//!
//! A display value such as `98%` or `10K+` is split into the number to
//! animate and the text around it, so the formatting survives every frame.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::consts::{COUNTER_MIN_STEP_MS, STATS_STAGGER_MS};

/// A display value broken into `prefix`, number, `suffix`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterTarget {
    pub prefix: String,
    pub value: u32,
    pub suffix: String,
}

impl CounterTarget {
    /// Parse a display string. Separators between digits are dropped
    /// (`1,200` reads as 1200). Returns `None` when there is no digit.
    #[must_use]
    pub fn parse(display: &str) -> Option<Self> {
        let first = display.find(|c: char| c.is_ascii_digit())?;
        let last = display.rfind(|c: char| c.is_ascii_digit())?;
        let digits: String = display[first..=last].chars().filter(char::is_ascii_digit).collect();
        let Ok(value) = digits.parse::<u32>() else {
            return None;
        };
        Some(Self {
            prefix: display[..first].to_owned(),
            value,
            suffix: display[last + 1..].to_owned(),
        })
    }

    /// Render `value` with this target's surrounding text.
    #[must_use]
    pub fn format(&self, value: u32) -> String {
        format!("{}{value}{}", self.prefix, self.suffix)
    }
}

/// Linear count from `start` to `end` over `duration_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterAnimation {
    pub start: u32,
    pub end: u32,
    pub duration_ms: u32,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(start: u32, end: u32, duration_ms: u32) -> Self {
        Self { start, end, duration_ms }
    }

    /// Tick period: one unit per step, never faster than the minimum step.
    #[must_use]
    pub fn step_ms(&self) -> u32 {
        let range = self.end.abs_diff(self.start);
        if range == 0 {
            return COUNTER_MIN_STEP_MS;
        }
        (self.duration_ms / range).max(COUNTER_MIN_STEP_MS)
    }

    /// Value shown `elapsed_ms` after the animation started. Negative elapsed
    /// time (a pending stagger delay) shows the start value.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn value_at(&self, elapsed_ms: f64) -> u32 {
        if self.duration_ms == 0 {
            return self.end;
        }
        let duration = f64::from(self.duration_ms);
        let remaining = ((duration - elapsed_ms) / duration).clamp(0.0, 1.0);
        let range = f64::from(self.end) - f64::from(self.start);
        let value = (f64::from(self.end) - remaining * range).round();
        let (lo, hi) = (self.start.min(self.end), self.start.max(self.end));
        (value.max(0.0) as u32).clamp(lo, hi)
    }

    #[must_use]
    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.value_at(elapsed_ms) == self.end
    }
}

/// Start delay for the `index`-th statistic in a row.
#[must_use]
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(STATS_STAGGER_MS))
}
