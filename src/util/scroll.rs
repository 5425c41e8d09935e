//! Scroll-driven presentation math: navbar state, active section, parallax,
//! reveal-on-scroll, and the throttle that gates scroll handlers.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{
    ACTIVE_SECTION_OFFSET_PX, BACK_TO_TOP_AFTER_PX, FLOATING_CTA_AFTER_PX, NAVBAR_HEIGHT_PX, NAVBAR_SCROLLED_AFTER_PX,
    PARALLAX_RATE, REVEAL_MARGIN_PX,
};

/// Vertical extent of a page section in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

#[must_use]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_AFTER_PX
}

#[must_use]
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_AFTER_PX
}

#[must_use]
pub fn floating_cta_visible(scroll_y: f64) -> bool {
    scroll_y > FLOATING_CTA_AFTER_PX
}

/// The section under the marker line. When sections overlap the last one wins.
#[must_use]
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    let marker = scroll_y + ACTIVE_SECTION_OFFSET_PX;
    sections.iter().rev().find(|s| s.contains(marker)).map(|s| s.id.as_str())
}

/// Scroll target for an in-page anchor, clearing the fixed navbar.
#[must_use]
pub fn anchor_scroll_top(offset_top: f64) -> f64 {
    (offset_top - NAVBAR_HEIGHT_PX).max(0.0)
}

#[must_use]
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_RATE
}

/// Whether an element whose bounding box starts at `top` (viewport
/// coordinates) has risen far enough into a viewport `viewport_height` tall.
#[must_use]
pub fn is_revealed(top: f64, viewport_height: f64) -> bool {
    top < viewport_height - REVEAL_MARGIN_PX
}

/// Whether any part of a `[top, bottom)` box is inside the viewport.
#[must_use]
pub fn is_in_view(top: f64, bottom: f64, viewport_height: f64) -> bool {
    bottom > 0.0 && top < viewport_height
}

/// Leading-edge throttle: the first call runs, later calls inside the window
/// are dropped.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    window_ms: f64,
    last_run_ms: Option<f64>,
}

impl Throttle {
    #[must_use]
    pub fn new(window_ms: f64) -> Self {
        Self { window_ms, last_run_ms: None }
    }

    /// Returns `true` (and records the run) if a call at `now_ms` may proceed.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_run_ms {
            Some(last) if now_ms - last < self.window_ms => false,
            _ => {
                self.last_run_ms = Some(now_ms);
                true
            }
        }
    }
}
