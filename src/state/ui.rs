#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::scroll::{
    SectionBounds, active_section, back_to_top_visible, floating_cta_visible, navbar_scrolled, parallax_offset,
};

/// Page chrome driven by scrolling and the viewport.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub navbar_scrolled: bool,
    pub menu_open: bool,
    pub active_section: Option<String>,
    pub back_to_top_visible: bool,
    pub floating_cta_visible: bool,
    /// Hero background drift in pixels. Stays 0 when parallax is off.
    pub parallax_offset_px: f64,
    pub parallax_enabled: bool,
    pub reduced_motion: bool,
}

impl UiState {
    /// Recompute every scroll-derived field for a new scroll position.
    pub fn apply_scroll(&mut self, scroll_y: f64, sections: &[SectionBounds]) {
        self.navbar_scrolled = navbar_scrolled(scroll_y);
        self.back_to_top_visible = back_to_top_visible(scroll_y);
        self.floating_cta_visible = floating_cta_visible(scroll_y);
        self.active_section = active_section(scroll_y, sections).map(str::to_owned);
        self.parallax_offset_px = if self.parallax_enabled && !self.reduced_motion {
            parallax_offset(scroll_y)
        } else {
            0.0
        };
    }

    /// Parallax runs on desktop viewports only, and never under reduced motion.
    pub fn apply_viewport(&mut self, mobile: bool, reduced_motion: bool) {
        self.parallax_enabled = !mobile;
        self.reduced_motion = reduced_motion;
        if !self.parallax_enabled || reduced_motion {
            self.parallax_offset_px = 0.0;
        }
    }

    #[must_use]
    pub fn is_active_section(&self, id: &str) -> bool {
        self.active_section.as_deref() == Some(id)
    }
}
