//! Click ripple geometry.

#[cfg(test)]
#[path = "ripple_test.rs"]
mod ripple_test;

/// A circle centred on the click point, large enough to cover the button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

/// Button box in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Ripple {
    #[must_use]
    pub fn from_click(rect: Rect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            left: client_x - rect.left - size / 2.0,
            top: client_y - rect.top - size / 2.0,
        }
    }

    /// Inline style positioning the ripple inside its button.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "width: {size:.1}px; height: {size:.1}px; left: {left:.1}px; top: {top:.1}px;",
            size = self.size,
            left = self.left,
            top = self.top
        )
    }
}
