//! Browser viewport queries.
//!
//! Every function has a fallback outside the `hydrate` build so components
//! can call them unconditionally during server rendering.

use crate::util::scroll::SectionBounds;
#[cfg(feature = "hydrate")]
use crate::util::scroll::anchor_scroll_top;
#[cfg(feature = "hydrate")]
use crate::consts::MOBILE_MAX_WIDTH_PX;

/// Milliseconds since the epoch, as the browser clock reports it.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Current vertical scroll position of the document.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().map_or(0.0, |w| w.scroll_y().unwrap_or(0.0))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

pub fn viewport_height() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_height().map_or(None, |v| v.as_f64()))
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

pub fn viewport_width() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().map_or(None, |v| v.as_f64()))
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// True on phone-sized viewports. Unknown widths count as desktop.
pub fn is_mobile_viewport() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let width = viewport_width();
        width > 0.0 && width <= MOBILE_MAX_WIDTH_PX
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Honour the OS-level "reduce motion" setting.
pub fn prefers_reduced_motion() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.match_media("(prefers-reduced-motion: reduce)") {
            Ok(Some(mq)) => mq.matches(),
            _ => false,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Document-space bounds for each section id present on the page.
pub fn section_bounds(ids: &[String]) -> Vec<SectionBounds> {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        let scrolled = scroll_y();
        ids.iter()
            .filter_map(|id| {
                let rect = doc.get_element_by_id(id)?.get_bounding_client_rect();
                Some(SectionBounds { id: id.clone(), top: rect.top() + scrolled, height: rect.height() })
            })
            .collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ids = ids;
        Vec::new()
    }
}

/// Smooth-scroll so the section's top sits just below the fixed navbar.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(target) = window.document().and_then(|d| d.get_element_by_id(id)) else {
            return;
        };
        let top = target.get_bounding_client_rect().top() + scroll_y();
        let options = web_sys::ScrollToOptions::new();
        options.set_top(anchor_scroll_top(top));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _id = id;
    }
}

/// Smooth-scroll back to the top of the page.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}
