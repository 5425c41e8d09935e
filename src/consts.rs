//! Shared numeric constants for the site.

// ── Scroll ──────────────────────────────────────────────────────

/// Scroll depth past which the navbar switches to its compact style.
pub const NAVBAR_SCROLLED_AFTER_PX: f64 = 100.0;

/// Scroll depth past which the back-to-top button appears.
pub const BACK_TO_TOP_AFTER_PX: f64 = 300.0;

/// Scroll depth past which the floating "schedule a meeting" button appears.
pub const FLOATING_CTA_AFTER_PX: f64 = 400.0;

/// Marker offset below the viewport top used to pick the active section.
pub const ACTIVE_SECTION_OFFSET_PX: f64 = 100.0;

/// Height of the fixed navbar; anchor jumps land this far above the target.
pub const NAVBAR_HEIGHT_PX: f64 = 80.0;

/// Background drift per scrolled pixel.
pub const PARALLAX_RATE: f64 = -0.3;

/// How far above the viewport bottom an element must rise to be revealed.
pub const REVEAL_MARGIN_PX: f64 = 50.0;

/// Minimum gap between two runs of a throttled scroll handler.
pub const SCROLL_THROTTLE_MS: f64 = 100.0;

/// Widest viewport treated as mobile.
pub const MOBILE_MAX_WIDTH_PX: f64 = 768.0;

// ── Counters ────────────────────────────────────────────────────

/// Shortest tick between two counter updates.
pub const COUNTER_MIN_STEP_MS: u32 = 50;

/// Duration of the about-section statistics count-up.
pub const STATS_COUNT_MS: u32 = 2000;

/// Stagger between consecutive statistics.
pub const STATS_STAGGER_MS: u32 = 100;

/// Duration of a case-study metric count-up.
pub const METRIC_COUNT_MS: u32 = 1000;

// ── Feedback ────────────────────────────────────────────────────

/// Lifetime of a toast notification.
pub const TOAST_TTL_MS: u32 = 5000;

/// Lifetime of a statistic tooltip.
pub const TOOLTIP_TTL_MS: u32 = 4000;

/// Lifetime of a button ripple.
pub const RIPPLE_TTL_MS: u32 = 600;

/// Simulated contact form round trip.
pub const SUBMIT_DELAY_MS: u32 = 2000;
