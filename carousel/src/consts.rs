//! Shared numeric defaults for the carousel crate.

// ── Autoplay ────────────────────────────────────────────────────

/// Autoplay interval used when the configuration does not name one.
pub const DEFAULT_INTERVAL_MS: u32 = 5000;

// ── Touch ───────────────────────────────────────────────────────

/// Minimum horizontal travel, in CSS pixels, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;
