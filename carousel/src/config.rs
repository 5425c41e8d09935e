//! Construction-time carousel configuration.
//!
//! Every field is optional in JSON form so a widget can declare only what it
//! changes, e.g. `{"loop": "clamp", "intervalMs": 4000}`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_INTERVAL_MS;
use crate::error::CarouselError;

/// What `next()` does on the last slide and `previous()` on the first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopPolicy {
    /// Wrap around to the other end.
    #[default]
    Wrap,
    /// Stay on the end slide.
    Clamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    pub interval_ms: u32,
    #[serde(rename = "loop")]
    pub loop_policy: LoopPolicy,
    /// Start autoplay at construction.
    pub autoplay: bool,
    pub pause_on_hover: bool,
    pub pause_on_touch: bool,
    pub pause_on_focus: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            loop_policy: LoopPolicy::Wrap,
            autoplay: true,
            pause_on_hover: true,
            pause_on_touch: true,
            pause_on_focus: true,
        }
    }
}

impl CarouselConfig {
    /// Parse a config from a JSON object. Missing keys take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, CarouselError> {
        serde_json::from_str(raw).map_err(|e| CarouselError::Config(e.to_string()))
    }

    #[must_use]
    pub fn with_interval_ms(mut self, interval_ms: u32) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    #[must_use]
    pub fn with_loop_policy(mut self, loop_policy: LoopPolicy) -> Self {
        self.loop_policy = loop_policy;
        self
    }

    #[must_use]
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    #[must_use]
    pub fn wraps(&self) -> bool {
        self.loop_policy == LoopPolicy::Wrap
    }
}
