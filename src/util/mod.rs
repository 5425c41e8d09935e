//! Utility helpers shared across site components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure math lives in `scroll`, `counter` and `ripple` so it can be tested
//! natively. `viewport` and `interval_scheduler` hold the browser-facing
//! pieces and degrade to inert fallbacks outside the `hydrate` build.

pub mod counter;
#[cfg(feature = "hydrate")]
pub mod interval_scheduler;
pub mod ripple;
pub mod scroll;
pub mod viewport;
