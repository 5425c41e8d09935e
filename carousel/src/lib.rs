//! Slide rotation engine for the marketing site carousels.
//!
//! The engine owns the active slide index, the loop/clamp policy, and the
//! single autoplay timer handle. It never touches the DOM: timers are reached
//! through the [`timer::Scheduler`] trait and rendering happens in whatever
//! listener the host registers with [`engine::Carousel::on_change`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | The [`engine::Carousel`] state machine |
//! | [`config`] | Construction-time configuration and loop policy |
//! | [`timer`] | Scheduler seam plus a deterministic virtual-clock scheduler |
//! | [`input`] | Key mapping, swipe tracking, and the command enum |
//! | [`error`] | Recoverable engine errors |
//! | [`consts`] | Shared defaults (interval, swipe threshold) |

pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod input;
pub mod timer;

pub use config::{CarouselConfig, LoopPolicy};
pub use engine::{Carousel, CarouselState, ChangeCause, IndexChange, SuspendReason};
pub use error::CarouselError;
pub use input::{Command, FocusTracker, SwipeDirection, SwipeTracker};
pub use timer::{ManualScheduler, Scheduler, TimerId};
