//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so each component depends on a small model.
//! Every model is plain data held in an `RwSignal` and provided via context
//! (page-wide state) or owned by the component that renders it
//! (per-carousel views).

pub mod carousel_view;
pub mod contact;
pub mod notifications;
pub mod ui;
