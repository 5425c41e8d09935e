//! # showcase
//!
//! Leptos + WASM frontend for a single-page agency marketing site.
//!
//! The page is server-rendered as a static shell and hydrated in the browser,
//! where scroll effects, count-up statistics, the contact form and three
//! carousels come alive. Slide navigation and autoplay are delegated to the
//! browser-independent `carousel` crate.

pub mod app;
pub mod components;
pub mod consts;
pub mod content;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
