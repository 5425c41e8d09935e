//! HTTP routes: the server-rendered page plus its static bundle.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;

/// Load the Leptos configuration and build the router plus the address it
/// should listen on.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app() -> Result<(Router, SocketAddr), String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let addr = conf.leptos_options.site_addr;
    Ok((router(conf.leptos_options), addr))
}

/// The page is rendered by `showcase::app::shell` and hydrated in the
/// browser from the WASM bundle under `/pkg`.
pub fn router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(showcase::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || showcase::app::shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .with_state(leptos_options)
}
