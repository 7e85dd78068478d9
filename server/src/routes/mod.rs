//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the backend relay (`/api`, `/media`, `/auth`) with
//! Leptos SSR rendering of the storefront under a single Axum router. Built
//! WASM/JS/CSS assets are served from `/pkg`.

pub mod relay;

use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Backend relay routes plus the health check.
fn relay_routes(state: AppState) -> Router {
    let body_limit = state.config.body_limit_bytes;
    Router::new()
        .route("/api/{*rest}", any(relay::forward))
        .route("/media/{*rest}", any(relay::forward))
        .route("/auth/{*rest}", any(relay::forward))
        .layer(DefaultBodyLimit::max(body_limit))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full application: relay + Leptos SSR + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(storefront::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || storefront::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(relay_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
