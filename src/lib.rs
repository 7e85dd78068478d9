//! # storefront
//!
//! Leptos + WASM storefront and admin console for a shoe catalog served by an
//! external REST backend.
//!
//! This crate contains pages, components, form validation, the REST client,
//! and the session layer that every guarded screen depends on. The `server`
//! crate renders it with `leptos_axum` and relays API traffic to the backend.

pub mod app;
pub mod components;
pub mod forms;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
