//! # client
//!
//! Leptos + WASM frontend for the TrustSetu X TrustNet landing site.
//!
//! This crate contains the landing page, its components (tool modal, image
//! import, navigation, contact form), the plain state machines behind them,
//! and the image verification submit seam.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
