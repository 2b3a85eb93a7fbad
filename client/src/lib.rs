//! # gorunn-site
//!
//! Leptos + WASM frontend for the gorunn website: a landing page and the
//! documentation viewer. Rendered on the server (`ssr`) and hydrated in the
//! browser (`hydrate`).
//!
//! This crate contains pages, components, the section-viewer and metric
//! state models, and the GitHub repository metadata client.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating gorunn site");
    leptos::mount::hydrate_body(app::App);
}
